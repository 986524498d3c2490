use std::sync::LazyLock;

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use ratatui::layout::Position;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::style::Styled;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::widgets::widget::Component;
use crate::widgets::widget::ComponentRenderCtx;

#[derive(Debug, Clone)]
pub struct TextInputStyle<'s> {
	/// |<marker0>Input<marker1>|
	pub markers: [Span<'s>; 2],
	/// Style override
	pub style: Option<Style>,
	/// Selected style override
	pub style_selected: Option<Style>,
}

impl Default for TextInputStyle<'_> {
	fn default() -> Self {
		Self {
			markers: ["[".into(), "]".into()],
			style: Default::default(),
			style_selected: Default::default(),
		}
	}
}

impl TextInputStyle<'_> {
	pub fn style(&self) -> Style {
		self.style.unwrap_or_default()
	}

	pub fn style_selected(&self) -> Style {
		match self.style_selected {
			Some(style) => style,
			None => Style::default().fg(Color::Yellow),
		}
	}
}

static DEFAULT_STYLE: LazyLock<TextInputStyle> = LazyLock::new(TextInputStyle::default);

/// Single-line text editor. The cursor moves over grapheme clusters, not
/// bytes or chars, so combined and wide input stays intact.
pub struct TextInput<'s> {
	value: String,
	/// Grapheme index of the cursor.
	cursor: usize,
	placeholder: String,

	style: &'s TextInputStyle<'s>,
}

impl<'s> TextInput<'s> {
	pub fn new() -> Self {
		Self {
			value: String::default(),
			cursor: 0,
			placeholder: String::default(),
			style: &DEFAULT_STYLE,
		}
	}

	pub fn style(mut self, style: &'s TextInputStyle) -> Self {
		self.style = style;
		self
	}

	pub fn with_value(mut self, value: String) -> Self {
		self.cursor = value.graphemes(true).count();
		self.value = value;
		self
	}

	pub fn with_placeholder(mut self, placeholder: &str) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn set_value(&mut self, value: String) {
		self.cursor = value.graphemes(true).count();
		self.value = value;
	}

	fn grapheme_count(&self) -> usize {
		self.value.graphemes(true).count()
	}

	/// Byte offset of the grapheme at `index`, or the end of the string.
	fn byte_index(&self, index: usize) -> usize {
		self.value
			.grapheme_indices(true)
			.nth(index)
			.map(|(offset, _)| offset)
			.unwrap_or(self.value.len())
	}

	fn insert_char(&mut self, c: char) {
		let at = self.byte_index(self.cursor);
		self.value.insert(at, c);
		self.cursor += 1;
	}

	fn delete_before_cursor(&mut self) {
		if self.cursor == 0 {
			return;
		}
		let from = self.byte_index(self.cursor - 1);
		let to = self.byte_index(self.cursor);
		self.value.replace_range(from..to, "");
		self.cursor -= 1;
	}

	fn delete_at_cursor(&mut self) {
		if self.cursor >= self.grapheme_count() {
			return;
		}
		let from = self.byte_index(self.cursor);
		let to = self.byte_index(self.cursor + 1);
		self.value.replace_range(from..to, "");
	}
}

impl Component for TextInput<'_> {
	fn input(&mut self, key: &KeyEvent) -> bool {
		let ctrl_pressed = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Backspace => self.delete_before_cursor(),
			KeyCode::Delete => self.delete_at_cursor(),
			// Movement
			KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
			KeyCode::Char('b') if ctrl_pressed => self.cursor = self.cursor.saturating_sub(1),
			KeyCode::Right => self.cursor = std::cmp::min(self.cursor + 1, self.grapheme_count()),
			KeyCode::Char('f') if ctrl_pressed => {
				self.cursor = std::cmp::min(self.cursor + 1, self.grapheme_count())
			}
			KeyCode::Home => self.cursor = 0,
			KeyCode::Char('a') if ctrl_pressed => self.cursor = 0,
			KeyCode::End => self.cursor = self.grapheme_count(),
			KeyCode::Char('e') if ctrl_pressed => self.cursor = self.grapheme_count(),
			KeyCode::Char('u') if ctrl_pressed => {
				self.value.clear();
				self.cursor = 0;
			}
			KeyCode::Char(c) if !ctrl_pressed => self.insert_char(c),
			_ => return false,
		}
		true
	}

	fn render(&self, frame: &mut Frame, ctx: &mut ComponentRenderCtx) {
		let style = if ctx.selected {
			self.style.style_selected()
		} else {
			self.style.style()
		};

		let text: Span = if self.value.is_empty() && !self.placeholder.is_empty() {
			Span::styled(
				self.placeholder.as_str(),
				Style::default().fg(Color::DarkGray),
			)
		} else {
			Span::from(self.value.as_str())
		};

		let used = self.style.markers[0].width()
			+ self.style.markers[1].width()
			+ text.width();
		let spacer = Span::raw(" ".repeat((ctx.area.width as usize).saturating_sub(used)));

		let line = Line::from(vec![
			self.style.markers[0].clone(),
			text,
			spacer,
			self.style.markers[1].clone(),
		])
		.set_style(style);
		frame.render_widget(line, ctx.area);

		if ctx.selected {
			let before = &self.value[..self.byte_index(self.cursor)];
			frame.set_cursor_position(Position::new(
				ctx.area.x
					+ self.style.markers[0].width() as u16
					+ UnicodeWidthStr::width(before) as u16,
				ctx.area.y,
			));
		}
	}

	fn height(&self) -> u16 {
		1
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn press(input: &mut TextInput, code: KeyCode) -> bool {
		input.input(&KeyEvent::new(code, KeyModifiers::NONE))
	}

	fn type_str(input: &mut TextInput, text: &str) {
		for c in text.chars() {
			press(input, KeyCode::Char(c));
		}
	}

	#[test]
	fn test_typing_and_backspace() {
		let mut input = TextInput::new();
		type_str(&mut input, "hello");
		assert_eq!(input.value(), "hello");
		press(&mut input, KeyCode::Backspace);
		assert_eq!(input.value(), "hell");
	}

	#[test]
	fn test_insert_in_the_middle() {
		let mut input = TextInput::new().with_value("ac".into());
		press(&mut input, KeyCode::Left);
		press(&mut input, KeyCode::Char('b'));
		assert_eq!(input.value(), "abc");
	}

	#[test]
	fn test_grapheme_safe_delete() {
		let mut input = TextInput::new().with_value("aé日".into());
		press(&mut input, KeyCode::Backspace);
		assert_eq!(input.value(), "aé");
		press(&mut input, KeyCode::Backspace);
		assert_eq!(input.value(), "a");
	}

	#[test]
	fn test_unhandled_keys_bubble_up() {
		let mut input = TextInput::new();
		assert!(!press(&mut input, KeyCode::Esc));
		assert!(!press(&mut input, KeyCode::Enter));
		assert!(!press(&mut input, KeyCode::Tab));
	}
}
