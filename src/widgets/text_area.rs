use std::cell::Cell;
use std::sync::LazyLock;

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use ratatui::layout::Position;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Text;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::widgets::widget::Component;
use crate::widgets::widget::ComponentRenderCtx;

#[derive(Debug, Clone, Default)]
pub struct TextAreaStyle {
	/// Style override
	pub style: Option<Style>,
	/// Selected style override
	pub style_selected: Option<Style>,
}

impl TextAreaStyle {
	pub fn style(&self) -> Style {
		self.style.unwrap_or_default()
	}

	pub fn style_selected(&self) -> Style {
		match self.style_selected {
			Some(style) => style,
			None => Style::default().fg(Color::White),
		}
	}
}

static DEFAULT_STYLE: LazyLock<TextAreaStyle> = LazyLock::new(TextAreaStyle::default);

fn grapheme_count(line: &str) -> usize {
	line.graphemes(true).count()
}

/// Byte offset of the grapheme at `index`, or the end of the line.
fn byte_index(line: &str, index: usize) -> usize {
	line.grapheme_indices(true)
		.nth(index)
		.map(|(offset, _)| offset)
		.unwrap_or(line.len())
}

/// Multi-line text editor used for journal content. Same grapheme-based
/// cursor model as [`TextInput`](crate::widgets::text_input::TextInput),
/// plus line splitting and joining.
pub struct TextArea<'s> {
	lines: Vec<String>,
	row: usize,
	/// Grapheme index of the cursor within the current line.
	col: usize,
	placeholder: String,

	scroll: Cell<usize>,
	style: &'s TextAreaStyle,
}

impl<'s> TextArea<'s> {
	pub fn new() -> Self {
		Self {
			lines: vec![String::new()],
			row: 0,
			col: 0,
			placeholder: String::default(),
			scroll: Cell::default(),
			style: &DEFAULT_STYLE,
		}
	}

	pub fn style(mut self, style: &'s TextAreaStyle) -> Self {
		self.style = style;
		self
	}

	pub fn with_text(mut self, text: &str) -> Self {
		self.lines = text.split('\n').map(str::to_owned).collect();
		if self.lines.is_empty() {
			self.lines.push(String::new());
		}
		self.row = self.lines.len() - 1;
		self.col = grapheme_count(&self.lines[self.row]);
		self
	}

	pub fn with_placeholder(mut self, placeholder: &str) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	pub fn value(&self) -> String {
		self.lines.join("\n")
	}

	pub fn is_blank(&self) -> bool {
		self.lines.iter().all(|line| line.is_empty())
	}

	fn current_len(&self) -> usize {
		grapheme_count(&self.lines[self.row])
	}

	fn insert_char(&mut self, c: char) {
		let at = byte_index(&self.lines[self.row], self.col);
		self.lines[self.row].insert(at, c);
		self.col += 1;
	}

	fn break_line(&mut self) {
		let at = byte_index(&self.lines[self.row], self.col);
		let tail = self.lines[self.row].split_off(at);
		self.lines.insert(self.row + 1, tail);
		self.row += 1;
		self.col = 0;
	}

	fn delete_before_cursor(&mut self) {
		if self.col > 0 {
			let line = &mut self.lines[self.row];
			let from = byte_index(line, self.col - 1);
			let to = byte_index(line, self.col);
			line.replace_range(from..to, "");
			self.col -= 1;
		} else if self.row > 0 {
			let tail = self.lines.remove(self.row);
			self.row -= 1;
			self.col = self.current_len();
			self.lines[self.row].push_str(&tail);
		}
	}

	fn delete_at_cursor(&mut self) {
		if self.col < self.current_len() {
			let line = &mut self.lines[self.row];
			let from = byte_index(line, self.col);
			let to = byte_index(line, self.col + 1);
			line.replace_range(from..to, "");
		} else if self.row + 1 < self.lines.len() {
			let tail = self.lines.remove(self.row + 1);
			self.lines[self.row].push_str(&tail);
		}
	}

	fn move_left(&mut self) {
		if self.col > 0 {
			self.col -= 1;
		} else if self.row > 0 {
			self.row -= 1;
			self.col = self.current_len();
		}
	}

	fn move_right(&mut self) {
		if self.col < self.current_len() {
			self.col += 1;
		} else if self.row + 1 < self.lines.len() {
			self.row += 1;
			self.col = 0;
		}
	}

	fn move_vertical(&mut self, down: bool) {
		if down {
			if self.row + 1 < self.lines.len() {
				self.row += 1;
			}
		} else {
			self.row = self.row.saturating_sub(1);
		}
		self.col = std::cmp::min(self.col, self.current_len());
	}
}

impl Component for TextArea<'_> {
	fn input(&mut self, key: &KeyEvent) -> bool {
		let ctrl_pressed = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Enter => self.break_line(),
			KeyCode::Backspace => self.delete_before_cursor(),
			KeyCode::Delete => self.delete_at_cursor(),
			// Movement
			KeyCode::Left => self.move_left(),
			KeyCode::Char('b') if ctrl_pressed => self.move_left(),
			KeyCode::Right => self.move_right(),
			KeyCode::Char('f') if ctrl_pressed => self.move_right(),
			KeyCode::Up => self.move_vertical(false),
			KeyCode::Char('p') if ctrl_pressed => self.move_vertical(false),
			KeyCode::Down => self.move_vertical(true),
			KeyCode::Char('n') if ctrl_pressed => self.move_vertical(true),
			KeyCode::Home => self.col = 0,
			KeyCode::Char('a') if ctrl_pressed => self.col = 0,
			KeyCode::End => self.col = self.current_len(),
			KeyCode::Char('e') if ctrl_pressed => self.col = self.current_len(),
			KeyCode::Char(c) if !ctrl_pressed => self.insert_char(c),
			_ => return false,
		}
		true
	}

	fn render(&self, frame: &mut Frame, ctx: &mut ComponentRenderCtx) {
		let area = ctx.area;
		let visible = area.height as usize;
		if visible == 0 {
			return;
		}

		// Keep the cursor row inside the window.
		let mut top = self.scroll.get().min(self.lines.len().saturating_sub(1));
		if self.row < top {
			top = self.row;
		} else if self.row >= top + visible {
			top = self.row + 1 - visible;
		}
		self.scroll.set(top);

		let style = if ctx.selected {
			self.style.style_selected()
		} else {
			self.style.style()
		};

		let text: Text = if self.is_blank() && !self.placeholder.is_empty() && !ctx.selected {
			Text::from(Line::styled(
				self.placeholder.as_str(),
				Style::default().fg(Color::DarkGray),
			))
		} else {
			self.lines
				.iter()
				.skip(top)
				.take(visible)
				.map(|line| Line::from(line.as_str()))
				.collect()
		};
		frame.render_widget(Paragraph::new(text).style(style), area);

		if ctx.selected {
			let line = &self.lines[self.row];
			let before = &line[..byte_index(line, self.col)];
			frame.set_cursor_position(Position::new(
				area.x + UnicodeWidthStr::width(before) as u16,
				area.y + (self.row - top) as u16,
			));
		}
	}

	fn height(&self) -> u16 {
		self.lines.len() as u16
	}
}
