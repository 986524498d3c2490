use std::sync::LazyLock;

use chrono::Utc;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use ratatui::layout::Constraint;
use ratatui::layout::Flex;
use ratatui::layout::HorizontalAlignment;
use ratatui::layout::Layout;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::data::entry::Entry;
use crate::style::ACCENT;
use crate::style::HELP_LINE_BG;
use crate::widgets::confirm::Confirm;
use crate::widgets::text_area::TextArea;
use crate::widgets::text_area::TextAreaStyle;
use crate::widgets::text_input::TextInput;
use crate::widgets::text_input::TextInputStyle;
use crate::widgets::widget::Component;
use crate::widgets::widget::ComponentRenderCtx;

static TITLE_INPUT_STYLE: LazyLock<TextInputStyle> = LazyLock::new(|| TextInputStyle {
	markers: ["".into(), "".into()],
	style: Some(Style::default().fg(ACCENT)),
	style_selected: Some(Style::default().fg(ACCENT).bold()),
});
static CONTENT_STYLE: LazyLock<TextAreaStyle> = LazyLock::new(|| TextAreaStyle {
	style: Some(Style::default().fg(Color::from_u32(0xd0d0d0))),
	style_selected: Some(Style::default().fg(Color::White)),
});

#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus {
	Title,
	Content,
}

/// What a finished sheet hands back to the home screen.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetResult {
	Create { title: String, content: String },
	Update(Entry),
}

/// Modal editor for one entry, in create or edit mode.
///
/// `input` returns false once the sheet is done; the owner then calls
/// [`EntrySheet::submit`], where `None` means the input was discarded.
pub struct EntrySheet {
	/// `Some` puts the sheet in edit mode; id and creation date of the
	/// snapshot survive into the submitted update.
	snapshot: Option<Entry>,
	title: TextInput<'static>,
	content: TextArea<'static>,
	focus: Focus,
	discard: Option<Confirm<'static>>,
	save: bool,
}

impl EntrySheet {
	pub fn create() -> Self {
		Self {
			snapshot: None,
			title: TextInput::new()
				.with_placeholder("Title")
				.style(&TITLE_INPUT_STYLE),
			content: TextArea::new()
				.with_placeholder("Craft your personal diary")
				.style(&CONTENT_STYLE),
			focus: Focus::Title,
			discard: None,
			save: false,
		}
	}

	pub fn edit(entry: Entry) -> Self {
		Self {
			title: TextInput::new()
				.with_value(entry.title.clone())
				.with_placeholder("Title")
				.style(&TITLE_INPUT_STYLE),
			content: TextArea::new()
				.with_text(&entry.content)
				.style(&CONTENT_STYLE),
			snapshot: Some(entry),
			focus: Focus::Title,
			discard: None,
			save: false,
		}
	}

	/// Only a modified edit snapshot warrants a discard prompt; cancelling
	/// a new entry always discards silently.
	fn dirty(&self) -> bool {
		match &self.snapshot {
			Some(snapshot) => {
				snapshot.title != self.title.value() || snapshot.content != self.content.value()
			}
			None => false,
		}
	}

	pub fn submit(&self) -> Option<SheetResult> {
		if !self.save {
			return None;
		}
		match &self.snapshot {
			Some(snapshot) => {
				let mut entry = snapshot.clone();
				entry.title = self.title.value().to_owned();
				entry.content = self.content.value();
				Some(SheetResult::Update(entry))
			}
			None => Some(SheetResult::Create {
				title: self.title.value().to_owned(),
				content: self.content.value(),
			}),
		}
	}
}

impl Component for EntrySheet {
	fn input(&mut self, key: &KeyEvent) -> bool {
		let ctrl_pressed = key.modifiers.contains(KeyModifiers::CONTROL);

		// Discard confirmation
		if let Some(confirm) = &mut self.discard {
			confirm.input(key);
			match confirm.submit() {
				Some(true) => {
					self.save = false;
					return false;
				}
				Some(false) => self.discard = None,
				None => {}
			}
			return true;
		}

		match key.code {
			// Save
			KeyCode::Char('s') if ctrl_pressed => {
				self.save = true;
				return false;
			}
			// Cancel
			KeyCode::Esc => {
				if self.dirty() {
					self.discard = Some(Confirm::new(
						"Discard Changes?".into(),
						"Close without saving your edits?".into(),
					));
				} else {
					self.save = false;
					return false;
				}
			}
			KeyCode::Tab | KeyCode::BackTab => {
				self.focus = match self.focus {
					Focus::Title => Focus::Content,
					Focus::Content => Focus::Title,
				}
			}
			KeyCode::Enter if self.focus == Focus::Title => self.focus = Focus::Content,
			_ => {
				match self.focus {
					Focus::Title => self.title.input(key),
					Focus::Content => self.content.input(key),
				};
			}
		}
		true
	}

	fn render(&self, frame: &mut Frame, ctx: &mut ComponentRenderCtx) {
		let horizontal = Layout::horizontal([Constraint::Percentage(70)]).flex(Flex::Center);
		let vertical = Layout::vertical([Constraint::Percentage(80)]).flex(Flex::Center);
		let [area] = horizontal.areas(ctx.area);
		let [area] = vertical.areas(area);

		let title = if self.snapshot.is_some() {
			" Edit Entry "
		} else {
			" New Entry "
		};
		let block = Block::bordered()
			.border_type(BorderType::Thick)
			.title(title.fg(ACCENT).bold())
			.title_alignment(HorizontalAlignment::Center)
			.bg(Color::from_u32(0x17131f));
		let inner = block.inner(area);
		frame.render_widget(Clear, area);
		frame.render_widget(block, area);

		let [title_area, date_area, _, content_area, help_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(inner);

		ctx.area = title_area;
		ctx.selected = self.focus == Focus::Title && self.discard.is_none();
		self.title.render(frame, ctx);

		let date = match &self.snapshot {
			Some(snapshot) => snapshot.pretty_date(),
			None => Utc::now().format("%d/%m/%Y").to_string(),
		};
		frame.render_widget(Line::from(date.fg(Color::DarkGray)), date_area);

		ctx.area = content_area;
		ctx.selected = self.focus == Focus::Content && self.discard.is_none();
		self.content.render(frame, ctx);

		let help = Line::from(vec![
			" tab".bold().fg(Color::Green),
			" (switch field) ".into(),
			"C-s".bold().fg(Color::Green),
			" (save) ".into(),
			"esc".bold().fg(Color::Green),
			" (cancel)".into(),
		])
		.bg(HELP_LINE_BG);
		frame.render_widget(help, help_area);

		// Discard confirmation
		if let Some(confirm) = &self.discard {
			ctx.area = frame.area();
			confirm.render(frame, ctx);
		}
	}

	fn height(&self) -> u16 {
		0
	}
}
