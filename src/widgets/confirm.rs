use std::sync::LazyLock;

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use ratatui::layout::Constraint;
use ratatui::layout::Flex;
use ratatui::layout::HorizontalAlignment;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

use crate::widgets::widget::Component;
use crate::widgets::widget::ComponentRenderCtx;

#[derive(Clone)]
pub struct ConfirmStyle<'s> {
	block: Block<'s>,
	/// Unselected, Selected
	buttons: [Style; 2],
	spacing: u16,
}

impl Default for ConfirmStyle<'_> {
	fn default() -> Self {
		Self {
			block: Block::bordered()
				.bg(Color::from_u32(0x1f1f1f))
				.title_alignment(HorizontalAlignment::Center),
			buttons: [
				Style::default().fg(Color::White),
				Style::default().bg(Color::White).fg(Color::Black).bold(),
			],
			spacing: 2,
		}
	}
}

static DEFAULT_STYLE: LazyLock<ConfirmStyle> = LazyLock::new(ConfirmStyle::default);

/// Centered Yes/No dialog. Owners keep feeding it input and poll
/// [`Confirm::submit`] for the answer.
pub struct Confirm<'s> {
	style: &'s ConfirmStyle<'s>,
	title: String,
	message: String,
	labels: [&'static str; 2],
	selected: usize,
	submit: Option<bool>,
}

impl<'s> Confirm<'s> {
	pub fn new(title: String, message: String) -> Self {
		Self {
			style: &DEFAULT_STYLE,
			title,
			message,
			labels: ["Yes", "No"],
			selected: 1,
			submit: None,
		}
	}

	pub fn style(mut self, style: &'s ConfirmStyle) -> Self {
		self.style = style;
		self
	}

	pub fn labels(mut self, labels: [&'static str; 2]) -> Self {
		self.labels = labels;
		self
	}

	pub fn submit(&self) -> Option<bool> {
		self.submit
	}
}

impl Component for Confirm<'_> {
	fn input(&mut self, key: &KeyEvent) -> bool {
		match key.code {
			// Movement
			KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => self.selected = 1,
			KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => self.selected = 0,

			// Validate
			KeyCode::Char('y') => self.submit = Some(true),
			KeyCode::Char('n') | KeyCode::Esc => self.submit = Some(false),
			KeyCode::Enter => self.submit = Some(self.selected == 0),

			_ => return false,
		}
		true
	}

	fn render(&self, frame: &mut Frame, ctx: &mut ComponentRenderCtx) {
		let horizontal = Layout::horizontal([Constraint::Percentage(40)]).flex(Flex::Center);
		let [area] = horizontal.areas(ctx.area);

		// Message lines + blank line + buttons + border.
		let message_height = (self.message.lines().count() as u16).max(1);
		let vertical =
			Layout::vertical([Constraint::Length(message_height + 4)]).flex(Flex::Center);
		let [area] = vertical.areas(area);

		frame.render_widget(Clear, area);
		let block = self.style.block.clone().title(self.title.clone());
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let message_area = Rect {
			height: inner.height.saturating_sub(2),
			..inner
		};
		frame.render_widget(
			Paragraph::new(self.message.as_str())
				.wrap(Wrap { trim: false })
				.centered(),
			message_area,
		);

		let style_yes = self.style.buttons[(self.selected == 0) as usize];
		let style_no = self.style.buttons[(self.selected == 1) as usize];
		let buttons = Line::from(vec![
			Span::styled(&self.labels[0][..1], style_yes.underlined()),
			Span::styled(&self.labels[0][1..], style_yes),
			" ".repeat(self.style.spacing as usize).into(),
			Span::styled(&self.labels[1][..1], style_no.underlined()),
			Span::styled(&self.labels[1][1..], style_no),
		]);

		let button_width = buttons.width() as u16;
		let button_area = Rect {
			x: (inner.x + inner.width / 2).saturating_sub(button_width / 2),
			y: inner.y + inner.height.saturating_sub(1),
			width: button_width.min(inner.width),
			height: 1,
		};
		frame.render_widget(&buttons, button_area);
	}

	fn height(&self) -> u16 {
		self.message.lines().count() as u16 + 4
	}
}
