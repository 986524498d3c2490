use std::time::Duration;
use std::time::Instant;

use ratatui::layout::Constraint;
use ratatui::layout::Flex;
use ratatui::layout::Layout;
use ratatui::style::Color;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Text;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::style::ACCENT;

/// One-shot delay before the home screen appears. Not cancellable.
pub const SPLASH_DURATION: Duration = Duration::from_secs(5);

pub struct Splash {
	shown_at: Instant,
}

impl Splash {
	pub fn new() -> Self {
		Self {
			shown_at: Instant::now(),
		}
	}

	pub fn finished(&self) -> bool {
		self.shown_at.elapsed() >= SPLASH_DURATION
	}

	/// Time left until the main screen, used as the event poll timeout.
	pub fn remaining(&self) -> Duration {
		SPLASH_DURATION.saturating_sub(self.shown_at.elapsed())
	}

	pub fn render(&self, frame: &mut Frame) {
		let text = Text::from(vec![
			Line::from("󰂺".fg(ACCENT)),
			Line::from(""),
			Line::from("Journali".fg(ACCENT).bold()),
			Line::from(""),
			Line::from("Your thoughts, your story".fg(Color::from_u32(0xb3b3b3))),
		]);

		let vertical =
			Layout::vertical([Constraint::Length(text.height() as u16)]).flex(Flex::Center);
		let [area] = vertical.areas(frame.area());
		frame.render_widget(Paragraph::new(text).centered(), area);
	}
}
