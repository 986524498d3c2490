use std::io::stdout;

use color_eyre::Result;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::{self};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::Frame;

use crate::ui::home::Home;
use crate::ui::splash::Splash;
use crate::widgets::widget::Component;
use crate::widgets::widget::ComponentRenderCtx;

pub mod data;
pub mod style;
pub mod ui;
pub mod widgets;

struct App {
	splash: Option<Splash>,
	home: Home,
}

impl App {
	pub fn new() -> Self {
		Self {
			splash: Some(Splash::new()),
			home: Home::new(),
		}
	}

	fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
		loop {
			terminal.draw(|frame| self.draw(frame))?;

			// The splash swallows every event until its timer runs out.
			if let Some(splash) = &self.splash {
				if event::poll(splash.remaining())? {
					event::read()?;
				}
				if splash.finished() {
					self.splash = None;
				}
				continue;
			}

			match event::read()? {
				Event::Key(key) => {
					if self.home.input(&key) {
						continue;
					}
					match key.code {
						KeyCode::Char('q') => return Ok(()),
						_ => {}
					}
				}
				Event::Mouse(mouse) => self.home.mouse(&mouse),
				_ => {}
			}
		}
	}

	fn draw(&self, frame: &mut Frame) {
		if let Some(splash) = &self.splash {
			splash.render(frame);
			return;
		}
		let mut ctx = ComponentRenderCtx {
			area: frame.area(),
			selected: false,
		};
		self.home.render(frame, &mut ctx);
	}
}

fn main() -> Result<()> {
	let terminal = ratatui::init();
	let _ = execute!(stdout(), EnableMouseCapture);
	let app_result = App::new().run(terminal);
	let _ = execute!(stdout(), DisableMouseCapture);
	ratatui::restore();
	app_result
}
