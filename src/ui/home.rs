use std::cell::Cell;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::LazyLock;

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use ratatui::layout::Constraint;
use ratatui::layout::Flex;
use ratatui::layout::Layout;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::text::Text;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::ScrollbarState;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::data::entry::Entry;
use crate::data::entry::EntryId;
use crate::data::journal::Journal;
use crate::data::journal::SortOption;
use crate::style::ACCENT;
use crate::style::CARD_BG;
use crate::style::DELETE_BG;
use crate::style::HELP_LINE_BG;
use crate::ui::sheet::EntrySheet;
use crate::ui::sheet::SheetResult;
use crate::ui::swipe::Swipe;
use crate::widgets::confirm::Confirm;
use crate::widgets::text_input::TextInput;
use crate::widgets::text_input::TextInputStyle;
use crate::widgets::widget::Component;
use crate::widgets::widget::ComponentRenderCtx;

/// Rows one card occupies: title, date, preview, separator.
const CARD_HEIGHT: u16 = 4;
/// The swipe machine speaks abstract drag units; one terminal cell of
/// horizontal mouse travel counts as this many.
const UNITS_PER_CELL: f32 = 10.0;

static SEARCH_INPUT_STYLE: LazyLock<TextInputStyle> = LazyLock::new(|| TextInputStyle {
	markers: ["".into(), "".into()],
	style: Some(Style::default().fg(Color::from_u32(0x8f8f8f))),
	style_selected: Some(Style::default().fg(Color::White)),
});

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum ActiveWidget {
	Search,
	#[default]
	Content,
}

/// An in-flight horizontal mouse drag over one card.
struct DragState {
	entry: EntryId,
	origin_column: u16,
	last_dx: f32,
	moved: bool,
}

/// The single screen of the app: owns the journal plus all view state
/// (search text, sort option, active modal, pending delete marker).
pub struct Home {
	journal: Journal,
	sort: SortOption,
	active: ActiveWidget,
	selected: usize,
	search: TextInput<'static>,

	/// Swipe machines for rows that are not at rest, keyed by entry id so
	/// each row settles independently.
	swipes: HashMap<EntryId, Swipe>,
	drag: Option<DragState>,

	sheet: Option<EntrySheet>,
	confirm: Option<Confirm<'static>>,
	pending_delete: Option<usize>,

	// Card geometry from the last draw, for mouse hit-testing.
	list_area: Cell<Rect>,
	scroll_top: Cell<usize>,
	scrollbar: RefCell<ScrollbarState>,
}

impl Home {
	pub fn new() -> Self {
		Self {
			journal: Journal::new(),
			sort: SortOption::default(),
			active: ActiveWidget::default(),
			selected: 0,
			search: TextInput::new()
				.with_placeholder("Search")
				.style(&SEARCH_INPUT_STYLE),
			swipes: HashMap::new(),
			drag: None,
			sheet: None,
			confirm: None,
			pending_delete: None,
			list_area: Cell::new(Rect::ZERO),
			scroll_top: Cell::default(),
			scrollbar: RefCell::new(ScrollbarState::new(0)),
		}
	}

	fn projection(&self) -> Vec<(usize, Entry)> {
		self.journal.project(self.search.value(), self.sort)
	}

	fn selected_item<'i>(&self, items: &'i [(usize, Entry)]) -> Option<&'i (usize, Entry)> {
		items.get(self.selected.min(items.len().checked_sub(1)?))
	}

	fn move_cursor(&mut self, offset: i32, len: usize) {
		if len == 0 {
			self.selected = 0;
			return;
		}
		self.selected = self.selected.min(len - 1);
		if offset > 0 {
			self.selected = std::cmp::min(self.selected + offset as usize, len - 1);
		} else {
			self.selected = self.selected.saturating_sub((-offset) as usize);
		}
	}

	/// Every delete goes through this confirmation, whatever triggered it.
	fn request_delete(&mut self, position: usize) {
		self.pending_delete = Some(position);
		self.confirm = Some(Confirm::new(
			"Delete Journal?".into(),
			"Are you sure you want to delete this journal?".into(),
		));
	}

	fn confirm_pending_delete(&mut self) {
		if let Some(position) = self.pending_delete.take() {
			let removed = self.journal.delete(position);
			self.swipes.remove(&removed.id);
		}
	}

	/// Snaps every open card back to rest.
	fn close_swipes(&mut self) {
		self.swipes.values_mut().for_each(Swipe::settle);
		self.swipes.retain(|_, swipe| !swipe.is_resting());
	}

	pub fn mouse(&mut self, mouse: &MouseEvent) {
		// Gestures only reach the cards while no modal is up.
		if self.sheet.is_some() || self.confirm.is_some() {
			return;
		}
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				let items = self.projection();
				if let Some(index) = self.display_row_at(mouse.column, mouse.row, items.len()) {
					self.selected = index;
					self.drag = Some(DragState {
						entry: items[index].1.id,
						origin_column: mouse.column,
						last_dx: 0.0,
						moved: false,
					});
				}
			}
			MouseEventKind::Drag(MouseButton::Left) => {
				if let Some(drag) = &mut self.drag {
					let dx =
						(mouse.column as f32 - drag.origin_column as f32) * UNITS_PER_CELL;
					if dx != 0.0 {
						drag.moved = true;
					}
					drag.last_dx = dx;
					self.swipes.entry(drag.entry).or_default().drag_update(dx);
				}
			}
			MouseEventKind::Up(MouseButton::Left) => {
				if let Some(drag) = self.drag.take() {
					if drag.moved {
						if let Some(swipe) = self.swipes.get_mut(&drag.entry) {
							swipe.drag_end(drag.last_dx);
							if swipe.is_resting() {
								self.swipes.remove(&drag.entry);
							}
						}
					} else {
						self.tap(drag.entry);
					}
				}
			}
			_ => {}
		}
	}

	/// A tap on a revealed card hits its delete affordance; anywhere else
	/// it opens the editor.
	fn tap(&mut self, id: EntryId) {
		let items = self.projection();
		let Some((position, entry)) = items.iter().find(|(_, e)| e.id == id) else {
			return;
		};
		if self.swipes.get(&id).is_some_and(|swipe| swipe.is_revealed()) {
			self.request_delete(*position);
		} else {
			self.sheet = Some(EntrySheet::edit(entry.clone()));
		}
	}

	fn display_row_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
		let area = self.list_area.get();
		if !area.contains(Position::new(column, row)) {
			return None;
		}
		let index = self.scroll_top.get() + ((row - area.y) / CARD_HEIGHT) as usize;
		(index < len).then_some(index)
	}

	fn render_card(&self, frame: &mut Frame, area: Rect, entry: &Entry, stripe: usize) {
		let swipe = self.swipes.get(&entry.id).copied().unwrap_or_default();
		let shift = ((-swipe.offset() / UNITS_PER_CELL).round() as u16)
			.min(area.width.saturating_sub(1));
		let card_area = Rect {
			width: area.width - shift,
			..area
		};

		let mut title_spans = vec![
			" ".into(),
			Span::styled(entry.title.as_str(), Style::default().fg(ACCENT).bold()),
		];
		if entry.bookmarked {
			let used = 1 + UnicodeWidthStr::width(entry.title.as_str()) + 3;
			title_spans.push(Span::raw(
				" ".repeat((card_area.width as usize).saturating_sub(used)),
			));
			title_spans.push("󰃀 ".fg(ACCENT));
		}
		let preview = entry.content.lines().next().unwrap_or("");
		let card = Paragraph::new(vec![
			Line::from(title_spans),
			Line::from(format!(" {}", entry.pretty_date()).fg(Color::from_u32(0x8f8f8f))),
			Line::from(format!(" {preview}").fg(Color::from_u32(0xd0d0d0))),
			Line::from(""),
		])
		.bg(CARD_BG[stripe]);
		frame.render_widget(card, card_area);

		if swipe.affordance_visible() && shift > 0 {
			let affordance_area = Rect {
				x: area.x + card_area.width,
				width: shift,
				..area
			};
			let trash = Paragraph::new(vec![
				Line::from(""),
				Line::from("󰩹".fg(Color::White).bold()),
			])
			.centered()
			.bg(DELETE_BG);
			frame.render_widget(trash, affordance_area);
		}
	}

	fn render_hint(frame: &mut Frame, area: Rect, lines: Vec<Line>) {
		let text = Text::from(lines);
		let vertical =
			Layout::vertical([Constraint::Length(text.height() as u16)]).flex(Flex::Center);
		let [centered] = vertical.areas(area);
		frame.render_widget(Paragraph::new(text).centered(), centered);
	}
}

impl Component for Home {
	fn input(&mut self, key: &KeyEvent) -> bool {
		// Delete confirmation
		if let Some(confirm) = &mut self.confirm {
			confirm.input(key);
			match confirm.submit() {
				Some(true) => self.confirm_pending_delete(),
				Some(false) => {
					self.pending_delete = None;
					self.close_swipes();
				}
				None => return true,
			}
			self.confirm = None;
			return true;
		}

		// Create/edit sheet
		if let Some(sheet) = &mut self.sheet {
			if !sheet.input(key) {
				match sheet.submit() {
					Some(SheetResult::Create { title, content }) => {
						self.journal.add(&title, &content);
					}
					Some(SheetResult::Update(entry)) => self.journal.update(entry),
					None => {}
				}
				self.sheet = None;
			}
			return true;
		}

		// Search field
		if self.active == ActiveWidget::Search {
			if self.search.input(key) {
				return true;
			}
			match key.code {
				KeyCode::Down | KeyCode::Tab | KeyCode::Esc | KeyCode::Enter => {
					self.active = ActiveWidget::Content
				}
				_ => return false,
			}
			return true;
		}

		let items = self.projection();
		match key.code {
			KeyCode::Char('/') => self.active = ActiveWidget::Search,
			KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.move_cursor(1, items.len()),
			KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
				self.move_cursor(-1, items.len())
			}
			KeyCode::Char('a') => self.sheet = Some(EntrySheet::create()),
			KeyCode::Char('e') | KeyCode::Enter => {
				if let Some((_, entry)) = self.selected_item(&items) {
					self.sheet = Some(EntrySheet::edit(entry.clone()));
				}
			}
			KeyCode::Char('b') => {
				if let Some((_, entry)) = self.selected_item(&items) {
					let mut toggled = entry.clone();
					toggled.bookmarked = !toggled.bookmarked;
					self.journal.update(toggled);
				}
			}
			KeyCode::Char('d') | KeyCode::Delete => {
				if let Some((position, _)) = self.selected_item(&items) {
					self.request_delete(*position);
				}
			}
			KeyCode::Char('s') => {
				self.sort = self.sort.toggle();
				self.close_swipes();
			}
			_ => return false,
		}
		true
	}

	fn render(&self, frame: &mut Frame, ctx: &mut ComponentRenderCtx) {
		let area = ctx.area;
		frame.render_widget(Clear, area);

		// Help bar
		let help = Line::from(vec![
			" Journali 0.1 ".bold().fg(ACCENT),
			"⮁".bold().fg(Color::Green),
			" (navigate) ".fg(Color::White),
			"/".bold().fg(Color::Green),
			" (search) ".fg(Color::White),
			"a".bold().fg(Color::Green),
			" (add) ".fg(Color::White),
			"e".bold().fg(Color::Green),
			" (edit) ".fg(Color::White),
			"b".bold().fg(Color::Green),
			" (bookmark) ".fg(Color::White),
			"d".bold().fg(Color::Green),
			" (delete) ".fg(Color::White),
			"s".bold().fg(Color::Green),
			format!(" (sort: {}) ", self.sort.label()).fg(Color::White),
			"q".bold().fg(Color::Green),
			" (quit)".fg(Color::White),
		])
		.bg(HELP_LINE_BG);
		let mut help_area = area;
		help_area.height = 1;
		frame.render_widget(help, help_area);

		// Search
		let search_block = Block::bordered()
			.border_type(BorderType::Thick)
			.title(" Search ")
			.border_style(if self.active == ActiveWidget::Search {
				Style::default().fg(ACCENT)
			} else {
				Style::default().fg(Color::from_u32(0x4f4f4f))
			});
		let search_area = Rect {
			y: area.y + 1,
			height: 3,
			..area
		};
		ctx.area = search_block.inner(search_area);
		ctx.selected = self.active == ActiveWidget::Search && self.sheet.is_none();
		frame.render_widget(&search_block, search_area);
		self.search.render(frame, ctx);

		// Cards
		let list_area = Rect {
			y: search_area.y + search_area.height,
			height: area
				.height
				.saturating_sub(1 + search_area.height),
			width: area.width.saturating_sub(1),
			..area
		};
		self.list_area.set(list_area);

		let items = self.projection();
		let visible = (list_area.height / CARD_HEIGHT) as usize;
		let selected = self.selected.min(items.len().saturating_sub(1));
		let top = (selected + 1)
			.saturating_sub(visible)
			.min(items.len().saturating_sub(visible));
		self.scroll_top.set(top);

		if self.journal.is_empty() {
			Self::render_hint(
				frame,
				list_area,
				vec![
					Line::from("Begin Your Journal".fg(ACCENT).bold()),
					Line::from(""),
					Line::from(
						"Craft your personal diary, press a to begin"
							.fg(Color::from_u32(0xb3b3b3)),
					),
				],
			);
		} else if items.is_empty() {
			Self::render_hint(
				frame,
				list_area,
				vec![Line::from(
					"No entries match your search".fg(Color::from_u32(0xb3b3b3)),
				)],
			);
		} else {
			for (row, (_, entry)) in items.iter().enumerate().skip(top).take(visible) {
				let card_area = Rect {
					y: list_area.y + ((row - top) as u16) * CARD_HEIGHT,
					height: CARD_HEIGHT,
					..list_area
				};
				let stripe = if self.active == ActiveWidget::Content && row == selected {
					2
				} else {
					row % 2
				};
				self.render_card(frame, card_area, entry, stripe);
			}

			// Scrollbar
			let mut scrollbar_area = list_area;
			scrollbar_area.x = area.x + area.width.saturating_sub(1);
			scrollbar_area.width = 1;
			*self.scrollbar.borrow_mut() =
				ScrollbarState::new(items.len().saturating_sub(visible).max(1)).position(top);
			frame.render_stateful_widget(
				Scrollbar::default()
					.orientation(ScrollbarOrientation::VerticalRight)
					.style(Style::default().fg(Color::from_u32(0x7f7faf))),
				scrollbar_area,
				&mut *self.scrollbar.borrow_mut(),
			);
		}

		// Sheet
		ctx.area = area;
		if let Some(sheet) = &self.sheet {
			sheet.render(frame, ctx);
		}
		// Delete confirmation
		ctx.area = area;
		if let Some(confirm) = &self.confirm {
			confirm.render(frame, ctx);
		}
	}

	fn height(&self) -> u16 {
		0
	}
}
