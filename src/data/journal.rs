use chrono::Utc;

use crate::data::entry::Entry;
use crate::data::entry::EntryId;

/// Sort orders offered by the sort toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
	/// Most recent first; ties keep store order.
	#[default]
	DateDescending,
	/// Bookmarked entries first, most recent first within each group.
	Bookmark,
}

impl SortOption {
	pub fn toggle(self) -> Self {
		match self {
			SortOption::DateDescending => SortOption::Bookmark,
			SortOption::Bookmark => SortOption::DateDescending,
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			SortOption::DateDescending => "date",
			SortOption::Bookmark => "bookmark",
		}
	}
}

/// Authoritative store of all entries, insertion ordered.
///
/// Mutations only go through [`Journal::add`], [`Journal::update`] and
/// [`Journal::delete`]; everything shown on screen is derived through
/// [`Journal::project`].
#[derive(Debug, Default)]
pub struct Journal {
	entries: Vec<Entry>,
	next_id: u64,
}

impl Journal {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	/// Creates a new entry and appends it to the store. An empty title is
	/// replaced with a placeholder. Always succeeds.
	pub fn add(&mut self, title: &str, content: &str) -> EntryId {
		let id = EntryId(self.next_id);
		self.next_id += 1;
		self.entries.push(Entry {
			id,
			title: if title.is_empty() {
				"Untitled".into()
			} else {
				title.into()
			},
			content: content.into(),
			created_at: Utc::now(),
			bookmarked: false,
		});
		id
	}

	/// Replaces title, content and bookmark of the stored entry with the
	/// same id, keeping id and creation date. An unknown id is silently
	/// ignored.
	pub fn update(&mut self, updated: Entry) {
		if let Some(entry) = self.entries.iter_mut().find(|e| e.id == updated.id) {
			entry.title = updated.title;
			entry.content = updated.content;
			entry.bookmarked = updated.bookmarked;
		}
	}

	/// Removes the entry at `position` in the backing store.
	///
	/// Positions must come from a current projection; an out-of-range
	/// position is a caller bug and panics.
	pub fn delete(&mut self, position: usize) -> Entry {
		self.entries.remove(position)
	}

	/// Derives the displayed sequence: filter by case-insensitive substring
	/// over title and content, then sort, then re-resolve each survivor's
	/// current store position by id.
	///
	/// Sorting detaches the sequence from store indices, so positions are
	/// looked up again by identity rather than assumed; ids that no longer
	/// resolve are dropped.
	pub fn project(&self, search: &str, sort: SortOption) -> Vec<(usize, Entry)> {
		let mut filtered: Vec<Entry> = if search.is_empty() {
			self.entries.clone()
		} else {
			let needle = search.to_lowercase();
			self.entries
				.iter()
				.filter(|e| {
					e.title.to_lowercase().contains(&needle)
						|| e.content.to_lowercase().contains(&needle)
				})
				.cloned()
				.collect()
		};

		// Both orders rely on the sort being stable for deterministic ties.
		match sort {
			SortOption::DateDescending => {
				filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
			}
			SortOption::Bookmark => {
				filtered.sort_by(|a, b| {
					(b.bookmarked, b.created_at).cmp(&(a.bookmarked, a.created_at))
				});
			}
		}

		filtered
			.into_iter()
			.filter_map(|entry| {
				let position = self.entries.iter().position(|e| e.id == entry.id)?;
				Some((position, entry))
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use chrono::DateTime;
	use chrono::TimeZone;
	use chrono::Utc;

	use super::*;

	fn ts(secs: i64) -> DateTime<Utc> {
		Utc.timestamp_opt(secs, 0).unwrap()
	}

	/// Entries created through `add` get wall-clock timestamps; tests that
	/// depend on ordering pin them down explicitly.
	fn backdate(journal: &mut Journal, position: usize, secs: i64) {
		journal.entries[position].created_at = ts(secs);
	}

	fn titles(projection: &[(usize, Entry)]) -> Vec<String> {
		projection.iter().map(|(_, e)| e.title.clone()).collect()
	}

	#[test]
	fn test_add_grows_store_with_unique_ids() {
		let mut journal = Journal::new();
		for i in 0..10 {
			journal.add(&format!("entry {i}"), "");
		}
		assert_eq!(journal.len(), 10);
		for (i, a) in journal.entries().iter().enumerate() {
			for b in &journal.entries()[i + 1..] {
				assert_ne!(a.id, b.id);
			}
		}
	}

	#[test]
	fn test_add_defaults_empty_title() {
		let mut journal = Journal::new();
		journal.add("", "some thoughts");
		assert_eq!(journal.entries()[0].title, "Untitled");

		journal.add("Named", "");
		assert_eq!(journal.entries()[1].title, "Named");
	}

	#[test]
	fn test_ids_are_not_reused_after_delete() {
		let mut journal = Journal::new();
		let first = journal.add("a", "");
		journal.delete(0);
		let second = journal.add("b", "");
		assert_ne!(first, second);
	}

	#[test]
	fn test_update_replaces_mutable_fields_only() {
		let mut journal = Journal::new();
		journal.add("before", "old");
		let snapshot = journal.entries()[0].clone();

		let mut edited = snapshot.clone();
		edited.title = "after".into();
		edited.content = "new".into();
		edited.bookmarked = true;
		// A stale creation date must not propagate into the store.
		edited.created_at = ts(0);
		journal.update(edited);

		assert_eq!(journal.len(), 1);
		let stored = &journal.entries()[0];
		assert_eq!(stored.title, "after");
		assert_eq!(stored.content, "new");
		assert!(stored.bookmarked);
		assert_eq!(stored.id, snapshot.id);
		assert_eq!(stored.created_at, snapshot.created_at);
	}

	#[test]
	fn test_update_unknown_id_is_a_silent_noop() {
		let mut journal = Journal::new();
		journal.add("a", "x");
		journal.add("b", "y");
		let before = journal.entries().to_vec();

		journal.update(Entry {
			id: EntryId(999),
			title: "ghost".into(),
			content: "ghost".into(),
			created_at: ts(0),
			bookmarked: true,
		});

		assert_eq!(journal.entries(), &before[..]);
	}

	#[test]
	fn test_delete_removes_exactly_one_keeping_order() {
		let mut journal = Journal::new();
		for title in ["a", "b", "c", "d"] {
			journal.add(title, "");
		}
		let removed = journal.delete(1);
		assert_eq!(removed.title, "b");
		assert_eq!(journal.len(), 3);
		let rest: Vec<&str> = journal.entries().iter().map(|e| e.title.as_str()).collect();
		assert_eq!(rest, ["a", "c", "d"]);
	}

	#[test]
	#[should_panic]
	fn test_delete_out_of_range_panics() {
		let mut journal = Journal::new();
		journal.add("only", "");
		journal.delete(1);
	}

	#[test]
	fn test_project_date_descending() {
		let mut journal = Journal::new();
		journal.add("oldest", "");
		journal.add("newest", "");
		journal.add("middle", "");
		backdate(&mut journal, 0, 100);
		backdate(&mut journal, 1, 300);
		backdate(&mut journal, 2, 200);

		let shown = journal.project("", SortOption::DateDescending);
		assert_eq!(titles(&shown), ["newest", "middle", "oldest"]);
	}

	#[test]
	fn test_project_equal_dates_keep_store_order() {
		let mut journal = Journal::new();
		for title in ["first", "second", "third"] {
			journal.add(title, "");
		}
		for i in 0..3 {
			backdate(&mut journal, i, 100);
		}

		let shown = journal.project("", SortOption::DateDescending);
		assert_eq!(titles(&shown), ["first", "second", "third"]);
	}

	#[test]
	fn test_project_bookmark_groups_then_date() {
		let mut journal = Journal::new();
		journal.add("plain old", "");
		journal.add("marked old", "");
		journal.add("plain new", "");
		journal.add("marked new", "");
		backdate(&mut journal, 0, 100);
		backdate(&mut journal, 1, 200);
		backdate(&mut journal, 2, 300);
		backdate(&mut journal, 3, 400);
		for position in [1, 3] {
			let mut edited = journal.entries()[position].clone();
			edited.bookmarked = true;
			journal.update(edited);
		}

		let shown = journal.project("", SortOption::Bookmark);
		assert_eq!(
			titles(&shown),
			["marked new", "marked old", "plain new", "plain old"]
		);
	}

	#[test]
	fn test_project_filters_title_and_content_case_insensitive() {
		let mut journal = Journal::new();
		journal.add("Groceries", "milk and eggs");
		journal.add("Workout", "went for a RUN");
		journal.add("Nothing", "quiet day");

		let by_title = journal.project("grocer", SortOption::DateDescending);
		assert_eq!(titles(&by_title), ["Groceries"]);

		let by_content = journal.project("run", SortOption::DateDescending);
		assert_eq!(titles(&by_content), ["Workout"]);

		let all = journal.project("", SortOption::DateDescending);
		assert_eq!(all.len(), 3);

		let none = journal.project("zzz", SortOption::DateDescending);
		assert!(none.is_empty());
	}

	#[test]
	fn test_projection_positions_resolve_to_store_indices() {
		let mut journal = Journal::new();
		journal.add("a", "");
		journal.add("b", "");
		journal.add("c", "");
		backdate(&mut journal, 0, 100);
		backdate(&mut journal, 1, 300);
		backdate(&mut journal, 2, 200);

		for (position, entry) in journal.project("", SortOption::DateDescending) {
			assert_eq!(journal.entries()[position].id, entry.id);
		}
	}

	#[test]
	fn test_end_to_end_add_bookmark_project() {
		let mut journal = Journal::new();
		journal.add("A", "x");
		journal.add("B", "y");
		backdate(&mut journal, 0, 100);
		backdate(&mut journal, 1, 200);

		let by_date = journal.project("", SortOption::DateDescending);
		assert_eq!(titles(&by_date), ["B", "A"]);

		let mut a = journal.entries()[0].clone();
		a.bookmarked = true;
		journal.update(a);

		let by_bookmark = journal.project("", SortOption::Bookmark);
		assert_eq!(titles(&by_bookmark), ["A", "B"]);
	}

	#[test]
	fn test_sort_option_toggle() {
		assert_eq!(
			SortOption::DateDescending.toggle(),
			SortOption::Bookmark
		);
		assert_eq!(
			SortOption::Bookmark.toggle(),
			SortOption::DateDescending
		);
	}
}
