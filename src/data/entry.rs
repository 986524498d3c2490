use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Opaque entry identifier. Assigned once at creation, never reused within
/// a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub(crate) u64);

/// One journal record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
	pub id: EntryId,
	pub title: String,
	pub content: String,
	/// Set at creation; edits never touch it.
	pub created_at: DateTime<Utc>,
	pub bookmarked: bool,
}

impl Entry {
	/// Date as shown on cards and in the edit sheet (dd/mm/yyyy).
	pub fn pretty_date(&self) -> String {
		self.created_at.format("%d/%m/%Y").to_string()
	}
}
