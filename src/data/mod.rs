pub mod entry;
pub mod journal;
