use ratatui::style::Color;

pub const HELP_LINE_BG: Color = Color::from_u32(0x1f1a33);
/// Lavender accent used for titles, bookmarks and selection highlights.
pub const ACCENT: Color = Color::from_u32(0xbba8ff);
/// Background for journal cards: Color1, Color2, Selected
pub const CARD_BG: [Color; 3] = [
	Color::from_u32(0x1a1a22),
	Color::from_u32(0x14141a),
	Color::from_u32(0x332b4d),
];
/// Background of the revealed delete affordance.
pub const DELETE_BG: Color = Color::from_u32(0xb02a2a);
