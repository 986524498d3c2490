pub mod confirm;
pub mod text_area;
pub mod text_input;
pub mod widget;
