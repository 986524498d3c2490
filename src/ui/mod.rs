pub mod home;
pub mod sheet;
pub mod splash;
pub mod swipe;
