pub mod actions;
pub mod form;
pub mod guide;
pub mod preview;
pub mod theme_toggle;
