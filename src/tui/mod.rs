pub mod app;
pub mod board;
pub mod events;
pub mod slideshow;
pub mod theme;
pub mod widgets;
