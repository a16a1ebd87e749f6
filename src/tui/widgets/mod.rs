pub mod clock;
pub mod dhikr;
pub mod header;
pub mod poster;
pub mod prayers;
pub mod statusbar;
pub mod warning;
