//! Terminal front end: the interactive menu loop and printable views.

pub mod app;
pub mod events;
pub mod layout;
pub mod plain;
pub mod theme;
pub mod views;
pub mod widgets;
