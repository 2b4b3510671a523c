/// LifeWappen - a gamified life record in the terminal
///
/// Tracks one person's badges, attributes, title and activity log, saves
/// them as JSON and renders them as a character card.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
