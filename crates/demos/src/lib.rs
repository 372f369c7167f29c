//! Demo applications for gamelib.

/// A keyboard and mouse driven menu.
pub mod menu;

#[cfg(test)]
mod tests;
