//! twinrange TUI — terminal demo for the dual-thumb range slider.
//!
//! Every slider of a set is drawn as a track with two thumbs and their
//! tooltips. Thumbs move with vim-style keys or by typing a value into the
//! focused tooltip; committed ranges land in a change log and persist
//! across restarts.

pub mod app;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use theme::Theme;
