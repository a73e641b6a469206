//! CoderKeys Library
//!
//! A programmer-oriented on-screen keyboard: static key layouts with color
//! categories, a small shift/mode state machine, and a controller that turns
//! key presses into operations on a host text field. The binary wraps it in
//! a terminal UI and a set of headless commands.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod logging;
pub mod models;
pub mod tui;
