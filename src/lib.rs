//! Folio TUI - the contact section of a personal portfolio in the terminal
//!
//! A Ratatui-based contact form that validates input and hands messages to a
//! pluggable delivery backend.

pub mod app;
pub mod config;
pub mod delivery;
pub mod shortcuts;
pub mod state;
pub mod ui;
