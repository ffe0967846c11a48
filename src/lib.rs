//! linkpane - a terminal front-end for a URL shortener
//!
//! Shorten links, preview where they point, and track where their clicks
//! come from, all from one form.
//!
//! # Architecture
//! - `client`: HTTP access to the shortener backend
//! - `form`: mode rules, input debounce, request dispatch and the view state
//! - `interfaces`: the terminal UI
//! - `config`: configuration management
//! - `system`: logging and panic handling

pub mod client;
pub mod config;
pub mod errors;
pub mod form;
pub mod interfaces;
pub mod system;
pub mod utils;
