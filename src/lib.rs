//! coinpage - browse cryptocurrency tickers ten at a time in the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
