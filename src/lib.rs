//! Terminal JavaScript study lab: catalogs of study snippets plus a
//! sandboxed interpreter to run them in.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod handlers;
pub mod printer;
pub mod tui;
pub mod utils;
