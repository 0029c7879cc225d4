//! kwsuggest: keyword suggestions in the terminal, shown as a table, a tree
//! and a question/category breakdown.

pub mod api;
pub mod app;
pub mod categories;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod export;
pub mod help;
pub mod logging;
pub mod model;
pub mod notification;
pub mod print;
pub mod scroll;
pub mod search;
pub mod text;
pub mod view;
pub mod widgets;

#[cfg(test)]
mod test_utils;
