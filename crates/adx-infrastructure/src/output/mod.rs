//! Console output adapter

pub mod console;

pub use console::{ConsoleOutput, should_use_ansi, tag_style};
