//! Markdown Decorator
//!
//! Markdown toolbar and menu actions for text editor widgets: heading
//! markers, bold/italic/code wrapping, and link/image templates, applied to
//! whatever editor the host provides through [`editor::TextEditor`].

pub mod config;
pub mod editor;
pub mod error;
pub mod markdown;
pub mod string_utils;
pub mod ui;

pub use error::{Error, Result};
