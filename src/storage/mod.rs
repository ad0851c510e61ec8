//! File-based storage for metadata, example references and generated content.
//!
//! # Overview
//!
//! - **Reads**: UTF-8 text and JSON documents
//! - **Writes**: UTF-8 text, creating parent directories as needed
//!
//! Every operation has a `try_*` form returning a typed [`StorageError`] and a
//! lenient form that logs the failure and returns `None`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use content_forge::storage::{read_text, write_text};
//! use std::path::Path;
//!
//! if let Some(path) = write_text("# Recursion", "lesson_Recursion.md", Some(Path::new("out"))) {
//!     assert_eq!(read_text(&path).as_deref(), Some("# Recursion"));
//! }
//! ```

pub mod files;

pub use files::{read_json, read_text, try_read_json, try_read_text, try_write_text, write_text};
