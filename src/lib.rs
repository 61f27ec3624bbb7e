//! outliner: parse a numbered markdown outline into sections and subsections,
//! and query it through a cached index.
//!
//! ```text
//! ## 1. Introduction        -> Section "1"
//! ### 1.1 Overview          -> Subsection "1.1", parent "1"
//! Body text...              -> content of 1.1
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod formats;
pub mod index;
pub mod input;
pub mod parser;
pub mod render;
pub mod section;

pub use error::{OutlineError, Result};
pub use index::{Adjacent, DocumentIndex};
pub use input::OutlineSource;
pub use parser::{parse, parse_file, parse_with, ParseObserver};
pub use section::{Ordinal, Section, Subsection};
