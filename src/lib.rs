//! Parse Kindle notebook HTML exports into a structured highlight list and
//! render it as a markdown report.
//!
//! Two-step pipeline: [`parse_notebook`] turns the raw export text into a
//! [`Notebook`]; [`render_markdown`] turns the notebook into a report string.
//! Both are synchronous, deterministic, and never fail: unrecognized input
//! degrades to a whole-document highlight instead of an error.

pub mod model;
pub mod parser;
pub mod render;

pub use model::{Color, Highlight, Notebook};
pub use parser::parse_notebook;
pub use render::render_markdown;
