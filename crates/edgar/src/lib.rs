//! Edgar - API documentation extraction
//!
//! Collects annotated `get_*`/`post_*` function signatures and their
//! docstrings from source text and renders them as markdown. Extraction is
//! a line-based regex scan, not a parse tree walk.

pub mod extract;
pub mod markdown;

pub use extract::{extract_endpoints, ApiEndpoint};
pub use markdown::render_markdown;
