//! # Frontmatter
//!
//! A schema-agnostic `key: value` header delimited by `---` lines.
//!
//! - **`value`**: `FrontmatterValue` (string, number, bool, string list) and
//!   the ordered `Frontmatter` record
//! - **`parse`**: header/body split, value inference, title fallback
//! - **`serialize`**: the inverse of `parse`
//! - **`cache`**: hash-keyed memoisation of `parse`
//!
//! Round trip: `parse(&serialize(&fm)).frontmatter == fm` for any record.

pub mod cache;
pub mod parse;
pub mod serialize;
pub mod value;

pub use cache::FrontmatterCache;
pub use parse::{ParsedDocument, parse};
pub use serialize::{serialize, serialize_document};
pub use value::{Frontmatter, FrontmatterValue};
