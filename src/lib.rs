//! Structure-preserving truncation of HTML fragments.
//!
//! Shortens an HTML fragment to a character or word limit while keeping the
//! markup well-formed:
//! - every opened tag stays closed (pruning drops whole subtrees, never half
//!   an element)
//! - multi-byte characters and words are never split
//! - dangling trailing punctuation is stripped before the ellipsis
//! - the ellipsis lands outside links, emphasis, and headings rather than
//!   nested inside them
//!
//! ```
//! use html_truncate::{truncate_chars, truncate_words};
//!
//! assert_eq!(truncate_chars("<p>Hello world</p>", 5, "..."), "<p>Hello...</p>");
//! assert_eq!(truncate_words("Hello world foo bar", 2, "..."), "Hello world...");
//! ```

pub mod dom;
pub mod text;
pub mod truncator;

pub use truncator::{DEFAULT_AVOID_TAGS, TrimUnit, Truncator, truncate_chars, truncate_words};
