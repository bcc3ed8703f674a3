//! Loaders for the two supported tabular layouts.
//!
//! * `plain` — comma-separated text, x/y taken from fields 2 and 3.
//! * `vectors` — headerless HORIZONS CSV exports, `index, date, x, y, z`.

pub mod plain;
pub mod vectors;

pub use plain::load_plain;
pub use vectors::{load_vectors, COMMENT_MARKER};
