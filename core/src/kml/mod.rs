//! KML document builders and the atomic file writer.
//!
//! Series names and labels are inserted verbatim, without XML escaping;
//! callers are responsible for keeping `<`, `&` and friends out of them.

pub mod document;
pub mod output;

pub use document::{LineDocument, TrackDocument, TrailStyle, TRACK_LINE_WIDTH};
pub use output::write_document;
