//! Line-level syllabification and event records.

pub mod event;
pub mod line;

pub use event::EventRecord;
pub use line::{
    LineOutput, LineSyllabification, LineSyllabifier, clean_line, syllabify_line, tokenize,
};
