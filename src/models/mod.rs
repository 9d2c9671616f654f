// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod entry;
pub mod reference;
pub mod search_hit;
pub mod term;

pub use entry::DictionaryEntry;
pub use reference::Reference;
pub use search_hit::{SearchHit, SearchResponse};
pub use term::Term;
