//! Entry Store: the in-memory collection and its flat-file persistence.

pub mod entries;
pub mod file;

pub use entries::EntryStore;
