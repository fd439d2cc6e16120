pub mod entry;
pub mod week;
