pub mod commands;
pub mod parser;

/// Whether the shell keeps reading commands after one has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}
