//! Component 3 – read-only views of the editor state for the terminal.
pub mod summary;
