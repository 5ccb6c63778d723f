//! Component 2 – the editor state store.
//!
//! `Store<T>` is the observable cell; `EditorStore` is the one the editor
//! UI owns and hands to its views.
pub mod editor;
pub mod observable;

pub use editor::{EditorState, EditorStore};
pub use observable::{Store, Subscription};
