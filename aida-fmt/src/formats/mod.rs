//! Format implementations
//!
//! Each format renders the raw text of a chat turn as HTML. Which one applies to a message is a
//! trust decision made by the caller, usually per role (see [`crate::transcript`]).

pub mod chat;
pub mod escaped;
pub mod paragraph;

pub use chat::ChatHtmlFormat;
pub use escaped::EscapedHtmlFormat;
pub use paragraph::ParagraphHtmlFormat;
