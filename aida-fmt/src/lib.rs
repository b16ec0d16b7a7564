//! Chat message formatting for the AIDA assistant front-end
//!
//!     This crate turns the raw text of a chat turn into HTML that can be inserted directly into a
//!     page. Assistant replies mix markdown, pipe tables and trusted HTML fragments (action
//!     buttons, links) returned by the backend; user messages are plain text that must never be
//!     read as markup. Both are handled here, the choice between them is the caller's.
//!
//! Architecture
//!
//!     - MessageFormatter: the core pipeline (tables, HTML preservation, inline markdown)
//!     - Format trait: uniform interface for every rendering strategy
//!     - FormatRegistry: discovery and selection of formats by name
//!     - Transcript: a chat history rendered turn by turn with a per-role format
//!
//!     This is a pure lib. No code here assumes a shell, a network or a page: every entry point
//!     takes a string and returns a string.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── message.rs              # MessageFormatter and strategy detection
//!     ├── message
//!     │   ├── patterns.rs         # Compiled regexes shared by the passes
//!     │   ├── tables.rs           # Pipe table -> <table> conversion
//!     │   ├── preserve.rs         # Placeholder round-trip for embedded HTML
//!     │   └── inline.rs           # Bold, italic, code, links, line breaks
//!     ├── formats
//!     │   ├── chat.rs             # chat-html
//!     │   ├── escaped.rs          # escaped-html
//!     │   └── paragraph.rs        # paragraph-html
//!     ├── transcript.rs
//!     ├── lib.rs
//!
//! Pipeline
//!
//!     1. Detect whether the message already carries HTML.
//!     2. Convert markdown pipe tables to `<table>` markup (always, and always first). In pure
//!        markdown messages each cell gets the inline passes on its own; in HTML-bearing ones
//!        cells stay literal.
//!     3. Swap each HTML element, generated tables included, for a placeholder, run the inline
//!        passes over what is left, then put the elements back untouched.
//!
//!     Formatting never fails. Anything that does not parse as markdown stays literal text.
//!
//! Known limitation
//!
//!     HTML detection is a regex heuristic tuned for the narrow, trusted vocabulary the backend
//!     emits. Prose such as "use the <input> tag" is classified as HTML-bearing.

pub mod error;
pub mod format;
pub mod formats;
pub mod message;
pub mod registry;
pub mod transcript;

pub use error::FormatError;
pub use format::Format;
pub use message::{detect_strategy, format_message, FormatterOptions, MessageFormatter, Strategy};
pub use registry::FormatRegistry;
pub use transcript::{ChatTurn, Role, Transcript, TranscriptOptions, TranscriptRenderer};
