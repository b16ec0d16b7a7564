//! Chat transcripts
//!
//! A transcript is the ordered list of turns of one conversation, as exported by the chat
//! history endpoint. Rendering applies a format per role: assistant text goes through the full
//! formatter, user text is escaped. That mapping is the trust decision the formatter itself
//! never makes, and it is configurable through [`TranscriptOptions`].
//!
//! Accepted sources, JSON or YAML:
//!
//! ```text
//! [{"role": "user", "content": "hi"}, {"role": "assistant", "content": "**hello**"}]
//! {"messages": [{"role": "user", "content": "hi"}]}
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FormatError;
use crate::registry::FormatRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

/// One message of a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Transcript {
    pub turns: Vec<ChatTurn>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TranscriptSource {
    Turns(Vec<ChatTurn>),
    Wrapped { messages: Vec<ChatTurn> },
}

impl From<TranscriptSource> for Transcript {
    fn from(source: TranscriptSource) -> Self {
        let turns = match source {
            TranscriptSource::Turns(turns) => turns,
            TranscriptSource::Wrapped { messages } => messages,
        };
        Transcript { turns }
    }
}

impl Transcript {
    pub fn new(turns: Vec<ChatTurn>) -> Self {
        Self { turns }
    }

    pub fn from_json(source: &str) -> Result<Self, FormatError> {
        let source: TranscriptSource = serde_json::from_str(source)?;
        Ok(source.into())
    }

    pub fn from_yaml(source: &str) -> Result<Self, FormatError> {
        let source: TranscriptSource = serde_yaml::from_str(source)?;
        Ok(source.into())
    }
}

/// Format name per role, plus the class of the wrapping element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptOptions {
    pub user_format: String,
    pub assistant_format: String,
    pub system_format: String,
    pub wrap_class: String,
}

impl Default for TranscriptOptions {
    fn default() -> Self {
        Self {
            user_format: "escaped-html".to_string(),
            assistant_format: "chat-html".to_string(),
            system_format: "escaped-html".to_string(),
            wrap_class: "message".to_string(),
        }
    }
}

impl TranscriptOptions {
    pub fn format_for(&self, role: Role) -> &str {
        match role {
            Role::User => &self.user_format,
            Role::Assistant => &self.assistant_format,
            Role::System => &self.system_format,
        }
    }
}

pub struct TranscriptRenderer<'a> {
    registry: &'a FormatRegistry,
    options: TranscriptOptions,
}

impl<'a> TranscriptRenderer<'a> {
    pub fn new(registry: &'a FormatRegistry, options: TranscriptOptions) -> Self {
        Self { registry, options }
    }

    /// Render every turn as `<div class="{wrap_class} {role}-message">…</div>`, one per line.
    pub fn render(&self, transcript: &Transcript) -> Result<String, FormatError> {
        debug!(turns = transcript.turns.len(), "rendering transcript");

        let mut blocks = Vec::with_capacity(transcript.turns.len());
        for turn in &transcript.turns {
            blocks.push(self.render_turn(turn)?);
        }
        Ok(blocks.join("\n"))
    }

    pub fn render_turn(&self, turn: &ChatTurn) -> Result<String, FormatError> {
        let body = self
            .registry
            .serialize(&turn.content, self.options.format_for(turn.role))?;
        Ok(format!(
            "<div class=\"{} {}-message\">{}</div>",
            self.options.wrap_class,
            turn.role.as_str(),
            body
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_array() {
        let transcript =
            Transcript::from_json(r#"[{"role": "user", "content": "hi"}]"#).unwrap();
        assert_eq!(transcript.turns, vec![ChatTurn::new(Role::User, "hi")]);
    }

    #[test]
    fn test_from_json_wrapped() {
        let transcript = Transcript::from_json(
            r#"{"messages": [{"role": "assistant", "content": "**ok**"}]}"#,
        )
        .unwrap();
        assert_eq!(transcript.turns[0].role, Role::Assistant);
    }

    #[test]
    fn test_from_yaml() {
        let transcript =
            Transcript::from_yaml("- role: system\n  content: Session started\n").unwrap();
        assert_eq!(
            transcript.turns,
            vec![ChatTurn::new(Role::System, "Session started")]
        );
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = Transcript::from_json(r#"[{"role": "bot", "content": "x"}]"#);
        assert!(matches!(result, Err(FormatError::InvalidTranscript(_))));
    }

    #[test]
    fn test_render_turn_wraps_body() {
        let registry = FormatRegistry::with_defaults();
        let renderer = TranscriptRenderer::new(&registry, TranscriptOptions::default());
        let html = renderer
            .render_turn(&ChatTurn::new(Role::Assistant, "**hi**"))
            .unwrap();
        assert_eq!(
            html,
            "<div class=\"message assistant-message\"><strong>hi</strong></div>"
        );
    }

    #[test]
    fn test_unknown_format_name() {
        let registry = FormatRegistry::with_defaults();
        let options = TranscriptOptions {
            user_format: "pdf".to_string(),
            ..TranscriptOptions::default()
        };
        let renderer = TranscriptRenderer::new(&registry, options);
        let result = renderer.render(&Transcript::new(vec![ChatTurn::new(Role::User, "x")]));
        assert_eq!(result, Err(FormatError::FormatNotFound("pdf".to_string())));
    }
}
