use aida_fmt::{
    ChatTurn, FormatError, FormatRegistry, Role, Transcript, TranscriptOptions, TranscriptRenderer,
};

const HISTORY: &str = r#"{
  "messages": [
    {"role": "user", "content": "Find leads in <b>Oslo</b>\nplease"},
    {"role": "assistant", "content": "Found **2**:\n\n| Name | Score |\n|---|---|\n| Acme | 9 |\n\n<button class=\"action\">Create leads</button>"}
  ]
}"#;

#[test]
fn renders_each_role_with_its_format() {
    let transcript = Transcript::from_json(HISTORY).expect("history to parse");
    let registry = FormatRegistry::with_defaults();
    let renderer = TranscriptRenderer::new(&registry, TranscriptOptions::default());

    let html = renderer.render(&transcript).expect("transcript to render");
    let lines: Vec<&str> = html.split('\n').collect();

    assert_eq!(
        lines[0],
        "<div class=\"message user-message\">Find leads in &lt;b&gt;Oslo&lt;/b&gt;<br>please</div>"
    );
    assert!(lines[1].starts_with("<div class=\"message assistant-message\">Found <strong>2</strong>:<br>"));
    assert!(html.contains(
        "<table class=\"markdown-table\"><tr><th>Name</th><th>Score</th></tr><tr><td>Acme</td><td>9</td></tr></table>"
    ));
    assert!(html.ends_with("<br><br><button class=\"action\">Create leads</button></div>"));
}

#[test]
fn custom_role_mapping() {
    let transcript = Transcript::new(vec![
        ChatTurn::new(Role::System, "Line one\n\nLine two"),
        ChatTurn::new(Role::User, "**hi**"),
    ]);
    let registry = FormatRegistry::with_defaults();
    let options = TranscriptOptions {
        system_format: "paragraph-html".to_string(),
        user_format: "chat-html".to_string(),
        wrap_class: "bubble".to_string(),
        ..TranscriptOptions::default()
    };

    let html = TranscriptRenderer::new(&registry, options)
        .render(&transcript)
        .unwrap();

    assert_eq!(
        html,
        "<div class=\"bubble system-message\"><p>Line one</p><p>Line two</p></div>\n<div class=\"bubble user-message\"><strong>hi</strong></div>"
    );
}

#[test]
fn empty_transcript_renders_nothing() {
    let registry = FormatRegistry::with_defaults();
    let renderer = TranscriptRenderer::new(&registry, TranscriptOptions::default());
    assert_eq!(renderer.render(&Transcript::default()).unwrap(), "");
}

#[test]
fn malformed_history_is_an_error() {
    let result = Transcript::from_json("{\"messages\": 3}");
    assert!(matches!(result, Err(FormatError::InvalidTranscript(_))));
}
