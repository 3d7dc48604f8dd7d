//! Chat transcript behavior against a scripted gateway.

use std::sync::Arc;

use dorksearch_core::testing::MockGateway;
use dorksearch_core::{ChatRole, ChatTranscript, CHAT_FALLBACK_TEXT, NO_RESPONSE_TEXT};

#[tokio::test]
async fn session_is_created_lazily_and_reused() {
    let gateway = Arc::new(
        MockGateway::new()
            .chat_reply(Ok("Try site:gov filetype:xls"))
            .chat_reply(Ok("Add intext:\"budget\"")),
    );
    let mut transcript = ChatTranscript::new(gateway.clone());
    assert!(!transcript.has_session());
    assert_eq!(gateway.sessions_created(), 0);

    transcript.send("spreadsheets on gov sites").await;
    transcript.send("only budgets").await;

    assert_eq!(gateway.sessions_created(), 1);
    assert!(transcript.has_session());
    assert_eq!(
        gateway.chat_messages(),
        vec!["spreadsheets on gov sites", "only budgets"]
    );

    let roles: Vec<ChatRole> = transcript.messages().iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![ChatRole::User, ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]
    );
    assert_eq!(transcript.messages()[3].text, "Add intext:\"budget\"");
}

#[tokio::test]
async fn failure_appends_fallback_and_session_survives() {
    let gateway = Arc::new(
        MockGateway::new()
            .chat_reply(Err("connection reset"))
            .chat_reply(Ok("back online")),
    );
    let mut transcript = ChatTranscript::new(gateway.clone());

    let reply = transcript.send("hello").await.cloned().unwrap();
    assert_eq!(reply.role, ChatRole::Assistant);
    assert_eq!(reply.text, CHAT_FALLBACK_TEXT);
    assert!(!transcript.is_loading());

    let reply = transcript.send("hello again").await.cloned().unwrap();
    assert_eq!(reply.text, "back online");
    assert_eq!(gateway.sessions_created(), 1);
    assert_eq!(transcript.messages().len(), 4);
}

#[tokio::test]
async fn empty_reply_becomes_placeholder() {
    let gateway = Arc::new(MockGateway::new().chat_reply(Ok("")));
    let mut transcript = ChatTranscript::new(gateway);

    let reply = transcript.send("anything").await.cloned().unwrap();
    assert_eq!(reply.text, NO_RESPONSE_TEXT);
}

#[tokio::test]
async fn blank_input_is_ignored() {
    let gateway = Arc::new(MockGateway::new());
    let mut transcript = ChatTranscript::new(gateway.clone());

    assert!(transcript.send("   ").await.is_none());
    assert!(transcript.messages().is_empty());
    assert_eq!(gateway.sessions_created(), 0);
}

#[tokio::test]
async fn user_text_is_trimmed() {
    let gateway = Arc::new(MockGateway::new().chat_reply(Ok("ok")));
    let mut transcript = ChatTranscript::new(gateway.clone());

    transcript.send("  inurl:admin?  \n").await;
    assert_eq!(transcript.messages()[0].text, "inurl:admin?");
    assert_eq!(gateway.chat_messages(), vec!["inurl:admin?"]);
}

#[tokio::test]
async fn dropping_transcript_discards_session() {
    let gateway = Arc::new(MockGateway::new().chat_reply(Ok("one")).chat_reply(Ok("two")));

    {
        let mut transcript = ChatTranscript::new(gateway.clone());
        transcript.send("first view").await;
    }
    let mut transcript = ChatTranscript::new(gateway.clone());
    transcript.send("second view").await;

    assert_eq!(gateway.sessions_created(), 2);
    assert_eq!(transcript.messages().len(), 2);
}
