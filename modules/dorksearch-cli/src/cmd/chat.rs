//! Line-oriented chat with the dorking assistant.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use console::style;
use dorksearch_core::{ChatTranscript, DorkGateway};

use crate::context::AppContext;

const EXIT_COMMAND: &str = "/exit";

pub async fn run(ctx: &AppContext) -> Result<()> {
    ctx.print_header("Dork Assistant");
    ctx.print_info("Ask about dorking techniques. /exit or Ctrl-D to leave.");

    let stdin = io::stdin();
    repl(ctx.gateway.clone(), stdin.lock(), || {
        eprint!("{} ", style("you ›").cyan().bold());
        let _ = io::stderr().flush();
    })
    .await?;
    Ok(())
}

/// Drive one transcript from `input` until `/exit` or EOF.
///
/// Replies are printed as they arrive and also returned.
async fn repl<R: BufRead>(
    gateway: Arc<dyn DorkGateway>,
    input: R,
    prompt: impl Fn(),
) -> Result<Vec<String>> {
    let mut transcript = ChatTranscript::new(gateway);
    let mut lines = input.lines();
    let mut replies = Vec::new();

    loop {
        prompt();
        let Some(line) = lines.next() else {
            eprintln!();
            break;
        };
        let line = line?;
        if line.trim() == EXIT_COMMAND {
            break;
        }

        if let Some(reply) = transcript.send(&line).await {
            println!("{} {}", style("ai ›").magenta().bold(), reply.text);
            replies.push(reply.text.clone());
        }
    }

    Ok(replies)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use dorksearch_core::testing::MockGateway;
    use dorksearch_core::CHAT_FALLBACK_TEXT;

    use super::*;

    #[tokio::test]
    async fn repl_reuses_one_session_until_exit() {
        let gateway = Arc::new(
            MockGateway::new()
                .chat_reply(Ok("Try intitle:\"index of\""))
                .chat_reply(Err("timeout"))
                .chat_reply(Ok("site:edu intitle:\"index of\"")),
        );
        let input = Cursor::new("open directories?\n\nagain\nonly .edu\n/exit\nignored\n");

        let replies = repl(gateway.clone(), input, || {}).await.unwrap();

        assert_eq!(
            replies,
            vec![
                "Try intitle:\"index of\"".to_string(),
                CHAT_FALLBACK_TEXT.to_string(),
                "site:edu intitle:\"index of\"".to_string(),
            ]
        );
        assert_eq!(gateway.sessions_created(), 1);
        assert_eq!(gateway.chat_messages().len(), 3);
    }

    #[tokio::test]
    async fn eof_ends_session() {
        let gateway = Arc::new(MockGateway::new().chat_reply(Ok("hi")));

        let replies = repl(gateway, Cursor::new("hello"), || {}).await.unwrap();

        assert_eq!(replies, vec!["hi".to_string()]);
    }
}
