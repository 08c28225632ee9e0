//! Interactive console chat.

use std::sync::Arc;

use anyhow::Result;
use asna_agent::{AGENT_NAME, Responder};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Exit keywords, matched case-insensitively against the whole line.
const EXIT_KEYWORDS: &[&str] = &["quit", "exit", "bye"];

const FAREWELL: &str = "Goodbye! Have a great day!";

/// Runs the console loop until an exit keyword or EOF.
pub async fn run(responder: Arc<dyn Responder>) -> Result<()> {
    println!("Chatting with {AGENT_NAME}. Type 'quit' to exit.");

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    loop {
        stdout.write_all(b"You: ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        if is_exit(&line) {
            println!("{AGENT_NAME}: {FAREWELL}");
            break;
        }

        let reply = responder.respond(&line).await;
        println!("{AGENT_NAME}: {reply}");
    }

    Ok(())
}

/// Whether the line is one of the exit keywords.
fn is_exit(line: &str) -> bool {
    let line = line.trim().to_lowercase();
    EXIT_KEYWORDS.contains(&line.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_keywords() {
        assert!(is_exit("quit"));
        assert!(is_exit("exit"));
        assert!(is_exit("bye"));
        assert!(is_exit("QUIT"));
        assert!(is_exit("  Bye  "));
    }

    #[test]
    fn test_non_exit_lines() {
        assert!(!is_exit("hello"));
        assert!(!is_exit("goodbye for real"));
        assert!(!is_exit(""));
    }
}
