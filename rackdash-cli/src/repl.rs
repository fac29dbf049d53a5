//! Interactive loop for the assistant stub

use std::io::Write as _;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use rackdash_core::chat::{ChatMessage, ChatRole, ChatSession, MaintenanceResponder, SendOutcome};

fn print_message(message: &ChatMessage) {
    let who = match message.role {
        ChatRole::User => "you",
        ChatRole::Model => "assistant",
    };
    println!("{}> {}", who, message.text);
}

pub async fn run() -> Result<()> {
    let mut session = ChatSession::new(Box::new(MaintenanceResponder::new()));
    for message in session.messages() {
        print_message(message);
    }
    println!("(type a question, or 'exit' to leave)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let trimmed = line.trim();
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }

        if session.send(trimmed).await == SendOutcome::Replied {
            if let Some(reply) = session.messages().last() {
                print_message(reply);
            }
        }
    }

    Ok(())
}
