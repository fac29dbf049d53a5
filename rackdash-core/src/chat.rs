//! Chat assistant session and responder backends
//!
//! The assistant is a pluggable stub behind the [`Responder`] trait. The
//! shipped backend simulates a thinking delay and always answers with the
//! maintenance-mode notice; no external model is called. A session holds the
//! ordered message sequence in memory for the life of the process.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

/// Artificial delay before the canned reply lands
pub const REPLY_DELAY: Duration = Duration::from_millis(600);

const GREETING: &str = "Hi, I'm the architecture assistant for this dashboard. I can answer \
     questions about the R5 server, the Katana17 workstation, service \
     isolation and RAM allocation.";

const MAINTENANCE_NOTICE: &str = "The assistant is in maintenance mode while the model backend is \
     re-provisioned, so live answers are disabled. The machine, service and \
     allocation data on the dashboard is still current.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One message in a chat session
#[derive(Clone, Debug, Serialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    pub at: SystemTime,
}

/// A backend that turns a prompt into one reply.
///
/// Implementations must be usable from async contexts and must always
/// produce a reply; failures are expressed as reply text, never as a
/// missing message.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Human-readable name of this backend
    fn name(&self) -> &'static str;

    async fn reply(&self, prompt: &str) -> String;
}

/// Production stub: waits the artificial delay, then reports that the
/// assistant is offline for maintenance
pub struct MaintenanceResponder {
    delay: Duration,
}

impl MaintenanceResponder {
    pub fn new() -> Self {
        Self { delay: REPLY_DELAY }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for MaintenanceResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Responder for MaintenanceResponder {
    fn name(&self) -> &'static str {
        "maintenance"
    }

    async fn reply(&self, _prompt: &str) -> String {
        tokio::time::sleep(self.delay).await;
        MAINTENANCE_NOTICE.to_string()
    }
}

/// Test/demo backend cycling through a fixed list of replies with no delay
pub struct ScriptedResponder {
    replies: Vec<String>,
    cursor: AtomicUsize,
}

impl ScriptedResponder {
    pub fn new(replies: Vec<String>) -> Self {
        Self {
            replies,
            cursor: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Responder for ScriptedResponder {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn reply(&self, _prompt: &str) -> String {
        if self.replies.is_empty() {
            return String::new();
        }
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed) % self.replies.len();
        self.replies[idx].clone()
    }
}

/// Result of a [`ChatSession::send`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was blank; the sequence is unchanged
    Ignored,
    /// User message and exactly one reply were appended
    Replied,
}

/// An in-memory chat transcript bound to one responder.
///
/// `send` borrows the session mutably and awaits the reply before
/// returning, so overlapping sends are serialized by construction.
pub struct ChatSession {
    responder: Box<dyn Responder>,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(responder: Box<dyn Responder>) -> Self {
        let mut session = Self {
            responder,
            messages: Vec::new(),
        };
        session.push(ChatRole::Model, GREETING);
        session
    }

    pub fn responder_name(&self) -> &'static str {
        self.responder.name()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append the user message and the backend's reply. Blank input is a
    /// silent no-op.
    pub async fn send(&mut self, text: &str) -> SendOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SendOutcome::Ignored;
        }

        self.push(ChatRole::User, trimmed);
        let reply = self.responder.reply(trimmed).await;
        self.push(ChatRole::Model, &reply);
        SendOutcome::Replied
    }

    fn push(&mut self, role: ChatRole, text: &str) {
        self.messages.push(ChatMessage {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.to_string(),
            at: SystemTime::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maintenance_session() -> ChatSession {
        ChatSession::new(Box::new(MaintenanceResponder::new()))
    }

    #[tokio::test(start_paused = true)]
    async fn blank_input_is_ignored() {
        let mut session = maintenance_session();
        let before = session.messages().len();

        assert_eq!(session.send("").await, SendOutcome::Ignored);
        assert_eq!(session.send("   ").await, SendOutcome::Ignored);
        assert_eq!(session.send("\t\n").await, SendOutcome::Ignored);
        assert_eq!(session.messages().len(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn send_appends_user_then_model() {
        let mut session = maintenance_session();
        let before = session.messages().len();

        assert_eq!(session.send("hello").await, SendOutcome::Replied);
        let messages = session.messages();
        assert_eq!(messages.len(), before + 2);

        let user = &messages[before];
        let model = &messages[before + 1];
        assert_eq!(user.role, ChatRole::User);
        assert_eq!(user.text, "hello");
        assert_eq!(model.role, ChatRole::Model);
        assert!(model.text.contains("maintenance mode"));
        assert!(user.at <= model.at, "user message must not postdate reply");
    }

    #[tokio::test(start_paused = true)]
    async fn session_opens_with_the_greeting() {
        let session = maintenance_session();
        let messages = session.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, ChatRole::Model);
    }

    #[tokio::test]
    async fn scripted_responder_cycles() {
        let responder = ScriptedResponder::new(vec!["one".into(), "two".into()]);
        assert_eq!(responder.reply("a").await, "one");
        assert_eq!(responder.reply("b").await, "two");
        assert_eq!(responder.reply("c").await, "one");
    }

    #[tokio::test(start_paused = true)]
    async fn every_send_gets_exactly_one_reply() {
        let mut session = ChatSession::new(Box::new(ScriptedResponder::new(vec!["ok".into()])));
        for i in 0..3 {
            session.send(&format!("ping {}", i)).await;
        }
        // greeting + 3 * (user, model)
        assert_eq!(session.messages().len(), 7);
        let model_replies = session
            .messages()
            .iter()
            .filter(|m| m.role == ChatRole::Model)
            .count();
        assert_eq!(model_replies, 4);
    }
}
