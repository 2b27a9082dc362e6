use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::responder::Responder;
use super::store::{HistoryError, KeyValueStore};

/// Storage key holding the serialized message log.
pub const HISTORY_KEY: &str = "chatHistory";

const WELCOME: &str = "Welcome! Ask me anything about our courses and platform.";
const WELCOME_DELAY_MS: u64 = 500;
/// Simulated typing time before a bot reply lands, in milliseconds.
const TYPING_DELAY_MS: std::ops::Range<u64> = 1000..3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub author: Author,
    pub content: String,
    pub timestamp_ms: u64,
}

/// Canned prompt offered as a one-tap button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickReply {
    pub label: &'static str,
    pub message: &'static str,
}

const QUICK_REPLIES: &[QuickReply] = &[
    QuickReply {
        label: "Course Information",
        message: "I'd like to know more about your courses",
    },
    QuickReply {
        label: "Pricing",
        message: "What are your course prices?",
    },
    QuickReply {
        label: "Certificates",
        message: "Do you provide certificates?",
    },
    QuickReply {
        label: "Support",
        message: "I need help with something",
    },
];

#[derive(Debug, Clone)]
struct PendingReply {
    due_ms: u64,
    content: String,
}

/// One visitor's support chat.
///
/// Bot replies are scheduled with a typing delay and delivered by
/// [`ChatSession::tick`]. The log is written to the store after every
/// message; storage failures are logged and otherwise ignored.
#[derive(Debug)]
pub struct ChatSession<S> {
    store: S,
    responder: Responder,
    rng: StdRng,
    messages: Vec<ChatMessage>,
    pending: VecDeque<PendingReply>,
    open: bool,
}

impl<S: KeyValueStore> ChatSession<S> {
    /// Start a session, restoring any saved history from `store`.
    pub fn new(store: S) -> Self {
        Self::with_rng(store, StdRng::from_os_rng())
    }

    pub fn with_rng(store: S, rng: StdRng) -> Self {
        let messages = match load_history(&store) {
            Ok(messages) => messages,
            Err(e) => {
                warn!(error = %e, "discarding unreadable chat history");
                Vec::new()
            }
        };
        debug!(restored = messages.len(), "chat session started");
        Self {
            store,
            responder: Responder::default(),
            rng,
            messages,
            pending: VecDeque::new(),
            open: false,
        }
    }

    pub fn with_responder(mut self, responder: Responder) -> Self {
        self.responder = responder;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether a bot reply is pending (the typing indicator is showing).
    pub fn typing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Open the widget. The first open of an empty log queues a welcome.
    pub fn open(&mut self, now_ms: u64) {
        if self.open {
            return;
        }
        self.open = true;
        if self.messages.is_empty() && self.pending.is_empty() {
            self.schedule(WELCOME.to_string(), now_ms + WELCOME_DELAY_MS);
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self, now_ms: u64) {
        if self.open {
            self.close();
        } else {
            self.open(now_ms);
        }
    }

    /// Post a visitor message and schedule the bot's answer.
    ///
    /// Returns false, recording nothing, when `text` is blank.
    pub fn send(&mut self, text: &str, now_ms: u64) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.push(Author::User, text.to_string(), now_ms);

        let reply = self.responder.reply(text, &mut self.rng).to_string();
        let delay = self.rng.random_range(TYPING_DELAY_MS);
        self.schedule(reply, now_ms + delay);
        true
    }

    /// Canned prompts, offered only until the conversation gets going.
    pub fn quick_replies(&self) -> &'static [QuickReply] {
        if self.messages.len() <= 1 {
            QUICK_REPLIES
        } else {
            &[]
        }
    }

    /// Send the quick reply at `index`. Returns false for an unknown index.
    pub fn send_quick_reply(&mut self, index: usize, now_ms: u64) -> bool {
        match self.quick_replies().get(index) {
            Some(quick) => self.send(quick.message, now_ms),
            None => false,
        }
    }

    /// Deliver every bot reply due at or before `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Vec<ChatMessage> {
        let mut delivered = Vec::new();
        while self.pending.front().is_some_and(|p| p.due_ms <= now_ms) {
            let Some(reply) = self.pending.pop_front() else {
                break;
            };
            delivered.push(self.push(Author::Bot, reply.content, reply.due_ms));
        }
        delivered
    }

    /// Forget the conversation, including the stored copy.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.pending.clear();
        if let Err(e) = self.store.remove(HISTORY_KEY) {
            warn!(error = %e, "failed to clear chat history");
        }
    }

    fn schedule(&mut self, content: String, due_ms: u64) {
        let at = self
            .pending
            .iter()
            .position(|p| p.due_ms > due_ms)
            .unwrap_or(self.pending.len());
        self.pending.insert(at, PendingReply { due_ms, content });
    }

    fn push(&mut self, author: Author, content: String, timestamp_ms: u64) -> ChatMessage {
        let message = ChatMessage {
            author,
            content,
            timestamp_ms,
        };
        self.messages.push(message.clone());
        if let Err(e) = self.save() {
            warn!(error = %e, "failed to save chat history");
        }
        message
    }

    fn save(&mut self) -> Result<(), HistoryError> {
        let json = serde_json::to_string(&self.messages)?;
        self.store.set(HISTORY_KEY, json)
    }
}

fn load_history<S: KeyValueStore>(store: &S) -> Result<Vec<ChatMessage>, HistoryError> {
    match store.get(HISTORY_KEY)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::store::MemoryStore;

    fn session() -> ChatSession<MemoryStore> {
        ChatSession::with_rng(MemoryStore::new(), StdRng::seed_from_u64(42))
    }

    #[test]
    fn first_open_queues_welcome() {
        let mut chat = session();
        chat.open(0);
        assert!(chat.typing());
        assert!(chat.tick(499).is_empty());
        let delivered = chat.tick(500);
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].author, Author::Bot);

        chat.close();
        chat.open(1000);
        assert!(!chat.typing());
    }

    #[test]
    fn blank_messages_are_ignored() {
        let mut chat = session();
        assert!(!chat.send("   ", 0));
        assert!(chat.messages().is_empty());
    }

    #[test]
    fn reply_lands_after_typing_delay() {
        let mut chat = session();
        assert!(chat.send("  How much does it cost? ", 0));
        assert_eq!(chat.messages()[0].content, "How much does it cost?");
        assert!(chat.typing());

        assert!(chat.tick(999).is_empty());
        let delivered = chat.tick(3000);
        assert_eq!(delivered.len(), 1);
        assert!(delivered[0].content.contains("$49"));
        assert!((1000..3000).contains(&delivered[0].timestamp_ms));
        assert!(!chat.typing());
    }

    #[test]
    fn replies_arrive_in_due_order() {
        let mut chat = session();
        chat.send("certificate?", 0);
        chat.send("refund?", 10);
        let delivered = chat.tick(10_000);
        assert_eq!(delivered.len(), 2);
        assert!(delivered[0].timestamp_ms <= delivered[1].timestamp_ms);
    }

    #[test]
    fn history_survives_a_new_session() {
        let mut chat = session();
        chat.send("hello", 0);
        chat.tick(5000);
        let store = chat.store().clone();

        let restored = ChatSession::with_rng(store, StdRng::seed_from_u64(1));
        assert_eq!(restored.messages().len(), 2);
        assert_eq!(restored.messages()[0].content, "hello");
    }

    #[test]
    fn corrupt_history_is_discarded() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, "not json".into()).unwrap();
        let chat = ChatSession::with_rng(store, StdRng::seed_from_u64(1));
        assert!(chat.messages().is_empty());
    }

    #[test]
    fn quick_replies_disappear_once_chatting() {
        let mut chat = session();
        assert_eq!(chat.quick_replies().len(), 4);
        assert!(chat.send_quick_reply(1, 0));
        chat.tick(5000);
        assert!(chat.quick_replies().is_empty());
        assert!(!chat.send_quick_reply(0, 5000));
    }

    #[test]
    fn clear_wipes_log_and_store() {
        let mut chat = session();
        chat.send("hi", 0);
        chat.clear();
        assert!(chat.messages().is_empty());
        assert!(!chat.typing());
        assert_eq!(chat.store().get(HISTORY_KEY).unwrap(), None);
    }
}
