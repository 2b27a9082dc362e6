//! Scripted support chat: message log, keyword responder and history
//! persistence.

pub mod responder;
pub mod session;
pub mod store;

pub use responder::{KeywordRule, Responder};
pub use session::{Author, ChatMessage, ChatSession, QuickReply};
pub use store::{HistoryError, KeyValueStore, MemoryStore};
