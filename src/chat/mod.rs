//! Chat module: the "Wisdom AI" keyword chatbot.
//!
//! ```text
//! User message
//!   → normalize (lowercase + trim)
//!   → sensitive topics (table order)
//!   → knowledge base (table order)
//!   → default buckets
//!   → question + answer, appended to the transcript after the reply latency
//! ```

pub mod knowledge;
pub mod knowledge_data;
pub mod render;
pub mod responder;
pub mod sensitive;
pub mod session;

pub use knowledge::{Category, KnowledgeBase, KnowledgeEntry};
pub use render::{format_message_time, TranscriptRenderer};
pub use responder::{
    normalize_message, Chooser, MatchSource, RandomChooser, ReplyCandidates, Responder,
};
pub use sensitive::{find_sensitive_topic, SensitiveTopic, SENSITIVE_TOPICS};
pub use session::{
    ChatInput, ChatMessage, ChatSession, PendingReply, Role, SendOutcome, Transcript,
    DEFAULT_REPLY_LATENCY,
};
