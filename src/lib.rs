//! # wisdom-site
//!
//! Backend for the Wisdom Consultoria landing page: the contact form
//! validator with its simulated submission, the "Wisdom AI" keyword chatbot,
//! persisted visitor preferences and an HTTP surface serving all three.

pub mod chat;
pub mod config;
pub mod error;
pub mod form;
pub mod latency;
pub mod prefs;
pub mod server;

pub use chat::{ChatSession, Responder, Transcript};
pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use form::{ContactForm, FieldId};
pub use prefs::{PreferenceStore, Preferences, Theme};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
