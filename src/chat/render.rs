//! HTML rendering of the transcript.
//!
//! Templates are registered with an `.html` name so tera auto-escapes every
//! interpolated value; message text never reaches the page as raw markup.

use chrono::{DateTime, TimeZone};
use tera::{Context, Tera};

use super::session::{ChatMessage, Role};
use crate::error::Result;

const MESSAGE_TEMPLATE_NAME: &str = "message.html";

const MESSAGE_TEMPLATE: &str = r#"<div class="message {{ css_class }}">
    <div class="message-header"><i class="fas {{ icon }}"></i> {{ author }}</div>
    <div class="message-content">{{ text }}</div>
    <div class="message-timestamp">{{ timestamp }}</div>
</div>"#;

/// Transcript timestamp, e.g. `14:05 - 19/10/2026`.
pub fn format_message_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%H:%M - %d/%m/%Y").to_string()
}

/// Renders transcript entries to escaped HTML.
pub struct TranscriptRenderer {
    tera: Tera,
}

impl TranscriptRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(MESSAGE_TEMPLATE_NAME, MESSAGE_TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render_message(&self, message: &ChatMessage) -> Result<String> {
        let (css_class, icon, author) = match message.role {
            Role::User => ("user-message", "fa-user", "Você"),
            Role::Assistant => ("ai-message", "fa-robot", "Wisdom AI"),
        };

        let mut context = Context::new();
        context.insert("css_class", css_class);
        context.insert("icon", icon);
        context.insert("author", author);
        context.insert("text", &message.text);
        context.insert("timestamp", &format_message_time(&message.timestamp));

        Ok(self.tera.render(MESSAGE_TEMPLATE_NAME, &context)?)
    }

    /// All entries in order, one block per message.
    pub fn render_transcript(&self, messages: &[ChatMessage]) -> Result<String> {
        let blocks = messages
            .iter()
            .map(|message| self.render_message(message))
            .collect::<Result<Vec<_>>>()?;
        Ok(blocks.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn message(role: Role, text: &str) -> ChatMessage {
        ChatMessage {
            role,
            text: text.to_string(),
            timestamp: Local::now(),
        }
    }

    #[test]
    fn test_user_markup_is_escaped() {
        let renderer = TranscriptRenderer::new().unwrap();
        let html = renderer
            .render_message(&message(Role::User, "<script>alert('x')</script> & co"))
            .unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; co"));
        assert!(html.contains("user-message"));
        assert!(html.contains("Você"));
    }

    #[test]
    fn test_assistant_header() {
        let renderer = TranscriptRenderer::new().unwrap();
        let html = renderer
            .render_message(&message(Role::Assistant, "Tecidos e vestuário."))
            .unwrap();
        assert!(html.contains("ai-message"));
        assert!(html.contains("Wisdom AI"));
        assert!(html.contains("Tecidos e vestuário."));
    }

    #[test]
    fn test_transcript_keeps_order() {
        let renderer = TranscriptRenderer::new().unwrap();
        let html = renderer
            .render_transcript(&[
                message(Role::User, "primeira"),
                message(Role::Assistant, "segunda"),
            ])
            .unwrap();
        let first = html.find("primeira").unwrap();
        let second = html.find("segunda").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_message_time_format() {
        use chrono::{FixedOffset, NaiveDate};
        let at = FixedOffset::east_opt(0)
            .unwrap()
            .from_local_datetime(
                &NaiveDate::from_ymd_opt(2026, 3, 7)
                    .unwrap()
                    .and_hms_opt(14, 5, 0)
                    .unwrap(),
            )
            .unwrap();
        assert_eq!(format_message_time(&at), "14:05 - 07/03/2026");
    }
}
