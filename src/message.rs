//! Message type produced by the transcript parser.
//!
//! A [`Message`] is one logical chat entry: a header line plus any
//! continuation lines that followed it. Every message carries a timestamp,
//! a sender (or the [`SYSTEM_SENDER`] sentinel) and a [`MessageKind`].
//!
//! # Examples
//!
//! ```
//! use chatlens::{Message, MessageKind};
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
//! let msg = Message::new(ts, "Alice", "Hello, world!");
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.kind(), MessageKind::Text);
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatlens::Message;
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
//! let msg = Message::new(ts, "Alice", "Hello!");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: Message = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sender value used for system notifications (joins, leaves, encryption notices).
pub const SYSTEM_SENDER: &str = "group_notification";

/// Classification of a message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Regular authored text.
    Text,
    /// Attachment replaced by the exporter's media-omitted placeholder.
    Media,
    /// Notification with no human author.
    System,
}

impl MessageKind {
    /// Returns the lowercase name used in exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Text => "text",
            MessageKind::Media => "media",
            MessageKind::System => "system",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logical entry of a chat transcript.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `DateTime<Utc>` | Wall-clock time of the header stamp |
/// | `sender` | `String` | Author display name or [`SYSTEM_SENDER`] |
/// | `text` | `String` | Body, continuation lines joined with `\n` |
/// | `kind` | [`MessageKind`] | Text, media placeholder or system notice |
///
/// Exports carry no time zone, so the stamp's wall-clock reading is stored
/// as if it were UTC. Calendar fields derived from it are therefore the
/// same numbers that appear in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent.
    pub timestamp: DateTime<Utc>,

    /// Display name of the author, or [`SYSTEM_SENDER`].
    pub sender: String,

    /// Full logical message body.
    ///
    /// May contain newlines for multiline messages.
    pub text: String,

    /// What the body represents.
    pub kind: MessageKind,
}

impl Message {
    /// Creates an authored text message.
    pub fn new(
        timestamp: DateTime<Utc>,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            text: text.into(),
            kind: MessageKind::Text,
        }
    }

    /// Creates a media-placeholder message.
    pub fn media(
        timestamp: DateTime<Utc>,
        sender: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            kind: MessageKind::Media,
            ..Self::new(timestamp, sender, placeholder)
        }
    }

    /// Creates a system notification attributed to [`SYSTEM_SENDER`].
    pub fn system(timestamp: DateTime<Utc>, text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::System,
            ..Self::new(timestamp, SYSTEM_SENDER, text)
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the timestamp.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the message kind.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Returns `true` for system notifications.
    pub fn is_system(&self) -> bool {
        self.kind == MessageKind::System
    }

    /// Returns `true` for media placeholders.
    pub fn is_media(&self) -> bool {
        self.kind == MessageKind::Media
    }

    /// Appends a continuation line to the body.
    pub(crate) fn push_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_message_new() {
        let msg = Message::new(ts(), "Alice", "Hello");
        assert_eq!(msg.sender(), "Alice");
        assert_eq!(msg.text(), "Hello");
        assert_eq!(msg.kind(), MessageKind::Text);
        assert!(!msg.is_system());
        assert!(!msg.is_media());
    }

    #[test]
    fn test_system_uses_sentinel() {
        let msg = Message::system(ts(), "Alice joined using this group's invite link");
        assert_eq!(msg.sender(), SYSTEM_SENDER);
        assert!(msg.is_system());
    }

    #[test]
    fn test_media_kind() {
        let msg = Message::media(ts(), "Bob", "<Media omitted>");
        assert!(msg.is_media());
        assert_eq!(msg.text(), "<Media omitted>");
    }

    #[test]
    fn test_push_line() {
        let mut msg = Message::new(ts(), "Alice", "first");
        msg.push_line("second");
        assert_eq!(msg.text(), "first\nsecond");
    }

    #[test]
    fn test_kind_serialization() {
        let msg = Message::media(ts(), "Bob", "<Media omitted>");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"kind\":\"media\""));
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
