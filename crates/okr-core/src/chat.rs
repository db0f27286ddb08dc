//! Chat widget with a delayed canned reply.
//!
//! The widget is independent of the objective session. Each message sent
//! schedules one reply on the tokio runtime; closing the widget hides it but
//! never cancels a reply that is already on its way.

use std::{fmt, sync::Arc, time::Duration};

use log::debug;
use serde::{Deserialize, Serialize};
use tokio::{sync::Mutex, task::JoinHandle};

/// Shown while the transcript is empty.
pub const GREETING: &str = "Selam, What can I help you for today?";

/// The only reply the widget ever gives.
pub const CANNED_REPLY: &str = "Thank you for your message! I'm here to help you with any questions about your OKRs, objectives, or the platform.";

/// Delay before the canned reply lands.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub is_user: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
        }
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let speaker = if self.is_user { "You" } else { "Selam" };
        write!(f, "**{speaker}:** {}", self.text)
    }
}

#[derive(Debug)]
pub struct ChatWidget {
    transcript: Arc<Mutex<Vec<ChatMessage>>>,
    open: bool,
    reply_delay: Duration,
    pending: Vec<JoinHandle<()>>,
}

impl ChatWidget {
    pub fn new() -> Self {
        Self {
            transcript: Arc::new(Mutex::new(Vec::new())),
            open: false,
            reply_delay: DEFAULT_REPLY_DELAY,
            pending: Vec::new(),
        }
    }

    /// Overrides the reply delay.
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// Appends a user message and schedules the canned reply.
    ///
    /// Blank text is ignored and returns `false`. Must be called from within
    /// a tokio runtime.
    pub async fn send(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text.trim().is_empty() {
            debug!("chat: ignored blank message");
            return false;
        }

        self.transcript.lock().await.push(ChatMessage::user(text));

        let transcript = Arc::clone(&self.transcript);
        let delay = self.reply_delay;
        self.pending.retain(|handle| !handle.is_finished());
        self.pending.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            transcript.lock().await.push(ChatMessage::assistant(CANNED_REPLY));
            debug!("chat: reply delivered after {delay:?}");
        }));
        true
    }

    /// Waits until every scheduled reply has been appended.
    pub async fn settle(&mut self) {
        for handle in self.pending.drain(..) {
            if let Err(e) = handle.await {
                debug!("chat: reply task ended early: {e}");
            }
        }
    }

    /// Snapshot of the transcript.
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.lock().await.clone()
    }

    /// Markdown rendering of the transcript, or the greeting when empty.
    pub async fn render(&self) -> String {
        let transcript = self.transcript.lock().await;
        if transcript.is_empty() {
            return format!("{GREETING}\n");
        }
        let mut out = String::new();
        for message in transcript.iter() {
            out.push_str(&message.to_string());
            out.push_str("\n\n");
        }
        out
    }
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_delay() {
        let mut chat = ChatWidget::new();
        chat.open();
        assert!(chat.send("How do I set an objective?").await);

        let transcript = chat.transcript().await;
        assert_eq!(transcript, vec![ChatMessage::user("How do I set an objective?")]);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(chat.transcript().await.len(), 1);

        tokio::time::sleep(Duration::from_millis(2)).await;
        let transcript = chat.transcript().await;
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[1], ChatMessage::assistant(CANNED_REPLY));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_survives_close() {
        let mut chat = ChatWidget::new().with_reply_delay(Duration::from_millis(50));
        chat.open();
        assert!(chat.send("hello").await);
        chat.close();
        assert!(!chat.is_open());

        chat.settle().await;
        let transcript = chat.transcript().await;
        assert_eq!(transcript.len(), 2);
        assert!(!transcript[1].is_user);
    }

    #[tokio::test]
    async fn test_blank_message_ignored() {
        let mut chat = ChatWidget::new();
        assert!(!chat.send("   ").await);
        assert!(!chat.send("").await);
        assert!(chat.transcript().await.is_empty());
    }

    #[tokio::test]
    async fn test_render_greeting_when_empty() {
        let chat = ChatWidget::new();
        assert_eq!(chat.render().await, format!("{GREETING}\n"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_reply_per_message() {
        let mut chat = ChatWidget::new().with_reply_delay(Duration::from_millis(10));
        chat.send("first").await;
        chat.send("second").await;
        chat.settle().await;

        let transcript = chat.transcript().await;
        let users = transcript.iter().filter(|m| m.is_user).count();
        let replies = transcript.iter().filter(|m| !m.is_user).count();
        assert_eq!((users, replies), (2, 2));

        let rendered = chat.render().await;
        assert!(rendered.starts_with("**You:** first"));
        assert!(rendered.contains("**Selam:** Thank you for your message!"));
    }
}
