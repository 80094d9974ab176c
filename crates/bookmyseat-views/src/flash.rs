use std::time::Duration;
use tokio::time::Instant;

/// A message that disappears on its own once its lifetime has passed.
#[derive(Debug, Clone, Default)]
pub struct FlashMessage {
    text: Option<String>,
    expires_at: Option<Instant>,
}

impl FlashMessage {
    pub fn show(&mut self, text: impl Into<String>, lifetime: Duration) {
        self.text = Some(text.into());
        self.expires_at = Some(Instant::now() + lifetime);
    }

    pub fn clear(&mut self) {
        self.text = None;
        self.expires_at = None;
    }

    pub fn current(&self) -> Option<&str> {
        match self.expires_at {
            Some(deadline) if Instant::now() >= deadline => None,
            _ => self.text.as_deref(),
        }
    }
}
