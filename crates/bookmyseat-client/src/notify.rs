use crate::error::ApiError;
use std::sync::Arc;
use tracing::error;

/// Surfaces a message to the user. Implementations decide how prominent that is.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Central failure handler: logs the raw error, then notifies with the classified message.
#[derive(Clone)]
pub struct ErrorHandler {
    notifier: Arc<dyn Notifier>,
}

impl ErrorHandler {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub fn handle(&self, err: &ApiError) -> Option<String> {
        // A cancelled call was abandoned on purpose, not failed
        if err.is_cancelled() {
            return None;
        }

        error!(kind = ?err.kind(), status = ?err.status(), error = %err, "Error occurred");

        let message = err.user_message();
        self.notifier.notify(&message);
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingNotifier;

    #[test]
    fn test_handler_notifies_classified_message() {
        let notifier = Arc::new(RecordingNotifier::default());
        let handler = ErrorHandler::new(notifier.clone());

        let message = handler.handle(&ApiError::from_status(500, "http://svc/reviews"));

        assert_eq!(message.as_deref(), Some("Server error. Please try again later."));
        assert_eq!(notifier.messages(), vec!["Server error. Please try again later.".to_string()]);
    }

    #[test]
    fn test_cancellation_is_silent() {
        let notifier = Arc::new(RecordingNotifier::default());
        let handler = ErrorHandler::new(notifier.clone());

        assert_eq!(handler.handle(&ApiError::Cancelled), None);
        assert!(notifier.messages().is_empty());
    }
}
