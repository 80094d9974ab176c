use bookmyseat_client::{ApiError, ErrorKind};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Per-request state owned by the view that issued the request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Pending,
    Ready(T),
    Failed(ErrorKind),
}

impl<T> RequestState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RequestState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<ErrorKind> {
        match self {
            RequestState::Failed(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

/// Cancellation for one view's fetches.
///
/// Each fetch runs under a child of the view token; starting a new fetch cancels the
/// previous child, and cancelling the view token (on navigation) stops everything.
#[derive(Debug)]
pub struct FetchScope {
    view: CancellationToken,
    current: CancellationToken,
}

impl FetchScope {
    pub fn new() -> Self {
        let view = CancellationToken::new();
        let current = view.child_token();
        Self { view, current }
    }

    /// A scope that is also cancelled when `parent` is
    pub fn within(parent: &CancellationToken) -> Self {
        let view = parent.child_token();
        let current = view.child_token();
        Self { view, current }
    }

    pub fn restart(&mut self) -> CancellationToken {
        self.current.cancel();
        self.current = self.view.child_token();
        self.current.clone()
    }

    /// Token that cancels every current and future fetch of the view
    pub fn handle(&self) -> CancellationToken {
        self.view.clone()
    }

    pub fn cancel(&self) {
        self.view.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.view.is_cancelled()
    }
}

impl Default for FetchScope {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `call` until it finishes or `token` is cancelled. Dropping the call aborts it.
pub async fn cancellable<T, F>(token: CancellationToken, call: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(ApiError::Cancelled),
        result = call => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_restart_cancels_previous_fetch() {
        let mut scope = FetchScope::new();
        let first = scope.restart();
        let second = scope.restart();
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());

        let result = cancellable(first, async { Ok::<_, ApiError>(1) }).await;
        assert_eq!(result, Err(ApiError::Cancelled));
        assert_eq!(cancellable(second, async { Ok::<_, ApiError>(2) }).await, Ok(2));
    }

    #[tokio::test]
    async fn test_view_cancel_reaches_new_fetches() {
        let mut scope = FetchScope::new();
        let handle = scope.handle();
        handle.cancel();

        assert!(scope.is_cancelled());
        assert!(scope.restart().is_cancelled());
    }

    #[test]
    fn test_request_state_accessors() {
        let ready: RequestState<u8> = RequestState::Ready(3);
        assert_eq!(ready.value(), Some(&3));
        assert_eq!(RequestState::<u8>::Failed(ErrorKind::NotFound).error(), Some(ErrorKind::NotFound));
        assert!(RequestState::<u8>::Pending.is_pending());
        assert_eq!(RequestState::<u8>::default(), RequestState::Idle);
    }

    #[test]
    fn test_scope_within_parent_follows_parent() {
        let parent = CancellationToken::new();
        let mut scope = FetchScope::within(&parent);
        let fetch = scope.restart();

        parent.cancel();

        assert!(scope.is_cancelled());
        assert!(fetch.is_cancelled());
    }
}
