use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-flight indicator shared by all call sites of one client.
///
/// Each tracked call holds an [`InFlight`] guard, so the flag reads as set while any
/// call is pending and clears once the last one completes, fails or is dropped.
/// Overlapping calls cannot clear each other's state.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag {
    in_flight: Arc<AtomicUsize>,
}

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> InFlight {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        InFlight {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    pub fn is_set(&self) -> bool {
        self.in_flight() > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
pub struct InFlight {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_calls_keep_flag_set() {
        let flag = LoadingFlag::new();
        let first = flag.begin();
        let second = flag.begin();
        assert!(flag.is_set());

        drop(first);
        assert!(flag.is_set());

        drop(second);
        assert!(!flag.is_set());
    }

    #[test]
    fn test_clones_share_state() {
        let flag = LoadingFlag::new();
        let view = flag.clone();
        let _guard = flag.begin();
        assert!(view.is_set());
    }
}
