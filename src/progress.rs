//! Progress delivery from the measurement loop to its consumer
//!
//! The loop reports at most one event per chunk, in time order, best
//! effort. Delivery must never block the loop: a slow or absent consumer
//! costs dropped events, not measurement time.

use crate::models::ProgressEvent;
use tokio::sync::mpsc;

/// Accepts progress events without blocking the sender
pub trait ProgressSink: Send + Sync {
    /// Deliver one event. Implementations must return promptly; dropping
    /// the event is acceptable when the consumer cannot keep up.
    fn report(&self, event: ProgressEvent);
}

/// Bounded-channel sink: events are dropped when the buffer is full
impl ProgressSink for mpsc::Sender<ProgressEvent> {
    fn report(&self, event: ProgressEvent) {
        let _ = self.try_send(event);
    }
}

/// Callback sink for consumers that just want a closure
impl<F> ProgressSink for F
where
    F: Fn(ProgressEvent) + Send + Sync,
{
    fn report(&self, event: ProgressEvent) {
        self(event)
    }
}

/// Sink that discards everything
pub struct NullSink;

impl ProgressSink for NullSink {
    fn report(&self, _event: ProgressEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn event(percent: u8) -> ProgressEvent {
        ProgressEvent {
            current_mbps: 10.0,
            percent_complete: percent,
            phase_label: "Downloading...".to_string(),
        }
    }

    #[tokio::test]
    async fn test_channel_sink_delivers() {
        let (tx, mut rx) = mpsc::channel(4);
        tx.report(event(10));
        tx.report(event(20));

        assert_eq!(rx.recv().await.unwrap().percent_complete, 10);
        assert_eq!(rx.recv().await.unwrap().percent_complete, 20);
    }

    #[tokio::test]
    async fn test_full_channel_drops_instead_of_blocking() {
        let (tx, mut rx) = mpsc::channel(1);
        tx.report(event(1));
        // Buffer full: must return immediately, the event is lost
        tx.report(event(2));

        assert_eq!(rx.recv().await.unwrap().percent_complete, 1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_closure_sink() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let sink = move |_event: ProgressEvent| {
            counter.fetch_add(1, Ordering::SeqCst);
        };
        sink.report(event(50));
        sink.report(event(60));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_null_sink() {
        NullSink.report(event(99));
    }
}
