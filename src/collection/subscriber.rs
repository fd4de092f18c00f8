//! Change notification for collection views.

use tokio::sync::watch;

use super::snapshot::ViewSnapshot;

/// Receives a fresh snapshot after every mutation of a collection view.
pub trait ViewSubscriber: Send {
    fn on_change(&mut self, snapshot: &ViewSnapshot);
}

impl<F> ViewSubscriber for F
where
    F: FnMut(&ViewSnapshot) + Send,
{
    fn on_change(&mut self, snapshot: &ViewSnapshot) {
        self(snapshot)
    }
}

/// Subscriber that publishes snapshots into a `tokio::sync::watch` channel.
///
/// The receiving side reports `has_changed()` after each mutation, which is
/// what the event loop uses to decide when to redraw.
#[derive(Debug)]
pub struct WatchSubscriber {
    tx: watch::Sender<ViewSnapshot>,
}

impl WatchSubscriber {
    /// Create a subscriber and the receiver that observes it.
    pub fn channel() -> (Self, watch::Receiver<ViewSnapshot>) {
        let (tx, rx) = watch::channel(ViewSnapshot::default());
        (Self { tx }, rx)
    }
}

impl ViewSubscriber for WatchSubscriber {
    fn on_change(&mut self, snapshot: &ViewSnapshot) {
        // send_replace keeps working when every receiver is gone
        self.tx.send_replace(snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::LoadStatus;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_closure_subscriber() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut subscriber = move |snapshot: &ViewSnapshot| {
            sink.lock().unwrap().push(snapshot.current_page);
        };

        let snapshot = ViewSnapshot::default();
        subscriber.on_change(&snapshot);
        subscriber.on_change(&snapshot);

        assert_eq!(*seen.lock().unwrap(), vec![1, 1]);
    }

    #[test]
    fn test_watch_subscriber_marks_changed() {
        let (mut subscriber, mut rx) = WatchSubscriber::channel();
        assert!(!rx.has_changed().unwrap());

        let mut snapshot = ViewSnapshot::default();
        snapshot.status = LoadStatus::Loading;
        subscriber.on_change(&snapshot);

        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().status.is_loading());
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_watch_subscriber_survives_dropped_receiver() {
        let (mut subscriber, rx) = WatchSubscriber::channel();
        drop(rx);
        subscriber.on_change(&ViewSnapshot::default());
    }
}
