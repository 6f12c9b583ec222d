use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::watch;

const WINDOW_SCROLL_JS: &str = r#"
    const report = () => dioxus.send(window.scrollY);
    window.addEventListener("scroll", report, { passive: true });
    report();
"#;

/// Viewport scroll position, owned by the app root and shared through context.
#[derive(Clone)]
pub struct ScrollFeed {
    tx: Arc<watch::Sender<f64>>,
}

impl ScrollFeed {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(0.0);
        Self { tx: Arc::new(tx) }
    }

    /// Succeeds whether or not anyone is listening.
    pub fn publish(&self, offset: f64) {
        self.tx.send_replace(offset);
    }

    pub fn subscribe(&self) -> ScrollSubscription {
        ScrollSubscription { rx: self.tx.subscribe() }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ScrollFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Live interest in the scroll feed. Dropping it unsubscribes.
pub struct ScrollSubscription {
    rx: watch::Receiver<f64>,
}

impl ScrollSubscription {
    pub fn current(&mut self) -> f64 {
        *self.rx.borrow_and_update()
    }

    /// Waits for the next published offset. `None` once the feed is gone.
    pub async fn next(&mut self) -> Option<f64> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}

/// Forwards `window.scrollY` into the feed for as long as the eval channel stays open.
pub async fn follow_window_scroll(feed: ScrollFeed) {
    let mut eval = document::eval(WINDOW_SCROLL_JS);
    tracing::info!("following window scroll");

    loop {
        match eval.recv::<f64>().await {
            Ok(offset) => feed.publish(offset),
            Err(e) => {
                tracing::warn!("window scroll bridge stopped: {:?}", e);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::state::{NavEvent, NavState, ScrollMode};

    #[test]
    fn test_subscribe_and_release() {
        let feed = ScrollFeed::new();
        assert_eq!(feed.subscriber_count(), 0);

        let sub = feed.subscribe();
        let other = feed.subscribe();
        assert_eq!(feed.subscriber_count(), 2);

        drop(sub);
        assert_eq!(feed.subscriber_count(), 1);
        drop(other);
        assert_eq!(feed.subscriber_count(), 0);

        // Publishing into a feed nobody listens to is a no-op
        feed.publish(120.0);
    }

    #[test]
    fn test_new_subscriber_sees_current_offset() {
        let feed = ScrollFeed::new();
        feed.publish(33.0);

        let mut sub = feed.subscribe();
        assert_eq!(sub.current(), 33.0);
    }

    #[tokio::test]
    async fn test_synthetic_scroll_drives_state() {
        let feed = ScrollFeed::new();
        let mut sub = feed.subscribe();
        let mut state = NavState::new("/");

        state.apply(NavEvent::Scrolled(sub.current()));
        assert_eq!(state.scroll_mode(), ScrollMode::Transparent);

        feed.publish(50.0);
        let offset = sub.next().await.unwrap();
        state.apply(NavEvent::Scrolled(offset));
        assert_eq!(state.scroll_mode(), ScrollMode::Compact);

        feed.publish(10.0);
        let offset = sub.next().await.unwrap();
        state.apply(NavEvent::Scrolled(offset));
        assert_eq!(state.scroll_mode(), ScrollMode::Transparent);
    }

    #[tokio::test]
    async fn test_same_offset_is_still_delivered() {
        let feed = ScrollFeed::new();
        let mut sub = feed.subscribe();

        feed.publish(0.0);
        assert_eq!(sub.next().await, Some(0.0));
    }

    #[tokio::test]
    async fn test_next_ends_when_feed_is_dropped() {
        let feed = ScrollFeed::new();
        let mut sub = feed.subscribe();

        drop(feed);
        assert_eq!(sub.next().await, None);
    }

    #[tokio::test]
    async fn test_subscription_released_with_its_task() {
        let feed = ScrollFeed::new();
        let sub = feed.subscribe();

        let handle = tokio::spawn(async move {
            let mut sub = sub;
            while sub.next().await.is_some() {}
        });
        tokio::task::yield_now().await;
        assert_eq!(feed.subscriber_count(), 1);

        // Same path a component takes on unmount: the future holding the subscription is dropped
        handle.abort();
        let _ = handle.await;
        assert_eq!(feed.subscriber_count(), 0);
    }
}
