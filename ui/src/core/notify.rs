//! Change notifications fanned out to subscribed views.

use std::cell::RefCell;

use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};

use super::prefs::{Language, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Theme(Theme),
    Language(Language),
    /// The session may have changed; listeners should re-check it.
    Auth,
}

/// Observer list over unbounded channels. Dropped receivers are pruned on
/// the next publish.
#[derive(Debug, Default)]
pub struct Notifier {
    subscribers: RefCell<Vec<UnboundedSender<Change>>>,
}

impl Notifier {
    pub fn subscribe(&self) -> UnboundedReceiver<Change> {
        let (tx, rx) = unbounded();
        self.subscribers.borrow_mut().push(tx);
        rx
    }

    pub fn publish(&self, change: Change) {
        self.subscribers
            .borrow_mut()
            .retain(|tx| tx.unbounded_send(change).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subscriber_sees_changes_in_order() {
        let notifier = Notifier::default();
        let mut a = notifier.subscribe();
        let mut b = notifier.subscribe();

        notifier.publish(Change::Theme(Theme::Dark));
        notifier.publish(Change::Auth);

        for rx in [&mut a, &mut b] {
            assert_eq!(rx.try_next().unwrap(), Some(Change::Theme(Theme::Dark)));
            assert_eq!(rx.try_next().unwrap(), Some(Change::Auth));
        }
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let notifier = Notifier::default();
        let kept = notifier.subscribe();
        drop(notifier.subscribe());
        assert_eq!(notifier.subscriber_count(), 2);

        notifier.publish(Change::Language(Language::Tamil));
        assert_eq!(notifier.subscriber_count(), 1);
        drop(kept);
    }
}
