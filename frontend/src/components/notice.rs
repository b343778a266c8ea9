//! Toast notifications
//!
//! A single current notice, replaced by the next one and cleared after three
//! seconds.

use leptos::prelude::*;
use std::time::Duration;

const DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Increases with every notice, so repeated messages stay distinct.
    pub seq: u64,
    pub message: String,
    pub is_error: bool,
}

/// Whether the timer started for notice `seq` may clear `current`.
fn expires(current: Option<&Notice>, seq: u64) -> bool {
    current.is_some_and(|notice| notice.seq == seq)
}

/// Shared handle for raising toast notifications.
#[derive(Clone, Copy)]
pub struct Notifier {
    current: RwSignal<Option<Notice>>,
    next_seq: StoredValue<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_seq: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message.into(), false);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message.into(), true);
    }

    fn show(&self, message: String, is_error: bool) {
        let seq = self.next_seq.get_value();
        self.next_seq.set_value(seq + 1);
        self.current.set(Some(Notice {
            seq,
            message,
            is_error,
        }));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier should be provided")
}

#[component]
pub fn NoticeToast() -> impl IntoView {
    let notifier = use_notifier();
    let current = notifier.current;

    Effect::new(move |_| {
        if let Some(seq) = current.with(|notice| notice.as_ref().map(|n| n.seq)) {
            set_timeout(
                move || {
                    if current.with_untracked(|notice| expires(notice.as_ref(), seq)) {
                        current.set(None);
                    }
                },
                DISMISS_AFTER,
            );
        }
    });

    move || {
        current.get().map(|notice| {
            let class = if notice.is_error {
                "fixed top-20 right-4 z-50 bg-red-600 text-white px-4 py-3 rounded-lg shadow-lg"
            } else {
                "fixed top-20 right-4 z-50 bg-green-600 text-white px-4 py-3 rounded-lg shadow-lg"
            };
            view! {
                <div role="alert" class=class>
                    {notice.message}
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_message_gets_new_sequence() {
        let notifier = Notifier::new();

        notifier.success("Added to cart");
        let first = notifier.current.get_untracked().unwrap();
        notifier.success("Added to cart");
        let second = notifier.current.get_untracked().unwrap();

        assert_eq!(first.message, second.message);
        assert_ne!(first.seq, second.seq);
        // The first timer must leave the repeated notice alone.
        assert!(!expires(Some(&second), first.seq));
        assert!(expires(Some(&second), second.seq));
    }

    #[test]
    fn test_nothing_to_expire_once_dismissed() {
        assert!(!expires(None, 0));
    }
}
