use std::thread;
use std::time::Duration;

use futures::channel::mpsc;

use crate::app::Message;
use crate::store;
use crate::store::live::LiveQueryHandle;

const AUTH_POLL_MS: u64 = 300;
const DRAIN_INTERVAL_MS: u64 = 100;

/// Auth change stream: emits the current identity immediately, then again
/// on every change, for the lifetime of the app.
pub(crate) fn auth_stream() -> impl futures::Stream<Item = Message> {
    let (tx, rx) = mpsc::unbounded();
    thread::spawn(move || {
        let dir = store::data_dir();
        let mut last = store::auth::current_user(&dir);
        eprintln!(
            "[habitdesk] auth watcher started ({})",
            match &last {
                Some(u) => u.email.as_str(),
                None => "signed out",
            }
        );
        if tx.unbounded_send(Message::AuthChanged(last.clone())).is_err() {
            return;
        }
        loop {
            thread::sleep(Duration::from_millis(AUTH_POLL_MS));
            let current = store::auth::current_user(&dir);
            if current != last {
                last = current;
                if tx.unbounded_send(Message::AuthChanged(last.clone())).is_err() {
                    return;
                }
            }
        }
    });
    rx
}

/// Live habits query for one user. The subscription is keyed on the user
/// id, so a session change drops this stream (tearing down the query)
/// and starts a fresh one for the new id.
pub(crate) fn habit_stream(user_id: &String) -> mpsc::UnboundedReceiver<Message> {
    let user_id = user_id.clone();
    let (tx, rx) = mpsc::unbounded();
    thread::spawn(move || {
        let handle = LiveQueryHandle::spawn(store::data_dir(), user_id.clone());
        loop {
            for snapshot in handle.drain_snapshots() {
                let message = Message::HabitsSnapshot {
                    user_id: user_id.clone(),
                    habits: snapshot,
                };
                if tx.unbounded_send(message).is_err() {
                    return;
                }
            }
            thread::sleep(Duration::from_millis(DRAIN_INTERVAL_MS));
        }
    });
    rx
}

/// Animation heartbeat for the ticker.
pub(crate) fn tick_stream(ms: &u64) -> mpsc::UnboundedReceiver<Message> {
    let ms = *ms;
    let (tx, rx) = mpsc::unbounded();
    thread::spawn(move || loop {
        thread::sleep(Duration::from_millis(ms));
        if tx.unbounded_send(Message::Tick).is_err() {
            break;
        }
    });
    rx
}
