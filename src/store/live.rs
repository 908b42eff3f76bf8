use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, SystemTime};

use crate::store::records::{self, Habit};

const POLL_INTERVAL_MS: u64 = 300;

/// Change marker for the collection file. Coarse on purpose: a hit means
/// "re-read and fully replace", so a missed intermediate state is simply
/// overwritten by the next delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fingerprint {
    len: u64,
    modified: Option<SystemTime>,
}

fn fingerprint(path: &Path) -> Option<Fingerprint> {
    let meta = fs::metadata(path).ok()?;
    Some(Fingerprint {
        len: meta.len(),
        modified: meta.modified().ok(),
    })
}

/// Restrict a collection snapshot to one owner.
pub(crate) fn filter_owned(habits: Vec<Habit>, user_id: &str) -> Vec<Habit> {
    habits.into_iter().filter(|h| h.user_id == user_id).collect()
}

/// Handle to a standing query over the habits collection, filtered by owner.
///
/// A background thread watches the collection file and delivers the full
/// matching result set on every observed change (and once at startup, so a
/// subscriber with no habits still gets its empty snapshot). Dropping the
/// handle disconnects the channel and the thread exits on its next send.
pub struct LiveQueryHandle {
    receiver: mpsc::Receiver<Vec<Habit>>,
}

impl LiveQueryHandle {
    pub fn spawn(dir: PathBuf, user_id: String) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let path = records::collection_path(&dir);
            let poll_interval = Duration::from_millis(POLL_INTERVAL_MS);
            let mut last_seen: Option<Option<Fingerprint>> = None;

            loop {
                let current = fingerprint(&path);
                if last_seen != Some(current) {
                    last_seen = Some(current);
                    match records::load_collection(&dir) {
                        Ok(habits) => {
                            if tx.send(filter_owned(habits, &user_id)).is_err() {
                                return;
                            }
                        }
                        Err(e) => {
                            // Keep the previous snapshot; the next change
                            // delivers a fresh one.
                            eprintln!("[store] live query read failed: {e}");
                        }
                    }
                }
                thread::sleep(poll_interval);
            }
        });

        LiveQueryHandle { receiver: rx }
    }

    /// Drain all pending snapshots from the channel (non-blocking).
    pub fn drain_snapshots(&self) -> Vec<Vec<Habit>> {
        let mut snapshots = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(snapshot) => snapshots.push(snapshot),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break,
            }
        }
        snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::records::{Frequency, NewHabit, create_habit};

    #[test]
    fn filter_owned_keeps_only_the_owner() {
        let mk = |id: &str, user: &str| Habit {
            id: id.to_string(),
            title: "t".to_string(),
            description: String::new(),
            user_id: user.to_string(),
            frequency: Frequency::Daily,
            streak_count: 0,
            created_at: chrono::Utc::now(),
        };
        let all = vec![mk("1", "alice"), mk("2", "bob"), mk("3", "alice")];

        let mine = filter_owned(all, "alice");
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|h| h.user_id == "alice"));
    }

    #[test]
    fn delivers_initial_snapshot_and_updates() {
        let dir = tempfile::tempdir().expect("tempdir");
        create_habit(
            dir.path(),
            NewHabit {
                title: "read".to_string(),
                description: String::new(),
                frequency: Frequency::Daily,
                user_id: "u1".to_string(),
            },
        )
        .unwrap();

        let handle = LiveQueryHandle::spawn(dir.path().to_path_buf(), "u1".to_string());

        let mut snapshots = Vec::new();
        for _ in 0..50 {
            snapshots.extend(handle.drain_snapshots());
            if !snapshots.is_empty() {
                break;
            }
            thread::sleep(Duration::from_millis(20));
        }
        let first = snapshots.last().expect("initial snapshot");
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].title, "read");

        create_habit(
            dir.path(),
            NewHabit {
                title: "write".to_string(),
                description: String::new(),
                frequency: Frequency::Weekly,
                user_id: "u1".to_string(),
            },
        )
        .unwrap();

        let mut latest = None;
        for _ in 0..50 {
            if let Some(snapshot) = handle.drain_snapshots().pop() {
                if snapshot.len() == 2 {
                    latest = Some(snapshot);
                    break;
                }
            }
            thread::sleep(Duration::from_millis(20));
        }
        assert!(latest.is_some(), "update snapshot never arrived");
    }
}
