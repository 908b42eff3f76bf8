use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::StoreError;

/// Recurrence frequency of a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 3] = [Frequency::Daily, Frequency::Weekly, Frequency::Monthly];

    pub fn label(self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
        }
    }
}

/// A habit document as stored in the `habits` collection.
/// `id` and `created_at` are assigned by the store on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub title: String,
    pub description: String,
    pub user_id: String,
    pub frequency: Frequency,
    pub streak_count: u32,
    pub created_at: DateTime<Utc>,
}

/// Fields the caller provides when creating a habit.
#[derive(Debug, Clone)]
pub struct NewHabit {
    pub title: String,
    pub description: String,
    pub frequency: Frequency,
    pub user_id: String,
}

pub(crate) fn collection_path(dir: &Path) -> PathBuf {
    dir.join("habits.json")
}

/// Load the full habits collection. A missing file is an empty collection.
pub fn load_collection(dir: &Path) -> Result<Vec<Habit>, StoreError> {
    let path = collection_path(dir);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&content)?)
}

/// Write the collection atomically: serialize to a sibling temp file,
/// then rename over the target so the live-query poller never observes
/// a half-written document.
pub fn save_collection(dir: &Path, habits: &[Habit]) -> Result<(), StoreError> {
    fs::create_dir_all(dir)?;
    let path = collection_path(dir);
    let tmp = path.with_extension("json.tmp");
    let content = serde_json::to_string_pretty(habits)?;
    fs::write(&tmp, content)?;
    fs::rename(&tmp, &path)?;
    Ok(())
}

/// Create a new habit record with a zero streak, a fresh id, and the
/// current time as `created_at`.
pub fn create_habit(dir: &Path, new: NewHabit) -> Result<(), StoreError> {
    let mut habits = load_collection(dir)?;
    habits.push(Habit {
        id: Uuid::new_v4().to_string(),
        title: new.title,
        description: new.description,
        user_id: new.user_id,
        frequency: new.frequency,
        streak_count: 0,
        created_at: Utc::now(),
    });
    save_collection(dir, &habits)
}

/// Overwrite a habit's streak with `current + 1`.
///
/// Deliberately not read-increment: the caller supplies the count it last
/// observed, and concurrent writers are last-write-wins. Updating a record
/// that no longer exists is a write failure.
pub fn increment_streak(dir: &Path, habit_id: &str, current: u32) -> Result<(), StoreError> {
    let mut habits = load_collection(dir)?;
    let habit = habits
        .iter_mut()
        .find(|h| h.id == habit_id)
        .ok_or_else(|| StoreError::MissingRecord(habit_id.to_string()))?;
    habit.streak_count = current + 1;
    save_collection(dir, &habits)
}

/// Remove a habit. Deleting an id that is already gone succeeds silently.
pub fn delete_habit(dir: &Path, habit_id: &str) -> Result<(), StoreError> {
    let mut habits = load_collection(dir)?;
    let before = habits.len();
    habits.retain(|h| h.id != habit_id);
    if habits.len() == before {
        return Ok(());
    }
    save_collection(dir, &habits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch() -> tempfile::TempDir {
        tempfile::tempdir().expect("tempdir")
    }

    fn create(dir: &Path, title: &str, user: &str) {
        create_habit(
            dir,
            NewHabit {
                title: title.to_string(),
                description: format!("{title} description"),
                frequency: Frequency::Daily,
                user_id: user.to_string(),
            },
        )
        .expect("create");
    }

    #[test]
    fn missing_collection_is_empty() {
        let dir = scratch();
        assert_eq!(load_collection(dir.path()).unwrap(), Vec::new());
    }

    #[test]
    fn create_assigns_id_zero_streak_and_timestamp() {
        let dir = scratch();
        create(dir.path(), "meditate", "u1");

        let habits = load_collection(dir.path()).unwrap();
        assert_eq!(habits.len(), 1);
        assert!(!habits[0].id.is_empty());
        assert_eq!(habits[0].streak_count, 0);
        assert_eq!(habits[0].user_id, "u1");
        assert!(habits[0].created_at <= Utc::now());
    }

    #[test]
    fn create_assigns_distinct_ids() {
        let dir = scratch();
        create(dir.path(), "a", "u1");
        create(dir.path(), "b", "u1");

        let habits = load_collection(dir.path()).unwrap();
        assert_ne!(habits[0].id, habits[1].id);
    }

    #[test]
    fn increment_writes_observed_plus_one() {
        let dir = scratch();
        create(dir.path(), "run", "u1");
        let id = load_collection(dir.path()).unwrap()[0].id.clone();

        increment_streak(dir.path(), &id, 0).unwrap();
        increment_streak(dir.path(), &id, 1).unwrap();
        assert_eq!(load_collection(dir.path()).unwrap()[0].streak_count, 2);

        // Stale observed count: last write wins, no read-increment.
        increment_streak(dir.path(), &id, 0).unwrap();
        assert_eq!(load_collection(dir.path()).unwrap()[0].streak_count, 1);
    }

    #[test]
    fn increment_missing_record_fails() {
        let dir = scratch();
        create(dir.path(), "run", "u1");

        let err = increment_streak(dir.path(), "nope", 3).unwrap_err();
        assert!(matches!(err, StoreError::MissingRecord(id) if id == "nope"));
    }

    #[test]
    fn delete_removes_and_is_idempotent() {
        let dir = scratch();
        create(dir.path(), "a", "u1");
        create(dir.path(), "b", "u1");
        let id = load_collection(dir.path()).unwrap()[0].id.clone();

        delete_habit(dir.path(), &id).unwrap();
        let habits = load_collection(dir.path()).unwrap();
        assert_eq!(habits.len(), 1);
        assert!(habits.iter().all(|h| h.id != id));

        // Second delete of the same id is fine.
        delete_habit(dir.path(), &id).unwrap();
        assert_eq!(load_collection(dir.path()).unwrap().len(), 1);
    }

    #[test]
    fn collection_round_trips_through_disk() {
        let dir = scratch();
        create(dir.path(), "stretch", "u2");
        let loaded = load_collection(dir.path()).unwrap();
        save_collection(dir.path(), &loaded).unwrap();
        assert_eq!(load_collection(dir.path()).unwrap(), loaded);
    }

    #[test]
    fn frequency_labels() {
        assert_eq!(Frequency::Daily.label(), "Daily");
        assert_eq!(Frequency::Weekly.label(), "Weekly");
        assert_eq!(Frequency::Monthly.label(), "Monthly");
        assert_eq!(Frequency::ALL.len(), 3);
    }
}
