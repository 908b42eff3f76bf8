use crate::store::records::Habit;

/// Local snapshot of the signed-in user's habits.
///
/// Fed exclusively by the live query: every delivery replaces the whole
/// list (last callback wins), re-sorted newest first. Derived aggregates
/// are recomputed from whatever snapshot is current.
pub(crate) struct HabitList {
    habits: Vec<Habit>,
}

impl HabitList {
    pub(crate) fn new() -> Self {
        Self { habits: Vec::new() }
    }

    /// Replace the snapshot wholesale with a fresh delivery from the
    /// live query. No merging with prior state.
    pub(crate) fn replace(&mut self, mut habits: Vec<Habit>) {
        habits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.habits = habits;
    }

    pub(crate) fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.habits.len()
    }

    pub(crate) fn total_streak(&self) -> u64 {
        self.habits.iter().map(|h| u64::from(h.streak_count)).sum()
    }

    /// Mean streak across the snapshot; zero for an empty list.
    pub(crate) fn average_streak(&self) -> f64 {
        if self.habits.is_empty() {
            0.0
        } else {
            self.total_streak() as f64 / self.habits.len() as f64
        }
    }

    /// The `n` habits with the highest streaks, descending. Ties keep
    /// their snapshot order (stable sort).
    pub(crate) fn top_streaks(&self, n: usize) -> Vec<&Habit> {
        let mut ranked: Vec<&Habit> = self.habits.iter().collect();
        ranked.sort_by(|a, b| b.streak_count.cmp(&a.streak_count));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::records::Frequency;
    use chrono::{Duration, Utc};

    fn habit(id: &str, streak: u32, age_minutes: i64) -> Habit {
        Habit {
            id: id.to_string(),
            title: format!("habit {id}"),
            description: String::new(),
            user_id: "u1".to_string(),
            frequency: Frequency::Daily,
            streak_count: streak,
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[test]
    fn replace_sorts_newest_first() {
        let mut list = HabitList::new();
        list.replace(vec![habit("old", 0, 30), habit("new", 0, 1), habit("mid", 0, 10)]);

        let ids: Vec<&str> = list.habits().iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }

    #[test]
    fn replace_discards_prior_snapshot() {
        let mut list = HabitList::new();
        list.replace(vec![habit("a", 3, 1), habit("b", 5, 2)]);
        list.replace(vec![habit("c", 1, 3)]);

        assert_eq!(list.len(), 1);
        assert_eq!(list.habits()[0].id, "c");
    }

    #[test]
    fn totals_and_average() {
        let mut list = HabitList::new();
        assert_eq!(list.total_streak(), 0);
        assert_eq!(list.average_streak(), 0.0);

        list.replace(vec![habit("a", 5, 3), habit("b", 2, 2), habit("c", 9, 1)]);
        assert_eq!(list.total_streak(), 16);
        assert_eq!(format!("{:.1}", list.average_streak()), "5.3");
    }

    #[test]
    fn top_streaks_descending() {
        let mut list = HabitList::new();
        list.replace(vec![habit("a", 5, 3), habit("b", 2, 2), habit("c", 9, 1)]);

        let top: Vec<u32> = list.top_streaks(2).iter().map(|h| h.streak_count).collect();
        assert_eq!(top, [9, 5]);
    }

    #[test]
    fn top_streaks_ties_keep_snapshot_order() {
        let mut list = HabitList::new();
        // After the newest-first re-sort the snapshot order is d, c, b, a.
        list.replace(vec![
            habit("a", 4, 40),
            habit("b", 4, 30),
            habit("c", 7, 20),
            habit("d", 4, 10),
        ]);

        let ids: Vec<&str> = list.top_streaks(4).iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["c", "d", "b", "a"]);
    }

    #[test]
    fn top_streaks_n_larger_than_list() {
        let mut list = HabitList::new();
        list.replace(vec![habit("a", 1, 1)]);
        assert_eq!(list.top_streaks(3).len(), 1);
        assert!(HabitList::new().top_streaks(3).is_empty());
    }
}
