//! Trending chefs and recipes.
//!
//! Popularity is the number of follows (chefs) or likes (recipes) created in
//! the trailing window. Entries without recent activity are not ranked.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{DateTime, Duration, Utc};

/// Length of the trailing window.
pub const TRAILING_WINDOW_DAYS: i64 = 3;

/// Maximum number of ranked entries returned.
pub const RANKING_LIMIT: usize = 10;

/// Start of the window ending at `now`.
pub fn window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(TRAILING_WINDOW_DAYS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity<Id> {
    pub id: Id,
    pub recent_count: i64,
    pub total_count: i64,
}

/// Ranks entries by their recent count, highest first.
///
/// Ties go to the higher all-time count, then to the smaller id so the order
/// is stable between requests. A missing total falls back to the recent
/// count.
pub fn rank_by_recent_activity<Id>(
    recent: impl IntoIterator<Item = (Id, i64)>,
    totals: impl IntoIterator<Item = (Id, i64)>,
    limit: usize,
) -> Vec<Activity<Id>>
where
    Id: Copy + Eq + Hash + Ord,
{
    let totals: HashMap<Id, i64> = totals.into_iter().collect();

    let mut ranked: Vec<Activity<Id>> = recent
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(id, recent_count)| Activity {
            id,
            recent_count,
            total_count: totals
                .get(&id)
                .copied()
                .unwrap_or(recent_count)
                .max(recent_count),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.recent_count
            .cmp(&a.recent_count)
            .then(b.total_count.cmp(&a.total_count))
            .then(a.id.cmp(&b.id))
    });
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_window_start_is_three_days_back() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        assert_eq!(
            window_start(now),
            Utc.with_ymd_and_hms(2024, 5, 7, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_orders_by_recent_count() {
        let ranked = rank_by_recent_activity(
            vec![(1, 2), (2, 5), (3, 1)],
            vec![(1, 10), (2, 6), (3, 1)],
            RANKING_LIMIT,
        );
        let ids: Vec<i32> = ranked.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(ranked[1].total_count, 10);
    }

    #[test]
    fn test_ties_prefer_total_then_id() {
        let ranked = rank_by_recent_activity(
            vec![(3, 2), (1, 2), (2, 2)],
            vec![(3, 9), (1, 4), (2, 4)],
            RANKING_LIMIT,
        );
        let ids: Vec<i32> = ranked.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_skips_zero_and_caps_at_limit() {
        let recent: Vec<(i32, i64)> = (0..15)
            .map(|id| (id, 1 + id as i64))
            .chain([(99, 0)])
            .collect();
        let ranked = rank_by_recent_activity(recent, Vec::new(), RANKING_LIMIT);
        assert_eq!(ranked.len(), RANKING_LIMIT);
        assert!(ranked.iter().all(|a| a.id != 99));
        assert_eq!(ranked[0].id, 14);
        assert_eq!(ranked[0].total_count, 15);
    }
}
