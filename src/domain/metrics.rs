//! Arithmetic shared by the reports: percentages, trends and rankings.

use std::cmp::Ordering;

use serde::Serialize;

/// Percentage of `part` in `whole`, rounded to one decimal place.
///
/// Returns `0.0` whenever `whole` is not positive so empty weeks render as
/// zero rather than `NaN`.
pub fn percentage(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        return 0.0;
    }
    round_to(part as f64 / whole as f64 * 100.0, 1)
}

/// Same as [`percentage`] for monetary amounts.
pub fn percentage_of_amount(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 || !whole.is_finite() {
        return 0.0;
    }
    round_to(part / whole * 100.0, 1)
}

/// `total / count` rounded to cents, `0.0` for an empty count.
pub fn average_amount(total: f64, count: i64) -> f64 {
    if count <= 0 {
        return 0.0;
    }
    round_to(total / count as f64, 2)
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Direction of a metric compared to the previous period.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Flat,
}

impl Trend {
    pub fn between(previous: f64, current: f64) -> Self {
        match current.partial_cmp(&previous) {
            Some(Ordering::Greater) => Trend::Up,
            Some(Ordering::Less) => Trend::Down,
            _ => Trend::Flat,
        }
    }

    /// Trend of `current` against an optional previous value; no history is flat.
    pub fn since(previous: Option<f64>, current: f64) -> Self {
        previous.map_or(Trend::Flat, |previous| Trend::between(previous, current))
    }
}

/// Sorts `items` by descending score, then by name, and returns the
/// competition rank of every item in the new order: ties share a rank and
/// the following rank skips (1, 1, 3).
pub fn rank_descending<T, S, N>(items: &mut [T], score: S, name: N) -> Vec<u32>
where
    S: Fn(&T) -> f64,
    N: Fn(&T) -> &str,
{
    items.sort_by(|a, b| {
        score(b)
            .total_cmp(&score(a))
            .then_with(|| name(a).cmp(name(b)))
    });

    let mut ranks = Vec::with_capacity(items.len());
    let mut previous: Option<f64> = None;
    for (position, item) in items.iter().enumerate() {
        let current = score(item);
        let rank = match (previous, ranks.last()) {
            (Some(prev), Some(&last)) if prev == current => last,
            _ => position as u32 + 1,
        };
        ranks.push(rank);
        previous = Some(current);
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_and_guards_zero() {
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(5, 0), 0.0);
        assert_eq!(percentage(0, 10), 0.0);
        assert_eq!(percentage(7, 7), 100.0);
    }

    #[test]
    fn amount_helpers() {
        assert_eq!(percentage_of_amount(250.0, 1000.0), 25.0);
        assert_eq!(percentage_of_amount(1.0, 0.0), 0.0);
        assert_eq!(average_amount(1000.0, 3), 333.33);
        assert_eq!(average_amount(1000.0, 0), 0.0);
    }

    #[test]
    fn trend_direction() {
        assert_eq!(Trend::between(10.0, 12.0), Trend::Up);
        assert_eq!(Trend::between(10.0, 8.0), Trend::Down);
        assert_eq!(Trend::between(10.0, 10.0), Trend::Flat);
        assert_eq!(Trend::since(None, 5.0), Trend::Flat);
    }

    #[test]
    fn ranking_shares_ranks_on_ties() {
        let mut rows = vec![("carol", 3.0), ("alice", 5.0), ("bob", 5.0), ("dave", 1.0)];
        let ranks = rank_descending(&mut rows, |r| r.1, |r| r.0);

        let names: Vec<_> = rows.iter().map(|r| r.0).collect();
        assert_eq!(names, vec!["alice", "bob", "carol", "dave"]);
        assert_eq!(ranks, vec![1, 1, 3, 4]);
    }
}
