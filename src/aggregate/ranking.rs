//! Top-N ranking over two comparison windows.

use serde::Serialize;

/// How many groups the dashboard ranking widgets show.
pub const TOP_N: usize = 5;

/// One ranked group: current-window metric plus the prior-window value for
/// comparison.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct RankedEntry {
    pub key: String,
    pub current: f64,
    pub previous: f64,
}

/// Groups the current-window records by key, ranks by summed metric and
/// carries the matching prior-window sum alongside.
///
/// Ties keep first-seen input order: the sort is stable and no secondary
/// key is applied, so tied groups are only deterministic as far as the
/// upstream snapshot order is.
pub fn top_n<C, P>(current: C, previous: P) -> Vec<RankedEntry>
where
    C: IntoIterator<Item = (String, f64)>,
    P: IntoIterator<Item = (String, f64)>,
{
    // First-seen order is preserved deliberately; group counts are small
    // enough that the linear key lookup does not matter.
    let mut groups: Vec<RankedEntry> = Vec::new();
    for (key, value) in current {
        match groups.iter_mut().find(|g| g.key == key) {
            Some(entry) => entry.current += value,
            None => groups.push(RankedEntry {
                key,
                current: value,
                previous: 0.0,
            }),
        }
    }
    for (key, value) in previous {
        // Prior-window values only matter for groups present in the
        // current window.
        if let Some(entry) = groups.iter_mut().find(|g| g.key == key) {
            entry.previous += value;
        }
    }
    groups.sort_by(|a, b| b.current.partial_cmp(&a.current).unwrap_or(std::cmp::Ordering::Equal));
    groups.truncate(TOP_N);
    groups
}
