//! Pure aggregation primitives: per-day bucketing, status segmentation,
//! top-N ranking and axis-ceiling rounding. Everything here is synchronous
//! and deterministic over the passed-in records (aside from the documented
//! tie-break behavior in [`ranking::top_n`]).

pub mod axis;
pub mod daily;
pub mod ranking;

pub use axis::{nice_count_max, nice_currency_max};
pub use daily::{StatusSeries, daily_series, safe_rate, status_counts_by_day};
pub use ranking::{RankedEntry, TOP_N, top_n};
