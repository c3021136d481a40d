//! Reporting and aggregation core for the NordBook booking and clinic
//! management product.
//!
//! The surrounding application owns persistence, authentication and
//! rendering; this crate turns delivered store snapshots into chart-ready,
//! locale-formatted aggregates. The pipeline has four stages: the
//! [`repository`] readers normalize heterogeneous stored documents into
//! [`domain`] aggregates, [`period`] resolves the user's period selection
//! to a concrete range, [`aggregate`] buckets and reduces, and [`chart`] /
//! [`locale`] map the results into geometry and label strings.
//!
//! Everything is synchronous and pure over the passed-in snapshots;
//! aggregates are recomputed on every input change and never persisted.

pub mod aggregate;
pub mod chart;
pub mod domain;
pub mod dto;
pub mod locale;
pub mod period;
pub mod recurrence;
pub mod repository;
pub mod services;
