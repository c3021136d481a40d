//! Service catalog entries: single services and multi-session programs
//! ("forløb"). Read-only inputs to the aggregation layer.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ServiceItem {
    pub id: String,
    pub name: String,
    /// Free-text duration label as entered, e.g. "1 time 30 minutter".
    pub duration_label: Option<String>,
    /// Parsed duration in minutes; `None` when the label is absent or
    /// unparseable.
    pub duration_minutes: Option<u32>,
    pub price: Option<f64>,
    pub price_incl_vat: Option<f64>,
    pub color: Option<String>,
}

/// A treatment program: shares the service-selection surface but carries
/// session-count/week-count metadata instead of a fixed duration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Program {
    pub id: String,
    pub name: String,
    pub sessions: u32,
    pub weeks: u32,
    pub price: Option<f64>,
    pub color: Option<String>,
}
