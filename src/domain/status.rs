//! Appointment status normalization.
//!
//! Stored status values are free text entered over several product
//! generations, in Danish and English ("Booket", "Aflyst", "no-show",
//! "CONFIRMED", ...). Classification is intentionally fuzzy: the input is
//! lower-cased, diacritics are folded, and an ordered substring rule table
//! is evaluated top to bottom. The rule order is part of the contract;
//! reordering it changes how ambiguous inputs classify.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AppointmentStatus {
    Booked,
    Confirmed,
    Arrived,
    Started,
    Completed,
    Cancelled,
    Pending,
    NoShow,
}

/// Coarse two-way partition used by the status bar charts.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatusGroup {
    /// Booked, confirmed, arrived, started, completed and pending.
    Confirmed,
    /// Cancelled and no-show.
    Cancelled,
}

/// Ordered substring rules, evaluated top to bottom against the folded input.
///
/// No-show must precede the cancel rules ("no-show" also contains no cancel
/// keyword, but "udeblevet aflyst" style double entries should classify as
/// no-show), and "start" must come after "gennemfort"/"faerdig" so that
/// "genstartet" style noise still lands on the intended rule.
const STATUS_RULES: &[(&str, AppointmentStatus)] = &[
    ("no-show", AppointmentStatus::NoShow),
    ("no_show", AppointmentStatus::NoShow),
    ("noshow", AppointmentStatus::NoShow),
    ("udeblev", AppointmentStatus::NoShow),
    ("aflys", AppointmentStatus::Cancelled),
    ("cancel", AppointmentStatus::Cancelled),
    ("annuller", AppointmentStatus::Cancelled),
    ("gennemfort", AppointmentStatus::Completed),
    ("faerdig", AppointmentStatus::Completed),
    ("complet", AppointmentStatus::Completed),
    ("done", AppointmentStatus::Completed),
    ("i gang", AppointmentStatus::Started),
    ("startet", AppointmentStatus::Started),
    ("started", AppointmentStatus::Started),
    ("ankom", AppointmentStatus::Arrived),
    ("arriv", AppointmentStatus::Arrived),
    ("bekraeft", AppointmentStatus::Confirmed),
    ("confirm", AppointmentStatus::Confirmed),
    ("afvent", AppointmentStatus::Pending),
    ("pending", AppointmentStatus::Pending),
    ("book", AppointmentStatus::Booked),
];

/// Lower-cases and folds the Danish/Latin characters that occur in stored
/// status labels so the rule table can stay plain ASCII.
fn fold(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.to_lowercase().chars() {
        match c {
            'æ' => out.push_str("ae"),
            'ø' => out.push('o'),
            'å' => out.push('a'),
            'é' | 'è' | 'ê' | 'ë' => out.push('e'),
            'á' | 'à' | 'â' => out.push('a'),
            'ü' => out.push('u'),
            'ö' => out.push('o'),
            other => out.push(other),
        }
    }
    out
}

impl AppointmentStatus {
    /// Classifies a free-text stored status value.
    ///
    /// Unknown values fall back to `Booked`: status strings are written by
    /// the booking flow itself, so an unrecognized value is a legacy label
    /// for a live booking, not client-supplied garbage.
    pub fn classify(raw: &str) -> Self {
        let folded = fold(raw);
        for (needle, status) in STATUS_RULES {
            if folded.contains(needle) {
                return *status;
            }
        }
        AppointmentStatus::Booked
    }

    pub fn group(self) -> StatusGroup {
        match self {
            AppointmentStatus::Cancelled | AppointmentStatus::NoShow => StatusGroup::Cancelled,
            _ => StatusGroup::Confirmed,
        }
    }

    /// Canonical label, stable under `classify`.
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Booked => "booked",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Arrived => "arrived",
            AppointmentStatus::Started => "started",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::NoShow => "no-show",
        }
    }
}

impl Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for AppointmentStatus {
    fn from(s: &str) -> Self {
        Self::classify(s)
    }
}

impl From<String> for AppointmentStatus {
    fn from(s: String) -> Self {
        Self::classify(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_labels_are_idempotent() {
        for status in [
            AppointmentStatus::Booked,
            AppointmentStatus::Confirmed,
            AppointmentStatus::Arrived,
            AppointmentStatus::Started,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
            AppointmentStatus::Pending,
            AppointmentStatus::NoShow,
        ] {
            assert_eq!(AppointmentStatus::classify(status.as_str()), status);
        }
    }

    #[test]
    fn danish_labels_classify() {
        assert_eq!(
            AppointmentStatus::classify("Aflyst"),
            AppointmentStatus::Cancelled
        );
        assert_eq!(
            AppointmentStatus::classify("Bekræftet"),
            AppointmentStatus::Confirmed
        );
        assert_eq!(
            AppointmentStatus::classify("Gennemført"),
            AppointmentStatus::Completed
        );
        assert_eq!(
            AppointmentStatus::classify("Udeblevet"),
            AppointmentStatus::NoShow
        );
        assert_eq!(
            AppointmentStatus::classify("Booket"),
            AppointmentStatus::Booked
        );
    }

    #[test]
    fn noisy_inputs_classify_by_substring() {
        assert_eq!(
            AppointmentStatus::classify("NO_SHOW"),
            AppointmentStatus::NoShow
        );
        assert_eq!(
            AppointmentStatus::classify("  cancelled by client "),
            AppointmentStatus::Cancelled
        );
        assert_eq!(
            AppointmentStatus::classify("unknown legacy value"),
            AppointmentStatus::Booked
        );
    }

    #[test]
    fn cancelled_like_grouping() {
        assert_eq!(
            AppointmentStatus::NoShow.group(),
            StatusGroup::Cancelled
        );
        assert_eq!(
            AppointmentStatus::Pending.group(),
            StatusGroup::Confirmed
        );
    }
}
