//! Currency formatting context supplied by the external i18n collaborator.

use serde::{Deserialize, Serialize};

/// Locale-aware currency formatting settings.
///
/// The tag and suffix come from the surrounding application's i18n layer;
/// the separators drive [`CurrencyLocale::format`]. Formatting is always
/// fixed at two decimal places.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyLocale {
    /// BCP 47 locale tag, e.g. `"da-DK"`.
    pub tag: String,
    pub decimal_separator: char,
    pub thousands_separator: Option<char>,
    /// Appended after the amount, separated by a space, e.g. `"kr."`.
    pub currency_suffix: Option<String>,
}

impl CurrencyLocale {
    /// Danish locale: `1.234,56`.
    pub fn da_dk() -> Self {
        Self {
            tag: "da-DK".to_string(),
            decimal_separator: ',',
            thousands_separator: Some('.'),
            currency_suffix: None,
        }
    }

    /// Formats an amount with two fixed decimals and this locale's
    /// separators: `400.0` → `"400,00"` under [`CurrencyLocale::da_dk`].
    pub fn format(&self, value: f64) -> String {
        let negative = value < 0.0;
        let cents = (value.abs() * 100.0).round() as u64;
        let whole = cents / 100;
        let fraction = cents % 100;

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
        if let Some(sep) = self.thousands_separator {
            let offset = digits.len() % 3;
            for (i, c) in digits.chars().enumerate() {
                if i > 0 && (i + 3 - offset) % 3 == 0 {
                    grouped.push(sep);
                }
                grouped.push(c);
            }
        } else {
            grouped.push_str(&digits);
        }

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&grouped);
        out.push(self.decimal_separator);
        out.push_str(&format!("{fraction:02}"));
        if let Some(suffix) = &self.currency_suffix {
            out.push(' ');
            out.push_str(suffix);
        }
        out
    }
}

impl Default for CurrencyLocale {
    fn default() -> Self {
        Self::da_dk()
    }
}
