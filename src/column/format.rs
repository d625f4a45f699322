//! Source-format options a built-in parser can carry.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// Decimal and thousands separators of a numeric text source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub thousands_separator: Option<char>,
}

impl NumberFormat {
    pub const STANDARD: NumberFormat = NumberFormat {
        decimal_separator: '.',
        thousands_separator: None,
    };

    /// `1,234.5`
    pub const COMMA_THOUSANDS: NumberFormat = NumberFormat {
        decimal_separator: '.',
        thousands_separator: Some(','),
    };

    /// `1.234,5`
    pub const DOT_THOUSANDS: NumberFormat = NumberFormat {
        decimal_separator: ',',
        thousands_separator: Some('.'),
    };

    /// `1234,5`
    pub const COMMA_DECIMAL: NumberFormat = NumberFormat {
        decimal_separator: ',',
        thousands_separator: None,
    };

    pub const fn new(decimal_separator: char, thousands_separator: Option<char>) -> Self {
        Self {
            decimal_separator,
            thousands_separator,
        }
    }

    pub fn is_standard(&self) -> bool {
        *self == Self::STANDARD
    }

    pub fn validate(&self) -> Result<(), String> {
        let reserved = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | 'e' | 'E');

        if reserved(self.decimal_separator) {
            return Err(format!(
                "'{}' cannot be used as decimal separator",
                self.decimal_separator
            ));
        }
        if let Some(sep) = self.thousands_separator {
            if reserved(sep) {
                return Err(format!("'{sep}' cannot be used as thousands separator"));
            }
            if sep == self.decimal_separator {
                return Err(format!(
                    "'{sep}' cannot be both decimal and thousands separator"
                ));
            }
        }
        Ok(())
    }

    /// Rewrites a formatted literal with `.` as decimal point and no
    /// grouping. `None` when the grouping is malformed or a stray separator
    /// shows up; the result still has to be checked as a numeric literal.
    pub fn normalize(&self, text: &str) -> Option<String> {
        let text = text.trim();

        let foreign_dot = self.decimal_separator != '.' && self.thousands_separator != Some('.');
        if foreign_dot && text.contains('.') {
            return None;
        }

        let (sign, unsigned) = match text.strip_prefix(['+', '-']) {
            Some(rest) => (&text[..1], rest),
            None => ("", text),
        };

        let mut parts = unsigned.splitn(2, self.decimal_separator);
        let int_part = parts.next().unwrap_or_default();
        let frac_part = parts.next();

        if frac_part.is_some_and(|f| f.contains(self.decimal_separator)) {
            return None;
        }

        let digits = match self.thousands_separator {
            Some(sep) if int_part.contains(sep) => {
                let mut groups = int_part.split(sep);
                let head = groups.next().unwrap_or_default();
                if head.is_empty() || head.len() > 3 {
                    return None;
                }
                let mut joined = head.to_string();
                for group in groups {
                    if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
                        return None;
                    }
                    joined.push_str(group);
                }
                joined
            }
            _ => int_part.to_string(),
        };

        let mut out = String::with_capacity(text.len());
        out.push_str(sign);
        out.push_str(&digits);
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        Some(out)
    }

    pub fn render_integer(&self, value: i64) -> String {
        value.to_string()
    }

    pub fn render_number(&self, value: f64) -> String {
        let text = value.to_string();
        if self.decimal_separator == '.' {
            text
        } else {
            text.replace('.', &self.decimal_separator.to_string())
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Literal spellings of a boolean column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum BooleanTokens {
    /// `true`/`false`, `1`/`0`, native booleans.
    #[default]
    Standard,
    Custom {
        true_value: String,
        false_value: String,
    },
}

impl BooleanTokens {
    pub fn custom(true_value: impl Into<String>, false_value: impl Into<String>) -> Self {
        BooleanTokens::Custom {
            true_value: true_value.into(),
            false_value: false_value.into(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match self {
            BooleanTokens::Standard => Ok(()),
            BooleanTokens::Custom {
                true_value,
                false_value,
            } => {
                let t = true_value.trim();
                let f = false_value.trim();
                if t.is_empty() || f.is_empty() {
                    Err("boolean tokens cannot be blank".into())
                } else if t.eq_ignore_ascii_case(f) {
                    Err(format!("'{t}' cannot mean both true and false"))
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Pattern of a temporal text source; `None` means ISO-8601.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TemporalFormat {
    pattern: Option<String>,
}

const TIME_SPECIFIERS: [&str; 15] = [
    "%H", "%I", "%k", "%l", "%M", "%S", "%p", "%P", "%f", "%.f", "%T", "%R", "%X", "%r", "%c",
];

impl TemporalFormat {
    pub const ISO: TemporalFormat = TemporalFormat { pattern: None };

    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
        }
    }

    pub fn as_pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn is_iso(&self) -> bool {
        self.pattern.is_none()
    }

    pub fn has_time(&self) -> bool {
        self.pattern
            .as_deref()
            .is_some_and(|p| TIME_SPECIFIERS.iter().any(|s| p.contains(s)))
    }

    pub fn validate_datetime(&self) -> Result<(), String> {
        self.validate_items()?;
        if self.pattern.is_some() && !self.has_time() {
            return Err("datetime pattern has no time component".into());
        }
        Ok(())
    }

    pub fn validate_date(&self) -> Result<(), String> {
        self.validate_items()?;
        if self.has_time() {
            return Err("date pattern must not contain time information".into());
        }
        Ok(())
    }

    fn validate_items(&self) -> Result<(), String> {
        let Some(pattern) = self.pattern.as_deref() else {
            return Ok(());
        };
        if pattern.trim().is_empty() {
            return Err("empty pattern".into());
        }
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(format!("'{pattern}' is not a valid strftime pattern"));
        }
        Ok(())
    }
}
