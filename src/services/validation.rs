//! Client-side validation run before any create or update is sent
//!
//! Optional fields are only checked when they carry a non-blank value.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static IMO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^IMO\d{7}$").expect("valid IMO regex"));
static UNLOCODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}[A-Z2-9]{3}$").expect("valid UN/LOCODE regex"));
static IATA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{3}$").expect("valid IATA regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex")
});
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ().-]{6,20}$").expect("valid phone regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field: field.to_string(),
                message: message.into(),
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Accumulates field errors; call [`Validator::finish`] to get the result
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn required(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if present(value).is_none() {
            self.push(field, "is required");
        }
        self
    }

    pub fn required_value<T>(&mut self, field: &str, value: &Option<T>) -> &mut Self {
        if value.is_none() {
            self.push(field, "is required");
        }
        self
    }

    pub fn max_len(&mut self, field: &str, value: Option<&str>, max: usize) -> &mut Self {
        if let Some(v) = present(value)
            && v.chars().count() > max
        {
            self.push(field, format!("must be at most {} characters", max));
        }
        self
    }

    fn pattern(&mut self, field: &str, value: Option<&str>, re: &Regex, message: &str) {
        if let Some(v) = present(value)
            && !re.is_match(v)
        {
            self.push(field, message);
        }
    }

    pub fn imo(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        self.pattern(field, value, &IMO_RE, "must match IMO followed by 7 digits");
        self
    }

    pub fn unlocode(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        self.pattern(field, value, &UNLOCODE_RE, "must be a 5-character UN/LOCODE");
        self
    }

    pub fn iata(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        self.pattern(field, value, &IATA_RE, "must be a 3-letter IATA code");
        self
    }

    pub fn currency(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        self.pattern(field, value, &IATA_RE, "must be a 3-letter ISO 4217 code");
        self
    }

    pub fn email(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        self.pattern(field, value, &EMAIL_RE, "must be a valid email address");
        self
    }

    pub fn phone(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        self.pattern(field, value, &PHONE_RE, "must be a valid phone number");
        self
    }

    pub fn url(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = present(value) {
            let ok = url::Url::parse(v)
                .map(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
                .unwrap_or(false);
            if !ok {
                self.push(field, "must be a valid http(s) URL");
            }
        }
        self
    }

    /// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
    pub fn date(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = present(value) {
            let ok = chrono::NaiveDate::parse_from_str(v, "%Y-%m-%d").is_ok()
                || chrono::DateTime::parse_from_rfc3339(v).is_ok()
                || chrono::NaiveDateTime::parse_from_str(v, "%Y-%m-%dT%H:%M:%S").is_ok();
            if !ok {
                self.push(field, "must be a valid ISO-8601 date");
            }
        }
        self
    }

    pub fn range(&mut self, field: &str, value: Option<f64>, min: f64, max: f64) -> &mut Self {
        if let Some(v) = value
            && !(min..=max).contains(&v)
        {
            self.push(field, format!("must be between {} and {}", min, max));
        }
        self
    }

    pub fn positive(&mut self, field: &str, value: Option<f64>) -> &mut Self {
        if let Some(v) = value
            && v <= 0.0
        {
            self.push(field, "must be greater than 0");
        }
        self
    }

    /// Record `message` for `field` unless `ok` holds.
    pub fn check(&mut self, field: &str, ok: bool, message: &str) -> &mut Self {
        if !ok {
            self.push(field, message);
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                errors: std::mem::take(&mut self.errors),
            })
        }
    }
}
