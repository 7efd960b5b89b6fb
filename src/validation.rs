use crate::config::MIN_PASSWORD_LEN;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::BTreeMap;

// Loose shape check, deliberately not RFC 5322
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());
static DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Field identifier → displayable message. An empty map means the draft is valid.
pub type ErrorMap<F> = BTreeMap<F, String>;

/// A single failed rule. The error map stores the rendered message.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    Required(&'static str),
    NotNonNegative(&'static str),
    AboveMaximum(&'static str, String),
    InvalidEmail,
    PasswordTooShort(usize),
    PasswordMismatch,
    RankOrder,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Required(label) => write!(f, "{} is required", label),
            FieldError::NotNonNegative(label) => write!(f, "{} must be a positive number", label),
            FieldError::AboveMaximum(label, max) => write!(f, "{} cannot exceed {}%", label, max),
            FieldError::InvalidEmail => write!(f, "Email is invalid"),
            FieldError::PasswordTooShort(min) => {
                write!(f, "Password must be at least {} characters", min)
            }
            FieldError::PasswordMismatch => write!(f, "Passwords do not match"),
            FieldError::RankOrder => write!(f, "Max rank must be greater than min rank"),
        }
    }
}

impl std::error::Error for FieldError {}

/// Generic non-negative numeric input validation with an optional upper bound.
///
/// Empty input is reported as missing. Surrounding whitespace is ignored
/// after that, so a value of only spaces is not a number. Anything that does
/// not start like a plain number (sign, `NaN`, `inf`), fails to parse as `T`,
/// or falls below zero is reported as not a positive number.
pub fn validate_numeric_input<T>(
    input: &str,
    max: Option<T>,
    field_name: &'static str,
) -> Result<T, FieldError>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd + Default,
{
    if input.is_empty() {
        return Err(FieldError::Required(field_name));
    }
    let trimmed = input.trim();
    if !trimmed.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Err(FieldError::NotNonNegative(field_name));
    }

    let val = trimmed
        .parse::<T>()
        .map_err(|_| FieldError::NotNonNegative(field_name))?;
    if !(val >= T::default()) {
        return Err(FieldError::NotNonNegative(field_name));
    }
    if let Some(max_val) = max {
        if val > max_val {
            return Err(FieldError::AboveMaximum(field_name, max_val.to_string()));
        }
    }
    Ok(val)
}

/// A whole, non-negative sales rank of any length.
///
/// Holds the decimal digits without leading zeros (`"0"` for zero), so
/// ranks order by digit count first and then digit by digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rank(String);

impl Rank {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate a sales-rank bound: required, whole, non-negative, unbounded.
pub fn validate_rank(input: &str, field_name: &'static str) -> Result<Rank, FieldError> {
    if input.is_empty() {
        return Err(FieldError::Required(field_name));
    }
    let trimmed = input.trim();
    if !DIGITS_REGEX.is_match(trimmed) {
        return Err(FieldError::NotNonNegative(field_name));
    }
    let digits = trimmed.trim_start_matches('0');
    Ok(Rank(if digits.is_empty() { "0" } else { digits }.to_string()))
}

/// Validate a profit value; `max` caps percentages.
pub fn validate_profit(
    input: &str,
    max: Option<f64>,
    field_name: &'static str,
) -> Result<f64, FieldError> {
    validate_numeric_input::<f64>(input, max, field_name)
}

pub fn validate_email(input: &str) -> Result<(), FieldError> {
    if input.is_empty() {
        Err(FieldError::Required("Email"))
    } else if !EMAIL_REGEX.is_match(input) {
        Err(FieldError::InvalidEmail)
    } else {
        Ok(())
    }
}

pub fn validate_password(input: &str) -> Result<(), FieldError> {
    if input.is_empty() {
        Err(FieldError::Required("Password"))
    } else if input.encode_utf16().count() < MIN_PASSWORD_LEN {
        Err(FieldError::PasswordTooShort(MIN_PASSWORD_LEN))
    } else {
        Ok(())
    }
}

/// Record `result` under `field` when it failed, passing the value through otherwise.
pub(crate) fn record<F: Ord, T>(
    errors: &mut ErrorMap<F>,
    field: F,
    result: Result<T, FieldError>,
) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            errors.insert(field, e.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_numeric_input_is_required() {
        assert_eq!(
            validate_profit("", None, "US Profit"),
            Err(FieldError::Required("US Profit"))
        );
        assert_eq!(
            validate_rank("", "US Min Rank").unwrap_err().to_string(),
            "US Min Rank is required"
        );
    }

    #[test]
    fn spaces_alone_are_not_a_number() {
        assert_eq!(
            validate_rank("   ", "US Min Rank").unwrap_err().to_string(),
            "US Min Rank must be a positive number"
        );
        assert_eq!(
            validate_profit(" \t", None, "US Profit"),
            Err(FieldError::NotNonNegative("US Profit"))
        );
        assert_eq!(validate_profit(" 12.5 ", None, "US Profit"), Ok(12.5));
        assert_eq!(validate_rank(" 42 ", "US Min Rank").unwrap().as_str(), "42");
    }

    #[test]
    fn negative_and_garbage_are_rejected() {
        for bad in ["-1", "abc", "NaN", "inf", "1.2.3"] {
            assert_eq!(
                validate_profit(bad, None, "US Profit"),
                Err(FieldError::NotNonNegative("US Profit")),
                "input {:?}",
                bad
            );
        }
        for bad in ["-5", "12.5", "1e3", "x"] {
            assert!(validate_rank(bad, "US Max Rank").is_err(), "input {:?}", bad);
        }
    }

    #[test]
    fn percentage_cap_is_inclusive() {
        assert_eq!(validate_profit("100", Some(100.0), "US Profit"), Ok(100.0));
        assert_eq!(
            validate_profit("100.01", Some(100.0), "US Profit")
                .unwrap_err()
                .to_string(),
            "US Profit cannot exceed 100%"
        );
    }

    #[test]
    fn zero_is_accepted() {
        assert_eq!(validate_profit("0", Some(100.0), "Canada Profit"), Ok(0.0));
        assert_eq!(validate_rank("0", "Canada Min Rank").unwrap().as_str(), "0");
        assert_eq!(validate_rank("000", "Canada Min Rank").unwrap().as_str(), "0");
    }

    #[test]
    fn ranks_have_no_upper_limit() {
        let huge = validate_rank("99999999999999999999", "US Max Rank").unwrap();
        assert_eq!(huge.as_str(), "99999999999999999999");
        let small = validate_rank("30000", "US Min Rank").unwrap();
        assert!(small < huge);
        assert!(validate_rank("100000000000000000000000000000", "US Max Rank").unwrap() > huge);
    }

    #[test]
    fn rank_order_ignores_leading_zeros() {
        let padded = validate_rank("0009", "US Min Rank").unwrap();
        let ten = validate_rank("10", "US Max Rank").unwrap();
        assert!(padded < ten);
        assert_eq!(padded, validate_rank("9", "US Min Rank").unwrap());
        assert!(validate_rank("٣", "US Min Rank").is_err());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("first.last@sub.example.org").is_ok());
        assert_eq!(validate_email(""), Err(FieldError::Required("Email")));
        for bad in ["bad", "a@b", "@.", "a b@c"] {
            assert_eq!(validate_email(bad), Err(FieldError::InvalidEmail), "{}", bad);
        }
    }

    #[test]
    fn password_length_counts_utf16_units() {
        assert!(validate_password("123456").is_ok());
        assert!(validate_password("ééééé").is_err());
        // Each emoji is a surrogate pair, two units apiece.
        assert!(validate_password("😀😀😀").is_ok());
        assert!(validate_password("😀😀").is_err());
        assert_eq!(
            validate_password("12345").unwrap_err().to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            validate_password("").unwrap_err().to_string(),
            "Password is required"
        );
    }
}
