//! Default structural rules for employee records.
//!
//! # Invariants
//! - Surname must match the name-shape pattern as a whole string.
//! - Email local part is one or more dot-separated atoms; no leading,
//!   trailing or doubled dots.
//! - Birth date, when set, lies strictly before "today".
//! - An address is checked as a unit; both of its fields must be valid.

use crate::model::employee::{Address, Employee};
use crate::validation::{Validator, Violation};
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Five-digit postal code rule used when nothing else is configured.
pub const DEFAULT_POSTAL_CODE_PATTERN: &str = r"\d{5}";

static SURNAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:o'|(?:von und zu|von der|von|van) ?)?[A-ZÄÖÜ][a-zäöüß]+(?:-[A-ZÄÖÜ][a-zäöüß]+)?$",
    )
    .expect("valid surname regex")
});
// Local part: dot-separated atoms of RFC 5322 atext plus non-ASCII (RFC 6531).
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{80}-\x{10FFFF}\-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{80}-\x{10FFFF}\-]+)*@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*$"#,
    )
    .expect("valid email regex")
});
static DEFAULT_POSTAL_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    anchored(DEFAULT_POSTAL_CODE_PATTERN).expect("valid default postal code regex")
});

/// Returns whether `surname` has a valid name shape.
pub fn is_valid_surname(surname: &str) -> bool {
    SURNAME_RE.is_match(surname)
}

/// Returns whether `email` is a syntactically valid address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Built-in employee validator.
#[derive(Debug, Clone)]
pub struct EmployeeValidator {
    postal_code: Regex,
    fixed_today: Option<NaiveDate>,
}

impl Default for EmployeeValidator {
    fn default() -> Self {
        Self {
            postal_code: DEFAULT_POSTAL_CODE_RE.clone(),
            fixed_today: None,
        }
    }
}

impl EmployeeValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a locale-specific postal code rule.
    ///
    /// The pattern is anchored, so `[0-9]{4}` only accepts exactly four digits.
    pub fn with_postal_code_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            postal_code: anchored(pattern)?,
            fixed_today: None,
        })
    }

    /// Pins the reference date used by the past-date rule.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    fn check_address(&self, address: &Address, violations: &mut Vec<Violation>) {
        if !self.postal_code.is_match(&address.postal_code) {
            violations.push(Violation::new(
                "address.postal_code",
                format!(
                    "postal code `{}` does not match the configured pattern",
                    address.postal_code
                ),
            ));
        }
        if address.city.trim().is_empty() {
            violations.push(Violation::new("address.city", "city must not be blank"));
        }
    }
}

impl Validator<Employee> for EmployeeValidator {
    fn validate(&self, employee: &Employee) -> Vec<Violation> {
        let mut violations = Vec::new();

        if !is_valid_surname(&employee.surname) {
            violations.push(Violation::new(
                "surname",
                "surname must be a capitalized name with an optional particle prefix",
            ));
        }
        if !is_valid_email(&employee.email) {
            violations.push(Violation::new("email", "email must be a valid address"));
        }
        if let Some(birth_date) = employee.birth_date {
            if birth_date >= self.today() {
                violations.push(Violation::new(
                    "birth_date",
                    format!("birth date {birth_date} must lie in the past"),
                ));
            }
        }
        if let Some(address) = &employee.address {
            self.check_address(address, &mut violations);
        }

        violations
    }
}

fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}

#[cfg(test)]
mod tests {
    use super::{anchored, is_valid_email, is_valid_surname};

    #[test]
    fn surname_pattern_accepts_particles_and_double_names() {
        for name in [
            "Alpha",
            "Müller-Lüdenscheidt",
            "von Goethe",
            "von der Heide",
            "von und zu Guttenberg",
            "van Gogh",
            "o'Brien",
            "vonMeier",
        ] {
            assert!(is_valid_surname(name), "{name} should be accepted");
        }
    }

    #[test]
    fn surname_pattern_rejects_malformed_names() {
        for name in ["", "alpha", "ALPHA", "Alpha-", "Alpha-beta", "Al pha", "von"] {
            assert!(!is_valid_surname(name), "{name} should be rejected");
        }
    }

    #[test]
    fn email_pattern_checks_basic_shape() {
        assert!(is_valid_email("alpha@acme.de"));
        assert!(is_valid_email("first.last+tag@sub.acme.com"));
        assert!(!is_valid_email("alpha"));
        assert!(!is_valid_email("alpha@"));
        assert!(!is_valid_email("@acme.de"));
        assert!(!is_valid_email("al pha@acme.de"));
    }

    #[test]
    fn email_local_part_allows_atext_and_non_ascii() {
        assert!(is_valid_email("o'brien@acme.de"));
        assert!(is_valid_email("a!b@acme.de"));
        assert!(is_valid_email("jürgen@acme.de"));
        assert!(is_valid_email("x{y}~z@acme.de"));
    }

    #[test]
    fn email_local_part_rejects_misplaced_dots() {
        assert!(!is_valid_email(".alpha@acme.de"));
        assert!(!is_valid_email("alpha.@acme.de"));
        assert!(!is_valid_email("a..b@acme.de"));
        assert!(!is_valid_email("a\"b@acme.de"));
    }

    #[test]
    fn anchored_pattern_requires_full_match() {
        let re = anchored("[0-9]{4}").expect("pattern should compile");
        assert!(re.is_match("1234"));
        assert!(!re.is_match("12345"));
    }
}
