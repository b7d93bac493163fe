//! Per-step validation schemas
//!
//! Declarative field constraints, enforced before any step save. Formats
//! match what the forms display: SSN `XXX-XX-XXXX`, phone `(XXX) XXX-XXXX`,
//! date `MM/DD/YYYY`, ZIP `XXXXX` or `XXXXX-XXXX`. Money fields must be
//! finite and non-negative.

use crate::error::{FieldError, ValidationErrors};
use crate::record::{Deductions, Income, PersonalInfo};
use once_cell::sync::Lazy;
use regex::Regex;

static SSN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}-\d{2}-\d{4}$").expect("ssn regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(\d{3}\) \d{3}-\d{4}$").expect("phone regex"));
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12]\d|3[01])/\d{4}$").expect("date regex"));
static ZIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("zip regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError {
            field,
            message: "This field is required.".to_string(),
        });
    }
}

fn require_format(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    re: &Regex,
    expected: &str,
) {
    if !re.is_match(value) {
        errors.push(FieldError {
            field,
            message: format!("Must match the format {expected}."),
        });
    }
}

fn require_non_negative(errors: &mut Vec<FieldError>, field: &'static str, value: f64) {
    if !value.is_finite() || value < 0.0 {
        errors.push(FieldError {
            field,
            message: "Must be zero or a positive amount.".to_string(),
        });
    }
}

/// Validate the personal-info step
///
/// # Errors
/// `ValidationErrors` listing every offending field.
pub fn validate_personal(info: &PersonalInfo) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    require(&mut errors, "first_name", &info.first_name);
    require(&mut errors, "last_name", &info.last_name);
    require(&mut errors, "street", &info.street);
    require(&mut errors, "city", &info.city);

    require_format(&mut errors, "ssn", &info.ssn, &SSN_RE, "XXX-XX-XXXX");
    require_format(
        &mut errors,
        "date_of_birth",
        &info.date_of_birth,
        &DATE_RE,
        "MM/DD/YYYY",
    );
    require_format(&mut errors, "phone", &info.phone, &PHONE_RE, "(XXX) XXX-XXXX");
    require_format(&mut errors, "zip", &info.zip, &ZIP_RE, "XXXXX");
    require_format(&mut errors, "email", &info.email, &EMAIL_RE, "name@example.com");

    if info.state.len() != 2 || !info.state.chars().all(|c| c.is_ascii_uppercase()) {
        errors.push(FieldError {
            field: "state",
            message: "Must be a two-letter state code.".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Validate the income step
///
/// # Errors
/// `ValidationErrors` listing every offending field.
pub fn validate_income(income: &Income) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    require_non_negative(&mut errors, "wages", income.wages);
    require_non_negative(&mut errors, "interest_income", income.interest_income);
    require_non_negative(&mut errors, "dividend_income", income.dividend_income);
    require_non_negative(&mut errors, "other_income", income.other_income);
    require_non_negative(&mut errors, "federal_withheld", income.federal_withheld);
    require_non_negative(&mut errors, "state_withheld", income.state_withheld);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Validate the deductions step
///
/// # Errors
/// `ValidationErrors` listing every offending field.
pub fn validate_deductions(deductions: &Deductions) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    require_non_negative(&mut errors, "mortgage_interest", deductions.mortgage_interest);
    require_non_negative(
        &mut errors,
        "charitable_donations",
        deductions.charitable_donations,
    );
    require_non_negative(&mut errors, "medical_expenses", deductions.medical_expenses);
    require_non_negative(&mut errors, "state_local_taxes", deductions.state_local_taxes);
    require_non_negative(
        &mut errors,
        "student_loan_interest",
        deductions.student_loan_interest,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

#[cfg(test)]
pub(crate) mod tests_support {
    //! Fixtures shared across the crate's unit tests

    use crate::record::{FilingStatus, PersonalInfo};

    pub(crate) fn sample_personal() -> PersonalInfo {
        PersonalInfo {
            first_name: "John".to_string(),
            last_name: "Taxpayer".to_string(),
            ssn: "123-45-6789".to_string(),
            date_of_birth: "04/15/1985".to_string(),
            email: "user@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "CA".to_string(),
            zip: "90210".to_string(),
            filing_status: FilingStatus::Single,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::tests_support::sample_personal as valid_personal;
    use super::*;

    #[test]
    fn valid_personal_info_passes() {
        assert!(validate_personal(&valid_personal()).is_ok());
    }

    #[test]
    fn format_violations_are_field_scoped() {
        let mut info = valid_personal();
        info.ssn = "123456789".to_string();
        info.phone = "5551234567".to_string();

        let errors = validate_personal(&info).unwrap_err();
        assert_eq!(errors.0.len(), 2);
        assert!(errors.message_for("ssn").unwrap().contains("XXX-XX-XXXX"));
        assert!(errors.message_for("phone").is_some());
        assert!(errors.message_for("zip").is_none());
    }

    #[test]
    fn date_rejects_impossible_months() {
        let mut info = valid_personal();
        info.date_of_birth = "13/01/1990".to_string();
        assert!(validate_personal(&info).is_err());

        info.date_of_birth = "12/31/1990".to_string();
        assert!(validate_personal(&info).is_ok());
    }

    #[test]
    fn zip_accepts_both_forms() {
        let mut info = valid_personal();
        info.zip = "90210-1234".to_string();
        assert!(validate_personal(&info).is_ok());
        info.zip = "9021".to_string();
        assert!(validate_personal(&info).is_err());
    }

    #[test]
    fn income_rejects_negative_amounts() {
        let income = Income {
            wages: -1.0,
            ..Income::default()
        };
        let errors = validate_income(&income).unwrap_err();
        assert!(errors.message_for("wages").is_some());
    }

    #[test]
    fn income_rejects_non_finite_amounts() {
        let income = Income {
            federal_withheld: f64::NAN,
            ..Income::default()
        };
        assert!(validate_income(&income).is_err());
    }

    #[test]
    fn default_deductions_pass() {
        assert!(validate_deductions(&Deductions::default()).is_ok());
    }
}
