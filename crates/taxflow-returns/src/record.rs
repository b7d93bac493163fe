//! The tax return aggregate and its sub-records
//!
//! One record persists as one JSON unit; every mutation rewrites the whole
//! blob (last-write-wins, no merge).

use crate::status::ReturnStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taxflow_types::{AttachmentId, CommentId, ReturnId, Role, UserId};

/// Kind of return being filed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnType {
    /// Individual federal return
    #[default]
    Individual,
    /// Joint return
    Joint,
    /// Business return
    Business,
}

/// Filing status declared on the personal-info step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    /// Single filer
    Single,
    /// Married filing jointly
    MarriedJoint,
    /// Married filing separately
    MarriedSeparate,
    /// Head of household
    HeadOfHousehold,
}

/// Deduction method declared on the deductions step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionMethod {
    /// Standard deduction
    #[default]
    Standard,
    /// Itemized deductions
    Itemized,
}

/// Personal information step data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Social security number, `XXX-XX-XXXX`
    pub ssn: String,
    /// Date of birth, `MM/DD/YYYY`
    pub date_of_birth: String,
    /// Contact email
    pub email: String,
    /// Contact phone, `(XXX) XXX-XXXX`
    pub phone: String,
    /// Street address
    pub street: String,
    /// City
    pub city: String,
    /// Two-letter state code
    pub state: String,
    /// ZIP code, `XXXXX` or `XXXXX-XXXX`
    pub zip: String,
    /// Declared filing status
    pub filing_status: FilingStatus,
}

/// Income step data; amounts in whole dollars
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Income {
    /// W-2 wages
    pub wages: f64,
    /// Interest income
    pub interest_income: f64,
    /// Dividend income
    pub dividend_income: f64,
    /// Other income
    pub other_income: f64,
    /// Federal tax withheld
    pub federal_withheld: f64,
    /// State tax withheld
    pub state_withheld: f64,
}

/// Deductions step data; amounts in whole dollars
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Deductions {
    /// Standard vs itemized
    pub method: DeductionMethod,
    /// Mortgage interest paid
    pub mortgage_interest: f64,
    /// Charitable donations
    pub charitable_donations: f64,
    /// Medical expenses
    pub medical_expenses: f64,
    /// State and local taxes paid
    pub state_local_taxes: f64,
    /// Student loan interest
    pub student_loan_interest: f64,
}

/// One comment on a return; the list is append-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier
    pub id: CommentId,
    /// Author
    pub author_id: UserId,
    /// Author's role at the time of writing
    pub author_role: Role,
    /// Message text
    pub message: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// When set, this comment forces the return into `needs_info`
    #[serde(default)]
    pub requests_additional_info: bool,
}

/// Metadata for one uploaded attachment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentMeta {
    /// Attachment identifier
    pub id: AttachmentId,
    /// Original file name
    pub file_name: String,
    /// MIME type as reported at upload
    pub mime_type: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// Upload timestamp
    pub uploaded_at: DateTime<Utc>,
    /// Uploading user
    pub uploaded_by: UserId,
}

/// The tax return aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxReturnRecord {
    /// Record identifier
    pub id: ReturnId,
    /// Display name shown in listings
    pub name: String,
    /// Tax year being filed
    pub tax_year: u16,
    /// Lifecycle status
    pub status: ReturnStatus,
    /// Kind of return
    pub return_type: ReturnType,
    /// Bumped on every mutation
    pub updated_at: DateTime<Utc>,
    /// Owning user
    pub owner_id: UserId,
    /// Accountant assigned to review, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_professional: Option<UserId>,
    /// Personal-info step, once saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<PersonalInfo>,
    /// Income step, once saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<Income>,
    /// Deductions step, once saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deductions: Option<Deductions>,
    /// Ordered, append-only comment list
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Descriptions of documents a reviewer has requested
    #[serde(default)]
    pub requested_documents: Vec<String>,
    /// Uploaded attachment metadata
    #[serde(default)]
    pub attachments: Vec<AttachmentMeta>,
}

impl TaxReturnRecord {
    /// Create a fresh draft for `owner` with a specific id
    #[must_use]
    pub fn new_draft(id: ReturnId, owner_id: UserId, tax_year: u16) -> Self {
        Self {
            id,
            name: format!("{tax_year} Tax Return"),
            tax_year,
            status: ReturnStatus::Draft,
            return_type: ReturnType::default(),
            updated_at: Utc::now(),
            owner_id,
            assigned_professional: None,
            personal_info: None,
            income: None,
            deductions: None,
            comments: Vec::new(),
            requested_documents: Vec::new(),
            attachments: Vec::new(),
        }
    }

    /// Whether all three wizard sub-records have been saved
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.personal_info.is_some() && self.income.is_some() && self.deductions.is_some()
    }

    /// Names of the sub-records still missing for submission
    #[must_use]
    pub fn missing_sections(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.personal_info.is_none() {
            missing.push("personal information");
        }
        if self.income.is_none() {
            missing.push("income");
        }
        if self.deductions.is_none() {
            missing.push("deductions");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_draft_has_no_sections() {
        let record = TaxReturnRecord::new_draft(ReturnId::new(), UserId::new(), 2023);
        assert_eq!(record.status, ReturnStatus::Draft);
        assert!(!record.is_complete());
        assert_eq!(
            record.missing_sections(),
            vec!["personal information", "income", "deductions"]
        );
    }

    #[test]
    fn record_json_roundtrip_is_lossless() {
        let mut record = TaxReturnRecord::new_draft(ReturnId::new(), UserId::new(), 2023);
        record.income = Some(Income {
            wages: 50_000.0,
            interest_income: 500.0,
            federal_withheld: 9_000.0,
            ..Income::default()
        });
        record.comments.push(Comment {
            id: CommentId::new(),
            author_id: record.owner_id,
            author_role: Role::Taxpayer,
            message: "first pass".to_string(),
            created_at: Utc::now(),
            requests_additional_info: false,
        });

        let json = serde_json::to_string(&record).unwrap();
        let back: TaxReturnRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
