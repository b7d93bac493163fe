//! Tax return record lifecycle
//!
//! The aggregate at the heart of the application:
//! - [`TaxReturnRecord`] and its sub-records (personal info, income,
//!   deductions), comments, and attachments
//! - The monotonic [`ReturnStatus`] state machine
//! - The strictly linear filing [`WizardStep`] machine
//! - Regex-backed per-step validation schemas
//! - The placeholder refund estimate (fixed constants, not tax law)
//! - [`ReturnsRepository`]: persistence over the injected key-value store,
//!   one JSON blob per record, last-write-wins

pub mod error;
pub mod record;
pub mod refund;
pub mod repository;
pub mod status;
pub mod validate;
pub mod wizard;

pub use error::{FieldError, ReturnsError, ValidationErrors};
pub use record::{
    AttachmentMeta, Comment, Deductions, DeductionMethod, FilingStatus, Income, PersonalInfo,
    ReturnType, TaxReturnRecord,
};
pub use refund::{calculate_refund, FLAT_TAX_RATE, STANDARD_DEDUCTION};
pub use repository::{MissingRecordPolicy, ReturnsRepository, StepData, RETURN_KEY_PREFIX};
pub use status::ReturnStatus;
pub use wizard::{FilingWizard, WizardStep};
