//! Returns repository
//!
//! Persists each [`TaxReturnRecord`] as one JSON blob under a prefixed key
//! in the injected store. Every mutation loads, modifies, bumps the
//! timestamp, and rewrites the whole record; concurrent writers race with
//! last-write-wins semantics, which is accepted for this local-first model.

use crate::error::ReturnsError;
use crate::record::{AttachmentMeta, Comment, Deductions, Income, PersonalInfo, TaxReturnRecord};
use crate::status::ReturnStatus;
use crate::validate;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use taxflow_store::KeyValueStore;
use taxflow_types::{AttachmentId, CommentId, NoticeLevel, Notifier, ReturnId, Role, UserId};

/// Store key prefix for persisted returns
pub const RETURN_KEY_PREFIX: &str = "tax_return_";

/// What `load` does when the id has no persisted record
///
/// The original behavior silently created a record under the requested id;
/// kept available but configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingRecordPolicy {
    /// Create a fresh draft under the requested id (original behavior)
    #[default]
    CreateWithId,
    /// Report `ReturnsError::NotFound`
    Fail,
}

/// Validated payload for one wizard step save
#[derive(Debug, Clone, PartialEq)]
pub enum StepData {
    /// Personal-info step
    Personal(PersonalInfo),
    /// Income step
    Income(Income),
    /// Deductions step
    Deductions(Deductions),
}

/// Lifecycle operations over persisted tax returns
#[derive(Clone)]
pub struct ReturnsRepository {
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    missing_policy: MissingRecordPolicy,
    simulated_delay: Duration,
}

impl std::fmt::Debug for ReturnsRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReturnsRepository")
            .field("missing_policy", &self.missing_policy)
            .field("simulated_delay", &self.simulated_delay)
            .finish_non_exhaustive()
    }
}

impl ReturnsRepository {
    /// Create a repository over `store`
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            missing_policy: MissingRecordPolicy::default(),
            simulated_delay: Duration::ZERO,
        }
    }

    /// With a specific missing-record policy
    #[inline]
    #[must_use]
    pub fn with_missing_policy(mut self, policy: MissingRecordPolicy) -> Self {
        self.missing_policy = policy;
        self
    }

    /// With a simulated network delay applied to submission
    #[inline]
    #[must_use]
    pub fn with_simulated_delay(mut self, delay: Duration) -> Self {
        self.simulated_delay = delay;
        self
    }

    fn key(id: ReturnId) -> String {
        format!("{RETURN_KEY_PREFIX}{id}")
    }

    fn read(&self, id: ReturnId) -> Result<Option<TaxReturnRecord>, ReturnsError> {
        match self.store.get(&Self::key(id))? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn require(&self, id: ReturnId) -> Result<TaxReturnRecord, ReturnsError> {
        self.read(id)?.ok_or(ReturnsError::NotFound(id))
    }

    fn persist(&self, record: &mut TaxReturnRecord) -> Result<(), ReturnsError> {
        record.updated_at = Utc::now();
        let raw = serde_json::to_string(record)?;
        self.store.put(&Self::key(record.id), &raw)?;
        Ok(())
    }

    /// Create a fresh draft for `owner` and persist it immediately
    ///
    /// # Errors
    /// `ReturnsError::Store` if persistence fails.
    pub fn create(&self, owner: UserId, tax_year: u16) -> Result<TaxReturnRecord, ReturnsError> {
        let mut record = TaxReturnRecord::new_draft(ReturnId::new(), owner, tax_year);
        self.persist(&mut record)?;
        tracing::info!(id = %record.id, %owner, tax_year, "created tax return");
        Ok(record)
    }

    /// Load a record by id
    ///
    /// A miss follows the configured [`MissingRecordPolicy`]: either a fresh
    /// draft is created under the requested id for `owner`, or the miss is
    /// an error.
    ///
    /// # Errors
    /// `ReturnsError::NotFound` under `MissingRecordPolicy::Fail`.
    pub fn load(
        &self,
        id: ReturnId,
        owner: UserId,
        tax_year: u16,
    ) -> Result<TaxReturnRecord, ReturnsError> {
        if let Some(record) = self.read(id)? {
            return Ok(record);
        }
        match self.missing_policy {
            MissingRecordPolicy::CreateWithId => {
                tracing::debug!(%id, "load miss, creating draft under requested id");
                let mut record = TaxReturnRecord::new_draft(id, owner, tax_year);
                self.persist(&mut record)?;
                Ok(record)
            }
            MissingRecordPolicy::Fail => Err(ReturnsError::NotFound(id)),
        }
    }

    /// All persisted returns, most recently updated first
    ///
    /// Pass an owner to narrow to that user's records. Corrupt blobs are
    /// skipped with a warning rather than failing the whole listing.
    pub fn list(&self, owner: Option<UserId>) -> Result<Vec<TaxReturnRecord>, ReturnsError> {
        let mut records: Vec<TaxReturnRecord> = self
            .store
            .list_by_prefix(RETURN_KEY_PREFIX)?
            .into_iter()
            .filter_map(|(key, raw)| match serde_json::from_str(&raw) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(key, error = %e, "skipping corrupt return blob");
                    None
                }
            })
            .filter(|r: &TaxReturnRecord| owner.map_or(true, |o| r.owner_id == o))
            .collect();
        records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(records)
    }

    /// Validate and save one wizard step
    ///
    /// The first personal-info save moves a draft to `InProgress`. Persists
    /// the whole record and notifies success.
    ///
    /// # Errors
    /// - `ReturnsError::Validation` with field-scoped messages
    /// - `ReturnsError::NotFound` if the record is missing
    pub fn save_step(
        &self,
        id: ReturnId,
        data: StepData,
    ) -> Result<TaxReturnRecord, ReturnsError> {
        let mut record = self.require(id)?;

        match data {
            StepData::Personal(info) => {
                validate::validate_personal(&info)?;
                let first_save = record.personal_info.is_none();
                record.personal_info = Some(info);
                if first_save && record.status == ReturnStatus::Draft {
                    record.status = ReturnStatus::InProgress;
                }
            }
            StepData::Income(income) => {
                validate::validate_income(&income)?;
                record.income = Some(income);
            }
            StepData::Deductions(deductions) => {
                validate::validate_deductions(&deductions)?;
                record.deductions = Some(deductions);
            }
        }

        self.persist(&mut record)?;
        tracing::debug!(%id, status = %record.status, "step saved");
        self.notifier.success("Your progress has been saved.");
        Ok(record)
    }

    /// Submit a completed return
    ///
    /// Requires all three sub-records. Waits the simulated network delay,
    /// then moves the return to `Resubmitted` when it was in `NeedsInfo`,
    /// otherwise `Submitted`.
    ///
    /// # Errors
    /// - `ReturnsError::IncompleteRecord` (status left unchanged)
    /// - `ReturnsError::InvalidTransition` if the current status does not
    ///   allow submission (already submitted or approved)
    /// - `ReturnsError::NotFound` if the record is missing
    pub async fn submit(&self, id: ReturnId) -> Result<TaxReturnRecord, ReturnsError> {
        let mut record = self.require(id)?;

        if !record.is_complete() {
            let missing = record.missing_sections();
            self.notifier.error(&format!(
                "Cannot submit yet. Please complete: {}.",
                missing.join(", ")
            ));
            return Err(ReturnsError::IncompleteRecord { missing });
        }

        let target = if record.status == ReturnStatus::NeedsInfo {
            ReturnStatus::Resubmitted
        } else {
            ReturnStatus::Submitted
        };
        if !record.status.can_transition_to(target) {
            return Err(ReturnsError::InvalidTransition {
                from: record.status,
                to: target,
            });
        }

        tokio::time::sleep(self.simulated_delay).await;

        record.status = target;
        self.persist(&mut record)?;
        tracing::info!(%id, status = %record.status, "return submitted");
        self.notifier
            .success("Your tax return has been submitted for review.");
        Ok(record)
    }

    /// Approve a submitted return
    ///
    /// # Errors
    /// `ReturnsError::InvalidTransition` unless the current status allows
    /// moving to `Approved`.
    pub fn approve(&self, id: ReturnId) -> Result<TaxReturnRecord, ReturnsError> {
        let mut record = self.require(id)?;
        if !record.status.can_transition_to(ReturnStatus::Approved) {
            return Err(ReturnsError::InvalidTransition {
                from: record.status,
                to: ReturnStatus::Approved,
            });
        }
        record.status = ReturnStatus::Approved;
        self.persist(&mut record)?;
        tracing::info!(%id, "return approved");
        self.notifier.success("The return has been approved.");
        Ok(record)
    }

    /// Append a comment
    ///
    /// A comment flagged as requesting additional info forces the status to
    /// `NeedsInfo` unconditionally, even from `Approved`.
    pub fn add_comment(
        &self,
        id: ReturnId,
        author_id: UserId,
        author_role: Role,
        message: &str,
        requests_additional_info: bool,
    ) -> Result<TaxReturnRecord, ReturnsError> {
        let mut record = self.require(id)?;
        record.comments.push(Comment {
            id: CommentId::new(),
            author_id,
            author_role,
            message: message.to_string(),
            created_at: Utc::now(),
            requests_additional_info,
        });
        if requests_additional_info {
            record.status = ReturnStatus::NeedsInfo;
            self.notifier.notify(
                NoticeLevel::Warning,
                "Additional information has been requested on this return.",
            );
        }
        self.persist(&mut record)?;
        Ok(record)
    }

    /// Append attachment metadata for an uploaded file
    pub fn add_attachment(
        &self,
        id: ReturnId,
        file_name: &str,
        mime_type: &str,
        size_bytes: u64,
        uploaded_by: UserId,
    ) -> Result<TaxReturnRecord, ReturnsError> {
        let mut record = self.require(id)?;
        record.attachments.push(AttachmentMeta {
            id: AttachmentId::new(),
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            size_bytes,
            uploaded_at: Utc::now(),
            uploaded_by,
        });
        self.persist(&mut record)?;
        self.notifier.success("Your document has been uploaded.");
        Ok(record)
    }

    /// Record that a reviewer asked for a document
    pub fn request_document(
        &self,
        id: ReturnId,
        description: &str,
    ) -> Result<TaxReturnRecord, ReturnsError> {
        let mut record = self.require(id)?;
        record.requested_documents.push(description.to_string());
        self.persist(&mut record)?;
        Ok(record)
    }

    /// Delete a persisted return
    ///
    /// Only the record's owner or an admin may delete.
    ///
    /// # Errors
    /// - `ReturnsError::NotFound` if nothing is stored under `id`
    /// - `ReturnsError::NotAuthorized` for any other actor
    pub fn delete(
        &self,
        id: ReturnId,
        actor: UserId,
        actor_role: Role,
    ) -> Result<(), ReturnsError> {
        // Existence check first so deleting a phantom id is loud
        let record = self.require(id)?;
        if record.owner_id != actor && actor_role != Role::Admin {
            tracing::warn!(%id, %actor, role = %actor_role, "delete refused");
            return Err(ReturnsError::NotAuthorized { actor, id });
        }
        self.store.delete(&Self::key(id))?;
        tracing::info!(%id, %actor, "return deleted");
        self.notifier.success("The return has been deleted.");
        Ok(())
    }
}
