//! Assessment business logic
//!
//! Validates payloads before any store write, constructs and merges records,
//! and implements the derived queries. A failed operation leaves stored
//! state exactly as it was.

use std::sync::Arc;

use tracing::debug;

use crate::error::AssessmentError;
use crate::sources::{CallerIdentity, ClockSource, IdentifierSource};
use crate::store::RecordStore;
use crate::types::{Assessment, AssessmentPatch, NewAssessment, UsageReading};

/// Service for managing assessment records
pub struct AssessmentService<S: RecordStore> {
    store: Arc<S>,
    ids: Box<dyn IdentifierSource>,
    clock: Box<dyn ClockSource>,
    caller: Box<dyn CallerIdentity>,
}

impl<S: RecordStore> AssessmentService<S> {
    pub fn new(
        store: Arc<S>,
        ids: Box<dyn IdentifierSource>,
        clock: Box<dyn ClockSource>,
        caller: Box<dyn CallerIdentity>,
    ) -> Self {
        Self {
            store,
            ids,
            clock,
            caller,
        }
    }

    /// Create a new assessment owned by the current caller
    pub fn create_assessment(
        &self,
        payload: NewAssessment,
    ) -> Result<Assessment, AssessmentError> {
        validate_address(&payload.address)?;
        validate_positive("efficiency_rating", payload.efficiency_rating)?;
        validate_positive("cost_savings", payload.cost_savings)?;

        let now = self.clock.now();
        let assessment = Assessment {
            id: self.ids.fresh_id(),
            owner: self.caller.current(),
            address: payload.address,
            assessment_date: now,
            efficiency_rating: payload.efficiency_rating,
            recommendations: payload.recommendations.unwrap_or_default(),
            cost_savings: payload.cost_savings,
            created_at: now,
            updated_at: None,
            usage_history: Vec::new(),
        };

        self.store.put(&assessment)?;
        debug!(id = %assessment.id, owner = %assessment.owner, "Created assessment");
        Ok(assessment)
    }

    /// Get a specific assessment
    pub fn get_assessment(&self, id: &str) -> Result<Assessment, AssessmentError> {
        self.fetch_required(id)
    }

    /// List all assessments in ascending id order
    pub fn list_assessments(&self) -> Result<Vec<Assessment>, AssessmentError> {
        Ok(self.store.values()?)
    }

    /// Merge patch fields into an existing assessment.
    ///
    /// `id`, `owner`, `created_at`, and the usage history are preserved
    /// verbatim; `updated_at` is stamped with the current logical time.
    /// Present patch fields are validated with the same rules as creation.
    pub fn update_assessment(
        &self,
        id: &str,
        patch: AssessmentPatch,
    ) -> Result<Assessment, AssessmentError> {
        let mut assessment = self.fetch_required(id)?;

        if let Some(ref address) = patch.address {
            validate_address(address)?;
        }
        if let Some(rating) = patch.efficiency_rating {
            validate_positive("efficiency_rating", rating)?;
        }
        if let Some(savings) = patch.cost_savings {
            validate_positive("cost_savings", savings)?;
        }

        if let Some(address) = patch.address {
            assessment.address = address;
        }
        if let Some(rating) = patch.efficiency_rating {
            assessment.efficiency_rating = rating;
        }
        if let Some(recommendations) = patch.recommendations {
            assessment.recommendations = recommendations;
        }
        if let Some(savings) = patch.cost_savings {
            assessment.cost_savings = savings;
        }
        assessment.updated_at = Some(self.clock.now());

        self.store.put(&assessment)?;
        debug!(id = %assessment.id, "Updated assessment");
        Ok(assessment)
    }

    /// Delete an assessment, returning the removed record
    pub fn delete_assessment(&self, id: &str) -> Result<Assessment, AssessmentError> {
        validate_id(id)?;
        let removed = self
            .store
            .delete(id)?
            .ok_or_else(|| AssessmentError::NotFound(id.to_string()))?;
        debug!(id = %id, "Deleted assessment");
        Ok(removed)
    }

    /// Append a usage reading to an assessment's history.
    ///
    /// Readings are kept in call order; timestamp and consumption magnitude
    /// are not validated. The history only ever grows.
    pub fn append_usage(
        &self,
        id: &str,
        timestamp: i64,
        consumption: f64,
    ) -> Result<Assessment, AssessmentError> {
        let mut assessment = self.fetch_required(id)?;
        assessment.usage_history.push(UsageReading {
            timestamp,
            consumption,
        });

        self.store.put(&assessment)?;
        debug!(id = %id, timestamp, consumption, "Appended usage reading");
        Ok(assessment)
    }

    /// Get an assessment's usage readings in append order
    pub fn usage_history(&self, id: &str) -> Result<Vec<UsageReading>, AssessmentError> {
        Ok(self.fetch_required(id)?.usage_history)
    }

    /// Sum of consumption over an assessment's history, 0 when empty
    pub fn total_consumption(&self, id: &str) -> Result<f64, AssessmentError> {
        let assessment = self.fetch_required(id)?;
        Ok(assessment
            .usage_history
            .iter()
            .map(|reading| reading.consumption)
            .sum())
    }

    /// All assessments with an efficiency rating at or above the threshold.
    ///
    /// Linear scan over the full record set; no index is maintained.
    pub fn high_efficiency(&self, threshold: f64) -> Result<Vec<Assessment>, AssessmentError> {
        validate_positive("threshold", threshold)?;
        let all = self.store.values()?;
        Ok(all
            .into_iter()
            .filter(|a| a.efficiency_rating >= threshold)
            .collect())
    }

    fn fetch_required(&self, id: &str) -> Result<Assessment, AssessmentError> {
        validate_id(id)?;
        self.store
            .get(id)?
            .ok_or_else(|| AssessmentError::NotFound(id.to_string()))
    }
}

fn validate_id(id: &str) -> Result<(), AssessmentError> {
    if id.is_empty() {
        return Err(AssessmentError::Validation {
            field: "id",
            reason: "must not be empty",
        });
    }
    Ok(())
}

fn validate_address(address: &str) -> Result<(), AssessmentError> {
    if address.is_empty() {
        return Err(AssessmentError::Validation {
            field: "address",
            reason: "must not be empty",
        });
    }
    Ok(())
}

fn validate_positive(field: &'static str, value: f64) -> Result<(), AssessmentError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AssessmentError::Validation {
            field,
            reason: "must be a positive number",
        });
    }
    Ok(())
}
