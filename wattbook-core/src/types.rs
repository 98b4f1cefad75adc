//! Core assessment record types

use serde::{Deserialize, Serialize};

/// One timestamped consumption data point embedded in an assessment.
///
/// Readings are immutable once appended and are kept in append order,
/// not sorted by timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageReading {
    /// Logical timestamp supplied by the caller
    pub timestamp: i64,
    /// Consumption recorded for this reading
    pub consumption: f64,
}

/// One energy efficiency evaluation for a property.
///
/// The record is the unit of storage: every read yields a full snapshot and
/// every write replaces the whole value under its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Opaque unique id, assigned at creation
    pub id: String,
    /// Identity of the creator, never mutated after creation
    pub owner: String,
    /// Property address
    pub address: String,
    /// When the assessment was performed (equals created_at)
    pub assessment_date: i64,
    /// Efficiency rating, always > 0
    pub efficiency_rating: f64,
    /// Free-form recommendations text
    pub recommendations: String,
    /// Projected cost savings, always > 0
    pub cost_savings: f64,
    /// Creation timestamp, never mutated
    pub created_at: i64,
    /// Stamped on every field update, absent until the first one
    pub updated_at: Option<i64>,
    /// Usage readings in append order; only ever grows
    pub usage_history: Vec<UsageReading>,
}

/// Payload for creating an assessment.
///
/// `owner`, timestamps, and the id are never caller-supplied; the service
/// fills them in from its injected sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAssessment {
    pub address: String,
    pub efficiency_rating: f64,
    /// Defaults to the empty string when omitted
    pub recommendations: Option<String>,
    pub cost_savings: f64,
}

/// Field patch for updating an assessment.
///
/// Absent fields keep their stored value; `id`, `owner`, `created_at`, and
/// the usage history cannot be patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentPatch {
    pub address: Option<String>,
    pub efficiency_rating: Option<f64>,
    pub recommendations: Option<String>,
    pub cost_savings: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Assessment {
        Assessment {
            id: "a-1".into(),
            owner: "inspector-7".into(),
            address: "1 Main St".into(),
            assessment_date: 1000,
            efficiency_rating: 7.5,
            recommendations: "seal windows".into(),
            cost_savings: 220.0,
            created_at: 1000,
            updated_at: None,
            usage_history: vec![UsageReading {
                timestamp: 100,
                consumption: 30.0,
            }],
        }
    }

    #[test]
    fn test_assessment_serde_roundtrip() {
        let assessment = sample();
        let json = serde_json::to_string(&assessment).unwrap();
        let parsed: Assessment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, assessment);
    }

    #[test]
    fn test_updated_at_absent_serializes_as_null() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json["updated_at"].is_null());
        assert_eq!(json["usage_history"][0]["consumption"], 30.0);
    }

    #[test]
    fn test_patch_default_is_empty() {
        let patch = AssessmentPatch::default();
        assert!(patch.address.is_none());
        assert!(patch.efficiency_rating.is_none());
        assert!(patch.recommendations.is_none());
        assert!(patch.cost_savings.is_none());
    }
}
