//! Onboarding questionnaire document as stored by the service.
//!
//! The document is a full-replace unit: saves always send all three
//! sections plus the missing-answers report, never a partial patch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{ActivityLevel, Sex};

/// Basic physical profile. Numeric fields are a valid number or
/// explicitly absent — never an unparsed string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicProfile {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

/// Medical history. Lists come from comma-separated free text:
/// order preserved, duplicates allowed, empties dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalBackground {
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
}

/// Lifestyle section. All fields optional by design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lifestyle {
    #[serde(default)]
    pub sports: Vec<String>,
    #[serde(default)]
    pub diet_preferences: Vec<String>,
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    /// 1 (low) to 5 (high).
    #[serde(default)]
    pub stress_level: Option<u8>,
}

/// The complete questionnaire result, saved atomically as one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingDocument {
    pub profile: BasicProfile,
    pub medical_background: MedicalBackground,
    pub lifestyle: Lifestyle,
    /// Identifiers of BasicProfile fields left unanswered at submission.
    /// Computed, never user-edited; accompanies a save without blocking it.
    #[serde(default)]
    pub missing_answers: Vec<String>,
    /// Server-assigned, read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
