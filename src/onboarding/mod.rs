//! Onboarding questionnaire flow.
//!
//! Two entry points share one normalize→submit contract: the first-run
//! wizard (`wizard::WizardState`, a linear five-step state machine) and
//! the quick edit used from the profile page (`quick_edit::QuickEditForm`,
//! same three sections in a single form). Section answers stay as
//! entered text until submission; `normalize` turns them into the typed
//! `OnboardingDocument` that is saved as one atomic full-replace write.

pub mod normalize;
pub mod quick_edit;
pub mod wizard;

pub use quick_edit::QuickEditForm;
pub use wizard::{WizardState, WizardStep};

use crate::api::OnboardingSnapshot;
use crate::models::{
    ActivityLevel, BasicProfile, Lifestyle, MedicalBackground, OnboardingDocument, Sex,
};
use normalize::{join_list, number_field, parse_f64, parse_u32, parse_u8, split_list};

// ═══════════════════════════════════════════════════════════
// Section forms
// ═══════════════════════════════════════════════════════════

/// Basic profile section as edited. Numeric answers are raw strings
/// until submission; enum answers are typed and always present.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicInfoForm {
    pub age: String,
    pub sex: Sex,
    pub height: String,
    pub weight: String,
    pub activity_level: ActivityLevel,
}

impl Default for BasicInfoForm {
    fn default() -> Self {
        Self {
            age: String::new(),
            sex: Sex::default(),
            height: String::new(),
            weight: String::new(),
            activity_level: ActivityLevel::default(),
        }
    }
}

impl BasicInfoForm {
    /// Pre-populate from a previously saved section.
    pub fn from_saved(saved: &BasicProfile) -> Self {
        Self {
            age: number_field(&saved.age),
            sex: saved.sex,
            height: number_field(&saved.height),
            weight: number_field(&saved.weight),
            activity_level: saved.activity_level,
        }
    }

    /// Coerce answers into the typed section.
    pub fn normalize(&self) -> BasicProfile {
        BasicProfile {
            age: parse_u32(&self.age),
            sex: self.sex,
            height: parse_f64(&self.height),
            weight: parse_f64(&self.weight),
            activity_level: self.activity_level,
        }
    }
}

/// Medical history section: comma-separated free text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicalHistoryForm {
    pub conditions: String,
    pub medications: String,
}

impl MedicalHistoryForm {
    pub fn from_saved(saved: &MedicalBackground) -> Self {
        Self {
            conditions: join_list(&saved.conditions),
            medications: join_list(&saved.medications),
        }
    }

    pub fn normalize(&self) -> MedicalBackground {
        MedicalBackground {
            conditions: split_list(&self.conditions),
            medications: split_list(&self.medications),
        }
    }
}

/// Lifestyle section.
#[derive(Debug, Clone, PartialEq)]
pub struct LifestyleForm {
    pub sports: String,
    pub diet_preferences: String,
    pub sleep_hours: String,
    pub stress_level: String,
}

impl Default for LifestyleForm {
    fn default() -> Self {
        Self {
            sports: String::new(),
            diet_preferences: String::new(),
            sleep_hours: String::new(),
            // Mid-scale starting point, same as the blank form.
            stress_level: "3".into(),
        }
    }
}

impl LifestyleForm {
    pub fn from_saved(saved: &Lifestyle) -> Self {
        Self {
            sports: join_list(&saved.sports),
            diet_preferences: join_list(&saved.diet_preferences),
            sleep_hours: number_field(&saved.sleep_hours),
            stress_level: saved
                .stress_level
                .map(|level| level.to_string())
                .unwrap_or_else(|| "3".into()),
        }
    }

    pub fn normalize(&self) -> Lifestyle {
        Lifestyle {
            sports: split_list(&self.sports),
            diet_preferences: split_list(&self.diet_preferences),
            sleep_hours: parse_f64(&self.sleep_hours),
            stress_level: parse_u8(&self.stress_level),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Shared aggregation
// ═══════════════════════════════════════════════════════════

/// Identifiers of unanswered BasicProfile fields.
///
/// The scan covers only this section by design — medical history and
/// lifestyle are optional. The enum answers always carry a value, so in
/// practice only the numeric fields can be reported missing.
pub fn scan_missing(profile: &BasicProfile) -> Vec<String> {
    let mut missing = Vec::new();
    if profile.age.is_none() {
        missing.push("age".to_string());
    }
    if profile.height.is_none() {
        missing.push("height".to_string());
    }
    if profile.weight.is_none() {
        missing.push("weight".to_string());
    }
    missing
}

/// Assemble the full document from normalized sections.
pub(crate) fn build_document(
    basic: &BasicInfoForm,
    medical: &MedicalHistoryForm,
    lifestyle: &LifestyleForm,
    missing_answers: Vec<String>,
) -> OnboardingDocument {
    OnboardingDocument {
        profile: basic.normalize(),
        medical_background: medical.normalize(),
        lifestyle: lifestyle.normalize(),
        missing_answers,
        updated_at: None,
    }
}

/// Seed all three section forms from the service's current state.
/// Partial saves are respected: present sections pre-populate, absent
/// ones start blank.
pub(crate) fn forms_from_snapshot(
    snapshot: &OnboardingSnapshot,
) -> (BasicInfoForm, MedicalHistoryForm, LifestyleForm) {
    let basic = snapshot
        .profile
        .as_ref()
        .map(BasicInfoForm::from_saved)
        .unwrap_or_default();
    let medical = snapshot
        .medical_background
        .as_ref()
        .map(MedicalHistoryForm::from_saved)
        .unwrap_or_default();
    let lifestyle = snapshot
        .lifestyle
        .as_ref()
        .map(LifestyleForm::from_saved)
        .unwrap_or_default();
    (basic, medical, lifestyle)
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
