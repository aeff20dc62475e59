//! First-run onboarding wizard: a bounded linear state machine.
//!
//! Welcome → BasicInfo → MedicalHistory → Lifestyle → Review; no
//! branching, no skipping, saturating navigation at both ends. The
//! state owns the section answers exclusively for the duration of the
//! flow and hands its result to the session store only on a successful
//! submit — there are no partial profile writes mid-flow.

use crate::api::{ApiError, LabApi, OnboardingSnapshot};
use crate::models::OnboardingDocument;
use crate::session::SessionStore;

use super::{build_document, forms_from_snapshot, scan_missing};
use super::{BasicInfoForm, LifestyleForm, MedicalHistoryForm};

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Welcome,
    BasicInfo,
    MedicalHistory,
    Lifestyle,
    Review,
}

impl WizardStep {
    pub const COUNT: usize = 5;

    const ORDER: [Self; Self::COUNT] = [
        Self::Welcome,
        Self::BasicInfo,
        Self::MedicalHistory,
        Self::Lifestyle,
        Self::Review,
    ];

    /// Zero-based position within the flow.
    pub fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|step| *step == self)
            .unwrap_or(0)
    }

    fn at(index: usize) -> Self {
        Self::ORDER[index.min(Self::COUNT - 1)]
    }
}

/// In-progress working copy of the questionnaire.
///
/// Created on entering the flow, destroyed on leaving it (committed or
/// abandoned). Seeded from the server's current document so partial
/// saves reappear instead of blank fields.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    step: WizardStep,
    pub basic: BasicInfoForm,
    pub medical: MedicalHistoryForm,
    pub lifestyle: LifestyleForm,
    /// Draft missing-answers report from the latest submit attempt.
    pub missing_answers: Vec<String>,
}

impl WizardState {
    /// Blank wizard at the welcome step.
    pub fn new() -> Self {
        Self {
            step: WizardStep::Welcome,
            basic: BasicInfoForm::default(),
            medical: MedicalHistoryForm::default(),
            lifestyle: LifestyleForm::default(),
            missing_answers: Vec::new(),
        }
    }

    /// Wizard seeded from the service's current onboarding state.
    pub fn from_snapshot(snapshot: &OnboardingSnapshot) -> Self {
        let (basic, medical, lifestyle) = forms_from_snapshot(snapshot);
        Self {
            step: WizardStep::Welcome,
            basic,
            medical,
            lifestyle,
            missing_answers: Vec::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn step_index(&self) -> usize {
        self.step.index()
    }

    pub fn is_review(&self) -> bool {
        self.step == WizardStep::Review
    }

    /// Advance one step; no-op at Review.
    pub fn next(&mut self) {
        self.step = WizardStep::at(self.step.index() + 1);
    }

    /// Go back one step; no-op at Welcome.
    pub fn back(&mut self) {
        self.step = WizardStep::at(self.step.index().saturating_sub(1));
    }

    /// Submit the questionnaire from the review step.
    ///
    /// Normalizes BasicInfo, computes the missing-answers report, splits
    /// the free-text lists, and saves the document as one unit. Success
    /// marks the cached profile complete and attaches the stored
    /// document — which flips the route guard for every navigation that
    /// follows. Failure keeps all entered answers and the current step
    /// so the user retries without re-entering anything.
    pub fn submit(
        &mut self,
        api: &dyn LabApi,
        session: &SessionStore,
    ) -> Result<OnboardingDocument, ApiError> {
        let missing = scan_missing(&self.basic.normalize());
        self.missing_answers = missing.clone();

        let document = build_document(&self.basic, &self.medical, &self.lifestyle, missing);
        let saved = api.save_onboarding(&document).map_err(|e| {
            tracing::warn!("Onboarding save failed: {e}");
            e
        })?;

        session.update_profile(|previous| {
            previous.map(|mut profile| {
                profile.is_onboarding_complete = true;
                profile.onboarding = Some(saved.clone());
                profile
            })
        });
        tracing::info!("Onboarding completed");
        Ok(saved)
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
