//! Quick edit: the same three questionnaire sections in a single
//! non-stepped form, reachable from the profile page after first-run
//! onboarding. Shares the wizard's normalization and submission
//! contract; the missing-answers report is always empty on this path
//! (preserved source behavior).

use crate::api::{ApiError, LabApi};
use crate::models::OnboardingDocument;
use crate::session::SessionStore;

use super::{build_document, BasicInfoForm, LifestyleForm, MedicalHistoryForm};

/// Single-form working copy of the questionnaire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuickEditForm {
    pub basic: BasicInfoForm,
    pub medical: MedicalHistoryForm,
    pub lifestyle: LifestyleForm,
}

impl QuickEditForm {
    /// Pre-populate from the profile's stored document.
    pub fn from_document(document: &OnboardingDocument) -> Self {
        Self {
            basic: BasicInfoForm::from_saved(&document.profile),
            medical: MedicalHistoryForm::from_saved(&document.medical_background),
            lifestyle: LifestyleForm::from_saved(&document.lifestyle),
        }
    }

    /// Normalize and save in one step. Same full-replace write as the
    /// wizard; failure leaves the form untouched for a retry.
    pub fn submit(
        &self,
        api: &dyn LabApi,
        session: &SessionStore,
    ) -> Result<OnboardingDocument, ApiError> {
        let document = build_document(&self.basic, &self.medical, &self.lifestyle, Vec::new());
        let saved = api.save_onboarding(&document).map_err(|e| {
            tracing::warn!("Quick edit save failed: {e}");
            e
        })?;

        session.update_profile(|previous| {
            previous.map(|mut profile| {
                profile.is_onboarding_complete = true;
                profile.onboarding = Some(saved.clone());
                profile
            })
        });
        tracing::debug!("Onboarding document updated via quick edit");
        Ok(saved)
    }
}
