pub mod enums;
pub mod onboarding;
pub mod patient;

pub use enums::{ActivityLevel, Sex};
pub use onboarding::{BasicProfile, Lifestyle, MedicalBackground, OnboardingDocument};
pub use patient::{PatientProfile, UserInfo};

/// Errors from model parsing.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid value '{value}' for {field}")]
    InvalidEnum { field: String, value: String },
}
