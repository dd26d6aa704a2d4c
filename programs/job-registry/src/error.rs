use anchor_lang::prelude::*;

/// Broad failure category a [`RegistryError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authorization,
    NotFound,
    Precondition,
}

#[error_code]
pub enum RegistryError {
    #[msg("Only the registry admin can perform this action")]
    Unauthorized,
    #[msg("Applicant does not exist")]
    ApplicantNotFound,
    #[msg("Job does not exist")]
    JobNotFound,
    #[msg("Applicant is not available")]
    ApplicantUnavailable,
    #[msg("Job is not open")]
    JobClosed,
    #[msg("Rating must be between 1 and 5")]
    InvalidRating,
    #[msg("Name exceeds 64 bytes")]
    NameTooLong,
    #[msg("Labor history exceeds 256 bytes")]
    LaborHistoryTooLong,
    #[msg("Skills exceed 256 bytes")]
    SkillsTooLong,
    #[msg("Job title exceeds 64 bytes")]
    TitleTooLong,
    #[msg("Job description exceeds 512 bytes")]
    DescriptionTooLong,
    #[msg("Record id space exhausted")]
    IdOverflow,
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::Unauthorized => ErrorKind::Authorization,
            RegistryError::ApplicantNotFound | RegistryError::JobNotFound => ErrorKind::NotFound,
            RegistryError::ApplicantUnavailable
            | RegistryError::JobClosed
            | RegistryError::InvalidRating
            | RegistryError::NameTooLong
            | RegistryError::LaborHistoryTooLong
            | RegistryError::SkillsTooLong
            | RegistryError::TitleTooLong
            | RegistryError::DescriptionTooLong
            | RegistryError::IdOverflow => ErrorKind::Precondition,
        }
    }
}
