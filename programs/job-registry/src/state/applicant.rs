use anchor_lang::prelude::*;

use crate::constants::{
    MAX_LABOR_HISTORY_LEN, MAX_NAME_LEN, MAX_RATING, MAX_SKILLS_LEN, MIN_RATING,
};
use crate::error::RegistryError;
use crate::types::{ApplicantView, ClassificationView};

/// Education level of an applicant.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    UnderGraduate,
    Graduate,
    PostGraduate,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::UnderGraduate => "underGraduate",
            Classification::Graduate => "Graduate",
            Classification::PostGraduate => "postGraduate",
        }
    }
}

#[account]
#[derive(InitSpace)]
pub struct Applicant {
    pub registry: Pubkey,
    pub id: u64,
    #[max_len(64)]
    pub name: String,
    #[max_len(256)]
    pub labor_history: String,
    #[max_len(256)]
    pub skills: String,
    pub is_available: bool,
    /// 0 until the admin rates the applicant.
    pub rating: u8,
    pub classification: Classification,
    pub bump: u8,
}

impl Applicant {
    pub fn validate_profile(name: &str, labor_history: &str, skills: &str) -> Result<()> {
        require!(name.len() <= MAX_NAME_LEN, RegistryError::NameTooLong);
        require!(
            labor_history.len() <= MAX_LABOR_HISTORY_LEN,
            RegistryError::LaborHistoryTooLong
        );
        require!(skills.len() <= MAX_SKILLS_LEN, RegistryError::SkillsTooLong);
        Ok(())
    }

    pub fn rate(&mut self, rating: u8) -> Result<()> {
        require!(
            (MIN_RATING..=MAX_RATING).contains(&rating),
            RegistryError::InvalidRating
        );
        require!(self.is_available, RegistryError::ApplicantUnavailable);
        self.rating = rating;
        Ok(())
    }

    pub fn is_rated(&self) -> bool {
        self.rating != 0
    }

    pub fn view(&self) -> ApplicantView {
        ApplicantView {
            id: self.id,
            name: self.name.clone(),
            labor_history: self.labor_history.clone(),
            skills: self.skills.clone(),
            is_available: self.is_available,
            rating: self.rating,
        }
    }

    pub fn classification_view(&self) -> ClassificationView {
        ClassificationView {
            classification: self.classification,
            label: self.classification.label().to_string(),
        }
    }
}
