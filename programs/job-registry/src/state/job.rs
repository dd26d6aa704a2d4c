use anchor_lang::prelude::*;

use crate::constants::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use crate::error::RegistryError;
use crate::types::JobView;

#[account]
#[derive(InitSpace)]
pub struct Job {
    pub registry: Pubkey,
    pub id: u64,
    #[max_len(64)]
    pub title: String,
    #[max_len(512)]
    pub description: String,
    pub salary: u64,
    /// Signer that registered the job; always the registry admin.
    pub poster: Pubkey,
    pub is_open: bool,
    pub bump: u8,
}

impl Job {
    pub fn validate_posting(title: &str, description: &str) -> Result<()> {
        require!(title.len() <= MAX_TITLE_LEN, RegistryError::TitleTooLong);
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            RegistryError::DescriptionTooLong
        );
        Ok(())
    }

    pub fn view(&self) -> JobView {
        JobView {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            salary: self.salary,
            poster: self.poster,
            is_open: self.is_open,
        }
    }
}
