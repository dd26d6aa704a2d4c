use anchor_lang::prelude::*;

use crate::error::RegistryError;
use crate::state::{load, Applicant, Job};

/// Root account of a registry. The counters double as the sizes of the
/// applicant and job collections: ids `1..=count` are live.
#[account]
#[derive(InitSpace)]
pub struct Registry {
    pub admin: Pubkey,
    pub applicant_count: u64,
    pub job_count: u64,
    pub bump: u8,
}

impl Registry {
    pub fn authorize(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, RegistryError::Unauthorized);
        Ok(())
    }

    /// Id the next registered applicant will receive. Used in PDA seeds, so it
    /// must not panic; [`Registry::record_applicant`] rejects the overflow.
    pub fn next_applicant_id(&self) -> u64 {
        self.applicant_count.saturating_add(1)
    }

    pub fn next_job_id(&self) -> u64 {
        self.job_count.saturating_add(1)
    }

    pub fn record_applicant(&mut self) -> Result<u64> {
        let id = self
            .applicant_count
            .checked_add(1)
            .ok_or(RegistryError::IdOverflow)?;
        self.applicant_count = id;
        Ok(id)
    }

    pub fn record_job(&mut self) -> Result<u64> {
        let id = self
            .job_count
            .checked_add(1)
            .ok_or(RegistryError::IdOverflow)?;
        self.job_count = id;
        Ok(id)
    }

    pub fn ensure_applicant(&self, applicant_id: u64) -> Result<()> {
        require!(
            applicant_id >= 1 && applicant_id <= self.applicant_count,
            RegistryError::ApplicantNotFound
        );
        Ok(())
    }

    pub fn ensure_job(&self, job_id: u64) -> Result<()> {
        require!(
            job_id >= 1 && job_id <= self.job_count,
            RegistryError::JobNotFound
        );
        Ok(())
    }

    /// Bounds-checks `applicant_id` before touching the account, so ids past
    /// the end report `ApplicantNotFound` rather than an uninitialized account.
    pub fn load_applicant(&self, info: &AccountInfo, applicant_id: u64) -> Result<Applicant> {
        self.ensure_applicant(applicant_id)?;
        load(info)
    }

    pub fn load_job(&self, info: &AccountInfo, job_id: u64) -> Result<Job> {
        self.ensure_job(job_id)?;
        load(info)
    }
}
