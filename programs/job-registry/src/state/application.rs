use anchor_lang::prelude::*;

use crate::error::RegistryError;
use crate::state::{Applicant, Job};

/// Marks that an applicant applied to a job. The account existing with
/// `applied` set is the whole record; there is no count or history.
#[account]
#[derive(InitSpace)]
pub struct Application {
    pub registry: Pubkey,
    pub job_id: u64,
    pub applicant_id: u64,
    pub applied: bool,
    pub bump: u8,
}

impl Application {
    /// Eligibility is only checked at write time.
    pub fn check_eligibility(applicant: &Applicant, job: &Job) -> Result<()> {
        require!(applicant.is_available, RegistryError::ApplicantUnavailable);
        require!(job.is_open, RegistryError::JobClosed);
        Ok(())
    }

    /// Returns true when the pair was not recorded before.
    pub fn record(&mut self, registry: Pubkey, job_id: u64, applicant_id: u64, bump: u8) -> bool {
        let first = !self.applied;
        self.registry = registry;
        self.job_id = job_id;
        self.applicant_id = applicant_id;
        self.applied = true;
        self.bump = bump;
        first
    }
}
