#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod types;

pub use instructions::*;
use state::Classification;
use types::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod job_registry {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.init(&ctx.bumps)
    }

    pub fn register_applicant(
        ctx: Context<RegisterApplicant>,
        name: String,
        labor_history: String,
        skills: String,
        classification: Classification,
    ) -> Result<()> {
        instructions::register_applicant::handler(ctx, name, labor_history, skills, classification)
    }

    pub fn register_job(
        ctx: Context<RegisterJob>,
        title: String,
        description: String,
        salary: u64,
    ) -> Result<()> {
        instructions::register_job::handler(ctx, title, description, salary)
    }

    pub fn apply(ctx: Context<Apply>, applicant_id: u64, job_id: u64) -> Result<()> {
        instructions::apply::handler(ctx, applicant_id, job_id)
    }

    pub fn rate(ctx: Context<Rate>, applicant_id: u64, rating: u8) -> Result<()> {
        instructions::rate::handler(ctx, applicant_id, rating)
    }

    // ---------- Views ----------
    pub fn get_applicant(ctx: Context<ReadApplicant>, applicant_id: u64) -> Result<ApplicantView> {
        instructions::queries::get_applicant_handler(ctx, applicant_id)
    }

    pub fn get_applicant_classification(
        ctx: Context<ReadApplicant>,
        applicant_id: u64,
    ) -> Result<ClassificationView> {
        instructions::queries::get_applicant_classification_handler(ctx, applicant_id)
    }

    pub fn get_job(ctx: Context<ReadJob>, job_id: u64) -> Result<JobView> {
        instructions::queries::get_job_handler(ctx, job_id)
    }

    pub fn get_rating(ctx: Context<ReadApplicant>, applicant_id: u64) -> Result<u8> {
        instructions::queries::get_rating_handler(ctx, applicant_id)
    }

    pub fn has_applied(ctx: Context<ReadApplication>, job_id: u64, applicant_id: u64) -> Result<bool> {
        instructions::queries::has_applied_handler(ctx, job_id, applicant_id)
    }
}
