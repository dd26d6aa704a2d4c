use anchor_lang::prelude::*;

use crate::constants::{APPLICANT_SEED, APPLICATION_SEED, JOB_SEED, REGISTRY_SEED};
use crate::state::{load, Application, Registry};
use crate::types::{ApplicantView, ClassificationView, JobView};

// Read-only instructions. Results go out through return data, so callers
// usually simulate these rather than send them.

#[derive(Accounts)]
#[instruction(applicant_id: u64)]
pub struct ReadApplicant<'info> {
    #[account(
        seeds = [REGISTRY_SEED, registry.admin.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: PDA checked by seeds; deserialized after the id is bounds-checked
    #[account(
        seeds = [APPLICANT_SEED, registry.key().as_ref(), &applicant_id.to_le_bytes()],
        bump,
    )]
    pub applicant: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(job_id: u64)]
pub struct ReadJob<'info> {
    #[account(
        seeds = [REGISTRY_SEED, registry.admin.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: PDA checked by seeds; deserialized after the id is bounds-checked
    #[account(
        seeds = [JOB_SEED, registry.key().as_ref(), &job_id.to_le_bytes()],
        bump,
    )]
    pub job: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(job_id: u64, applicant_id: u64)]
pub struct ReadApplication<'info> {
    #[account(
        seeds = [REGISTRY_SEED, registry.admin.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: PDA checked by seeds; may not exist yet
    #[account(
        seeds = [
            APPLICATION_SEED,
            registry.key().as_ref(),
            &job_id.to_le_bytes(),
            &applicant_id.to_le_bytes(),
        ],
        bump,
    )]
    pub application: UncheckedAccount<'info>,
}

pub fn get_applicant_handler(ctx: Context<ReadApplicant>, applicant_id: u64) -> Result<ApplicantView> {
    let applicant = ctx
        .accounts
        .registry
        .load_applicant(&ctx.accounts.applicant, applicant_id)?;
    Ok(applicant.view())
}

pub fn get_applicant_classification_handler(
    ctx: Context<ReadApplicant>,
    applicant_id: u64,
) -> Result<ClassificationView> {
    let applicant = ctx
        .accounts
        .registry
        .load_applicant(&ctx.accounts.applicant, applicant_id)?;
    Ok(applicant.classification_view())
}

pub fn get_rating_handler(ctx: Context<ReadApplicant>, applicant_id: u64) -> Result<u8> {
    let applicant = ctx
        .accounts
        .registry
        .load_applicant(&ctx.accounts.applicant, applicant_id)?;
    Ok(applicant.rating)
}

pub fn get_job_handler(ctx: Context<ReadJob>, job_id: u64) -> Result<JobView> {
    let job = ctx.accounts.registry.load_job(&ctx.accounts.job, job_id)?;
    Ok(job.view())
}

pub fn has_applied_handler(ctx: Context<ReadApplication>, job_id: u64, applicant_id: u64) -> Result<bool> {
    let registry = &ctx.accounts.registry;
    registry.ensure_job(job_id)?;
    registry.ensure_applicant(applicant_id)?;

    let info = &ctx.accounts.application;
    if info.data_is_empty() {
        return Ok(false);
    }
    let application: Application = load(info)?;
    Ok(application.applied)
}
