use anchor_lang::prelude::*;

use crate::constants::{JOB_SEED, REGISTRY_SEED};
use crate::state::{Job, Registry};

#[derive(Accounts)]
pub struct RegisterJob<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.admin.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        init,
        payer = admin,
        seeds = [JOB_SEED, registry.key().as_ref(), &registry.next_job_id().to_le_bytes()],
        bump,
        space = 8 + Job::INIT_SPACE,
    )]
    pub job: Account<'info, Job>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct JobRegistered {
    pub registry: Pubkey,
    pub job: Pubkey,
    pub job_id: u64,
    pub poster: Pubkey,
    pub salary: u64,
}

pub fn handler(
    ctx: Context<RegisterJob>,
    title: String,
    description: String,
    salary: u64,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    let poster = ctx.accounts.admin.key();

    // ---------- Auth ----------
    registry.authorize(&poster)?;

    // ---------- Validation ----------
    Job::validate_posting(&title, &description)?;

    // ---------- Write ----------
    let job_id = registry.record_job()?;
    ctx.accounts.job.set_inner(Job {
        registry: registry.key(),
        id: job_id,
        title,
        description,
        salary,
        poster,
        is_open: true,
        bump: ctx.bumps.job,
    });

    // ---------- Signal ----------
    emit!(JobRegistered {
        registry: registry.key(),
        job: ctx.accounts.job.key(),
        job_id,
        poster,
        salary,
    });
    msg!("Job registered: {} by poster: {}", job_id, poster);

    Ok(())
}
