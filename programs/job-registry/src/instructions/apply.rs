use anchor_lang::prelude::*;

use crate::constants::{APPLICANT_SEED, APPLICATION_SEED, JOB_SEED, REGISTRY_SEED};
use crate::state::{Application, Registry};

#[derive(Accounts)]
#[instruction(applicant_id: u64, job_id: u64)]
pub struct Apply<'info> {
    /// Any signer may apply on behalf of an applicant; pays for the marker
    #[account(mut)]
    pub caller: Signer<'info>,

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

    /// CHECK: PDA checked by seeds; deserialized after the id is bounds-checked
    #[account(
        seeds = [JOB_SEED, registry.key().as_ref(), &job_id.to_le_bytes()],
        bump,
    )]
    pub job: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = caller,
        seeds = [
            APPLICATION_SEED,
            registry.key().as_ref(),
            &job_id.to_le_bytes(),
            &applicant_id.to_le_bytes(),
        ],
        bump,
        space = 8 + Application::INIT_SPACE,
    )]
    pub application: Account<'info, Application>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ApplicationSubmitted {
    pub registry: Pubkey,
    pub application: Pubkey,
    pub job_id: u64,
    pub applicant_id: u64,
    pub caller: Pubkey,
}

pub fn handler(ctx: Context<Apply>, applicant_id: u64, job_id: u64) -> Result<()> {
    let registry = &ctx.accounts.registry;

    // ---------- Lookup ----------
    let applicant = registry.load_applicant(&ctx.accounts.applicant, applicant_id)?;
    let job = registry.load_job(&ctx.accounts.job, job_id)?;

    // ---------- Eligibility ----------
    Application::check_eligibility(&applicant, &job)?;

    // ---------- Write ----------
    let application = &mut ctx.accounts.application;
    let first = application.record(registry.key(), job_id, applicant_id, ctx.bumps.application);

    // ---------- Signal ----------
    if first {
        emit!(ApplicationSubmitted {
            registry: registry.key(),
            application: application.key(),
            job_id,
            applicant_id,
            caller: ctx.accounts.caller.key(),
        });
        msg!("Applicant {} applied to job {}", applicant_id, job_id);
    } else {
        msg!("Applicant {} already applied to job {}", applicant_id, job_id);
    }

    Ok(())
}
