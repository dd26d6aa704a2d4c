use anchor_lang::prelude::*;

use crate::constants::{APPLICANT_SEED, REGISTRY_SEED};
use crate::state::{Applicant, Classification, Registry};

#[derive(Accounts)]
pub struct RegisterApplicant<'info> {
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
        seeds = [APPLICANT_SEED, registry.key().as_ref(), &registry.next_applicant_id().to_le_bytes()],
        bump,
        space = 8 + Applicant::INIT_SPACE,
    )]
    pub applicant: Account<'info, Applicant>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ApplicantRegistered {
    pub registry: Pubkey,
    pub applicant: Pubkey,
    pub applicant_id: u64,
    pub classification: Classification,
}

pub fn handler(
    ctx: Context<RegisterApplicant>,
    name: String,
    labor_history: String,
    skills: String,
    classification: Classification,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    // ---------- Auth ----------
    registry.authorize(&ctx.accounts.admin.key())?;

    // ---------- Validation ----------
    Applicant::validate_profile(&name, &labor_history, &skills)?;

    // ---------- Write ----------
    let applicant_id = registry.record_applicant()?;
    ctx.accounts.applicant.set_inner(Applicant {
        registry: registry.key(),
        id: applicant_id,
        name,
        labor_history,
        skills,
        is_available: true,
        rating: 0,
        classification,
        bump: ctx.bumps.applicant,
    });

    // ---------- Signal ----------
    emit!(ApplicantRegistered {
        registry: registry.key(),
        applicant: ctx.accounts.applicant.key(),
        applicant_id,
        classification,
    });
    msg!("Applicant registered: {} ({})", applicant_id, classification.label());

    Ok(())
}
