use anchor_lang::prelude::*;

use crate::constants::{APPLICANT_SEED, REGISTRY_SEED};
use crate::state::{store, Registry};

#[derive(Accounts)]
#[instruction(applicant_id: u64)]
pub struct Rate<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED, registry.admin.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: PDA checked by seeds; deserialized after the id is bounds-checked
    #[account(
        mut,
        seeds = [APPLICANT_SEED, registry.key().as_ref(), &applicant_id.to_le_bytes()],
        bump,
    )]
    pub applicant: UncheckedAccount<'info>,
}

#[event]
pub struct ApplicantRated {
    pub registry: Pubkey,
    pub applicant_id: u64,
    pub rating: u8,
}

pub fn handler(ctx: Context<Rate>, applicant_id: u64, rating: u8) -> Result<()> {
    let registry = &ctx.accounts.registry;

    // ---------- Auth ----------
    registry.authorize(&ctx.accounts.admin.key())?;

    // ---------- Write ----------
    let mut applicant = registry.load_applicant(&ctx.accounts.applicant, applicant_id)?;
    applicant.rate(rating)?;
    store(&applicant, &ctx.accounts.applicant)?;

    // ---------- Signal ----------
    emit!(ApplicantRated {
        registry: registry.key(),
        applicant_id,
        rating,
    });
    msg!("Applicant {} rated {}", applicant_id, rating);

    Ok(())
}
