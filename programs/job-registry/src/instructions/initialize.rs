use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::state::Registry;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Registry owner; fixed for the lifetime of the registry
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        seeds = [REGISTRY_SEED, admin.key().as_ref()],
        bump,
        space = 8 + Registry::INIT_SPACE,
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn init(&mut self, bumps: &InitializeBumps) -> Result<()> {
        self.registry.set_inner(Registry {
            admin: self.admin.key(),
            applicant_count: 0,
            job_count: 0,
            bump: bumps.registry,
        });

        msg!("Registry initialized for admin: {}", self.admin.key());
        Ok(())
    }
}
