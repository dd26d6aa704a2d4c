use anchor_lang::prelude::*;

#[constant]
pub const REGISTRY_SEED: &[u8] = b"registry";
#[constant]
pub const APPLICANT_SEED: &[u8] = b"applicant";
#[constant]
pub const JOB_SEED: &[u8] = b"job";
#[constant]
pub const APPLICATION_SEED: &[u8] = b"application";

// Byte limits for text stored on-chain. Views of these records have to fit
// the 1024 byte return-data buffer.
pub const MAX_NAME_LEN: usize = 64;
pub const MAX_LABOR_HISTORY_LEN: usize = 256;
pub const MAX_SKILLS_LEN: usize = 256;
pub const MAX_TITLE_LEN: usize = 64;
pub const MAX_DESCRIPTION_LEN: usize = 512;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
