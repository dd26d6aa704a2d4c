use anchor_lang::prelude::*;

use crate::state::Classification;

// Return values of the read-only instructions.

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ApplicantView {
    pub id: u64,
    pub name: String,
    pub labor_history: String,
    pub skills: String,
    pub is_available: bool,
    pub rating: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClassificationView {
    pub classification: Classification,
    pub label: String,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct JobView {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub salary: u64,
    pub poster: Pubkey,
    pub is_open: bool,
}
