pub mod registry;
pub mod applicant;
pub mod job;
pub mod application;

pub use registry::*;
pub use applicant::*;
pub use job::*;
pub use application::*;

use anchor_lang::prelude::*;

/// Reads a program-owned record from an account that was only seed-checked.
pub(crate) fn load<T: AccountDeserialize + Owner>(info: &AccountInfo) -> Result<T> {
    require_keys_eq!(
        *info.owner,
        T::owner(),
        anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
    );
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

/// Writes a record loaded with [`load`] back into its account.
pub(crate) fn store<T: AccountSerialize>(record: &T, info: &AccountInfo) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut dst: &mut [u8] = &mut data;
    record.try_serialize(&mut dst)
}
