pub mod initialize;

pub use initialize::*;

pub mod register_applicant;

pub use register_applicant::*;

pub mod register_job;

pub use register_job::*;

pub mod apply;

pub use apply::*;

pub mod rate;

pub use rate::*;

pub mod queries;

pub use queries::*;
