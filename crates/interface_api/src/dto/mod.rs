//! Request and response bodies

pub mod applicants;
pub mod workers;
pub mod applications;
pub mod grants;
