//! Request handlers

pub mod health;
pub mod applicants;
pub mod workers;
pub mod applications;
pub mod grants;
