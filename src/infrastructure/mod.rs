//! Infrastructure layer - Concrete audit, logging and model implementations

pub mod audit;
pub mod logging;
pub mod models;
