//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Sweeper: Purges expired cache entries at a fixed interval

mod sweeper;

pub use sweeper::Sweeper;
