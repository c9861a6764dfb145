//! Failure containment for the request pipeline
//!
//! - middleware.rs: tower layer catching handler panics
//! - deferred.rs: errors a handler attaches without writing a body

pub mod deferred;
pub mod middleware;

pub use deferred::DeferredError;
pub use middleware::{create_recovery_middleware, RecoveryLayer};
