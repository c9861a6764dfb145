//! # Module Registry - HTTP service for module records
//!
//! Creates and fetches module records over a small JSON API. Every response,
//! success or failure, uses the same envelope with a request id and timestamp.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Module entity and identifier value object
//! - **Application**: Use cases, business rules and the repository port
//! - **Infrastructure**: In-memory and PostgreSQL repositories
//! - **API**: Handlers, envelope, request id and recovery middleware
//!
//! ## Example Usage
//!
//! ```no_run
//! use module_registry::{api::create_router, ApplicationBuilder, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let state = ApplicationBuilder::new(Config::default())
//!     .with_in_memory()
//!     .build()?;
//! let app = create_router(state);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::builder::ApplicationBuilder;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
