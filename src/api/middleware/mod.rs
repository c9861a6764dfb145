pub mod error_handling;
pub mod request_id;
pub mod validation;

pub use error_handling::{create_recovery_middleware, DeferredError, RecoveryLayer};
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use validation::{validate_and_respond, ValidatedJson};
