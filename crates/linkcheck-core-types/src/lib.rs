//! Types shared by every linkcheck layer
//!
//! - **Correlation**: `RequestId`, `RequestContext`
//! - **Redaction**: `Sensitive<T>` for passwords and other secrets
//! - **Schema**: canonical structured-logging field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::{RequestContext, RequestId};
pub use sensitive::Sensitive;
