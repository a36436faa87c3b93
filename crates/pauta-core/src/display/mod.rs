//! Display formatting functions and result types.
//!
//! Domain models carry direct `Display` implementations producing markdown
//! for rich terminal rendering; collections and operation outcomes get
//! newtype wrappers so each output context (a week view, a post list, a
//! backup listing) formats consistently without presentation logic leaking
//! into the models themselves.
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models
//! - [`collections`]: Collection wrapper types (Posts, Backups, Batches)
//! - [`results`]: Operation result types (CreateResult, UpdateResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Backups, Batches, Posts};
pub use datetime::LocalDateTime;
pub use models::CompactAgenda;
pub use results::{CreateResult, ExportResult, UpdateResult};
pub use status::OperationStatus;
