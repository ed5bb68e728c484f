//! Operations that span several collections.
//!
//! Actors only call the collections they depend on, so anything that has to
//! fan out "downwards" (a job release reaching its lots) or combine the route
//! catalog with a router is orchestrated here, through the clients.

pub mod destination_codes;
pub mod error;
pub mod release;
pub mod routing;

pub use destination_codes::{backfill_destination_codes, MigrationReport};
pub use error::WorkflowError;
pub use release::{release_job, ReleaseSummary};
pub use routing::{build_router, import_template_into_job, import_template_into_lot, insert_job_step};
