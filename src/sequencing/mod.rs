//! Pure ordering rules shared by the router-bearing collections.
//!
//! - [`step_code`]: router step insertion and permanent step codes
//! - [`revision`]: lot revision letters
//! - [`destination`]: destination codes for packing-slip lines

pub mod destination;
pub mod revision;
pub mod step_code;

pub use destination::{infer_destination_code, DestinationCode};
pub use revision::{next_revision, RevisionError};
pub use step_code::{code_between, freeze, insert_step, remove_step, SequenceError};
