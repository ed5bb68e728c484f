//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` fmt layer filtered by
//! `RUST_LOG` (via `EnvFilter`). Module paths are hidden; the actor loop
//! records an `entity_type` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run                                # lifecycle and writes
//! RUST_LOG=debug cargo run                               # payloads and reads
//! RUST_LOG=info SHOPFLOOR_LOG_FORMAT=json cargo run      # one JSON object per line
//! ```
//!
//! With `RUST_LOG=info` a lot insertion after release reads:
//!
//! ```text
//! INFO Action ok entity_type="Job" id=job_1
//! INFO release_job: Job released job=job_1 lots=1 lot_steps_coded=2
//! INFO Action ok entity_type="Lot" id=lot_1
//! ```

use crate::config::LogFormat;
use tracing_subscriber::EnvFilter;

pub fn setup_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false);
    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}
