//! A unit of production work. Owns its lots and a default router.
//!
//! Release is a one-way door: from then on the job, its router codes and
//! its lots' revisions are permanent.

use crate::model::{JobId, LotId, Router};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    #[default]
    Active,
    OnHold,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub job_number: String,
    pub part_number: String,
    pub part_rev: String,
    pub quantity: u32,
    pub due_date: Option<NaiveDate>,
    pub status: JobStatus,
    pub released_on: Option<DateTime<Utc>>,
    pub router: Router,
    pub lots: Vec<LotId>,
}

impl Job {
    pub fn is_released(&self) -> bool {
        self.released_on.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCreate {
    pub job_number: String,
    pub part_number: String,
    pub part_rev: String,
    pub quantity: u32,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobUpdate {
    pub part_rev: Option<String>,
    pub quantity: Option<u32>,
    pub due_date: Option<NaiveDate>,
}
