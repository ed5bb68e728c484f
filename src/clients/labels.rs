//! Generated document labels (`ACME-PS001`, `ACME-SH002`, …).
//!
//! Numbering starts after the customer's existing documents. Two callers can
//! race for the same number, so a duplicate-key conflict moves on to the
//! next number until the retry limit is reached.

use std::future::Future;
use tracing::{debug, warn};

pub const PACKING_SLIP_PREFIX: &str = "PS";
pub const SHIPMENT_PREFIX: &str = "SH";

pub fn format_label(customer: &str, prefix: &str, number: usize) -> String {
    format!("{}-{}{:03}", customer.trim().to_uppercase(), prefix, number)
}

/// Calls `create` with successive labels until it succeeds, fails with a
/// non-conflict error, or `retry_limit` conflicts have been seen.
pub(crate) async fn create_with_generated_label<Id, E, Fut>(
    customer: &str,
    prefix: &str,
    existing: usize,
    retry_limit: u32,
    is_conflict: impl Fn(&E) -> bool,
    mut create: impl FnMut(String) -> Fut,
) -> Result<Id, E>
where
    E: std::fmt::Display,
    Fut: Future<Output = Result<Id, E>>,
{
    let mut number = existing + 1;
    let mut conflicts = 0;
    loop {
        let label = format_label(customer, prefix, number);
        debug!(%label, "Trying generated label");
        match create(label).await {
            Err(e) if is_conflict(&e) && conflicts < retry_limit => {
                conflicts += 1;
                number += 1;
                warn!(error = %e, conflicts, "Generated label taken, retrying");
            }
            result => return result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_format() {
        assert_eq!(format_label(" acme ", PACKING_SLIP_PREFIX, 7), "ACME-PS007");
        assert_eq!(format_label("ACME", SHIPMENT_PREFIX, 1234), "ACME-SH1234");
    }

    #[tokio::test]
    async fn test_conflicts_move_to_next_number() {
        let mut tried = Vec::new();
        let result: Result<String, String> = create_with_generated_label(
            "acme",
            PACKING_SLIP_PREFIX,
            2,
            5,
            |e: &String| e == "conflict",
            |label| {
                tried.push(label.clone());
                let taken = tried.len() < 3;
                async move {
                    if taken {
                        Err("conflict".to_string())
                    } else {
                        Ok(label)
                    }
                }
            },
        )
        .await;
        assert_eq!(result.unwrap(), "ACME-PS005");
        assert_eq!(tried, vec!["ACME-PS003", "ACME-PS004", "ACME-PS005"]);
    }

    #[tokio::test]
    async fn test_retry_limit_returns_last_conflict() {
        let mut attempts = 0;
        let result: Result<(), String> = create_with_generated_label(
            "acme",
            SHIPMENT_PREFIX,
            0,
            2,
            |e: &String| e == "conflict",
            |_| {
                attempts += 1;
                async { Err("conflict".to_string()) }
            },
        )
        .await;
        assert_eq!(result.unwrap_err(), "conflict");
        assert_eq!(attempts, 3);
    }

    #[tokio::test]
    async fn test_other_errors_stop_immediately() {
        let mut attempts = 0;
        let result: Result<(), String> = create_with_generated_label(
            "acme",
            SHIPMENT_PREFIX,
            0,
            5,
            |e: &String| e == "conflict",
            |_| {
                attempts += 1;
                async { Err("closed".to_string()) }
            },
        )
        .await;
        assert_eq!(result.unwrap_err(), "closed");
        assert_eq!(attempts, 1);
    }
}
