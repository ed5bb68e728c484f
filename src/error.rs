//! HTTP-style status classification shared by every error type.
//!
//! The shop-floor API answers business-rule violations with typed 4xx codes
//! and everything unexpected with a generic 500. Errors carry their code so
//! a transport layer can map them without inspecting variants.

/// Status classification of an error.
pub trait HttpStatus {
    /// 400, 404, 405, 409 for expected failures, 500 for the rest.
    fn status_code(&self) -> u16;

    /// Message safe to return to a caller: the error text for 4xx, a
    /// generic message for 5xx.
    fn public_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        if self.status_code() >= 500 {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

pub const BAD_REQUEST: u16 = 400;
pub const NOT_FOUND: u16 = 404;
pub const METHOD_NOT_ALLOWED: u16 = 405;
pub const CONFLICT: u16 = 409;
pub const INTERNAL_ERROR: u16 = 500;
