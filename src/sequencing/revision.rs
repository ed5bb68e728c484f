//! Lot revision letters: a bijective base-26 counter (A, B, …, Z, AA, AB, …).

use crate::error::{HttpStatus, BAD_REQUEST};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RevisionError {
    #[error("Invalid revision '{0}': expected letters A-Z")]
    Invalid(String),
}

impl HttpStatus for RevisionError {
    fn status_code(&self) -> u16 {
        BAD_REQUEST
    }
}

/// The revision following `current`; `A` when there is none yet.
pub fn next_revision(current: Option<&str>) -> Result<String, RevisionError> {
    let current = match current.map(str::trim) {
        None | Some("") => return Ok("A".to_string()),
        Some(rev) => rev,
    };
    if !current.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(RevisionError::Invalid(current.to_string()));
    }

    let mut letters: Vec<u8> = current.to_ascii_uppercase().into_bytes();
    // Carry from the right: Z rolls over to A.
    for letter in letters.iter_mut().rev() {
        if *letter == b'Z' {
            *letter = b'A';
        } else {
            *letter += 1;
            return Ok(String::from_utf8_lossy(&letters).into_owned());
        }
    }
    // Every letter was Z.
    letters.insert(0, b'A');
    Ok(String::from_utf8_lossy(&letters).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_revision_starts_at_a() {
        assert_eq!(next_revision(None).unwrap(), "A");
        assert_eq!(next_revision(Some("  ")).unwrap(), "A");
    }

    #[test]
    fn test_single_letters_increment() {
        assert_eq!(next_revision(Some("A")).unwrap(), "B");
        assert_eq!(next_revision(Some("b")).unwrap(), "C");
        assert_eq!(next_revision(Some("Y")).unwrap(), "Z");
    }

    #[test]
    fn test_carry_over() {
        assert_eq!(next_revision(Some("Z")).unwrap(), "AA");
        assert_eq!(next_revision(Some("AZ")).unwrap(), "BA");
        assert_eq!(next_revision(Some("ZZ")).unwrap(), "AAA");
    }

    #[test]
    fn test_non_letters_are_rejected() {
        let err = next_revision(Some("A1")).unwrap_err();
        assert_eq!(err, RevisionError::Invalid("A1".into()));
        assert_eq!(err.status_code(), 400);
    }
}
