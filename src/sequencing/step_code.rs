//! Router step insertion and permanent step-code assignment.
//!
//! Before a job is released a router is ordered purely by position and its
//! steps carry no code. From release on, codes are permanent: the first code
//! is `increment`, appends add `increment`, and an insertion between two coded
//! steps takes the midpoint of their codes. Existing codes are never changed.

use crate::error::{HttpStatus, BAD_REQUEST, CONFLICT};
use crate::model::{Router, RouterStep};
use thiserror::Error;

/// Failure to place a step in a router.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Insert position {position} is past the end of a router with {len} steps")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Step index {index} is out of range for a router with {len} steps")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No step code left between {before} and {after}")]
    CodesExhausted { before: u32, after: u32 },
}

impl HttpStatus for SequenceError {
    fn status_code(&self) -> u16 {
        match self {
            SequenceError::PositionOutOfRange { .. } | SequenceError::IndexOutOfRange { .. } => {
                BAD_REQUEST
            }
            SequenceError::CodesExhausted { .. } => CONFLICT,
        }
    }
}

/// Code for a step placed between the coded neighbours `before` and `after`.
pub fn code_between(
    before: Option<u32>,
    after: Option<u32>,
    increment: u32,
) -> Result<u32, SequenceError> {
    match (before, after) {
        (None, None) => Ok(increment),
        (Some(before), None) => before
            .checked_add(increment)
            .ok_or(SequenceError::CodesExhausted { before, after: u32::MAX }),
        (None, Some(after)) => {
            if after < 2 {
                Err(SequenceError::CodesExhausted { before: 0, after })
            } else {
                Ok(after / 2)
            }
        }
        (Some(before), Some(after)) => {
            if after <= before || after - before < 2 {
                Err(SequenceError::CodesExhausted { before, after })
            } else {
                Ok(before + (after - before) / 2)
            }
        }
    }
}

/// Nearest coded neighbours of `position` (the slot a new step would occupy).
fn neighbours(router: &Router, position: usize) -> (Option<u32>, Option<u32>) {
    let before = router.steps[..position]
        .iter()
        .rev()
        .find_map(|s| s.step_code);
    let after = router.steps[position..].iter().find_map(|s| s.step_code);
    (before, after)
}

/// Gives every uncoded step a code, in router order, without touching the
/// codes already assigned. Returns the number of steps that were coded.
pub fn freeze(router: &mut Router, increment: u32) -> Result<usize, SequenceError> {
    let mut assigned = 0;
    for index in 0..router.steps.len() {
        if router.steps[index].step_code.is_some() {
            continue;
        }
        let before = router.steps[..index]
            .iter()
            .rev()
            .find_map(|s| s.step_code);
        let after = router.steps[index + 1..].iter().find_map(|s| s.step_code);
        router.steps[index].step_code = Some(code_between(before, after, increment)?);
        assigned += 1;
    }
    Ok(assigned)
}

/// Inserts `step` after index `insert_after` (`None` inserts at the front)
/// and returns the index it now occupies.
///
/// When `released` is false the step is stored without a code. Otherwise the
/// router is frozen first and the step receives a code between its coded
/// neighbours.
pub fn insert_step(
    router: &mut Router,
    insert_after: Option<usize>,
    mut step: RouterStep,
    released: bool,
    increment: u32,
) -> Result<usize, SequenceError> {
    let position = insert_after.map_or(0, |i| i + 1);
    if position > router.steps.len() {
        return Err(SequenceError::PositionOutOfRange {
            position,
            len: router.steps.len(),
        });
    }

    if released {
        freeze(router, increment)?;
        let (before, after) = neighbours(router, position);
        step.step_code = Some(code_between(before, after, increment)?);
    } else {
        step.step_code = None;
    }

    router.steps.insert(position, step);
    Ok(position)
}

/// Removes the step at `index`.
pub fn remove_step(router: &mut Router, index: usize) -> Result<RouterStep, SequenceError> {
    if index >= router.steps.len() {
        return Err(SequenceError::IndexOutOfRange {
            index,
            len: router.steps.len(),
        });
    }
    Ok(router.steps.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RouteStepId;

    fn step(name: &str) -> RouterStep {
        RouterStep::new(RouteStepId(1), "MACHINING", name, "")
    }

    #[test]
    fn test_unreleased_insert_is_positional_and_uncoded() {
        let mut router = Router::default();
        insert_step(&mut router, None, step("saw"), false, 100).unwrap();
        insert_step(&mut router, Some(0), step("mill"), false, 100).unwrap();
        insert_step(&mut router, Some(0), step("deburr"), false, 100).unwrap();

        let names: Vec<_> = router.steps.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["saw", "deburr", "mill"]);
        assert_eq!(router.step_codes(), vec![None, None, None]);
    }

    #[test]
    fn test_released_codes_start_at_increment_and_append() {
        let mut router = Router::default();
        insert_step(&mut router, None, step("saw"), true, 100).unwrap();
        insert_step(&mut router, Some(0), step("mill"), true, 100).unwrap();
        assert_eq!(router.step_codes(), vec![Some(100), Some(200)]);
    }

    #[test]
    fn test_released_insert_between_takes_midpoint() {
        let mut router = Router::new(vec![step("saw").with_code(100), step("mill").with_code(200)]);
        let index = insert_step(&mut router, Some(0), step("deburr"), true, 100).unwrap();
        assert_eq!(index, 1);
        assert_eq!(router.step_codes(), vec![Some(100), Some(150), Some(200)]);

        insert_step(&mut router, Some(0), step("inspect"), true, 100).unwrap();
        assert_eq!(
            router.step_codes(),
            vec![Some(100), Some(125), Some(150), Some(200)]
        );
    }

    #[test]
    fn test_released_insert_at_front_halves_first_code() {
        let mut router = Router::new(vec![step("saw").with_code(100)]);
        insert_step(&mut router, None, step("kit"), true, 100).unwrap();
        assert_eq!(router.step_codes(), vec![Some(50), Some(100)]);
    }

    #[test]
    fn test_release_freezes_existing_steps_in_order() {
        let mut router = Router::new(vec![step("saw"), step("mill"), step("ship")]);
        assert_eq!(freeze(&mut router, 100).unwrap(), 3);
        assert_eq!(router.step_codes(), vec![Some(100), Some(200), Some(300)]);
        assert_eq!(freeze(&mut router, 100).unwrap(), 0);
    }

    #[test]
    fn test_adjacent_codes_are_exhausted() {
        let mut router = Router::new(vec![step("a").with_code(100), step("b").with_code(101)]);
        let err = insert_step(&mut router, Some(0), step("c"), true, 100).unwrap_err();
        assert_eq!(err, SequenceError::CodesExhausted { before: 100, after: 101 });
        assert_eq!(err.status_code(), 409);
        assert_eq!(router.len(), 2);
    }

    #[test]
    fn test_position_past_end_is_rejected() {
        let mut router = Router::new(vec![step("a")]);
        let err = insert_step(&mut router, Some(3), step("b"), false, 100).unwrap_err();
        assert_eq!(err, SequenceError::PositionOutOfRange { position: 4, len: 1 });
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_code_between_edges() {
        assert_eq!(code_between(None, None, 100), Ok(100));
        assert_eq!(code_between(Some(300), None, 100), Ok(400));
        assert_eq!(code_between(Some(150), Some(200), 100), Ok(175));
        assert!(code_between(None, Some(1), 100).is_err());
        assert!(code_between(Some(u32::MAX - 1), None, 100).is_err());
    }
}
