//! Input validation for flexible job shop problems.
//!
//! Checks the raw parts of a problem before they are bound into a
//! [`ProblemData`](crate::ProblemData). The checks form a fixed pipeline:
//!
//! 1. Tensor shapes (processing times, access matrix, setup times)
//! 2. Operation references (non-empty machine sets, job and machine bounds)
//! 3. Precedence references
//! 4. Value domains (processing times, setup times, horizon, job windows)
//! 5. Eligibility agreement (every eligible pair has a processing time)
//!
//! Validation stops at the first failing check, so each error names
//! exactly one violated invariant.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::DataError;
use crate::models::{Job, Machine, Matrix, Operation, PrecedenceType, Tensor3};

/// Borrowed view of everything a problem is built from.
///
/// Optional inputs are already resolved to their defaults.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProblemParts<'a> {
    pub jobs: &'a [Job],
    pub machines: &'a [Machine],
    pub operations: &'a [Operation],
    pub processing_times: &'a Matrix<Option<i64>>,
    pub precedences: &'a BTreeMap<(usize, usize), BTreeSet<PrecedenceType>>,
    pub horizon: i64,
    pub access_matrix: &'a Matrix<bool>,
    pub setup_times: &'a Tensor3<i64>,
}

type Check = fn(&ProblemParts<'_>) -> Result<(), DataError>;

/// Checks in evaluation order. New checks are appended.
const PIPELINE: &[Check] = &[
    check_processing_times_shape,
    check_access_matrix_shape,
    check_setup_times_shape,
    check_operations,
    check_precedences,
    check_processing_time_values,
    check_setup_time_values,
    check_horizon,
    check_jobs,
    check_eligibility,
];

/// Runs every check in order, returning the first violation.
pub(crate) fn validate(parts: &ProblemParts<'_>) -> Result<(), DataError> {
    PIPELINE.iter().try_for_each(|check| check(parts))
}

fn shape_mismatch(field: &'static str, expected: &[usize], actual: &[usize]) -> DataError {
    DataError::ShapeMismatch {
        field,
        expected: expected.to_vec(),
        actual: actual.to_vec(),
    }
}

fn check_processing_times_shape(parts: &ProblemParts<'_>) -> Result<(), DataError> {
    let expected = (parts.operations.len(), parts.machines.len());
    let actual = parts.processing_times.shape();
    if actual != expected {
        return Err(shape_mismatch(
            "processing_times",
            &[expected.0, expected.1],
            &[actual.0, actual.1],
        ));
    }
    Ok(())
}

fn check_access_matrix_shape(parts: &ProblemParts<'_>) -> Result<(), DataError> {
    let expected = (parts.operations.len(), parts.machines.len());
    let actual = parts.access_matrix.shape();
    if actual != expected {
        return Err(shape_mismatch(
            "access_matrix",
            &[expected.0, expected.1],
            &[actual.0, actual.1],
        ));
    }
    Ok(())
}

fn check_setup_times_shape(parts: &ProblemParts<'_>) -> Result<(), DataError> {
    let num_ops = parts.operations.len();
    let expected = (parts.machines.len(), num_ops, num_ops);
    let actual = parts.setup_times.shape();
    if actual != expected {
        return Err(shape_mismatch(
            "setup_times",
            &[expected.0, expected.1, expected.2],
            &[actual.0, actual.1, actual.2],
        ));
    }
    Ok(())
}

fn check_operations(parts: &ProblemParts<'_>) -> Result<(), DataError> {
    let num_jobs = parts.jobs.len();
    let num_machines = parts.machines.len();

    for (idx, op) in parts.operations.iter().enumerate() {
        if op.machines().is_empty() {
            return Err(DataError::NoEligibleMachines {
                operation: Some(idx),
            });
        }
        if op.job() >= num_jobs {
            return Err(DataError::JobOutOfRange {
                operation: idx,
                job: op.job(),
                num_jobs,
            });
        }
        if let Some(&machine) = op.machines().iter().find(|&&m| m >= num_machines) {
            return Err(DataError::MachineOutOfRange {
                operation: idx,
                machine,
                num_machines,
            });
        }
    }
    Ok(())
}

fn check_precedences(parts: &ProblemParts<'_>) -> Result<(), DataError> {
    let num_operations = parts.operations.len();
    match parts
        .precedences
        .keys()
        .find(|&&(from, to)| from >= num_operations || to >= num_operations)
    {
        Some(&(from, to)) => Err(DataError::PrecedenceOutOfRange {
            from,
            to,
            num_operations,
        }),
        None => Ok(()),
    }
}

fn check_processing_time_values(parts: &ProblemParts<'_>) -> Result<(), DataError> {
    for (operation, machine, value) in parts.processing_times.indexed_iter() {
        if let Some(value) = *value {
            if value < 0 {
                return Err(DataError::NegativeProcessingTime {
                    operation,
                    machine,
                    value,
                });
            }
        }
    }
    Ok(())
}

fn check_setup_time_values(parts: &ProblemParts<'_>) -> Result<(), DataError> {
    match parts.setup_times.indexed_iter().find(|&(.., v)| *v < 0) {
        Some((machine, from, to, &value)) => Err(DataError::NegativeSetupTime {
            machine,
            from,
            to,
            value,
        }),
        None => Ok(()),
    }
}

fn check_horizon(parts: &ProblemParts<'_>) -> Result<(), DataError> {
    if parts.horizon < 0 {
        return Err(DataError::NegativeHorizon(parts.horizon));
    }
    Ok(())
}

fn check_jobs(parts: &ProblemParts<'_>) -> Result<(), DataError> {
    for (job, j) in parts.jobs.iter().enumerate() {
        if j.release_date() < 0 {
            return Err(DataError::NegativeReleaseDate {
                job,
                value: j.release_date(),
            });
        }
        if let Some(deadline) = j.deadline() {
            if deadline < j.release_date() {
                return Err(DataError::DeadlineBeforeRelease {
                    job,
                    release_date: j.release_date(),
                    deadline,
                });
            }
        }
    }
    Ok(())
}

fn check_eligibility(parts: &ProblemParts<'_>) -> Result<(), DataError> {
    for (operation, op) in parts.operations.iter().enumerate() {
        for &machine in op.machines() {
            if !matches!(parts.processing_times.get(operation, machine), Some(Some(_))) {
                return Err(DataError::MissingProcessingTime { operation, machine });
            }
        }
    }
    Ok(())
}
