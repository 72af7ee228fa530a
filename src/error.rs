//! Error types.
//!
//! Every failure is reported synchronously to the immediate caller.
//! Variants carry the offending indices, shapes or values so a caller can
//! fix its input without inspecting the library.

use thiserror::Error;

use crate::solver::ConfigError;

/// A problem-data validation error.
///
/// One variant per invariant of [`ProblemData`](crate::ProblemData).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// An operation was given an empty set of eligible machines.
    #[error("operation needs at least one eligible machine (operation index: {operation:?})")]
    NoEligibleMachines {
        /// Operation index, when known.
        operation: Option<usize>,
    },

    /// A tensor built from nested rows is not rectangular.
    #[error("{field} is ragged: row {row} has length {actual}, expected {expected}")]
    RaggedTensor {
        field: &'static str,
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A serialized tensor holds a different number of elements than its
    /// declared shape.
    #[error("{field} declares shape {shape:?} but holds {actual} elements")]
    DataLength {
        field: &'static str,
        shape: Vec<usize>,
        actual: usize,
    },

    /// An operation lists the same eligible machine more than once.
    #[error("operation lists machine {machine} more than once (operation index: {operation:?})")]
    DuplicateMachine {
        /// Operation index, when known.
        operation: Option<usize>,
        machine: usize,
    },

    /// A tensor's shape does not match the entity collection sizes.
    #[error("{field} has shape {actual:?}, expected {expected:?}")]
    ShapeMismatch {
        field: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// An operation references a job that does not exist.
    #[error("operation {operation} references job {job}, but there are only {num_jobs} jobs")]
    JobOutOfRange {
        operation: usize,
        job: usize,
        num_jobs: usize,
    },

    /// An operation references a machine that does not exist.
    #[error(
        "operation {operation} references machine {machine}, but there are only {num_machines} machines"
    )]
    MachineOutOfRange {
        operation: usize,
        machine: usize,
        num_machines: usize,
    },

    /// A precedence key references an operation that does not exist.
    #[error(
        "precedence ({from}, {to}) references an unknown operation, there are only {num_operations} operations"
    )]
    PrecedenceOutOfRange {
        from: usize,
        to: usize,
        num_operations: usize,
    },

    #[error("processing time of operation {operation} on machine {machine} is negative: {value}")]
    NegativeProcessingTime {
        operation: usize,
        machine: usize,
        value: i64,
    },

    #[error("setup time on machine {machine} from operation {from} to {to} is negative: {value}")]
    NegativeSetupTime {
        machine: usize,
        from: usize,
        to: usize,
        value: i64,
    },

    #[error("horizon is negative: {0}")]
    NegativeHorizon(i64),

    #[error("job {job} has a negative release date: {value}")]
    NegativeReleaseDate { job: usize, value: i64 },

    /// A job's deadline lies before its release date.
    #[error("job {job} has deadline {deadline} before release date {release_date}")]
    DeadlineBeforeRelease {
        job: usize,
        release_date: i64,
        deadline: i64,
    },

    /// An eligible (operation, machine) pair has no processing time.
    #[error("operation {operation} is eligible on machine {machine} but has no processing time")]
    MissingProcessingTime { operation: usize, machine: usize },
}

/// Coarse classification of a [`DataError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataErrorKind {
    /// An entity was constructed with an impossible configuration.
    Argument,
    /// Tensor dimensions or referenced indices are inconsistent.
    Shape,
    /// A numeric field is outside its domain.
    Value,
}

impl DataError {
    /// Attaches an operation index to an error raised by
    /// [`Operation::new`](crate::Operation::new).
    pub(crate) fn at_operation(self, idx: usize) -> Self {
        match self {
            Self::NoEligibleMachines { .. } => Self::NoEligibleMachines {
                operation: Some(idx),
            },
            Self::DuplicateMachine { machine, .. } => Self::DuplicateMachine {
                operation: Some(idx),
                machine,
            },
            other => other,
        }
    }

    /// Returns the error category.
    pub fn kind(&self) -> DataErrorKind {
        match self {
            Self::NoEligibleMachines { .. } | Self::DuplicateMachine { .. } => {
                DataErrorKind::Argument
            }
            Self::RaggedTensor { .. }
            | Self::DataLength { .. }
            | Self::ShapeMismatch { .. }
            | Self::JobOutOfRange { .. }
            | Self::MachineOutOfRange { .. }
            | Self::PrecedenceOutOfRange { .. }
            | Self::MissingProcessingTime { .. } => DataErrorKind::Shape,
            Self::NegativeProcessingTime { .. }
            | Self::NegativeSetupTime { .. }
            | Self::NegativeHorizon(_)
            | Self::NegativeReleaseDate { .. }
            | Self::DeadlineBeforeRelease { .. } => DataErrorKind::Value,
        }
    }
}

/// An error raised by the [`Model`](crate::Model) builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown job handle {handle}, the model has {count} jobs")]
    UnknownJob { handle: usize, count: usize },

    #[error("unknown machine handle {handle}, the model has {count} machines")]
    UnknownMachine { handle: usize, count: usize },

    #[error("unknown operation handle {handle}, the model has {count} operations")]
    UnknownOperation { handle: usize, count: usize },

    /// A processing time was set for a machine the operation cannot use.
    #[error("machine {machine} is not eligible for operation {operation}")]
    IneligibleMachine { operation: usize, machine: usize },

    /// The operation already belongs to another job.
    #[error("operation {operation} already belongs to job {assigned}, cannot assign it to job {job}")]
    OperationAlreadyAssigned {
        operation: usize,
        job: usize,
        assigned: usize,
    },

    /// The operation was never assigned to a job.
    #[error("operation {operation} is not assigned to any job")]
    UnassignedOperation { operation: usize },

    #[error(transparent)]
    Data(#[from] DataError),
}

/// An error raised while solving a [`Model`](crate::Model).
///
/// Solver failures are passed through untouched.
#[derive(Debug, Error)]
pub enum SolveError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("solver failed: {0}")]
    Solver(#[source] E),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            DataError::NoEligibleMachines { operation: None }.kind(),
            DataErrorKind::Argument
        );
        assert_eq!(
            DataError::ShapeMismatch {
                field: "processing_times",
                expected: vec![1, 1],
                actual: vec![2, 2],
            }
            .kind(),
            DataErrorKind::Shape
        );
        assert_eq!(DataError::NegativeHorizon(-1).kind(), DataErrorKind::Value);
    }

    #[test]
    fn test_at_operation_fills_index() {
        let e = DataError::DuplicateMachine {
            operation: None,
            machine: 3,
        }
        .at_operation(7);
        assert_eq!(
            e,
            DataError::DuplicateMachine {
                operation: Some(7),
                machine: 3,
            }
        );
        assert_eq!(
            DataError::NegativeHorizon(-1).at_operation(7),
            DataError::NegativeHorizon(-1)
        );
    }

    #[test]
    fn test_shape_message_names_field_and_shapes() {
        let e = DataError::ShapeMismatch {
            field: "setup_times",
            expected: vec![1, 1, 1],
            actual: vec![2, 2, 2],
        };
        assert_eq!(
            e.to_string(),
            "setup_times has shape [2, 2, 2], expected [1, 1, 1]"
        );
    }

    #[test]
    fn test_model_error_wraps_data_error() {
        let e: ModelError = DataError::NegativeHorizon(-5).into();
        assert_eq!(e.to_string(), "horizon is negative: -5");
        assert!(matches!(e, ModelError::Data(DataError::NegativeHorizon(-5))));
    }
}
