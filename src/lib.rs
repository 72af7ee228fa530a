//! Flexible job shop problem data for the U-Engine ecosystem.
//!
//! Describes Flexible Job Shop Scheduling Problems (FJSP) and guarantees
//! they are structurally sound before they reach a solver. Jobs consist of
//! operations; each operation runs on one of several eligible machines,
//! subject to precedence and sequence-dependent setup constraints.
//!
//! # Modules
//!
//! - **`models`**: Entities (`Job`, `Machine`, `Operation`), the
//!   `PrecedenceType` vocabulary, and dense `Matrix`/`Tensor3` containers
//! - **`validation`**: Ordered invariant checks run on every construction
//! - **`problem_data`**: `ProblemData`, the validated immutable aggregate
//! - **`model`**: `Model`, an incremental builder with typed handles
//! - **`solver`**: The `Solver` adapter trait, `SolverConfig`, `SolveResult`
//!
//! # Architecture
//!
//! The search itself is delegated to an external engine behind
//! [`Solver`]. This crate owns the data model and its validation only.
//!
//! # References
//!
//! - Brucker & Schlie (1990), "Job-shop scheduling with multi-purpose machines"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Laborie et al. (2018), "IBM ILOG CP Optimizer for Scheduling"

pub mod constants;
pub mod error;
pub mod model;
pub mod models;
pub mod problem_data;
pub mod solver;
mod validation;

pub use constants::MAX_VALUE;
pub use error::{DataError, DataErrorKind, ModelError, SolveError};
pub use model::{JobHandle, MachineHandle, Model, OperationHandle};
pub use models::{Job, Machine, Matrix, Operation, PrecedenceType, Tensor3};
pub use problem_data::{Precedences, ProblemData};
pub use solver::{ConfigError, ScheduledOperation, SolveResult, SolveStatus, Solver, SolverConfig};
