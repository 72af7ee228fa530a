//! Solver adapter boundary.
//!
//! The search itself is delegated to an external combinatorial engine.
//! This module fixes only the contract between the data model and such an
//! engine: a validated [`ProblemData`] and a [`SolverConfig`] go in, a
//! [`SolveResult`] comes out.
//!
//! An adapter translates each precedence type into a temporal constraint
//! (see [`PrecedenceType::first_anchor`](crate::PrecedenceType::first_anchor)),
//! each machine into a no-overlap resource with the setup times as
//! transition distances, and each operation into an optional interval per
//! accessible machine.
//!
//! # Reference
//! Laborie et al. (2018), "IBM ILOG CP Optimizer for Scheduling"

mod config;
mod result;

pub use config::{ConfigError, SolverConfig};
pub use result::{ScheduledOperation, SolveResult, SolveStatus};

use crate::ProblemData;

/// A backend that solves a flexible job shop instance.
///
/// Implementations may block for as long as the configured time limit
/// allows. Their errors are passed to the caller unchanged.
pub trait Solver {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Backend name, used in log events.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn solve(&self, data: &ProblemData, config: &SolverConfig) -> Result<SolveResult, Self::Error>;
}

impl<S: Solver + ?Sized> Solver for &S {
    type Error = S::Error;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn solve(&self, data: &ProblemData, config: &SolverConfig) -> Result<SolveResult, Self::Error> {
        (**self).solve(data, config)
    }
}
