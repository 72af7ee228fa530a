//! Operation model.
//!
//! An operation is the smallest schedulable unit of work. It belongs to
//! exactly one job and may be processed on any one of its eligible
//! machines. Jobs and machines are referenced by index.
//!
//! # Reference
//! Brucker & Schlie (1990), "Job-shop scheduling with multi-purpose machines"

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// An operation to be scheduled.
///
/// Identity is the operation's position in the problem's operation list.
/// The eligible machine set is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "OperationRepr")]
pub struct Operation {
    job: usize,
    machines: Vec<usize>,
    name: Option<String>,
}

#[derive(Deserialize)]
struct OperationRepr {
    job: usize,
    machines: Vec<usize>,
    #[serde(default)]
    name: Option<String>,
}

impl TryFrom<OperationRepr> for Operation {
    type Error = DataError;

    fn try_from(repr: OperationRepr) -> Result<Self, Self::Error> {
        let op = Operation::new(repr.job, repr.machines)?;
        Ok(match repr.name {
            Some(name) => op.with_name(name),
            None => op,
        })
    }
}

impl Operation {
    /// Creates an operation of `job` that may run on any of `machines`.
    ///
    /// # Errors
    /// - [`DataError::NoEligibleMachines`] if `machines` is empty.
    /// - [`DataError::DuplicateMachine`] if a machine is listed twice.
    pub fn new(job: usize, machines: Vec<usize>) -> Result<Self, DataError> {
        if machines.is_empty() {
            return Err(DataError::NoEligibleMachines { operation: None });
        }
        let mut seen = BTreeSet::new();
        if let Some(&machine) = machines.iter().find(|&&m| !seen.insert(m)) {
            return Err(DataError::DuplicateMachine {
                operation: None,
                machine,
            });
        }
        Ok(Self {
            job,
            machines,
            name: None,
        })
    }

    /// Sets the operation name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Index of the owning job.
    #[inline]
    pub fn job(&self) -> usize {
        self.job
    }

    /// Indices of the machines this operation may run on.
    #[inline]
    pub fn machines(&self) -> &[usize] {
        &self.machines
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the operation may run on `machine`.
    pub fn is_eligible_on(&self, machine: usize) -> bool {
        self.machines.contains(&machine)
    }
}
