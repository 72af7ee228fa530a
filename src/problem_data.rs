//! Validated problem data.
//!
//! [`ProblemData`] binds the entities of a flexible job shop instance to
//! the tensors that describe it. It exists only in a fully valid state:
//! [`ProblemData::new`] runs the whole validation pipeline and there is no
//! way to mutate an instance afterwards.
//!
//! # Tensor Layout
//!
//! | Field | Shape | Entry |
//! |-------|-------|-------|
//! | `processing_times` | operations × machines | duration, `None` = ineligible |
//! | `access_matrix` | operations × machines | machine may be used |
//! | `setup_times` | machines × operations × operations | changeover from → to |

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::MAX_VALUE;
use crate::error::DataError;
use crate::models::{Job, Machine, Matrix, Operation, PrecedenceType, Tensor3};
use crate::validation::{validate, ProblemParts};

/// Precedence relations keyed by ordered `(from, to)` operation pair.
pub type Precedences = BTreeMap<(usize, usize), BTreeSet<PrecedenceType>>;

/// A validated, immutable flexible job shop instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProblemDataRepr", into = "ProblemDataRepr")]
pub struct ProblemData {
    jobs: Vec<Job>,
    machines: Vec<Machine>,
    operations: Vec<Operation>,
    processing_times: Matrix<Option<i64>>,
    precedences: Precedences,
    horizon: i64,
    access_matrix: Matrix<bool>,
    setup_times: Tensor3<i64>,
    job2ops: Vec<Vec<usize>>,
    machine2ops: Vec<Vec<usize>>,
}

impl ProblemData {
    /// Validates the inputs and builds a problem instance.
    ///
    /// Omitted optional inputs are resolved once here:
    /// - `horizon` → [`MAX_VALUE`]
    /// - `access_matrix` → all `true`
    /// - `setup_times` → all zero
    ///
    /// # Errors
    /// The first violated invariant. Shapes are checked first, then index
    /// bounds, then value domains, then eligibility agreement.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        jobs: Vec<Job>,
        machines: Vec<Machine>,
        operations: Vec<Operation>,
        processing_times: Matrix<Option<i64>>,
        precedences: Precedences,
        horizon: Option<i64>,
        access_matrix: Option<Matrix<bool>>,
        setup_times: Option<Tensor3<i64>>,
    ) -> Result<Self, DataError> {
        let num_ops = operations.len();
        let num_machines = machines.len();

        let horizon = horizon.unwrap_or(MAX_VALUE);
        let access_matrix =
            access_matrix.unwrap_or_else(|| Matrix::filled(num_ops, num_machines, true));
        let setup_times =
            setup_times.unwrap_or_else(|| Tensor3::filled(num_machines, num_ops, num_ops, 0));

        validate(&ProblemParts {
            jobs: &jobs,
            machines: &machines,
            operations: &operations,
            processing_times: &processing_times,
            precedences: &precedences,
            horizon,
            access_matrix: &access_matrix,
            setup_times: &setup_times,
        })?;

        let mut job2ops = vec![Vec::new(); jobs.len()];
        let mut machine2ops = vec![Vec::new(); num_machines];
        for (idx, op) in operations.iter().enumerate() {
            job2ops[op.job()].push(idx);
            for &machine in op.machines() {
                machine2ops[machine].push(idx);
            }
        }

        debug!(
            num_jobs = jobs.len(),
            num_machines,
            num_operations = num_ops,
            num_precedences = precedences.len(),
            horizon,
            "problem data validated"
        );

        Ok(Self {
            jobs,
            machines,
            operations,
            processing_times,
            precedences,
            horizon,
            access_matrix,
            setup_times,
            job2ops,
            machine2ops,
        })
    }

    #[inline]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    #[inline]
    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    #[inline]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Processing times, `None` where the operation is ineligible.
    #[inline]
    pub fn processing_times(&self) -> &Matrix<Option<i64>> {
        &self.processing_times
    }

    #[inline]
    pub fn precedences(&self) -> &Precedences {
        &self.precedences
    }

    #[inline]
    pub fn horizon(&self) -> i64 {
        self.horizon
    }

    #[inline]
    pub fn access_matrix(&self) -> &Matrix<bool> {
        &self.access_matrix
    }

    #[inline]
    pub fn setup_times(&self) -> &Tensor3<i64> {
        &self.setup_times
    }

    /// Operation indices of each job, in operation order.
    #[inline]
    pub fn job2ops(&self) -> &[Vec<usize>] {
        &self.job2ops
    }

    /// Operation indices eligible on each machine, in operation order.
    #[inline]
    pub fn machine2ops(&self) -> &[Vec<usize>] {
        &self.machine2ops
    }

    #[inline]
    pub fn num_jobs(&self) -> usize {
        self.jobs.len()
    }

    #[inline]
    pub fn num_machines(&self) -> usize {
        self.machines.len()
    }

    #[inline]
    pub fn num_operations(&self) -> usize {
        self.operations.len()
    }

    /// Duration of `operation` on `machine`, `None` if ineligible or out of range.
    pub fn processing_time(&self, operation: usize, machine: usize) -> Option<i64> {
        self.processing_times.get(operation, machine).copied().flatten()
    }

    /// Changeover on `machine` when `to` directly follows `from`.
    pub fn setup_time(&self, machine: usize, from: usize, to: usize) -> Option<i64> {
        self.setup_times.get(machine, from, to).copied()
    }

    /// Whether `operation` may be processed on `machine`.
    ///
    /// Requires both eligibility and access.
    pub fn is_accessible(&self, operation: usize, machine: usize) -> bool {
        let eligible = self
            .operations
            .get(operation)
            .is_some_and(|op| op.is_eligible_on(machine));
        eligible && self.access_matrix.get(operation, machine).copied().unwrap_or(false)
    }

    /// Precedence types imposed on the ordered pair `(from, to)`.
    pub fn precedence_types(&self, from: usize, to: usize) -> Option<&BTreeSet<PrecedenceType>> {
        self.precedences.get(&(from, to))
    }
}

/// Serialized form. Tuple keys are not portable map keys, so precedences
/// travel as a list. Derived indices are rebuilt on load.
#[derive(Serialize, Deserialize)]
struct ProblemDataRepr {
    jobs: Vec<Job>,
    machines: Vec<Machine>,
    operations: Vec<Operation>,
    processing_times: Matrix<Option<i64>>,
    #[serde(default)]
    precedences: Vec<PrecedenceEntry>,
    #[serde(default)]
    horizon: Option<i64>,
    #[serde(default)]
    access_matrix: Option<Matrix<bool>>,
    #[serde(default)]
    setup_times: Option<Tensor3<i64>>,
}

#[derive(Serialize, Deserialize)]
struct PrecedenceEntry {
    from: usize,
    to: usize,
    types: BTreeSet<PrecedenceType>,
}

impl TryFrom<ProblemDataRepr> for ProblemData {
    type Error = DataError;

    fn try_from(repr: ProblemDataRepr) -> Result<Self, Self::Error> {
        let mut precedences = Precedences::new();
        for entry in repr.precedences {
            precedences
                .entry((entry.from, entry.to))
                .or_default()
                .extend(entry.types);
        }
        ProblemData::new(
            repr.jobs,
            repr.machines,
            repr.operations,
            repr.processing_times,
            precedences,
            repr.horizon,
            repr.access_matrix,
            repr.setup_times,
        )
    }
}

impl From<ProblemData> for ProblemDataRepr {
    fn from(data: ProblemData) -> Self {
        Self {
            jobs: data.jobs,
            machines: data.machines,
            operations: data.operations,
            processing_times: data.processing_times,
            precedences: data
                .precedences
                .into_iter()
                .map(|((from, to), types)| PrecedenceEntry { from, to, types })
                .collect(),
            horizon: Some(data.horizon),
            access_matrix: Some(data.access_matrix),
            setup_times: Some(data.setup_times),
        }
    }
}
