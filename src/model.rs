//! Incremental model builder.
//!
//! [`Model`] lets a caller describe a flexible job shop step by step: add
//! jobs and machines, add operations, assign operations to jobs and
//! machines, then record processing times, setup times and precedences.
//! [`Model::data`] compiles the accumulated state into a validated
//! [`ProblemData`]; [`Model::solve`] additionally hands it to a
//! [`Solver`].
//!
//! Handles are checked at every call. Checks that need the whole model
//! (unassigned operations, shapes, value domains) run when compiling.
//!
//! # Example
//!
//! ```
//! use u_fjsp::{Model, PrecedenceType};
//!
//! let mut model = Model::new();
//! let job = model.add_job();
//! let machine = model.add_machine();
//!
//! let first = model.add_operation();
//! let second = model.add_operation();
//! model.assign_job_operations(job, &[first, second]).unwrap();
//! model.assign_machine_operations(machine, &[first, second]).unwrap();
//! model.add_processing_time(first, machine, 3).unwrap();
//! model.add_processing_time(second, machine, 2).unwrap();
//! model
//!     .add_precedence(first, second, &[PrecedenceType::EndBeforeStart])
//!     .unwrap();
//!
//! let data = model.data().unwrap();
//! assert_eq!(data.num_operations(), 2);
//! assert_eq!(data.job2ops(), &[vec![0, 1]]);
//! ```

use std::collections::BTreeMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ModelError, SolveError};
use crate::models::{Job, Machine, Matrix, Operation, PrecedenceType, Tensor3};
use crate::problem_data::{Precedences, ProblemData};
use crate::solver::{SolveResult, Solver, SolverConfig};

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(usize);

        impl $name {
            /// Position of the entity in the compiled problem.
            #[inline]
            pub fn index(self) -> usize {
                self.0
            }
        }
    };
}

handle!(
    /// Handle to a job added to a [`Model`].
    JobHandle
);
handle!(
    /// Handle to a machine added to a [`Model`].
    MachineHandle
);
handle!(
    /// Handle to an operation added to a [`Model`].
    OperationHandle
);

/// An operation while the model is still being built.
#[derive(Debug, Clone, Default)]
struct OperationDraft {
    job: Option<usize>,
    machines: Vec<usize>,
    name: Option<String>,
}

/// Incremental builder for a flexible job shop problem.
///
/// Owned by a single caller for the duration of a construction session.
#[derive(Debug, Clone, Default)]
pub struct Model {
    jobs: Vec<Job>,
    machines: Vec<Machine>,
    operations: Vec<OperationDraft>,
    processing_times: BTreeMap<(usize, usize), i64>,
    setup_times: BTreeMap<(usize, usize, usize), i64>,
    access: BTreeMap<(usize, usize), bool>,
    precedences: Precedences,
    horizon: Option<i64>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a job released at t=0 with no deadline.
    pub fn add_job(&mut self) -> JobHandle {
        self.add_job_with(Job::new())
    }

    pub fn add_job_with(&mut self, job: Job) -> JobHandle {
        self.jobs.push(job);
        JobHandle(self.jobs.len() - 1)
    }

    pub fn add_machine(&mut self) -> MachineHandle {
        self.add_machine_with(Machine::new())
    }

    pub fn add_machine_with(&mut self, machine: Machine) -> MachineHandle {
        self.machines.push(machine);
        MachineHandle(self.machines.len() - 1)
    }

    /// Adds an operation with no job and no eligible machines yet.
    pub fn add_operation(&mut self) -> OperationHandle {
        self.operations.push(OperationDraft::default());
        OperationHandle(self.operations.len() - 1)
    }

    /// Adds an operation already eligible on `machines`.
    pub fn add_operation_on(
        &mut self,
        machines: &[MachineHandle],
    ) -> Result<OperationHandle, ModelError> {
        for &machine in machines {
            self.check_machine(machine)?;
        }
        let op = self.add_operation();
        for &machine in machines {
            self.make_eligible(op, machine);
        }
        Ok(op)
    }

    pub fn name_operation(
        &mut self,
        op: OperationHandle,
        name: impl Into<String>,
    ) -> Result<(), ModelError> {
        self.check_operation(op)?;
        self.operations[op.0].name = Some(name.into());
        Ok(())
    }

    /// Makes `job` the owner of each of `ops`.
    ///
    /// An operation belongs to exactly one job. Repeating an assignment is
    /// a no-op; moving an operation to another job is an error. Nothing is
    /// recorded unless every handle is valid.
    pub fn assign_job_operations(
        &mut self,
        job: JobHandle,
        ops: &[OperationHandle],
    ) -> Result<(), ModelError> {
        self.check_job(job)?;
        for &op in ops {
            self.check_operation(op)?;
            if let Some(assigned) = self.operations[op.0].job {
                if assigned != job.0 {
                    return Err(ModelError::OperationAlreadyAssigned {
                        operation: op.0,
                        job: job.0,
                        assigned,
                    });
                }
            }
        }
        for &op in ops {
            self.operations[op.0].job = Some(job.0);
        }
        Ok(())
    }

    /// Makes each of `ops` eligible on `machine`.
    pub fn assign_machine_operations(
        &mut self,
        machine: MachineHandle,
        ops: &[OperationHandle],
    ) -> Result<(), ModelError> {
        self.check_machine(machine)?;
        for &op in ops {
            self.check_operation(op)?;
        }
        for &op in ops {
            self.make_eligible(op, machine);
        }
        Ok(())
    }

    /// Records the duration of `op` on `machine`, replacing any earlier value.
    ///
    /// # Errors
    /// [`ModelError::IneligibleMachine`] if `machine` was not assigned to `op`.
    pub fn add_processing_time(
        &mut self,
        op: OperationHandle,
        machine: MachineHandle,
        duration: i64,
    ) -> Result<(), ModelError> {
        self.check_operation(op)?;
        self.check_machine(machine)?;
        if !self.operations[op.0].machines.contains(&machine.0) {
            return Err(ModelError::IneligibleMachine {
                operation: op.0,
                machine: machine.0,
            });
        }
        self.processing_times.insert((op.0, machine.0), duration);
        Ok(())
    }

    /// Records the changeover on `machine` when `to` directly follows `from`.
    pub fn add_setup_time(
        &mut self,
        machine: MachineHandle,
        from: OperationHandle,
        to: OperationHandle,
        duration: i64,
    ) -> Result<(), ModelError> {
        self.check_machine(machine)?;
        self.check_operation(from)?;
        self.check_operation(to)?;
        self.setup_times.insert((machine.0, from.0, to.0), duration);
        Ok(())
    }

    /// Allows or forbids processing `op` on `machine`.
    ///
    /// Pairs never set are allowed.
    pub fn set_access(
        &mut self,
        op: OperationHandle,
        machine: MachineHandle,
        allowed: bool,
    ) -> Result<(), ModelError> {
        self.check_operation(op)?;
        self.check_machine(machine)?;
        self.access.insert((op.0, machine.0), allowed);
        Ok(())
    }

    /// Adds precedence types between `from` and `to`.
    ///
    /// Types accumulate: calling twice for the same pair keeps the union.
    pub fn add_precedence(
        &mut self,
        from: OperationHandle,
        to: OperationHandle,
        types: &[PrecedenceType],
    ) -> Result<(), ModelError> {
        self.check_operation(from)?;
        self.check_operation(to)?;
        self.precedences
            .entry((from.0, to.0))
            .or_default()
            .extend(types.iter().copied());
        Ok(())
    }

    /// Sets the scheduling horizon. Checked when compiling.
    pub fn set_horizon(&mut self, horizon: i64) {
        self.horizon = Some(horizon);
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

    /// Compiles the model into validated problem data.
    ///
    /// Missing processing times become ineligible entries, missing setup
    /// times become zero, and pairs without an access entry are allowed.
    ///
    /// # Errors
    /// - [`ModelError::UnassignedOperation`] for an operation without a job
    /// - [`ModelError::Data`] for any violated [`ProblemData`] invariant
    pub fn data(&self) -> Result<ProblemData, ModelError> {
        let num_ops = self.operations.len();
        let num_machines = self.machines.len();

        let operations = self
            .operations
            .iter()
            .enumerate()
            .map(|(idx, draft)| -> Result<Operation, ModelError> {
                let job = draft
                    .job
                    .ok_or(ModelError::UnassignedOperation { operation: idx })?;
                let op = Operation::new(job, draft.machines.clone())
                    .map_err(|e| e.at_operation(idx))?;
                Ok(match &draft.name {
                    Some(name) => op.with_name(name.clone()),
                    None => op,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut processing_times = Matrix::filled(num_ops, num_machines, None);
        for (&(op, machine), &duration) in &self.processing_times {
            processing_times.set(op, machine, Some(duration));
        }

        let access_matrix = if self.access.is_empty() {
            None
        } else {
            let mut access = Matrix::filled(num_ops, num_machines, true);
            for (&(op, machine), &allowed) in &self.access {
                access.set(op, machine, allowed);
            }
            Some(access)
        };

        let mut setup_times = Tensor3::filled(num_machines, num_ops, num_ops, 0);
        for (&(machine, from, to), &duration) in &self.setup_times {
            setup_times.set(machine, from, to, duration);
        }

        debug!(
            num_jobs = self.jobs.len(),
            num_machines,
            num_operations = num_ops,
            processing_entries = self.processing_times.len(),
            setup_entries = self.setup_times.len(),
            "compiling model"
        );

        let data = ProblemData::new(
            self.jobs.clone(),
            self.machines.clone(),
            operations,
            processing_times,
            self.precedences.clone(),
            self.horizon,
            access_matrix,
            Some(setup_times),
        )?;
        Ok(data)
    }

    /// Compiles the model and solves it with `solver`.
    ///
    /// The solver's result is returned unchanged; its errors are passed
    /// through as [`SolveError::Solver`]. An invalid `config` is rejected
    /// as [`SolveError::Config`] before the solver is called.
    pub fn solve<S: Solver>(
        &self,
        solver: &S,
        config: &SolverConfig,
    ) -> Result<SolveResult, SolveError<S::Error>> {
        config.validate()?;
        let data = self.data()?;

        info!(
            event = "solve_start",
            solver = solver.name(),
            num_jobs = data.num_jobs(),
            num_machines = data.num_machines(),
            num_operations = data.num_operations(),
            time_limit_secs = ?config.time_limit_secs
        );
        let started = Instant::now();

        let result = solver.solve(&data, config).map_err(SolveError::Solver)?;

        let elapsed_ms = started.elapsed().as_millis() as u64;
        info!(
            event = "solve_end",
            status = %result.status,
            objective = ?result.objective,
            elapsed_ms
        );
        Ok(result)
    }

    fn check_job(&self, job: JobHandle) -> Result<(), ModelError> {
        if job.0 < self.jobs.len() {
            Ok(())
        } else {
            Err(ModelError::UnknownJob {
                handle: job.0,
                count: self.jobs.len(),
            })
        }
    }

    fn check_machine(&self, machine: MachineHandle) -> Result<(), ModelError> {
        if machine.0 < self.machines.len() {
            Ok(())
        } else {
            Err(ModelError::UnknownMachine {
                handle: machine.0,
                count: self.machines.len(),
            })
        }
    }

    fn check_operation(&self, op: OperationHandle) -> Result<(), ModelError> {
        if op.0 < self.operations.len() {
            Ok(())
        } else {
            Err(ModelError::UnknownOperation {
                handle: op.0,
                count: self.operations.len(),
            })
        }
    }

    fn make_eligible(&mut self, op: OperationHandle, machine: MachineHandle) {
        let machines = &mut self.operations[op.0].machines;
        if !machines.contains(&machine.0) {
            machines.push(machine.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use crate::solver::{ConfigError, ScheduledOperation, SolveStatus};
    use std::collections::BTreeSet;
    use std::sync::Mutex;

    /// Returns a canned result and records what it was given.
    struct StubSolver {
        result: SolveResult,
        seen: Mutex<Option<ProblemData>>,
    }

    impl StubSolver {
        fn returning(result: SolveResult) -> Self {
            Self {
                result,
                seen: Mutex::new(None),
            }
        }
    }

    impl Solver for StubSolver {
        type Error = std::convert::Infallible;

        fn solve(
            &self,
            data: &ProblemData,
            _config: &SolverConfig,
        ) -> Result<SolveResult, Self::Error> {
            *self.seen.lock().unwrap() = Some(data.clone());
            Ok(self.result.clone())
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("backend crashed")]
    struct BackendError;

    struct FailingSolver;

    impl Solver for FailingSolver {
        type Error = BackendError;

        fn solve(&self, _: &ProblemData, _: &SolverConfig) -> Result<SolveResult, BackendError> {
            Err(BackendError)
        }
    }

    /// (machine, duration) per operation, per job.
    ///
    /// Reference: https://developers.google.com/optimization/scheduling/job_shop
    fn jobshop_data() -> Vec<Vec<(usize, i64)>> {
        vec![
            vec![(0, 3), (1, 2), (2, 2)],
            vec![(0, 2), (2, 1), (1, 4)],
            vec![(1, 4), (2, 3)],
            vec![(2, 3), (1, 4), (0, 8)],
            vec![(1, 3), (0, 4), (2, 2)],
            vec![(1, 3)],
        ]
    }

    fn jobshop_model() -> Model {
        let mut model = Model::new();
        let jobs_data = jobshop_data();
        let jobs: Vec<_> = jobs_data.iter().map(|_| model.add_job()).collect();
        let machines: Vec<_> = (0..3).map(|_| model.add_machine()).collect();

        for (job_idx, tasks) in jobs_data.iter().enumerate() {
            let mut ops = Vec::new();
            for &(machine_idx, _) in tasks {
                let op = model.add_operation();
                model.assign_job_operations(jobs[job_idx], &[op]).unwrap();
                model
                    .assign_machine_operations(machines[machine_idx], &[op])
                    .unwrap();
                ops.push(op);
            }

            for (idx, &(machine_idx, duration)) in tasks.iter().enumerate() {
                model
                    .add_processing_time(ops[idx], machines[machine_idx], duration)
                    .unwrap();
            }

            for pair in ops.windows(2) {
                model
                    .add_precedence(pair[0], pair[1], &[PrecedenceType::EndBeforeStart])
                    .unwrap();
            }
        }
        model
    }

    #[test]
    fn test_jobshop_compiles() {
        let data = jobshop_model().data().unwrap();

        assert_eq!(data.num_jobs(), 6);
        assert_eq!(data.num_machines(), 3);
        assert_eq!(data.num_operations(), 15);
        assert_eq!(data.precedences().len(), 9);
        assert_eq!(data.job2ops()[2], vec![6, 7]);
        assert_eq!(data.job2ops()[5], vec![14]);
        assert_eq!(data.machine2ops()[0], vec![0, 3, 10, 12]);
        assert_eq!(data.processing_time(10, 0), Some(8));
        assert_eq!(data.processing_time(10, 1), None);
    }

    #[test]
    fn test_jobshop_solve_passes_result_through() {
        let model = jobshop_model();
        let expected = SolveResult::new(SolveStatus::Optimal)
            .with_objective(20)
            .with_schedule(vec![ScheduledOperation::new(14, 1, 0, 3)]);
        let solver = StubSolver::returning(expected.clone());

        let result = model.solve(&solver, &SolverConfig::default()).unwrap();

        assert_eq!(result, expected);
        assert_eq!(result.solve_status().to_string(), "Optimal");
        assert_eq!(result.objective_value(), Some(20));

        let seen = solver.seen.lock().unwrap().take().unwrap();
        assert_eq!(seen, model.data().unwrap());
    }

    #[test]
    fn test_solver_error_passed_through() {
        let err = jobshop_model()
            .solve(&FailingSolver, &SolverConfig::default())
            .unwrap_err();
        assert!(matches!(err, SolveError::Solver(BackendError)));
        assert_eq!(err.to_string(), "solver failed: backend crashed");
    }

    #[test]
    fn test_solve_fails_before_solver_on_invalid_model() {
        let mut model = jobshop_model();
        model.set_horizon(-1);
        let solver = StubSolver::returning(SolveResult::new(SolveStatus::Optimal));

        let err = model.solve(&solver, &SolverConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            SolveError::Model(ModelError::Data(DataError::NegativeHorizon(-1)))
        ));
        assert!(solver.seen.lock().unwrap().is_none());
    }

    #[test]
    fn test_solve_rejects_invalid_time_limit() {
        let solver = StubSolver::returning(SolveResult::new(SolveStatus::Optimal));
        let mut config = SolverConfig::new();
        config.time_limit_secs = Some(-5.0);

        let err = jobshop_model().solve(&solver, &config).unwrap_err();
        assert!(matches!(err, SolveError::Config(ConfigError::Invalid(_))));
        assert!(solver.seen.lock().unwrap().is_none());
    }

    #[test]
    fn test_builder_matches_direct_construction() {
        let mut model = Model::new();
        let j0 = model.add_job_with(Job::new().with_release_date(1).with_name("J0"));
        let j1 = model.add_job();
        let m0 = model.add_machine_with(Machine::new().with_name("M0"));
        let m1 = model.add_machine();
        let o0 = model.add_operation_on(&[m0, m1]).unwrap();
        let o1 = model.add_operation();
        let o2 = model.add_operation();
        model.name_operation(o2, "last").unwrap();
        model.assign_job_operations(j0, &[o0, o1]).unwrap();
        model.assign_job_operations(j1, &[o2]).unwrap();
        model.assign_machine_operations(m1, &[o1, o2]).unwrap();
        model.add_processing_time(o0, m0, 2).unwrap();
        model.add_processing_time(o0, m1, 3).unwrap();
        model.add_processing_time(o1, m1, 1).unwrap();
        model.add_processing_time(o2, m1, 4).unwrap();
        model.add_setup_time(m1, o0, o2, 5).unwrap();
        model.set_access(o0, m1, false).unwrap();
        model
            .add_precedence(o0, o1, &[PrecedenceType::EndBeforeStart])
            .unwrap();
        model.set_horizon(50);

        let mut setup_times = Tensor3::filled(2, 3, 3, 0);
        setup_times.set(1, 0, 2, 5);
        let direct = ProblemData::new(
            vec![Job::new().with_release_date(1).with_name("J0"), Job::new()],
            vec![Machine::new().with_name("M0"), Machine::new()],
            vec![
                Operation::new(0, vec![0, 1]).unwrap(),
                Operation::new(0, vec![1]).unwrap(),
                Operation::new(1, vec![1]).unwrap().with_name("last"),
            ],
            Matrix::from_rows(vec![
                vec![Some(2), Some(3)],
                vec![None, Some(1)],
                vec![None, Some(4)],
            ])
            .unwrap(),
            Precedences::from([((0, 1), BTreeSet::from([PrecedenceType::EndBeforeStart]))]),
            Some(50),
            Some(Matrix::from_rows(vec![vec![true, false], vec![true, true], vec![true, true]]).unwrap()),
            Some(setup_times),
        )
        .unwrap();

        assert_eq!(model.data().unwrap(), direct);
    }

    #[test]
    fn test_precedence_types_accumulate() {
        let mut model = Model::new();
        let job = model.add_job();
        let machine = model.add_machine();
        let a = model.add_operation_on(&[machine]).unwrap();
        let b = model.add_operation_on(&[machine]).unwrap();
        model.assign_job_operations(job, &[a, b]).unwrap();
        model.add_processing_time(a, machine, 1).unwrap();
        model.add_processing_time(b, machine, 1).unwrap();
        model
            .add_precedence(a, b, &[PrecedenceType::EndBeforeStart])
            .unwrap();
        model
            .add_precedence(a, b, &[PrecedenceType::StartBeforeStart])
            .unwrap();

        let data = model.data().unwrap();
        assert_eq!(
            data.precedence_types(0, 1),
            Some(&BTreeSet::from([
                PrecedenceType::EndBeforeStart,
                PrecedenceType::StartBeforeStart
            ]))
        );
        assert_eq!(data.precedences().len(), 1);
    }

    #[test]
    fn test_unknown_handles_fail_at_call_site() {
        let mut model = Model::new();
        let job = model.add_job();
        let machine = model.add_machine();
        let op = model.add_operation();

        let bogus_op = OperationHandle(3);
        assert_eq!(
            model.assign_job_operations(job, &[op, bogus_op]),
            Err(ModelError::UnknownOperation {
                handle: 3,
                count: 1,
            })
        );
        // Nothing recorded for the valid handle either.
        assert_eq!(model.operations[0].job, None);

        assert_eq!(
            model.assign_machine_operations(MachineHandle(1), &[op]),
            Err(ModelError::UnknownMachine {
                handle: 1,
                count: 1,
            })
        );
        assert_eq!(
            model.assign_job_operations(JobHandle(4), &[op]),
            Err(ModelError::UnknownJob {
                handle: 4,
                count: 1,
            })
        );
        assert!(model.add_operation_on(&[machine, MachineHandle(9)]).is_err());
        assert_eq!(model.num_operations(), 1);
        assert!(model
            .add_precedence(op, bogus_op, &[PrecedenceType::EndAtEnd])
            .is_err());
        assert!(model.add_setup_time(machine, op, bogus_op, 1).is_err());
        assert!(model.set_access(bogus_op, machine, true).is_err());
        assert!(model.name_operation(bogus_op, "x").is_err());
    }

    #[test]
    fn test_processing_time_requires_eligibility() {
        let mut model = Model::new();
        let m0 = model.add_machine();
        let m1 = model.add_machine();
        let op = model.add_operation_on(&[m0]).unwrap();

        assert_eq!(
            model.add_processing_time(op, m1, 5),
            Err(ModelError::IneligibleMachine {
                operation: 0,
                machine: 1,
            })
        );
        assert!(model.add_processing_time(op, m0, 5).is_ok());
    }

    #[test]
    fn test_operation_belongs_to_one_job() {
        let mut model = Model::new();
        let j0 = model.add_job();
        let j1 = model.add_job();
        let op = model.add_operation();

        model.assign_job_operations(j0, &[op]).unwrap();
        model.assign_job_operations(j0, &[op]).unwrap();
        assert_eq!(
            model.assign_job_operations(j1, &[op]),
            Err(ModelError::OperationAlreadyAssigned {
                operation: 0,
                job: 1,
                assigned: 0,
            })
        );
    }

    #[test]
    fn test_machine_assignment_is_deduplicated() {
        let mut model = Model::new();
        let job = model.add_job();
        let m = model.add_machine();
        let op = model.add_operation_on(&[m]).unwrap();
        model.assign_machine_operations(m, &[op, op]).unwrap();
        model.assign_job_operations(job, &[op]).unwrap();
        model.add_processing_time(op, m, 1).unwrap();

        let data = model.data().unwrap();
        assert_eq!(data.operations()[0].machines(), &[0]);
        assert_eq!(data.machine2ops(), &[vec![0]]);
    }

    #[test]
    fn test_whole_model_checks_at_compile_time() {
        let mut model = Model::new();
        let job = model.add_job();
        let m = model.add_machine();
        let op = model.add_operation();

        assert_eq!(
            model.data(),
            Err(ModelError::UnassignedOperation { operation: 0 })
        );

        model.assign_job_operations(job, &[op]).unwrap();
        assert_eq!(
            model.data(),
            Err(ModelError::Data(DataError::NoEligibleMachines {
                operation: Some(0),
            }))
        );

        model.assign_machine_operations(m, &[op]).unwrap();
        assert_eq!(
            model.data(),
            Err(ModelError::Data(DataError::MissingProcessingTime {
                operation: 0,
                machine: 0,
            }))
        );

        model.add_processing_time(op, m, -2).unwrap();
        assert!(matches!(
            model.data(),
            Err(ModelError::Data(DataError::NegativeProcessingTime { value: -2, .. }))
        ));

        model.add_processing_time(op, m, 2).unwrap();
        let data = model.data().unwrap();
        assert_eq!(data.processing_time(0, 0), Some(2));
        assert_eq!(data.horizon(), crate::MAX_VALUE);
    }

    #[test]
    fn test_empty_model() {
        let data = Model::new().data().unwrap();
        assert_eq!(data.num_operations(), 0);
        assert_eq!(data.setup_times().shape(), (0, 0, 0));
    }
}
