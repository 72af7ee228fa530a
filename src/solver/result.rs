//! Solve result model.
//!
//! What a solver adapter hands back: a status, an objective value and the
//! per-operation schedule. Operations and machines are referenced by the
//! same indices as in the [`ProblemData`](crate::ProblemData) that was
//! solved.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Outcome of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveStatus {
    /// A schedule was found and proven optimal.
    Optimal,
    /// A schedule was found, optimality not proven.
    Feasible,
    /// The problem has no feasible schedule.
    Infeasible,
    /// The time limit was reached without a schedule.
    TimeLimit,
    Unknown,
}

impl SolveStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::Feasible => "Feasible",
            Self::Infeasible => "Infeasible",
            Self::TimeLimit => "TimeLimit",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether this status comes with a schedule.
    pub fn has_solution(self) -> bool {
        matches!(self, Self::Optimal | Self::Feasible)
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement of one operation in a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledOperation {
    pub operation: usize,
    /// Machine chosen among the operation's eligible machines.
    pub machine: usize,
    pub start: i64,
    pub end: i64,
}

impl ScheduledOperation {
    pub fn new(operation: usize, machine: usize, start: i64, end: i64) -> Self {
        Self {
            operation,
            machine,
            start,
            end,
        }
    }

    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Result returned by a [`Solver`](super::Solver).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    pub status: SolveStatus,
    /// Objective value, meaningful only when `status` has a solution.
    pub objective: Option<i64>,
    pub schedule: Vec<ScheduledOperation>,
    /// Wall-clock time spent in the solver.
    pub runtime: Duration,
}

impl SolveResult {
    /// A result with a status and no schedule.
    pub fn new(status: SolveStatus) -> Self {
        Self {
            status,
            objective: None,
            schedule: Vec::new(),
            runtime: Duration::ZERO,
        }
    }

    pub fn with_objective(mut self, objective: i64) -> Self {
        self.objective = Some(objective);
        self
    }

    pub fn with_schedule(mut self, schedule: Vec<ScheduledOperation>) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_runtime(mut self, runtime: Duration) -> Self {
        self.runtime = runtime;
        self
    }

    #[inline]
    pub fn solve_status(&self) -> SolveStatus {
        self.status
    }

    /// Objective value, `None` unless the status has a solution.
    pub fn objective_value(&self) -> Option<i64> {
        if self.status.has_solution() {
            self.objective
        } else {
            None
        }
    }

    #[inline]
    pub fn has_solution(&self) -> bool {
        self.status.has_solution()
    }

    /// Latest end time across the schedule.
    pub fn makespan(&self) -> i64 {
        self.schedule.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Placement of `operation`, if scheduled.
    pub fn scheduled(&self, operation: usize) -> Option<&ScheduledOperation> {
        self.schedule.iter().find(|s| s.operation == operation)
    }

    /// Operations placed on `machine`, ordered by start time.
    pub fn for_machine(&self, machine: usize) -> Vec<&ScheduledOperation> {
        let mut ops: Vec<_> = self
            .schedule
            .iter()
            .filter(|s| s.machine == machine)
            .collect();
        ops.sort_by_key(|s| (s.start, s.operation));
        ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SolveResult {
        SolveResult::new(SolveStatus::Feasible)
            .with_objective(9)
            .with_schedule(vec![
                ScheduledOperation::new(0, 1, 4, 9),
                ScheduledOperation::new(1, 0, 0, 3),
                ScheduledOperation::new(2, 1, 0, 4),
            ])
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SolveStatus::Optimal.to_string(), "Optimal");
        assert_eq!(SolveStatus::TimeLimit.to_string(), "TimeLimit");
        assert!(SolveStatus::Feasible.has_solution());
        assert!(!SolveStatus::Infeasible.has_solution());
    }

    #[test]
    fn test_objective_hidden_without_solution() {
        let r = SolveResult::new(SolveStatus::Infeasible).with_objective(5);
        assert_eq!(r.objective_value(), None);
        assert_eq!(sample().objective_value(), Some(9));
    }

    #[test]
    fn test_schedule_queries() {
        let r = sample();
        assert_eq!(r.makespan(), 9);
        assert_eq!(r.scheduled(1).map(|s| s.duration()), Some(3));
        assert!(r.scheduled(7).is_none());

        let m1: Vec<_> = r.for_machine(1).iter().map(|s| s.operation).collect();
        assert_eq!(m1, vec![2, 0]);
    }

    #[test]
    fn test_empty_schedule() {
        let r = SolveResult::new(SolveStatus::Unknown);
        assert_eq!(r.makespan(), 0);
        assert!(!r.has_solution());
    }
}
