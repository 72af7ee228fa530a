//! Job model.
//!
//! A job is a unit of work composed of one or more operations. It carries
//! the time window in which its operations may be processed.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

/// A job to be scheduled.
///
/// Operations refer to their job by position, so a job does not list its
/// operations itself. See [`ProblemData::job2ops`](crate::ProblemData::job2ops).
///
/// # Time Representation
/// Times are integer units relative to a scheduling epoch (t=0). The
/// consumer defines what one unit and t=0 mean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    release_date: i64,
    deadline: Option<i64>,
    name: Option<String>,
}

impl Job {
    /// Creates a job released at t=0 with no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the release date (earliest start time).
    pub fn with_release_date(mut self, release_date: i64) -> Self {
        self.release_date = release_date;
        self
    }

    /// Sets the deadline (latest completion time).
    pub fn with_deadline(mut self, deadline: i64) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the job name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Earliest start time of the job's operations.
    #[inline]
    pub fn release_date(&self) -> i64 {
        self.release_date
    }

    /// Latest completion time. `None` = unconstrained.
    #[inline]
    pub fn deadline(&self) -> Option<i64> {
        self.deadline
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_defaults() {
        let job = Job::new();
        assert_eq!(job.release_date(), 0);
        assert_eq!(job.deadline(), None);
        assert_eq!(job.name(), None);
    }

    #[test]
    fn test_job_builder() {
        let job = Job::new()
            .with_release_date(5)
            .with_deadline(10)
            .with_name("test");

        assert_eq!(job.release_date(), 5);
        assert_eq!(job.deadline(), Some(10));
        assert_eq!(job.name(), Some("test"));
    }
}
