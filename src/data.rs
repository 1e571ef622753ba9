use ndarray::Array1;
use thiserror::Error;

pub type JobId = usize;
pub type Duration = u64;
pub type Time = u64;
pub type Profit = u64;

// A position in a schedule, None if no feasible job was left for it
pub type Slot = Option<JobId>;
pub type Schedule = Vec<Slot>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstanceError {
  #[error(
    "Invalid input: got {deadlines} deadlines, {profits} profits and {durations} durations"
  )]
  InvalidInput {
    deadlines: usize,
    profits: usize,
    durations: usize,
  },
  #[error("Invalid input: job {job} has zero duration")]
  ZeroDuration { job: JobId },
  #[error("Invalid input: total profit does not fit in 64 bits")]
  ProfitOverflow,
  #[error("Invalid parameter: {0}")]
  InvalidParameter(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
  pub deadline: Time,
  pub profit: Profit,
  pub duration: Duration,
}

#[derive(Debug, Clone)]
pub struct Instance {
  pub n_jobs: usize,

  pub deadlines: Array1<Time>,
  pub profits: Array1<Profit>,
  pub durations: Array1<Duration>,
}

impl Instance {
  pub fn new(
    deadlines: Vec<Time>,
    profits: Vec<Profit>,
    durations: Vec<Duration>,
  ) -> Result<Self, InstanceError> {
    if deadlines.len() != profits.len() || deadlines.len() != durations.len() {
      return Err(InstanceError::InvalidInput {
        deadlines: deadlines.len(),
        profits: profits.len(),
        durations: durations.len(),
      });
    }

    if let Some(job) = durations.iter().position(|&d| d == 0) {
      return Err(InstanceError::ZeroDuration { job: job });
    }

    // Any selection of jobs then has a representable profit
    if profits
      .iter()
      .try_fold(0 as Profit, |total, &profit| total.checked_add(profit))
      .is_none()
    {
      return Err(InstanceError::ProfitOverflow);
    }

    return Ok(Instance {
      n_jobs: deadlines.len(),
      deadlines: Array1::from(deadlines),
      profits: Array1::from(profits),
      durations: Array1::from(durations),
    });
  }

  pub fn n_jobs(&self) -> usize {
    return self.n_jobs;
  }

  pub fn job(&self, id: JobId) -> Job {
    return Job {
      deadline: self.deadlines[id],
      profit: self.profits[id],
      duration: self.durations[id],
    };
  }

  pub fn job_ids(&self) -> std::ops::Range<JobId> {
    return 0..self.n_jobs;
  }

  // Whether job fits before its deadline when started at the given time
  pub fn is_feasible_at(&self, id: JobId, start: Time) -> bool {
    let job = self.job(id);

    return start
      .checked_add(job.duration)
      .map_or(false, |end| end <= job.deadline);
  }
}
