use crate::data::{Duration, Instance, Profit, Time};
use std::cmp;
use std::convert::TryFrom;
use std::error::Error;

// Format: first line is the job count, then one "deadline profit duration" line per job.
// A negative deadline is read as 0, so that job can never run.
pub fn parse_instance(instance: &str) -> Result<Instance, Box<dyn Error>> {
  let mut lines = instance.lines().filter(|line| !line.trim().is_empty());

  let prelude = lines.next().ok_or("Prelude missing")?;
  let n_jobs: usize = prelude
    .split_whitespace()
    .next()
    .ok_or("n_jobs missing")?
    .parse()?;

  let mut deadlines: Vec<Time> = Vec::with_capacity(n_jobs);
  let mut profits: Vec<Profit> = Vec::with_capacity(n_jobs);
  let mut durations: Vec<Duration> = Vec::with_capacity(n_jobs);

  for (job, line) in lines.enumerate() {
    let items: Vec<&str> = line.split_whitespace().collect();
    if items.len() != 3 {
      Err(format!(
        "Job {} should have 3 values (deadline profit duration) but has {}",
        job,
        items.len()
      ))?;
    }

    let deadline: i128 = items[0].parse()?;
    deadlines.push(Time::try_from(cmp::max(deadline, 0))?);
    profits.push(items[1].parse()?);
    durations.push(items[2].parse()?);
  }

  if deadlines.len() != n_jobs {
    Err(format!(
      "Expected {} jobs but found {}",
      n_jobs,
      deadlines.len()
    ))?;
  }

  let instance = Instance::new(deadlines, profits, durations)?;

  Ok(instance)
}
