pub mod ant_colony;
pub mod construction;
pub mod pheromone;

use crate::data::{Instance, JobId, Profit, Schedule, Time};
use crate::solver::ant_colony::BestSolution;
use itertools::Itertools;
use std::error::Error;

// Jobs of the schedule that actually run, with their start times. A job that
// would miss its deadline at its turn is dropped without consuming time.
pub fn counted_jobs(inst: &Instance, schedule: &Schedule) -> Vec<(JobId, Time)> {
  let mut counted = Vec::new();
  let mut current_time: Time = 0;

  for &job in schedule.iter().flatten() {
    if inst.is_feasible_at(job, current_time) {
      counted.push((job, current_time));
      current_time += inst.durations[job];
    }
  }

  return counted;
}

pub fn calculate_profit(inst: &Instance, schedule: &Schedule) -> Profit {
  // Saturates only for schedules repeating a job
  return counted_jobs(inst, schedule)
    .iter()
    .fold(0, |total: Profit, &(job, _)| {
      total.saturating_add(inst.profits[job])
    });
}

pub fn verify_schedule(inst: &Instance, schedule: &Schedule) -> Result<(), Box<dyn Error>> {
  // Check:
  // 1. One slot per job
  // 2. Every job index is valid and appears at most once
  // 3. Every counted job finishes before its deadline

  if schedule.len() != inst.n_jobs {
    Err(format!(
      "Schedule has {} positions for {} jobs",
      schedule.len(),
      inst.n_jobs
    ))?;
  }

  let mut seen = vec![false; inst.n_jobs];
  for (position, &job) in schedule.iter().enumerate() {
    if let Some(job) = job {
      if job >= inst.n_jobs {
        Err(format!("Unknown job {} at position {}", job, position))?;
      }
      if seen[job] {
        Err(format!("Job {} scheduled twice (position {})", job, position))?;
      }
      seen[job] = true;
    }
  }

  for (id, start) in counted_jobs(inst, schedule) {
    let job = inst.job(id);
    match start.checked_add(job.duration) {
      Some(end) if end <= job.deadline => {}
      end => Err(format!(
        "Deadline violation for job {} - [{}, {:?}] with deadline {}",
        id, start, end, job.deadline
      ))?,
    }
  }

  Ok(())
}

// Checks the schedule and that re-evaluating it reproduces the reported profit
pub fn verify_solution(inst: &Instance, solution: &BestSolution) -> Result<(), Box<dyn Error>> {
  verify_schedule(inst, &solution.schedule)?;

  let profit = calculate_profit(inst, &solution.schedule);
  if profit != solution.profit {
    Err(format!(
      "Schedule earns {} but reported profit is {}",
      profit, solution.profit
    ))?;
  }

  Ok(())
}

pub fn format_schedule(schedule: &Schedule) -> String {
  return schedule
    .iter()
    .map(|slot| match slot {
      Some(job) => job.to_string(),
      None => "_".to_string(),
    })
    .join(",");
}

pub fn print_solution(schedule: &Schedule, profit: Profit) {
  println!("{}", format_schedule(schedule));
  println!("{}", profit);
}

#[cfg(test)]
mod tests {
  use super::*;

  fn example() -> Instance {
    Instance::new(
      vec![2, 1, 2, 1, 3],
      vec![100, 19, 27, 25, 15],
      vec![1, 1, 1, 1, 1],
    )
    .unwrap()
  }

  #[test]
  fn profit_counts_jobs_meeting_deadlines() {
    let inst = example();

    assert_eq!(
      calculate_profit(&inst, &vec![Some(0), Some(2), Some(4), None, None]),
      142
    );
    assert_eq!(
      calculate_profit(&inst, &vec![Some(2), Some(0), Some(4), None, None]),
      142
    );
  }

  #[test]
  fn late_jobs_are_dropped_without_consuming_time() {
    let inst = example();
    // Job 1 is late at time 1 and job 3 as well, job 4 then still starts at 2
    let schedule = vec![Some(0), Some(1), Some(2), Some(3), Some(4)];

    assert_eq!(calculate_profit(&inst, &schedule), 142);
    assert_eq!(counted_jobs(&inst, &schedule), vec![(0, 0), (2, 1), (4, 2)]);
  }

  #[test]
  fn unassigned_slots_are_skipped() {
    let inst = example();

    assert_eq!(calculate_profit(&inst, &vec![None; 5]), 0);
    assert_eq!(
      calculate_profit(&inst, &vec![None, Some(3), None, Some(4), None]),
      40
    );
  }

  #[test]
  fn huge_durations_are_dropped_instead_of_wrapping() {
    let inst = Instance::new(
      vec![Time::max_value(), 5],
      vec![10, 10],
      vec![Time::max_value(), 1],
    )
    .unwrap();
    let schedule = vec![Some(0), Some(1)];

    // Job 1 would end past the largest time after job 0
    assert_eq!(calculate_profit(&inst, &schedule), 10);
    assert_eq!(counted_jobs(&inst, &schedule), vec![(0, 0)]);
    assert!(verify_schedule(&inst, &schedule).is_ok());
    assert_eq!(calculate_profit(&inst, &vec![Some(1), Some(0)]), 10);
  }

  #[test]
  fn verifies_valid_schedule() {
    let inst = example();

    assert!(verify_schedule(&inst, &vec![Some(3), Some(0), Some(4), None, None]).is_ok());
    assert!(verify_schedule(&inst, &vec![None; 5]).is_ok());
  }

  #[test]
  fn rejects_duplicate_jobs() {
    let inst = example();

    assert!(verify_schedule(&inst, &vec![Some(0), Some(0), None, None, None]).is_err());
  }

  #[test]
  fn rejects_unknown_jobs_and_wrong_length() {
    let inst = example();

    assert!(verify_schedule(&inst, &vec![Some(9), None, None, None, None]).is_err());
    assert!(verify_schedule(&inst, &vec![Some(0)]).is_err());
  }

  #[test]
  fn rejects_misreported_profit() {
    let inst = example();
    let schedule = vec![Some(0), Some(2), None, None, None];

    let honest = BestSolution {
      schedule: schedule.clone(),
      profit: 127,
    };
    let inflated = BestSolution {
      schedule: schedule,
      profit: 142,
    };

    assert!(verify_solution(&inst, &honest).is_ok());
    assert!(verify_solution(&inst, &inflated).is_err());
  }

  #[test]
  fn formats_schedule_comma_joined() {
    assert_eq!(format_schedule(&vec![Some(2), Some(0), None]), "2,0,_");
    assert_eq!(format_schedule(&vec![]), "");
  }
}
