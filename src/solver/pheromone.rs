use crate::data::{Instance, JobId, Schedule};
use ndarray::{Array1, Array2};

// Static desirability of each job (profit density), independent of position
pub fn heuristic_values(inst: &Instance) -> Array1<f64> {
  return inst
    .job_ids()
    .map(|j| inst.profits[j] as f64 / inst.durations[j] as f64)
    .collect();
}

/// Learned desirability of placing a job at a position, indexed `[[position, job]]`.
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
  values: Array2<f64>,
}

impl PheromoneMatrix {
  pub fn new(n_jobs: usize) -> Self {
    let initial = 1.0 / n_jobs as f64;

    Self {
      values: Array2::from_elem((n_jobs, n_jobs), initial),
    }
  }

  pub fn get(&self, position: usize, job: JobId) -> f64 {
    return self.values[[position, job]];
  }

  pub fn values(&self) -> &Array2<f64> {
    return &self.values;
  }

  /// Evaporates the old trail and deposits the heuristic value of every job
  /// once for each ant that placed it at a position. Deposits are summed over
  /// the population, not averaged.
  pub fn update(&mut self, population: &[Schedule], heuristic: &Array1<f64>, evaporation_rate: f64) {
    let mut delta = Array2::<f64>::zeros(self.values.dim());

    for schedule in population {
      for (position, slot) in schedule.iter().enumerate() {
        if let Some(job) = *slot {
          delta[[position, job]] += heuristic[job];
        }
      }
    }

    self.values *= 1.0 - evaporation_rate;
    self.values += &delta;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn instance() -> Instance {
    Instance::new(vec![2, 1, 3], vec![100, 19, 30], vec![1, 1, 2]).unwrap()
  }

  #[test]
  fn heuristic_is_profit_density() {
    let heuristic = heuristic_values(&instance());

    assert_eq!(heuristic.to_vec(), vec![100.0, 19.0, 15.0]);
  }

  #[test]
  fn initialised_uniformly() {
    let pheromone = PheromoneMatrix::new(4);

    assert_eq!(pheromone.values().dim(), (4, 4));
    assert!(pheromone.values().iter().all(|&v| v == 0.25));
  }

  #[test]
  fn update_evaporates_and_sums_deposits() {
    let inst = instance();
    let heuristic = heuristic_values(&inst);
    let mut pheromone = PheromoneMatrix::new(3);
    let initial = 1.0 / 3.0;

    let population = vec![
      vec![Some(0), Some(2), None],
      vec![Some(0), Some(1), Some(2)],
    ];
    pheromone.update(&population, &heuristic, 0.5);

    // Both ants placed job 0 first
    assert_eq!(pheromone.get(0, 0), 0.5 * initial + 200.0);
    assert_eq!(pheromone.get(0, 1), 0.5 * initial);
    assert_eq!(pheromone.get(1, 2), 0.5 * initial + 15.0);
    assert_eq!(pheromone.get(1, 1), 0.5 * initial + 19.0);
    assert_eq!(pheromone.get(2, 2), 0.5 * initial + 15.0);
    // Unassigned slots deposit nothing
    assert_eq!(pheromone.get(2, 0), 0.5 * initial);
  }

  #[test]
  fn full_evaporation_keeps_only_deposits() {
    let inst = instance();
    let heuristic = heuristic_values(&inst);
    let mut pheromone = PheromoneMatrix::new(3);

    pheromone.update(&[vec![Some(1), Some(0), Some(2)]], &heuristic, 1.0);

    assert_eq!(pheromone.get(0, 1), 19.0);
    assert_eq!(pheromone.get(0, 0), 0.0);
    assert_eq!(pheromone.get(1, 0), 100.0);
  }

  #[test]
  fn entries_stay_nonnegative() {
    let inst = instance();
    let heuristic = heuristic_values(&inst);
    let mut pheromone = PheromoneMatrix::new(3);

    for round in 0..50 {
      let rate = (round % 11) as f64 / 10.0;
      let population = vec![vec![Some(round % 3), None, None]];
      pheromone.update(&population, &heuristic, rate);
      assert!(pheromone.values().iter().all(|&v| v >= 0.0));
    }
  }
}
