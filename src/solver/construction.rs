use crate::data::{Instance, JobId, Schedule, Time};
use crate::solver::pheromone::PheromoneMatrix;
use log::trace;
use ndarray::Array1;
use rand::Rng;

/// Builds one ant's schedule position by position. At every position each
/// unused job that still meets its deadline is weighted with
/// `pheromone^alpha * heuristic^beta` and one is drawn by roulette wheel.
/// Positions for which no such job is left stay unassigned.
pub fn build_schedule<R: Rng>(
  inst: &Instance,
  pheromone: &PheromoneMatrix,
  heuristic: &Array1<f64>,
  alpha: f64,
  beta: f64,
  rng: &mut R,
) -> Schedule {
  let n = inst.n_jobs();
  let mut schedule = vec![None; n];
  let mut used = Array1::<bool>::from_elem(n, false);
  let mut desirability = Array1::<f64>::zeros(n);
  let mut current_time: Time = 0;

  for t in 0..n {
    let mut max_log_weight = f64::NEG_INFINITY;
    for j in inst.job_ids() {
      desirability[j] = if !used[j] && inst.is_feasible_at(j, current_time) {
        log_weight(pheromone.get(t, j), alpha) + log_weight(heuristic[j], beta)
      } else {
        f64::NEG_INFINITY
      };
      max_log_weight = f64::max(max_log_weight, desirability[j]);
    }

    if max_log_weight == f64::NEG_INFINITY {
      // Time and used set no longer change, so every later position is empty too
      trace!(
        "No feasible job left at position {} (time {}), leaving {} positions unassigned",
        t,
        current_time,
        n - t
      );
      break;
    }

    // Relative to the heaviest candidate, so the sum lies in [1, n]
    desirability.mapv_inplace(|w| (w - max_log_weight).exp());
    let sum = desirability.sum();

    let r = rng.gen_range(0.0, sum);
    let chosen = select(&desirability, r);
    used[chosen] = true;
    current_time += inst.durations[chosen];
    schedule[t] = Some(chosen);
  }

  trace!("Built schedule {:?}", schedule);

  return schedule;
}

// ln(value^exponent), with 0^0 = 1 and 0^x = 0 otherwise
fn log_weight(value: f64, exponent: f64) -> f64 {
  if exponent == 0.0 {
    return 0.0;
  }

  return exponent * value.ln();
}

// First job whose accumulated weight reaches r, falling back to the last
// weighted job if rounding keeps the total just below r
fn select(desirability: &Array1<f64>, r: f64) -> JobId {
  let mut accumulated = 0.0;
  let mut last = 0;
  for (j, &weight) in desirability.iter().enumerate() {
    if weight > 0.0 {
      accumulated += weight;
      last = j;
      if accumulated >= r {
        return j;
      }
    }
  }

  return last;
}
