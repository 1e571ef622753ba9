use crate::data::{Instance, InstanceError, Profit, Schedule};
use crate::solver::calculate_profit;
use crate::solver::construction::build_schedule;
use crate::solver::pheromone::{heuristic_values, PheromoneMatrix};
use log::{debug, info};
use ndarray::Array1;
use rand::SeedableRng;

#[derive(Debug, Clone)]
pub struct Config {
  pub ants_count: usize,
  pub max_iterations: usize,
  pub evaporation_rate: f64,
  // Weight of the learned trail
  pub alpha: f64,
  // Weight of the profit density
  pub beta: f64,
  pub seed: u64,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      ants_count: 100,
      max_iterations: 1000,
      evaporation_rate: 0.5,
      alpha: 1.0,
      beta: 1.0,
      seed: 0,
    }
  }
}

impl Config {
  pub fn validate(&self) -> Result<(), InstanceError> {
    if self.ants_count == 0 {
      return Err(InstanceError::InvalidParameter(
        "ants_count must be at least 1".to_string(),
      ));
    }
    if !(0.0..=1.0).contains(&self.evaporation_rate) {
      return Err(InstanceError::InvalidParameter(format!(
        "evaporation_rate must be in [0, 1] but is {}",
        self.evaporation_rate
      )));
    }
    for &(name, value) in &[("alpha", self.alpha), ("beta", self.beta)] {
      if !value.is_finite() || value < 0.0 {
        return Err(InstanceError::InvalidParameter(format!(
          "{} must be a nonnegative number but is {}",
          name, value
        )));
      }
    }

    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BestSolution {
  pub schedule: Schedule,
  pub profit: Profit,
}

/// Iterated ant colony over a fixed instance. Every iteration builds
/// `ants_count` schedules from the current trail, reinforces the trail with
/// the whole population and keeps the most profitable schedule seen so far.
pub struct Colony {
  inst: Instance,
  config: Config,
  rng: rand_chacha::ChaChaRng,
  heuristic: Array1<f64>,
  pheromone: PheromoneMatrix,
  best: BestSolution,
  iteration: usize,
}

impl Colony {
  pub fn new(inst: &Instance, config: &Config) -> Result<Self, InstanceError> {
    config.validate()?;

    let n = inst.n_jobs();

    Ok(Self {
      inst: inst.clone(),
      config: config.clone(),
      rng: rand_chacha::ChaChaRng::seed_from_u64(config.seed),
      heuristic: heuristic_values(inst),
      pheromone: PheromoneMatrix::new(n),
      best: BestSolution {
        schedule: vec![None; n],
        profit: 0,
      },
      iteration: 0,
    })
  }

  /// Runs one iteration and returns the best profit among its ants.
  pub fn step(&mut self) -> Profit {
    let mut population = Vec::with_capacity(self.config.ants_count);
    for _ in 0..self.config.ants_count {
      population.push(build_schedule(
        &self.inst,
        &self.pheromone,
        &self.heuristic,
        self.config.alpha,
        self.config.beta,
        &mut self.rng,
      ));
    }

    self
      .pheromone
      .update(&population, &self.heuristic, self.config.evaporation_rate);

    self.iteration += 1;

    let mut iteration_best = 0;
    for schedule in population {
      let profit = calculate_profit(&self.inst, &schedule);
      iteration_best = std::cmp::max(iteration_best, profit);

      // Ties keep the earlier schedule
      if profit > self.best.profit {
        debug!(
          "Improved best to {} (iteration {})",
          profit, self.iteration
        );
        self.best = BestSolution {
          schedule: schedule,
          profit: profit,
        };
      }
    }

    return iteration_best;
  }

  pub fn run(&mut self) -> &BestSolution {
    info!(
      "Starting colony of {} ants for {} iterations on {} jobs",
      self.config.ants_count,
      self.config.max_iterations,
      self.inst.n_jobs()
    );

    while self.iteration < self.config.max_iterations {
      self.step();
    }

    info!(
      "Stopping after {} iterations at {}",
      self.iteration, self.best.profit
    );

    return &self.best;
  }

  pub fn best(&self) -> &BestSolution {
    return &self.best;
  }

  pub fn best_schedule(&self) -> &Schedule {
    return &self.best.schedule;
  }

  pub fn best_profit(&self) -> Profit {
    return self.best.profit;
  }

  pub fn iterations(&self) -> usize {
    return self.iteration;
  }

  pub fn pheromone(&self) -> &PheromoneMatrix {
    return &self.pheromone;
  }
}

pub fn find_solution(inst: &Instance, config: &Config) -> Result<BestSolution, InstanceError> {
  let mut colony = Colony::new(inst, config)?;
  colony.run();

  return Ok(colony.best().clone());
}
