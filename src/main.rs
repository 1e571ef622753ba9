#[macro_use]
extern crate log;

use clap::{App, Arg, ArgMatches};
use sequencing::parser::parse_instance;
use sequencing::solver::ant_colony::{self, Config};
use sequencing::solver::{print_solution, verify_solution};
use std::fs;
use std::str::FromStr;

fn parse_or<T: FromStr>(matches: &ArgMatches, name: &str, default: T) -> T {
  return match matches.value_of(name) {
    Some(value) => value
      .parse()
      .unwrap_or_else(|_| panic!("Invalid value for --{}: {}", name, value)),
    None => default,
  };
}

fn main() {
  env_logger::init();

  let matches = App::new("sequencing")
    .version("1.0")
    .about("Ant colony optimization for job sequencing with deadlines")
    .arg(
      Arg::with_name("instance")
        .long("instance")
        .help("Instance file name")
        .takes_value(true)
        .required(true),
    )
    .arg(
      Arg::with_name("seed")
        .long("seed")
        .help("Seed for rng")
        .takes_value(true),
    )
    .arg(
      Arg::with_name("ants")
        .long("ants")
        .help("Number of ants per iteration")
        .takes_value(true),
    )
    .arg(
      Arg::with_name("iterations")
        .long("iterations")
        .help("Number of iterations to run")
        .takes_value(true),
    )
    .arg(
      Arg::with_name("evaporation-rate")
        .long("evaporation-rate")
        .help("Fraction of pheromone evaporated per iteration, in [0, 1]")
        .takes_value(true),
    )
    .arg(
      Arg::with_name("alpha")
        .long("alpha")
        .help("Pheromone exponent")
        .takes_value(true),
    )
    .arg(
      Arg::with_name("beta")
        .long("beta")
        .help("Profit density exponent")
        .takes_value(true),
    )
    .get_matches();

  let file = matches.value_of("instance").expect("Missing instance file");
  let defaults = Config::default();
  let config = Config {
    ants_count: parse_or(&matches, "ants", defaults.ants_count),
    max_iterations: parse_or(&matches, "iterations", defaults.max_iterations),
    evaporation_rate: parse_or(&matches, "evaporation-rate", defaults.evaporation_rate),
    alpha: parse_or(&matches, "alpha", defaults.alpha),
    beta: parse_or(&matches, "beta", defaults.beta),
    seed: parse_or(&matches, "seed", defaults.seed),
  };
  debug!("Using {:?}", config);

  let contents = fs::read_to_string(file).expect("Error reading file");
  let instance = parse_instance(&contents).expect("Error parsing file");

  let solution = ant_colony::find_solution(&instance, &config).expect("Invalid configuration");
  verify_solution(&instance, &solution).expect("Verification failed");

  print_solution(&solution.schedule, solution.profit);
}
