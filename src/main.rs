// src/main.rs

use std::collections::BTreeMap;
use std::env;
use std::process;
use env_logger::Env;
use log::{debug, error, info};
use num::complex::Complex;
use sparse_poly::config::PolyConfig;
use sparse_poly::polynomial::serialization::to_json;
use sparse_poly::Polynomial;

const USAGE: &str = "Usage: sparse-poly [--config <path>] [--point <value>] [--var <name>]";

#[derive(Debug, Default)]
struct DemoArgs {
    config_path: Option<String>,
    point: Option<f64>,
    variable: Option<String>,
}

fn parse_args(args: &[String]) -> Result<DemoArgs, String> {
    let mut parsed = DemoArgs::default();
    let mut iter = args.iter().skip(1);

    while let Some(flag) = iter.next() {
        let mut value = || iter.next().ok_or_else(|| format!("Missing value for {}", flag));
        match flag.as_str() {
            "--config" => parsed.config_path = Some(value()?.clone()),
            "--point" => {
                let raw = value()?;
                let point = raw
                    .parse::<f64>()
                    .map_err(|e| format!("Invalid evaluation point '{}': {}", raw, e))?;
                parsed.point = Some(point);
            }
            "--var" => parsed.variable = Some(value()?.clone()),
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(parsed)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let demo_args = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    let loaded = match &demo_args.config_path {
        Some(path) => PolyConfig::load_from_file(path),
        None => PolyConfig::load(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };
    if let Some(point) = demo_args.point {
        config.demo.evaluation_point = point;
    }
    if let Some(variable) = demo_args.variable {
        config.variable_name = variable;
    }

    // Initialize the logger
    let env = Env::default()
        .filter_or("SPARSE_POLY_LOG", config.log_level.as_str())
        .write_style_or("SPARSE_POLY_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    debug!("Loaded configuration: {:?}", config);
    run_demo(&config);
}

fn run_demo(config: &PolyConfig) {
    let var = config.variable_name.as_str();

    let terms: BTreeMap<usize, f32> = BTreeMap::from([(0, -1.0), (3, 1.0)]);
    let f: Polynomial<f32> = Polynomial::from(terms);
    println!("f({}) = {}", var, f.with_variable(var));
    println!("f'({}) = {}", var, f.differentiate().with_variable(var));

    let x = Polynomial::<f32>::x();
    let g = 4.5 * &x * &x - 7.1 * &x + 0.5;
    println!("g({}) = {}", var, g.with_variable(var));

    let mut derivative = g.clone();
    let mut primes = String::new();
    for _ in 0..config.demo.max_derivative_order {
        derivative = derivative.differentiate();
        primes.push('\'');
        println!("g{}({}) = {}", primes, var, derivative.with_variable(var));
    }

    let point = config.demo.evaluation_point;
    info!("Evaluating g at {}", point);
    println!("g({}) = {}", point, g.evaluate(&point));

    let z = Polynomial::<Complex<f64>>::x();
    let h = &z * &z + Complex::new(1.0, 0.0);
    let i = Complex::new(0.0, 1.0);
    println!("h({}) = {}", var, h.with_variable(var));
    println!("h({}) = {}", i, h.evaluate(&i));

    match to_json(&g) {
        Ok(json) => println!("g as JSON: {}", json),
        Err(e) => error!("Failed to serialize g: {}", e),
    }
}
