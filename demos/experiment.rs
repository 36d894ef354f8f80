use gaussel::experiment::{ExperimentConfig, render_table, run};
use gaussel::io::read_matrix_interactive;
use gaussel::solver::{GaussSolver, LinearSolver};
use gaussel::Vector;
use std::io::{self, BufRead, Write};

// Usage:
//   cargo run --example experiment             accuracy sweep over 2..256
//   cargo run --example experiment -- --seed 7 reproducible sweep
//   cargo run --example experiment -- solve    read A and b from stdin and solve
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let threads = gaussel::parallel::init_pool(None);
    log::info!("using {threads} threads");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("solve") {
        return solve_from_stdin();
    }

    let mut config = ExperimentConfig::default();
    if let Some(pos) = args.iter().position(|a| a == "--seed") {
        let seed = args.get(pos + 1).ok_or("--seed needs a value")?;
        config.seed = Some(seed.parse()?);
    }
    let rows = run::<f64, _>(&config, &mut config.rng())?;
    println!("{}", render_table(&rows));
    Ok(())
}

fn solve_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let a = read_matrix_interactive::<f64, _, _>(&mut input, &mut out)?;
    write!(out, "Enter the right-hand side ({} values): ", a.rows())?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let values = line
        .split_whitespace()
        .map(str::parse::<f64>)
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() != a.rows() {
        return Err(format!("expected {} values, got {}", a.rows(), values.len()).into());
    }
    let b = Vector::try_from(values)?;
    let x = GaussSolver::new().solve(&a, &b)?;
    println!("x = {x}");
    Ok(())
}
