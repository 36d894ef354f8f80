//! Accuracy sweep for the Gaussian solver.
//!
//! For each system size a random matrix `A` and a random exact solution `x*`
//! are drawn, `b = A·x*` is formed, the system is solved and the infinity norm
//! of `x* - x` is recorded. The rows can be rendered as a bordered text table.

use crate::core::traits::Scalar;
use crate::error::{LinAlgError, Result};
use crate::matrix::Matrix;
use crate::solver::gauss::solve;
use crate::vector::Vector;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sweep parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// System sizes to test
    pub sizes: Vec<usize>,
    /// Sampling range for matrix and solution entries
    pub range: (f64, f64),
    /// Seed for a reproducible sweep, `None` for entropy
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            sizes: (1..=8).map(|k| 1usize << k).collect(),
            range: (1.0, 10.0),
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Generator for this config: seeded if a seed was given.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentRow<T> {
    pub size: usize,
    pub error: T,
}

/// Solve `A·x = A·exact` and return `‖exact - x‖∞`.
pub fn computational_error<T: Scalar>(a: &Matrix<T>, exact: &Vector<T>) -> Result<T> {
    let b = a.multiply_vector(exact)?;
    let found = solve(a, &b)?;
    Ok(exact.subtract(&found)?.norm())
}

/// Run the sweep described by `config`, drawing inputs from `rng`.
pub fn run<T, R>(config: &ExperimentConfig, rng: &mut R) -> Result<Vec<ExperimentRow<T>>>
where
    T: Scalar + SampleUniform,
    R: Rng + ?Sized,
{
    let (lo, hi) = config.range;
    let (start, end) = match (T::from_f64(lo), T::from_f64(hi)) {
        (Some(s), Some(e)) => (s, e),
        _ => {
            return Err(LinAlgError::InvalidArgument(format!(
                "range [{lo}, {hi}] not representable"
            )));
        }
    };
    let mut rows = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let a = Matrix::random(size, size, start, end, rng)?;
        let exact = Vector::random(size, start, end, rng)?;
        let error = computational_error(&a, &exact)?;
        log::info!("size {size}: error {error:e}");
        rows.push(ExperimentRow { size, error });
    }
    Ok(rows)
}

/// Render sweep results as a two-column table.
pub fn render_table<T: Scalar>(rows: &[ExperimentRow<T>]) -> String {
    const H1: &str = "System size";
    const H2: &str = "Error";
    let cells: Vec<(String, String)> =
        rows.iter().map(|r| (r.size.to_string(), format!("{:e}", r.error))).collect();
    let w1 = cells.iter().map(|c| c.0.len()).chain([H1.len()]).max().unwrap_or(0);
    let w2 = cells.iter().map(|c| c.1.len()).chain([H2.len()]).max().unwrap_or(0);
    let border = format!("+-{}-+-{}-+\n", "-".repeat(w1), "-".repeat(w2));

    let mut out = border.clone();
    out.push_str(&format!("| {H1:^w1$} | {H2:^w2$} |\n"));
    out.push_str(&border);
    for (a, b) in &cells {
        out.push_str(&format!("| {a:>w1$} | {b:>w2$} |\n"));
    }
    out.push_str(&border);
    out
}
