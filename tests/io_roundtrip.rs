//! File round trips for matrices and vector sets.

use gaussel::io::{load_matrix, load_vectors, save_matrix, save_vectors};
use gaussel::{LinAlgError, Matrix, Vector};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gaussel-{}-{}", std::process::id(), name))
}

#[test]
fn matrix_file_round_trip() {
    let mut rng = StdRng::seed_from_u64(5);
    let m = Matrix::random(6, 4, -100.0, 100.0, &mut rng).unwrap();
    let path = temp_path("matrix.txt");
    save_matrix(&path, &m).unwrap();
    let back: Matrix = load_matrix(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(back, m);
}

#[test]
fn vector_file_round_trip() {
    let mut rng = StdRng::seed_from_u64(6);
    let vs: Vec<Vector> = (1..5).map(|n| Vector::random(n, -1.0, 1.0, &mut rng).unwrap()).collect();
    let path = temp_path("vectors.txt");
    save_vectors(&path, &vs).unwrap();
    let back: Vec<Vector> = load_vectors(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(back, vs);
}

#[test]
fn missing_file_is_io_error() {
    let r = load_matrix::<f64>(temp_path("does-not-exist.txt"));
    assert!(matches!(r, Err(LinAlgError::Io(_))));
}

#[test]
fn ragged_file_is_rejected() {
    let path = temp_path("ragged.txt");
    std::fs::write(&path, "1 2 3\n4 5\n").unwrap();
    let r = load_matrix::<f64>(&path);
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(r, Err(LinAlgError::DimensionMismatch { .. })));
}
