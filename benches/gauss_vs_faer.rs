use criterion::{black_box, Criterion, criterion_group, criterion_main};
use faer::linalg::solvers::SolveCore;
use gaussel::solver::{GaussSolver, LinearSolver};
use gaussel::{Matrix, SolverOptions, Vector};

fn bench_gauss_vs_faer(c: &mut Criterion) {
    let n = 200;
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| ((i * n + j) as f64).sin()).collect())
        .collect();
    let a = Matrix::from_rows(rows).unwrap();
    let b = Vector::try_from((0..n).map(|i| (i as f64).cos()).collect::<Vec<_>>()).unwrap();
    let a_faer = a.to_faer();

    c.bench_function("gaussel gauss", |ben| {
        let mut solver = GaussSolver::new();
        ben.iter(|| {
            let _x = solver.solve(black_box(&a), black_box(&b)).unwrap();
        })
    });

    c.bench_function("gaussel gauss serial", |ben| {
        let opts = SolverOptions::default().with_parallel_min_rows(usize::MAX);
        let mut solver = GaussSolver::with_options(opts);
        ben.iter(|| {
            let _x = solver.solve(black_box(&a), black_box(&b)).unwrap();
        })
    });

    c.bench_function("faer raw LU", |ben| {
        ben.iter(|| {
            let factor = faer::linalg::solvers::FullPivLu::new(a_faer.as_ref());
            let mut y = b.as_slice().to_vec();
            let n = y.len();
            let y_mat = faer::MatMut::from_column_major_slice_mut(&mut y, n, 1);
            factor.solve_in_place_with_conj(faer::Conj::No, y_mat);
        })
    });
}

criterion_group!(benches, bench_gauss_vs_faer);
criterion_main!(benches);
