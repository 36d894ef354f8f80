//! Property tests for vector and matrix algebra and for the solver round trip.

use gaussel::{Matrix, Vector};
use proptest::prelude::*;

fn vec_pair(max_len: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1..=max_len).prop_flat_map(|n| {
        (
            prop::collection::vec(-1000i32..1000, n),
            prop::collection::vec(-1000i32..1000, n),
        )
            .prop_map(|(a, b)| {
                (
                    a.into_iter().map(f64::from).collect(),
                    b.into_iter().map(f64::from).collect(),
                )
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn add_then_subtract_is_identity((a, b) in vec_pair(12)) {
        let u = Vector::try_from(a).unwrap();
        let v = Vector::try_from(b).unwrap();
        prop_assert_eq!(u.add(&v).unwrap().subtract(&v).unwrap(), u.clone());
        prop_assert_eq!(u.add(&v).unwrap(), v.add(&u).unwrap());
    }

    #[test]
    fn scale_then_divide_round_trips(
        a in prop::collection::vec(-1e6f64..1e6, 1..16),
        s in prop_oneof![-1e3f64..-1e-3, 1e-3f64..1e3],
    ) {
        let u = Vector::try_from(a).unwrap();
        let back = u.scale(s).divide(s).unwrap();
        for (x, y) in back.iter().zip(u.iter()) {
            prop_assert!((x - y).abs() <= 1e-9 * y.abs().max(1.0));
        }
    }

    #[test]
    fn solve_recovers_x_for_diagonally_dominant_systems(
        n in 1usize..12,
        seed in any::<u64>(),
    ) {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut a = Matrix::random(n, n, -1.0, 1.0, &mut rng).unwrap();
        for i in 0..n {
            a[(i, i)] += n as f64 + 1.0;
        }
        let x = Vector::random(n, -10.0, 10.0, &mut rng).unwrap();
        let b = a.multiply_vector(&x).unwrap();
        let found = gaussel::solve(&a, &b).unwrap();
        for i in 0..n {
            prop_assert!((found[i] - x[i]).abs() < 1e-6);
        }
    }

    #[test]
    fn norm_is_largest_magnitude(a in prop::collection::vec(-1e6f64..1e6, 0..16)) {
        let expected = a.iter().fold(0.0f64, |m, x| m.max(x.abs()));
        prop_assert_eq!(Vector::try_from(a).unwrap().norm(), expected);
    }
}
