//! # Algebraic properties
//!
//! Randomized checks of the arithmetic against the laws of the rational field and against `f64`
//! arithmetic. All code in this file could be written by an external user of the crate.
use itertools::iproduct;

use rational::Rational;

use crate::common::{close_enough, generator, is_simplest, random_denominator, random_i64};
use crate::common::{random_rational, SAMPLES};

mod common;

#[test]
fn double_equivalence() {
    let mut rng = generator(0);
    for _ in 0..SAMPLES {
        let (a, b) = (random_i64(&mut rng), random_i64(&mut rng));
        let (c, d) = (random_denominator(&mut rng), random_denominator(&mut rng));
        let (ac, bd) = (Rational::new(a, c), Rational::new(b, d));

        assert!(is_simplest(&ac));
        assert!(is_simplest(&bd));
        assert!(close_enough(&ac, a as f64 / c as f64), "{} / {}", a, c);
        assert!(close_enough(&bd, b as f64 / d as f64), "{} / {}", b, d);
    }
}

fn test_operation<A, B>(
    seed: u64,
    operation: impl Fn(Rational, Rational) -> A,
    float_operation: impl Fn(f64, f64) -> B,
    is_equal: impl Fn(&A, B) -> bool,
) {
    let mut rng = generator(seed);
    for _ in 0..SAMPLES {
        let (a, b) = (random_rational(&mut rng), random_rational(&mut rng));
        assert!(is_simplest(&a));
        assert!(is_simplest(&b));
        if close_enough(&a, b.double()) {
            continue;
        }

        let exact = operation(a, b);
        assert!(is_equal(&exact, float_operation(a.double(), b.double())), "{}, {}", a, b);
    }
}

#[test]
fn addition() {
    test_operation(1, |a, b| a + b, |a, b| a + b, close_enough);
}

#[test]
fn subtraction() {
    test_operation(2, |a, b| a - b, |a, b| a - b, close_enough);
}

#[test]
fn multiplication() {
    test_operation(3, |a, b| a * b, |a, b| a * b, close_enough);
}

#[test]
fn division() {
    test_operation(4, |a, b| a / b, |a, b| a / b, close_enough);
}

#[test]
fn compare() {
    test_operation(5, |a, b| a < b, |a, b| a < b, |exact, float| *exact == float);
}

#[test]
fn equality() {
    test_operation(6, |a, b| a == b, |a, b| a == b, |exact, float| *exact == float);
}

#[test]
fn results_are_simplest() {
    let mut rng = generator(7);
    for _ in 0..SAMPLES {
        let (a, b) = (random_rational(&mut rng), random_rational(&mut rng));
        for result in [a + b, a - b, a * b, a / b, -a, a.reciprocal()] {
            assert!(is_simplest(&result), "{}", result);
            assert!(result.denominator() > 0);
        }
    }
}

#[test]
fn commutativity() {
    let mut rng = generator(8);
    for _ in 0..SAMPLES {
        let (a, b) = (random_rational(&mut rng), random_rational(&mut rng));
        assert_eq!(a + b, b + a);
        assert_eq!(a * b, b * a);
    }
}

#[test]
fn associativity() {
    let mut rng = generator(9);
    for _ in 0..SAMPLES {
        let (a, b, c) = (
            random_rational(&mut rng),
            random_rational(&mut rng),
            random_rational(&mut rng),
        );
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!((a * b) * c, a * (b * c));
    }
}

#[test]
fn inverses() {
    let mut rng = generator(10);
    for _ in 0..SAMPLES {
        let (a, b) = (random_rational(&mut rng), random_rational(&mut rng));
        assert_eq!(a - a, Rational::ZERO);
        assert_eq!(a / a, Rational::ONE);
        assert_eq!(a + b - b, a);
        assert_eq!(a * b / b, a);
        assert_eq!(a - b, a + -b);
    }
}

#[test]
fn reciprocal() {
    let mut rng = generator(11);
    for _ in 0..SAMPLES {
        let r = random_rational(&mut rng);
        assert_eq!(r.reciprocal(), Rational::ONE / r);
        assert_eq!(r.reciprocal().reciprocal(), r);
    }
}

/// The order agrees with exact cross multiplication, also for values near the limits of the type.
#[test]
fn order_of_extreme_values() {
    let mut rng = generator(12);
    for _ in 0..SAMPLES {
        let (a, b) = (random_i64(&mut rng), random_i64(&mut rng));
        let (c, d) = (random_denominator(&mut rng), random_denominator(&mut rng));
        let (ac, bd) = (Rational::new(a, c), Rational::new(b, d));

        let expected = (a as i128 * d as i128).cmp(&(b as i128 * c as i128));
        assert_eq!(ac.cmp(&bd), expected, "{}, {}", ac, bd);
        assert_eq!(bd.cmp(&ac), expected.reverse());
    }
}

#[test]
fn order_is_transitive() {
    let mut rng = generator(13);
    for _ in 0..SAMPLES {
        let mut values = [
            random_rational(&mut rng),
            random_rational(&mut rng),
            random_rational(&mut rng),
        ];
        values.sort();
        assert!(values[0] <= values[1] && values[1] <= values[2]);
        assert!(values[0] <= values[2]);
    }
}

/// Equal values have equal fields.
#[test]
fn uniqueness() {
    for (n1, d1, n2, d2) in iproduct!(-12i64..=12, 1u64..=12, -12i64..=12, 1u64..=12) {
        let same_value = n1 as i128 * d2 as i128 == n2 as i128 * d1 as i128;
        let (x, y) = (Rational::new(n1, d1), Rational::new(n2, d2));

        assert_eq!(x == y, same_value, "{} / {} and {} / {}", n1, d1, n2, d2);
        if same_value {
            assert_eq!((x.numerator(), x.denominator()), (y.numerator(), y.denominator()));
        }
    }
}

#[test]
fn signed_constructor_agrees() {
    for (n, d) in iproduct!(-20i64..=20, 1i64..=20) {
        assert_eq!(Rational::from_signed(n, d), Rational::new(n, d as u64));
        assert_eq!(Rational::from_signed(n, -d), Rational::new(-n, d as u64));
    }
}
