// tests/polynomial_tests.rs
//
// Integration tests for the public polynomial API: construction, queries,
// arithmetic, differentiation and evaluation, driven the way a caller would.

use std::collections::BTreeMap;
use num::complex::Complex;
use num::rational::Ratio;
use num::BigInt;
use sparse_poly::Polynomial;

#[cfg(test)]
mod polynomial_tests {
    use super::*;

    fn poly(terms: &[(usize, i32)]) -> Polynomial<i32> {
        Polynomial::from_terms(terms.iter().copied())
    }

    #[test]
    fn test_default_constructor_creates_zero_polynomial() {
        let p: Polynomial<i32> = Polynomial::default();
        assert_eq!(p.len(), 0);
        assert_eq!(p, Polynomial::zero());
        assert_eq!(p.coefficient(0), 0);
    }

    #[test]
    fn test_construction_paths_agree() {
        let mut map: BTreeMap<usize, i32> = BTreeMap::new();
        map.insert(0, 0);
        map.insert(1, 1);
        map.insert(2, 0);
        let from_map: Polynomial<i32> = Polynomial::from(map);
        assert_eq!(from_map.len(), 1);
        assert_eq!(from_map, Polynomial::x());
        assert_eq!(from_map, Polynomial::linear_term(1));

        let collected: Polynomial<i32> = vec![(3, 2), (0, 0)].into_iter().collect();
        assert_eq!(collected, Polynomial::monomial(2, 3));

        assert_eq!(Polynomial::from(7i32), Polynomial::constant(7));
        assert!(Polynomial::from(0i32).is_zero());
    }

    #[test]
    fn test_clone_is_deep() {
        let p = poly(&[(0, 1), (2, 2)]);
        let copy = p.clone();
        let changed = copy + poly(&[(2, -2)]);
        assert_eq!(p, poly(&[(0, 1), (2, 2)]));
        assert_eq!(changed, poly(&[(0, 1)]));
    }

    #[test]
    fn test_coefficient_lookup_never_fails() {
        let p = poly(&[(0, -7), (1, 3), (2, 5)]);
        assert_eq!(p.coefficient(0), -7);
        assert_eq!(p.coefficient(2), 5);
        assert_eq!(p.coefficient(100), 0);
    }

    #[test]
    fn test_addition_laws() {
        let p = poly(&[(0, 1), (3, -4)]);
        let q = poly(&[(1, 2), (3, 4)]);
        let r = poly(&[(0, -1), (5, 1)]);
        assert_eq!(&p + &q, &q + &p);
        assert_eq!((&p + &q) + &r, &p + &(&q + &r));
        assert_eq!(&p + &Polynomial::zero(), p);
        assert_eq!((&p + &q).len(), 2);
    }

    #[test]
    fn test_subtraction_and_negation_laws() {
        let p = poly(&[(0, 3), (1, -2), (2, 2)]);
        let q = poly(&[(1, 5), (4, 1)]);
        assert!((&p - &p).is_zero());
        assert_eq!(-(-p.clone()), p);
        assert_eq!(&p - &q, &p + &(-&q));
    }

    #[test]
    fn test_multiplication_laws_and_examples() {
        let p = poly(&[(0, 1), (2, -1)]);
        let q = poly(&[(1, 3), (3, 1)]);
        assert_eq!(&p * &q, &q * &p);
        assert!((&p * &Polynomial::zero()).is_zero());
        assert_eq!(&p * &Polynomial::one(), p);

        assert_eq!(poly(&[(0, 2), (1, -2)]) * poly(&[(0, 2), (1, 2)]), poly(&[(0, 4), (2, -4)]));
        assert_eq!(poly(&[(0, 1), (1, -1)]) * poly(&[(0, 1), (1, -1)]), poly(&[(0, 1), (1, -2), (2, 1)]));
    }

    #[test]
    fn test_difference_of_squares_leaves_no_zero_terms() {
        let x = Polynomial::<i64>::x();
        let product = (&x - 1) * (&x + 1);
        assert_eq!(product.len(), 2);
        assert_eq!(product.terms().collect::<Vec<_>>(), vec![(0, &-1), (2, &1)]);
    }

    #[test]
    fn test_mixed_scalar_expressions() {
        let p = poly(&[(0, -1), (1, 4), (3, 2)]);
        for k in [-3i32, 0, 1, 7] {
            assert_eq!(k + &p, &p + k);
            assert_eq!(k * &p, &p * k);
            assert_eq!(k - &p, -(&p - k));
            assert_eq!(k - &p, -&p - (-k));
        }
    }

    #[test]
    fn test_differentiation_chain() {
        let p = poly(&[(0, 3), (1, -2), (2, 2)]);
        assert_eq!(p.differentiate(), poly(&[(0, -2), (1, 4)]));
        assert_eq!(p.differentiate().differentiate(), poly(&[(0, 4)]));
        assert!(p.differentiate().differentiate().differentiate().is_zero());
        assert!(Polynomial::<i32>::zero().differentiate().is_zero());
        assert!(Polynomial::constant(9).differentiate().is_zero());
    }

    #[test]
    fn test_evaluation_matches_direct_arithmetic() {
        let p = poly(&[(0, -2), (1, 1), (2, -2)]);
        for i in -10i32..=10 {
            assert_eq!(p.evaluate(&i), -2 * i * i + i - 2);
        }
    }

    #[test]
    fn test_evaluation_of_sparse_high_degree_terms() {
        let p = poly(&[(0, 1), (10, 1), (20, -1)]);
        let expected = 1 + 2i64.pow(10) - 2i64.pow(20);
        assert_eq!(p.evaluate(&2i64), expected);
    }

    #[test]
    fn test_float_demo_polynomial() {
        let x = Polynomial::<f32>::x();
        let g = 4.5 * &x * &x - 7.1 * &x + 0.5;
        assert_eq!(g.len(), 3);
        let at_three = g.evaluate(&3.0f64);
        assert!((at_three - 19.7).abs() < 1e-5, "g(3) = {}", at_three);
        assert!(g.differentiate().differentiate().differentiate().is_zero());
    }

    #[test]
    fn test_complex_coefficients() {
        let x = Polynomial::<Complex<f64>>::x();
        let i = Complex::new(0.0, 1.0);
        let p = &x * &x + Complex::new(1.0, 0.0);
        assert_eq!(p.evaluate(&i), Complex::new(0.0, 0.0));
        assert_eq!(p.differentiate(), Polynomial::linear_term(Complex::new(2.0, 0.0)));
    }

    #[test]
    fn test_bigint_and_rational_coefficients() {
        let big = BigInt::from(10).pow(20);
        let p = Polynomial::from_roots(&[big.clone(), -big.clone()]);
        assert_eq!(p.coefficient(0), -(&big * &big));
        assert_eq!(p.coefficient(1), BigInt::from(0));
        assert_eq!(p.evaluate(&big), BigInt::from(0));

        let q = Polynomial::from_terms(vec![(3, Ratio::new(1i64, 3)), (1, Ratio::new(-1, 2))]);
        let dq = q.differentiate();
        assert_eq!(dq.coefficient(2), Ratio::from_integer(1));
        assert_eq!(dq.coefficient(0), Ratio::new(-1, 2));
    }

    #[test]
    fn test_equality_is_structural() {
        let with_zero = poly(&[(0, 0), (2, 5)]);
        let without_zero = poly(&[(2, 5)]);
        assert_eq!(with_zero, without_zero);
        assert_eq!(without_zero, with_zero);
        assert_eq!(with_zero, with_zero);
        assert_ne!(with_zero, poly(&[(2, 5), (1, 1)]));
        assert_ne!(with_zero, poly(&[(3, 5)]));
    }
}
