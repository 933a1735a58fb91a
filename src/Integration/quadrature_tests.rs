/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Integration::equation::{Equation, IntegrationError};
    use crate::Integration::quadrature_api::{
        QuadCalculator, all_methods, gauss_legendre, riemann_sum, simpson_rule, trapezoid_rule,
    };
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn constant(k: f64) -> Equation {
        // a6 is the constant term; a3 = 1 keeps the denominator away from zero
        Equation::new(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, k]).unwrap()
    }

    fn sine() -> Equation {
        Equation::new(&[1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]).unwrap()
    }

    fn cubic() -> Equation {
        // f(x) = x^3
        Equation::new(&[0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0]).unwrap()
    }

    #[test]
    fn test_constant_integrates_to_width_times_k() {
        let eq = constant(3.5);
        let (a, b) = (-2.0, 5.0);
        let exact = 3.5 * (b - a);
        assert_relative_eq!(trapezoid_rule(&eq, a, b, 1000).unwrap(), exact, epsilon = 1e-9);
        assert_relative_eq!(riemann_sum(&eq, a, b, 1000).unwrap(), exact, epsilon = 1e-9);
        assert_relative_eq!(simpson_rule(&eq, a, b, 1000).unwrap(), exact, epsilon = 1e-9);
        assert_relative_eq!(gauss_legendre(&eq, a, b).unwrap(), exact, epsilon = 1e-9);
    }

    #[test]
    fn test_sine_over_zero_pi() {
        let eq = sine();
        let n = 10_000;
        assert_relative_eq!(trapezoid_rule(&eq, 0.0, PI, n).unwrap(), 2.0, epsilon = 1e-6);
        assert_relative_eq!(riemann_sum(&eq, 0.0, PI, n).unwrap(), 2.0, epsilon = 1e-6);
        assert_relative_eq!(simpson_rule(&eq, 0.0, PI, n).unwrap(), 2.0, epsilon = 1e-9);
        // the fixed 2-point rule is coarse here but lands within a few percent
        assert_relative_eq!(gauss_legendre(&eq, 0.0, PI).unwrap(), 1.9358, epsilon = 1e-3);
    }

    #[test]
    fn test_gauss_and_simpson_exact_for_cubic() {
        // both rules are exact for polynomials up to degree 3
        let eq = cubic();
        assert_relative_eq!(gauss_legendre(&eq, 0.0, 1.0).unwrap(), 0.25, epsilon = 1e-12);
        assert_relative_eq!(simpson_rule(&eq, 0.0, 1.0, 100).unwrap(), 0.25, epsilon = 1e-12);
        assert_relative_eq!(trapezoid_rule(&eq, 0.0, 1.0, 10_000).unwrap(), 0.25, epsilon = 1e-7);
        assert_relative_eq!(riemann_sum(&eq, 0.0, 1.0, 10_000).unwrap(), 0.25, epsilon = 1e-3);
    }

    #[test]
    fn test_simpson_rejects_odd_interval_count() {
        let eq = sine();
        let err = simpson_rule(&eq, 0.0, 1.0, 9).unwrap_err();
        match err {
            IntegrationError::InvalidArgument(msg) => {
                assert!(msg.contains("even"), "unexpected message: {}", msg)
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_interval_count_rejected() {
        let eq = sine();
        assert!(matches!(
            trapezoid_rule(&eq, 0.0, 1.0, 0),
            Err(IntegrationError::InvalidArgument(_))
        ));
        assert!(matches!(
            riemann_sum(&eq, 0.0, 1.0, 0),
            Err(IntegrationError::InvalidArgument(_))
        ));
        assert!(matches!(
            simpson_rule(&eq, 0.0, 1.0, 0),
            Err(IntegrationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_degenerate_interval_gives_zero_area() {
        let eq = sine();
        assert_eq!(trapezoid_rule(&eq, 1.5, 1.5, 100).unwrap(), 0.0);
        assert_eq!(riemann_sum(&eq, 1.5, 1.5, 100).unwrap(), 0.0);
        assert_eq!(simpson_rule(&eq, 1.5, 1.5, 100).unwrap(), 0.0);
        assert_eq!(gauss_legendre(&eq, 1.5, 1.5).unwrap(), 0.0);
    }

    #[test]
    fn test_singularity_propagates_unmodified() {
        // a3 = 0: the denominator vanishes exactly at x = 0, which every
        // n-based method samples as the left endpoint of [0, 1]
        let eq = Equation::new(&[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        for result in [
            trapezoid_rule(&eq, 0.0, 1.0, 10),
            riemann_sum(&eq, 0.0, 1.0, 10),
            simpson_rule(&eq, 0.0, 1.0, 10),
        ] {
            assert_eq!(result, Err(IntegrationError::DivisionByZero { x: 0.0 }));
        }
        // the Gauss nodes avoid x = 0 on [0, 1], so that one succeeds
        assert!(gauss_legendre(&eq, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_dispatch_enum_matches_free_functions() {
        let eq = sine();
        let n = 1000;
        let expected = [
            gauss_legendre(&eq, 0.0, PI).unwrap(),
            trapezoid_rule(&eq, 0.0, PI, n).unwrap(),
            riemann_sum(&eq, 0.0, PI, n).unwrap(),
            simpson_rule(&eq, 0.0, PI, n).unwrap(),
        ];
        for (method, exp) in all_methods().iter().zip(expected.iter()) {
            assert_eq!(method.integrate(&eq, 0.0, PI, n).unwrap(), *exp);
        }
        let names: Vec<&str> = all_methods().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["Gauss-Legendre", "Trapezoid", "Riemann", "Simpson"]);
    }
}
