/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Integration::equation::{Equation, IntegrationError};
    use crate::Integration::segment_integrator::{SegmentIntegrator, quadrature_bundle};
    use crate::settings::QuadSettings;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn sine() -> Equation {
        Equation::new(&[1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]).unwrap()
    }

    #[test]
    fn test_sine_total_area_over_zero_pi() {
        let report = SegmentIntegrator::new(sine())
            .compute_total_area(0.0, PI)
            .unwrap();
        assert!(report.total_area.is_finite());
        assert!(report.total_area > 0.0);
        // integral of |sin| over [0, pi] is 2; the 2-point Gauss estimate
        // drags the four-method average a little below that
        assert_relative_eq!(report.total_area, 1.98399, epsilon = 1e-3);
        assert!(!report.segments.is_empty());
        // segments tile the domain left to right and end exactly at x_fin
        let mut prev = 0.0;
        for seg in &report.segments {
            assert_eq!(seg.x_start, prev);
            assert!(seg.x_end >= seg.x_start);
            prev = seg.x_end;
        }
        assert_eq!(prev, PI);
    }

    #[test]
    fn test_methods_agree_within_a_few_percent() {
        let bundle = quadrature_bundle(&sine(), 0.0, PI, 10_000).unwrap();
        for area in [bundle.gauss, bundle.trapezoid, bundle.riemann, bundle.simpson] {
            assert!((area - bundle.simpson).abs() / bundle.simpson < 0.05);
        }
        assert_relative_eq!(
            bundle.average,
            (bundle.gauss + bundle.trapezoid + bundle.riemann + bundle.simpson) / 4.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_repeated_runs_are_bit_identical() {
        let integrator = SegmentIntegrator::new(sine());
        let first = integrator.compute_total_area(0.0, PI).unwrap();
        let second = integrator.compute_total_area(0.0, PI).unwrap();
        assert_eq!(first.total_area, second.total_area);
        assert_eq!(first.segments.len(), second.segments.len());
        for (a, b) in first.segments.iter().zip(second.segments.iter()) {
            assert_eq!(a.x_start, b.x_start);
            assert_eq!(a.x_end, b.x_end);
            assert_eq!(a.area, b.area);
        }
    }

    #[test]
    fn test_singularity_aborts_whole_computation_by_default() {
        // f is identically zero away from x = 0 and singular there; the scan
        // over [-1, 1] samples x = 0.0 exactly, so the computation dies
        let eq = Equation::new(&[0.0; 7]).unwrap();
        assert_eq!(
            SegmentIntegrator::new(eq)
                .compute_total_area(-1.0, 1.0)
                .unwrap_err(),
            IntegrationError::DivisionByZero { x: 0.0 }
        );
    }

    #[test]
    fn test_isolation_mode_marks_failed_segment_and_continues() {
        // singular point placed on a quadrature node that the coarse scan
        // never samples: x* = 3/10000 lies strictly inside the first scan
        // step, and bisection at the default tolerance never subdivides a
        // scan step, so only the 10000-interval quadrature grid reaches it
        let x_star: f64 = 3.0 * (1.0 / 10_000.0);
        let eq = Equation::new(&[0.0, 0.0, 1.0, -x_star.sqrt(), 0.0, 0.0, 0.0]).unwrap();

        let mut settings = QuadSettings::default();
        settings.isolate_segment_failures = true;
        let report = SegmentIntegrator::with_settings(eq, settings)
            .compute_total_area(0.0, 1.0)
            .unwrap();
        let failed: Vec<_> = report.segments.iter().filter(|s| s.area.is_none()).collect();
        assert_eq!(failed.len(), 1);
        assert!(failed[0].error.as_ref().unwrap().contains("division by zero"));
        assert!(report.total_area.is_finite());

        // same inputs without isolation: the reference behavior, a hard stop
        let report = SegmentIntegrator::new(eq).compute_total_area(0.0, 1.0);
        assert!(matches!(report, Err(IntegrationError::DivisionByZero { .. })));
    }

    #[test]
    fn test_inverted_interval_gives_empty_report() {
        let report = SegmentIntegrator::new(sine())
            .compute_total_area(1.0, -1.0)
            .unwrap();
        assert!(report.segments.is_empty());
        assert_eq!(report.total_area, 0.0);
        assert_eq!(report.total_elapsed_ms, 0.0);
    }

    #[test]
    fn test_degenerate_interval_gives_single_zero_segment() {
        let report = SegmentIntegrator::new(sine())
            .compute_total_area(2.0, 2.0)
            .unwrap();
        assert_eq!(report.segments.len(), 1);
        assert_eq!(report.segments[0].x_start, 2.0);
        assert_eq!(report.segments[0].x_end, 2.0);
        assert_eq!(report.total_area, 0.0);
    }

    #[test]
    fn test_boundaries_always_end_at_x_fin() {
        // constant positive function: no crossings at all, x_fin appended
        let eq = Equation::new(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0]).unwrap();
        let integrator = SegmentIntegrator::new(eq);
        let bounds = integrator.segment_bounds(0.0, 3.0).unwrap();
        assert_eq!(bounds, vec![(0.0, 3.0)]);
        let report = integrator.compute_total_area(0.0, 3.0).unwrap();
        assert_relative_eq!(report.total_area, 6.0, epsilon = 1e-6);
    }
}
