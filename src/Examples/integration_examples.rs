use crate::Integration::equation::Equation;
use crate::Integration::quadrature_api::{QuadCalculator, all_methods};
use crate::Integration::root_finding::find_crossings;
use crate::Integration::segment_integrator::SegmentIntegrator;
use crate::PeerCompare::comparison::compare_with_peer;
use crate::PeerCompare::peer_api::LocalPeer;
use approx::assert_relative_eq;
use std::f64::consts::PI;

pub fn integration_examples(task: usize) {
    match task {
        0 => {
            // evaluate the equation and compare the four quadrature methods
            // on f(x) = sin(x) over [0, pi]
            let eq = Equation::new(&[1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]).unwrap();
            println!("f(pi/2) = {}", eq.eval(PI / 2.0).unwrap());
            for method in all_methods() {
                let area = method.integrate(&eq, 0.0, PI, 10_000).unwrap();
                println!("{:<16} area = {}", method.name(), area);
                assert_relative_eq!(area, 2.0, epsilon = 0.1);
            }
        }
        1 => {
            // zero crossings of sin(x) over [-1, 1]
            let eq = Equation::new(&[1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]).unwrap();
            let crossings = find_crossings(&eq, -1.0, 1.0, 0.001, 1000).unwrap();
            println!("crossings: {:?}", crossings);
        }
        2 => {
            // full computation: a cubic crossing zero inside the domain,
            // so the domain splits into sign-consistent segments
            let eq = Equation::new(&[0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0]).unwrap();
            let report = SegmentIntegrator::new(eq)
                .compute_total_area(-1.0, 1.0)
                .unwrap();
            report.pretty_print();
            println!("total area: {}", report.total_area);
        }
        3 => {
            // cross-validation of the core against the in-process peer
            let eq = Equation::new(&[1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]).unwrap();
            let integrator = SegmentIntegrator::new(eq);
            let report = compare_with_peer(&integrator, &LocalPeer, 0.0, PI).unwrap();
            report.pretty_print();
        }
        _ => {
            println!("no such example: {}", task);
        }
    }
}
