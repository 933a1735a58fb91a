use crate::Integration::equation::Equation;
use crate::Integration::segment_integrator::SegmentIntegrator;
use crate::PeerCompare::comparison::compare_with_peer;
use crate::PeerCompare::http_peer::HttpPeer;
use crate::PeerCompare::peer_api::LocalPeer;
use crate::settings::QuadSettings;
use log::error;
use regex::Regex;
use std::io::{self, Write};

/// Extracts every floating-point number from a line of user input, so
/// coefficients may be separated by commas, spaces or anything else.
pub fn parse_numbers(input: &str) -> Vec<f64> {
    let re = Regex::new(r"-?\d+(\.\d+)?([eE][+-]?\d+)?").unwrap();
    re.find_iter(input)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

fn prompt(text: &str) -> String {
    print!("{}", text);
    io::stdout().flush().unwrap();
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input
}

fn read_equation() -> Option<Equation> {
    let line = prompt("Enter the 7 coefficients a0..a6 (e.g. 1 0 0 1 0 0 0): ");
    let coef = parse_numbers(&line);
    match Equation::new(&coef) {
        Ok(eq) => Some(eq),
        Err(e) => {
            println!("\x1b[31m{}\x1b[0m", e);
            None
        }
    }
}

fn read_bounds() -> Option<(f64, f64)> {
    let line = prompt("Enter xIni and xFin (e.g. 0 3.1416): ");
    let bounds = parse_numbers(&line);
    if bounds.len() != 2 {
        println!("\x1b[31mExpected two numbers, got {}\x1b[0m", bounds.len());
        return None;
    }
    Some((bounds[0], bounds[1]))
}

pub fn compute_menu() {
    let Some(eq) = read_equation() else { return };
    let Some((x_ini, x_fin)) = read_bounds() else {
        return;
    };
    let integrator = SegmentIntegrator::with_settings(eq, QuadSettings::default());
    match integrator.compute_total_area(x_ini, x_fin) {
        Ok(report) => report.pretty_print(),
        Err(e) => error!("computation failed: {}", e),
    }
}

pub fn compare_menu() {
    let Some(eq) = read_equation() else { return };
    let Some((x_ini, x_fin)) = read_bounds() else {
        return;
    };
    let endpoint = prompt("Peer endpoint URL (empty for the in-process peer): ");
    let endpoint = endpoint.trim();
    let integrator = SegmentIntegrator::new(eq);
    let result = if endpoint.is_empty() {
        compare_with_peer(&integrator, &LocalPeer, x_ini, x_fin)
    } else {
        match HttpPeer::new(endpoint) {
            Ok(peer) => compare_with_peer(&integrator, &peer, x_ini, x_fin),
            Err(e) => {
                error!("bad peer endpoint: {}", e);
                return;
            }
        }
    };
    match result {
        Ok(report) => report.pretty_print(),
        Err(e) => error!("comparison failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_numbers;

    #[test]
    fn test_parse_numbers_accepts_mixed_separators() {
        assert_eq!(
            parse_numbers("1, -2.5  3e2; 0.001"),
            vec![1.0, -2.5, 300.0, 0.001]
        );
        assert!(parse_numbers("no numbers here").is_empty());
    }
}
