/// demo tasks for the numerical core and the peer comparison
pub mod integration_examples;
