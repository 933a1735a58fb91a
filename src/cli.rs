pub mod cli_compute;
pub mod cli_examples;
pub mod cli_main;
