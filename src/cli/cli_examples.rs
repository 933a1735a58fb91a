use crate::Examples::integration_examples::integration_examples;
use std::io::{self, Write};

pub fn examples_menu() {
    loop {
        println!("\n=== Examples ===");
        println!("1. Equation and quadrature methods");
        println!("2. Zero crossings");
        println!("3. Segment integration");
        println!("4. Peer comparison");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        io::stdout().flush().unwrap();

        let choice = get_user_input();
        match choice.trim() {
            "1" => integration_examples(0),
            "2" => integration_examples(1),
            "3" => integration_examples(2),
            "4" => integration_examples(3),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn get_user_input() -> String {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input
}
