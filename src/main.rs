#![allow(non_snake_case)]
use RustedNumCalc::Examples::numerical_examples::{NUMBER_OF_EXAMPLES, numerical_examples};
use RustedNumCalc::Utils::method_table::NumericalMethod;
use RustedNumCalc::Utils::task_parser::Task;
use std::env;
use std::process;
use strum::IntoEnumIterator;

// RustedNumCalc <task-file>   run the task described in the file
// RustedNumCalc --list        show the methods and the inputs they take
// RustedNumCalc               run the built-in examples
fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => {
            for example in 0..NUMBER_OF_EXAMPLES {
                println!("\n example {}", example);
                numerical_examples(example);
            }
        }
        Some("--list") => {
            for method in NumericalMethod::iter() {
                println!("{}\n", method.usage());
            }
        }
        Some(path) => match Task::from_file(path).and_then(|task| task.run()) {
            Ok(result) => {
                println!("{}", result);
                if !result.is_success() {
                    process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("{}", e);
                process::exit(2);
            }
        },
    }
}
