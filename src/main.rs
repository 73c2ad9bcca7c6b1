use std::env;
use std::process;

use salary_insights::cli::run_with_args;

fn main() {
    let args: Vec<String> = env::args().collect();
    process::exit(run_with_args(&args));
}
