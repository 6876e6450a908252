use std::io;

use recursive_algos::cli::run_file_search;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    run_file_search(&mut input, &mut output)?;
    Ok(())
}
