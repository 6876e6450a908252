use std::io;

use recursive_algos::cli::run_permutations;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    run_permutations(&mut input, &mut output)?;
    Ok(())
}
