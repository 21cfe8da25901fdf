//! Builds a threaded tree of `1..=n`, copies it, and removes the evens from the copy, printing
//! each step.
//!
//! `n` is read from the first argument if there is one, otherwise it's prompted for on stdin
//! until a positive number is entered. Set `RUST_LOG` to see what the tree is doing.

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use threaded_bst::Tree;

const PROMPT: &str =
    "Please enter a positive number (decimals will be rounded down to the nearest integer):";

#[derive(thiserror::Error, Debug)]
enum DriverError {
    #[error("{0:?} is not a positive number")]
    InvalidArgument(String),
    #[error("no positive number was entered")]
    NoInput,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Tree(#[from] threaded_bst::Error),
}

/// Parses a tree size, rounding decimals down. Anything that isn't at least 1 is rejected.
fn parse_size(input: &str) -> Option<i32> {
    let input = input.trim();
    let n = match input.parse::<i32>() {
        Ok(n) => n,
        Err(_) => {
            let n: f64 = input.parse().ok()?;
            if !n.is_finite() {
                return None;
            }
            // Saturates at the ends of `i32`.
            n.floor() as i32
        }
    };

    if n >= 1 {
        Some(n)
    } else {
        None
    }
}

/// Asks for a size until a valid one is entered.
fn prompt_size(input: &mut impl BufRead, output: &mut impl Write) -> Result<i32, DriverError> {
    let mut line = String::new();
    loop {
        writeln!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(DriverError::NoInput);
        }
        match parse_size(&line) {
            Some(n) => return Ok(n),
            None => {
                log::debug!("Rejected size {:?}", line.trim());
                writeln!(output, "Invalid number.")?;
            }
        }
    }
}

fn run(n: i32, output: &mut impl Write) -> Result<(), DriverError> {
    let tree = Tree::new(n)?;
    writeln!(output, "Your tree: {}", tree)?;

    let mut copy = tree.clone();
    writeln!(output, "A copy of your tree: {}", copy)?;

    if !copy.remove_even() {
        log::warn!("Not every even value could be removed from the copy");
    }
    writeln!(output, "The copy after removing evens: {}", copy)?;

    Ok(())
}

fn main() {
    pretty_env_logger::init();

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let result = match env::args().nth(1) {
        Some(arg) => parse_size(&arg).ok_or(DriverError::InvalidArgument(arg)),
        None => {
            let stdin = io::stdin();
            let mut stdin = stdin.lock();
            prompt_size(&mut stdin, &mut stdout)
        }
    }
    .and_then(|n| run(n, &mut stdout));

    if let Err(e) = result {
        log::error!("{:?}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}
