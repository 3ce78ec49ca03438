use clap::Parser;
use std::{path::PathBuf, process::exit};
use turtlelogo::{Program, TurtleCmd};

/// Print what a script would make the turtle do.
#[derive(Parser)]
struct Args {
    input: PathBuf,

    /// Print the tokens instead of running the script.
    #[clap(long)]
    tokens: bool,

    /// Also print the tokens that were skipped.
    #[clap(short, long)]
    verbose: bool,
}

pub fn main() {
    let args = Args::parse();
    let input = match std::fs::read_to_string(&args.input) {
        Ok(x) => x,
        Err(e) => {
            println!(
                "Failed to open input file {}: {}",
                args.input.into_os_string().to_string_lossy(),
                e
            );
            exit(1);
        }
    };

    let prog = Program::parse(&input);
    if args.tokens {
        for tok in prog.tokens() {
            println!("{tok}");
        }
        return;
    }

    let mut turtle: Vec<TurtleCmd> = Vec::new();
    let report = prog.exec(&mut turtle);
    for cmd in &turtle {
        println!("{cmd}");
    }

    if args.verbose {
        for skip in &report.skipped {
            println!("Warning: {skip}");
        }
    }
}
