use std::{fs, process::ExitCode};

use clap::Parser;
use yardcalc::{error::Error, eval, eval_strict, postfix};

/// yardcalc evaluates arithmetic expressions built from non-negative
/// integers, `+ - * / ^` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells yardcalc to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Rejects characters that are not part of an expression instead of
    /// ignoring them.
    #[arg(short, long)]
    strict: bool,

    /// Prints the postfix form of each expression instead of its value.
    #[arg(short, long)]
    postfix: bool,

    contents: String,
}

impl Args {
    fn run(&self, expr: &str) -> Result<String, Error> {
        if self.postfix {
            return postfix(expr, self.strict);
        }

        let value = if self.strict { eval_strict(expr)? } else { eval(expr)? };
        Ok(value.to_string())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        String::new()
    };

    let expressions: Vec<&str> = if args.file {
        script.lines().filter(|line| !line.trim().is_empty()).collect()
    } else {
        vec![args.contents.as_str()]
    };

    let mut failed = false;
    for expr in expressions {
        match args.run(expr) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
