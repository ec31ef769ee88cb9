// Reconstruction of a Shamir-shared secret from a JSON share document.
//
// The document is read from the path given on the command line, or from the
// standard input when no path is given. The secret is printed in decimal.

use std::{env, error::Error, fs, io::Read, process::exit};

use console::style;
use shamir::{ShamirReconstructor, ShareDocument};

fn print_notice_and_exit(error: Option<String>) {
    let code = i32::from(error.is_some());
    println!(
        "{} Reconstruct a secret from Shamir shares",
        style("  overview:").magenta().bold()
    );
    println!(
        "{} reconstruct [-h] [--help] [--threshold=<value>] [<path>]",
        style("     usage:").magenta().bold()
    );
    println!(
        "{} {} must be at least 1 and overrides the document's {}",
        style("constraints:").magenta().bold(),
        style("threshold").blue(),
        style("keys.k").blue(),
    );
    if let Some(error) = error {
        println!("{} {}", style("     error:").red().bold(), error);
    }
    exit(code);
}

fn fail(error: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", style("error:").red().bold(), error);
    exit(1);
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    // Print the help if requested.
    if args.contains(&"-h".to_string()) || args.contains(&"--help".to_string()) {
        print_notice_and_exit(None)
    }

    let mut threshold = None;
    let mut path = None;

    for arg in &args {
        if arg.starts_with("--threshold") {
            let parts: Vec<&str> = arg.rsplit('=').collect();
            if parts.len() != 2 || parts[0].parse::<usize>().is_err() {
                print_notice_and_exit(Some("Invalid `--threshold` argument".to_string()))
            } else {
                threshold = Some(parts[0].parse::<usize>()?)
            }
        } else if arg.starts_with("--") || path.is_some() {
            print_notice_and_exit(Some(format!("Unrecognized argument: {arg}")))
        } else {
            path = Some(arg.clone())
        }
    }

    let json = match &path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let document = ShareDocument::from_json(&json).unwrap_or_else(|e| fail(e));
    let reconstructor = match threshold {
        Some(threshold) => ShamirReconstructor::new(threshold),
        None => document.reconstructor(),
    }
    .unwrap_or_else(|e| fail(e));

    match reconstructor.reconstruct_raw(document.shares()) {
        Ok(secret) => println!("{secret}"),
        Err(e) => fail(e),
    }

    Ok(())
}
