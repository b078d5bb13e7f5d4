//! Lox Language CLI
//!
//! Command-line interface for the Lox scanner.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

use lox_lang::{scan, ConsoleReporter, Token, VERSION};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() == 1 {
        // No arguments: start REPL
        println!("Lox v{} - Scanner", VERSION);
        println!("Type 'exit' to quit\n");
        repl();
        return;
    }

    // Check for flags
    let mut show_tokens = false;
    let mut show_help = false;
    let mut filename: Option<&String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--tokens" | "-t" => show_tokens = true,
            "--help" | "-h" => show_help = true,
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ => filename = Some(arg),
        }
    }

    if show_help {
        print_help();
        return;
    }

    if let Some(file) = filename {
        if let Err(e) = scan_file(file, show_tokens) {
            eprintln!("{}", e);
            process::exit(1);
        }
    } else {
        eprintln!("Error: No input file specified");
        print_usage();
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: lox [OPTIONS] [script]");
    eprintln!("       lox --help");
}

fn print_help() {
    println!("Lox v{} - Lexical analyzer for the Lox language", VERSION);
    println!();
    println!("USAGE:");
    println!("    lox [OPTIONS] [script]");
    println!();
    println!("OPTIONS:");
    println!("    -t, --tokens    Show the full token table");
    println!("    -h, --help      Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    lox script.lox           Scan a Lox script");
    println!("    lox --tokens script.lox  Scan and dump the token table");
    println!("    lox                      Start interactive REPL");
}

/// Scan a Lox script from a file
fn scan_file(filename: &str, show_tokens: bool) -> Result<(), String> {
    let source = fs::read_to_string(filename)
        .map_err(|e| format!("Failed to read file '{}': {}", filename, e))?;

    let mut reporter = ConsoleReporter::with_source(&source);
    let tokens = scan(&source, &mut reporter);

    if show_tokens {
        print_token_table(filename, &tokens);
    }

    if reporter.had_error() {
        return Err(format!("Scan of '{}' finished with errors", filename));
    }

    Ok(())
}

/// Print the token table for a scanned file
fn print_token_table(filename: &str, tokens: &[Token]) {
    println!("Tokens for '{}':", filename);
    println!("{}", "=".repeat(60));

    for (i, token) in tokens.iter().enumerate() {
        println!(
            "{:4}: {:20} | line {:3} | {:?}",
            i,
            format!("{:?}", token.token_type),
            token.line,
            token.lexeme
        );
    }

    println!("{}", "=".repeat(60));
    println!("Total tokens: {}", tokens.len());
}

/// Start an interactive REPL (read-scan-print loop)
fn repl() {
    let mut reporter = ConsoleReporter::new();
    let mut line_number = 1;

    loop {
        print!("lox:{} > ", line_number);
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {
                let input = input.trim();

                if input == "exit" || input == "quit" {
                    break;
                }

                if input.is_empty() {
                    continue;
                }

                reporter.reset();
                let tokens = scan(input, &mut reporter);
                for token in &tokens {
                    println!("{}", token);
                }

                line_number += 1;
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    println!("\nGoodbye!");
}
