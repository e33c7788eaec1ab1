//! `mu` — run the lab suite.

use muc::commands::{greet, list_units, run_tests};
use muc::{init_tracing, ReportConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    // No command: run the suite with default options.
    let Some(command) = args.get(1) else {
        run_tests(&ReportConfig::default());
    };

    match command.as_str() {
        "test" => {
            let mut config = ReportConfig::default();
            for arg in args.iter().skip(2) {
                if arg == "--verbose" || arg == "-v" {
                    config.verbose = true;
                } else {
                    eprintln!("error: unknown option '{arg}'");
                    eprintln!("Usage: mu test [--verbose]");
                    std::process::exit(1);
                }
            }
            run_tests(&config);
        }
        "list" => {
            list_units();
        }
        "hello" => {
            let name = args.get(2).map_or("Bob", String::as_str);
            greet(name);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("mu - lab unit-test runner");
    println!();
    println!("Usage: mu <command> [options]");
    println!();
    println!("Commands:");
    println!("  test [--verbose]   Run the lab suite (default when no command is given)");
    println!("  list               List test units in execution order");
    println!("  hello [name]       Print the greeting for a name (default: Bob)");
    println!("  help               Show this message");
    println!();
    println!("Exit code: 0 if every unit passed, 1 otherwise.");
    println!("Set RUST_LOG (e.g. RUST_LOG=mu_check=debug) for per-unit tracing.");
}
