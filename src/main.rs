use clap::Parser;
use regatta_formatter::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_summary) => {
            // Success - the summary has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Regatta Formatter - Rowing Results and Footage Tool");
    println!("===================================================");
    println!();
    println!("Rank a finished regatta results file by category, write the");
    println!("pipe-delimited results report and rename captured race footage.");
    println!();
    println!("USAGE:");
    println!("    regatta-formatter <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Rank results, write the report and rename footage (main command)");
    println!("    check       Parse and rank only, writing nothing");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Process using ~/.config/regatta-formatter/config.toml:");
    println!("    regatta-formatter process");
    println!();
    println!("    # Process explicit files, ordering the report by category:");
    println!("    regatta-formatter process --results results.csv --template template-div4.txt \\");
    println!("                              --order category-rank --skip-footage");
    println!();
    println!("    # Preview footage renames without moving anything:");
    println!("    regatta-formatter process --config regatta.toml --dry-run -v");
    println!();
    println!("    # Validate a results file:");
    println!("    regatta-formatter check --results results.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    regatta-formatter <COMMAND> --help");
}
