use clap::{Parser as ClapParser, Subcommand};
use selectql::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "selectql")]
#[command(about = "selectql - parse restricted SQL SELECT statements into a JSON syntax tree")]
#[command(version)]
struct Cli {
    /// Log lexer and parser activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a query and print its syntax tree as JSON
    Parse {
        /// The query (reads from stdin if not provided)
        query: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Only validate syntax
    Check {
        /// The query (reads from stdin if not provided)
        query: Option<String>,
    },

    /// Print the tokens of a query, one per line
    Tokens {
        /// The query (reads from stdin if not provided)
        query: Option<String>,
    },

    /// Show the accepted grammar
    Grammar,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Parse { query, pretty } => run_check(query, pretty, false),
        Commands::Check { query } => run_check(query, false, true),
        Commands::Tokens { query } => run_tokens(query),
        Commands::Grammar => {
            print!("{}", cli::get_grammar_reference());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_query(query: Option<String>) -> Result<String, CliError> {
    match query {
        Some(q) => Ok(q),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}

fn run_check(query: Option<String>, pretty: bool, syntax_only: bool) -> Result<(), CliError> {
    let options = CheckOptions {
        query: read_query(query)?,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Success(output) => {
            let json = if pretty {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            }?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn run_tokens(query: Option<String>) -> Result<(), CliError> {
    let listing = cli::list_tokens(&read_query(query)?);
    for line in listing.lines() {
        println!("{}", line);
    }
    Ok(())
}
