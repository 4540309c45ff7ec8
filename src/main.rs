use std::{fs, path::PathBuf, process};

use clap::{Parser, ValueEnum};
use exprparse::{display_error, parse_expression};
use log::{debug, info};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    /// Literals tagged with their kind
    Canonical,
    /// Literals printed bare
    Shape,
}

#[derive(Debug, Parser)]
#[command(name = "exprparse")]
#[command(about = "Parse one expression and print its tree as an s-expression")]
struct Cli {
    /// Increase log verbosity (-v, -vv, ...)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[arg(long, value_enum, default_value_t = OutputFormat::Canonical)]
    format: OutputFormat,
    /// Parse this expression instead of reading a file
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,
    /// File holding the expression
    #[arg(required_unless_present = "expr")]
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = stderrlog::new()
        .module(module_path!())
        .verbosity(cli.verbose as usize)
        .init()
    {
        eprintln!("failed to initialise logging: {}", err);
    }

    let (name, source) = match (&cli.expr, &cli.file) {
        (Some(expr), _) => ("<expr>".to_string(), expr.clone().into_bytes()),
        (None, Some(path)) => match fs::read(path) {
            Ok(bytes) => (path.display().to_string(), bytes),
            Err(err) => {
                eprintln!("exprparse: cannot read {}: {}", path.display(), err);
                process::exit(2);
            }
        },
        (None, None) => unreachable!("clap requires an expression or a file"),
    };
    debug!("parsing {} ({} bytes)", name, source.len());

    let (expr, errors) = parse_expression(&source);

    if let Some(expr) = &expr {
        match cli.format {
            OutputFormat::Canonical => println!("{}", expr.sexp()),
            OutputFormat::Shape => println!("{}", expr.shape()),
        }
    }

    let Some(errors) = errors else {
        info!("parsed {} cleanly", name);
        return;
    };

    let text = String::from_utf8_lossy(&source);
    for error in &errors {
        eprintln!("{}", display_error(error, &text, &name));
    }
    process::exit(1);
}
