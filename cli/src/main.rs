//! unelements CLI - render extracted document elements

use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;

use unelements::{render, Element, JsonFormat};

#[derive(Parser)]
#[command(name = "unelements")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render extracted document elements to Markdown and JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an elements JSON file to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input elements JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Re-serialize an elements JSON file (validates and normalizes it)
    Json {
        /// Input elements JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show element counts per type
    Info {
        /// Input elements JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Markdown { input, output } => {
            let elements = load_elements(&input)?;
            log::info!("rendering {} elements to markdown", elements.len());
            write_output(&render::to_markdown(&elements), output.as_deref())
        }
        Commands::Json {
            input,
            output,
            compact,
        } => {
            let elements = load_elements(&input)?;
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            write_output(&render::to_json(&elements, format)?, output.as_deref())
        }
        Commands::Info { input } => {
            let elements = load_elements(&input)?;
            print_info(&input, &elements);
            Ok(())
        }
    }
}

fn load_elements(path: &Path) -> Result<Vec<Element>, Box<dyn Error>> {
    let json = fs::read_to_string(path)?;
    Ok(render::from_json(&json)?)
}

fn write_output(content: &str, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("{} {}", "saved".green().bold(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn print_info(path: &Path, elements: &[Element]) {
    println!("{} {}", "file:".cyan().bold(), path.display());
    println!("{} {}", "elements:".cyan().bold(), elements.len());

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for element in elements {
        *counts.entry(element.type_tag()).or_default() += 1;
    }
    for (tag, count) in counts {
        println!("  {:<20} {}", tag, count);
    }
}
