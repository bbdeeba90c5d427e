//! helpmark CLI - compile help markup and object descriptors to HTML

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use helpmark::{check_balance, DescriptorKind, Helpmark, ObjectDescriptor, Severity};

#[derive(Parser)]
#[command(name = "helpmark")]
#[command(version)]
#[command(about = "Compile help markup and object descriptors to HTML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a markup file to an HTML page
    Compile {
        /// Input markup file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page title
        #[arg(short, long, default_value = "Help")]
        title: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Replacement page template file
        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,
    },

    /// Render a JSON object descriptor to an HTML page
    Reflect {
        /// Input descriptor file (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page title
        #[arg(short, long, default_value = "Reference")]
        title: String,

        /// Rendering path
        #[arg(long, value_enum, default_value = "module")]
        kind: Kind,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Check a markup file for unbalanced block markers
    Check {
        /// Input markup file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    /// Module page with the value/type summary table
    Module,
    /// Class page with the name-only property list
    Class,
}

impl From<Kind> for DescriptorKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Module => DescriptorKind::Module,
            Kind::Class => DescriptorKind::Class,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Compile {
            input,
            title,
            output,
            template,
        } => {
            let body = fs::read_to_string(&input)?;
            log::debug!("read {} bytes from {}", body.len(), input.display());

            let mut builder = Helpmark::new();
            if let Some(ref path) = template {
                builder = builder.with_template(fs::read_to_string(path)?);
            }
            let html = builder.compile(&title, &body)?;
            write_output(output.as_deref(), &html)?;
        }

        Commands::Reflect {
            input,
            title,
            kind,
            output,
        } => {
            let json = fs::read_to_string(&input)?;
            let descriptor: ObjectDescriptor = serde_json::from_str(&json)?;
            let html = Helpmark::new().render(&descriptor, &title, kind.into())?;
            write_output(output.as_deref(), &html)?;
        }

        Commands::Check { input } => {
            let body = fs::read_to_string(&input)?;
            let report = check_balance(&body);

            if report.is_clean() {
                println!("{} {}", "ok:".green().bold(), input.display());
            } else {
                for diagnostic in report.diagnostics() {
                    let tag = match diagnostic.severity {
                        Severity::Error => "error:".red().bold(),
                        Severity::Warning => "warning:".yellow().bold(),
                    };
                    println!(
                        "{} line {}: {} [{}]",
                        tag, diagnostic.line, diagnostic.message, diagnostic.code
                    );
                }
                process::exit(2);
            }
        }
    }
    Ok(())
}

fn write_output(path: Option<&Path>, html: &str) -> std::io::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, html)?;
            println!("{} {}", "wrote".green(), path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}
