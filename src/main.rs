use bindpath::{BindpathError, CaptureRepresentation, Config, Project, binding_path_with};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Binding-expression path extraction and shape checking")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report binding-expression arguments that are not member accesses
    Check {
        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Check call sites on the calling thread only
        #[arg(long)]
        sequential: bool,

        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the binding path of a lambda such as `() => viewModel.Items`
    Path {
        /// Treat captured locals as bare leaves
        #[arg(long)]
        bare: bool,

        lambda: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<ExitCode, BindpathError> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            config,
            format,
            sequential,
            files,
        } => check(config, format, sequential, files),
        Command::Path { bare, lambda } => {
            let capture = if bare {
                CaptureRepresentation::Bare
            } else {
                CaptureRepresentation::Wrapped
            };
            println!("{}", binding_path_with(&lambda, capture)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn check(
    config: Option<PathBuf>,
    format: Format,
    sequential: bool,
    files: Vec<PathBuf>,
) -> Result<ExitCode, BindpathError> {
    let mut config = match config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if sequential {
        config = config.with_parallel(false);
    }

    let mut project = Project::new();
    for path in &files {
        let text = fs::read_to_string(path)?;
        project.add_document(path.display().to_string(), text)?;
    }

    let diagnostics = project.analyze(&config)?;
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&diagnostics)?),
        Format::Text => {
            for diagnostic in &diagnostics {
                let source = project
                    .document(&diagnostic.file)
                    .map(|d| d.text())
                    .unwrap_or_default();
                println!("{}\n", diagnostic.render(source));
            }
            eprintln!(
                "{} error(s) in {} file(s)",
                diagnostics.len(),
                files.len()
            );
        }
    }

    if diagnostics.iter().any(|d| d.severity.is_error()) {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
