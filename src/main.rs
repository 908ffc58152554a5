use anyhow::Result;
use clap::Parser;
use taskroi::cli::{Cli, Commands};
use taskroi::commands::{format_roi_command, handle_list, init_config, ListConfig};
use taskroi::config::{load_config, TaskroiConfig};
use taskroi::formatting::{ColorMode, FormattingConfig};
use taskroi::observability::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = load_config();

    match cli.command {
        Commands::List {
            path,
            format,
            output,
            top,
            plain,
        } => {
            let list_config = build_list_config(&config, path, format, output, top, plain);
            handle_list(list_config)
        }
        Commands::Roi {
            revenue,
            time_taken,
        } => {
            let options = config.display_options();
            println!("{}", format_roi_command(&revenue, &time_taken, &options));
            Ok(())
        }
        Commands::Init { force } => init_config(&std::env::current_dir()?, force),
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool, writes_to_file: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else if writes_to_file {
        FormattingConfig::new(ColorMode::Never, false)
    } else {
        FormattingConfig::from_env()
    }
}

// Pure function to build list configuration
fn build_list_config(
    config: &TaskroiConfig,
    path: std::path::PathBuf,
    format: Option<taskroi::cli::OutputFormat>,
    output: Option<std::path::PathBuf>,
    top: Option<usize>,
    plain: bool,
) -> ListConfig {
    ListConfig {
        path,
        format: format.unwrap_or_else(|| config.default_format()),
        formatting: create_formatting_config(plain, output.is_some()),
        output,
        top,
        display: config.display_options(),
    }
}
