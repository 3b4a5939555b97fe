use clap::Parser;
use std::io::Write;
use std::str::FromStr;
use tagstack::application::{ListTagsService, RenderService};
use tagstack::cli::{format_tag_list, format_written, Cli, Commands};
use tagstack::domain::CloseMode;
use tagstack::error::TagstackError;
use tagstack::infrastructure::{Config, FileSystemRepository};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // --verbose forces debug, otherwise RUST_LOG or warnings only
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TagstackError> {
    let cwd = std::env::current_dir()?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Render {
            input,
            output,
            mode,
        } => {
            let mode = mode
                .map(|m| CloseMode::from_str(&m).map_err(TagstackError::Config))
                .transpose()?;
            let service = RenderService::new(FileSystemRepository::new(), &config)?
                .with_mode(mode)
                .with_config_path(Config::locate(cli.config.as_deref(), &cwd));

            if input.is_dir() {
                let written = service.render_dir(&input)?;
                println!("{}", format_written(&written).trim_end());
            } else if let Some(output) = output {
                service.render_to_file(&input, &output)?;
            } else {
                let rendered = service.render_file(&input)?;
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                stdout.flush()?;
            }
            Ok(())
        }
        Commands::Tags => {
            let tags = ListTagsService::new(config).execute()?;
            print!("{}", format_tag_list(&tags));
            Ok(())
        }
    }
}
