use anyhow::{Context, Result};
use clap::Parser;
use clap_complete::generate;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;
use wobos_cli::{
    build_cli_command,
    cli::{Cli, Commands, ConfigFormat, OutputFormat},
    report,
};
use wobos_core::{PlantConfig, SubstructureKind};

fn load_config(
    path: Option<&Path>,
    substructure: Option<SubstructureKind>,
    optimize_cables: bool,
) -> Result<PlantConfig> {
    let mut config = match path {
        Some(path) => {
            info!("Loading plant configuration from {}", path.display());
            PlantConfig::from_path(path)
                .with_context(|| format!("loading configuration {}", path.display()))?
        }
        None => PlantConfig::default(),
    };
    if let Some(kind) = substructure {
        config.variants.substructure = kind;
    }
    if optimize_cables {
        config.variants.optimize_cables = true;
    }
    Ok(config)
}

fn open_output(out: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    match out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            config,
            format,
            substructure,
            optimize_cables,
            out,
        } => {
            let config = load_config(config.as_deref(), substructure, optimize_cables)?;
            let result = wobos_algo::evaluate(&config).context("evaluating plant")?;
            let mut writer = open_output(out.as_ref())?;
            match format {
                OutputFormat::Plain => report::write_breakdown(&mut writer, &config, &result)?,
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut writer, &result)?;
                    writeln!(writer)?;
                }
                OutputFormat::Flat => report::write_flat(&mut writer, &result)?,
            }
            writer.flush()?;
            if let Some(path) = out {
                info!("Wrote results to {}", path.display());
            }
        }
        Commands::Defaults {
            substructure,
            format,
        } => {
            let mut config = PlantConfig::default();
            if let Some(kind) = substructure {
                config.variants.substructure = kind;
            }
            config.vessels = Some(config.fleet());
            let text = match format {
                ConfigFormat::Toml => toml::to_string_pretty(&config)?,
                ConfigFormat::Json => serde_json::to_string_pretty(&config)?,
            };
            println!("{text}");
        }
        Commands::Ledger {
            config,
            substructure,
            phase,
        } => {
            let config = load_config(config.as_deref(), substructure, false)?;
            let result = wobos_algo::evaluate(&config).context("evaluating plant")?;
            report::write_ledgers(io::stdout().lock(), &result, phase)?;
        }
        Commands::Completions { shell, out } => {
            let mut cmd = build_cli_command();
            match out {
                Some(path) => {
                    let mut file = File::create(&path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    generate(shell, &mut cmd, "wobos", &mut file);
                    info!("Wrote completions to {}", path.display());
                }
                None => generate(shell, &mut cmd, "wobos", &mut io::stdout()),
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install log subscriber: {err}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
