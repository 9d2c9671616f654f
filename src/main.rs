// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use cultural_dictionary::utils::logging::{
    format_error, format_info, format_success, format_warning,
};
use cultural_dictionary::{
    BatchPipeline, Config, DictionaryError, GeneratedFile, JsonExporter, OperationTimer,
    OutputFormat, SerplyClient, Term, TermCatalog, TermSelection, TogetherClient, write_file,
};
use std::path::PathBuf;
use tracing::{info, warn};

const SELECT_TERM_WARNING: &str = "Por favor, selecciona un término.";

#[derive(Parser)]
#[command(name = "cultural_dictionary")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Grounded cultural dictionary generator (Maya worldview)", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the term catalog in order
    Terms,

    /// Generate a single dictionary entry
    Entry {
        /// Free-text term; overrides --index
        term: Option<String>,

        #[arg(short, long, value_name = "N")]
        index: Option<usize>,

        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Also write the entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate one document covering the whole catalog
    Batch {
        #[arg(long, value_name = "NUM")]
        limit: Option<usize>,

        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Also write the entries as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    cultural_dictionary::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Cultural Dictionary Generator");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Terms => {
            cmd_terms(&config);
        }
        Commands::Entry {
            term,
            index,
            output,
            format,
            json,
        } => {
            let selection = match (term, index) {
                (Some(text), _) => TermSelection::FreeText(text),
                (None, Some(index)) => TermSelection::Catalog(index),
                (None, None) => TermSelection::FreeText(String::new()),
            };
            let config = with_overrides(config, output, format);
            cmd_entry(&config, &selection, json).await?;
        }
        Commands::Batch {
            limit,
            output,
            format,
            json,
        } => {
            let config = with_overrides(config, output, format);
            cmd_batch(&config, limit, json).await?;
        }
    }

    Ok(())
}

fn with_overrides(
    mut config: Config,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
) -> Config {
    if let Some(dir) = output {
        config.output.directory = dir;
    }
    if let Some(format) = format {
        config.output.format = format;
    }
    config
}

fn load_catalog(config: &Config) -> TermCatalog {
    let catalog = TermCatalog::maya();
    if config.pipeline.deduplicate_terms {
        catalog.deduplicated()
    } else {
        catalog
    }
}

fn build_pipeline(config: &Config) -> Result<BatchPipeline<SerplyClient, TogetherClient>> {
    let search = SerplyClient::new(&config.search, config.search_api_key()?)
        .context("Failed to create search client")?;
    let generation = TogetherClient::new(&config.generation, config.generation_api_key()?)
        .context("Failed to create generation client")?;
    Ok(BatchPipeline::new(config, search, generation))
}

fn cmd_terms(config: &Config) {
    let catalog = load_catalog(config);
    println!("\nTerm catalog ({} terms)\n", catalog.len());
    for (idx, term) in catalog.terms().iter().enumerate() {
        println!("{:>4}. {}", idx, term);
    }
}

async fn cmd_entry(config: &Config, selection: &TermSelection, json: bool) -> Result<()> {
    let catalog = load_catalog(config);

    // Resolve and validate before any client exists, so blank input never
    // reaches the network.
    let term = match catalog
        .resolve(selection)
        .and_then(|raw| Term::parse(&raw))
    {
        Ok(term) => term,
        Err(DictionaryError::Validation(reason)) => {
            println!("{}", format_warning(SELECT_TERM_WARNING));
            info!("Entry not generated: {}", reason);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let timer = OperationTimer::new(&format!("entry '{}'", term));
    let pipeline = build_pipeline(config)?;

    let report = match pipeline.generate_one(term.as_str()).await {
        Ok(report) => report,
        Err(e) if e.is_term_failure() => {
            println!("{}", format_error(&e.to_string()));
            return Ok(());
        }
        Err(e) => return Err(e).context("Entry generation failed"),
    };

    if let Some(notice) = &report.notice {
        println!("{}", format_warning(notice));
    }

    println!("\n{}\n", report.entry.term());
    println!("{}\n", report.entry.definition());
    if report.entry.has_sources() {
        println!("{}", format_info(&format!("{} sources", report.entry.sources().len())));
    }

    save(config, &report.file)?;

    if json {
        let exporter = JsonExporter::new(&config.output.directory)?;
        let path = exporter.export_entries(
            report.file.stem(),
            std::slice::from_ref(&report.entry),
            true,
        )?;
        println!("{}", format_success(&format!("JSON written to {}", path.display())));
    }

    timer.finish();
    Ok(())
}

async fn cmd_batch(config: &Config, limit: Option<usize>, json: bool) -> Result<()> {
    let mut catalog = load_catalog(config);
    if let Some(limit) = limit {
        catalog = catalog.truncated(limit);
    }

    let timer = OperationTimer::new("batch generation");
    let pipeline = build_pipeline(config)?;

    let token = pipeline.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping after the current term");
            token.cancel();
        }
    });

    let report = pipeline
        .generate_all(&catalog)
        .await
        .context("Batch generation failed")?;

    for outcome in report.notices() {
        if let Some(notice) = &outcome.notice {
            println!("{}", format_warning(notice));
        }
    }

    if report.cancelled {
        println!(
            "{}",
            format_warning(&format!(
                "Cancelled: {} of {} terms processed",
                report.outcomes.len(),
                catalog.len()
            ))
        );
    }

    save(config, &report.file)?;

    if json {
        let exporter = JsonExporter::new(&config.output.directory)?;
        let path = exporter.export_entries(report.file.stem(), &report.entries, true)?;
        println!("{}", format_success(&format!("JSON written to {}", path.display())));
    }

    println!(
        "{}",
        format_info(&format!(
            "{} entries assembled, {} skipped, {} failed ({:.2}% success)",
            report.stats.terms_assembled,
            report.stats.terms_skipped,
            report.stats.terms_failed,
            report.stats.success_rate()
        ))
    );

    timer.finish_with_count(report.entries.len());
    Ok(())
}

fn save(config: &Config, file: &GeneratedFile) -> Result<()> {
    let path = write_file(&config.output.directory, file)
        .with_context(|| format!("Failed to write {}", file.file_name))?;
    println!(
        "{}",
        format_success(&format!("{} written to {}", file.mime_type, path.display()))
    );
    Ok(())
}
