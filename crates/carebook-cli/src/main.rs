use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use carebook_cli::commands;
use carebook_cli::config::{self, RenderConfig, CONFIG_ENV};

#[derive(Parser)]
#[command(name = "carebook")]
#[command(about = "Render care-management checklists to outlines and documents")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Input {
    /// Bundled form slug
    #[arg(long)]
    form: Option<String>,
    /// JSON file with an array of field descriptors
    #[arg(long)]
    schema: Option<PathBuf>,
    /// Submission envelope as returned by the backend
    #[arg(long)]
    submission: Option<PathBuf>,
    /// Flat JSON object of field id → answer
    #[arg(long)]
    values: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List bundled forms
    Forms,
    /// Report schema and answer problems
    Validate {
        #[command(flatten)]
        input: Input,
    },
    /// Print the rendered form as an indented outline
    Outline {
        #[command(flatten)]
        input: Input,
        /// Print the rendered tree as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Write the rendered form as a DOCX document
    Docx {
        #[command(flatten)]
        input: Input,
        /// Output path
        #[arg(long, short)]
        out: PathBuf,
        /// Refuse answers that do not fit the schema
        #[arg(long)]
        strict: bool,
    },
    /// Write a default config file
    InitConfig,
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.log_json);

    match cli.command {
        Commands::Forms => {
            print!("{}", commands::list_forms());
        }
        Commands::Validate { input } => {
            let form = commands::load_form(input.form.as_deref(), input.schema.as_deref())?;
            let answers = commands::load_answers(
                form.as_ref(),
                input.submission.as_deref(),
                input.values.as_deref(),
            )?;
            let messages = commands::validate(form.as_ref(), &answers);
            for message in &messages {
                println!("{message}");
            }
            if !messages.is_empty() {
                return Err(eyre::eyre!("{} problem(s) in {}", messages.len(), form.slug()));
            }
            println!("{}: ok", form.slug());
        }
        Commands::Outline { input, json } => {
            let config = config::load_config(cli.config.as_deref())?;
            let form = commands::load_form(input.form.as_deref(), input.schema.as_deref())?;
            let answers = commands::load_answers(
                form.as_ref(),
                input.submission.as_deref(),
                input.values.as_deref(),
            )?;
            if json {
                println!("{}", commands::outline_json(form.as_ref(), &answers)?);
            } else {
                print!("{}", commands::outline(form.as_ref(), &answers, &config));
            }
        }
        Commands::Docx { input, out, strict } => {
            let config = config::load_config(cli.config.as_deref())?;
            let form = commands::load_form(input.form.as_deref(), input.schema.as_deref())?;
            let answers = commands::load_answers(
                form.as_ref(),
                input.submission.as_deref(),
                input.values.as_deref(),
            )?;
            let bytes = commands::docx(form.as_ref(), &answers, &config, strict)?;
            std::fs::write(&out, &bytes)?;
            tracing::info!(path = %out.display(), bytes = bytes.len(), "document written");
        }
        Commands::InitConfig => {
            let path = match cli.config {
                Some(path) => path,
                None => config::default_config_path()?,
            };
            config::save_config(&RenderConfig::default(), &path)?;
            println!("wrote {}", path.display());
        }
    }

    Ok(())
}
