use autoname::commands::{resolve_config, run_name, run_plan, run_schema, NamingOverrides};
use autoname::logging::{init_logging, LogConfig, LogFormat};
use autoname::CliError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// autoname - convention-based logical names for infrastructure resources
#[derive(Parser)]
#[command(name = "autoname")]
#[command(about = "Derive stable, collision-free names for infrastructure resources", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to autoname.toml or autoname.json (discovered if omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue one logical name per type descriptor
    Name {
        /// Type descriptors, e.g. aws:ec2/instance:Instance
        #[arg(required = true)]
        types: Vec<String>,
        #[command(flatten)]
        naming: NamingOverrides,
    },
    /// Name every resource in a JSON plan file
    Plan {
        /// Plan file (`-` for stdin)
        #[arg(short, long)]
        input: PathBuf,
        /// Print the planned resources as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        naming: NamingOverrides,
    },
    /// Print the JSON Schema of the config file
    Schema {
        /// Describe the plan input instead
        #[arg(long)]
        plan: bool,
        /// Output file path (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Name { types, naming } => {
            let config = resolve_config(cli.config.as_deref(), &naming)?;
            run_name(&config, &types)
        }
        Commands::Plan {
            input,
            json,
            naming,
        } => {
            let config = resolve_config(cli.config.as_deref(), &naming)?;
            run_plan(&config, &input, json)
        }
        Commands::Schema { plan, output } => run_schema(plan, output),
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    init_logging(&LogConfig {
        verbose: cli.verbose,
        format: cli.log_format,
    })
    .map_err(CliError::Other)?;

    run(cli)?;
    Ok(())
}
