//! projctl CLI
//!
//! Non-interactive front end: read or change one setting, send a remote key,
//! or capture/restore a settings document.
//!
//! Exit codes: 0 success, 1 device did not confirm, 2 usage or invalid
//! argument, 3 serial link failure.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use projctl::catalog;
use projctl::protocol::DeviceId;
use projctl::settings::{self, DocumentFormat, KeyOutcome};
use projctl::{Config, Controller, ProjectorError, Query, SettingsDocument, Value};
use tracing_subscriber::{fmt, EnvFilter};

const SUCCESS: i32 = 0;
const DEVICE_FAILURE: i32 = 1;
const USAGE: i32 = 2;
const TRANSPORT_ERROR: i32 = 3;

/// projctl
#[derive(Parser, Debug)]
#[command(name = "projctl")]
#[command(about = "RS-232 control for DDP projectors")]
#[command(version)]
struct Args {
    /// Serial port
    #[arg(short, long, default_value_t = Config::default().port)]
    port: String,

    /// Baud rate
    #[arg(short, long, default_value = "9600")]
    baud: u32,

    /// Projector id (00 = broadcast)
    #[arg(short, long, default_value = "00")]
    device_id: DeviceId,

    /// Reply timeout in milliseconds
    #[arg(short, long, default_value = "1000")]
    timeout_ms: u64,

    /// Log every frame sent and received
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read a feature
    Get {
        /// Feature name (see `features`)
        feature: String,
    },

    /// Change a feature
    Set {
        /// Feature name (see `features`)
        feature: String,

        /// New value: on/off, a number, or a label such as "HDMI 1"
        value: String,
    },

    /// Send a value-less command (remote key, reset, ...)
    Do {
        /// Action name (see `features`)
        action: String,
    },

    /// Print the system information snapshot
    Status,

    /// List known features and actions
    Features,

    /// Capture or restore settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Capture current settings to a file
    Save {
        file: PathBuf,

        /// json or toml (default: from the file extension)
        #[arg(short, long)]
        format: Option<DocumentFormat>,
    },

    /// Apply settings from a file
    Load {
        file: PathBuf,

        /// Also restore the power state
        #[arg(long)]
        include_power: bool,
    },

    /// Capture current settings and print them as JSON
    Show,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr; stdout carries data
    let default_filter = if args.verbose {
        "warn,projctl=debug"
    } else {
        "warn,projctl=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let code = match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            exit_code(&e)
        }
    };
    process::exit(code);
}

fn run(args: &Args) -> projctl::Result<i32> {
    match &args.command {
        Commands::Features => {
            print_features();
            Ok(SUCCESS)
        }

        Commands::Get { feature } => {
            let feature = lookup_feature(feature)?;
            let mut projector = open(args)?;
            let outcome = projector.query(feature)?;
            println!("{}", outcome);
            Ok(if outcome.is_known() { SUCCESS } else { DEVICE_FAILURE })
        }

        Commands::Set { feature, value } => {
            let feature = lookup_feature(feature)?;
            let value = Value::parse_loose(value);
            // Validate before touching the port
            if let Some(command) = feature.command {
                command.domain.validate(feature.name, &value)?;
            }
            let mut projector = open(args)?;
            let ack = projector.apply(feature, &value)?;
            println!("{}", ack);
            Ok(if ack.is_confirmed() { SUCCESS } else { DEVICE_FAILURE })
        }

        Commands::Do { action } => {
            let action = catalog::action(action)
                .ok_or_else(|| ProjectorError::UnknownFeature(action.clone()))?;
            let mut projector = open(args)?;
            let ack = projector.invoke(action)?;
            println!("{}", ack);
            Ok(if ack.is_confirmed() { SUCCESS } else { DEVICE_FAILURE })
        }

        Commands::Status => {
            let mut projector = open(args)?;
            match projector.system_info()? {
                Query::Known(info) => {
                    println!("{}", info);
                    Ok(SUCCESS)
                }
                Query::Unknown(reason) => {
                    println!("unknown ({})", reason);
                    Ok(DEVICE_FAILURE)
                }
            }
        }

        Commands::Config { command } => run_config(args, command),
    }
}

fn run_config(args: &Args, command: &ConfigCommand) -> projctl::Result<i32> {
    match command {
        ConfigCommand::Save { file, format } => {
            let format = match format {
                Some(format) => *format,
                None => DocumentFormat::from_path(file)?,
            };
            let mut projector = open(args)?;
            let capture = settings::capture_snapshot(&mut projector);
            capture.document.save(file, format)?;

            println!(
                "Saved {} settings to {}",
                capture.document.len(),
                file.display()
            );
            for (key, reason) in &capture.report.omitted {
                println!("  omitted {}: {}", key, reason);
            }
            Ok(SUCCESS)
        }

        ConfigCommand::Load {
            file,
            include_power,
        } => {
            let document = SettingsDocument::load(file)?;
            let mut projector = open(args)?;
            let report = settings::apply_config(&mut projector, &document, !include_power);

            for (key, outcome) in &report.outcomes {
                if *outcome != KeyOutcome::SkippedAbsent {
                    println!("{:<18} {}", key, outcome);
                }
            }
            Ok(if report.all_applied() {
                SUCCESS
            } else {
                DEVICE_FAILURE
            })
        }

        ConfigCommand::Show => {
            let mut projector = open(args)?;
            let capture = settings::capture_config(&mut projector);
            println!("{}", capture.document.to_json()?);
            Ok(SUCCESS)
        }
    }
}

fn open(args: &Args) -> projctl::Result<Controller> {
    let config = Config::builder()
        .port(&args.port)
        .baud_rate(args.baud)
        .device_id(args.device_id)
        .read_timeout_ms(args.timeout_ms)
        .build();
    Controller::open(&config)
}

fn lookup_feature(name: &str) -> projctl::Result<&'static catalog::FeatureSpec> {
    catalog::feature(name).ok_or_else(|| ProjectorError::UnknownFeature(name.to_string()))
}

fn print_features() {
    println!("Features:");
    for feature in catalog::FEATURES {
        let access = match (feature.is_readable(), feature.is_writable()) {
            (true, true) => "rw",
            (true, false) => "r ",
            (false, true) => " w",
            (false, false) => "  ",
        };
        let accepts = feature
            .command
            .map(|c| c.domain.describe())
            .unwrap_or_default();
        println!(
            "  {:<18} {}  {:<34} {}",
            feature.name, access, feature.description, accepts
        );
    }

    println!("\nActions:");
    for action in catalog::ACTIONS {
        println!("  {:<18} {}", action.name, action.description);
    }
}

fn exit_code(error: &ProjectorError) -> i32 {
    match error {
        e if e.is_transport() => TRANSPORT_ERROR,
        ProjectorError::InvalidArgument { .. }
        | ProjectorError::Unsupported { .. }
        | ProjectorError::UnknownFeature(_)
        | ProjectorError::Config(_) => USAGE,
        _ => DEVICE_FAILURE,
    }
}
