use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

use pmbus_transport as pmbus;
use psu_registry as registry;

#[derive(Parser, Debug)]
#[command(
    name = "psutils",
    version,
    about = "PSU firmware utilities",
    disable_help_subcommand = true
)]
struct Cli {
    /// PSU descriptor JSON
    #[arg(long, global = true, default_value = registry::DEFAULT_PSU_JSON_PATH)]
    config: PathBuf,

    /// Transport backend
    #[arg(long, value_enum, global = true, default_value_t = Backend::Sysfs)]
    backend: Backend,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Backend {
    Mock,
    Sysfs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the firmware version of a PSU (empty if unknown)
    GetVersion {
        /// Inventory path of the PSU
        inventory_path: String,
    },
    /// Show where and how a PSU's version would be read
    Resolve {
        /// Inventory path of the PSU
        inventory_path: String,
    },
    /// Print the latest of the given versions
    Compare {
        #[arg(required = true)]
        versions: Vec<String>,
    },
}

// Version the mock backend serves for any resolved device.
const MOCK_VERSION: &str = "0000";

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();
    let config = registry::VersionConfig::new(&cli.config);

    match cli.command {
        Commands::GetVersion { inventory_path } => {
            println!("{}", get_version(cli.backend, &config, &inventory_path));
            Ok(())
        }
        Commands::Resolve { inventory_path } => resolve(&config, &inventory_path),
        Commands::Compare { versions } => {
            println!("{}", registry::get_latest(&versions));
            Ok(())
        }
    }
}

fn setup_tracing() {
    // Best-effort; stdout carries the result, logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn get_version(backend: Backend, config: &registry::VersionConfig, inventory_path: &str) -> String {
    match backend {
        Backend::Sysfs => registry::get_version_with::<pmbus::SysfsDevice>(config, inventory_path),
        Backend::Mock => {
            let Some(info) = registry::get_version_info(config, inventory_path) else {
                return String::new();
            };
            info!(device = %info.device_path, "serving mock version");
            pmbus::MockDevice::install(
                info.device_path.as_str(),
                info.access_type,
                &info.version_file,
                MOCK_VERSION,
            );
            registry::version_from_info::<pmbus::MockDevice>(&info, inventory_path)
        }
    }
}

fn resolve(config: &registry::VersionConfig, inventory_path: &str) -> Result<()> {
    let desc = registry::load_descriptor_file(&config.psu_json_path)?;
    let info = registry::resolve_version_info(&desc, inventory_path)?;
    println!("device\t{}", info.device_path);
    println!("access\t{}", info.access_type);
    println!("file\t{}", info.version_file);
    Ok(())
}
