//! Trellis Admin CLI
//!
//! Prints the panel configuration the demo controllers produce, as JSON.
//!
//! ## Usage
//!
//! ```bash
//! trellis-admin show
//! trellis-admin --config trellis.toml create
//! TRELLIS_ROUTE_PREFIX=backoffice trellis-admin -v list
//! trellis-admin groups
//! ```

use std::path::PathBuf;
use std::process;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use tracing_subscriber::EnvFilter;
use trellis_demo::DummyCrudController;
use trellis_panel::{CrudController, FieldDefinition, Operation, Settings};

#[derive(Parser)]
#[command(name = "trellis-admin")]
#[command(about = "Trellis CRUD panel inspector", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Settings file (TOML)
	#[arg(short, long, value_name = "FILE", global = true)]
	config: Option<PathBuf>,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbosity: u8,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
	/// Panel of the list operation
	List,
	/// Panel of the create operation
	Create,
	/// Panel of the update operation
	Update,
	/// Panel of the delete operation
	Delete,
	/// Panel of the show operation
	Show,
	/// Repeatable groups after filtering
	Groups,
}

impl Commands {
	fn operation(self) -> Option<Operation> {
		match self {
			Commands::List => Some(Operation::List),
			Commands::Create => Some(Operation::Create),
			Commands::Update => Some(Operation::Update),
			Commands::Delete => Some(Operation::Delete),
			Commands::Show => Some(Operation::Show),
			Commands::Groups => None,
		}
	}
}

fn main() {
	let cli = Cli::parse();

	if let Err(e) = run(cli) {
		eprintln!("Error: {:#}", e);
		process::exit(1);
	}
}

fn run(cli: Cli) -> anyhow::Result<()> {
	let settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
	init_tracing(&settings.logging.filter, cli.verbosity)?;

	println!("{}", render(cli.command, &settings)?);
	Ok(())
}

/// `RUST_LOG` wins over the settings filter; `-v` and `-vv` win over both
fn init_tracing(filter: &str, verbosity: u8) -> anyhow::Result<()> {
	let filter = match verbosity {
		0 => EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(filter))?,
		1 => EnvFilter::new("debug"),
		_ => EnvFilter::new("trace"),
	};
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init()
		.map_err(|e| anyhow::anyhow!(e))
}

/// Pretty JSON for `command`, keeping declaration order
fn render(command: Commands, settings: &Settings) -> anyhow::Result<String> {
	let controller = DummyCrudController::new();

	let Some(operation) = command.operation() else {
		let groups: IndexMap<&str, Vec<FieldDefinition>> = controller
			.groups()
			.into_iter()
			.map(|(group, fields)| (group.key(), fields))
			.collect();
		return Ok(serde_json::to_string_pretty(&groups)?);
	};

	tracing::info!(%operation, route_prefix = %settings.admin.route_prefix, "configuring panel");
	let panel = controller
		.configure(operation, &settings.admin)
		.with_context(|| format!("failed to configure the {operation} panel"))?;
	Ok(serde_json::to_string_pretty(&panel.snapshot())?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;
	use rstest::rstest;
	use serde_json::Value;

	#[test]
	fn test_cli_definition() {
		Cli::command().debug_assert();
	}

	#[rstest]
	#[case(&["trellis-admin", "show"], Commands::Show, None)]
	#[case(&["trellis-admin", "--config", "a.toml", "list"], Commands::List, Some("a.toml"))]
	#[case(&["trellis-admin", "groups", "-c", "b.toml"], Commands::Groups, Some("b.toml"))]
	fn test_parse(#[case] args: &[&str], #[case] command: Commands, #[case] config: Option<&str>) {
		let cli = Cli::try_parse_from(args).unwrap();
		assert_eq!(cli.command, command);
		assert_eq!(cli.config, config.map(PathBuf::from));
	}

	#[test]
	fn test_unknown_operation_is_rejected() {
		assert!(Cli::try_parse_from(["trellis-admin", "archive"]).is_err());
	}

	#[rstest]
	#[case(Commands::List, "list")]
	#[case(Commands::Update, "update")]
	#[case(Commands::Show, "show")]
	fn test_render_operation(#[case] command: Commands, #[case] expected: &str) {
		let output: Value = serde_json::from_str(&render(command, &Settings::default()).unwrap()).unwrap();
		assert_eq!(output["operation"], expected);
		assert_eq!(output["route"], "admin/dummy");
	}

	#[test]
	fn test_render_groups() {
		let output = render(Commands::Groups, &Settings::default()).unwrap();
		let groups: IndexMap<String, Vec<Value>> = serde_json::from_str(&output).unwrap();

		let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
		assert_eq!(keys.first(), Some(&"simple"));
		assert_eq!(keys.last(), Some(&"miscellaneous"));
		assert_eq!(keys.len(), 7);
		assert!(groups["uploads"].iter().all(|field| field["type"] != "upload"));
	}
}
