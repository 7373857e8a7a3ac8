//! Operator tool for inspecting and toggling workspace feature flags

use std::{path::PathBuf, process::ExitCode, sync::Arc};

use clap::{Parser, Subcommand};

use flagstore_core::feature_flag::PUBLIC_FEATURE_FLAGS;
use flagstore_core::{FeatureFlagService, UpsertFeatureFlag};
use flagstore_feature_flag_adapter_sqlite::{AdapterConfig, FeatureFlagAdapterSqlite};
use flagstore_types::feature_flag::FeatureFlagKey;
use flagstore_types::prelude::*;

const DB_FILE: &str = "flags.db";

#[derive(Debug, Parser)]
#[command(author, version, about = "Inspect and toggle per-workspace feature flags")]
struct Cli {
	/// Directory holding the feature flag database
	#[arg(long, env = "DB_DIR", default_value = "./data")]
	db_dir: PathBuf,

	/// Workspace the command applies to
	#[arg(long, env = "WORKSPACE_ID")]
	workspace: Option<String>,

	/// Maximum number of pooled database connections
	#[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
	max_connections: u32,

	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Print every stored flag of the workspace
	List,
	/// Print whether a flag is enabled
	Get {
		#[arg(value_parser = parse_key)]
		key: FeatureFlagKey,
	},
	/// Enable one or more flags
	Enable {
		#[arg(required = true, value_parser = parse_key)]
		keys: Vec<FeatureFlagKey>,
	},
	/// Set a single flag
	Set {
		key: String,
		#[arg(action = clap::ArgAction::Set)]
		value: bool,
		/// Only allow flags exposed through public call paths
		#[arg(long)]
		public: bool,
	},
	/// Print the public flag catalogue as JSON
	Public,
}

fn parse_key(s: &str) -> Result<FeatureFlagKey, FeatureFlagError> {
	s.parse()
}

fn workspace_id(cli: &Cli) -> ClResult<WorkspaceId> {
	cli.workspace
		.as_deref()
		.map(WorkspaceId::from)
		.ok_or_else(|| Error::ConfigError("--workspace or WORKSPACE_ID is required".into()))
}

async fn open_service(cli: &Cli) -> ClResult<FeatureFlagService> {
	let config = AdapterConfig { max_connections: cli.max_connections, ..Default::default() };
	let adapter = FeatureFlagAdapterSqlite::new(cli.db_dir.join(DB_FILE), config).await?;

	Ok(FeatureFlagService::new(Arc::new(adapter)))
}

async fn run(cli: Cli) -> ClResult<()> {
	match &cli.command {
		Command::List => {
			let workspace_id = workspace_id(&cli)?;
			let service = open_service(&cli).await?;
			for flag in service.get_workspace_feature_flags(&workspace_id).await? {
				println!("{}={}", flag.key, flag.value);
			}
		}
		Command::Get { key } => {
			let workspace_id = workspace_id(&cli)?;
			let enabled = open_service(&cli).await?.is_feature_enabled(*key, &workspace_id).await?;
			println!("{}={}", key, enabled);
		}
		Command::Enable { keys } => {
			let workspace_id = workspace_id(&cli)?;
			open_service(&cli).await?.enable_feature_flags(keys, &workspace_id).await?;
		}
		Command::Set { key, value, public } => {
			let input = UpsertFeatureFlag::new(workspace_id(&cli)?, key.as_str(), *value).public(*public);
			let flag = open_service(&cli).await?.upsert_workspace_feature_flag(input).await?;
			println!("{}={}", flag.key, flag.value);
		}
		Command::Public => {
			let json = serde_json::to_string_pretty(PUBLIC_FEATURE_FLAGS)
				.map_err(|err| Error::Serialization(err.to_string()))?;
			println!("{}", json);
		}
	}

	Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();

	match run(Cli::parse()).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("error: {}", err);
			ExitCode::FAILURE
		}
	}
}


// vim: ts=4
