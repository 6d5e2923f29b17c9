use std::path::PathBuf;

use alfresco_client::nodes::{self, models::ListOptions};
use alfresco_client::{get_repository_info, load_config, AlfrescoClient, ClientConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

/// Command-line access to an Alfresco Content Services repository.
#[derive(Debug, Parser)]
#[clap(
    name = "alfresco",
    version,
    about = "Inspect and manage nodes in an Alfresco repository"
)]
pub struct Cli {
    /// YAML config file; without it ALFRESCO_URL and friends are read from the environment
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Node operations
    Node {
        #[clap(subcommand)]
        command: NodeCommand,
    },
    /// Repository information
    Repo {
        #[clap(subcommand)]
        command: RepoCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum NodeCommand {
    /// Print a node
    Get {
        /// Node id or alias (-root-, -my-, -shared-)
        id: String,
    },
    /// List the children of a node
    Children {
        id: String,
        #[clap(long)]
        max_items: Option<i64>,
    },
    /// Create a folder
    Mkdir { parent: String, name: String },
    /// Delete a node
    Delete {
        id: String,
        /// Skip the trashcan
        #[clap(long)]
        permanent: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum RepoCommand {
    /// Print edition, version and status
    Info,
}

fn client_for(config: Option<&PathBuf>) -> Result<AlfrescoClient> {
    let config = match config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ClientConfig::from_env().context("reading configuration from the environment")?,
    };
    Ok(AlfrescoClient::from_config(&config)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Entry point shared by `main` and the integration tests.
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!(command = ?cli.command, "Running command");
    let client = client_for(cli.config.as_ref())?;

    match cli.command {
        Commands::Repo {
            command: RepoCommand::Info,
        } => print_json(&get_repository_info(&client).await?),
        Commands::Node { command } => match command {
            NodeCommand::Get { id } => print_json(&nodes::get_node(&client, &id).await?),
            NodeCommand::Children { id, max_items } => {
                let options = ListOptions {
                    max_items,
                    ..Default::default()
                };
                print_json(&nodes::list_children(&client, &id, &options).await?)
            }
            NodeCommand::Mkdir { parent, name } => {
                print_json(&nodes::create_folder(&client, &parent, &name).await?)
            }
            NodeCommand::Delete { id, permanent } => {
                nodes::delete_node(&client, &id, permanent).await?;
                print_json(&serde_json::json!({ "deleted": id, "permanent": permanent }))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_nested_node_command() {
        let cli = Cli::parse_from(["alfresco", "node", "children", "-root-", "--max-items", "5"]);
        match cli.command {
            Commands::Node {
                command: NodeCommand::Children { id, max_items },
            } => {
                assert_eq!(id, "-root-");
                assert_eq!(max_items, Some(5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::parse_from(["alfresco", "repo", "info", "--config", "acs.yaml"]);
        assert_eq!(cli.config, Some(PathBuf::from("acs.yaml")));
    }
}
