mod cli;
mod command;
mod config;
mod error;

use std::sync::Arc;

use clap::CommandFactory;
use clap::Parser;
use content_core::ContentIndex;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;
    let command_line = cli::Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(command_line.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = command_line.command else {
        cli::Cli::command().print_help()?;
        return Ok(());
    };

    let mut cfg = config::Config::load()?;
    if let Some(root) = command_line.root {
        cfg.content.content_root = root;
    }
    if let Some(base_path) = command_line.base_path {
        cfg.content.base_path = base_path;
    }
    tracing::debug!("使用配置: {}", cfg.path.display());

    let index = ContentIndex::from_config(&cfg.content)
        .map_err(|e| error::error!("{:#}", e))?;
    tracing::info!(
        "已载入 {} 个文档 ({} 个 slug 冲突)",
        index.document_count(),
        index.duplicates().len()
    );
    let index = Arc::new(index);

    let cmd: Box<dyn command::Command> = match command {
        cli::Commands::List { category } => Box::new(command::ListCommand::new(index, category)),
        cli::Commands::Show { slug } => Box::new(command::ShowCommand::new(index, slug)),
        cli::Commands::Site => Box::new(command::SiteCommand::new(index)),
        cli::Commands::Catalog { kind } => Box::new(command::CatalogCommand::new(index, kind)),
        cli::Commands::Collection { kind, id } => {
            Box::new(command::CollectionCommand::new(index, kind, id))
        }
        cli::Commands::Order { index_slug } => {
            Box::new(command::OrderCommand::new(index, index_slug))
        }
    };
    cmd.execute().await?;

    Ok(())
}
