pub mod catalog;
pub mod collection;
pub mod list;
pub mod order;
pub mod show;
pub mod site;

use crate::error::Result;
use serde::Serialize;

pub use catalog::CatalogCommand;
pub use collection::CollectionCommand;
pub use list::ListCommand;
pub use order::OrderCommand;
pub use show::ShowCommand;
pub use site::SiteCommand;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// 以缩进 JSON 输出到标准输出
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
