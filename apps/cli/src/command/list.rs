use super::{Command, print_json};
use crate::error::Result;
use content_core::ContentIndex;
use std::sync::Arc;

pub struct ListCommand {
    index: Arc<ContentIndex>,
    category: Option<String>,
}

impl ListCommand {
    pub fn new(index: Arc<ContentIndex>, category: Option<String>) -> Self {
        Self { index, category }
    }
}

#[async_trait::async_trait]
impl Command for ListCommand {
    async fn execute(&self) -> Result<()> {
        let articles = match &self.category {
            Some(category) => self.index.articles_in_category(category).await,
            None => {
                let report = self.index.build_index_report().await;
                for skipped in &report.skipped {
                    eprintln!("跳过 {}: {}", skipped.path, skipped.error);
                }
                report.articles
            }
        };
        print_json(&articles)
    }
}
