use super::{Command, print_json};
use crate::error::{Result, error};
use content_core::ContentIndex;
use std::sync::Arc;

pub struct ShowCommand {
    index: Arc<ContentIndex>,
    slug: String,
}

impl ShowCommand {
    pub fn new(index: Arc<ContentIndex>, slug: String) -> Self {
        Self { index, slug }
    }
}

#[async_trait::async_trait]
impl Command for ShowCommand {
    async fn execute(&self) -> Result<()> {
        let article = self
            .index
            .resolve(&self.slug)
            .await
            .ok_or_else(|| error!("Article not found: {}", self.slug))?;
        print_json(&article)
    }
}
