use super::{Command, print_json};
use crate::error::Result;
use content_core::ContentIndex;
use std::sync::Arc;

pub struct OrderCommand {
    index: Arc<ContentIndex>,
    index_slug: String,
}

impl OrderCommand {
    pub fn new(index: Arc<ContentIndex>, index_slug: String) -> Self {
        Self { index, index_slug }
    }
}

#[async_trait::async_trait]
impl Command for OrderCommand {
    async fn execute(&self) -> Result<()> {
        let order = self.index.ordered_siblings(&self.index_slug).await;
        print_json(&order)
    }
}
