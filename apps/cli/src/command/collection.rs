use super::{Command, print_json};
use crate::error::Result;
use content_core::{CollectionKind, ContentIndex};
use std::sync::Arc;

pub struct CollectionCommand {
    index: Arc<ContentIndex>,
    kind: CollectionKind,
    id: String,
}

impl CollectionCommand {
    pub fn new(index: Arc<ContentIndex>, kind: CollectionKind, id: String) -> Self {
        Self { index, kind, id }
    }
}

#[async_trait::async_trait]
impl Command for CollectionCommand {
    async fn execute(&self) -> Result<()> {
        let items = self.index.collection_items(self.kind, &self.id).await;
        if items.is_empty() {
            tracing::warn!("文集 {}/{} 中没有文档", self.kind.dir(), self.id);
        }
        print_json(&items)
    }
}
