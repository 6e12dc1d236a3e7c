use super::site::report_fallback;
use super::{Command, print_json};
use crate::error::Result;
use content_core::{CollectionKind, ContentIndex};
use std::sync::Arc;

pub struct CatalogCommand {
    index: Arc<ContentIndex>,
    kind: CollectionKind,
}

impl CatalogCommand {
    pub fn new(index: Arc<ContentIndex>, kind: CollectionKind) -> Self {
        Self { index, kind }
    }
}

#[async_trait::async_trait]
impl Command for CatalogCommand {
    async fn execute(&self) -> Result<()> {
        let resolved = self.index.collection_catalog_resolved(self.kind).await;
        report_fallback(self.kind.catalog_slug(), &resolved);
        print_json(resolved.value())
    }
}
