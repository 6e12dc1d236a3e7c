// content-core/src/lib.rs
//! 内容索引核心库
//!
//! 把一棵 markdown 文档树整理成可导航的内容图：
//! - 文章列表与分类/二级分类
//! - 诗集、小说集等文集及其篇目
//! - 目录页中链接给出的篇目顺序
//! - 由 slug 解析出带渲染正文的完整文章

pub mod category;
pub mod collection;
pub mod config;
pub mod documents;
pub mod error;
pub mod frontmatter;
pub mod indexer;
pub mod loader;
pub mod markdown;
pub mod models;
pub mod resolver;
pub mod siblings;
pub mod site;
pub mod slug;

// 重导出核心类型
pub use category::CategoryMap;
pub use config::{CategoryEntry, ContentConfig, WalkerConfig};
pub use documents::{DocumentRef, DocumentSet};
pub use error::{ContentError, ContentResult};
pub use indexer::{CONFIG_SLUGS, IndexReport, SkippedDocument};
pub use loader::{ContentRegistry, DocumentLoader, DocumentSource, FsSource, LoaderValue};
pub use models::{
    ArticleMeta, CollectionCatalog, CollectionEntry, CollectionItem, CollectionKind, FullArticle,
    Neighbors, SiteConfig,
};
pub use site::Resolved;
pub use slug::path_to_slug;

/// 内容索引统一入口
///
/// 构造时枚举文档并确定 slug；之后只读，可在多个任务间共享。
#[derive(Debug)]
pub struct ContentIndex {
    documents: DocumentSet,
    categories: CategoryMap,
    base_path: String,
}

impl ContentIndex {
    /// 用任意文档源创建索引
    pub fn new(loader: DocumentLoader, categories: CategoryMap, base_path: impl Into<String>) -> Self {
        let documents = DocumentSet::new(loader);
        let base_path = base_path.into().trim_end_matches('/').to_string();
        Self {
            documents,
            categories,
            base_path,
        }
    }

    /// 按配置扫描内容目录并创建索引
    pub fn from_config(config: &ContentConfig) -> anyhow::Result<Self> {
        let source = FsSource::scan(&config.content_root, &config.walker)?;
        Ok(Self::new(
            DocumentLoader::new(source),
            CategoryMap::from_config(&config.categories),
            config.normalized_base_path(),
        ))
    }

    pub fn documents(&self) -> &DocumentSet {
        &self.documents
    }

    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// 构造时因 slug 冲突被丢弃的文档
    pub fn duplicates(&self) -> &[ContentError] {
        self.documents.duplicates()
    }

    /// 站点配置（分类顺序与命名链接）
    pub async fn site_config(&self) -> SiteConfig {
        self.site_config_resolved().await.into_inner()
    }

    pub async fn site_config_resolved(&self) -> Resolved<SiteConfig> {
        site::site_config(&self.documents).await
    }

    /// 诗歌/小说的文集目录
    pub async fn collection_catalog(&self, kind: CollectionKind) -> CollectionCatalog {
        self.collection_catalog_resolved(kind).await.into_inner()
    }

    pub async fn collection_catalog_resolved(
        &self,
        kind: CollectionKind,
    ) -> Resolved<CollectionCatalog> {
        site::collection_catalog(&self.documents, kind).await
    }

    /// 全部文章，按日期降序
    pub async fn build_index(&self) -> Vec<ArticleMeta> {
        indexer::build_index(&self.documents).await
    }

    pub async fn build_index_report(&self) -> IndexReport {
        indexer::build_index_report(&self.documents).await
    }

    /// 某分类下的文章；参数可以是中文分类名，也可以是分类 slug
    pub async fn articles_in_category(&self, category: &str) -> Vec<ArticleMeta> {
        let name = self.categories.resolve_name(category);
        indexer::filter_category(&self.build_index().await, &name)
    }

    /// 某分类下的二级项
    pub async fn subcategories(&self, category: &str) -> Vec<ArticleMeta> {
        let name = self.categories.resolve_name(category);
        indexer::filter_subcategories(&self.build_index().await, &name)
    }

    /// 以某文章为上级的文章
    pub async fn children_of(&self, parent_slug: &str) -> Vec<ArticleMeta> {
        indexer::filter_children(&self.build_index().await, parent_slug)
    }

    /// 文集篇目
    pub async fn collection_items(
        &self,
        kind: CollectionKind,
        collection_id: &str,
    ) -> Vec<CollectionItem> {
        collection::collection_items(&self.documents, kind, collection_id).await
    }

    /// 目录页给出的篇目顺序
    pub async fn ordered_siblings(&self, index_slug: &str) -> Vec<String> {
        siblings::ordered_siblings(&self.documents, index_slug).await
    }

    /// 目录页顺序中的上一篇/下一篇
    pub async fn neighbors(&self, index_slug: &str, slug: &str) -> Neighbors {
        let order = self.ordered_siblings(index_slug).await;
        siblings::neighbors(&order, slug)
    }

    /// 按 slug 取得完整文章
    pub async fn resolve(&self, raw_slug: &str) -> Option<FullArticle> {
        resolver::resolve_article(&self.documents, raw_slug, &self.base_path).await
    }
}
