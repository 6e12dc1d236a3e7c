// content-core/src/indexer.rs
//! 索引模块 - 文章列表构建
//!
//! 并发读取全部文档，按元数据与回退规则生成文章列表项，按日期降序排列。
//! 单个文档读取或解析失败只会让该文档从结果中消失，不影响整体构建。

use futures::future::join_all;

use crate::category::ESSAYS_CATEGORY;
use crate::documents::{DocumentRef, DocumentSet};
use crate::error::ContentError;
use crate::frontmatter::Metadata;
use crate::models::ArticleMeta;
use crate::slug::{file_stem, strip_numeric_prefix};

/// 配置用 slug，不进入文章列表
pub const CONFIG_SLUGS: [&str; 3] = ["_site", "poem/_index", "fiction/_index"];

/// 散文目录前缀
pub const ESSAYS_PREFIX: &str = "essays/";

pub fn is_config_slug(slug: &str) -> bool {
    CONFIG_SLUGS.contains(&slug)
}

/// 被跳过的文档
#[derive(Debug)]
pub struct SkippedDocument {
    pub path: String,
    pub error: ContentError,
}

/// 索引构建结果
#[derive(Debug, Default)]
pub struct IndexReport {
    /// 按日期降序排列的文章
    pub articles: Vec<ArticleMeta>,
    /// 读取失败而被跳过的文档
    pub skipped: Vec<SkippedDocument>,
}

/// 构建文章列表
pub async fn build_index(documents: &DocumentSet) -> Vec<ArticleMeta> {
    build_index_report(documents).await.articles
}

/// 构建文章列表，同时返回被跳过的文档
pub async fn build_index_report(documents: &DocumentSet) -> IndexReport {
    let candidates = documents
        .documents()
        .iter()
        .filter(|doc| !is_config_slug(&doc.slug));

    let results = join_all(candidates.map(|doc| async move {
        match documents.load(doc).await {
            Ok(extracted) => Ok(article_meta(doc, &extracted.meta)),
            Err(error) => Err(SkippedDocument {
                path: doc.path.clone(),
                error,
            }),
        }
    }))
    .await;

    let mut report = IndexReport::default();
    for result in results {
        match result {
            Ok(article) => report.articles.push(article),
            Err(skipped) => {
                tracing::warn!("解析失败，已跳过 {}: {}", skipped.path, skipped.error);
                report.skipped.push(skipped);
            }
        }
    }

    sort_by_date_desc(&mut report.articles);
    tracing::info!(
        "文章索引完成: {} 篇, 跳过 {} 个",
        report.articles.len(),
        report.skipped.len()
    );
    report
}

/// 由元数据与回退规则生成文章列表项
pub fn article_meta(doc: &DocumentRef, meta: &Metadata) -> ArticleMeta {
    let is_essay = doc.slug.starts_with(ESSAYS_PREFIX);
    let filename = file_stem(&doc.path);

    let title = meta.string("title").unwrap_or_else(|| {
        if is_essay {
            strip_numeric_prefix(filename).to_string()
        } else {
            filename.to_string()
        }
    });

    let category = meta.string("category").unwrap_or_else(|| {
        if is_essay {
            ESSAYS_CATEGORY.to_string()
        } else {
            String::new()
        }
    });

    ArticleMeta {
        slug: doc.slug.clone(),
        title,
        date: meta.string("date").unwrap_or_default(),
        summary: meta.string("summary").unwrap_or_default(),
        category,
        subcategory: meta.is_true("subcategory"),
        parent_slug: meta.string("parentSlug"),
    }
}

/// 按日期字符串降序排列（稳定排序，空日期排在最后）
pub fn sort_by_date_desc(articles: &mut [ArticleMeta]) {
    articles.sort_by(|a, b| b.date.cmp(&a.date));
}

/// 某分类下的文章
pub fn filter_category(articles: &[ArticleMeta], category: &str) -> Vec<ArticleMeta> {
    articles
        .iter()
        .filter(|article| article.category == category)
        .cloned()
        .collect()
}

/// 某分类下标记为二级项的文章
pub fn filter_subcategories(articles: &[ArticleMeta], category: &str) -> Vec<ArticleMeta> {
    articles
        .iter()
        .filter(|article| article.subcategory && article.category == category)
        .cloned()
        .collect()
}

/// 以某文章为上级的文章
pub fn filter_children(articles: &[ArticleMeta], parent_slug: &str) -> Vec<ArticleMeta> {
    articles
        .iter()
        .filter(|article| article.parent_slug.as_deref() == Some(parent_slug))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::extract;
    use crate::loader::{ContentRegistry, DocumentLoader, LoaderValue};

    fn doc(path: &str) -> DocumentRef {
        DocumentRef {
            path: path.to_string(),
            slug: crate::slug::path_to_slug(path),
        }
    }

    #[test]
    fn test_title_and_category_fallbacks() {
        let empty = Metadata::default();

        let essay = article_meta(&doc("./content/essays/02-tlon.md"), &empty);
        assert_eq!(essay.title, "tlon");
        assert_eq!(essay.category, "散文");

        let other = article_meta(&doc("./content/bio/01-early.md"), &empty);
        assert_eq!(other.title, "01-early");
        assert_eq!(other.category, "");
        assert_eq!(other.parent_slug, None);
        assert!(!other.subcategory);
    }

    #[test]
    fn test_explicit_metadata_wins() {
        let meta = extract(
            "---\ntitle: 永恒史\ncategory: 诗歌\ndate: 2024-01-01\nsummary: 摘要\nsubcategory: 'true'\nparentSlug: ' essays/index '\n---\n",
        )
        .meta;
        let article = article_meta(&doc("./content/essays/01-x.md"), &meta);
        assert_eq!(article.title, "永恒史");
        assert_eq!(article.category, "诗歌");
        assert_eq!(article.date, "2024-01-01");
        assert_eq!(article.summary, "摘要");
        assert!(article.subcategory);
        assert_eq!(article.parent_slug.as_deref(), Some("essays/index"));
    }

    #[tokio::test]
    async fn test_build_index_sorts_and_excludes_config() {
        let mut registry = ContentRegistry::new();
        registry
            .insert_text("./content/_site.md", "---\ncategories: [诗歌]\n---\n")
            .insert_text("./content/poem/_index.yml", "title: 诗歌\n")
            .insert_text("./content/fiction/_index.yml", "title: 小说\n")
            .insert_text("./content/a.md", "---\ndate: 2023-05-05\n---\n")
            .insert_text("./content/b.md", "no metadata")
            .insert_text("./content/c.md", "---\ndate: 2024-01-01\n---\n")
            .insert("./content/d.md", || {
                LoaderValue::deferred(async { Err(ContentError::Load("boom".into())) })
            });
        let set = DocumentSet::new(DocumentLoader::new(registry));

        let report = build_index_report(&set).await;
        let slugs: Vec<_> = report.articles.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["c", "a", "b"]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].path, "./content/d.md");

        for article in &report.articles {
            assert!(!is_config_slug(&article.slug));
        }
    }

    #[test]
    fn test_category_views() {
        let mut a = article_meta(&doc("./content/essays/a.md"), &Metadata::default());
        a.subcategory = true;
        let mut b = article_meta(&doc("./content/essays/b.md"), &Metadata::default());
        b.parent_slug = Some("essays/a".into());
        let c = article_meta(&doc("./content/bio/c.md"), &Metadata::default());
        let articles = vec![a, b, c];

        assert_eq!(filter_category(&articles, "散文").len(), 2);
        assert_eq!(filter_subcategories(&articles, "散文")[0].slug, "essays/a");
        assert_eq!(filter_children(&articles, "essays/a")[0].slug, "essays/b");
        assert!(filter_children(&articles, "essays/b").is_empty());
    }
}
