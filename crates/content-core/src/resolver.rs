// content-core/src/resolver.rs
//! 文章解析 - 由 slug 取得完整文章

use crate::category::ESSAYS_CATEGORY;
use crate::documents::DocumentSet;
use crate::frontmatter::Metadata;
use crate::indexer::ESSAYS_PREFIX;
use crate::markdown;
use crate::models::FullArticle;
use crate::slug::{SlugQuery, last_segment, strip_numeric_prefix};

/// 诗歌目录前缀
const POEM_PREFIX: &str = "poem/";

/// 按 slug 取得完整文章
///
/// `raw_slug` 可以是百分号编码的，也可以与存储路径的 Unicode 规范化形式不同。
/// 找不到或读取失败时返回 `None`。
pub async fn resolve_article(
    documents: &DocumentSet,
    raw_slug: &str,
    base_path: &str,
) -> Option<FullArticle> {
    let query = SlugQuery::parse(raw_slug);
    let Some(doc) = documents.find_matching(&query) else {
        tracing::debug!("未找到文章: {}", query.decoded());
        return None;
    };

    let extracted = match documents.load(doc).await {
        Ok(extracted) => extracted,
        Err(e) => {
            tracing::warn!("加载失败 {}: {}", doc.path, e);
            return None;
        }
    };

    let html = markdown::rewrite_base(&markdown::render(&extracted.body), base_path);
    let decoded = query.decoded();
    let meta = &extracted.meta;

    Some(FullArticle {
        slug: raw_slug.to_string(),
        title: article_title(meta, decoded),
        date: meta.string("date").unwrap_or_default(),
        summary: meta.string("summary").unwrap_or_default(),
        category: article_category(meta, decoded),
        subcategory: meta.is_true("subcategory"),
        parent_slug: meta.string("parentSlug"),
        content: html,
    })
}

/// 标题：元数据 > 诗歌/散文取最后一段去掉数字前缀 > 解码后的 slug
fn article_title(meta: &Metadata, decoded: &str) -> String {
    if let Some(title) = meta.string("title") {
        return title;
    }
    if decoded.starts_with(POEM_PREFIX) || decoded.starts_with(ESSAYS_PREFIX) {
        let segment = last_segment(decoded);
        if !segment.is_empty() {
            return strip_numeric_prefix(segment).to_string();
        }
    }
    decoded.to_string()
}

fn article_category(meta: &Metadata, decoded: &str) -> String {
    meta.string("category").unwrap_or_else(|| {
        if decoded.starts_with(ESSAYS_PREFIX) {
            ESSAYS_CATEGORY.to_string()
        } else {
            String::new()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::extract;
    use crate::loader::{ContentRegistry, DocumentLoader};
    use rstest::rstest;

    fn documents(entries: &[(&str, &str)]) -> DocumentSet {
        let mut registry = ContentRegistry::new();
        for (path, text) in entries {
            registry.insert_text(*path, *text);
        }
        DocumentSet::new(DocumentLoader::new(registry))
    }

    #[rstest]
    #[case("poem/X/03-月亮", "月亮")]
    #[case("essays/01-tlon", "tlon")]
    #[case("essays/", "essays/")]
    #[case("bio/01-early", "bio/01-early")]
    fn test_title_fallback(#[case] decoded: &str, #[case] expected: &str) {
        assert_eq!(article_title(&Metadata::default(), decoded), expected);
    }

    #[test]
    fn test_metadata_title_and_category() {
        let meta = extract("---\ntitle: 阿莱夫\ncategory: 小说\n---\n").meta;
        assert_eq!(article_title(&meta, "essays/x"), "阿莱夫");
        assert_eq!(article_category(&meta, "essays/x"), "小说");
        assert_eq!(article_category(&Metadata::default(), "essays/x"), "散文");
        assert_eq!(article_category(&Metadata::default(), "poem/x"), "");
    }

    #[tokio::test]
    async fn test_resolve_renders_and_rewrites_links() {
        let set = documents(&[(
            "./content/essays/01-tlon.md",
            "---\ndate: 2024-01-01\n---\n见[另一篇](/article/essays/02-x)",
        )]);

        let article = resolve_article(&set, "essays/01-tlon", "/repo").await.unwrap();
        assert_eq!(article.title, "tlon");
        assert_eq!(article.category, "散文");
        assert_eq!(article.date, "2024-01-01");
        assert!(article.content.contains(r#"href="/repo/article/essays/02-x""#));

        let plain = resolve_article(&set, "essays/01-tlon", "").await.unwrap();
        assert!(plain.content.contains(r#"href="/article/essays/02-x""#));
    }

    #[tokio::test]
    async fn test_resolve_tolerates_encoding_and_normalization() {
        // NFD 形式存储
        let set = documents(&[("./content/poem/X/01-cafe\u{301}.md", "正文")]);

        let encoded = "poem/X/01-caf%C3%A9";
        let article = resolve_article(&set, encoded, "").await.unwrap();
        assert_eq!(article.slug, encoded);
        assert_eq!(article.title, "caf\u{e9}");

        assert!(resolve_article(&set, "poem/X/01-cafe\u{301}", "").await.is_some());
        assert!(resolve_article(&set, "poem/X/02", "").await.is_none());
    }

    #[tokio::test]
    async fn test_question_mark_in_filename() {
        let set = documents(&[
            ("./content/essays/why?.md", "为什么"),
            ("./content/essays/a?x.md", "x"),
            ("./content/essays/a?y.md", "y"),
        ]);
        assert!(set.duplicates().is_empty());

        let article = resolve_article(&set, "essays/why%3F", "").await.unwrap();
        assert_eq!(article.title, "why?");
        assert!(article.content.contains("为什么"));

        let y = resolve_article(&set, "essays/a%3Fy", "").await.unwrap();
        assert!(y.content.contains("y"));
    }
}
