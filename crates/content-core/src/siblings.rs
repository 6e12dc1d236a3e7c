// content-core/src/siblings.rs
//! 目录页顺序解析
//!
//! 散文集、诗集的 `index` 文档正文里按顺序列出 `[标题](/article/<slug>)` 链接，
//! 链接出现的顺序即“上一篇/下一篇”的导航顺序。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::documents::DocumentSet;
use crate::models::Neighbors;

/// 站内文章链接 `](/article/<slug>)`
static ARTICLE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\]\(/article/([^)]+)\)").expect("article link pattern is valid"));

/// 按出现顺序提取正文中的文章 slug（不去重）
pub fn extract_article_links(body: &str) -> Vec<String> {
    ARTICLE_LINK
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// 读取目录页并返回其中文章链接的顺序；目录页不存在或读取失败时返回空列表
pub async fn ordered_siblings(documents: &DocumentSet, index_slug: &str) -> Vec<String> {
    let Some(doc) = documents.find(index_slug) else {
        tracing::debug!("未找到目录页: {}", index_slug);
        return Vec::new();
    };

    match documents.load(doc).await {
        Ok(extracted) => extract_article_links(&extracted.body),
        Err(e) => {
            tracing::warn!("解析目录顺序失败 {}: {}", index_slug, e);
            Vec::new()
        }
    }
}

/// 某篇在顺序中的上一篇与下一篇（以第一次出现的位置为准）
pub fn neighbors(order: &[String], slug: &str) -> Neighbors {
    let Some(position) = order.iter().position(|s| s == slug) else {
        return Neighbors::default();
    };
    Neighbors {
        previous: position
            .checked_sub(1)
            .map(|prev| order[prev].clone()),
        next: order.get(position + 1).cloned(),
    }
}
