// content-core/src/collection.rs
//! 文集篇目列表

use std::cmp::Ordering;

use futures::future::join_all;

use crate::documents::DocumentSet;
use crate::models::{CollectionItem, CollectionKind};
use crate::slug::{file_stem, is_markdown, last_segment, strip_numeric_prefix};

/// 排在文集最前面的篇目标题
pub const PREFACE_TITLE: &str = "序言";

/// 文集目录页的文件名，不作为篇目
const INDEX_SEGMENT: &str = "index";

/// 获取文集下的篇目，标题优先取自元数据，否则取去掉数字前缀的文件名
pub async fn collection_items(
    documents: &DocumentSet,
    kind: CollectionKind,
    collection_id: &str,
) -> Vec<CollectionItem> {
    let prefix = format!("{}/{}/", kind.dir(), collection_id);

    let members = documents.documents().iter().filter(|doc| {
        is_markdown(&doc.path)
            && doc.slug.starts_with(&prefix)
            && last_segment(&doc.slug) != INDEX_SEGMENT
    });

    let mut items = join_all(members.map(|doc| async move {
        let fallback = strip_numeric_prefix(file_stem(&doc.path)).to_string();
        let title = match documents.load(doc).await {
            Ok(extracted) => extracted.meta.string("title").unwrap_or(fallback),
            Err(e) => {
                tracing::warn!("读取篇目失败，使用文件名作为标题 {}: {}", doc.path, e);
                fallback
            }
        };
        CollectionItem::new(doc.slug.clone(), title)
    }))
    .await;

    sort_collection(&mut items);
    tracing::debug!("文集 {} 共 {} 篇", prefix, items.len());
    items
}

/// 序言在前，其余按 slug 升序
pub fn sort_collection(items: &mut [CollectionItem]) {
    items.sort_by(|a, b| {
        let a_preface = a.title == PREFACE_TITLE;
        let b_preface = b.title == PREFACE_TITLE;
        match (a_preface, b_preface) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.slug.cmp(&b.slug),
        }
    });
}
