// content-core/src/site.rs
//! 配置文档解析
//!
//! - `_site`：顶栏分类顺序与命名链接（写在 markdown 头部）
//! - `poem/_index`、`fiction/_index`：诗集/小说集目录（整篇 YAML）
//!
//! 文档缺失或格式不对时回退到内置默认值，不向调用方报错。

use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};

use crate::documents::DocumentSet;
use crate::error::ContentError;
use crate::frontmatter::Metadata;
use crate::models::{CollectionCatalog, CollectionEntry, CollectionKind, SiteConfig};

/// 站点配置文档的 slug
pub const SITE_SLUG: &str = "_site";

/// 配置解析结果
#[derive(Debug)]
pub enum Resolved<T> {
    /// 从配置文档读取
    Loaded(T),
    /// 配置文档不存在，使用默认值
    Defaulted(T),
    /// 配置文档有问题，(部分)使用默认值
    Recovered { value: T, reason: ContentError },
}

impl<T> Resolved<T> {
    pub fn value(&self) -> &T {
        match self {
            Resolved::Loaded(value) | Resolved::Defaulted(value) => value,
            Resolved::Recovered { value, .. } => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Resolved::Loaded(value) | Resolved::Defaulted(value) => value,
            Resolved::Recovered { value, .. } => value,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Resolved::Loaded(_))
    }
}

/// 读取站点配置
pub async fn site_config(documents: &DocumentSet) -> Resolved<SiteConfig> {
    let Some(doc) = documents.find(SITE_SLUG) else {
        tracing::debug!("未找到 {} 配置，使用默认分类", SITE_SLUG);
        return Resolved::Defaulted(SiteConfig::default());
    };

    match documents.load(doc).await {
        Ok(extracted) => site_config_from_meta(&extracted.meta),
        Err(e) => {
            tracing::warn!("读取 {} 配置失败: {}", SITE_SLUG, e);
            Resolved::Recovered {
                value: SiteConfig::default(),
                reason: e,
            }
        }
    }
}

/// 由 `_site` 的元数据构造站点配置
pub fn site_config_from_meta(meta: &Metadata) -> Resolved<SiteConfig> {
    let mut problems = Vec::new();
    let defaults = SiteConfig::default();

    let categories = match meta.get("categories") {
        None | Some(Value::Null) => defaults.categories,
        Some(Value::Sequence(items)) => {
            let names: Option<Vec<String>> = items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect();
            names.unwrap_or_else(|| {
                problems.push(ContentError::malformed("categories", "含有非字符串项"));
                defaults.categories
            })
        }
        Some(_) => {
            problems.push(ContentError::malformed("categories", "不是列表"));
            defaults.categories
        }
    };

    let links = match meta.get("links") {
        None | Some(Value::Null) => IndexMap::new(),
        Some(Value::Mapping(mapping)) => collect_links(mapping),
        Some(_) => {
            problems.push(ContentError::malformed("links", "不是键值映射"));
            IndexMap::new()
        }
    };

    let config = SiteConfig { categories, links };
    let mut problems = problems.into_iter();
    match problems.next() {
        None => Resolved::Loaded(config),
        Some(reason) => {
            tracing::warn!("{} 配置有误，部分使用默认值: {}", SITE_SLUG, reason);
            for other in problems {
                tracing::warn!("{} 配置有误: {}", SITE_SLUG, other);
            }
            Resolved::Recovered {
                value: config,
                reason,
            }
        }
    }
}

fn collect_links(mapping: &Mapping) -> IndexMap<String, String> {
    mapping
        .iter()
        .filter_map(|(name, target)| Some((scalar_text(name)?, scalar_text(target)?)))
        .collect()
}

/// 标量转文本；序列、映射等返回 `None`
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// 读取诗歌/小说的文集目录
pub async fn collection_catalog(
    documents: &DocumentSet,
    kind: CollectionKind,
) -> Resolved<CollectionCatalog> {
    let slug = kind.catalog_slug();
    let Some(doc) = documents.find(slug) else {
        tracing::debug!("未找到 {} 配置，使用默认文集", slug);
        return Resolved::Defaulted(kind.default_catalog());
    };

    match documents.load_raw(doc).await {
        Ok(raw) => parse_catalog(&raw, kind),
        Err(e) => {
            tracing::warn!("读取 {} 失败: {}", slug, e);
            Resolved::Recovered {
                value: kind.default_catalog(),
                reason: e,
            }
        }
    }
}

/// 解析文集目录 YAML
pub fn parse_catalog(raw: &str, kind: CollectionKind) -> Resolved<CollectionCatalog> {
    if raw.trim().is_empty() {
        return Resolved::Defaulted(kind.default_catalog());
    }

    let data = match serde_yaml::from_str::<Value>(raw) {
        Ok(Value::Mapping(mapping)) => mapping,
        Ok(Value::Null) => return Resolved::Defaulted(kind.default_catalog()),
        Ok(_) => {
            return recovered_catalog(kind, ContentError::malformed("catalog", "不是键值映射"));
        }
        Err(e) => return recovered_catalog(kind, e.into()),
    };

    let title = data
        .get("title")
        .and_then(scalar_text)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| kind.default_title().to_string());

    let entries = match data.get("collections") {
        None | Some(Value::Null) => {
            return Resolved::Defaulted(CollectionCatalog {
                title,
                collections: kind.default_catalog().collections,
            });
        }
        Some(Value::Sequence(items)) => items.iter().filter_map(collection_entry).collect::<Vec<_>>(),
        Some(_) => {
            return recovered_catalog_with_title(
                kind,
                title,
                ContentError::malformed("collections", "不是列表"),
            );
        }
    };

    if entries.is_empty() {
        return recovered_catalog_with_title(
            kind,
            title,
            ContentError::malformed("collections", "没有有效的文集"),
        );
    }

    Resolved::Loaded(CollectionCatalog {
        title,
        collections: entries,
    })
}

/// 至少有 id 或 title 之一才算有效
fn collection_entry(value: &Value) -> Option<CollectionEntry> {
    let mapping = value.as_mapping()?;
    let field = |key: &str| mapping.get(key).and_then(scalar_text).unwrap_or_default();
    let entry = CollectionEntry::new(field("id"), field("title"));
    (!entry.id.is_empty() || !entry.title.is_empty()).then_some(entry)
}

fn recovered_catalog(kind: CollectionKind, reason: ContentError) -> Resolved<CollectionCatalog> {
    tracing::warn!("{} 格式错误，使用默认文集: {}", kind.catalog_slug(), reason);
    Resolved::Recovered {
        value: kind.default_catalog(),
        reason,
    }
}

fn recovered_catalog_with_title(
    kind: CollectionKind,
    title: String,
    reason: ContentError,
) -> Resolved<CollectionCatalog> {
    tracing::warn!("{} 文集列表无效，使用默认文集: {}", kind.catalog_slug(), reason);
    Resolved::Recovered {
        value: CollectionCatalog {
            title,
            collections: kind.default_catalog().collections,
        },
        reason,
    }
}
