// content-core/src/models.rs
//! 数据模型定义

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::category::CategoryMap;

/// 文章列表项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMeta {
    pub slug: String,
    pub title: String,
    /// 可按字符串排序的日期（如 `2024-01-01`），缺省为空串
    pub date: String,
    pub summary: String,
    pub category: String,
    /// 是否作为所属分类下的二级项
    pub subcategory: bool,
    /// 上级文章的 slug（仅用于查找，不保证存在）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_slug: Option<String>,
}

/// 完整文章（含渲染后的正文）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullArticle {
    /// 调用方传入的 slug（原样保留）
    pub slug: String,
    pub title: String,
    pub date: String,
    pub summary: String,
    pub category: String,
    pub subcategory: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_slug: Option<String>,
    /// 渲染后的 HTML
    pub content: String,
}

/// 文集中的篇目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub slug: String,
    pub title: String,
}

impl CollectionItem {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
        }
    }
}

/// 站点配置：顶栏分类顺序与命名链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub categories: Vec<String>,
    pub links: IndexMap<String, String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            categories: CategoryMap::default_order(),
            links: IndexMap::new(),
        }
    }
}

/// 文集目录中的一项
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub id: String,
    pub title: String,
}

impl CollectionEntry {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// 某类内容（诗歌/小说）的文集目录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionCatalog {
    pub title: String,
    pub collections: Vec<CollectionEntry>,
}

/// 文集类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Poetry,
    Fiction,
}

impl CollectionKind {
    /// 内容目录下的子目录名
    pub fn dir(self) -> &'static str {
        match self {
            CollectionKind::Poetry => "poem",
            CollectionKind::Fiction => "fiction",
        }
    }

    /// 文集目录配置文档的 slug
    pub fn catalog_slug(self) -> &'static str {
        match self {
            CollectionKind::Poetry => "poem/_index",
            CollectionKind::Fiction => "fiction/_index",
        }
    }

    pub fn default_title(self) -> &'static str {
        match self {
            CollectionKind::Poetry => "诗歌",
            CollectionKind::Fiction => "小说",
        }
    }

    /// 配置缺失或无效时使用的目录
    pub fn default_catalog(self) -> CollectionCatalog {
        let entry = match self {
            CollectionKind::Poetry => CollectionEntry::new("La_rosa_profunda", "深沉的玫瑰"),
            CollectionKind::Fiction => CollectionEntry::new("aleph", "阿莱夫"),
        };
        CollectionCatalog {
            title: self.default_title().to_string(),
            collections: vec![entry],
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionKind::Poetry => write!(f, "poetry"),
            CollectionKind::Fiction => write!(f, "fiction"),
        }
    }
}

impl FromStr for CollectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "poetry" | "poem" => Ok(CollectionKind::Poetry),
            "fiction" => Ok(CollectionKind::Fiction),
            other => Err(format!("未知的文集类型: {}", other)),
        }
    }
}

/// 文集内的上一篇/下一篇
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub previous: Option<String>,
    pub next: Option<String>,
}
