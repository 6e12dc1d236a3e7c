// content-core/src/category.rs
//! 分类映射
//!
//! 分类路由使用英文 slug，列表页标题与筛选使用中文名。映射在构造后只读。

use std::borrow::Cow;

use crate::config::CategoryEntry;
use crate::slug::encode_component;

/// 内置分类：(slug, 中文名)
const BUILTIN_CATEGORIES: [(&str, &str); 5] = [
    ("bio", "生平事迹"),
    ("poetry", "诗歌"),
    ("fiction", "小说"),
    ("essays", "散文"),
    ("about", "关于本站"),
];

/// 散文分类名（`essays/` 下文章的默认分类）
pub const ESSAYS_CATEGORY: &str = "散文";

/// 分类中文名与英文 slug 的双向映射
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap {
    entries: Vec<CategoryEntry>,
}

impl CategoryMap {
    pub fn new(entries: Vec<CategoryEntry>) -> Self {
        Self { entries }
    }

    /// 配置为空时回退到内置分类
    pub fn from_config(entries: &[CategoryEntry]) -> Self {
        if entries.is_empty() {
            Self::default()
        } else {
            Self::new(entries.to_vec())
        }
    }

    /// slug → 中文名
    pub fn name_for(&self, slug: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.slug == slug)
            .map(|entry| entry.name.as_str())
    }

    /// 中文名 → slug，未知分类返回百分号编码后的名称
    pub fn slug_for<'a>(&'a self, name: &str) -> Cow<'a, str> {
        match self.entries.iter().find(|entry| entry.name == name) {
            Some(entry) => Cow::Borrowed(entry.slug.as_str()),
            None => Cow::Owned(encode_component(name)),
        }
    }

    /// 把路由参数解析为分类名：已知 slug 取中文名，否则按百分号解码后的原文
    pub fn resolve_name(&self, slug_or_name: &str) -> String {
        match self.name_for(slug_or_name) {
            Some(name) => name.to_string(),
            None => crate::slug::decode_slug(slug_or_name).into_owned(),
        }
    }

    /// 全部分类名（按配置顺序）
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// 内置的默认分类顺序
    pub fn default_order() -> Vec<String> {
        BUILTIN_CATEGORIES
            .iter()
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::new(
            BUILTIN_CATEGORIES
                .iter()
                .map(|(slug, name)| CategoryEntry::new(*slug, *name))
                .collect(),
        )
    }
}
