// content-core/src/documents.rs
//! 文档表 - 路径与 slug 的对应关系
//!
//! 构造时一次性枚举文档源的全部路径并计算 slug。路径按字典序处理，
//! 多个路径得到同一 slug（按 NFC 形式比较）时保留第一个，其余记录为冲突并丢弃。

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use crate::error::{ContentError, ContentResult};
use crate::frontmatter::{self, Extracted};
use crate::loader::DocumentLoader;
use crate::slug::{SlugQuery, path_to_slug};

/// 一个已登记的文档
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub path: String,
    pub slug: String,
}

/// 文档表
#[derive(Debug)]
pub struct DocumentSet {
    loader: DocumentLoader,
    documents: Vec<DocumentRef>,
    duplicates: Vec<ContentError>,
}

impl DocumentSet {
    pub fn new(loader: DocumentLoader) -> Self {
        let mut paths = loader.paths();
        paths.sort();

        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut documents: Vec<DocumentRef> = Vec::with_capacity(paths.len());
        let mut duplicates = Vec::new();

        for path in paths {
            let slug = path_to_slug(&path);
            // 查找按 NFC 比较，冲突也按 NFC 判定
            let key: String = slug.nfc().collect();
            if let Some(&kept) = seen.get(&key) {
                let conflict = ContentError::DuplicateSlug {
                    slug,
                    kept: documents[kept].path.clone(),
                    dropped: path,
                };
                tracing::warn!("{}", conflict);
                duplicates.push(conflict);
                continue;
            }
            seen.insert(key, documents.len());
            documents.push(DocumentRef { path, slug });
        }

        tracing::debug!("文档表构建完成: {} 个文档, {} 个冲突", documents.len(), duplicates.len());
        Self {
            loader,
            documents,
            duplicates,
        }
    }

    pub fn documents(&self) -> &[DocumentRef] {
        &self.documents
    }

    /// 构造时丢弃的 slug 冲突
    pub fn duplicates(&self) -> &[ContentError] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// 按 slug 精确查找
    pub fn find(&self, slug: &str) -> Option<&DocumentRef> {
        self.documents.iter().find(|doc| doc.slug == slug)
    }

    /// 按用户输入查找（容忍百分号编码与 Unicode 规范化差异）
    pub fn find_matching(&self, query: &SlugQuery) -> Option<&DocumentRef> {
        self.documents.iter().find(|doc| query.matches(&doc.slug))
    }

    /// 读取原始文本
    pub async fn load_raw(&self, doc: &DocumentRef) -> ContentResult<String> {
        self.loader.load(&doc.path).await
    }

    /// 读取并拆分元数据与正文
    pub async fn load(&self, doc: &DocumentRef) -> ContentResult<Extracted> {
        let raw = self.load_raw(doc).await?;
        Ok(frontmatter::extract(&raw))
    }
}
