// content-core/src/loader.rs
//! 文档加载适配层
//!
//! 文档源按路径注册惰性加载器。加载器的返回值可能是现成的文本、需要调用的
//! 生产函数、需要等待的异步值，或者把文本包在 `default` 字段里的包装值；
//! 这里统一收敛成 [`LoaderValue`]，并在 [`LoaderValue::into_text`] 中一次性
//! 归一化为原始文本，下游组件只看到 `String`。

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use chardetng::EncodingDetector;
use futures::future::BoxFuture;
use ignore::WalkBuilder;

use crate::config::WalkerConfig;
use crate::error::{ContentError, ContentResult};
use crate::slug::CONTENT_DIR;

/// 加载器返回值
pub enum LoaderValue {
    /// 已经就绪的文本
    Text(String),
    /// 需要先调用的零参数生产函数
    Producer(Box<dyn FnOnce() -> LoaderValue + Send>),
    /// 需要等待的异步值
    Deferred(BoxFuture<'static, ContentResult<LoaderValue>>),
    /// 文本位于 `default` 字段下的包装值
    Wrapped { default: Box<LoaderValue> },
    /// 其他任意值，按字符串形式处理
    Value(serde_json::Value),
}

impl LoaderValue {
    pub fn producer(f: impl FnOnce() -> LoaderValue + Send + 'static) -> Self {
        Self::Producer(Box::new(f))
    }

    pub fn deferred(
        fut: impl Future<Output = ContentResult<LoaderValue>> + Send + 'static,
    ) -> Self {
        Self::Deferred(Box::pin(fut))
    }

    pub fn wrapped(inner: LoaderValue) -> Self {
        Self::Wrapped {
            default: Box::new(inner),
        }
    }

    /// 归一化为原始文本
    pub async fn into_text(self) -> ContentResult<String> {
        let mut value = self;
        loop {
            value = match value {
                LoaderValue::Text(text) => return Ok(text),
                LoaderValue::Producer(produce) => produce(),
                LoaderValue::Deferred(fut) => fut.await?,
                LoaderValue::Wrapped { default } => *default,
                LoaderValue::Value(other) => return Ok(coerce_to_text(other)),
            };
        }
    }
}

impl fmt::Debug for LoaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderValue::Text(text) => f.debug_tuple("Text").field(text).finish(),
            LoaderValue::Producer(_) => f.write_str("Producer(..)"),
            LoaderValue::Deferred(_) => f.write_str("Deferred(..)"),
            LoaderValue::Wrapped { default } => {
                f.debug_struct("Wrapped").field("default", default).finish()
            }
            LoaderValue::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

impl From<String> for LoaderValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for LoaderValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// 非字符串值转为文本：`null` 为空串，其余取 JSON 文本
fn coerce_to_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    }
}

/// 按路径注册的文档源
pub trait DocumentSource: Send + Sync {
    /// 全部已注册路径（有序）
    fn paths(&self) -> Vec<String>;

    /// 取出某路径的加载器返回值；未注册时返回 `None`
    fn entry(&self, path: &str) -> Option<LoaderValue>;
}

type EntryFn = Arc<dyn Fn() -> LoaderValue + Send + Sync>;

/// 内存中的文档注册表
#[derive(Clone, Default)]
pub struct ContentRegistry {
    entries: BTreeMap<String, EntryFn>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一个加载器
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        loader: impl Fn() -> LoaderValue + Send + Sync + 'static,
    ) -> &mut Self {
        self.entries.insert(path.into(), Arc::new(loader));
        self
    }

    /// 注册一段现成文本
    pub fn insert_text(&mut self, path: impl Into<String>, text: impl Into<String>) -> &mut Self {
        let text: String = text.into();
        self.insert(path, move || LoaderValue::Text(text.clone()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ContentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentRegistry")
            .field("paths", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl DocumentSource for ContentRegistry {
    fn paths(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn entry(&self, path: &str) -> Option<LoaderValue> {
        self.entries.get(path).map(|loader| loader())
    }
}

/// 文件系统文档源
///
/// 扫描时只记录路径，文本在加载时才读取。路径以 `./content/<相对路径>` 为键，
/// 与内容根目录在磁盘上的实际名称无关。
#[derive(Debug, Clone)]
pub struct FsSource {
    files: BTreeMap<String, PathBuf>,
}

impl FsSource {
    /// 扫描内容根目录
    pub fn scan(root: &Path, walker_config: &WalkerConfig) -> anyhow::Result<Self> {
        if !root.is_dir() {
            anyhow::bail!("内容目录不存在: {:?}", root);
        }

        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(walker_config.skip_hidden)
            .ignore(walker_config.respect_ignore)
            .parents(walker_config.respect_ignore)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .follow_links(walker_config.follow_symlinks);

        if walker_config.max_depth > 0 {
            builder.max_depth(Some(walker_config.max_depth));
        }

        tracing::debug!("开始遍历内容目录: {:?}", root);

        let mut files = BTreeMap::new();
        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("遍历错误: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if path.is_dir() || !walker_config.is_supported(path) {
                continue;
            }
            let relative = path
                .strip_prefix(root)
                .with_context(|| format!("路径不在内容目录下: {:?}", path))?;
            let key = format!(
                "./{}/{}",
                CONTENT_DIR,
                relative.to_string_lossy().replace('\\', "/")
            );
            files.insert(key, path.to_path_buf());
        }

        tracing::info!("内容目录扫描完成: {:?}，共 {} 个文档", root, files.len());
        Ok(Self { files })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl DocumentSource for FsSource {
    fn paths(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    fn entry(&self, path: &str) -> Option<LoaderValue> {
        let file = self.files.get(path)?.clone();
        Some(LoaderValue::deferred(async move {
            read_text_with_encoding_detection(&file)
                .await
                .map(LoaderValue::Text)
        }))
    }
}

/// 读取文本文件（自动检测编码）
async fn read_text_with_encoding_detection(path: &Path) -> ContentResult<String> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ContentError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    })?;

    let bytes = match String::from_utf8(bytes) {
        Ok(text) => return Ok(text),
        Err(e) => e.into_bytes(),
    };

    let mut detector = EncodingDetector::new();
    detector.feed(&bytes, true);
    let encoding = detector.guess(None, true);
    let (decoded, encoding_used, had_errors) = encoding.decode(&bytes);

    if had_errors {
        tracing::warn!("文件 {:?} 使用 {} 解码时有部分错误", path, encoding_used.name());
    } else {
        tracing::debug!("检测到文件编码 {}: {:?}", encoding_used.name(), path);
    }

    Ok(decoded.into_owned())
}

/// 统一的“按路径取原始文本”接口
#[derive(Clone)]
pub struct DocumentLoader {
    source: Arc<dyn DocumentSource>,
}

impl DocumentLoader {
    pub fn new(source: impl DocumentSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn paths(&self) -> Vec<String> {
        self.source.paths()
    }

    /// 加载某路径的原始文本；未注册的路径返回 [`ContentError::UnknownPath`]
    pub async fn load(&self, path: &str) -> ContentResult<String> {
        let value = self
            .source
            .entry(path)
            .ok_or_else(|| ContentError::UnknownPath(path.to_string()))?;
        value.into_text().await
    }
}

impl fmt::Debug for DocumentLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentLoader")
            .field("documents", &self.source.paths().len())
            .finish()
    }
}
