// content-core/src/error.rs
//! 错误类型

use thiserror::Error;

/// 内容层错误
///
/// 这些错误只在组件内部流转：公开的索引与解析操作会把它们记录为警告，
/// 然后返回默认值或跳过对应文档，不会向调用方抛出。
#[derive(Debug, Error)]
pub enum ContentError {
    /// 路径未在文档源中注册（调用方错误）
    #[error("未注册的文档路径: {0}")]
    UnknownPath(String),

    #[error("读取文档失败 {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 加载器自身报告的失败
    #[error("加载文档失败: {0}")]
    Load(String),

    #[error("YAML 解析失败: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// 配置文档结构不符合预期
    #[error("配置格式错误 {field}: {reason}")]
    MalformedConfig { field: String, reason: String },

    #[error("slug 冲突 '{slug}': {kept} 与 {dropped}")]
    DuplicateSlug {
        slug: String,
        kept: String,
        dropped: String,
    },
}

impl ContentError {
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type ContentResult<T> = Result<T, ContentError>;
