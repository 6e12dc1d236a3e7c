// content-core/src/frontmatter.rs
//! 元数据提取
//!
//! 文档以 `---` 包围的 YAML 头部开始，其后是正文。解析失败时返回空元数据和
//! 原始全文，正文内容不会丢失；调用方对“没有元数据”和“解析失败”一视同仁。

use serde_yaml::{Mapping, Sequence, Value};

use crate::error::{ContentError, ContentResult};

/// 文档元数据（YAML 映射）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata(Mapping);

impl Metadata {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// 取字符串字段：去掉首尾空白，空串视为缺失；数字与布尔值转为文本
    pub fn string(&self, key: &str) -> Option<String> {
        let text = match self.get(key)? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return None,
        };
        (!text.is_empty()).then_some(text)
    }

    /// 布尔 `true` 或字面量 `"true"`
    pub fn is_true(&self, key: &str) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s == "true",
            _ => false,
        }
    }

    pub fn sequence(&self, key: &str) -> Option<&Sequence> {
        self.get(key)?.as_sequence()
    }

    pub fn mapping(&self, key: &str) -> Option<&Mapping> {
        self.get(key)?.as_mapping()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 提取结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extracted {
    pub meta: Metadata,
    pub body: String,
}

/// 拆分元数据与正文，从不失败
pub fn extract(raw: &str) -> Extracted {
    let Some((header, body)) = split_frontmatter(raw) else {
        return Extracted {
            meta: Metadata::default(),
            body: raw.to_string(),
        };
    };

    match parse_header(header) {
        Ok(meta) => Extracted {
            meta,
            body: body.to_string(),
        },
        Err(e) => {
            tracing::warn!("元数据解析失败，按无元数据处理: {}", e);
            Extracted {
                meta: Metadata::default(),
                body: raw.to_string(),
            }
        }
    }
}

/// 返回 (头部 YAML, 正文)；没有完整的 `---` 头部时返回 `None`
fn split_frontmatter(raw: &str) -> Option<(&str, &str)> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut lines = text.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != "---" {
        return None;
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return Some((&text[header_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

fn parse_header(header: &str) -> ContentResult<Metadata> {
    if header.trim().is_empty() {
        return Ok(Metadata::default());
    }
    match serde_yaml::from_str::<Value>(header)? {
        Value::Mapping(mapping) => Ok(Metadata(mapping)),
        Value::Null => Ok(Metadata::default()),
        _ => Err(ContentError::malformed("frontmatter", "头部不是键值映射")),
    }
}
