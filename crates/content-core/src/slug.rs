// content-core/src/slug.rs
//! Slug 编解码
//!
//! 存储路径与 slug 的相互转换。slug 由路径去掉内容根目录前缀和扩展名得到，
//! 分隔符统一为 `/`。用户传入的 slug 可能经过百分号编码，也可能与文件系统里的
//! Unicode 规范化形式不同（macOS 上常见 NFD），匹配时两种形式都要比较。

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use unicode_normalization::UnicodeNormalization;

/// 内容根目录名
pub const CONTENT_DIR: &str = "content";

/// 可作为文档的扩展名（含点号，小写）
const DOCUMENT_EXTENSIONS: [&str; 3] = [".md", ".yml", ".yaml"];

/// 与 `encodeURIComponent` 保持一致的保留字符集
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// 将存储路径转换为 slug
///
/// 兼容 `./content/`、`/content/`、`content/` 三种前缀以及无前缀的路径。
pub fn path_to_slug(path: &str) -> String {
    let path = strip_import_query(path);
    let normalized = path.replace('\\', "/");
    let relative = strip_content_root(&normalized);
    strip_document_extension(relative).to_string()
}

/// 构建工具在导入路径后附加的查询后缀
const IMPORT_QUERIES: [&str; 2] = ["?raw", "?url"];

/// 只去掉已知的导入后缀，文件名中的 `?` 保持原样
fn strip_import_query(path: &str) -> &str {
    IMPORT_QUERIES
        .iter()
        .find_map(|query| path.strip_suffix(query))
        .unwrap_or(path)
}

fn strip_content_root(path: &str) -> &str {
    let rest = path
        .strip_prefix("./")
        .or_else(|| path.strip_prefix('/'))
        .unwrap_or(path);

    match rest.strip_prefix(CONTENT_DIR) {
        Some("") => "",
        Some(tail) => tail.strip_prefix('/').unwrap_or(path),
        None => path,
    }
}

/// 去掉文档扩展名（不区分大小写）
pub fn strip_document_extension(name: &str) -> &str {
    for ext in DOCUMENT_EXTENSIONS {
        if let Some(stem) = strip_suffix_ignore_case(name, ext) {
            return stem;
        }
    }
    name
}

fn strip_suffix_ignore_case<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    let cut = value.len().checked_sub(suffix.len())?;
    if !value.is_char_boundary(cut) {
        return None;
    }
    let (head, tail) = value.split_at(cut);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

/// 路径是否为 markdown 文档
pub fn is_markdown(path: &str) -> bool {
    strip_suffix_ignore_case(path, ".md").is_some()
}

/// 文件名（不含目录与扩展名）
pub fn file_stem(path: &str) -> &str {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    strip_document_extension(name)
}

/// slug 的最后一段
pub fn last_segment(slug: &str) -> &str {
    slug.rsplit('/').next().unwrap_or(slug)
}

/// 去掉形如 `01-` 的数字前缀；去掉后为空则保留原名
pub fn strip_numeric_prefix(name: &str) -> &str {
    let digits = name.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return name;
    }
    match name[digits..].strip_prefix('-') {
        Some(rest) if !rest.is_empty() => rest,
        _ => name,
    }
}

/// 百分号解码；编码不合法时原样返回
pub fn decode_slug(input: &str) -> Cow<'_, str> {
    match percent_decode_str(input).decode_utf8() {
        Ok(decoded) => decoded,
        Err(_) => {
            tracing::debug!("slug 解码失败，按原文处理: {}", input);
            Cow::Borrowed(input)
        }
    }
}

/// 对 URL 组件进行百分号编码（与 `encodeURIComponent` 相同的字符集）
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// 用户输入的 slug 查询
///
/// 同时保存解码后的原始形式和 NFC 形式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugQuery {
    decoded: String,
    decoded_nfc: String,
}

impl SlugQuery {
    pub fn parse(input: &str) -> Self {
        let decoded = decode_slug(input).into_owned();
        let decoded_nfc = decoded.nfc().collect();
        Self {
            decoded,
            decoded_nfc,
        }
    }

    /// 解码后的 slug（未规范化）
    pub fn decoded(&self) -> &str {
        &self.decoded
    }

    /// 候选 slug 的 NFC 形式与查询的 NFC 形式或原始形式相等即匹配
    pub fn matches(&self, candidate: &str) -> bool {
        let candidate_nfc: String = candidate.nfc().collect();
        candidate_nfc == self.decoded_nfc || candidate_nfc == self.decoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("./content/poem/X/01-a.md", "poem/X/01-a")]
    #[case("/content/_site.md", "_site")]
    #[case("content/fiction/_index.yml", "fiction/_index")]
    #[case("essays/a.MD", "essays/a")]
    #[case(".\\content\\bio\\life.md", "bio/life")]
    #[case("./content/poem/_index.yml?raw", "poem/_index")]
    #[case("./content/诗/序言.md", "诗/序言")]
    #[case("./content/essays/a.md?url", "essays/a")]
    #[case("./content/essays/why?.md", "essays/why?")]
    #[case("./content/essays/a?x.md", "essays/a?x")]
    fn test_path_to_slug(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(path_to_slug(path), expected);
    }

    #[rstest]
    #[case("about")]
    #[case("poem/La_rosa_profunda/03-the_moon")]
    #[case("essays/history_of_eternity/index")]
    fn test_path_to_slug_left_inverse(#[case] slug: &str) {
        for root in ["./content/", "/content/", "content/"] {
            assert_eq!(path_to_slug(&format!("{root}{slug}.md")), slug);
        }
    }

    #[test]
    fn test_content_root_requires_segment_boundary() {
        assert_eq!(path_to_slug("contents/a.md"), "contents/a");
    }

    #[rstest]
    #[case("01-序言", "序言")]
    #[case("12-the_moon", "the_moon")]
    #[case("01-", "01-")]
    #[case("plain", "plain")]
    #[case("2024", "2024")]
    fn test_strip_numeric_prefix(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(strip_numeric_prefix(name), expected);
    }

    #[test]
    fn test_file_stem_and_last_segment() {
        assert_eq!(file_stem("./content/essays/02-tlon.md"), "02-tlon");
        assert_eq!(last_segment("poem/X/index"), "index");
        assert_eq!(last_segment("about"), "about");
    }

    #[test]
    fn test_decode_slug() {
        assert_eq!(decode_slug("poem%2F%E5%BA%8F%E8%A8%80"), "poem/序言");
        assert_eq!(decode_slug("100%"), "100%");
        // 非法 UTF-8 序列保留原文
        assert_eq!(decode_slug("bad%FF"), "bad%FF");
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("散文"), "%E6%95%A3%E6%96%87");
        assert_eq!(encode_component("a b(c)!"), "a%20b(c)!");
    }

    #[test]
    fn test_query_matches_across_normalization() {
        let nfc = "essays/caf\u{e9}";
        let nfd = "essays/cafe\u{301}";

        assert!(SlugQuery::parse(nfd).matches(nfc));
        assert!(SlugQuery::parse(nfc).matches(nfd));
        assert!(SlugQuery::parse("essays/caf%C3%A9").matches(nfd));
        assert!(!SlugQuery::parse("essays/cafe").matches(nfc));
    }
}
