// content-core/src/config.rs
//! 配置模块

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 部署基础路径的环境变量
pub const BASE_URL_ENV: &str = "CONTENT_BASE_URL";

/// 内容索引配置
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentConfig {
    /// 内容根目录
    pub content_root: PathBuf,
    /// 部署基础路径（如 `/repo`），为空时不改写正文链接
    pub base_path: String,
    pub walker: WalkerConfig,
    /// 分类中文名与英文 slug 的对应关系，为空时使用内置的五个分类
    pub categories: Vec<CategoryEntry>,
}

/// Walker 配置
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WalkerConfig {
    pub skip_hidden: bool,
    pub follow_symlinks: bool,
    /// 是否遵循 `.ignore` 文件（含上级目录中的）
    pub respect_ignore: bool,
    pub max_depth: usize,
    pub supported_extensions: Vec<String>,
}

/// 分类配置项
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryEntry {
    pub slug: String,
    pub name: String,
}

impl CategoryEntry {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("./content"),
            base_path: String::new(),
            walker: WalkerConfig::default(),
            categories: Vec::new(),
        }
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            skip_hidden: true,
            follow_symlinks: false,
            respect_ignore: false,
            max_depth: 0,
            supported_extensions: vec![
                "md".to_string(),
                "yml".to_string(),
                "yaml".to_string(),
            ],
        }
    }
}

impl WalkerConfig {
    /// 检查文件扩展名是否支持
    pub fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy())
            .is_some_and(|ext| {
                self.supported_extensions
                    .iter()
                    .any(|supported| supported.eq_ignore_ascii_case(&ext))
            })
    }
}

impl ContentConfig {
    /// 从 TOML 文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ContentConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// 用环境变量覆盖配置
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base) = std::env::var(BASE_URL_ENV) {
            tracing::debug!("使用环境变量 {} = '{}'", BASE_URL_ENV, base);
            self.base_path = base;
        }
        self
    }

    /// 去掉末尾斜杠后的基础路径；`/` 视为空
    pub fn normalized_base_path(&self) -> &str {
        self.base_path.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_partial_toml() {
        let config: ContentConfig = toml::from_str(
            r#"
base_path = "/repo/"

[walker]
max_depth = 4

[[categories]]
slug = "notes"
name = "札记"
"#,
        )
        .unwrap();

        assert_eq!(config.normalized_base_path(), "/repo");
        assert_eq!(config.walker.max_depth, 4);
        assert!(config.walker.skip_hidden);
        assert!(!config.walker.respect_ignore);
        assert_eq!(config.categories, vec![CategoryEntry::new("notes", "札记")]);
        assert_eq!(config.content_root, PathBuf::from("./content"));
    }

    #[rstest]
    #[case("", "")]
    #[case("/", "")]
    #[case("/repo", "/repo")]
    #[case("/repo/", "/repo")]
    fn test_normalized_base_path(#[case] base: &str, #[case] expected: &str) {
        let config = ContentConfig {
            base_path: base.to_string(),
            ..Default::default()
        };
        assert_eq!(config.normalized_base_path(), expected);
    }

    #[rstest]
    #[case("a.md", true)]
    #[case("a.MD", true)]
    #[case("_index.yml", true)]
    #[case("a.pdf", false)]
    #[case("README", false)]
    fn test_walker_supported(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(WalkerConfig::default().is_supported(Path::new(name)), expected);
    }
}
