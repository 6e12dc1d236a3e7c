use crate::error::{Result, WrapErr, error};
use config::{ConfigLocation, locate_config_file};
use content_core::ContentConfig;
use std::path::{Path, PathBuf};

/// 命令行使用的配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 配置文件位置
    pub path: PathBuf,
    pub content: ContentConfig,
}

impl Config {
    /// 定位并读取配置文件
    ///
    /// `CONTENT_CONFIG` 指定的文件必须存在；否则使用平台配置目录下的
    /// `content.toml`，不存在时创建示例文件并使用默认配置。
    pub fn load() -> Result<Config> {
        let location = locate_config_file()?;
        let content = match &location {
            ConfigLocation::Default(path) if !path.exists() => {
                Self::create_example_config(path)?;
                ContentConfig::default().with_env_overrides()
            }
            _ => Self::load_file(location.path())?,
        };

        Ok(Config {
            path: location.path().to_path_buf(),
            content,
        })
    }

    fn load_file(path: &Path) -> Result<ContentConfig> {
        ContentConfig::load_from_file(path)
            .map(ContentConfig::with_env_overrides)
            .map_err(|e| error!("{:#}", e))
            .wrap_err_with(|| format!("Load configuration error: {}", path.display()))
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let example_config = r#"# 内容索引配置文件
#
# 此文件在首次运行时自动创建

# 内容根目录
content_root = "./content"

# 部署基础路径，正文中的 href="/..." 会加上此前缀
# 也可以用环境变量 CONTENT_BASE_URL 指定
base_path = ""

[walker]
skip_hidden = true
follow_symlinks = false
# 是否遵循 .ignore 文件
respect_ignore = false
# 0 表示不限制深度
max_depth = 0
supported_extensions = ["md", "yml", "yaml"]

# 可选：覆盖内置分类
# [[categories]]
# slug = "essays"
# name = "散文"
"#;

        std::fs::write(config_path, example_config)?;
        tracing::info!("已创建配置文件: {}", config_path.display());
        Ok(())
    }
}
