pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, HomeDirError, choose_app_strategy};

use std::env;
use std::path::{Path, PathBuf};

pub fn create_strategy() -> std::result::Result<impl AppStrategy, HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

/// 配置文件的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// 由环境变量显式指定，文件必须存在
    Explicit(PathBuf),
    /// 平台配置目录下的默认文件，可能尚未创建
    Default(PathBuf),
}

impl ConfigLocation {
    pub fn path(&self) -> &Path {
        match self {
            ConfigLocation::Explicit(path) | ConfigLocation::Default(path) => path,
        }
    }
}

/// 定位配置文件：`CONTENT_CONFIG` 优先，其次是平台配置目录
pub fn locate_config_file() -> std::result::Result<ConfigLocation, HomeDirError> {
    if let Some(path) = env::var_os(constants::CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Ok(ConfigLocation::Explicit(PathBuf::from(path)));
    }
    let strategy = create_strategy()?;
    Ok(ConfigLocation::Default(
        strategy.config_dir().join(constants::CONFIG_FILE_NAME),
    ))
}
