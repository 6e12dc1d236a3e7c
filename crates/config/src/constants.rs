pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "borges-archive";
pub const APP_NAME: &str = "content-index";

pub const CONFIG_FILE_NAME: &str = "content.toml";
/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "CONTENT_CONFIG";
