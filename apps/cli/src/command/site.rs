use super::{Command, print_json};
use crate::error::Result;
use content_core::{ContentIndex, Resolved};
use std::sync::Arc;

pub struct SiteCommand {
    index: Arc<ContentIndex>,
}

impl SiteCommand {
    pub fn new(index: Arc<ContentIndex>) -> Self {
        Self { index }
    }
}

#[async_trait::async_trait]
impl Command for SiteCommand {
    async fn execute(&self) -> Result<()> {
        let resolved = self.index.site_config_resolved().await;
        report_fallback("_site", &resolved);
        print_json(resolved.value())
    }
}

/// 配置文档未能完整读取时在标准错误上提示
pub(super) fn report_fallback<T>(name: &str, resolved: &Resolved<T>) {
    match resolved {
        Resolved::Loaded(_) => {}
        Resolved::Defaulted(_) => eprintln!("{} 不存在，使用默认配置", name),
        Resolved::Recovered { reason, .. } => eprintln!("{} 有误，部分使用默认配置: {}", name, reason),
    }
}
