use std::path::PathBuf;

/// Kiosk configuration
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | LUNA_DATA_DIR | ./data | 状态文件目录 |
/// | LUNA_BASE_URL | https://order.lunashop.example | 桌台二维码链接 |
/// | LOG_LEVEL | info | 日志级别 |
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persistence blob
    pub data_dir: String,
    /// Base ordering URL encoded into table QR images
    pub base_url: String,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("LUNA_DATA_DIR").unwrap_or_else(|_| "./data".into()),
            base_url: std::env::var("LUNA_BASE_URL")
                .unwrap_or_else(|_| "https://order.lunashop.example".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Full path of the state blob
    pub fn state_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(crate::persist::STATE_FILE)
    }
}
