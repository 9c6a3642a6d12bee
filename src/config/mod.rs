use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{ConfigError, ConfigResult};
use crate::query::cost::{CostFormulaConfig, QueryCosterType};

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "querycost".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

/// 表统计信息种子数据
///
/// 用于在没有真实存储时为内存行数来源提供初始行数
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TableStatsConfig {
    pub name: String,
    pub row_count: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub coster: QueryCosterType,
    pub cost: CostFormulaConfig,
    pub log: LogConfig,
    pub tables: Vec<TableStatsConfig>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 从 TOML 文本解析配置并校验代价公式
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.cost.validate()?;
        if let Some(entry) = self.tables.iter().find(|t| t.name.trim().is_empty()) {
            return Err(ConfigError::Parse(format!(
                "表统计信息缺少表名 (row_count = {})",
                entry.row_count
            )));
        }
        Ok(())
    }
}
