use crate::error::{AppResult, ConfigError};
use crate::services::id_generator::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
use std::str::FromStr;

/// ID 生成策略
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdStrategy {
    /// 随机 UUID v4
    Uuid,
    /// 顺序ID，便于比对两次生成结果
    Sequential,
}

impl FromStr for IdStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(IdStrategy::Uuid),
            "sequential" => Ok(IdStrategy::Sequential),
            _ => Err(ConfigError::InvalidValue {
                var_name: "ID_STRATEGY".to_string(),
                value: s.to_string(),
                expected: "uuid | sequential".to_string(),
            }),
        }
    }
}

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 内容所属分支ID
    pub branch_id: String,
    /// 内容文件目录，不设置时使用内置内容
    pub content_folder: Option<String>,
    /// JSON 导出文件
    pub output_file: String,
    /// 运行报告文件
    pub report_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    pub id_strategy: IdStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            branch_id: "default-branch".to_string(),
            content_folder: None,
            output_file: "seed_output.json".to_string(),
            report_file: "seed_report.txt".to_string(),
            verbose_logging: false,
            id_strategy: IdStrategy::Uuid,
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// 从任意变量来源读取配置，未设置或无法解析的值使用默认值
    pub fn from_vars<F>(var: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let id_strategy = match var("ID_STRATEGY") {
            Some(v) => v.parse()?,
            None => default.id_strategy,
        };

        Ok(Self {
            branch_id: var("SEED_BRANCH_ID").filter(|v| !v.trim().is_empty()).unwrap_or(default.branch_id),
            content_folder: var("CONTENT_FOLDER").filter(|v| !v.trim().is_empty()),
            output_file: var("OUTPUT_FILE").unwrap_or(default.output_file),
            report_file: var("REPORT_FILE").unwrap_or(default.report_file),
            verbose_logging: var("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            id_strategy,
        })
    }

    pub fn id_generator(&self) -> Box<dyn IdGenerator> {
        match self.id_strategy {
            IdStrategy::Uuid => Box::new(UuidIdGenerator),
            IdStrategy::Sequential => Box::new(SequentialIdGenerator::new("seed")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_vars(|_| None).unwrap();

        assert_eq!(config.branch_id, "default-branch");
        assert_eq!(config.content_folder, None);
        assert_eq!(config.output_file, "seed_output.json");
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_values_from_vars() {
        let env = vars(&[
            ("SEED_BRANCH_ID", "branch-42"),
            ("CONTENT_FOLDER", "content"),
            ("VERBOSE_LOGGING", "true"),
            ("ID_STRATEGY", "Sequential"),
        ]);
        let config = Config::from_vars(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.branch_id, "branch-42");
        assert_eq!(config.content_folder.as_deref(), Some("content"));
        assert!(config.verbose_logging);
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
        assert_eq!(config.id_generator().next_id(), "seed-0001");
    }

    #[test]
    fn test_unparsable_flag_falls_back_to_default() {
        let env = vars(&[("VERBOSE_LOGGING", "yes please")]);
        let config = Config::from_vars(|k| env.get(k).cloned()).unwrap();
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_unknown_id_strategy_rejected() {
        let env = vars(&[("ID_STRATEGY", "random")]);
        let err = Config::from_vars(|k| env.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("ID_STRATEGY"));
    }
}
