use crate::error::ConfigError;
use crate::services::response_parser::ScorePolicy;

/// API 密钥所在的环境变量
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// 程序配置
///
/// 进程启动时构建一次，之后以引用的方式注入到各个服务中
#[derive(Clone, Debug)]
pub struct Config {
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    // --- OCR 配置 ---
    /// tesseract 识别语言
    pub ocr_language: String,
    /// tesseract 可执行文件
    pub tesseract_bin: String,
    // --- 批改配置 ---
    /// 小数分数的处理方式
    pub score_policy: ScorePolicy,
    /// 报告文字配置（TOML 文件，可选）
    pub report_settings_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose_logging: false,
            llm_api_key: String::new(),
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            llm_model_name: "gemini-2.0-flash".to_string(),
            ocr_language: "fra".to_string(),
            tesseract_bin: "tesseract".to_string(),
            score_policy: ScorePolicy::Truncate,
            report_settings_file: None,
        }
    }
}

impl Config {
    /// 从环境变量读取配置
    ///
    /// `GEMINI_API_KEY` 必须存在，其余变量缺省时使用默认值。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 通过任意查找函数构建配置，便于测试时不依赖进程环境
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        let llm_api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::EnvVarNotFound {
                var_name: API_KEY_VAR.to_string(),
            })?;

        let verbose_logging = match lookup("VERBOSE_LOGGING") {
            Some(value) => value.parse().map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: "VERBOSE_LOGGING".to_string(),
                value,
                expected_type: "bool".to_string(),
            })?,
            None => default.verbose_logging,
        };

        let score_policy = match lookup("SCORE_POLICY") {
            Some(value) => value.parse().map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: "SCORE_POLICY".to_string(),
                value,
                expected_type: "truncate | round | strict".to_string(),
            })?,
            None => default.score_policy,
        };

        Ok(Self {
            verbose_logging,
            llm_api_key,
            llm_api_base_url: lookup("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: lookup("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            ocr_language: lookup("OCR_LANGUAGE").unwrap_or(default.ocr_language),
            tesseract_bin: lookup("TESSERACT_BIN").unwrap_or(default.tesseract_bin),
            score_policy,
            report_settings_file: lookup("REPORT_SETTINGS_FILE").filter(|p| !p.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::EnvVarNotFound { ref var_name } if var_name == API_KEY_VAR));
    }

    #[test]
    fn test_blank_api_key_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "   ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_are_applied() {
        let config = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "secret")])).unwrap();
        assert_eq!(config.llm_api_key, "secret");
        assert_eq!(config.llm_model_name, "gemini-2.0-flash");
        assert_eq!(config.ocr_language, "fra");
        assert_eq!(config.score_policy, ScorePolicy::Truncate);
        assert!(config.report_settings_file.is_none());
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_overrides_and_bad_values() {
        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "secret"),
            ("SCORE_POLICY", "round"),
            ("VERBOSE_LOGGING", "true"),
            ("LLM_MODEL_NAME", "gemini-2.5-pro"),
        ]))
        .unwrap();
        assert_eq!(config.score_policy, ScorePolicy::Round);
        assert!(config.verbose_logging);
        assert_eq!(config.llm_model_name, "gemini-2.5-pro");

        let err = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "secret"),
            ("SCORE_POLICY", "ceil"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::EnvVarParseFailed { .. }));
    }
}
