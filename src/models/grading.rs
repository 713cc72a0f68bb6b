//! 批改请求与批改结果

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 字段缺失时的占位文本
pub const NOT_GENERATED: &str = "Not generated";
/// 未能解析分数时的中性默认分
pub const DEFAULT_SCORE: &str = "10";
/// 模型调用失败时的分数
pub const ERROR_SCORE: &str = "00";

/// 学段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Level {
    /// 小学
    Primary,
    /// 中学
    #[default]
    Secondary,
    /// 大学
    University,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Primary => "Primary",
            Level::Secondary => "Secondary",
            Level::University => "University",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(Level::Primary),
            "secondary" => Ok(Level::Secondary),
            "university" => Ok(Level::University),
            other => Err(format!(
                "unknown level '{other}' (expected primary, secondary or university)"
            )),
        }
    }
}

/// 批改风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tone {
    /// 鼓励型
    Encouraging,
    /// 标准
    #[default]
    Standard,
    /// 严格
    Strict,
}

impl Tone {
    /// 界面上的选项文字，也是 prompt 风格匹配的输入
    pub fn label(self) -> &'static str {
        match self {
            Tone::Encouraging => "Encouraging",
            Tone::Standard => "Standard",
            Tone::Strict => "Strict",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encouraging" => Ok(Tone::Encouraging),
            "standard" => Ok(Tone::Standard),
            "strict" => Ok(Tone::Strict),
            other => Err(format!(
                "unknown tone '{other}' (expected encouraging, standard or strict)"
            )),
        }
    }
}

/// 一次批改请求，每次运行构建一次，之后只读
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingRequest {
    /// 参考答案文本（没有时为空串）
    pub reference_text: String,
    /// 学生作业文本
    pub submission_text: String,
    pub subject: String,
    pub level: Level,
    pub tone: Tone,
}

/// 批改结果
///
/// 四个字段总是有值：解析失败时用占位值填充，绝不返回半个结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingResult {
    /// 教学评语
    pub comment: String,
    /// 改进方向
    pub improvement_axes: String,
    /// 优点
    pub strengths: String,
    /// 参考分数（满分 20）
    pub score: String,
}

impl GradingResult {
    /// 模型调用失败时的降级结果
    pub fn from_error(message: impl fmt::Display) -> Self {
        Self {
            comment: format!("AI Error: {}", message),
            improvement_axes: String::new(),
            strengths: String::new(),
            score: ERROR_SCORE.to_string(),
        }
    }
}
