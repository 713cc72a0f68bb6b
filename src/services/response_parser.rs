//! 模型回复解析
//!
//! 模型返回的是自由文本，这里按固定小节顺序用正则逐项提取。
//! 每个字段独立：某一项匹配失败只影响该项，整体永远不会失败。
//! 小节顺序被打乱时，顺序错位的那一对会提取失败（锚定顺序的固有限制）。

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::models::grading::{DEFAULT_SCORE, NOT_GENERATED};
use crate::models::GradingResult;
use crate::services::prompt::{AXES_LABEL, COMMENT_LABEL, SCORE_LABEL, STRENGTHS_LABEL};

/// `label : (内容) \n next_label`，内容可跨行，惰性匹配
fn section_pattern(label: &str, next_label: &str) -> Regex {
    Regex::new(&format!(
        r"(?s){}\s*:\s*(.*?)\n\s*{}",
        regex::escape(label),
        regex::escape(next_label)
    ))
    .expect("section pattern is valid")
}

static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| section_pattern(COMMENT_LABEL, AXES_LABEL));
static AXES_RE: LazyLock<Regex> = LazyLock::new(|| section_pattern(AXES_LABEL, STRENGTHS_LABEL));
static STRENGTHS_RE: LazyLock<Regex> =
    LazyLock::new(|| section_pattern(STRENGTHS_LABEL, SCORE_LABEL));
static SCORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{}\s*:\s*(\d+)(?:[.,](\d+))?",
        regex::escape(SCORE_LABEL)
    ))
    .expect("score pattern is valid")
});

/// 小数分数（如 `15.5/20`）的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorePolicy {
    /// 只取整数部分：`15.5` → `15`
    #[default]
    Truncate,
    /// 四舍五入：`15.5` → `16`
    Round,
    /// 小数视为无法解析，使用默认分
    Strict,
}

impl fmt::Display for ScorePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScorePolicy::Truncate => "truncate",
            ScorePolicy::Round => "round",
            ScorePolicy::Strict => "strict",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ScorePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truncate" => Ok(ScorePolicy::Truncate),
            "round" => Ok(ScorePolicy::Round),
            "strict" => Ok(ScorePolicy::Strict),
            other => Err(format!("unknown score policy '{other}'")),
        }
    }
}

/// 解析模型回复
pub fn parse_response(raw: &str, policy: ScorePolicy) -> GradingResult {
    let result = GradingResult {
        comment: capture_section(&COMMENT_RE, raw, COMMENT_LABEL),
        improvement_axes: capture_section(&AXES_RE, raw, AXES_LABEL),
        strengths: capture_section(&STRENGTHS_RE, raw, STRENGTHS_LABEL),
        score: capture_score(raw, policy),
    };
    debug!("解析结果: 分数 {}", result.score);
    result
}

fn capture_section(re: &Regex, raw: &str, label: &str) -> String {
    match re.captures(raw).and_then(|caps| caps.get(1)) {
        Some(m) => m.as_str().trim().to_string(),
        None => {
            warn!("⚠️ 回复中未找到 \"{}\" 小节", label);
            NOT_GENERATED.to_string()
        }
    }
}

fn capture_score(raw: &str, policy: ScorePolicy) -> String {
    let Some(caps) = SCORE_RE.captures(raw) else {
        warn!("⚠️ 回复中未找到分数，使用默认分 {}", DEFAULT_SCORE);
        return DEFAULT_SCORE.to_string();
    };

    let integer = &caps[1];
    let Some(fraction) = caps.get(2).map(|m| m.as_str()) else {
        return integer.to_string();
    };

    match policy {
        ScorePolicy::Truncate => integer.to_string(),
        ScorePolicy::Round => match format!("{integer}.{fraction}").parse::<f64>() {
            Ok(value) => format!("{}", value.round() as u64),
            Err(_) => integer.to_string(),
        },
        ScorePolicy::Strict => {
            warn!("⚠️ 分数 {}.{} 不是整数，使用默认分", integer, fraction);
            DEFAULT_SCORE.to_string()
        }
    }
}
