//! Prompt 构建
//!
//! 四个小节标题同时被 `response_parser` 用来切分模型回复，两边必须同步修改。

use crate::models::GradingRequest;

pub const COMMENT_LABEL: &str = "Pedagogical comment";
pub const AXES_LABEL: &str = "Improvement axes";
pub const STRENGTHS_LABEL: &str = "Strengths";
pub const SCORE_LABEL: &str = "Indicative score";

const SUPPORTIVE: &str = "be very supportive, emphasize effort.";
const RIGOROUS: &str = "be rigorous and demanding.";
const NEUTRAL: &str = "be neutral and objective.";

/// 风格 → 指令，按顺序匹配，先命中者优先
pub fn style_instruction(tone: &str) -> &'static str {
    if tone.contains("Encouraging") {
        SUPPORTIVE
    } else if tone.contains("Strict") {
        RIGOROUS
    } else {
        NEUTRAL
    }
}

/// 构建发送给模型的完整指令
pub fn build_prompt(request: &GradingRequest) -> String {
    format!(
        r#"
You are a pedagogical expert at {level} level.
Subject: {subject}
Style: {style}

REFERENCE ANSWER:
{reference}

STUDENT SUBMISSION:
{submission}

Answer STRICTLY in this format:

{comment}:
...

{axes}:
...

{strengths}:
...

{score}:
.../20
"#,
        level = request.level,
        subject = request.subject,
        style = style_instruction(request.tone.label()),
        reference = request.reference_text,
        submission = request.submission_text,
        comment = COMMENT_LABEL,
        axes = AXES_LABEL,
        strengths = STRENGTHS_LABEL,
        score = SCORE_LABEL,
    )
}
