//! 报告数据

use crate::models::{GradingResult, Level};

/// 生成报告所需的全部字段
///
/// 所有字段都是 `String`，允许为空串但不存在"缺失"
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportInfo {
    pub teacher_name: String,
    pub student_name: String,
    pub subject: String,
    pub level: String,
    pub score: String,
    pub comment: String,
    pub improvement_axes: String,
}

impl ReportInfo {
    /// 由批改结果和会话信息组装报告数据
    pub fn new(
        teacher_name: &str,
        student_name: &str,
        subject: &str,
        level: Level,
        result: &GradingResult,
    ) -> Self {
        Self {
            teacher_name: teacher_name.to_string(),
            student_name: student_name.to_string(),
            subject: subject.to_string(),
            level: level.label().to_string(),
            score: result.score.clone(),
            comment: result.comment.clone(),
            improvement_axes: result.improvement_axes.clone(),
        }
    }

    /// "科目 (学段)"
    pub fn subject_and_level(&self) -> String {
        format!("{} ({})", self.subject, self.level)
    }
}
