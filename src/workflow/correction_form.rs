//! 批改表单
//!
//! 对应界面上收集到的全部输入

use crate::models::{Level, Submission, Tone};

/// 默认教师姓名
pub const DEFAULT_TEACHER: &str = "M. Techno Djieh";

/// 校验失败时展示的唯一提示
pub const MISSING_FIELDS_MESSAGE: &str =
    "⚠️ Fill in every field and add the student's submission.";

#[derive(Debug, Clone)]
pub struct CorrectionForm {
    pub teacher_name: String,
    pub student_name: String,
    pub subject: String,
    pub level: Level,
    pub tone: Tone,
    /// 参考答案（DOCX，可选）
    pub reference: Option<Submission>,
    /// 学生作业（必需）
    pub submission: Option<Submission>,
    /// 读取上传文件时出现的问题，校验通过后逐条提示
    pub upload_errors: Vec<String>,
}

impl Default for CorrectionForm {
    fn default() -> Self {
        Self {
            teacher_name: DEFAULT_TEACHER.to_string(),
            student_name: String::new(),
            subject: String::new(),
            level: Level::default(),
            tone: Tone::default(),
            reference: None,
            submission: None,
            upload_errors: Vec::new(),
        }
    }
}

impl CorrectionForm {
    /// 学生姓名、科目、作业文件是否齐全
    ///
    /// 齐全时返回作业文件
    pub fn ready_submission(&self) -> Option<&Submission> {
        if self.student_name.trim().is_empty() || self.subject.trim().is_empty() {
            return None;
        }
        self.submission.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentFormat;

    fn complete_form() -> CorrectionForm {
        CorrectionForm {
            student_name: "Awa".to_string(),
            subject: "Maths".to_string(),
            submission: Some(Submission::new(vec![1, 2, 3], DocumentFormat::Pdf)),
            ..CorrectionForm::default()
        }
    }

    #[test]
    fn test_gate() {
        assert!(complete_form().ready_submission().is_some());

        let mut form = complete_form();
        form.student_name = "  ".to_string();
        assert!(form.ready_submission().is_none());

        let mut form = complete_form();
        form.subject.clear();
        assert!(form.ready_submission().is_none());

        let mut form = complete_form();
        form.submission = None;
        assert!(form.ready_submission().is_none());

        // 教师姓名和参考答案都不是必填项
        let mut form = complete_form();
        form.teacher_name.clear();
        form.reference = None;
        assert!(form.ready_submission().is_some());
    }
}
