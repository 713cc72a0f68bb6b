//! 命令行参数
//!
//! 每个参数对应原界面上的一个表单控件

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, warn};

use crate::error::FileError;
use crate::models::{DocumentFormat, Level, Submission, Tone};
use crate::workflow::correction_form::{CorrectionForm, DEFAULT_TEACHER};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "correction-assistant",
    version,
    about = "Grade a student submission with a generative model and produce a Word report"
)]
pub struct Cli {
    /// 教师姓名
    #[arg(long, default_value = DEFAULT_TEACHER)]
    pub teacher: String,

    /// 学生姓名
    #[arg(long)]
    pub student: Option<String>,

    /// 科目
    #[arg(long)]
    pub subject: Option<String>,

    /// primary | secondary | university
    #[arg(long, default_value = "secondary")]
    pub level: Level,

    /// encouraging | standard | strict
    #[arg(long, default_value = "standard")]
    pub tone: Tone,

    /// 参考答案（DOCX，可选）
    #[arg(long)]
    pub reference: Option<PathBuf>,

    /// 学生作业文件
    #[arg(long)]
    pub submission: Option<PathBuf>,

    /// 作业格式 docx | pdf | image（缺省时按扩展名判断）
    #[arg(long)]
    pub format: Option<DocumentFormat>,

    /// 报告输出目录
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// 额外以 JSON 输出批改结果
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// 读取上传文件，组装表单
    ///
    /// 不会失败：作业文件读不出来或类型不明时留空，交给表单校验拦下；
    /// 参考答案读不出来时记一条提示，批改照常进行。
    pub async fn to_form(&self) -> CorrectionForm {
        let mut upload_errors = Vec::new();

        let reference = match &self.reference {
            Some(path) => match read_upload(path).await {
                Ok(bytes) => Some(Submission::new(bytes, DocumentFormat::Document)),
                Err(e) => {
                    warn!("⚠️ 参考答案不可用: {}", e);
                    upload_errors.push(format!("Reference error: {}", e));
                    None
                }
            },
            None => None,
        };

        let submission = match &self.submission {
            Some(path) => match self.load_submission(path).await {
                Ok(submission) => Some(submission),
                Err(e) => {
                    warn!("⚠️ 学生作业不可用: {}", e);
                    None
                }
            },
            None => None,
        };

        CorrectionForm {
            teacher_name: self.teacher.clone(),
            student_name: self.student.clone().unwrap_or_default(),
            subject: self.subject.clone().unwrap_or_default(),
            level: self.level,
            tone: self.tone,
            reference,
            submission,
            upload_errors,
        }
    }

    /// 作业格式：`--format` 优先，否则按扩展名判断
    async fn load_submission(&self, path: &Path) -> Result<Submission, FileError> {
        let format = self
            .format
            .or_else(|| DocumentFormat::from_path(path))
            .ok_or_else(|| FileError::UnknownType {
                path: path.display().to_string(),
            })?;
        Ok(Submission::new(read_upload(path).await?, format))
    }
}

async fn read_upload(path: &Path) -> Result<Vec<u8>, FileError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| FileError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
    debug!("已读取 {} ({} 字节)", path.display(), bytes.len());
    Ok(bytes)
}
