//! 批改流程 - 流程层
//!
//! 核心职责：定义"一次批改"的完整流程
//!
//! 流程顺序：
//! 1. 表单校验（不通过则什么都不做）
//! 2. 提取参考答案 / 学生作业文本（失败 → 提示 + 空文本，继续）
//! 3. 模型批改（失败 → 降级结果，继续）
//! 4. 展示四个结果面板
//! 5. 生成报告并提供下载

use std::time::Instant;

use chrono::{Local, NaiveDate};
use tracing::{error, info, warn};

use crate::models::{GradingRequest, GradingResult, ReportInfo, Submission};
use crate::services::extractor::TextExtractor;
use crate::services::grading::GradingClient;
use crate::services::llm_service::GradingModel;
use crate::services::report_builder::{
    build_report, report_file_name, ReportSettings, REPORT_MIME,
};
use crate::utils::logging::log_run_summary;
use crate::workflow::correction_form::{CorrectionForm, MISSING_FIELDS_MESSAGE};
use crate::workflow::presenter::{PanelKind, Presenter};

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// 表单不完整，流程未启动
    Rejected,
    /// 流程跑完；`report` 为提供下载的文件名（报告生成失败时为 `None`）
    Completed {
        result: GradingResult,
        report: Option<String>,
    },
}

/// 批改流程
///
/// - 编排完整的批改流程
/// - 不持有界面，只通过 `Presenter` 输出
/// - 子步骤失败不会中断整个流程
pub struct CorrectionFlow<E, M> {
    extractor: E,
    grader: GradingClient<M>,
    report_settings: ReportSettings,
}

impl<E: TextExtractor, M: GradingModel> CorrectionFlow<E, M> {
    pub fn new(extractor: E, grader: GradingClient<M>, report_settings: ReportSettings) -> Self {
        Self {
            extractor,
            grader,
            report_settings,
        }
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    pub fn grader(&self) -> &GradingClient<M> {
        &self.grader
    }

    /// 以今天的日期运行
    pub async fn run<P: Presenter>(&self, form: &CorrectionForm, presenter: &mut P) -> RunOutcome {
        self.run_on(form, presenter, Local::now().date_naive()).await
    }

    /// 运行一次批改，报告日期为 `date`
    pub async fn run_on<P: Presenter>(
        &self,
        form: &CorrectionForm,
        presenter: &mut P,
        date: NaiveDate,
    ) -> RunOutcome {
        let Some(submission) = form.ready_submission() else {
            warn!("表单不完整，未启动批改");
            presenter.error(MISSING_FIELDS_MESSAGE);
            return RunOutcome::Rejected;
        };

        let started = Instant::now();
        info!("📝 开始批改: {} ({})", form.student_name, form.subject);

        for message in &form.upload_errors {
            presenter.error(message);
        }

        // ========== 提取文本 ==========
        let reference_text = match &form.reference {
            Some(reference) => self.extract_or_notify(reference, presenter).await,
            None => String::new(),
        };
        let submission_text = self.extract_or_notify(submission, presenter).await;

        let request = GradingRequest {
            reference_text,
            submission_text,
            subject: form.subject.clone(),
            level: form.level,
            tone: form.tone,
        };

        // ========== 模型批改 ==========
        presenter.busy("AI analysis in progress...");
        let result = self.grader.grade(&request).await;

        // ========== 展示 ==========
        presenter.panel(PanelKind::Info, "📝 Pedagogical comment", &result.comment);
        presenter.panel(PanelKind::Warning, "🔧 Improvement axes", &result.improvement_axes);
        presenter.panel(PanelKind::Success, "🌟 Strengths", &result.strengths);
        presenter.metric("Indicative score", &format!("{}/20", result.score));

        // ========== 报告 ==========
        let info = ReportInfo::new(
            &form.teacher_name,
            &form.student_name,
            &form.subject,
            form.level,
            &result,
        );
        let report = match build_report(&info, &self.report_settings, date) {
            Ok(bytes) => {
                let file_name = report_file_name(&form.student_name);
                info!("📄 报告已生成: {} ({} 字节)", file_name, bytes.len());
                presenter.offer_download(&file_name, REPORT_MIME, bytes);
                Some(file_name)
            }
            Err(e) => {
                error!("❌ 报告生成失败: {}", e);
                presenter.error(&format!("Report error: {}", e));
                None
            }
        };

        log_run_summary(&form.student_name, &result, started.elapsed());

        RunOutcome::Completed { result, report }
    }

    /// 提取文本；失败时提示用户并返回空串
    async fn extract_or_notify<P: Presenter>(
        &self,
        submission: &Submission,
        presenter: &mut P,
    ) -> String {
        match self.extractor.extract(submission).await {
            Ok(text) => {
                info!(
                    "✓ {} 文本提取完成 ({} 字符)",
                    submission.format,
                    text.chars().count()
                );
                text
            }
            Err(e) => {
                warn!("⚠️ {} 文本提取失败: {}", submission.format, e);
                presenter.error(&format!("{} error: {}", submission.format.label(), e));
                String::new()
            }
        }
    }
}
