//! 应用 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：启动时创建一次配置好的 LLM 客户端、OCR 引擎、报告设置
//! 2. **单次运行**：把表单交给批改流程，一次按钮触发对应一次 `run`
//!
//! 本层不做任何业务判断，只负责组装和委托

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::services::extractor::{FileTextExtractor, TesseractOcr};
use crate::services::grading::GradingClient;
use crate::services::llm_service::LlmService;
use crate::services::report_builder::ReportSettings;
use crate::utils::logging::log_startup;
use crate::workflow::{CorrectionFlow, CorrectionForm, Presenter, RunOutcome};

/// 生产环境使用的流程
pub type ProductionFlow = CorrectionFlow<FileTextExtractor<TesseractOcr>, LlmService>;

/// 应用主结构
pub struct App {
    flow: ProductionFlow,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> AppResult<Self> {
        log_startup(&config);

        let report_settings = match &config.report_settings_file {
            Some(path) => {
                info!("📄 加载报告配置: {}", path);
                ReportSettings::load(Path::new(path)).await?
            }
            None => ReportSettings::default(),
        };

        let extractor = FileTextExtractor::new(TesseractOcr::new(&config));
        let grader = GradingClient::new(LlmService::new(&config), config.score_policy);

        Ok(Self {
            flow: CorrectionFlow::new(extractor, grader, report_settings),
        })
    }

    /// 运行一次批改
    pub async fn run<P: Presenter>(&self, form: &CorrectionForm, presenter: &mut P) -> RunOutcome {
        self.flow.run(form, presenter).await
    }
}
