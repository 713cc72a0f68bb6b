//! # Correction Assistant
//!
//! 智能批改助手：读取学生作业（Word / PDF / 扫描图片），连同参考答案一起交给生成式模型，
//! 把模型的自由文本回复解析成四个字段，并生成可下载的 Word 报告。
//!
//! ## 架构设计
//!
//! ### ① 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个能力互不依赖
//! - `extractor` - 文本提取（docx / pdf / ocr）
//! - `prompt` / `response_parser` - prompt 构建与回复解析（共享小节标题）
//! - `llm_service` / `grading` - 模型调用，失败折叠为降级结果
//! - `report_builder` - 内存中生成 .docx
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 定义"一次批改"的完整流程
//! - `CorrectionForm` - 表单输入与校验
//! - `CorrectionFlow` - 流程编排（提取 → 批改 → 展示 → 报告）
//! - `Presenter` - 界面接口
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/app` - 启动时组装唯一的客户端
//! - `orchestrator/console` - 终端展示
//!
//! ## 模块结构

pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{DocumentFormat, GradingRequest, GradingResult, Level, ReportInfo, Submission, Tone};
pub use orchestrator::{App, ConsolePresenter};
pub use workflow::{CorrectionFlow, CorrectionForm, Presenter, RunOutcome};
