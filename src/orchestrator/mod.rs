//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用
//! - 启动时构建唯一的 LLM 客户端和 OCR 引擎
//! - 把一次表单提交交给 `workflow::CorrectionFlow`
//!
//! ### `console` - 终端展示
//! - 实现 `Presenter`：打印结果面板，把报告写到输出目录
//!
//! ## 层次关系
//!
//! ```text
//! app (一次提交)
//!     ↓
//! workflow::CorrectionFlow (提取 → 批改 → 展示 → 报告)
//!     ↓
//! services (能力层：extractor / llm / parser / report)
//! ```

pub mod app;
pub mod console;

// 重新导出主要类型
pub use app::{App, ProductionFlow};
pub use console::ConsolePresenter;
