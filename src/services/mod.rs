pub mod extractor;
pub mod grading;
pub mod llm_service;
pub mod prompt;
pub mod report_builder;
pub mod response_parser;

pub use extractor::{FileTextExtractor, OcrEngine, TesseractOcr, TextExtractor};
pub use grading::GradingClient;
pub use llm_service::{GradingModel, LlmService};
pub use response_parser::ScorePolicy;
