use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文本提取错误
    #[error("提取错误: {0}")]
    Extract(#[from] ExtractError),
    /// LLM 服务错误
    #[error("LLM错误: {0}")]
    Llm(#[from] LlmError),
    /// 报告生成错误
    #[error("报告错误: {0}")]
    Report(#[from] ReportError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 文本提取错误
///
/// `Display` 文本会原样展示给用户，所以用英文
#[derive(Debug, Error)]
pub enum ExtractError {
    /// 文件不是合法的 ZIP/DOCX 包
    #[error("cannot open document package: {0}")]
    Archive(#[from] zip::result::ZipError),
    /// DOCX 内部 XML 无法解析
    #[error("malformed document XML: {0}")]
    Xml(String),
    /// PDF 无法加载或无法提取
    #[error("cannot read PDF: {0}")]
    Pdf(#[from] lopdf::Error),
    /// 图片无法解码
    #[error("cannot decode image: {0}")]
    Image(#[from] image::ImageError),
    /// OCR 引擎调用失败
    #[error("OCR failed: {message}")]
    Ocr { message: String },
}

/// LLM 服务错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// 请求构建失败
    #[error("invalid request: {0}")]
    RequestBuild(#[from] async_openai::error::OpenAIError),
    /// API 调用失败
    #[error("{model} call failed: {source}")]
    ApiCallFailed {
        model: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 回复中没有文本内容
    #[error("{model} returned an empty reply")]
    EmptyContent { model: String },
}

impl LlmError {
    /// 创建 API 调用错误
    pub fn api_call_failed(
        model: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        LlmError::ApiCallFailed {
            model: model.into(),
            source: Box::new(source),
        }
    }
}

/// 报告生成错误
#[derive(Debug, Error)]
pub enum ReportError {
    /// 打包 DOCX 失败
    #[error("cannot package report: {0}")]
    Package(String),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 无法从扩展名判断文件类型
    #[error("无法识别的文件类型: {path}")]
    UnknownType { path: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 环境变量不存在
    #[error("环境变量 {var_name} 不存在")]
    EnvVarNotFound { var_name: String },
    /// 报告配置文件无法读取
    #[error("无法读取报告配置 {path}: {source}")]
    SettingsUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 报告配置文件 TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    SettingsInvalid {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
