//! 上传文件模型

use std::fmt;
use std::str::FromStr;

use phf::phf_map;

/// 上传文件的声明格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Word 文档 (.docx)
    Document,
    /// PDF
    Pdf,
    /// 扫描件 / 照片
    Image,
}

/// 扩展名 → 格式（与上传框接受的类型一致）
static EXTENSIONS: phf::Map<&'static str, DocumentFormat> = phf_map! {
    "docx" => DocumentFormat::Document,
    "pdf" => DocumentFormat::Pdf,
    "jpg" => DocumentFormat::Image,
    "jpeg" => DocumentFormat::Image,
    "png" => DocumentFormat::Image,
};

impl DocumentFormat {
    /// 获取展示名称
    pub fn label(self) -> &'static str {
        match self {
            DocumentFormat::Document => "DOCX",
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::Image => "Image",
        }
    }

    /// 根据文件扩展名判断格式（不区分大小写）
    pub fn from_extension(ext: &str) -> Option<Self> {
        EXTENSIONS.get(ext.to_ascii_lowercase().as_str()).copied()
    }

    /// 根据文件路径判断格式
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "docx" | "document" => Ok(DocumentFormat::Document),
            "pdf" => Ok(DocumentFormat::Pdf),
            "image" | "img" => Ok(DocumentFormat::Image),
            other => Err(format!("unknown format '{other}' (expected docx, pdf or image)")),
        }
    }
}

/// 一份上传的文件：原始字节 + 声明格式
///
/// 只被文本提取读取一次，不会被修改
#[derive(Debug, Clone)]
pub struct Submission {
    pub bytes: Vec<u8>,
    pub format: DocumentFormat,
}

impl Submission {
    pub fn new(bytes: Vec<u8>, format: DocumentFormat) -> Self {
        Self { bytes, format }
    }
}
