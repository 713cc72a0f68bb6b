//! 文本提取 - 业务能力层
//!
//! 只负责"把上传文件变成纯文本"，不关心流程。
//! 三种格式各自独立：
//! - `docx` - Word 文档正文段落
//! - `pdf` - PDF 逐页文本
//! - `ocr` - 图片 OCR

pub mod docx;
pub mod ocr;
pub mod pdf;

use std::future::Future;

use tracing::debug;

use crate::error::ExtractError;
use crate::models::{DocumentFormat, Submission};

pub use ocr::{OcrEngine, TesseractOcr};

/// 文本提取能力
///
/// 失败以 `Err` 返回，由流程层决定如何提示用户
pub trait TextExtractor: Send + Sync {
    fn extract(
        &self,
        submission: &Submission,
    ) -> impl Future<Output = Result<String, ExtractError>> + Send;
}

/// 按声明格式分派到对应提取器
pub struct FileTextExtractor<O> {
    ocr: O,
}

impl<O: OcrEngine> FileTextExtractor<O> {
    pub fn new(ocr: O) -> Self {
        Self { ocr }
    }
}

impl<O: OcrEngine> TextExtractor for FileTextExtractor<O> {
    async fn extract(&self, submission: &Submission) -> Result<String, ExtractError> {
        debug!(
            "提取文本: 格式 {}, {} 字节",
            submission.format,
            submission.bytes.len()
        );

        let text = match submission.format {
            DocumentFormat::Document => docx::extract_docx_text(&submission.bytes)?,
            DocumentFormat::Pdf => pdf::extract_pdf_text(&submission.bytes)?,
            DocumentFormat::Image => {
                let png = ocr::prepare_image(&submission.bytes)?;
                self.ocr.recognize(&png).await?
            }
        };

        debug!("提取完成: {} 字符", text.chars().count());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedOcr {
        text: &'static str,
        calls: AtomicUsize,
    }

    impl OcrEngine for FixedOcr {
        async fn recognize(&self, png: &[u8]) -> Result<String, ExtractError> {
            assert_eq!(image::guess_format(png).unwrap(), image::ImageFormat::Png);
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.to_string())
        }
    }

    fn extractor(text: &'static str) -> FileTextExtractor<FixedOcr> {
        FileTextExtractor::new(FixedOcr {
            text,
            calls: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn test_image_goes_through_ocr_verbatim() {
        let img = image::RgbImage::from_pixel(8, 8, image::Rgb([0u8, 0, 0]));
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();

        let extractor = extractor("  Réponse manuscrite\n");
        let submission = Submission::new(bytes.into_inner(), DocumentFormat::Image);
        let text = extractor.extract(&submission).await.unwrap();

        assert_eq!(text, "  Réponse manuscrite\n");
        assert_eq!(extractor.ocr.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_corrupt_image_never_reaches_ocr() {
        let extractor = extractor("unused");
        let submission = Submission::new(b"broken".to_vec(), DocumentFormat::Image);
        assert!(extractor.extract(&submission).await.is_err());
        assert_eq!(extractor.ocr.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_declared_format_wins() {
        // PDF 内容按 DOCX 声明时应当报错，而不是被猜测成 PDF
        let extractor = extractor("unused");
        let submission = Submission::new(b"%PDF-1.4".to_vec(), DocumentFormat::Document);
        assert!(matches!(
            extractor.extract(&submission).await,
            Err(ExtractError::Archive(_))
        ));
    }
}
