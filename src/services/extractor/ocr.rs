//! 图片 OCR
//!
//! 图片先用 `image` 解码并统一转成 PNG，再交给 OCR 引擎识别。
//! 生产环境通过 stdin/stdout 驱动 `tesseract` 可执行文件。

use std::future::Future;
use std::io::Cursor;
use std::process::Stdio;

use image::ImageFormat;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::config::Config;
use crate::error::ExtractError;

/// OCR 引擎
pub trait OcrEngine: Send + Sync {
    /// 识别 PNG 图片中的文字，原样返回识别结果
    fn recognize(&self, png: &[u8]) -> impl Future<Output = Result<String, ExtractError>> + Send;
}

/// 解码上传的图片并重新编码为 PNG
///
/// 损坏或不支持的图片在这里就会报错，不会交给 OCR 引擎
pub fn prepare_image(bytes: &[u8]) -> Result<Vec<u8>, ExtractError> {
    let image = image::load_from_memory(bytes)?;
    debug!("图片尺寸: {}x{}", image.width(), image.height());

    let mut png = Cursor::new(Vec::new());
    image.write_to(&mut png, ImageFormat::Png)?;
    Ok(png.into_inner())
}

/// 基于 tesseract 命令行的 OCR
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    binary: String,
    language: String,
}

impl TesseractOcr {
    pub fn new(config: &Config) -> Self {
        Self {
            binary: config.tesseract_bin.clone(),
            language: config.ocr_language.clone(),
        }
    }
}

impl OcrEngine for TesseractOcr {
    async fn recognize(&self, png: &[u8]) -> Result<String, ExtractError> {
        debug!("调用 {} (语言: {})", self.binary, self.language);

        let mut child = Command::new(&self.binary)
            .args(["stdin", "stdout", "-l", self.language.as_str()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExtractError::Ocr {
                message: format!("cannot start {}: {}", self.binary, e),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(png).await.map_err(|e| ExtractError::Ocr {
                message: format!("cannot send image to {}: {}", self.binary, e),
            })?;
        }

        let output = child.wait_with_output().await.map_err(|e| ExtractError::Ocr {
            message: format!("{} did not finish: {}", self.binary, e),
        })?;

        if !output.status.success() {
            return Err(ExtractError::Ocr {
                message: format!(
                    "{} exited with {}: {}",
                    self.binary,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg_bytes() -> Vec<u8> {
        let img = image::RgbImage::from_pixel(32, 32, image::Rgb([255u8, 255, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Jpeg).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_prepare_image_reencodes_as_png() {
        let png = prepare_image(&jpeg_bytes()).unwrap();
        assert_eq!(image::guess_format(&png).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_prepare_image_rejects_garbage() {
        let err = prepare_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ExtractError::Image(_)));
    }

    #[tokio::test]
    async fn test_missing_binary_is_an_ocr_error() {
        let ocr = TesseractOcr {
            binary: "tesseract-binary-that-does-not-exist".to_string(),
            language: "fra".to_string(),
        };
        let err = ocr.recognize(&[]).await.unwrap_err();
        assert!(matches!(err, ExtractError::Ocr { .. }));
    }

    /// 需要本机安装 tesseract 和法语语言包
    #[tokio::test]
    #[ignore]
    async fn test_tesseract_blank_image() {
        let ocr = TesseractOcr::new(&Config::default());
        let png = prepare_image(&jpeg_bytes()).unwrap();
        let text = ocr.recognize(&png).await.unwrap();
        assert!(text.trim().is_empty());
    }
}
