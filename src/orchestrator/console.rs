//! 终端展示

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::FileError;
use crate::workflow::{PanelKind, Presenter};

/// 把结果打印到终端，把报告写入输出目录
pub struct ConsolePresenter {
    output_dir: PathBuf,
    saved_report: Option<PathBuf>,
}

impl ConsolePresenter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            saved_report: None,
        }
    }

    /// 已保存的报告路径
    pub fn saved_report(&self) -> Option<&Path> {
        self.saved_report.as_deref()
    }
}

impl Presenter for ConsolePresenter {
    fn error(&mut self, message: &str) {
        println!("❌ {}", message);
    }

    fn busy(&mut self, message: &str) {
        println!("⏳ {}", message);
    }

    fn panel(&mut self, kind: PanelKind, title: &str, body: &str) {
        let rule = match kind {
            PanelKind::Info => "─",
            PanelKind::Warning => "═",
            PanelKind::Success => "━",
        };
        println!("\n### {}", title);
        println!("{}", rule.repeat(60));
        println!("{}", body);
    }

    fn metric(&mut self, label: &str, value: &str) {
        println!("\n📊 {}: {}", label, value);
    }

    fn offer_download(&mut self, file_name: &str, mime: &str, bytes: Vec<u8>) {
        let path = self.output_dir.join(file_name);
        match std::fs::write(&path, &bytes) {
            Ok(()) => {
                info!("📥 报告已保存: {} ({})", path.display(), mime);
                println!("\n📥 {}", path.display());
                self.saved_report = Some(path);
            }
            Err(source) => {
                let err = FileError::WriteFailed {
                    path: path.display().to_string(),
                    source,
                };
                error!("❌ {}", err);
                println!("❌ {}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_is_written_to_output_dir() {
        let dir = std::env::temp_dir().join(format!("correction-console-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let mut presenter = ConsolePresenter::new(&dir);
        presenter.offer_download("Correction_Test.docx", "application/test", vec![1, 2, 3]);

        let saved = presenter.saved_report().unwrap().to_path_buf();
        assert_eq!(saved, dir.join("Correction_Test.docx"));
        assert_eq!(std::fs::read(&saved).unwrap(), vec![1, 2, 3]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unwritable_dir_keeps_no_report() {
        let mut presenter = ConsolePresenter::new("/nonexistent/correction/output");
        presenter.offer_download("Correction_Test.docx", "application/test", vec![1]);
        assert!(presenter.saved_report().is_none());
    }
}
