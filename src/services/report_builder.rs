//! 报告生成 - 业务能力层
//!
//! 把批改结果渲染成 Word 文档（.docx），全程在内存中完成，不落盘。
//!
//! 版式固定，顺序即约定：
//! 1. 居中的两行抬头
//! 2. 标题
//! 3. 六行两列表格（标签 / 值）
//! 4. 生成日期
//! 5. 虚线分隔
//! 6. 居中的联系方式

use std::io::Cursor;
use std::path::Path;

use chrono::NaiveDate;
use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph, Run, Style, StyleType, Table, TableCell,
    TableRow, WidthType,
};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ConfigError, ReportError};
use crate::models::ReportInfo;

/// 报告文件的 MIME 类型
pub const REPORT_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// 分隔线
const RULE: &str = "------------------------------------------------------------";

/// 表格两列宽度 (dxa)
const LABEL_WIDTH: usize = 3000;
const VALUE_WIDTH: usize = 6000;

/// 报告中的固定文字，可通过 TOML 文件覆盖
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// 抬头两行
    pub letterhead: [String; 2],
    pub title: String,
    /// 页脚联系方式
    pub contact: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            letterhead: [
                "REPUBLIQUE DE COTE D'IVOIRE".to_string(),
                "Union - Discipline - Travail".to_string(),
            ],
            title: "AI PEDAGOGICAL CORRECTION REPORT".to_string(),
            contact: "For any artificial intelligence needs, contact Techno Djieh \
                      at +225 0757283553 or by email: bitahdhiehd@gmail.com"
                .to_string(),
        }
    }
}

impl ReportSettings {
    /// 从 TOML 文件加载，未写的字段保持默认值
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path).await.map_err(|source| {
            ConfigError::SettingsUnreadable {
                path: path.display().to_string(),
                source,
            }
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::SettingsInvalid {
            path: path.display().to_string(),
            source,
        })
    }
}

/// 表格的六行，顺序固定
pub fn report_rows(info: &ReportInfo) -> [(&'static str, String); 6] {
    [
        ("Teacher:", info.teacher_name.clone()),
        ("Student:", info.student_name.clone()),
        ("Subject / Level:", info.subject_and_level()),
        ("Indicative score:", info.score.clone()),
        ("Pedagogical comment:", info.comment.clone()),
        ("Improvement axes:", info.improvement_axes.clone()),
    ]
}

/// 下载文件名：`Correction_<学生姓名>.docx`
///
/// 路径分隔符和文件名非法字符替换为 `_`
pub fn report_file_name(student_name: &str) -> String {
    let safe: String = student_name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("Correction_{}.docx", safe)
}

/// 生成报告
///
/// # 参数
/// - `info`: 报告数据
/// - `settings`: 抬头 / 标题 / 联系方式
/// - `date`: 生成日期
///
/// # 返回
/// 返回 .docx 文件的字节
pub fn build_report(
    info: &ReportInfo,
    settings: &ReportSettings,
    date: NaiveDate,
) -> Result<Vec<u8>, ReportError> {
    let letterhead = settings.letterhead.join("\n");
    let generated_on = format!("\nDocument generated on: {}", date.format("%Y-%m-%d"));

    let docx = Docx::new()
        .add_style(
            Style::new("Title", StyleType::Paragraph)
                .name("Title")
                .size(40)
                .bold(),
        )
        .add_style(Style::new("TableGrid", StyleType::Table).name("Table Grid"))
        .add_paragraph(text_paragraph(&letterhead).align(AlignmentType::Center))
        .add_paragraph(text_paragraph(&settings.title).style("Title"))
        .add_table(report_table(info))
        .add_paragraph(text_paragraph(&generated_on))
        .add_paragraph(text_paragraph(RULE))
        .add_paragraph(text_paragraph(&settings.contact).align(AlignmentType::Center));

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| ReportError::Package(e.to_string()))?;

    let bytes = buffer.into_inner();
    debug!("报告大小: {} 字节", bytes.len());
    Ok(bytes)
}

fn report_table(info: &ReportInfo) -> Table {
    let rows = report_rows(info)
        .iter()
        .map(|(label, value)| {
            TableRow::new(vec![
                TableCell::new()
                    .width(LABEL_WIDTH, WidthType::Dxa)
                    .add_paragraph(text_paragraph(label)),
                TableCell::new()
                    .width(VALUE_WIDTH, WidthType::Dxa)
                    .add_paragraph(text_paragraph(value)),
            ])
        })
        .collect();

    Table::new(rows)
        .style("TableGrid")
        .set_grid(vec![LABEL_WIDTH, VALUE_WIDTH])
}

/// 单个 run 的段落；换行写成 `w:br`
fn text_paragraph(text: &str) -> Paragraph {
    let text = xml_safe(text);
    let mut run = Run::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        if !line.is_empty() {
            run = run.add_text(line);
        }
    }
    Paragraph::new().add_run(run)
}

/// 去掉 XML 1.0 不允许的字符
///
/// 换页符和垂直制表符（OCR 输出里常见）换成换行，其余控制字符直接丢弃
fn xml_safe(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\t' | '\n' => Some(c),
            '\u{b}' | '\u{c}' => Some('\n'),
            '\r' | '\u{fffe}' | '\u{ffff}' => None,
            c if c < ' ' => None,
            c => Some(c),
        })
        .collect()
}
