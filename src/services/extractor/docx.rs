//! DOCX 读取
//!
//! 只解析 `word/document.xml`：正文段落按顺序输出，表格单独收集（单元格内多段用换行拼接）。
//! 文本框等嵌套段落不计入。

use std::io::{Cursor, Read};

use quick_xml::{events::Event, Reader as XmlReader};
use zip::ZipArchive;

use crate::error::ExtractError;

/// 文档正文
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocxBody {
    /// 正文段落（不含表格内的段落），保留空段落
    pub paragraphs: Vec<String>,
    /// 顶层表格：表格 → 行 → 单元格文本
    ///
    /// 文本提取不使用表格内容；这里收集出来供检查生成的报告
    pub tables: Vec<Vec<Vec<String>>>,
}

/// 提取 DOCX 的纯文本：非空正文段落，按换行拼接
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let body = read_docx(bytes)?;
    Ok(body
        .paragraphs
        .iter()
        .filter(|p| !p.trim().is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// 解析 DOCX 包
pub fn read_docx(bytes: &[u8]) -> Result<DocxBody, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut document = archive.by_name("word/document.xml")?;

    let mut xml = String::new();
    document
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Archive(e.into()))?;

    parse_document_xml(&xml)
}

fn parse_document_xml(xml: &str) -> Result<DocxBody, ExtractError> {
    let mut reader = XmlReader::from_str(xml);
    let mut buf = Vec::new();
    let mut state = BodyState::default();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => state.open(e.name().as_ref()),
            Ok(Event::Empty(ref e)) => {
                let name = e.name();
                state.open(name.as_ref());
                state.close(name.as_ref());
            }
            Ok(Event::Text(e)) => {
                if state.in_text {
                    let value = e
                        .unescape()
                        .map_err(|err| ExtractError::Xml(err.to_string()))?;
                    state.push_text(&value);
                }
            }
            Ok(Event::End(ref e)) => state.close(e.name().as_ref()),
            Ok(Event::Eof) => break,
            Err(err) => return Err(ExtractError::Xml(err.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(state.body)
}

#[derive(Default)]
struct BodyState {
    body: DocxBody,
    table_depth: usize,
    paragraph_depth: usize,
    paragraph: String,
    in_run: bool,
    in_text: bool,
    /// 当前单元格是否已经写入过段落
    cell_has_paragraph: bool,
}

impl BodyState {
    fn open(&mut self, name: &[u8]) {
        match name {
            b"w:tbl" => {
                self.table_depth += 1;
                if self.table_depth == 1 {
                    self.body.tables.push(Vec::new());
                }
            }
            b"w:tr" if self.table_depth == 1 => {
                if let Some(table) = self.body.tables.last_mut() {
                    table.push(Vec::new());
                }
            }
            b"w:tc" if self.table_depth == 1 => {
                if let Some(row) = self.body.tables.last_mut().and_then(|t| t.last_mut()) {
                    row.push(String::new());
                }
                self.cell_has_paragraph = false;
            }
            b"w:p" => {
                self.paragraph_depth += 1;
                if self.paragraph_depth == 1 {
                    self.paragraph.clear();
                }
            }
            b"w:r" => self.in_run = true,
            b"w:t" => self.in_text = self.in_run,
            b"w:tab" if self.in_run => self.push_text("\t"),
            b"w:br" | b"w:cr" if self.in_run => self.push_text("\n"),
            _ => {}
        }
    }

    fn close(&mut self, name: &[u8]) {
        match name {
            b"w:tbl" => self.table_depth = self.table_depth.saturating_sub(1),
            b"w:p" => {
                if self.paragraph_depth == 1 {
                    self.finish_paragraph();
                }
                self.paragraph_depth = self.paragraph_depth.saturating_sub(1);
            }
            b"w:r" => self.in_run = false,
            b"w:t" => self.in_text = false,
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        // 文本框里的段落（嵌套在段落中）不计入
        if self.paragraph_depth == 1 {
            self.paragraph.push_str(text);
        }
    }

    fn finish_paragraph(&mut self) {
        let text = std::mem::take(&mut self.paragraph);
        if self.table_depth == 0 {
            self.body.paragraphs.push(text);
            return;
        }

        let cell = self
            .body
            .tables
            .last_mut()
            .and_then(|t| t.last_mut())
            .and_then(|r| r.last_mut());
        if let Some(cell) = cell {
            if self.cell_has_paragraph {
                cell.push('\n');
            }
            cell.push_str(&text);
            self.cell_has_paragraph = true;
        }
    }
}
