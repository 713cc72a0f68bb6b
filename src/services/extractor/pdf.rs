//! PDF 文本提取

use lopdf::Document;
use tracing::debug;

use crate::error::ExtractError;

/// 按页序提取所有页面的文本并直接拼接（不加分页符）
///
/// 没有页面的 PDF 返回空串
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let document = Document::load_mem(bytes)?;
    let pages = document.get_pages();
    debug!("PDF 共 {} 页", pages.len());

    let mut text = String::new();
    for page_number in pages.keys() {
        text.push_str(&document.extract_text(&[*page_number])?);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{dictionary, Object, Stream};

    /// 生成 N 页的 PDF，每页一行可识别文字
    fn create_test_pdf(num_pages: u32) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for page_num in 0..num_pages {
            let content = format!("BT /F1 12 Tf 50 700 Td (Copie-Page-{}) Tj ET", page_num + 1);
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(Object::Reference(page_id));
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => num_pages as i64,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_zero_page_pdf_is_empty_text() {
        let text = extract_pdf_text(&create_test_pdf(0)).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_pages_are_concatenated_in_order() {
        let text = extract_pdf_text(&create_test_pdf(2)).unwrap();
        let first = text.find("Copie-Page-1").expect("page 1 text");
        let second = text.find("Copie-Page-2").expect("page 2 text");
        assert!(first < second);
    }

    #[test]
    fn test_corrupt_pdf_is_an_error() {
        let err = extract_pdf_text(b"%PDF-1.5 garbage").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
