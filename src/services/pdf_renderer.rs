//! PDF 渲染能力
//!
//! 接收顺序的文字放置指令，输出 PDF 文件内容

use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::debug;

use crate::error::ExportError;
use crate::services::report_document::TextPlacement;

/// A4 纸尺寸（毫米）
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;

pub trait PdfRenderer: Send + Sync {
    fn render(&self, title: &str, placements: &[TextPlacement]) -> Result<Vec<u8>, ExportError>;
}

/// 基于 `printpdf` 的渲染器，使用内置 Helvetica 字体
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintPdfRenderer;

impl PrintPdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl PdfRenderer for PrintPdfRenderer {
    fn render(&self, title: &str, placements: &[TextPlacement]) -> Result<Vec<u8>, ExportError> {
        debug!("渲染 PDF: {} ({} 行文字)", title, placements.len());

        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Render(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);

        // printpdf 的 y 轴从页面底部向上
        for placement in placements {
            layer.use_text(
                placement.text.clone(),
                placement.font_size,
                Mm(placement.x),
                Mm(PAGE_HEIGHT_MM - placement.y),
                &font,
            );
        }

        doc.save_to_bytes()
            .map_err(|e| ExportError::Render(e.to_string()))
    }
}
