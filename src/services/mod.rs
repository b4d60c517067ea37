pub mod pdf_renderer;
pub mod report_document;
pub mod report_saver;
pub mod scorer;

pub use pdf_renderer::{PdfRenderer, PrintPdfRenderer};
pub use report_document::{ReportDocument, TextPlacement};
pub use report_saver::{DirectorySaver, ReportSaver};
pub use scorer::Scorer;
