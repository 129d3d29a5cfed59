use crate::geometry::{Margins, PrintableArea, Size};

/// Letter page size assumed until real document metrics arrive.
pub const DEFAULT_PAGE_SIZE: Size = Size::new(612.0, 792.0);

/// Mutable record of the document being printed.
///
/// Page metrics are unknown until the first preview is generated, so the
/// defaults describe a full-page-printable letter document. Margins stay
/// unset until reported alongside the metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    pub is_modifiable: bool,
    pub title: String,
    pub page_count: u32,
    pub page_size: Size,
    pub printable_area: PrintableArea,
    pub margins: Option<Margins>,
    pub has_css_media_styles: bool,
    pub has_selection: bool,
}

impl DocumentInfo {
    /// Replaces the page metrics, keeping the printable area within the page.
    pub fn set_page_metrics(&mut self, printable_area: PrintableArea, page_size: Size) {
        self.page_size = page_size;
        self.printable_area = printable_area.clamped_to(page_size);
    }
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            is_modifiable: true,
            title: String::new(),
            page_count: 0,
            page_size: DEFAULT_PAGE_SIZE,
            printable_area: PrintableArea::full_page(DEFAULT_PAGE_SIZE),
            margins: None,
            has_css_media_styles: false,
            has_selection: false,
        }
    }
}
