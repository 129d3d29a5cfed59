use crate::app_state::AppState;
use crate::capabilities::Capabilities;
use crate::document::DocumentInfo;
use crate::events::{ListenerRegistry, TicketEvent};
use crate::geometry::{MarginSide, Margins, PrintableArea, Size};
use crate::items::{CopiesItem, CustomMarginsItem, MarginsType, MarginsTypeItem, ToggleItem};
use crate::measurement::{MeasurementSystem, UnitType};
use crate::page_range::{PageRangeItem, PageSpan};

/// Storage of the print ticket and document statistics. Holds one value
/// holder per setting, validates them against the destination's capabilities
/// and the document, and notifies subscribers when the ticket, the document,
/// or the capability snapshot changes.
///
/// Every `update_*` method follows the same pattern: an unchanged value is a
/// no-op (no notification, no persistence call); a changed value is stored,
/// persisted when the setting is persisted at all, and announced with a
/// single [`TicketEvent::TicketChange`] after all mutation is done.
pub struct PrintTicketStore<S: AppState> {
    app_state: S,
    document: DocumentInfo,
    capabilities: Option<Capabilities>,
    measurement: MeasurementSystem,
    collate: ToggleItem,
    color: ToggleItem,
    copies: CopiesItem,
    duplex: ToggleItem,
    landscape: ToggleItem,
    page_range: PageRangeItem,
    margins_type: MarginsTypeItem,
    custom_margins: CustomMarginsItem,
    header_footer: ToggleItem,
    fit_to_page: ToggleItem,
    css_background: ToggleItem,
    selection_only: ToggleItem,
    listeners: ListenerRegistry,
}

impl<S: AppState> PrintTicketStore<S> {
    pub fn new(app_state: S) -> Self {
        Self {
            app_state,
            document: DocumentInfo::default(),
            capabilities: None,
            measurement: MeasurementSystem::default(),
            collate: ToggleItem::default(),
            color: ToggleItem::default(),
            copies: CopiesItem::default(),
            duplex: ToggleItem::default(),
            landscape: ToggleItem::default(),
            page_range: PageRangeItem::default(),
            margins_type: MarginsTypeItem::default(),
            custom_margins: CustomMarginsItem::default(),
            header_footer: ToggleItem::default(),
            fit_to_page: ToggleItem::default(),
            css_background: ToggleItem::default(),
            selection_only: ToggleItem::default(),
            listeners: ListenerRegistry::default(),
        }
    }

    /// Subscribes a callback to one event kind. Callbacks run synchronously
    /// and in subscription order.
    pub fn add_listener(&mut self, event: TicketEvent, listener: impl FnMut() + 'static) {
        self.listeners.add(event, listener);
    }

    /// Seeds the ticket with document facts, the local measurement system and
    /// the user's previously persisted values. Emits nothing.
    #[allow(clippy::too_many_arguments)]
    pub fn init(
        &mut self,
        is_document_modifiable: bool,
        document_title: impl Into<String>,
        thousands_delimiter: &str,
        decimal_delimiter: &str,
        unit_type: UnitType,
        document_has_selection: bool,
        selection_only: bool,
    ) {
        self.document.is_modifiable = is_document_modifiable;
        self.document.title = document_title.into();
        self.measurement
            .set_system(thousands_delimiter, decimal_delimiter, unit_type);
        self.document.has_selection = document_has_selection;
        self.selection_only.update_value(selection_only);

        // Restore the user's previous session. Color, duplex and collate are
        // restored only when the host actually stored them.
        self.margins_type.update_value(self.app_state.margins_type());
        self.custom_margins
            .update_value(self.app_state.custom_margins());
        if let Some(enabled) = self.app_state.is_color_enabled() {
            self.color.update_value(enabled);
        }
        if let Some(enabled) = self.app_state.is_duplex_enabled() {
            self.duplex.update_value(enabled);
        }
        self.header_footer
            .update_value(self.app_state.is_header_footer_enabled());
        self.landscape
            .update_value(self.app_state.is_landscape_enabled());
        if let Some(enabled) = self.app_state.is_collate_enabled() {
            self.collate.update_value(enabled);
        }
        self.css_background
            .update_value(self.app_state.is_css_background_enabled());
    }

    // ---- Document ----------------------------------------------------------

    pub fn is_document_modifiable(&self) -> bool {
        self.document.is_modifiable
    }

    pub fn document_title(&self) -> &str {
        &self.document.title
    }

    pub fn page_count(&self) -> u32 {
        self.document.page_count
    }

    pub fn page_size(&self) -> Size {
        self.document.page_size
    }

    pub fn printable_area(&self) -> PrintableArea {
        self.document.printable_area
    }

    /// Margins of the currently generated preview, once known.
    pub fn document_margins(&self) -> Option<Margins> {
        self.document.margins
    }

    pub fn measurement_system(&self) -> &MeasurementSystem {
        &self.measurement
    }

    /// Records a new page count, announcing a `DocumentChange` when it
    /// differs from the stored one.
    pub fn update_page_count(&mut self, page_count: u32) {
        if self.document.page_count != page_count {
            self.document.page_count = page_count;
            self.listeners.notify(TicketEvent::DocumentChange);
        }
    }

    /// Replaces the page-format fields of the document. All four are written
    /// together; a single `DocumentChange` fires when any of them differs.
    /// Margins never recorded before always count as a difference.
    pub fn update_document_page_info(
        &mut self,
        printable_area: PrintableArea,
        page_size: Size,
        has_css_media_styles: bool,
        margins: Margins,
    ) {
        let printable_area = printable_area.clamped_to(page_size);
        if self.document.printable_area != printable_area
            || self.document.page_size != page_size
            || self.document.has_css_media_styles != has_css_media_styles
            || self.document.margins != Some(margins)
        {
            self.document.set_page_metrics(printable_area, page_size);
            self.document.has_css_media_styles = has_css_media_styles;
            self.document.margins = Some(margins);
            self.listeners.notify(TicketEvent::DocumentChange);
        }
    }

    // ---- Capabilities ------------------------------------------------------

    pub fn capabilities(&self) -> Option<Capabilities> {
        self.capabilities
    }

    /// Installs the selected destination's capability snapshot. The first
    /// snapshot emits `Initialize`; later ones reset any custom margins (a
    /// different printer's constraints invalidate them) and emit
    /// `CapabilitiesChange`.
    pub fn capabilities_ready(&mut self, capabilities: Capabilities) {
        let first_update = self.capabilities.is_none();
        self.capabilities = Some(capabilities);
        if first_update {
            self.listeners.notify(TicketEvent::Initialize);
        } else {
            self.custom_margins.update_value(None);
            self.app_state.persist_custom_margins(None);
            if self.margins_type.value() == MarginsType::Custom {
                self.margins_type.update_value(MarginsType::Default);
                self.app_state.persist_margins_type(MarginsType::Default);
            }
            self.listeners.notify(TicketEvent::CapabilitiesChange);
        }
    }

    // ---- Collate / color / copies / duplex ---------------------------------

    pub fn has_collate_capability(&self) -> bool {
        self.capabilities.is_some_and(|c| c.supports_collate)
    }

    pub fn is_collate_enabled(&self) -> bool {
        self.collate.value()
    }

    pub fn update_collate(&mut self, is_collate_enabled: bool) {
        if self.collate.value() != is_collate_enabled {
            self.collate.update_value(is_collate_enabled);
            self.app_state.persist_is_collate_enabled(is_collate_enabled);
            self.listeners.notify(TicketEvent::TicketChange);
        }
    }

    pub fn has_color_capability(&self) -> bool {
        self.capabilities.is_some_and(|c| c.supports_color)
    }

    pub fn is_color_enabled(&self) -> bool {
        self.color.value()
    }

    pub fn update_color(&mut self, is_color_enabled: bool) {
        if self.color.value() != is_color_enabled {
            self.color.update_value(is_color_enabled);
            self.app_state.persist_is_color_enabled(is_color_enabled);
            self.listeners.notify(TicketEvent::TicketChange);
        }
    }

    pub fn has_copies_capability(&self) -> bool {
        self.capabilities.is_some_and(|c| c.supports_copies)
    }

    /// Raw copies text as the user typed it.
    pub fn copies_str(&self) -> &str {
        self.copies.value()
    }

    /// Parsed copy count, when the text is valid.
    pub fn copies(&self) -> Option<u32> {
        self.copies.count()
    }

    pub fn is_copies_valid(&self) -> bool {
        self.copies.is_valid()
    }

    pub fn update_copies(&mut self, copies: impl Into<String>) {
        let copies = copies.into();
        if self.copies.value() != copies {
            self.copies.update_value(copies);
            self.listeners.notify(TicketEvent::TicketChange);
        }
    }

    pub fn has_duplex_capability(&self) -> bool {
        self.capabilities.is_some_and(|c| c.supports_duplex)
    }

    pub fn is_duplex_enabled(&self) -> bool {
        self.duplex.value()
    }

    pub fn update_duplex(&mut self, is_duplex_enabled: bool) {
        if self.duplex.value() != is_duplex_enabled {
            self.duplex.update_value(is_duplex_enabled);
            self.app_state.persist_is_duplex_enabled(is_duplex_enabled);
            self.listeners.notify(TicketEvent::TicketChange);
        }
    }

    // ---- Orientation -------------------------------------------------------

    pub fn has_orientation_capability(&self) -> bool {
        self.capabilities.is_some_and(|c| c.supports_orientation)
            && self.document.is_modifiable
            && !self.document.has_css_media_styles
    }

    pub fn is_landscape_enabled(&self) -> bool {
        self.landscape.value()
    }

    /// Flips the page orientation. A rotation makes any user-chosen margins
    /// meaningless, so the margins type falls back to `Default` and the
    /// custom margins holder is cleared before the single `TicketChange`.
    pub fn update_orientation(&mut self, is_landscape_enabled: bool) {
        if self.landscape.value() != is_landscape_enabled {
            self.landscape.update_value(is_landscape_enabled);
            self.margins_type.update_value(MarginsType::Default);
            self.custom_margins.update_value(None);
            self.app_state.persist_margins_type(MarginsType::Default);
            self.app_state.persist_custom_margins(None);
            self.app_state
                .persist_is_landscape_enabled(is_landscape_enabled);
            self.listeners.notify(TicketEvent::TicketChange);
        }
    }

    // ---- Margins -----------------------------------------------------------

    pub fn has_margins_capability(&self) -> bool {
        self.document.is_modifiable
    }

    pub fn margins_type(&self) -> MarginsType {
        self.margins_type.value()
    }

    /// Selects a predefined margins type. Switching to `Custom` pins the
    /// current effective custom margins so a previously cleared holder does
    /// not drift back to the default underneath the user.
    pub fn update_margins_type(&mut self, margins_type: MarginsType) {
        if self.margins_type.value() != margins_type {
            self.margins_type.update_value(margins_type);
            self.app_state.persist_margins_type(margins_type);
            if margins_type == MarginsType::Custom {
                let margins = self.custom_margins.effective(&self.document);
                self.custom_margins.update_value(Some(margins));
                self.app_state.persist_custom_margins(Some(margins));
            }
            self.listeners.notify(TicketEvent::TicketChange);
        }
    }

    /// Effective custom margins: the stored value, else a document-derived
    /// default.
    pub fn custom_margins(&self) -> Margins {
        self.custom_margins.effective(&self.document)
    }

    pub fn is_custom_margins_valid(&self) -> bool {
        self.custom_margins.is_valid(&self.document)
    }

    /// Maximum value, in points, the given margin may take.
    pub fn custom_margin_max(&self, side: MarginSide) -> f32 {
        self.custom_margins.margin_max(side, &self.document)
    }

    /// Replaces all four custom margins. An invalid current state always
    /// re-triggers the update, even when the incoming value is unchanged.
    pub fn update_custom_margins(&mut self, margins: Margins) {
        if !self.is_custom_margins_valid() || margins != self.custom_margins() {
            self.custom_margins.update_value(Some(margins));
            self.app_state.persist_custom_margins(Some(margins));
            self.listeners.notify(TicketEvent::TicketChange);
        }
    }

    /// Updates a single margin side, comparing only that side's prior value.
    pub fn update_custom_margin(&mut self, side: MarginSide, value: f32) {
        let mut margins = self.custom_margins.effective(&self.document);
        if margins.get(side) != value {
            margins.set(side, value);
            self.custom_margins.update_value(Some(margins));
            self.app_state.persist_custom_margins(Some(margins));
            self.listeners.notify(TicketEvent::TicketChange);
        }
    }

    // ---- Page range --------------------------------------------------------

    pub fn has_page_range_capability(&self) -> bool {
        true
    }

    pub fn is_page_range_valid(&self) -> bool {
        self.page_range.is_valid(self.document.page_count)
    }

    /// Raw page-range text as the user typed it.
    pub fn page_range_str(&self) -> &str {
        self.page_range.value()
    }

    /// Parsed spans, or `None` when the text is malformed.
    pub fn page_ranges(&self) -> Option<Vec<PageSpan>> {
        self.page_range.spans()
    }

    /// Parsed spans clamped to the document's page count.
    pub fn document_page_ranges(&self) -> Vec<PageSpan> {
        self.page_range.document_spans(self.document.page_count)
    }

    /// Ascending page numbers selected within the document.
    pub fn page_number_set(&self) -> Vec<u32> {
        self.page_range.page_number_set(self.document.page_count)
    }

    pub fn update_page_range(&mut self, page_range_str: impl Into<String>) {
        let page_range_str = page_range_str.into();
        if self.page_range.value() != page_range_str {
            self.page_range.update_value(page_range_str);
            self.listeners.notify(TicketEvent::TicketChange);
        }
    }

    // ---- Header/footer, fit-to-page, backgrounds, selection ----------------

    pub fn has_header_footer_capability(&self) -> bool {
        if !self.document.is_modifiable {
            return false;
        }
        match self.margins_type.value() {
            MarginsType::NoMargins => false,
            MarginsType::Custom => {
                let margins = self.custom_margins.effective(&self.document);
                margins.top > 0.0 || margins.bottom > 0.0
            }
            MarginsType::Default | MarginsType::Minimum => true,
        }
    }

    pub fn is_header_footer_enabled(&self) -> bool {
        self.header_footer.value()
    }

    pub fn update_header_footer(&mut self, is_header_footer_enabled: bool) {
        if self.header_footer.value() != is_header_footer_enabled {
            self.header_footer.update_value(is_header_footer_enabled);
            self.app_state
                .persist_is_header_footer_enabled(is_header_footer_enabled);
            self.listeners.notify(TicketEvent::TicketChange);
        }
    }

    pub fn has_fit_to_page_capability(&self) -> bool {
        !self.document.is_modifiable
    }

    pub fn is_fit_to_page_enabled(&self) -> bool {
        self.fit_to_page.value()
    }

    pub fn update_fit_to_page(&mut self, is_fit_to_page_enabled: bool) {
        if self.fit_to_page.value() != is_fit_to_page_enabled {
            self.fit_to_page.update_value(is_fit_to_page_enabled);
            self.listeners.notify(TicketEvent::TicketChange);
        }
    }

    pub fn has_css_background_capability(&self) -> bool {
        self.document.is_modifiable
    }

    pub fn is_css_background_enabled(&self) -> bool {
        self.css_background.value()
    }

    pub fn update_css_background(&mut self, is_css_background_enabled: bool) {
        if self.css_background.value() != is_css_background_enabled {
            self.css_background
                .update_value(is_css_background_enabled);
            self.app_state
                .persist_is_css_background_enabled(is_css_background_enabled);
            self.listeners.notify(TicketEvent::TicketChange);
        }
    }

    pub fn has_selection_only_capability(&self) -> bool {
        self.document.is_modifiable && self.document.has_selection
    }

    pub fn is_selection_only_enabled(&self) -> bool {
        self.selection_only.value()
    }

    pub fn update_selection_only(&mut self, is_selection_only_enabled: bool) {
        if self.selection_only.value() != is_selection_only_enabled {
            self.selection_only
                .update_value(is_selection_only_enabled);
            self.listeners.notify(TicketEvent::TicketChange);
        }
    }

    // ---- Ticket-wide validity ----------------------------------------------

    /// Whether the ticket can drive preview generation: copies must be valid
    /// when adjustable, and custom margins must be valid whenever the margins
    /// control is available and set to `Custom`.
    pub fn is_ticket_valid_for_preview(&self) -> bool {
        (!self.has_copies_capability() || self.copies.is_valid())
            && (!self.has_margins_capability()
                || self.margins_type.value() != MarginsType::Custom
                || self.is_custom_margins_valid())
    }

    /// Preview validity plus a well-formed page range.
    pub fn is_ticket_valid(&self) -> bool {
        self.is_ticket_valid_for_preview()
            && (!self.has_page_range_capability() || self.is_page_range_valid())
    }
}
