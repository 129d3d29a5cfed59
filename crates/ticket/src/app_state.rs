use crate::geometry::Margins;
use crate::items::MarginsType;

/// Persisted ticket values, restored at startup and written back as the user
/// edits settings.
///
/// Color, duplex and collate accessors return `None` when the host has never
/// stored the field; the store then leaves the setting at its built-in
/// default instead of overwriting it. The remaining accessors always produce
/// a value, with the implementation supplying its own default.
///
/// The `persist_*` methods are infallible: implementations buffer or swallow
/// I/O problems so an update call on the store never fails. See
/// `printpanel_state::TicketStateStore` for a file-backed implementation with
/// an explicit flush.
pub trait AppState {
    fn margins_type(&self) -> MarginsType;
    fn custom_margins(&self) -> Option<Margins>;
    fn is_color_enabled(&self) -> Option<bool>;
    fn is_duplex_enabled(&self) -> Option<bool>;
    fn is_collate_enabled(&self) -> Option<bool>;
    fn is_header_footer_enabled(&self) -> bool;
    fn is_landscape_enabled(&self) -> bool;
    fn is_css_background_enabled(&self) -> bool;

    fn persist_margins_type(&mut self, margins_type: MarginsType);
    fn persist_custom_margins(&mut self, margins: Option<Margins>);
    fn persist_is_color_enabled(&mut self, enabled: bool);
    fn persist_is_duplex_enabled(&mut self, enabled: bool);
    fn persist_is_collate_enabled(&mut self, enabled: bool);
    fn persist_is_header_footer_enabled(&mut self, enabled: bool);
    fn persist_is_landscape_enabled(&mut self, enabled: bool);
    fn persist_is_css_background_enabled(&mut self, enabled: bool);
}
