/// Feature support reported by the selected print destination.
///
/// The ticket store holds the latest snapshot as an `Option`: `None` until
/// the first destination's capabilities arrive, replaced wholesale whenever
/// the destination changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub supports_collate: bool,
    pub supports_color: bool,
    pub supports_copies: bool,
    pub supports_duplex: bool,
    pub supports_orientation: bool,
}

impl Capabilities {
    pub const fn new(
        supports_collate: bool,
        supports_color: bool,
        supports_copies: bool,
        supports_duplex: bool,
        supports_orientation: bool,
    ) -> Self {
        Self {
            supports_collate,
            supports_color,
            supports_copies,
            supports_duplex,
            supports_orientation,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::new(true, true, true, true, true)
    }
}
