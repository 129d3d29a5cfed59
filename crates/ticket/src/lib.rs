//! Print-preview ticket storage: current values of the print settings,
//! validation against printer capabilities and document properties, and
//! change notification for the preview UI.

pub mod app_state;
pub mod capabilities;
pub mod document;
pub mod events;
pub mod geometry;
pub mod items;
pub mod measurement;
pub mod page_range;
pub mod store;

pub use app_state::AppState;
pub use capabilities::Capabilities;
pub use document::{DocumentInfo, DEFAULT_PAGE_SIZE};
pub use events::TicketEvent;
pub use geometry::{Coordinate2d, MarginSide, Margins, PrintableArea, Size};
pub use items::{CopiesItem, CustomMarginsItem, MarginsType, MarginsTypeItem, ToggleItem};
pub use measurement::{MeasurementSystem, UnitType};
pub use page_range::{PageRangeError, PageRangeItem, PageSpan};
pub use store::PrintTicketStore;
