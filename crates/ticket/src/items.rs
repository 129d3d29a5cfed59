use serde::{Deserialize, Serialize};

use crate::document::DocumentInfo;
use crate::geometry::{MarginSide, Margins};

/// Body extent, in points, that custom margins must leave free on each axis.
const MIN_BODY_EXTENT_PT: f32 = 72.0;

/// Value holder shared by the boolean on/off settings (collate, color,
/// duplex, landscape, header-footer, fit-to-page, CSS backgrounds,
/// selection-only).
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleItem {
    value: bool,
}

impl ToggleItem {
    pub fn value(&self) -> bool {
        self.value
    }

    pub fn update_value(&mut self, value: bool) {
        self.value = value;
    }
}

/// Number-of-copies setting, kept as the raw text the user typed.
#[derive(Debug, Clone)]
pub struct CopiesItem {
    value: String,
}

impl CopiesItem {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn update_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Whether the text parses as a whole number of copies between 1 and 999.
    pub fn is_valid(&self) -> bool {
        self.count().is_some()
    }

    /// Parsed copy count, when the text is valid.
    pub fn count(&self) -> Option<u32> {
        match self.value.trim().parse::<u32>() {
            Ok(count) if (1..=999).contains(&count) => Some(count),
            _ => None,
        }
    }
}

impl Default for CopiesItem {
    fn default() -> Self {
        Self {
            value: "1".to_string(),
        }
    }
}

/// Predefined margins selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarginsType {
    #[default]
    Default,
    NoMargins,
    Minimum,
    Custom,
}

/// Value holder for the margins-type setting.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarginsTypeItem {
    value: MarginsType,
}

impl MarginsTypeItem {
    pub fn value(&self) -> MarginsType {
        self.value
    }

    pub fn update_value(&mut self, value: MarginsType) {
        self.value = value;
    }
}

/// Custom margins holder. Unset until the user, restored state, or the
/// margins-type transition to `Custom` pins a concrete value.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomMarginsItem {
    value: Option<Margins>,
}

impl CustomMarginsItem {
    pub fn value(&self) -> Option<Margins> {
        self.value
    }

    pub fn update_value(&mut self, value: Option<Margins>) {
        self.value = value;
    }

    /// Concrete margins to edit from: the stored value, else the document's
    /// own margins, else one inch on every side.
    pub fn effective(&self, document: &DocumentInfo) -> Margins {
        self.value
            .or(document.margins)
            .unwrap_or(Margins::uniform(72.0))
    }

    /// Largest value the given margin may take while the page keeps a
    /// one-inch body and the opposite margin keeps its current value.
    pub fn margin_max(&self, side: MarginSide, document: &DocumentInfo) -> f32 {
        let margins = self.effective(document);
        let page = document.page_size;
        let (extent, opposite) = match side {
            MarginSide::Top => (page.height, margins.bottom),
            MarginSide::Bottom => (page.height, margins.top),
            MarginSide::Left => (page.width, margins.right),
            MarginSide::Right => (page.width, margins.left),
        };
        (extent - opposite - MIN_BODY_EXTENT_PT).max(0.0)
    }

    /// Whether every side of the effective margins lies within its bounds.
    pub fn is_valid(&self, document: &DocumentInfo) -> bool {
        let margins = self.effective(document);
        MarginSide::ALL.iter().all(|&side| {
            let value = margins.get(side);
            value >= 0.0 && value <= self.margin_max(side, document)
        })
    }
}
