use printpanel_ticket::{MarginSide, Margins, MarginsType};
use serde::{Deserialize, Serialize};

const SAVED_TICKET_VERSION: u32 = 1;

/// Persisted subset of the print ticket. Every setting is optional so files
/// written by older builds, or before a setting was ever touched, restore
/// cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTicket {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub margins_type: Option<MarginsType>,
    #[serde(default)]
    pub custom_margins: Option<Margins>,
    #[serde(default)]
    pub is_color_enabled: Option<bool>,
    #[serde(default)]
    pub is_duplex_enabled: Option<bool>,
    #[serde(default)]
    pub is_collate_enabled: Option<bool>,
    #[serde(default)]
    pub is_header_footer_enabled: Option<bool>,
    #[serde(default)]
    pub is_landscape_enabled: Option<bool>,
    #[serde(default)]
    pub is_css_background_enabled: Option<bool>,
}

fn default_version() -> u32 {
    SAVED_TICKET_VERSION
}

impl Default for SavedTicket {
    fn default() -> Self {
        Self {
            version: SAVED_TICKET_VERSION,
            margins_type: None,
            custom_margins: None,
            is_color_enabled: None,
            is_duplex_enabled: None,
            is_collate_enabled: None,
            is_header_footer_enabled: None,
            is_landscape_enabled: None,
            is_css_background_enabled: None,
        }
    }
}

impl SavedTicket {
    /// Drops values a hand-edited or corrupted file cannot be trusted with.
    pub fn sanitize(&mut self) {
        if self.version == 0 {
            self.version = SAVED_TICKET_VERSION;
        }
        if let Some(margins) = self.custom_margins {
            let negative = MarginSide::ALL
                .iter()
                .any(|&side| margins.get(side) < 0.0 || !margins.get(side).is_finite());
            if negative {
                self.custom_margins = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_negative_custom_margins() {
        let mut saved = SavedTicket {
            custom_margins: Some(Margins::new(36.0, -1.0, 36.0, 36.0)),
            ..SavedTicket::default()
        };
        saved.sanitize();
        assert_eq!(saved.custom_margins, None);

        let mut saved = SavedTicket {
            custom_margins: Some(Margins::uniform(36.0)),
            ..SavedTicket::default()
        };
        saved.sanitize();
        assert_eq!(saved.custom_margins, Some(Margins::uniform(36.0)));
    }

    #[test]
    fn missing_fields_deserialize_as_unset() {
        let saved: SavedTicket = serde_json::from_str("{}").expect("parse empty object");
        assert_eq!(saved, SavedTicket::default());
        assert_eq!(saved.version, 1);
    }
}
