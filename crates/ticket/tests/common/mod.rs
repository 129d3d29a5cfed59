#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use printpanel_ticket::{
    AppState, Margins, MarginsType, PrintTicketStore, TicketEvent, UnitType,
};

/// Values the ticket store has persisted, plus a call log for asserting that
/// unchanged updates never reach the persistence collaborator.
#[derive(Debug, Default)]
pub struct PersistedValues {
    pub margins_type: Option<MarginsType>,
    pub custom_margins: Option<Margins>,
    pub color: Option<bool>,
    pub duplex: Option<bool>,
    pub collate: Option<bool>,
    pub header_footer: Option<bool>,
    pub landscape: Option<bool>,
    pub css_background: Option<bool>,
    pub log: Vec<String>,
}

/// In-memory `AppState` that records every persist call.
#[derive(Clone, Default)]
pub struct RecordingAppState(Arc<Mutex<PersistedValues>>);

impl RecordingAppState {
    pub fn values(&self) -> MutexGuard<'_, PersistedValues> {
        self.0.lock().unwrap()
    }

    pub fn log(&self) -> Vec<String> {
        self.values().log.clone()
    }

    pub fn persisted_custom_margins(&self) -> Option<Margins> {
        self.values().custom_margins
    }
}

impl AppState for RecordingAppState {
    fn margins_type(&self) -> MarginsType {
        self.values().margins_type.unwrap_or_default()
    }

    fn custom_margins(&self) -> Option<Margins> {
        self.values().custom_margins
    }

    fn is_color_enabled(&self) -> Option<bool> {
        self.values().color
    }

    fn is_duplex_enabled(&self) -> Option<bool> {
        self.values().duplex
    }

    fn is_collate_enabled(&self) -> Option<bool> {
        self.values().collate
    }

    fn is_header_footer_enabled(&self) -> bool {
        self.values().header_footer.unwrap_or(true)
    }

    fn is_landscape_enabled(&self) -> bool {
        self.values().landscape.unwrap_or(false)
    }

    fn is_css_background_enabled(&self) -> bool {
        self.values().css_background.unwrap_or(false)
    }

    fn persist_margins_type(&mut self, margins_type: MarginsType) {
        let mut state = self.values();
        state.margins_type = Some(margins_type);
        state.log.push(format!("margins_type={margins_type:?}"));
    }

    fn persist_custom_margins(&mut self, margins: Option<Margins>) {
        let mut state = self.values();
        state.custom_margins = margins;
        state
            .log
            .push(format!("custom_margins={}", margins.is_some()));
    }

    fn persist_is_color_enabled(&mut self, enabled: bool) {
        let mut state = self.values();
        state.color = Some(enabled);
        state.log.push(format!("color={enabled}"));
    }

    fn persist_is_duplex_enabled(&mut self, enabled: bool) {
        let mut state = self.values();
        state.duplex = Some(enabled);
        state.log.push(format!("duplex={enabled}"));
    }

    fn persist_is_collate_enabled(&mut self, enabled: bool) {
        let mut state = self.values();
        state.collate = Some(enabled);
        state.log.push(format!("collate={enabled}"));
    }

    fn persist_is_header_footer_enabled(&mut self, enabled: bool) {
        let mut state = self.values();
        state.header_footer = Some(enabled);
        state.log.push(format!("header_footer={enabled}"));
    }

    fn persist_is_landscape_enabled(&mut self, enabled: bool) {
        let mut state = self.values();
        state.landscape = Some(enabled);
        state.log.push(format!("landscape={enabled}"));
    }

    fn persist_is_css_background_enabled(&mut self, enabled: bool) {
        let mut state = self.values();
        state.css_background = Some(enabled);
        state.log.push(format!("css_background={enabled}"));
    }
}

/// Subscribes a recorder to every event kind and returns the shared log.
pub fn record_events(
    store: &mut PrintTicketStore<RecordingAppState>,
) -> Arc<Mutex<Vec<TicketEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    for event in [
        TicketEvent::Initialize,
        TicketEvent::DocumentChange,
        TicketEvent::TicketChange,
        TicketEvent::CapabilitiesChange,
    ] {
        let events = Arc::clone(&events);
        store.add_listener(event, move || events.lock().unwrap().push(event));
    }
    events
}

/// A modifiable-document store, initialized and wired with recorders.
pub fn make_store() -> (
    PrintTicketStore<RecordingAppState>,
    RecordingAppState,
    Arc<Mutex<Vec<TicketEvent>>>,
) {
    let app_state = RecordingAppState::default();
    let mut store = PrintTicketStore::new(app_state.clone());
    let events = record_events(&mut store);
    store.init(true, "report.txt", ",", ".", UnitType::Imperial, true, false);
    (store, app_state, events)
}
