mod common;

use common::make_store;
use printpanel_ticket::{MarginSide, Margins, MarginsType, TicketEvent};

#[test]
fn init_emits_no_events_and_persists_nothing() {
    let (_store, app_state, events) = make_store();
    assert!(events.lock().unwrap().is_empty());
    assert!(app_state.log().is_empty());
}

#[test]
fn unchanged_updates_are_no_ops() {
    let (mut store, app_state, events) = make_store();

    // Every current value, re-applied.
    store.update_header_footer(store.is_header_footer_enabled());
    store.update_css_background(store.is_css_background_enabled());
    store.update_selection_only(store.is_selection_only_enabled());
    store.update_color(store.is_color_enabled());
    store.update_duplex(store.is_duplex_enabled());
    store.update_collate(store.is_collate_enabled());
    store.update_fit_to_page(store.is_fit_to_page_enabled());
    store.update_orientation(store.is_landscape_enabled());
    store.update_margins_type(store.margins_type());
    store.update_copies("1");
    store.update_page_range("");

    assert!(events.lock().unwrap().is_empty());
    assert!(app_state.log().is_empty());
}

#[test]
fn changed_toggle_persists_and_notifies_once() {
    let (mut store, app_state, events) = make_store();

    store.update_header_footer(false);

    assert_eq!(*events.lock().unwrap(), vec![TicketEvent::TicketChange]);
    assert_eq!(app_state.log(), vec!["header_footer=false"]);
    assert!(!store.is_header_footer_enabled());
}

#[test]
fn copies_changes_notify_without_persisting() {
    let (mut store, app_state, events) = make_store();

    store.update_copies("3");

    assert_eq!(*events.lock().unwrap(), vec![TicketEvent::TicketChange]);
    assert!(app_state.log().is_empty());
    assert_eq!(store.copies(), Some(3));
}

#[test]
fn selection_only_changes_notify_without_persisting() {
    let (mut store, app_state, events) = make_store();

    store.update_selection_only(true);

    assert_eq!(*events.lock().unwrap(), vec![TicketEvent::TicketChange]);
    assert!(app_state.log().is_empty());
    assert!(store.is_selection_only_enabled());
}

#[test]
fn repeated_page_range_text_notifies_once() {
    let (mut store, _app_state, events) = make_store();

    store.update_page_range("1-3");
    store.update_page_range("1-3");

    assert_eq!(*events.lock().unwrap(), vec![TicketEvent::TicketChange]);
    assert_eq!(store.page_range_str(), "1-3");
}

#[test]
fn orientation_change_resets_margins() {
    let (mut store, app_state, events) = make_store();
    store.update_margins_type(MarginsType::Custom);
    store.update_custom_margin(MarginSide::Top, 100.0);
    events.lock().unwrap().clear();

    store.update_orientation(true);

    assert!(store.is_landscape_enabled());
    assert_eq!(store.margins_type(), MarginsType::Default);
    assert_eq!(app_state.persisted_custom_margins(), None);
    assert_eq!(*events.lock().unwrap(), vec![TicketEvent::TicketChange]);

    let log = app_state.log();
    assert!(log.contains(&"margins_type=Default".to_string()));
    assert!(log.contains(&"custom_margins=false".to_string()));
    assert!(log.contains(&"landscape=true".to_string()));
}

#[test]
fn switching_to_custom_margins_pins_a_concrete_value() {
    let (mut store, app_state, events) = make_store();
    assert_eq!(app_state.persisted_custom_margins(), None);

    store.update_margins_type(MarginsType::Custom);

    // The holder was unset; CUSTOM must still carry the one-inch default.
    assert_eq!(store.custom_margins(), Margins::uniform(72.0));
    assert_eq!(
        app_state.persisted_custom_margins(),
        Some(Margins::uniform(72.0))
    );
    assert_eq!(*events.lock().unwrap(), vec![TicketEvent::TicketChange]);
}

#[test]
fn single_margin_update_compares_only_that_side() {
    let (mut store, app_state, events) = make_store();

    store.update_custom_margin(MarginSide::Top, 90.0);
    assert_eq!(store.custom_margins().top, 90.0);
    assert_eq!(store.custom_margins().left, 72.0);
    assert_eq!(events.lock().unwrap().len(), 1);

    store.update_custom_margin(MarginSide::Top, 90.0);
    assert_eq!(events.lock().unwrap().len(), 1);
    assert_eq!(
        app_state.persisted_custom_margins(),
        Some(Margins::new(90.0, 72.0, 72.0, 72.0))
    );
}

#[test]
fn invalid_custom_margins_always_retrigger_updates() {
    let (mut store, _app_state, events) = make_store();
    let oversized = Margins::new(500.0, 36.0, 500.0, 36.0);

    store.update_custom_margins(oversized);
    assert!(!store.is_custom_margins_valid());
    assert_eq!(events.lock().unwrap().len(), 1);

    // Unchanged value, but the invalid state re-triggers the update.
    store.update_custom_margins(oversized);
    assert_eq!(events.lock().unwrap().len(), 2);

    store.update_custom_margins(Margins::uniform(36.0));
    assert!(store.is_custom_margins_valid());
    assert_eq!(events.lock().unwrap().len(), 3);

    store.update_custom_margins(Margins::uniform(36.0));
    assert_eq!(events.lock().unwrap().len(), 3);
}
