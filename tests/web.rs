//! Tests en navegador: `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use rust_decimal::Decimal;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlFormElement, HtmlInputElement};

use rental_client::app::{bind_form_validation, bind_loading_on_submit};
use rental_client::dom::{document, get_element_by_id, get_style, query_selector_all};
use rental_client::models::VehicleRecord;
use rental_client::state::AppState;
use rental_client::utils::Debouncer;
use rental_client::viewmodels::{AlertKind, AlertViewModel, AvailabilityViewModel, SelectionViewModel};
use rental_client::views::{alert, loading, vehicle_list};

wasm_bindgen_test_configure!(run_in_browser);

fn vehicle(id: i64, is_available: bool) -> VehicleRecord {
    VehicleRecord {
        id,
        name: format!("Vehicle {}", id),
        model: "Test Model".to_string(),
        mileage: 1500.0,
        vehicle_type: "car".to_string(),
        price_per_day: Decimal::from(45),
        image_url: "/static/img/test.jpg".to_string(),
        is_available,
    }
}

fn fresh_container(class: &str) -> Element {
    let doc = document().unwrap();
    let container = doc.create_element("div").unwrap();
    container.set_class_name(class);
    doc.body().unwrap().append_child(&container).unwrap();
    container
}

fn noop_toggle() -> Rc<dyn Fn(i64, bool)> {
    Rc::new(|_, _| {})
}

/// `#loadingIndicator` compartido por todos los tests, oculto al empezar
fn loading_indicator() -> Element {
    let indicator = get_element_by_id("loadingIndicator").unwrap_or_else(|| {
        let doc = document().unwrap();
        let el = doc.create_element("div").unwrap();
        el.set_id("loadingIndicator");
        doc.body().unwrap().append_child(&el).unwrap();
        el
    });
    loading::hide_loading();
    indicator
}

/// Formulario `.needs-validation` con un input obligatorio
fn required_form(value: &str) -> HtmlFormElement {
    let doc = document().unwrap();
    let form: HtmlFormElement = doc.create_element("form").unwrap().dyn_into().unwrap();
    form.set_class_name("needs-validation");
    let input: HtmlInputElement = doc.create_element("input").unwrap().dyn_into().unwrap();
    input.set_name("customer_name");
    input.set_required(true);
    input.set_value(value);
    form.append_child(&input).unwrap();
    doc.body().unwrap().append_child(&form).unwrap();

    bind_form_validation(&form).unwrap();
    bind_loading_on_submit(&form).unwrap();
    form
}

fn submit_event() -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict("submit", &init).unwrap()
}

fn find_alert(message: &str) -> Option<Element> {
    query_selector_all(".alert")
        .into_iter()
        .find(|el| el.text_content().unwrap_or_default().contains(message))
}

#[wasm_bindgen_test]
fn empty_list_renders_placeholder_only() {
    let container = fresh_container("row");
    let cards = vehicle_list::render_into(&container, &[], noop_toggle()).unwrap();

    assert!(cards.is_empty());
    assert_eq!(container.child_element_count(), 1);
    assert_eq!(container.text_content().unwrap().trim(), "No vehicles found");
    assert!(container.query_selector(".vehicle-card").unwrap().is_none());
}

#[wasm_bindgen_test]
fn rerender_replaces_previous_cards() {
    let container = fresh_container("row");
    vehicle_list::render_into(&container, &[vehicle(1, true), vehicle(2, true)], noop_toggle()).unwrap();
    let cards = vehicle_list::render_into(&container, &[vehicle(3, true)], noop_toggle()).unwrap();

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].vehicle_id, 3);
    assert_eq!(container.query_selector_all(".vehicle-card").unwrap().length(), 1);
    assert_eq!(cards[0].checkbox.value(), "3");
}

#[wasm_bindgen_test]
fn card_text_is_not_interpreted_as_html() {
    let container = fresh_container("row");
    let mut hostile = vehicle(9, true);
    hostile.name = "<img src=x onerror=alert(1)>".to_string();
    vehicle_list::render_into(&container, &[hostile], noop_toggle()).unwrap();

    assert!(container.query_selector("img").unwrap().is_none());
    let name = container.query_selector(".vehicle-name").unwrap().unwrap();
    assert_eq!(name.text_content().unwrap(), "<img src=x onerror=alert(1)>");
}

#[wasm_bindgen_test]
fn select_all_toggles_every_checkbox() {
    let container = fresh_container("row");
    let state = AppState::new();
    let cards = vehicle_list::render_into(&container, &[vehicle(1, true), vehicle(2, true), vehicle(3, true)], noop_toggle()).unwrap();
    state.cards.replace(cards);
    let selection = SelectionViewModel::new(state.clone());

    selection.on_checkbox_changed(2, true);
    state.cards.find(2).unwrap().checkbox.set_checked(true);
    assert_eq!(selection.summary().selected, 1);

    selection.toggle_all();
    assert!(state.cards.cards().iter().all(|c| c.checkbox.checked()));
    assert_eq!(selection.summary().selected, 3);

    selection.toggle_all();
    assert!(state.cards.cards().iter().all(|c| !c.checkbox.checked()));
    assert_eq!(selection.summary().selected, 0);
    assert!(!selection.summary().proceed_enabled());
}

#[wasm_bindgen_test]
fn poller_marks_rented_then_available() {
    let container = fresh_container("row");
    let state = AppState::new();
    let cards = vehicle_list::render_into(&container, &[vehicle(1, true), vehicle(2, true)], noop_toggle()).unwrap();
    state.cards.replace(cards);
    let selection = SelectionViewModel::new(state.clone());
    let availability = AvailabilityViewModel::new(state.clone(), selection.clone());

    let card = state.cards.find(1).unwrap();
    card.checkbox.set_checked(true);
    selection.on_checkbox_changed(1, true);

    availability.apply(&[vehicle(1, false), vehicle(2, true)]);

    assert_eq!(get_style(&card.card, "opacity"), "0.6");
    assert!(card.checkbox.disabled());
    assert!(!card.checkbox.checked());
    assert_eq!(selection.summary().selected, 0);
    let badge = card.card.query_selector(".availability-status").unwrap().unwrap();
    assert_eq!(badge.text_content().unwrap(), "Rented");
    assert!(badge.class_list().contains("bg-danger"));

    // La card 2 no tenía badge y sigue sin él
    let other = state.cards.find(2).unwrap();
    assert!(other.card.query_selector(".availability-status").unwrap().is_none());

    availability.apply(&[vehicle(1, true)]);

    assert_eq!(get_style(&card.card, "opacity"), "1");
    assert!(!card.checkbox.disabled());
    assert_eq!(badge.text_content().unwrap(), "Available");
    assert!(badge.class_list().contains("bg-success"));
}

#[wasm_bindgen_test]
fn poller_leaves_unknown_vehicles_untouched() {
    let container = fresh_container("row");
    let state = AppState::new();
    let cards = vehicle_list::render_into(&container, &[vehicle(7, true)], noop_toggle()).unwrap();
    state.cards.replace(cards);
    let availability = AvailabilityViewModel::new(state.clone(), SelectionViewModel::new(state.clone()));

    availability.apply(&[vehicle(99, false)]);

    let card = state.cards.find(7).unwrap();
    assert_eq!(get_style(&card.card, "opacity"), "");
    assert!(!card.checkbox.disabled());
}

#[wasm_bindgen_test]
async fn debounce_coalesces_rapid_inputs() {
    let calls: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let debouncer = Debouncer::new(300);

    for term in ["c", "ci", "civ", "civi", "civic"] {
        let calls = calls.clone();
        let term = term.to_string();
        debouncer.schedule(move || calls.borrow_mut().push(term));
        TimeoutFuture::new(20).await;
    }

    assert!(calls.borrow().is_empty());
    TimeoutFuture::new(400).await;
    assert_eq!(*calls.borrow(), vec!["civic".to_string()]);
}

#[wasm_bindgen_test]
async fn debounce_cancel_drops_pending_call() {
    let calls = Rc::new(RefCell::new(0));
    let debouncer = Debouncer::new(50);
    {
        let calls = calls.clone();
        debouncer.schedule(move || *calls.borrow_mut() += 1);
    }
    debouncer.cancel();
    TimeoutFuture::new(120).await;
    assert_eq!(*calls.borrow(), 0);
}

#[wasm_bindgen_test]
async fn error_alert_auto_removes_after_five_seconds() {
    fresh_container("container");
    AlertViewModel::show(AlertKind::Error, "error-alert-timing");
    assert!(find_alert("error-alert-timing").is_some());

    TimeoutFuture::new(4_500).await;
    assert!(find_alert("error-alert-timing").is_some());

    TimeoutFuture::new(700).await;
    assert!(find_alert("error-alert-timing").is_none());
}

#[wasm_bindgen_test]
async fn success_alert_auto_removes_after_three_seconds() {
    fresh_container("container");
    AlertViewModel::show(AlertKind::Success, "success-alert-timing");
    let banner = find_alert("success-alert-timing").unwrap();
    assert!(banner.class_list().contains("alert-success"));

    TimeoutFuture::new(2_500).await;
    assert!(find_alert("success-alert-timing").is_some());

    TimeoutFuture::new(700).await;
    assert!(find_alert("success-alert-timing").is_none());
}

#[wasm_bindgen_test]
async fn dismissed_alert_timer_is_a_noop() {
    fresh_container("container");
    AlertViewModel::show(AlertKind::Success, "dismiss-early");
    let banner = find_alert("dismiss-early").unwrap();

    let close = banner.query_selector(".btn-close").unwrap().unwrap();
    close.dyn_into::<HtmlElement>().unwrap().click();
    assert!(banner.parent_node().is_none());

    // El timer dispara sobre un elemento ya desconectado
    TimeoutFuture::new(3_200).await;
    assert!(banner.parent_node().is_none());
}

#[wasm_bindgen_test]
fn alert_is_inserted_first_in_container() {
    let container = fresh_container("container");
    let existing = document().unwrap().create_element("p").unwrap();
    container.append_child(&existing).unwrap();

    // Se inserta en el primer .container del documento
    let banner = alert::render_alert(AlertKind::Error, "first-child").unwrap().unwrap();
    let parent = banner.parent_element().unwrap();
    assert_eq!(parent.first_element_child().unwrap(), banner);
}

#[wasm_bindgen_test]
fn loading_pair_toggles_show_class() {
    let indicator = loading_indicator();
    assert!(!indicator.class_list().contains("show"));

    loading::show_loading();
    assert!(indicator.class_list().contains("show"));

    loading::hide_loading();
    assert!(!indicator.class_list().contains("show"));
}

#[wasm_bindgen_test]
fn invalid_form_is_cancelled_without_loading() {
    let indicator = loading_indicator();
    let form = required_form("");
    let event = submit_event();

    form.dispatch_event(&event).unwrap();

    assert!(event.default_prevented());
    assert!(form.class_list().contains("was-validated"));
    assert!(!indicator.class_list().contains("show"));
}

#[wasm_bindgen_test]
fn valid_form_submits_and_shows_loading() {
    let indicator = loading_indicator();
    let form = required_form("Ana");
    let event = submit_event();

    form.dispatch_event(&event).unwrap();

    assert!(!event.default_prevented());
    assert!(form.class_list().contains("was-validated"));
    assert!(indicator.class_list().contains("show"));
    loading::hide_loading();
}
