// ============================================================================
// VEHICLE LIST VIEW - Contenido de #vehicleContainer
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, clear_children, get_element_by_id, on_change, query_selector_all, ElementBuilder};
use crate::error::ClientResult;
use crate::models::VehicleRecord;
use crate::state::RenderedCard;
use crate::utils::constants::{MSG_NO_VEHICLES, VEHICLE_CARD_SELECTOR, VEHICLE_CONTAINER_ID};
use crate::views::vehicle_card::{read_rendered_card, render_vehicle_card};

/// Reemplazar la lista completa.
///
/// Devuelve `None` si la página no tiene `#vehicleContainer`; si no, las
/// cards nuevas (vacío cuando se muestra "No vehicles found").
pub fn render_vehicle_list(
    vehicles: &[VehicleRecord],
    on_toggle: Rc<dyn Fn(i64, bool)>,
) -> ClientResult<Option<Vec<RenderedCard>>> {
    let Some(container) = get_element_by_id(VEHICLE_CONTAINER_ID) else {
        return Ok(None);
    };
    render_into(&container, vehicles, on_toggle).map(Some)
}

pub fn render_into(
    container: &Element,
    vehicles: &[VehicleRecord],
    on_toggle: Rc<dyn Fn(i64, bool)>,
) -> ClientResult<Vec<RenderedCard>> {
    clear_children(container);

    if vehicles.is_empty() {
        append_child(container, &render_empty_placeholder()?)?;
        return Ok(Vec::new());
    }

    let mut cards = Vec::with_capacity(vehicles.len());
    for vehicle in vehicles {
        let (column, card) = render_vehicle_card(vehicle)?;
        bind_checkbox(&card, on_toggle.clone())?;
        append_child(container, &column)?;
        cards.push(card);
    }
    log::info!("🚗 [LIST] {} vehículos renderizados", cards.len());
    Ok(cards)
}

fn render_empty_placeholder() -> ClientResult<Element> {
    Ok(ElementBuilder::new("div")?
        .class("col-12 text-center py-5")
        .text_child("h4", "", MSG_NO_VEHICLES)?
        .build())
}

/// Listener `change` del checkbox de una card
pub fn bind_checkbox(card: &RenderedCard, on_toggle: Rc<dyn Fn(i64, bool)>) -> ClientResult<()> {
    let vehicle_id = card.vehicle_id;
    on_change(&card.checkbox, move |e| {
        let checked = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.checked())
            .unwrap_or(false);
        on_toggle(vehicle_id, checked);
    })
}

/// Cards renderizadas por el servidor al cargar la página
pub fn scan_rendered_cards() -> Vec<RenderedCard> {
    query_selector_all(VEHICLE_CARD_SELECTOR)
        .iter()
        .filter_map(|element| match read_rendered_card(element) {
            Ok(card) => Some(card),
            Err(e) => {
                log::warn!("⚠️ [LIST] Card ignorada: {}", e);
                None
            }
        })
        .collect()
}
