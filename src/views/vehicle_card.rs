// ============================================================================
// VEHICLE CARD VIEW - Card de un vehículo
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::dom::ElementBuilder;
use crate::error::{ClientError, ClientResult};
use crate::models::VehicleRecord;
use crate::state::RenderedCard;
use crate::utils::constants::VEHICLE_CHECKBOX_SELECTOR;

/// Renderizar la columna con la card. Devuelve la columna (para insertar)
/// y las referencias que guarda el `CardRegistry`.
pub fn render_vehicle_card(vehicle: &VehicleRecord) -> ClientResult<(Element, RenderedCard)> {
    let dom_id = vehicle.dom_id();

    let image = ElementBuilder::new("div")?
        .class("vehicle-image")
        .style("background-image", &css_url(&vehicle.image_url))?
        .build();

    let specs = ElementBuilder::new("div")?
        .class("vehicle-specs")
        .child(spec_item("Mileage", &vehicle.mileage_label())?)?
        .child(spec_item("Type", &vehicle.type_label())?)?
        .build();

    let checkbox: HtmlInputElement = ElementBuilder::new("input")?
        .class("form-check-input vehicle-checkbox")
        .attr("type", "checkbox")?
        .attr("value", &vehicle.id.to_string())?
        .id(&dom_id)?
        .build_as()?;

    let label = ElementBuilder::new("label")?
        .class("form-check-label")
        .attr("for", &dom_id)?
        .text("Select for rental")
        .build();

    let form_check = ElementBuilder::new("div")?
        .class("form-check")
        .child(checkbox.clone().unchecked_into())?
        .child(label)?
        .build();

    let info = ElementBuilder::new("div")?
        .class("vehicle-info")
        .text_child("h5", "vehicle-name", &vehicle.name)?
        .text_child("p", "vehicle-model", &vehicle.model)?
        .child(specs)?
        .text_child("div", "price", &vehicle.price_label())?
        .child(form_check)?
        .build();

    let card: HtmlElement = ElementBuilder::new("div")?
        .class("vehicle-card")
        .child(image)?
        .child(info)?
        .build_as()?;

    let column = ElementBuilder::new("div")?
        .class("col-md-6 col-lg-4 mb-4")
        .child(card.clone().unchecked_into())?
        .build();

    Ok((
        column,
        RenderedCard {
            vehicle_id: vehicle.id,
            card,
            checkbox,
        },
    ))
}

fn spec_item(label: &str, value: &str) -> ClientResult<Element> {
    Ok(ElementBuilder::new("div")?
        .class("spec-item")
        .text_child("div", "spec-label", label)?
        .text_child("div", "spec-value", value)?
        .build())
}

/// `url("...")` con comillas escapadas y sin saltos de línea
fn css_url(url: &str) -> String {
    let escaped = url
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace(['\n', '\r'], "");
    format!("url(\"{}\")", escaped)
}

/// Leer una card existente (renderizada por el servidor)
pub fn read_rendered_card(card: &Element) -> ClientResult<RenderedCard> {
    let checkbox = card
        .query_selector(VEHICLE_CHECKBOX_SELECTOR)?
        .ok_or_else(|| ClientError::Dom("card without .vehicle-checkbox".to_string()))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| ClientError::Dom(".vehicle-checkbox is not an <input>".to_string()))?;

    let raw_id = checkbox.value();
    let vehicle_id = raw_id
        .trim()
        .parse::<i64>()
        .map_err(|_| ClientError::Parse(format!("invalid vehicle id '{}'", raw_id)))?;

    let card = card
        .clone()
        .dyn_into::<HtmlElement>()
        .map_err(|_| ClientError::Dom(".vehicle-card is not an HtmlElement".to_string()))?;

    Ok(RenderedCard {
        vehicle_id,
        card,
        checkbox,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_url_escapes_quotes() {
        assert_eq!(css_url("/img/a.jpg"), "url(\"/img/a.jpg\")");
        assert_eq!(css_url("/img/\"x\".jpg"), "url(\"/img/\\\"x\\\".jpg\")");
        assert_eq!(css_url("/img/a\n.jpg"), "url(\"/img/a.jpg\")");
    }
}
