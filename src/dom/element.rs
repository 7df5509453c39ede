// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

use crate::error::{ClientError, ClientResult};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Obtener elemento por ID ya convertido al tipo concreto (`HtmlInputElement`, ...)
pub fn get_typed_by_id<T: JsCast>(id: &str) -> Option<T> {
    get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Atajo para `<input>` por ID
pub fn get_input_by_id(id: &str) -> Option<HtmlInputElement> {
    get_typed_by_id::<HtmlInputElement>(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> ClientResult<Element> {
    let doc = document().ok_or_else(|| ClientError::Dom("No document".to_string()))?;
    Ok(doc.create_element(tag)?)
}

/// Query selector sobre el documento
pub fn query_selector(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Query selector all sobre el documento (NodeList → Vec)
pub fn query_selector_all(selector: &str) -> Vec<Element> {
    match document().map(|doc| doc.query_selector_all(selector)) {
        Some(Ok(list)) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Query selector dentro de un elemento
pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> ClientResult<()> {
    Ok(element.class_list().add_1(class)?)
}

/// Remover clase
pub fn remove_class(element: &Element, class: &str) -> ClientResult<()> {
    Ok(element.class_list().remove_1(class)?)
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Establecer una propiedad CSS inline
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> ClientResult<()> {
    Ok(element.style().set_property(property, value)?)
}

/// Leer una propiedad CSS inline ("" si no está)
pub fn get_style(element: &HtmlElement, property: &str) -> String {
    element.style().get_property_value(property).unwrap_or_default()
}

/// Quitar el elemento del DOM (no-op si ya está desconectado)
pub fn remove_element(element: &Element) {
    element.remove();
}

/// ¿Sigue el elemento colgado de algún padre?
pub fn is_attached(element: &Element) -> bool {
    element.parent_node().is_some()
}

/// Insertar como primer hijo
pub fn prepend_child(parent: &Element, child: &Element) -> ClientResult<()> {
    let first = parent.first_child();
    parent.insert_before(child, first.as_ref())?;
    Ok(())
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> ClientResult<()> {
    parent.append_child(child)?;
    Ok(())
}

/// Vaciar contenido
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

/// Diálogo bloqueante (`window.alert`)
pub fn blocking_alert(message: &str) {
    if let Some(win) = window() {
        if let Err(e) = win.alert_with_message(message) {
            log::warn!("⚠️ [DOM] window.alert falló: {:?}", e);
        }
    }
}

/// Pathname de la URL actual
pub fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}
