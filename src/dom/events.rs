// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Listeners en elementos del DOM: cuando el elemento se destruye (p.ej. al
//   re-renderizar la lista), el navegador limpia sus listeners, así que
//   closure.forget() es seguro.
// - Listeners globales (window/document): registrar UNA sola vez en App::mount.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, MouseEvent};

use crate::error::ClientResult;

/// Registrar un listener genérico que vive lo que viva el target
pub fn on_event<F>(target: &EventTarget, event_type: &str, handler: F) -> ClientResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Helper para click
pub fn on_click<F>(target: &EventTarget, handler: F) -> ClientResult<()>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para `input` (cada pulsación)
pub fn on_input<F>(target: &EventTarget, handler: F) -> ClientResult<()>
where
    F: FnMut(Event) + 'static,
{
    on_event(target, "input", handler)
}

/// Helper para `change` (checkbox, select, date)
pub fn on_change<F>(target: &EventTarget, handler: F) -> ClientResult<()>
where
    F: FnMut(Event) + 'static,
{
    on_event(target, "change", handler)
}

/// Helper para `submit` de formularios
pub fn on_submit<F>(target: &EventTarget, handler: F) -> ClientResult<()>
where
    F: FnMut(Event) + 'static,
{
    on_event(target, "submit", handler)
}
