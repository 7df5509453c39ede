// ============================================================================
// RENTAL CLIENT - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// Arquitectura:
// - Views: Funciones que tocan el DOM (sin lógica)
// - ViewModels: Lógica UI (selección, búsqueda, disponibilidad, precio, alertas)
// - Services: SOLO comunicación API
// - State: Estado compartido con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;
use crate::dom::{document, on_event};
use crate::viewmodels::AlertViewModel;

// Instancia global de la App (una por página)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(Config::new(level));
    log::info!("🚀 Rental Client - Rust Puro + MVVM");

    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
    if doc.ready_state() == "loading" {
        // El HTML aún se está parseando: montar en DOMContentLoaded
        on_event(&doc, "DOMContentLoaded", |_| mount_app())?;
    } else {
        mount_app();
    }
    Ok(())
}

fn mount_app() {
    APP.with(|app_cell| {
        if app_cell.borrow().is_some() {
            log::warn!("⚠️ [MAIN] App ya montada, ignorando");
            return;
        }
        let app = App::new();
        if let Err(e) = app.mount() {
            log::error!("❌ [MAIN] Error montando la app: {}", e);
        }
        *app_cell.borrow_mut() = Some(app);
    });
}

/// Alerta de error (llamable desde JavaScript / plantillas del servidor)
#[wasm_bindgen]
pub fn show_error(message: &str) {
    AlertViewModel::show_error(message);
}

/// Alerta de éxito (llamable desde JavaScript / plantillas del servidor)
#[wasm_bindgen]
pub fn show_success(message: &str) {
    AlertViewModel::show_success(message);
}

#[wasm_bindgen]
pub fn show_loading() {
    views::loading::show_loading();
}

#[wasm_bindgen]
pub fn hide_loading() {
    views::loading::hide_loading();
}
