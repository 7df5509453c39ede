// ============================================================================
// VIEWS - Funciones que tocan el DOM (sin lógica de negocio)
// ============================================================================

pub mod vehicle_card;
pub mod vehicle_list;
pub mod availability;
pub mod selection_bar;
pub mod search_form;
pub mod rental_form;
pub mod alert;
pub mod loading;

pub use vehicle_card::render_vehicle_card;
pub use vehicle_list::{render_vehicle_list, scan_rendered_cards};
