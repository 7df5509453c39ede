// ============================================================================
// AVAILABILITY VIEW - Reflejar disponibilidad en una card
// ============================================================================

use crate::dom::{append_child, query_within, set_style, set_text_content, ElementBuilder};
use crate::error::ClientResult;
use crate::state::RenderedCard;
use crate::utils::constants::{AVAILABILITY_STATUS_SELECTOR, AVAILABLE_OPACITY, RENTED_OPACITY, VEHICLE_INFO_SELECTOR};
use crate::viewmodels::CardAvailability;

const RENTED_BADGE_CLASS: &str = "badge bg-danger availability-status";
const AVAILABLE_BADGE_CLASS: &str = "badge bg-success availability-status";

pub fn apply_card_availability(card: &RenderedCard, availability: CardAvailability) -> ClientResult<()> {
    match availability {
        CardAvailability::Rented => mark_rented(card),
        CardAvailability::Available => mark_available(card),
        CardAvailability::Unknown => Ok(()),
    }
}

fn mark_rented(card: &RenderedCard) -> ClientResult<()> {
    set_style(&card.card, "opacity", RENTED_OPACITY)?;
    card.checkbox.set_disabled(true);
    card.checkbox.set_checked(false);

    let badge = match query_within(&card.card, AVAILABILITY_STATUS_SELECTOR) {
        Some(badge) => badge,
        None => {
            let badge = ElementBuilder::new("span")?.build();
            // Dentro de .vehicle-info si existe, si no al final de la card
            let parent = query_within(&card.card, VEHICLE_INFO_SELECTOR).unwrap_or_else(|| card.card.clone().into());
            append_child(&parent, &badge)?;
            badge
        }
    };
    set_text_content(&badge, "Rented");
    badge.set_class_name(RENTED_BADGE_CLASS);
    Ok(())
}

fn mark_available(card: &RenderedCard) -> ClientResult<()> {
    set_style(&card.card, "opacity", AVAILABLE_OPACITY)?;
    card.checkbox.set_disabled(false);

    // Sin badge previo no se crea uno
    if let Some(badge) = query_within(&card.card, AVAILABILITY_STATUS_SELECTOR) {
        set_text_content(&badge, "Available");
        badge.set_class_name(AVAILABLE_BADGE_CLASS);
    }
    Ok(())
}
