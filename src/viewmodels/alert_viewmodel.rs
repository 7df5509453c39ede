// ============================================================================
// ALERT VIEWMODEL - Banners transitorios de éxito/error
// ============================================================================

use gloo_timers::callback::Timeout;

use crate::config::CONFIG;
use crate::dom::{is_attached, remove_element};
use crate::views::alert;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Error => "alert alert-danger alert-dismissible fade show",
            AlertKind::Success => "alert alert-success alert-dismissible fade show",
        }
    }

    /// Tiempo hasta el auto-cierre
    pub fn auto_dismiss_ms(&self) -> u32 {
        match self {
            AlertKind::Error => CONFIG.alerts.error_ms,
            AlertKind::Success => CONFIG.alerts.success_ms,
        }
    }
}

pub struct AlertViewModel;

impl AlertViewModel {
    pub fn show_error(message: &str) {
        Self::show(AlertKind::Error, message);
    }

    pub fn show_success(message: &str) {
        Self::show(AlertKind::Success, message);
    }

    /// Insertar el banner y programar su retirada
    pub fn show(kind: AlertKind, message: &str) {
        let banner = match alert::render_alert(kind, message) {
            Ok(Some(banner)) => banner,
            Ok(None) => {
                log::warn!("⚠️ [ALERT] Sin contenedor .container, alerta descartada: {}", message);
                return;
            }
            Err(e) => {
                log::error!("❌ [ALERT] Error mostrando alerta: {}", e);
                return;
            }
        };

        Timeout::new(kind.auto_dismiss_ms(), move || {
            // Si el usuario ya la cerró, no hay nada que hacer
            if is_attached(&banner) {
                remove_element(&banner);
            }
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_lasts_longer_than_success() {
        assert_eq!(AlertKind::Error.auto_dismiss_ms(), 5_000);
        assert_eq!(AlertKind::Success.auto_dismiss_ms(), 3_000);
    }

    #[test]
    fn test_css_classes() {
        assert!(AlertKind::Error.css_class().contains("alert-danger"));
        assert!(AlertKind::Success.css_class().contains("alert-success"));
        assert!(AlertKind::Success.css_class().contains("alert-dismissible"));
    }
}
