// ============================================================================
// CONFIG - Configuración de la app cargada en tiempo de compilación
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Vacío = mismo origen que la página
    pub backend_url: String,
    pub search_debounce_ms: u32,
    pub availability_poll_ms: u32,
    pub alerts: AlertConfig,
    /// Rutas (fragmentos del pathname) donde corre el polling de disponibilidad
    pub poll_paths: Vec<String>,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            search_debounce_ms: 300,
            availability_poll_ms: 30_000,
            alerts: AlertConfig::default(),
            poll_paths: default_poll_paths(),
            enable_logging: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    pub error_ms: u32,
    pub success_ms: u32,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            error_ms: 5_000,
            success_ms: 3_000,
        }
    }
}

fn default_poll_paths() -> Vec<String> {
    vec!["vehicle-selection".to_string(), "my-rentals".to_string()]
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url: option_env!("BACKEND_URL")
                .unwrap_or("")
                .trim_end_matches('/')
                .to_string(),
            search_debounce_ms: option_env!("SEARCH_DEBOUNCE_MS")
                .unwrap_or("300").parse().unwrap_or(300),
            availability_poll_ms: option_env!("AVAILABILITY_POLL_MS")
                .unwrap_or("30000").parse().unwrap_or(30_000),
            alerts: AlertConfig {
                error_ms: option_env!("ERROR_ALERT_MS")
                    .unwrap_or("5000").parse().unwrap_or(5_000),
                success_ms: option_env!("SUCCESS_ALERT_MS")
                    .unwrap_or("3000").parse().unwrap_or(3_000),
            },
            poll_paths: default_poll_paths(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
        }
    }

    /// URL absoluta (o relativa al origen) de un endpoint del backend
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }

    /// ¿La vista actual necesita refrescar disponibilidad?
    pub fn should_poll(&self, pathname: &str) -> bool {
        self.poll_paths.iter().any(|p| pathname.contains(p.as_str()))
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let config = AppConfig::default();
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.availability_poll_ms, 30_000);
        assert_eq!(config.alerts.error_ms, 5_000);
        assert_eq!(config.alerts.success_ms, 3_000);
    }

    #[test]
    fn test_should_poll_only_on_listing_views() {
        let config = AppConfig::default();
        assert!(config.should_poll("/vehicle-selection"));
        assert!(config.should_poll("/my-rentals"));
        assert!(!config.should_poll("/rental-details"));
        assert!(!config.should_poll("/"));
    }

    #[test]
    fn test_api_url_same_origin_by_default() {
        let config = AppConfig::default();
        assert_eq!(config.api_url("/api/vehicles"), "/api/vehicles");

        let remote = AppConfig {
            backend_url: "https://rentals.example.com".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(remote.api_url("/api/vehicles"), "https://rentals.example.com/api/vehicles");
    }
}
