// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP y parsea respuestas
// ============================================================================

use gloo_net::http::{Request, Response};
use serde_json::Value;

use crate::config::CONFIG;
use crate::error::{ClientError, ClientResult};
use crate::models::{parse_vehicle_list, VehicleRecord};
use crate::utils::constants::VEHICLES_ENDPOINT;

/// Filtros de búsqueda del listado
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub search: String,
    pub vehicle_type: String,
}

impl SearchQuery {
    pub fn new(search: &str, vehicle_type: &str) -> Self {
        Self {
            search: search.to_string(),
            vehicle_type: vehicle_type.to_string(),
        }
    }

    /// Parámetros tal como los espera el backend (`search`, `type`)
    pub fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [("search", self.search.as_str()), ("type", self.vehicle_type.as_str())]
    }
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url.clone(),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn vehicles_url(&self) -> String {
        format!("{}{}", self.base_url, VEHICLES_ENDPOINT)
    }

    /// Buscar vehículos (`GET /api/vehicles?search=..&type=..`)
    pub async fn search_vehicles(&self, query: &SearchQuery) -> ClientResult<Vec<VehicleRecord>> {
        log::debug!(
            "🔍 [API] Buscando vehículos: search='{}' type='{}'",
            query.search,
            query.vehicle_type
        );

        let response = Request::get(&self.vehicles_url())
            .query(query.query_pairs())
            .send()
            .await?;

        let vehicles = Self::parse_vehicles(response).await?;
        log::info!("✅ [API] Búsqueda: {} vehículos", vehicles.len());
        Ok(vehicles)
    }

    /// Listado completo sin filtros, usado por el polling de disponibilidad
    pub async fn fetch_vehicles(&self) -> ClientResult<Vec<VehicleRecord>> {
        let response = Request::get(&self.vehicles_url()).send().await?;
        Self::parse_vehicles(response).await
    }

    async fn parse_vehicles(response: Response) -> ClientResult<Vec<VehicleRecord>> {
        if !response.ok() {
            return Err(ClientError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }
        let payload = response.json::<Value>().await?;
        parse_vehicle_list(payload)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_use_backend_names() {
        let query = SearchQuery::new("civic 2022", "car");
        assert_eq!(query.query_pairs(), [("search", "civic 2022"), ("type", "car")]);
    }

    #[test]
    fn test_empty_filters_are_still_sent() {
        let query = SearchQuery::default();
        assert_eq!(query.query_pairs(), [("search", ""), ("type", "")]);
    }

    #[test]
    fn test_vehicles_url() {
        assert_eq!(ApiClient::with_base_url("").vehicles_url(), "/api/vehicles");
        assert_eq!(
            ApiClient::with_base_url("http://localhost:5000/").vehicles_url(),
            "http://localhost:5000/api/vehicles"
        );
    }
}
