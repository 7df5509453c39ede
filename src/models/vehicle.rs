use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::utils::format_currency;

/// Vehículo tal como lo devuelve `/api/vehicles`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct VehicleRecord {
    pub id: i64,
    pub name: String,
    pub model: String,
    pub mileage: f64,
    pub vehicle_type: String, // "car" | "bike"
    pub price_per_day: Decimal,
    #[serde(default)]
    pub image_url: String,

    // El backend solo lista disponibles en búsquedas filtradas
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl VehicleRecord {
    /// Tipo en mayúsculas para la ficha ("CAR", "BIKE")
    pub fn type_label(&self) -> String {
        self.vehicle_type.to_uppercase()
    }

    pub fn mileage_label(&self) -> String {
        format!("{}", self.mileage)
    }

    pub fn price_label(&self) -> String {
        format!("{}/day", format_currency(self.price_per_day))
    }

    /// ID usado en el DOM (`vehicle{id}`)
    pub fn dom_id(&self) -> String {
        format!("vehicle{}", self.id)
    }
}

/// Parsear la respuesta de `/api/vehicles`.
///
/// El payload debe ser un array JSON. Los elementos que no encajan en
/// `VehicleRecord` se descartan con un warning, el resto se conserva.
pub fn parse_vehicle_list(payload: Value) -> ClientResult<Vec<VehicleRecord>> {
    let items = match payload {
        Value::Array(items) => items,
        other => {
            return Err(ClientError::Parse(format!(
                "expected a JSON array of vehicles, got {}",
                json_kind(&other)
            )))
        }
    };

    let total = items.len();
    let mut vehicles = Vec::with_capacity(total);
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<VehicleRecord>(item) {
            Ok(vehicle) => vehicles.push(vehicle),
            Err(e) => log::warn!("⚠️ [MODELS] Vehículo #{} descartado: {}", index, e),
        }
    }

    if vehicles.len() < total {
        log::warn!("⚠️ [MODELS] {}/{} vehículos válidos en la respuesta", vehicles.len(), total);
    }
    Ok(vehicles)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
