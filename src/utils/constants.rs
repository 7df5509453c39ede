// ============================================================================
// CONSTANTES - Contrato con el HTML renderizado por el servidor
// ============================================================================

// Endpoints del backend
pub const VEHICLES_ENDPOINT: &str = "/api/vehicles";
pub const RENTAL_DETAILS_ENDPOINT: &str = "/rental-details";
pub const SELECTED_VEHICLES_FIELD: &str = "selected_vehicles";

// IDs del DOM
pub const SELECT_ALL_BTN_ID: &str = "selectAllBtn";
pub const PROCEED_BTN_ID: &str = "proceedBtn";
pub const SEARCH_INPUT_ID: &str = "searchInput";
pub const VEHICLE_TYPE_SELECT_ID: &str = "vehicleTypeSelect";
pub const VEHICLE_CONTAINER_ID: &str = "vehicleContainer";
pub const START_DATE_ID: &str = "startDate";
pub const END_DATE_ID: &str = "endDate";
pub const TOTAL_PRICE_ID: &str = "totalPrice";
pub const PRICE_PER_DAY_ID: &str = "pricePerDay";
pub const LOADING_INDICATOR_ID: &str = "loadingIndicator";

// Selectores
pub const VEHICLE_CARD_SELECTOR: &str = ".vehicle-card";
pub const VEHICLE_CHECKBOX_SELECTOR: &str = ".vehicle-checkbox";
pub const VEHICLE_INFO_SELECTOR: &str = ".vehicle-info";
pub const AVAILABILITY_STATUS_SELECTOR: &str = ".availability-status";
pub const PRICE_INPUT_SELECTOR: &str = ".price-input";
pub const NEEDS_VALIDATION_SELECTOR: &str = ".needs-validation";
pub const MAIN_CONTAINER_SELECTOR: &str = ".container";

// Clases
pub const LOADING_SHOW_CLASS: &str = "show";
pub const WAS_VALIDATED_CLASS: &str = "was-validated";

// Textos visibles
pub const MSG_EMPTY_SELECTION: &str = "Please select at least one vehicle";
pub const MSG_INVALID_END_DATE: &str = "End date must be after start date";
pub const MSG_NO_VEHICLES: &str = "No vehicles found";
pub const MSG_SEARCH_FAILED: &str = "Could not load vehicles. Please try again.";

// Disponibilidad
pub const RENTED_OPACITY: &str = "0.6";
pub const AVAILABLE_OPACITY: &str = "1";
