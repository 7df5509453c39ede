pub mod vehicle;
pub mod rental;

pub use vehicle::{parse_vehicle_list, VehicleRecord};
pub use rental::{parse_input_date, to_input_value, DateRange};
