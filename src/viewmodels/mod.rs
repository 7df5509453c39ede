pub mod selection_viewmodel;
pub mod search_viewmodel;
pub mod availability_viewmodel;
pub mod rental_viewmodel;
pub mod alert_viewmodel;

pub use selection_viewmodel::{SelectionSummary, SelectionViewModel};
pub use search_viewmodel::SearchViewModel;
pub use availability_viewmodel::{AvailabilityViewModel, CardAvailability};
pub use rental_viewmodel::RentalViewModel;
pub use alert_viewmodel::{AlertKind, AlertViewModel};
