// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod selection_state;
pub mod card_registry;
pub mod request_guard;
pub mod app_state;

pub use selection_state::*;
pub use card_registry::*;
pub use request_guard::*;
pub use app_state::*;
