// Utils compartidos

pub mod constants;
pub mod debounce;
pub mod format;

pub use constants::*;
pub use debounce::Debouncer;
pub use format::*;
