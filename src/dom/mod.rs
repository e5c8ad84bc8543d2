// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod classes;
pub mod element;
pub mod events;
pub mod query;
pub mod selector;
pub mod viewport;

pub use classes::*;
pub use element::*;
pub use events::*;
pub use query::*;
pub use selector::*;
pub use viewport::*;
