// ============================================================================
// TIMING - Debounce / throttle sobre setTimeout
// ============================================================================
// Cada wrapper es dueño exclusivo de su timer: una llamada nueva cancela
// el timeout pendiente soltando su handle.
// ============================================================================

pub mod debounce;
pub mod scheduler;
pub mod throttle;

pub use debounce::*;
pub use scheduler::{BrowserScheduler, Scheduler, Task};
pub use throttle::*;
