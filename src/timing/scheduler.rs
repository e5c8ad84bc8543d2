// ============================================================================
// SCHEDULER - Abstracción de reloj + setTimeout para debounce/throttle
// ============================================================================

use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

/// Fuente de tiempo y timers.
///
/// Soltar (`drop`) el `Handle` devuelto por `schedule` cancela la tarea si
/// todavía no se ejecutó.
pub trait Scheduler: 'static {
    type Handle: 'static;

    /// Tiempo actual en milisegundos
    fn now(&self) -> f64;

    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle;
}

/// Scheduler del navegador: `setTimeout` vía gloo + `Date.now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn now(&self) -> f64 {
        js_sys::Date::now()
    }

    fn schedule(&self, delay_ms: u32, task: Task) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}
