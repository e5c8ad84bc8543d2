// ============================================================================
// DEBOUNCE - Solo la última llamada de una ráfaga se ejecuta
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use super::scheduler::{BrowserScheduler, Scheduler};

struct DebounceInner<A, S: Scheduler> {
    callback: RefCell<Box<dyn FnMut(A)>>,
    delay_ms: u32,
    scheduler: S,
    pending: RefCell<Option<S::Handle>>,
}

impl<A, S: Scheduler> DebounceInner<A, S> {
    fn invoke(&self, args: A) {
        match self.callback.try_borrow_mut() {
            Ok(mut callback) => callback(args),
            Err(_) => log::warn!("⚠️ [DEBOUNCE] Llamada reentrante ignorada"),
        }
    }
}

/// Función con debounce. Clonar comparte el mismo timer.
///
/// Cuando se sueltan todos los clones, la llamada pendiente se cancela.
pub struct Debounced<A, S: Scheduler = BrowserScheduler> {
    inner: Rc<DebounceInner<A, S>>,
}

impl<A, S: Scheduler> Clone for Debounced<A, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A: 'static> Debounced<A, BrowserScheduler> {
    pub fn new<F>(callback: F, delay_ms: u32) -> Self
    where
        F: FnMut(A) + 'static,
    {
        Self::with_scheduler(callback, delay_ms, BrowserScheduler)
    }
}

impl<A: 'static, S: Scheduler> Debounced<A, S> {
    pub fn with_scheduler<F>(callback: F, delay_ms: u32, scheduler: S) -> Self
    where
        F: FnMut(A) + 'static,
    {
        Self {
            inner: Rc::new(DebounceInner {
                callback: RefCell::new(Box::new(callback)),
                delay_ms,
                scheduler,
                pending: RefCell::new(None),
            }),
        }
    }

    /// Cancelar el timer pendiente y reprogramar con estos argumentos
    pub fn call(&self, args: A) {
        // Soltar el handle anterior cancela el timeout
        self.inner.pending.borrow_mut().take();

        let weak = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.schedule(
            self.inner.delay_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.invoke(args);
                }
            }),
        );

        *self.inner.pending.borrow_mut() = Some(handle);
    }

    /// Descartar la llamada pendiente, si la hay
    pub fn cancel(&self) {
        self.inner.pending.borrow_mut().take();
    }

    pub fn delay_ms(&self) -> u32 {
        self.inner.delay_ms
    }
}

/// Envolver `callback` con debounce de `delay_ms`
pub fn set_debounce<A, F>(callback: F, delay_ms: u32) -> Debounced<A>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    Debounced::new(callback, delay_ms)
}
