// ============================================================================
// THROTTLE - Como máximo una ejecución por ventana de `delay_ms`
// ============================================================================
// - Primera llamada (o fuera de la ventana): se ejecuta inmediatamente
// - Llamadas dentro de la ventana: una sola ejecución diferida al final
//   de la ventana, con los últimos argumentos
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::scheduler::{BrowserScheduler, Scheduler};

struct ThrottleInner<A, S: Scheduler> {
    callback: RefCell<Box<dyn FnMut(A)>>,
    delay_ms: u32,
    scheduler: S,
    last: Cell<Option<f64>>,
    pending: RefCell<Option<S::Handle>>,
}

impl<A, S: Scheduler> ThrottleInner<A, S> {
    fn invoke(&self, args: A) {
        match self.callback.try_borrow_mut() {
            Ok(mut callback) => callback(args),
            Err(_) => log::warn!("⚠️ [THROTTLE] Llamada reentrante ignorada"),
        }
    }
}

/// Función con throttle. Clonar comparte ventana y timer.
pub struct Throttled<A, S: Scheduler = BrowserScheduler> {
    inner: Rc<ThrottleInner<A, S>>,
}

impl<A, S: Scheduler> Clone for Throttled<A, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A: 'static> Throttled<A, BrowserScheduler> {
    pub fn new<F>(callback: F, delay_ms: u32) -> Self
    where
        F: FnMut(A) + 'static,
    {
        Self::with_scheduler(callback, delay_ms, BrowserScheduler)
    }
}

impl<A: 'static, S: Scheduler> Throttled<A, S> {
    pub fn with_scheduler<F>(callback: F, delay_ms: u32, scheduler: S) -> Self
    where
        F: FnMut(A) + 'static,
    {
        Self {
            inner: Rc::new(ThrottleInner {
                callback: RefCell::new(Box::new(callback)),
                delay_ms,
                scheduler,
                last: Cell::new(None),
                pending: RefCell::new(None),
            }),
        }
    }

    pub fn call(&self, args: A) {
        let inner = &self.inner;
        let now = inner.scheduler.now();
        let window_end = inner.last.get().map(|last| last + f64::from(inner.delay_ms));

        match window_end {
            Some(end) if now < end => {
                // Reemplazar la ejecución diferida por la de estos argumentos
                inner.pending.borrow_mut().take();

                let remaining = (end - now).ceil() as u32;
                let weak = Rc::downgrade(inner);
                let handle = inner.scheduler.schedule(
                    remaining,
                    Box::new(move || {
                        if let Some(inner) = weak.upgrade() {
                            inner.last.set(Some(inner.scheduler.now()));
                            inner.invoke(args);
                        }
                    }),
                );

                *inner.pending.borrow_mut() = Some(handle);
            }
            _ => {
                // El timer diferido puede llegar tarde: esta llamada lo sustituye
                inner.pending.borrow_mut().take();
                inner.last.set(Some(now));
                inner.invoke(args);
            }
        }
    }

    /// Descartar la ejecución diferida, si la hay
    pub fn cancel(&self) {
        self.inner.pending.borrow_mut().take();
    }

    pub fn delay_ms(&self) -> u32 {
        self.inner.delay_ms
    }
}

/// Envolver `callback` con throttle de `delay_ms`
pub fn set_throttle<A, F>(callback: F, delay_ms: u32) -> Throttled<A>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    Throttled::new(callback, delay_ms)
}
