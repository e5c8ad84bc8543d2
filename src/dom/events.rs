// ============================================================================
// EVENT HANDLING - Registro y disparo de eventos
// ============================================================================
// GESTIÓN DE MEMORIA:
// - `EventListener` es dueño del Closure: al hacer drop se quita el listener
//   de todos sus targets.
// - Para listeners que deben vivir toda la página, usar `forget()`.
// ============================================================================

use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, Event, EventInit, EventTarget, InputEvent, MouseEvent};

use crate::error::DomResult;

pub struct EventListener {
    targets: Vec<EventTarget>,
    event_type: String,
    closure: Option<Closure<dyn FnMut(Event)>>,
}

impl EventListener {
    fn register<T>(targets: &[T], event_type: &str, closure: Closure<dyn FnMut(Event)>) -> DomResult<Self>
    where
        T: AsRef<EventTarget>,
    {
        let mut listener = Self {
            targets: Vec::with_capacity(targets.len()),
            event_type: event_type.to_string(),
            closure: Some(closure),
        };

        for target in targets {
            let target = target.as_ref();
            if let Some(closure) = listener.closure.as_ref() {
                // Si falla a mitad, el drop de `listener` limpia los ya registrados
                target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
            }
            listener.targets.push(target.clone());
        }

        Ok(listener)
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn targets(&self) -> &[EventTarget] {
        &self.targets
    }

    /// Mantener el listener vivo hasta que se recargue la página
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            for target in &self.targets {
                let _ = target.remove_event_listener_with_callback(
                    &self.event_type,
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

/// Registrar `handler` para `event_type` (addEventListener, sin capture)
pub fn set_event<T, F>(target: &T, event_type: &str, handler: F) -> DomResult<EventListener>
where
    T: AsRef<EventTarget>,
    F: FnMut(Event) + 'static,
{
    set_event_list(std::slice::from_ref(target), event_type, handler)
}

/// Registrar el mismo handler en todos los elementos de la lista
pub fn set_event_list<T, F>(targets: &[T], event_type: &str, handler: F) -> DomResult<EventListener>
where
    T: AsRef<EventTarget>,
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    EventListener::register(targets, event_type, closure)
}

/// Listener con el evento ya convertido a su tipo concreto (`MouseEvent`...)
pub fn set_typed_event<T, E, F>(target: &T, event_type: &str, mut handler: F) -> DomResult<EventListener>
where
    T: AsRef<EventTarget>,
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let name = event_type.to_string();
    set_event(target, event_type, move |event: Event| match event.dyn_into::<E>() {
        Ok(typed) => handler(typed),
        Err(_) => log::warn!("⚠️ [EVENTS] Evento '{}' con tipo inesperado, ignorado", name),
    })
}

pub fn on_click<T, F>(target: &T, handler: F) -> DomResult<EventListener>
where
    T: AsRef<EventTarget>,
    F: FnMut(MouseEvent) + 'static,
{
    set_typed_event(target, "click", handler)
}

pub fn on_input<T, F>(target: &T, handler: F) -> DomResult<EventListener>
where
    T: AsRef<EventTarget>,
    F: FnMut(InputEvent) + 'static,
{
    set_typed_event(target, "input", handler)
}

/// Disparar un evento nativo (bubbles, no cancelable).
/// Devuelve el resultado de `dispatchEvent`.
pub fn trigger_event<T: AsRef<EventTarget>>(target: &T, event_type: &str) -> DomResult<bool> {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(false);

    let event = Event::new_with_event_init_dict(event_type, &init)?;
    Ok(target.as_ref().dispatch_event(&event)?)
}

/// Disparar un CustomEvent con `detail`
pub fn trigger_custom_event<T: AsRef<EventTarget>>(
    target: &T,
    event_type: &str,
    detail: &JsValue,
) -> DomResult<bool> {
    let init = CustomEventInit::new();
    init.set_detail(detail);

    let event = CustomEvent::new_with_event_init_dict(event_type, &init)?;
    Ok(target.as_ref().dispatch_event(&event)?)
}

/// Igual que [`trigger_custom_event`] pero con un `detail` serializable
pub fn trigger_custom_event_with<T, D>(target: &T, event_type: &str, detail: &D) -> DomResult<bool>
where
    T: AsRef<EventTarget>,
    D: Serialize + ?Sized,
{
    let json = serde_json::to_string(detail)?;
    let detail = js_sys::JSON::parse(&json)?;
    trigger_custom_event(target, event_type, &detail)
}
