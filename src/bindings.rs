// ============================================================================
// JS API - Namespace plano para scripts front-end
// ============================================================================
// Mismos nombres camelCase que espera el código JS existente:
//   import { setClass, setDebounce, ... } from "dom-utilities";
// Los valores llegan como JsValue, así que aquí sí se validan tipos en
// tiempo de ejecución (isElement / isObject).
// ============================================================================

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentFragment, Element, EventTarget};

use crate::config::CONFIG;
use crate::dom::{self, QueryRoot};
use crate::timing::{set_debounce, set_throttle};
use crate::utils::get_index_or_sentinel;

/// `String(value)` de JS
fn js_to_string(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if value.is_null() {
        return "null".to_string();
    }
    if value.is_undefined() {
        return "undefined".to_string();
    }
    String::from(value.unchecked_ref::<Object>().to_string())
}

fn call_js(tag: &str, callback: &Function, arg: &JsValue) {
    if let Err(e) = callback.call1(&JsValue::UNDEFINED, arg) {
        log::error!("❌ [{}] Error en callback: {}", tag, js_to_string(&e));
    }
}

#[wasm_bindgen(js_name = doExtend)]
pub fn js_do_extend(out: JsValue, sources: Array) -> JsValue {
    let out: Object = if dom::is_object(&out) {
        out.unchecked_into()
    } else {
        Object::new()
    };

    for source in sources.iter() {
        if !source.is_truthy() || !dom::is_object(&source) {
            continue;
        }

        for key in Object::keys(source.unchecked_ref::<Object>()).iter() {
            if let Ok(value) = Reflect::get(&source, &key) {
                let _ = Reflect::set(&out, &key, &value);
            }
        }
    }

    out.into()
}

#[wasm_bindgen(js_name = queryAll)]
pub fn js_query_all(selector: &str, context: JsValue) -> Result<Array, JsValue> {
    let root: Option<&dyn QueryRoot> = if let Some(el) = context.dyn_ref::<Element>() {
        Some(el as &dyn QueryRoot)
    } else if let Some(doc) = context.dyn_ref::<Document>() {
        Some(doc as &dyn QueryRoot)
    } else if let Some(fragment) = context.dyn_ref::<DocumentFragment>() {
        Some(fragment as &dyn QueryRoot)
    } else {
        None
    };

    let elements = dom::query_all(selector, root)?;
    Ok(elements.into_iter().collect())
}

#[wasm_bindgen(js_name = setAttrs)]
pub fn js_set_attrs(el: JsValue, attrs: JsValue) {
    if !dom::is_element(&el) || !dom::is_object(&attrs) {
        log::error!("❌ [SET-ATTRS] Error \"{}\" should be a DOM element!!", js_to_string(&el));
        log::error!("❌ [SET-ATTRS] Error \"{}\" should be an Object!!", js_to_string(&attrs));
        return;
    }

    let element: Element = el.unchecked_into();
    let pairs: Vec<(String, String)> = Object::keys(attrs.unchecked_ref::<Object>())
        .iter()
        .filter_map(|key| {
            let name = key.as_string()?;
            let value = Reflect::get(&attrs, &key).ok()?;
            Some((name, js_to_string(&value)))
        })
        .collect();

    match dom::set_attrs(&element, pairs) {
        Ok(()) => {}
        // Nombre inválido: ya logueado por set_attrs
        Err(crate::error::DomError::InvalidAttributeName(_)) => {}
        Err(e) => log::error!("❌ [SET-ATTRS] {}", e),
    }
}

#[wasm_bindgen(js_name = setEvent)]
pub fn js_set_event(el: EventTarget, event_type: &str, handler: Function) -> Result<Function, JsValue> {
    el.add_event_listener_with_callback(event_type, &handler)?;
    Ok(handler)
}

#[wasm_bindgen(js_name = setEventList)]
pub fn js_set_event_list(list: JsValue, event_type: &str, handler: Function) -> Result<(), JsValue> {
    let items = Array::from(&list);
    for i in (0..items.length()).rev() {
        let target: EventTarget = items.get(i).unchecked_into();
        target.add_event_listener_with_callback(event_type, &handler)?;
    }
    Ok(())
}

#[wasm_bindgen(js_name = getIndex)]
pub fn js_get_index(array: JsValue, item: JsValue) -> i32 {
    let items = Array::from(&array).to_vec();
    get_index_or_sentinel(&items, &item)
}

#[wasm_bindgen(js_name = getClosest)]
pub fn js_get_closest(el: Element, selector: &str) -> JsValue {
    // Sin coincidencia: `null`, no `undefined`
    dom::get_closest(&el, selector)
        .map(JsValue::from)
        .unwrap_or(JsValue::NULL)
}

#[wasm_bindgen(js_name = getHeight)]
pub fn js_get_height(el: Element) -> i32 {
    dom::get_height(&el)
}

#[wasm_bindgen(js_name = setClass)]
pub fn js_set_class(el: Element, classname: &str) -> Result<(), JsValue> {
    Ok(dom::set_class(&el, classname)?)
}

#[wasm_bindgen(js_name = unsetClass)]
pub fn js_unset_class(el: Element, classname: &str) -> Result<(), JsValue> {
    Ok(dom::unset_class(&el, classname)?)
}

#[wasm_bindgen(js_name = hasClass)]
pub fn js_has_class(el: Element, classname: &str) -> bool {
    dom::has_class(&el, classname)
}

#[wasm_bindgen(js_name = toggleClass)]
pub fn js_toggle_class(el: Element, classname: &str) -> Result<bool, JsValue> {
    Ok(dom::toggle_class(&el, classname)?)
}

/// El wrapper reenvía solo el primer argumento (el evento, en la práctica)
#[wasm_bindgen(js_name = setDebounce)]
pub fn js_set_debounce(callback: Function, delay: Option<u32>) -> Function {
    let delay = delay.unwrap_or(CONFIG.debounce_delay_ms);
    let debounced = set_debounce(move |arg: JsValue| call_js("DEBOUNCE", &callback, &arg), delay);

    Closure::wrap(Box::new(move |arg: JsValue| debounced.call(arg)) as Box<dyn FnMut(JsValue)>)
        .into_js_value()
        .unchecked_into()
}

#[wasm_bindgen(js_name = setThrottle)]
pub fn js_set_throttle(callback: Function, delay: Option<u32>) -> Function {
    let delay = delay.unwrap_or(CONFIG.throttle_delay_ms);
    let throttled = set_throttle(move |arg: JsValue| call_js("THROTTLE", &callback, &arg), delay);

    Closure::wrap(Box::new(move |arg: JsValue| throttled.call(arg)) as Box<dyn FnMut(JsValue)>)
        .into_js_value()
        .unchecked_into()
}

#[wasm_bindgen(js_name = isElement)]
pub fn js_is_element(value: JsValue) -> bool {
    dom::is_element(&value)
}

#[wasm_bindgen(js_name = isObject)]
pub fn js_is_object(value: JsValue) -> bool {
    dom::is_object(&value)
}

#[wasm_bindgen(js_name = triggerEvent)]
pub fn js_trigger_event(el: EventTarget, event_type: &str) -> Result<bool, JsValue> {
    Ok(dom::trigger_event(&el, event_type)?)
}

#[wasm_bindgen(js_name = triggerCustomEvent)]
pub fn js_trigger_custom_event(el: EventTarget, event_type: &str, detail: JsValue) -> Result<bool, JsValue> {
    Ok(dom::trigger_custom_event(&el, event_type, &detail)?)
}

#[wasm_bindgen(js_name = isElementInViewport)]
pub fn js_is_element_in_viewport(el: Element) -> Result<bool, JsValue> {
    Ok(dom::is_element_in_viewport(&el)?)
}
