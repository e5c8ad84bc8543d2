#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use dom_utilities::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::{CustomEvent, Element, Event};

wasm_bindgen_test_configure!(run_in_browser);

fn fixture(html: &str) -> Element {
    let doc = document().unwrap();
    let root = doc.create_element("div").unwrap();
    root.set_inner_html(html);
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

fn cleanup(root: &Element) {
    root.remove();
}

#[wasm_bindgen_test]
fn test_query_all_in_document_order() {
    let root = fixture(r#"<ul><li class="slide" id="a"></li><li id="b"></li><li class="slide" id="c"></li></ul>"#);

    let slides = query_all(".slide", Some(&root)).unwrap();
    let ids: Vec<String> = slides.iter().map(|el| el.id()).collect();
    assert_eq!(ids, vec!["a", "c"]);

    assert!(query_all(".missing", Some(&root)).unwrap().is_empty());
    assert!(query_all("##", None).is_err());

    cleanup(&root);
}

#[wasm_bindgen_test]
fn test_set_attrs() {
    let root = fixture("<button></button>");
    let button = root.first_element_child().unwrap();

    set_attrs(&button, [("role", "tab"), ("tabindex", "0")]).unwrap();
    assert_eq!(button.get_attribute("role").as_deref(), Some("tab"));
    assert_eq!(button.get_attribute("tabindex").as_deref(), Some("0"));

    let err = set_attrs(&button, [("aria-selected", "true"), ("bad name", "x")]).unwrap_err();
    assert!(matches!(err, DomError::InvalidAttributeName(_)));
    assert_eq!(button.get_attribute("aria-selected"), None);

    cleanup(&root);
}

#[wasm_bindgen_test]
fn test_class_helpers() {
    let root = fixture("<p></p>");
    let p = root.first_element_child().unwrap();

    set_class(&p, "open").unwrap();
    assert!(has_class(&p, "open"));
    assert!(!toggle_class(&p, "open").unwrap());
    assert!(!has_class(&p, "open"));
    assert!(toggle_class(&p, "open").unwrap());
    assert!(has_class(&p, "open"));

    set_class(&p, "a b").unwrap();
    assert!(has_class(&p, "a") && has_class(&p, "b"));
    unset_class(&p, "a open").unwrap();
    assert_eq!(p.class_name(), "b");

    set_class(&p, "").unwrap();
    assert_eq!(p.class_name(), "b");

    cleanup(&root);
}

#[wasm_bindgen_test]
fn test_get_closest_grandparent() {
    let root = fixture(r#"<section class="target"><div class="mid"><span id="leaf"></span></div></section>"#);
    let leaf = root.query_selector("#leaf").unwrap().unwrap();

    let found = get_closest(&leaf, ".target").unwrap();
    assert_eq!(found.tag_name(), "SECTION");
    assert_eq!(get_closest(&leaf, "div").unwrap().class_name(), "mid");
    assert!(get_closest(&leaf, ".nowhere").is_none());

    cleanup(&root);
}

#[wasm_bindgen_test]
fn test_get_index_uses_identity() {
    let root = fixture("<i></i><i></i><i></i>");
    let items = query_all("i", Some(&root)).unwrap();

    assert_eq!(get_index(&items, &items[1]), Some(1));
    let other = document().unwrap().create_element("i").unwrap();
    assert_eq!(get_index(&items, &other), None);

    cleanup(&root);
}

#[wasm_bindgen_test]
fn test_events_and_listener_drop() {
    let root = fixture("<button></button>");
    let button = root.first_element_child().unwrap();
    let count = Rc::new(RefCell::new(0));

    let c = count.clone();
    let listener = set_event(&button, "ping", move |_e: Event| *c.borrow_mut() += 1).unwrap();
    assert_eq!(listener.event_type(), "ping");

    trigger_event(&button, "ping").unwrap();
    assert_eq!(*count.borrow(), 1);

    drop(listener);
    trigger_event(&button, "ping").unwrap();
    assert_eq!(*count.borrow(), 1);

    cleanup(&root);
}

#[wasm_bindgen_test]
fn test_event_list_and_bubbling() {
    let root = fixture("<a></a><a></a>");
    let links = query_all("a", Some(&root)).unwrap();
    let count = Rc::new(RefCell::new(0));

    let c = count.clone();
    let _listener = set_event_list(&links, "hit", move |_e: Event| *c.borrow_mut() += 1).unwrap();
    for link in &links {
        trigger_event(link, "hit").unwrap();
    }
    assert_eq!(*count.borrow(), 2);

    let bubbled = Rc::new(RefCell::new(false));
    let b = bubbled.clone();
    let _root_listener = set_event(&root, "hit", move |_e: Event| *b.borrow_mut() = true).unwrap();
    trigger_event(&links[0], "hit").unwrap();
    assert!(*bubbled.borrow());

    cleanup(&root);
}

#[wasm_bindgen_test]
fn test_custom_event_detail() {
    let root = fixture("<div></div>");
    let target = root.first_element_child().unwrap();
    let received = Rc::new(RefCell::new(JsValue::UNDEFINED));

    let r = received.clone();
    let _listener = set_typed_event(&target, "loaded", move |e: CustomEvent| {
        *r.borrow_mut() = e.detail();
    })
    .unwrap();

    trigger_custom_event_with(&target, "loaded", &serde_json::json!({"count": 3})).unwrap();
    let count = js_sys::Reflect::get(&received.borrow(), &JsValue::from_str("count")).unwrap();
    assert_eq!(count.as_f64(), Some(3.0));

    trigger_custom_event(&target, "loaded", &JsValue::from_str("hola")).unwrap();
    assert_eq!(received.borrow().as_string().as_deref(), Some("hola"));

    cleanup(&root);
}

#[wasm_bindgen_test]
fn test_type_predicates() {
    let root = fixture("");
    assert!(is_element(&root));
    assert!(!is_element(&JsValue::NULL));
    assert!(!is_element(&document().unwrap()));

    assert!(is_object(&js_sys::Object::new()));
    assert!(is_object(&js_sys::Function::new_no_args("")));
    assert!(!is_object(&JsValue::NULL));
    assert!(!is_object(&JsValue::from_f64(1.0)));

    cleanup(&root);
}

#[wasm_bindgen_test]
fn test_height_and_viewport() {
    let root = fixture(r#"<div style="position: fixed; top: 0; left: 0; height: 40px; width: 40px;"></div>"#);
    let inner = root.first_element_child().unwrap();

    assert!(get_height(&inner) >= 40);
    assert!(is_element_in_viewport(&inner).unwrap());

    inner
        .set_attribute("style", "position: fixed; top: -100px; left: 0; height: 40px; width: 40px;")
        .unwrap();
    assert!(!is_element_in_viewport(&inner).unwrap());

    cleanup(&root);
}

#[wasm_bindgen_test]
async fn test_debounce_fires_once_with_last_args() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let c = calls.clone();
    let debounced = set_debounce(move |arg: u32| c.borrow_mut().push(arg), 50);

    debounced.call(1);
    TimeoutFuture::new(10).await;
    debounced.call(2);
    TimeoutFuture::new(10).await;
    debounced.call(3);

    TimeoutFuture::new(120).await;
    assert_eq!(*calls.borrow(), vec![3]);
}

#[wasm_bindgen_test]
async fn test_throttle_fires_first_then_latest() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let c = calls.clone();
    let throttled = set_throttle(move |arg: u32| c.borrow_mut().push(arg), 50);

    throttled.call(1);
    assert_eq!(*calls.borrow(), vec![1]);
    TimeoutFuture::new(10).await;
    throttled.call(2);
    TimeoutFuture::new(10).await;
    throttled.call(3);

    TimeoutFuture::new(120).await;
    assert_eq!(*calls.borrow(), vec![1, 3]);
}

// ----------------------------------------------------------------------------
// API JS (bindings)
// ----------------------------------------------------------------------------

use dom_utilities::bindings::*;

fn js_obj(pairs: &[(&str, JsValue)]) -> JsValue {
    let obj = js_sys::Object::new();
    for (key, value) in pairs {
        js_sys::Reflect::set(&obj, &JsValue::from_str(key), value).unwrap();
    }
    obj.into()
}

fn js_get(obj: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(obj, &JsValue::from_str(key)).unwrap()
}

fn recording_handler() -> (Rc<RefCell<Vec<JsValue>>>, js_sys::Function) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let c = calls.clone();
    let handler = Closure::wrap(Box::new(move |arg: JsValue| c.borrow_mut().push(arg)) as Box<dyn FnMut(JsValue)>)
        .into_js_value()
        .unchecked_into::<js_sys::Function>();
    (calls, handler)
}

#[wasm_bindgen_test]
fn test_js_do_extend_skips_falsy_and_non_objects() {
    let sources: js_sys::Array = [
        JsValue::NULL,
        JsValue::FALSE,
        JsValue::from_f64(0.0),
        js_obj(&[("a", JsValue::from_f64(1.0))]),
        JsValue::from_str("texto"),
        js_obj(&[("a", JsValue::from_f64(3.0)), ("b", JsValue::from_f64(2.0))]),
    ]
    .iter()
    .collect();

    let merged = js_do_extend(JsValue::NULL, sources);

    assert_eq!(js_sys::Object::keys(merged.unchecked_ref()).length(), 2);
    assert_eq!(js_get(&merged, "a").as_f64(), Some(3.0));
    assert_eq!(js_get(&merged, "b").as_f64(), Some(2.0));
}

#[wasm_bindgen_test]
fn test_js_do_extend_keeps_out_object() {
    let out = js_obj(&[("z", JsValue::from_f64(0.0))]);
    let sources: js_sys::Array = [js_obj(&[("a", JsValue::TRUE)])].iter().collect();

    let merged = js_do_extend(out.clone(), sources);

    assert_eq!(merged, out);
    assert_eq!(js_get(&out, "a"), JsValue::TRUE);
    assert_eq!(js_get(&out, "z").as_f64(), Some(0.0));
}

#[wasm_bindgen_test]
fn test_js_set_attrs_guards_and_applies() {
    let root = fixture("<button></button>");
    let button = root.first_element_child().unwrap();
    let attrs = js_obj(&[("role", JsValue::from_str("tab")), ("tabindex", JsValue::from_f64(0.0))]);

    // No es un elemento: no se toca nada
    js_set_attrs(JsValue::from_str("button"), attrs.clone());
    assert_eq!(button.get_attribute("role"), None);

    // No es un objeto: no se toca nada
    js_set_attrs(button.clone().into(), JsValue::from_f64(3.0));
    assert!(!button.has_attributes());

    js_set_attrs(button.clone().into(), attrs);
    assert_eq!(button.get_attribute("role").as_deref(), Some("tab"));
    assert_eq!(button.get_attribute("tabindex").as_deref(), Some("0"));

    cleanup(&root);
}

#[wasm_bindgen_test]
fn test_js_get_index_sentinel() {
    let root = fixture("<i></i><i></i>");
    let items: js_sys::Array = query_all("i", Some(&root)).unwrap().into_iter().collect();
    let other = document().unwrap().create_element("i").unwrap();

    assert_eq!(js_get_index(items.clone().into(), items.get(1)), 1);
    assert_eq!(js_get_index(items.into(), other.into()), -1);

    cleanup(&root);
}

#[wasm_bindgen_test]
fn test_js_set_event_list_on_node_list() {
    let root = fixture("<a></a><a></a><a></a>");
    let nodes = root.query_selector_all("a").unwrap();
    let (calls, handler) = recording_handler();

    js_set_event_list(nodes.into(), "hit", handler).unwrap();
    for link in query_all("a", Some(&root)).unwrap() {
        trigger_event(&link, "hit").unwrap();
    }

    assert_eq!(calls.borrow().len(), 3);

    cleanup(&root);
}

#[wasm_bindgen_test]
fn test_js_get_closest_returns_null() {
    let root = fixture(r#"<div class="box"><span></span></div>"#);
    let span = root.query_selector("span").unwrap().unwrap();

    assert!(js_get_closest(span.clone(), ".nowhere").is_null());
    assert!(js_get_closest(span, ".box").is_object());

    cleanup(&root);
}

#[wasm_bindgen_test]
async fn test_js_debounce_defaults_to_config_delay() {
    let (calls, handler) = recording_handler();
    let debounced = js_set_debounce(handler, None);

    debounced.call1(&JsValue::UNDEFINED, &JsValue::from_f64(1.0)).unwrap();
    debounced.call1(&JsValue::UNDEFINED, &JsValue::from_f64(2.0)).unwrap();

    TimeoutFuture::new(CONFIG.debounce_delay_ms / 2).await;
    assert!(calls.borrow().is_empty());

    TimeoutFuture::new(CONFIG.debounce_delay_ms + 100).await;
    let received: Vec<Option<f64>> = calls.borrow().iter().map(|v| v.as_f64()).collect();
    assert_eq!(received, vec![Some(2.0)]);
}

#[wasm_bindgen_test]
fn test_js_throttle_defaults_to_config_delay() {
    let (calls, handler) = recording_handler();
    let throttled = js_set_throttle(handler, None);

    throttled.call1(&JsValue::UNDEFINED, &JsValue::from_f64(1.0)).unwrap();
    throttled.call1(&JsValue::UNDEFINED, &JsValue::from_f64(2.0)).unwrap();

    // Solo la primera es inmediata; la segunda queda para el final de la ventana
    assert_eq!(calls.borrow().len(), 1);
}

// ----------------------------------------------------------------------------
// Rollback de listeners y predicados
// ----------------------------------------------------------------------------

#[wasm_bindgen_test]
fn test_set_event_list_rolls_back_on_failure() {
    let root = fixture("<button></button>");
    let button = root.first_element_child().unwrap();
    let count = Rc::new(RefCell::new(0));

    // Un objeto plano no tiene addEventListener: el registro falla en él
    let not_a_target: web_sys::EventTarget = js_sys::Object::new().unchecked_into();
    let targets: Vec<web_sys::EventTarget> = vec![button.clone().into(), not_a_target];

    let c = count.clone();
    let result = set_event_list(&targets, "ping", move |_e: Event| *c.borrow_mut() += 1);
    assert!(result.is_err());

    trigger_event(&button, "ping").unwrap();
    assert_eq!(*count.borrow(), 0);

    cleanup(&root);
}

#[wasm_bindgen_test]
fn test_is_element_reads_node_type() {
    assert!(is_element(&js_obj(&[("nodeType", JsValue::from_f64(1.0))])));
    assert!(!is_element(&js_obj(&[("nodeType", JsValue::from_f64(3.0))])));
    assert!(!is_element(&JsValue::from_f64(1.0)));
}
