// ============================================================================
// QUERY - querySelectorAll y búsqueda de ancestros
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentFragment, Element, NodeList};

use super::element::document;
use super::selector::{closest, Selector};
use crate::error::DomResult;

/// Raíz sobre la que se puede ejecutar `querySelectorAll`
pub trait QueryRoot {
    fn query_selector_all(&self, selector: &str) -> Result<NodeList, JsValue>;
}

impl QueryRoot for Document {
    fn query_selector_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        Document::query_selector_all(self, selector)
    }
}

impl QueryRoot for Element {
    fn query_selector_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        Element::query_selector_all(self, selector)
    }
}

impl QueryRoot for DocumentFragment {
    fn query_selector_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        DocumentFragment::query_selector_all(self, selector)
    }
}

/// Elementos que coinciden con `selector`, en orden de documento.
/// Sin `context` se busca en todo el document.
pub fn query_all(selector: &str, context: Option<&dyn QueryRoot>) -> DomResult<Vec<Element>> {
    let list = match context {
        Some(root) => root.query_selector_all(selector)?,
        None => document()?.query_selector_all(selector)?,
    };

    Ok(node_list_elements(&list))
}

fn node_list_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Ancestro más cercano (incluido el propio elemento) que coincide con
/// `.clase`, `#id`, `[attr]`, `[attr=valor]` o un nombre de tag
pub fn get_closest(element: &Element, selector: &str) -> Option<Element> {
    closest(element.clone(), &Selector::parse(selector))
}
