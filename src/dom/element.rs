// ============================================================================
// ELEMENT HELPERS - Funciones básicas sobre elementos
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node, Window};

use crate::error::{DomError, DomResult};

/// Obtener window global
pub fn window() -> DomResult<Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Obtener document
pub fn document() -> DomResult<Document> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Nombre de atributo aceptable por `setAttribute`
pub fn is_valid_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };

    if first.is_ascii_digit() || first == '-' || first == '.' {
        return false;
    }

    name.chars().all(|c| {
        !c.is_whitespace()
            && !c.is_control()
            && !matches!(c, '"' | '\'' | '>' | '<' | '/' | '=' | '`')
    })
}

/// Establecer varios atributos de una vez.
///
/// Si algún nombre es inválido no se modifica nada: se loguea el error y se
/// devuelve `InvalidAttributeName`.
pub fn set_attrs<I, K, V>(element: &Element, attrs: I) -> DomResult<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let attrs: Vec<(K, V)> = attrs.into_iter().collect();

    if let Some((name, _)) = attrs
        .iter()
        .find(|(name, _)| !is_valid_attribute_name(name.as_ref()))
    {
        let name = name.as_ref().to_string();
        log::error!(
            "❌ [SET-ATTRS] Atributo inválido {:?} en <{}>, no se aplica ningún cambio",
            name,
            element.tag_name().to_lowercase()
        );
        return Err(DomError::InvalidAttributeName(name));
    }

    for (name, value) in &attrs {
        element.set_attribute(name.as_ref(), value.as_ref())?;
    }

    Ok(())
}

/// Verificar si un valor JS es un nodo ELEMENT_NODE.
/// Se lee `nodeType` en lugar de `instanceof` para aceptar nodos de otros
/// realms (iframes).
pub fn is_element(value: &JsValue) -> bool {
    if !value.is_object() {
        return false;
    }

    js_sys::Reflect::get(value, &JsValue::from_str("nodeType"))
        .ok()
        .and_then(|node_type| node_type.as_f64())
        == Some(f64::from(Node::ELEMENT_NODE))
}

/// Verificar si un valor JS es un objeto (no null) o una función
pub fn is_object(value: &JsValue) -> bool {
    value.is_function() || value.is_object()
}

/// Mayor de scrollHeight / offsetHeight / clientHeight
pub fn get_height(element: &Element) -> i32 {
    let offset_height = element
        .dyn_ref::<HtmlElement>()
        .map(HtmlElement::offset_height)
        .unwrap_or(0);

    element
        .scroll_height()
        .max(offset_height)
        .max(element.client_height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_attribute_names() {
        for name in ["role", "tabindex", "data-tab", "aria-selected", "xlink:href", "_x"] {
            assert!(is_valid_attribute_name(name), "{name} debería ser válido");
        }
    }

    #[test]
    fn test_invalid_attribute_names() {
        for name in ["", "a b", "1st", "-x", "a=b", "a\"b", "<x>", "a/b", "a\tb"] {
            assert!(!is_valid_attribute_name(name), "{name:?} debería ser inválido");
        }
    }
}
