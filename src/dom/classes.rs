// ============================================================================
// CLASES - add / remove / has / toggle sobre classList
// ============================================================================

use web_sys::Element;

use crate::error::DomResult;

/// Agregar clase(s). Acepta varias separadas por espacios.
pub fn set_class(element: &Element, class: &str) -> DomResult<()> {
    let class_list = element.class_list();
    for token in class.split_whitespace() {
        class_list.add_1(token)?;
    }
    Ok(())
}

/// Remover clase(s). Acepta varias separadas por espacios.
pub fn unset_class(element: &Element, class: &str) -> DomResult<()> {
    let class_list = element.class_list();
    for token in class.split_whitespace() {
        class_list.remove_1(token)?;
    }
    Ok(())
}

/// Verificar si tiene clase
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Alternar clase; devuelve si quedó puesta
pub fn toggle_class(element: &Element, class: &str) -> DomResult<bool> {
    if has_class(element, class) {
        unset_class(element, class)?;
        Ok(false)
    } else {
        set_class(element, class)?;
        Ok(true)
    }
}
