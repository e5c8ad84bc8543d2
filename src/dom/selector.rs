// ============================================================================
// SELECTOR - Selectores simples para `get_closest`
// ============================================================================
// Soporta: `.clase`, `#id`, `[atributo]`, `[atributo=valor]` y nombre de tag.
// Cualquier otra sintaxis se trata como tag y simplemente no coincide.
// ============================================================================

use web_sys::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Class(String),
    Id(String),
    Attribute { name: String, value: Option<String> },
    Tag(String),
}

impl Selector {
    pub fn parse(selector: &str) -> Self {
        if let Some(class) = selector.strip_prefix('.') {
            return Selector::Class(class.to_string());
        }

        if let Some(id) = selector.strip_prefix('#') {
            return Selector::Id(id.to_string());
        }

        if let Some(rest) = selector.strip_prefix('[') {
            let body = rest.strip_suffix(']').unwrap_or(rest);
            return match body.split_once('=') {
                Some((name, value)) => Selector::Attribute {
                    name: name.to_string(),
                    value: Some(value.replace(['"', '\''], "")),
                },
                None => Selector::Attribute {
                    name: body.to_string(),
                    value: None,
                },
            };
        }

        Selector::Tag(selector.to_string())
    }

    pub fn matches<T: SelectorTarget>(&self, node: &T) -> bool {
        match self {
            Selector::Class(class) => !class.is_empty() && node.has_class(class),
            Selector::Id(id) => !id.is_empty() && node.id() == *id,
            Selector::Attribute { name, value } => match node.attribute(name) {
                Some(actual) => value.as_ref().map_or(true, |expected| actual == *expected),
                None => false,
            },
            Selector::Tag(tag) => !tag.is_empty() && node.tag_name().eq_ignore_ascii_case(tag),
        }
    }
}

/// Nodo sobre el que se puede evaluar un [`Selector`] y subir por el árbol
pub trait SelectorTarget: Sized {
    fn has_class(&self, class: &str) -> bool;
    fn id(&self) -> String;
    fn attribute(&self, name: &str) -> Option<String>;
    fn tag_name(&self) -> String;
    /// Padre de tipo elemento; `None` al llegar al document
    fn parent(&self) -> Option<Self>;
}

impl SelectorTarget for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn id(&self) -> String {
        Element::id(self)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn tag_name(&self) -> String {
        Element::tag_name(self)
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }
}

/// Primer nodo (empezando por `start`) que coincide con `selector`
pub fn closest<T: SelectorTarget>(start: T, selector: &Selector) -> Option<T> {
    let mut current = Some(start);

    while let Some(node) = current {
        if selector.matches(&node) {
            return Some(node);
        }
        current = node.parent();
    }

    None
}
