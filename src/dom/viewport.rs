// ============================================================================
// VIEWPORT - ¿Está el elemento completamente visible?
// ============================================================================

use web_sys::{DomRect, Element};

use super::element::{document, window};
use crate::error::DomResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Bounds {
    pub fn fits_within(&self, width: f64, height: f64) -> bool {
        self.top >= 0.0 && self.left >= 0.0 && self.bottom <= height && self.right <= width
    }
}

impl From<&DomRect> for Bounds {
    fn from(rect: &DomRect) -> Self {
        Self {
            top: rect.top(),
            left: rect.left(),
            bottom: rect.bottom(),
            right: rect.right(),
        }
    }
}

/// Tamaño del viewport (ancho, alto). Si `innerWidth`/`innerHeight` no
/// están o valen 0 se usa `documentElement.clientWidth/clientHeight`.
pub fn viewport_size() -> DomResult<(f64, f64)> {
    let win = window()?;
    let inner_width = win.inner_width().ok().and_then(|v| v.as_f64()).filter(|w| *w > 0.0);
    let inner_height = win.inner_height().ok().and_then(|v| v.as_f64()).filter(|h| *h > 0.0);

    if let (Some(width), Some(height)) = (inner_width, inner_height) {
        return Ok((width, height));
    }

    let root = document()?.document_element();
    let client_width = root.as_ref().map(|r| f64::from(r.client_width())).unwrap_or(0.0);
    let client_height = root.as_ref().map(|r| f64::from(r.client_height())).unwrap_or(0.0);

    Ok((
        inner_width.unwrap_or(client_width),
        inner_height.unwrap_or(client_height),
    ))
}

pub fn is_element_in_viewport(element: &Element) -> DomResult<bool> {
    let bounds = Bounds::from(&element.get_bounding_client_rect());
    let (width, height) = viewport_size()?;
    Ok(bounds.fits_within(width, height))
}
