// ============================================================================
// DOM UTILITIES - Helpers DOM ligeros en Rust puro (WASM)
// ============================================================================
// Caja de herramientas plana, sin estado compartido:
// - dom:     atributos, clases, eventos, ancestros, viewport
// - timing:  debounce / throttle sobre setTimeout
// - utils:   merge de objetos, índice en listas
// - bindings (feature "js-api"): mismos helpers exportados a JavaScript
// ============================================================================

pub mod config;
pub mod dom;
pub mod error;
pub mod timing;
pub mod utils;

#[cfg(feature = "js-api")]
pub mod bindings;

use std::sync::Once;

pub use config::{DomUtilsConfig, CONFIG};
pub use dom::*;
pub use error::{DomError, DomResult};
pub use timing::*;
pub use utils::*;

static INIT: Once = Once::new();

/// Inicializar panic hook + logging (solo la primera vez)
pub fn init() {
    INIT.call_once(|| {
        // Inicializar panic hook para mejor debugging
        console_error_panic_hook::set_once();

        if CONFIG.is_logging_enabled() {
            wasm_logger::init(wasm_logger::Config::new(CONFIG.level()));
            log::info!("🚀 DOM Utilities listo (log level: {})", CONFIG.level());
        }
    });
}

#[cfg(feature = "js-api")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    init();
}
