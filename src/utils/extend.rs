// ============================================================================
// EXTEND - Merge superficial de objetos (equivalente a jQuery.extend)
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::error::DomResult;

/// Copiar las claves de cada fuente en `out`; la última fuente gana.
/// Las fuentes `None` se saltan. No hay merge profundo.
pub fn do_extend<'a, I>(out: Option<Map<String, Value>>, sources: I) -> Map<String, Value>
where
    I: IntoIterator<Item = Option<&'a Map<String, Value>>>,
{
    let mut out = out.unwrap_or_default();

    for source in sources.into_iter().flatten() {
        for (key, value) in source {
            out.insert(key.clone(), value.clone());
        }
    }

    out
}

/// Variante sobre `Value`: solo los objetos aportan claves, el resto
/// (null, false, 0, "", arrays, escalares) se ignora.
pub fn extend_value(out: Value, sources: &[Value]) -> Value {
    let out = match out {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    Value::Object(do_extend(Some(out), sources.iter().map(Value::as_object)))
}

/// Defaults tipados + overrides parciales en JSON
///
/// ```ignore
/// let opts: SliderOptions = extend_typed(&SliderOptions::default(), &[user_opts])?;
/// ```
pub fn extend_typed<T>(defaults: &T, overrides: &[Value]) -> DomResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let base = serde_json::to_value(defaults)?;
    let merged = extend_value(base, overrides);
    Ok(serde_json::from_value(merged)?)
}
