/// Índice de `item` dentro de `items`, recorriendo desde el final.
///
/// Para valores JS (`JsValue`, `Element`...) la igualdad es `===`, es decir
/// identidad de referencia.
pub fn get_index<T: PartialEq>(items: &[T], item: &T) -> Option<usize> {
    items.iter().rposition(|candidate| candidate == item)
}

/// Igual que [`get_index`] pero con el centinela `-1` de la API JS
pub fn get_index_or_sentinel<T: PartialEq>(items: &[T], item: &T) -> i32 {
    get_index(items, item)
        .and_then(|i| i32::try_from(i).ok())
        .unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_item_index() {
        let items = ["a", "b", "c"];
        assert_eq!(get_index(&items, &"b"), Some(1));
        assert_eq!(items[get_index(&items, &"c").unwrap()], "c");
    }

    #[test]
    fn test_scans_from_the_end() {
        let items = [1, 2, 1, 3];
        assert_eq!(get_index(&items, &1), Some(2));
    }

    #[test]
    fn test_missing_item() {
        let items = [1, 2, 3];
        assert_eq!(get_index(&items, &9), None);
        assert_eq!(get_index_or_sentinel(&items, &9), -1);
        assert_eq!(get_index::<u8>(&[], &0), None);
    }

    #[test]
    fn test_sentinel_variant_matches() {
        let items = ['x', 'y'];
        assert_eq!(get_index_or_sentinel(&items, &'y'), 1);
    }
}
