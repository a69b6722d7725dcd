//! Own-property path checks.
//!
//! [`has_path`] walks a path through nested containers, descending only
//! through keys the current container holds directly. There is no fallback
//! to anything "inherited": a key is present at a level or it is not.

use serde_json::Value;

use crate::path::{Path, PathKey, MAX_SAFE_INTEGER};

/// A container that [`has_path`] can walk.
pub trait PathContainer {
    /// The child stored directly under `key`.
    fn own_child(&self, key: &PathKey) -> Option<&Self>;

    /// Element count for index-based access, if the container has a valid
    /// one (a non-negative integer no larger than 2^53 - 1).
    fn length(&self) -> Option<usize>;

    /// Whether the container is a true sequence or an arguments-like
    /// collection, as opposed to a mapping that merely has a `length`.
    fn is_array_like(&self) -> bool;
}

/// Check whether `path` is a chain of own properties of `container`.
///
/// If every key but the last matched, an in-bounds index into an
/// array-like container also counts, so holes in sparse sequences are
/// reported as present.
///
/// An empty key sequence is never present.
///
/// # Examples
///
/// ```
/// use object_path::has_path;
/// use serde_json::json;
///
/// let object = json!({ "a": { "b": 2 } });
/// assert!(has_path(&object, "a.b"));
/// assert!(!has_path(&object, "a.c"));
///
/// let list = json!([1, 2, 3]);
/// assert!(has_path(&list, "2"));
/// assert!(!has_path(&list, "5"));
/// ```
pub fn has_path<C>(container: &C, path: impl Into<Path>) -> bool
where
    C: PathContainer + ?Sized,
{
    let keys = path
        .into()
        .into_keys(|key| container.own_child(&PathKey::from(key)).is_some());

    let Some((last, parents)) = keys.split_last() else {
        return false;
    };

    let mut current = container;
    for key in parents {
        match current.own_child(key) {
            Some(child) => current = child,
            None => return false,
        }
    }

    if current.own_child(last).is_some() {
        return true;
    }

    let in_bounds = match (current.length(), last.as_index()) {
        (Some(length), Some(index)) => length > 0 && index < length,
        _ => false,
    };
    if in_bounds && current.is_array_like() {
        tracing::trace!(key = %last, "in-bounds index into array-like container");
        return true;
    }
    false
}

impl PathContainer for Value {
    fn own_child(&self, key: &PathKey) -> Option<&Self> {
        match self {
            Value::Object(map) => map.get(key.as_name().as_ref()),
            Value::Array(items) => key.as_index().and_then(|index| items.get(index)),
            _ => None,
        }
    }

    fn length(&self) -> Option<usize> {
        match self {
            Value::Array(items) => Some(items.len()),
            Value::Object(map) => map.get("length").and_then(valid_length),
            _ => None,
        }
    }

    // JSON has no arguments objects.
    fn is_array_like(&self) -> bool {
        matches!(self, Value::Array(_))
    }
}

fn valid_length(value: &Value) -> Option<usize> {
    let n = value.as_f64()?;
    if n < 0.0 || n.fract() != 0.0 || n > MAX_SAFE_INTEGER as f64 {
        return None;
    }
    usize::try_from(n as u64).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn test_nested_object_path() {
        let object = json!({ "a": { "b": 2 } });
        assert!(has_path(&object, "a.b"));
        assert!(has_path(&object, "a"));
        assert!(!has_path(&object, "a.c"));
        assert!(!has_path(&object, "a.b.c"));
        assert!(!has_path(&object, "x.b"));
    }

    #[test]
    fn test_key_sequence_path() {
        let object = json!({ "a": { "b": 2 } });
        assert!(has_path(&object, Path::keys(["a", "b"])));
        assert!(!has_path(&object, Path::keys(["a", "c"])));
    }

    #[test]
    fn test_bracket_index_path() {
        let object = json!({ "a": [{ "b": 1 }, { "c": 2 }] });
        assert!(has_path(&object, "a[0].b"));
        assert!(has_path(&object, "a[1].c"));
        assert!(!has_path(&object, "a[1].b"));
        assert!(!has_path(&object, "a[2]"));
        assert!(has_path(
            &object,
            Path::keys([PathKey::from("a"), PathKey::from(1usize), PathKey::from("c")])
        ));
    }

    #[test]
    fn test_null_values_are_present_but_not_descended() {
        let object = json!({ "a": null });
        assert!(has_path(&object, "a"));
        assert!(!has_path(&object, "a.b"));
    }

    #[test]
    fn test_root_key_containing_dots() {
        let object = json!({ "a.b": 1, "a": { "c": 2 } });
        assert!(has_path(&object, "a.b"));
        assert!(has_path(&object, "a.c"));
        assert!(has_path(&object, Path::keys(["a.b"])));
    }

    #[test]
    fn test_array_indices() {
        let list = json!([1, 2, 3]);
        assert!(has_path(&list, "0"));
        assert!(has_path(&list, "2"));
        assert!(!has_path(&list, "5"));
        assert!(!has_path(&list, "01"));
        assert!(!has_path(&list, "-1"));
    }

    #[test]
    fn test_array_length_is_not_an_own_key() {
        let list = json!(["x", "y"]);
        assert!(!has_path(&list, "length"));
    }

    #[test]
    fn test_object_length_property_is_own_key_but_not_array_like() {
        let object = json!({ "length": 3, "0": "a" });
        assert!(has_path(&object, "length"));
        assert!(has_path(&object, "0"));
        assert!(!has_path(&object, "1"));
    }

    #[test]
    fn test_empty_path_is_absent() {
        let object = json!({ "": 1 });
        assert!(!has_path(&object, Path::Keys(Vec::new())));
        assert!(has_path(&object, ""));
    }

    #[test]
    fn test_scalars_have_no_paths() {
        assert!(!has_path(&json!(5), "a"));
        assert!(!has_path(&json!("abc"), "0"));
        assert!(!has_path(&Value::Null, "a"));
    }

    #[test]
    fn test_valid_length() {
        assert_eq!(valid_length(&json!(3)), Some(3));
        assert_eq!(valid_length(&json!(3.0)), Some(3));
        assert_eq!(valid_length(&json!(3.5)), None);
        assert_eq!(valid_length(&json!(-1)), None);
        assert_eq!(valid_length(&json!("3")), None);
    }

    /// A sequence with holes, or an arguments-like bag of indexed values.
    #[derive(Debug)]
    enum Node {
        Leaf,
        Sparse {
            length: usize,
            slots: BTreeMap<usize, Node>,
            arguments: bool,
        },
        Record(BTreeMap<String, Node>),
    }

    impl PathContainer for Node {
        fn own_child(&self, key: &PathKey) -> Option<&Self> {
            match self {
                Node::Leaf => None,
                Node::Sparse { slots, .. } => key.as_index().and_then(|i| slots.get(&i)),
                Node::Record(fields) => fields.get(key.as_name().as_ref()),
            }
        }

        fn length(&self) -> Option<usize> {
            match self {
                Node::Sparse { length, .. } => Some(*length),
                _ => None,
            }
        }

        fn is_array_like(&self) -> bool {
            matches!(self, Node::Sparse { .. })
        }
    }

    fn sparse(length: usize, filled: &[usize], arguments: bool) -> Node {
        Node::Sparse {
            length,
            slots: filled.iter().map(|i| (*i, Node::Leaf)).collect(),
            arguments,
        }
    }

    #[test]
    fn test_holes_in_sparse_sequences_count_as_present() {
        let list = sparse(4, &[0, 3], false);
        assert!(has_path(&list, "1"));
        assert!(has_path(&list, "3"));
        assert!(!has_path(&list, "4"));
    }

    #[test]
    fn test_arguments_like_collections_use_the_index_fallback() {
        let args = sparse(2, &[], true);
        assert!(has_path(&args, "0"));
        assert!(!has_path(&args, "2"));
        if let Node::Sparse { arguments, .. } = &args {
            assert!(*arguments);
        }
    }

    #[test]
    fn test_index_fallback_only_applies_to_the_final_key() {
        let mut fields = BTreeMap::new();
        fields.insert("list".to_string(), sparse(3, &[], false));
        let root = Node::Record(fields);
        assert!(has_path(&root, "list[2]"));
        assert!(!has_path(&root, "list[2].x"));
        assert!(!has_path(&root, "list[3]"));
    }

    #[test]
    fn test_empty_sparse_sequence_has_no_indices() {
        let list = sparse(0, &[], false);
        assert!(!has_path(&list, "0"));
    }
}
