use std::fmt::{self, Display, Formatter};

use proptest::prelude::*;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// A key/value map stored as an unbalanced binary search tree.
///
/// A `Map` is simultaneously a tree and a node within that tree: every
/// populated node owns its two subtrees outright, and the empty tree is a
/// first-class variant rather than a null child pointer. Construction never
/// validates key ordering against the subtrees, so the shape is a plain
/// container and callers that want search semantics must arrange keys
/// themselves.
///
/// Nodes are immutable once built. There is no insert, delete or traversal
/// surface; a tree is assembled bottom-up from its children in a single
/// construction call per node.
///
/// # Structural form
///
/// Serialization (via [`serde::Serialize`]) produces a nested sequence that
/// mirrors the tree shape:
///
/// * empty map: `[]`
/// * leaf: `[[value, key]]`
/// * interior node: `[key, value, left, right]`, with both subtrees
///   serialized recursively
///
/// The reversed pair order in the leaf case is part of the wire format
/// consumed by existing readers and must not be normalized.
///
/// # Limits
///
/// Rendering and serialization recurse once per level, so their stack usage
/// grows with tree height. Degenerate chains of pathological depth should be
/// walked iteratively by the caller instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Map<K, V> {
    /// The canonical empty map.
    Empty,

    /// A populated node holding one key/value pair and two owned subtrees.
    Node {
        key: K,
        value: V,
        left: Box<Map<K, V>>,
        right: Box<Map<K, V>>,
    },
}

impl<K, V> Map<K, V> {
    /// Creates the empty map.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Creates a populated node with both children empty.
    pub fn leaf(key: K, value: V) -> Self {
        Self::node(key, value, None, None)
    }

    /// Creates a populated node with the given children.
    ///
    /// Children may be passed as a `Map` directly, as `Some(map)`, or as
    /// `None`. An absent child and an explicitly empty child are the same
    /// thing: both are stored as [`Map::Empty`].
    pub fn node(
        key: K,
        value: V,
        left: impl Into<Option<Map<K, V>>>,
        right: impl Into<Option<Map<K, V>>>,
    ) -> Self {
        Self::Node {
            key,
            value,
            left: Box::new(left.into().unwrap_or_default()),
            right: Box::new(right.into().unwrap_or_default()),
        }
    }

    /// The key of this node, if it is populated.
    pub fn key(&self) -> Option<&K> {
        match self {
            Self::Empty => None,
            Self::Node { key, .. } => Some(key),
        }
    }

    /// The value of this node, if it is populated.
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Empty => None,
            Self::Node { value, .. } => Some(value),
        }
    }

    /// Whether this map holds no key at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether this node is populated with both children empty.
    ///
    /// Inspects the immediate children only.
    pub fn is_leaf(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Node { left, right, .. } => left.is_empty() && right.is_empty(),
        }
    }

    /// The left subtree. The empty map is its own left subtree.
    pub fn left(&self) -> &Map<K, V> {
        match self {
            Self::Empty => self,
            Self::Node { left, .. } => left,
        }
    }

    /// The right subtree. The empty map is its own right subtree.
    pub fn right(&self) -> &Map<K, V> {
        match self {
            Self::Empty => self,
            Self::Node { right, .. } => right,
        }
    }
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::Empty
    }
}

/// Renders the call-style textual form: `Map()` for the empty map,
/// `Map(k,v)` for a leaf and `Map(k,v,left,right)` for an interior node,
/// recursing into both children.
impl<K: Display, V: Display> Display for Map<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Map()"),
            Self::Node {
                key,
                value,
                left,
                right,
            } => {
                if self.is_leaf() {
                    write!(f, "Map({},{})", key, value)
                } else {
                    write!(f, "Map({},{},{},{})", key, value, left, right)
                }
            }
        }
    }
}

impl<K: Serialize, V: Serialize> Serialize for Map<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Empty => serializer.serialize_seq(Some(0))?.end(),
            // The leaf pair is emitted value first; readers of the format
            // depend on this order.
            Self::Node { key, value, .. } if self.is_leaf() => {
                let mut seq = serializer.serialize_seq(Some(1))?;
                seq.serialize_element(&(value, key))?;
                seq.end()
            }
            Self::Node {
                key,
                value,
                left,
                right,
            } => {
                let mut seq = serializer.serialize_seq(Some(4))?;
                seq.serialize_element(key)?;
                seq.serialize_element(value)?;
                seq.serialize_element(left)?;
                seq.serialize_element(right)?;
                seq.end()
            }
        }
    }
}

impl<K, V> Arbitrary for Map<K, V>
where
    K: Arbitrary + Clone + 'static,
    V: Arbitrary + Clone + 'static,
{
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let node = prop_oneof![
            Just(Map::Empty),
            (any::<K>(), any::<V>()).prop_map(|(key, value)| Map::leaf(key, value)),
        ];

        node.prop_recursive(4, 16, 2, |inner| {
            (any::<K>(), any::<V>(), inner.clone(), inner)
                .prop_map(|(key, value, left, right)| Map::node(key, value, left, right))
        })
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use proptest::{collection::vec, prelude::*};
    use serde_json::json;
    use test_strategy::proptest;

    use crate::{prelude::*, testing::*};

    use super::Map;

    pub type NumMap = Map<u64, u64>;
    pub type TextMap = Map<String, String>;

    crate::test_map_properties!(NumMap);
    crate::test_map_properties!(TextMap);

    #[test]
    fn test_reference_tree_shapes() {
        let root = Map::node(0u64, "z", Map::leaf(1, "x"), Map::leaf(2, "y"));

        assert!(!root.is_empty());
        assert!(!root.is_leaf());
        assert!(root.left().is_leaf());
        assert!(root.right().is_leaf());
    }

    #[test]
    fn test_reference_tree_serialization() {
        let leaf = Map::leaf(1u64, "x");
        let root = Map::node(0u64, "z", Map::leaf(1, "x"), Map::leaf(2, "y"));

        assert_eq!(leaf.to_json().unwrap(), json!([["x", 1]]));
        assert_eq!(root.to_json().unwrap(), json!([0, "z", [["x", 1]], [["y", 2]]]));
    }

    #[test]
    fn test_reference_tree_rendering() {
        let root = Map::node(0u64, "z", Map::leaf(1, "x"), Map::leaf(2, "y"));

        assert_eq!(Map::<u64, &str>::new().to_string(), "Map()");
        assert_eq!(Map::leaf(1u64, "x").to_string(), "Map(1,x)");
        assert_eq!(root.to_string(), "Map(0,z,Map(1,x),Map(2,y))");
    }

    #[proptest(fork = false)]
    fn test_absent_and_explicit_empty_children_are_equivalent(key: u64, value: u64) {
        let absent = Map::node(key, value, None, None);
        let explicit = Map::node(key, value, Map::new(), Map::new());

        prop_assert!(absent.is_leaf());
        prop_assert!(absent.left().is_empty());
        prop_assert!(explicit.right().is_empty());
        prop_assert_eq!(&absent, &explicit);
        prop_assert_eq!(absent.to_json()?, explicit.to_json()?);
    }

    #[proptest(fork = false)]
    fn test_nodes_with_one_child_are_interior(key: u64, value: u64, child: (u64, u64)) {
        let map = Map::node(key, value, Map::leaf(child.0, child.1), None);

        prop_assert!(!map.is_leaf());
        prop_assert!(!map.left().is_empty());
        prop_assert!(map.right().is_empty());
    }

    #[proptest(fork = false)]
    fn test_key_and_value_are_present_iff_populated(map: NumMap) {
        prop_assert_eq!(map.is_empty(), map.key().is_none());
        prop_assert_eq!(map.key().is_some(), map.value().is_some());
    }

    #[proptest(fork = false)]
    fn test_leaf_serialization_pairs_value_before_key(key: u64, value: u64) {
        let json = Map::leaf(key, value).to_json()?;

        prop_assert_eq!(json, json!([[value, key]]));
    }

    #[proptest(fork = false)]
    fn test_rendering_nests_once_per_level(
        #[strategy(1usize..8)] depth: usize,
        #[strategy(spine::<u64, u64>(#depth))] map: NumMap,
    ) {
        prop_assert_eq!(map.to_string().matches("Map(").count(), 2 * depth - 1);
    }

    #[proptest(fork = false)]
    fn test_populated_maps_serialize_to_populated_arrays(
        #[strategy(populated::<u64, u64>())] map: NumMap,
    ) {
        prop_assert_ne!(map.to_json()?, json!([]));
    }

    #[proptest(fork = false)]
    fn test_fingerprint_is_digest_of_structural_bytes(map: NumMap) {
        prop_assert_eq!(
            map.fingerprint()?,
            Fingerprint::digest::<blake3::Hasher>(&map.to_json_bytes()?)
        );
    }

    #[proptest(fork = false)]
    fn test_deep_chains_serialize_at_every_level(
        #[strategy(vec(any::<(u64, u64)>(), 1..8))] pairs: Vec<(u64, u64)>,
    ) {
        let map = pairs
            .iter()
            .fold(Map::new(), |child, (key, value)| {
                Map::node(*key, *value, child, None)
            });

        let mut json = map.to_json()?;

        // Walk back down the chain: every interior level carries its pair in
        // front of the nested left subtree, and the innermost level is a leaf.
        for (key, value) in pairs.iter().rev() {
            let items = json.as_array().unwrap().clone();

            if items.len() == 4 {
                prop_assert_eq!(&items[0], &json!(key));
                prop_assert_eq!(&items[1], &json!(value));
                prop_assert_eq!(&items[3], &json!([]));
                json = items[2].clone();
            } else {
                prop_assert_eq!(&json, &json!([[value, key]]));
                json = json!([]);
            }
        }

        prop_assert_eq!(json, json!([]));
    }
}
