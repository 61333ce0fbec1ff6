use proptest::{collection::vec, prelude::*, sample::SizeRange};

use crate::prelude::*;

/// Strategy for left-leaning chains with one populated node per level.
pub fn spine<K, V>(depth: impl Into<SizeRange>) -> impl Strategy<Value = Map<K, V>>
where
    K: Arbitrary + Clone + 'static,
    V: Arbitrary + Clone + 'static,
{
    vec(any::<(K, V)>(), depth).prop_map(|pairs| {
        pairs
            .into_iter()
            .fold(Map::default(), |child, (key, value)| {
                Map::node(key, value, child, None)
            })
    })
}

/// Strategy for maps that always hold at least one key.
pub fn populated<K, V>() -> impl Strategy<Value = Map<K, V>>
where
    K: Arbitrary + Clone + 'static,
    V: Arbitrary + Clone + 'static,
{
    any::<Map<K, V>>().prop_filter("populated maps only", |map| !map.is_empty())
}
