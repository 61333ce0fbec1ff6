mod error;

pub mod collections;
pub mod prelude;
pub mod testing;
pub mod values;

#[doc(hidden)]
/// This is a hidden module to make the macros defined on this crate available for the users.
pub mod __dependencies {
    pub use paste;
    pub use proptest;
    pub use serde_json;
    pub use test_strategy;
}

#[macro_export]
macro_rules! test_map_properties {
    ($type:ty) => {
        $crate::__dependencies::paste::paste! {
            mod [<test_map_$type:snake>] {
                use $crate::__dependencies::{
                    proptest::prelude::*,
                    serde_json::json,
                    test_strategy,
                };
                use $crate::prelude::ToJson;

                use super::$type;

                #[test]
                fn test_default_is_empty() {
                    assert!(<$type>::default().is_empty());
                    assert!(!<$type>::default().is_leaf());
                }

                #[test]
                fn test_empty_children_are_empty() {
                    let empty = <$type>::new();

                    assert!(empty.left().is_empty());
                    assert!(empty.right().is_empty());
                }

                #[test]
                fn test_empty_serializes_to_an_empty_array() {
                    assert_eq!(<$type>::new().to_json().unwrap(), json!([]));
                }

                #[test]
                fn test_empty_renders_as_bare_literal() {
                    assert_eq!(<$type>::new().to_string(), "Map()");
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_leaves_are_never_empty(map: $type) {
                    prop_assert!(!(map.is_leaf() && map.is_empty()));
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_leaf_agrees_with_child_emptiness(map: $type) {
                    prop_assert_eq!(
                        map.is_leaf(),
                        !map.is_empty() && map.left().is_empty() && map.right().is_empty()
                    );
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_serialization_shape_follows_the_node_kind(map: $type) {
                    let json = map.to_json()?;
                    let len = json.as_array().map(Vec::len);

                    if map.is_empty() {
                        prop_assert_eq!(len, Some(0));
                    } else if map.is_leaf() {
                        prop_assert_eq!(len, Some(1));
                    } else {
                        prop_assert_eq!(len, Some(4));
                    }
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_leaves_serialize_to_a_single_pair(map: $type) {
                    prop_assume!(map.is_leaf());

                    let json = map.to_json()?;

                    prop_assert_eq!(json[0].as_array().map(Vec::len), Some(2));
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_serialization_recurses_into_children(map: $type) {
                    prop_assume!(!map.is_empty() && !map.is_leaf());

                    let json = map.to_json()?;

                    prop_assert_eq!(&json[2], &map.left().to_json()?);
                    prop_assert_eq!(&json[3], &map.right().to_json()?);
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_rendering_embeds_both_children(map: $type) {
                    prop_assume!(!map.is_empty() && !map.is_leaf());

                    let rendered = map.to_string();

                    prop_assert!(rendered.contains(&map.left().to_string()));
                    prop_assert!(rendered.contains(&map.right().to_string()));
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_fingerprint_matches_serialization_equality(a: $type, b: $type) {
                    prop_assert_eq!(
                        a.to_json()? == b.to_json()?,
                        a.fingerprint()? == b.fingerprint()?
                    );
                }
            }
        }
    };
}
