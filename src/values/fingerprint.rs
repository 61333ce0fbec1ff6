use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use digest::Digest;
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;

use crate::error::Result;
use crate::prelude::{FromHex, ToHex};

/// Content hash of a structural serialization.
///
/// Holds the raw 256-bit digest output; the crate standardizes on blake3,
/// but any [`Digest`] with a 32-byte output fits.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Fingerprint([u8; 32]);

impl Display for Fingerprint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl std::fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Arbitrary for Fingerprint {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        any::<[u8; 32]>().prop_map(Fingerprint::new).boxed()
    }
}

impl Hash for Fingerprint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl Fingerprint {
    /// Creates a new Fingerprint from any type that can be converted into [u8; 32].
    pub fn new<T: Into<[u8; 32]>>(data: T) -> Self {
        Fingerprint(data.into())
    }

    pub fn from_slice(slice: &[u8]) -> Self {
        let mut inner = [0u8; 32];
        inner.copy_from_slice(slice);
        Fingerprint(inner)
    }

    /// Returns a zero fingerprint (all bytes set to 0).
    pub fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Runs the given digest algorithm over `data` and wraps its output.
    pub fn digest<D: Digest>(data: &[u8]) -> Self {
        let mut hasher = D::new();
        hasher.update(data);
        Fingerprint::from_slice(&hasher.finalize())
    }
}

impl Default for Fingerprint {
    fn default() -> Self {
        Fingerprint::zero()
    }
}

impl From<[u8; 32]> for Fingerprint {
    fn from(array: [u8; 32]) -> Self {
        Fingerprint(array)
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Fingerprint> for [u8; 32] {
    fn from(val: Fingerprint) -> Self {
        val.0
    }
}

impl FromHex for Fingerprint {
    fn from_hex(hex: &str) -> Result<Self> {
        let bytes = hex::decode(hex)?;

        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength)?;
        }

        Ok(Self::from_slice(&bytes))
    }
}

impl ToHex for Fingerprint {
    fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use test_strategy::proptest;

    use crate::prelude::*;

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Fingerprint::default(), Fingerprint::zero());
    }

    #[test]
    fn test_rejects_wrong_length_hex() {
        assert!(Fingerprint::from_hex("abcd").is_err());
        assert!(Fingerprint::from_hex("not hex at all").is_err());
    }

    #[proptest(fork = false)]
    fn test_hex_roundtrip(a: Fingerprint) {
        prop_assert_eq!(a, Fingerprint::from_hex(&a.to_hex())?);
    }

    #[proptest(fork = false)]
    fn test_hex_is_different_on_different_objects(a: Fingerprint, b: Fingerprint) {
        prop_assert_eq!(a == b, a.to_hex() == b.to_hex());
    }

    #[proptest(fork = false)]
    fn test_digest_is_deterministic(data: Vec<u8>) {
        prop_assert_eq!(
            Fingerprint::digest::<blake3::Hasher>(&data),
            Fingerprint::digest::<blake3::Hasher>(&data)
        );
    }

    #[proptest(fork = false)]
    fn test_digest_output_is_not_the_input(data: Vec<u8>) {
        prop_assert_ne!(
            Fingerprint::digest::<blake3::Hasher>(&data),
            Fingerprint::zero()
        );
    }
}
