mod fingerprint;

pub use fingerprint::*;
