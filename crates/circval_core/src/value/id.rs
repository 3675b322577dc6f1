use std::fmt;

use sha2::{Digest, Sha256};

/// Fixed-size content identifier produced by value hashing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId(pub [u8; 32]);

impl ContentId {
	/// Hash raw bytes.
	pub fn of_bytes(bytes: &[u8]) -> Self {
		Self(Sha256::digest(bytes).into())
	}

	/// Hash a string, as used for field names and string scalars.
	pub fn of_str(text: &str) -> Self {
		Self::of_bytes(text.as_bytes())
	}

	/// Lowercase hex rendering.
	pub fn to_hex(&self) -> String {
		hex::encode(self.0)
	}
}

impl fmt::Display for ContentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_hex())
	}
}

impl fmt::Debug for ContentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ContentId({})", self.to_hex())
	}
}

/// Blend sub-identifiers, in order, into one identifier.
///
/// Order matters: `blend(&[a, b]) != blend(&[b, a])` for distinct `a`, `b`.
pub fn blend(ids: &[ContentId]) -> ContentId {
	let mut hasher = Sha256::new();
	for id in ids {
		hasher.update(id.0);
	}
	ContentId(hasher.finalize().into())
}
