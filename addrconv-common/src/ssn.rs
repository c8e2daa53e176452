use std::{
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher},
};

/// Width of the SSN field in node PDUs.
pub const SSN_LENGTH: usize = 12;

/// Hashes an identifier string to an integer.
pub trait StringHasher {
    fn hash_str(&self, value: &str) -> u64;
}

/// Hashes with the std `DefaultHasher`, whose `new()` instances are all keyed
/// the same, so equal strings hash equally between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultStringHasher;

impl StringHasher for DefaultStringHasher {
    fn hash_str(&self, value: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }
}

/// A social security number.
///
/// Hashing goes through `H`. Comparing against a raw string compares the
/// wrapped value, and two wrappers are equal when their values are.
#[derive(Clone)]
pub struct Ssn<H: StringHasher = DefaultStringHasher> {
    value: String,
    hasher: H,
}

impl Ssn {
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_hasher(value, DefaultStringHasher)
    }
}

impl<H: StringHasher> Ssn<H> {
    pub fn with_hasher(value: impl Into<String>, hasher: H) -> Self {
        Self {
            value: value.into(),
            hasher,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn hash_code(&self) -> u64 {
        self.hasher.hash_str(&self.value)
    }

    /// The first `SSN_LENGTH` chars of the value, one byte per char as the
    /// node PDUs carry them.
    pub fn wire_bytes(&self) -> Vec<u8> {
        self.value
            .chars()
            .take(SSN_LENGTH)
            .map(|c| c as u8)
            .collect()
    }
}

/// Shows the hash only.
impl<H: StringHasher> fmt::Debug for Ssn<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ssn").field("hash", &self.hash_code()).finish()
    }
}

impl<H: StringHasher> Hash for Ssn<H> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        state.write_u64(self.hash_code());
    }
}

impl<H: StringHasher> PartialEq for Ssn<H> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<H: StringHasher> Eq for Ssn<H> {}

impl<H: StringHasher> PartialEq<str> for Ssn<H> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<H: StringHasher> PartialEq<&str> for Ssn<H> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl<H: StringHasher> PartialEq<String> for Ssn<H> {
    fn eq(&self, other: &String) -> bool {
        &self.value == other
    }
}
