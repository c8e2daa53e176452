mod error;
mod ip_addr;
mod ssn;

pub use error::DecodeError;
pub use ip_addr::{decode, encode, IpV4Addr};
pub use ssn::{DefaultStringHasher, Ssn, StringHasher, SSN_LENGTH};
