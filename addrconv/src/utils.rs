use addrconv_common::{Ssn, StringHasher};
use anyhow::Context;

/// Accepts a decimal or `0x` prefixed hex literal.
pub fn parse_u32(literal: &str) -> anyhow::Result<u32> {
    let literal = literal.trim();
    match literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16)
            .with_context(|| format!("invalid hex address {}", literal)),
        None => literal
            .parse::<u32>()
            .with_context(|| format!("invalid address {}", literal)),
    }
}

pub fn hash_to_string<H: StringHasher>(ssn: &Ssn<H>) -> String {
    hex::encode(ssn.hash_code().to_be_bytes())
}
