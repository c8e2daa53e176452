use std::{fmt, net::Ipv4Addr, str::FromStr};

use crate::DecodeError;

/// Renders `address` as four dotted octets, least significant byte first.
pub fn encode(address: u32) -> String {
    IpV4Addr::from(address).to_string()
}

/// Parses the first four dot separated components of `text` and packs them
/// least significant byte first.
///
/// Trailing empty components are dropped before counting, so `"1.2.3."` has
/// three components. Components are not masked to a byte, so `"256.0.0.0"`
/// yields `0x100`, and bits shifted past bit 31 are lost. Anything after the
/// fourth component is ignored.
pub fn decode(text: &str) -> Result<u32, DecodeError> {
    let mut parts: Vec<&str> = text.split('.').collect();
    if !text.is_empty() {
        while parts.last().map_or(false, |p| p.is_empty()) {
            parts.pop();
        }
    }
    let found = parts.len() as u32;
    let mut res = 0u32;
    for index in 0..4 {
        let component = parts
            .get(index as usize)
            .ok_or(DecodeError::MissingComponent { index, found })?;
        let value = component
            .parse::<u32>()
            .map_err(|source| DecodeError::InvalidComponent {
                index,
                component: component.to_string(),
                source,
            })?;
        res |= value << (index * 8);
    }
    Ok(res)
}

/// Address octets in presentation order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct IpV4Addr(pub [u8; 4]);

impl From<u32> for IpV4Addr {
    fn from(value: u32) -> Self {
        Self(value.to_le_bytes())
    }
}

impl From<IpV4Addr> for u32 {
    fn from(value: IpV4Addr) -> Self {
        u32::from_le_bytes(value.0)
    }
}

impl From<Ipv4Addr> for IpV4Addr {
    fn from(value: Ipv4Addr) -> Self {
        Self(value.octets())
    }
}

impl From<IpV4Addr> for Ipv4Addr {
    fn from(value: IpV4Addr) -> Self {
        Ipv4Addr::from(value.0)
    }
}

impl fmt::Display for IpV4Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

impl FromStr for IpV4Addr {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s).map(Self::from)
    }
}

#[cfg(test)]
mod test {
    use std::net::Ipv4Addr;

    use crate::{decode, encode, DecodeError, IpV4Addr};

    #[test]
    fn convert_u32() {
        assert_eq!(u32::from(IpV4Addr([1, 2, 3, 4])), 0x04030201);
        assert_eq!(IpV4Addr::from(0x04030201), IpV4Addr([1, 2, 3, 4]));
    }

    #[test]
    fn encode_edges() {
        assert_eq!(encode(0), "0.0.0.0");
        assert_eq!(encode(0xFFFFFFFF), "255.255.255.255");
        assert_eq!(encode(1), "1.0.0.0");
        assert_eq!(encode(0x80000000), "0.0.0.128");
        assert_eq!(encode(0x0A00A8C0), "192.168.0.10");
    }

    #[test]
    fn decode_octets() {
        assert_eq!(decode("1.2.3.4").unwrap(), 0x04030201);
        assert_eq!(decode("0.0.0.0").unwrap(), 0);
        assert_eq!(decode("255.255.255.255").unwrap(), u32::MAX);
    }

    #[test]
    fn decode_ignores_trailing_components() {
        assert_eq!(decode("1.2.3.4.5").unwrap(), decode("1.2.3.4").unwrap());
        assert_eq!(decode("1.2.3.4.junk").unwrap(), 0x04030201);
    }

    #[test]
    fn decode_bleeds_large_components() {
        assert_eq!(decode("256.0.0.0").unwrap(), 0x100);
        assert_eq!(decode("0.0.0.511").unwrap(), 0xFF000000);
        assert_eq!(decode("1.1.0.0").unwrap(), decode("257.0.0.0").unwrap());
    }

    #[test]
    fn decode_too_few_components() {
        assert!(matches!(
            decode("1.2.3"),
            Err(DecodeError::MissingComponent { index: 3, found: 3 })
        ));
        assert!(matches!(
            decode("7"),
            Err(DecodeError::MissingComponent { index: 1, found: 1 })
        ));
        assert!(matches!(
            decode("1.2.3."),
            Err(DecodeError::MissingComponent { index: 3, found: 3 })
        ));
        assert!(matches!(
            decode("1.2.."),
            Err(DecodeError::MissingComponent { index: 2, found: 2 })
        ));
        assert!(matches!(
            decode("..."),
            Err(DecodeError::MissingComponent { index: 0, found: 0 })
        ));
    }

    #[test]
    fn decode_keeps_inner_and_extra_empties() {
        assert_eq!(decode("1.2.3.4.").unwrap(), 0x04030201);
        assert_eq!(decode("1.2.3.4..").unwrap(), 0x04030201);
        assert!(matches!(
            decode(".2.3.4"),
            Err(DecodeError::InvalidComponent { index: 0, .. })
        ));
    }

    #[test]
    fn decode_bad_component() {
        match decode("1.2.3.x") {
            Err(DecodeError::InvalidComponent {
                index, component, ..
            }) => {
                assert_eq!(index, 3);
                assert_eq!(component, "x");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            decode("1..3.4"),
            Err(DecodeError::InvalidComponent { index: 1, .. })
        ));
        assert!(matches!(
            decode("-1.2.3.4"),
            Err(DecodeError::InvalidComponent { index: 0, .. })
        ));
        assert!(matches!(
            decode(""),
            Err(DecodeError::InvalidComponent { index: 0, .. })
        ));
    }

    #[test]
    fn round_trip() {
        for x in [0, 1, 0xFF, 0x100, 0x01020304, 0xDEADBEEF, u32::MAX] {
            assert_eq!(decode(&encode(x)).unwrap(), x);
        }
        for s in ["0.0.0.0", "1.2.3.4", "10.0.0.255", "255.255.255.255"] {
            assert_eq!(encode(decode(s).unwrap()), s);
        }
    }

    #[test]
    fn std_addr_is_positional() {
        let addr = IpV4Addr::from(Ipv4Addr::new(192, 168, 0, 10));
        assert_eq!(addr.to_string(), "192.168.0.10");
        assert_eq!(Ipv4Addr::from(addr), Ipv4Addr::new(192, 168, 0, 10));
        assert_eq!("10.0.0.1".parse::<IpV4Addr>().unwrap(), IpV4Addr([10, 0, 0, 1]));
    }
}
