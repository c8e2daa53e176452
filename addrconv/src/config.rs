use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct StaticConfig {
    pub addresses: Option<Vec<u32>>,
    pub dotted: Option<Vec<String>>,
    pub ssns: Option<Vec<String>>,
}

impl StaticConfig {
    pub fn is_empty(&self) -> bool {
        self.addresses.as_ref().map_or(true, |v| v.is_empty())
            && self.dotted.as_ref().map_or(true, |v| v.is_empty())
            && self.ssns.as_ref().map_or(true, |v| v.is_empty())
    }
}
