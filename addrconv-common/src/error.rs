use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("address has only {found} components, component {index} is missing")]
    MissingComponent { index: u32, found: u32 },

    #[error("component {index} ({component:?}) is not a valid integer: {source}")]
    InvalidComponent {
        index: u32,
        component: String,
        source: ParseIntError,
    },
}
