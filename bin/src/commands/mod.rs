//! CLI command implementations.

pub(crate) mod info;
pub(crate) mod list;
pub(crate) mod ping;
pub(crate) mod render;
pub(crate) mod series;
