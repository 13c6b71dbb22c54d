//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod list;

pub(crate) use build::BuildArgs;
pub(crate) use list::ListArgs;
