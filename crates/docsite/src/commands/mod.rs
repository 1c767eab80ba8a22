//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod doc;
pub(crate) mod serve;

pub(crate) use check::CheckArgs;
pub(crate) use doc::DocArgs;
pub(crate) use serve::ServeArgs;
