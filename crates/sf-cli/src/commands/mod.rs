//! CLI command implementations

pub(crate) mod common;
pub(crate) mod compile;
pub(crate) mod delete;
pub(crate) mod deps;
pub(crate) mod ls;
pub(crate) mod run;
pub(crate) mod show;
