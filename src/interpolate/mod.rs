pub(crate) mod collection;
pub(crate) mod config;
pub(crate) mod curves;
pub(crate) mod engine;
pub(crate) mod registry;
