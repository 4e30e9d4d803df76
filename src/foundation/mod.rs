pub(crate) mod curve;
pub(crate) mod error;
pub(crate) mod sequence;
pub(crate) mod value;
