pub mod dsl;
pub(crate) mod model;
pub(crate) mod resolve;
