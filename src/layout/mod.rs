pub(crate) mod align;
pub(crate) mod fingerprint;
pub(crate) mod geometry;
pub(crate) mod leaf;
pub(crate) mod node;
pub(crate) mod stack;
pub(crate) mod zstack;
