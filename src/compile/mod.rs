//! Lowering of evaluated frames into backend-agnostic render plans.

pub(crate) mod compiler;
pub(crate) mod fingerprint;
pub(crate) mod plan;
