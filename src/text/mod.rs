pub(crate) mod fonts;
pub(crate) mod layout;
pub(crate) mod metrics;
pub(crate) mod reveal;
pub(crate) mod style;
