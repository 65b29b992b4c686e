pub(crate) mod icons;
pub(crate) mod model;
pub(crate) mod palette;
