//! CPU rasterization of render plans.
//!
//! Display lists are drawn with `vello_cpu`; transition blending runs on premultiplied RGBA8
//! buffers in [`composite`].

pub(crate) mod backend;
pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod cpu;
pub(crate) mod paint;
pub(crate) mod svg_raster;
pub(crate) mod text;
