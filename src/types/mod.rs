//! Engine-neutral types consumed by the backend translation layer.
//!
//! This module contains the format and pipeline enums, resource usage
//! flags, resource descriptors and resource state flags shared by all
//! backends.

mod format;
mod pipeline;
mod resource;
mod state;

pub use format::Format;
pub use pipeline::{
    BlendFactor, BlendOp, ColorWriteMask, CompareFunction, LoadOp, LogicOp, PrimitiveTopology,
    StencilOp, StoreOp,
};
pub use resource::{
    calc_mip_levels, ResourceDescriptor, ResourceHeap, ResourceType, ResourceUsage,
};
pub use state::{CommandQueueType, ResourceState};
