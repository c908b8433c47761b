//! Native Vulkan translation layer using ash.
//!
//! Stateless, data-race-free translation from engine-neutral descriptions
//! to the exact creation parameters and barrier contents the Vulkan driver
//! requires. Nothing here records commands or allocates device memory;
//! resource creation and command recording consume these outputs.

pub(crate) mod conversion;
pub mod result;
pub mod sync;

pub use conversion::{
    allocation_strategy, buffer_create_info, convert_blend_factor, convert_blend_op,
    convert_buffer_usage, convert_color_write_mask, convert_compare_function, convert_format,
    convert_image_usage, convert_load_op, convert_logic_op, convert_primitive_topology,
    convert_sample_count, convert_stencil_op, convert_store_op, image_create_info,
    AllocationStrategy,
};
pub use result::translate_vk_result;
pub use sync::{encode_access_flags, encode_image_layout, encode_pipeline_stages, BarrierSync};
