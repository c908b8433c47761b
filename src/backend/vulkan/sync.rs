//! Resource state to Vulkan synchronization translation.
//!
//! Converts a [`ResourceState`] bitmask plus the recording queue's type
//! into the access mask, image layout and pipeline stage mask a barrier
//! needs. All functions are pure and total: every combination of state
//! bits produces a defined result, and an empty or [`AUTOMATIC`]-only
//! state yields the no-constraint encoding (empty access, general layout,
//! top-of-pipe stage) for the caller to resolve from tracked state.
//!
//! The command-recording layer calls these once per transition request;
//! results are never cached because the requested state can change every
//! frame.
//!
//! [`AUTOMATIC`]: ResourceState::AUTOMATIC

use ash::vk;

use crate::types::{CommandQueueType, ResourceState};

/// Synchronization parameters for one side of a barrier.
///
/// Plain value type with no identity; the command-recording layer pairs
/// two of these (before/after) into a native barrier command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarrierSync {
    /// Memory access types performed in this state.
    pub access: vk::AccessFlags,
    /// Image layout required by this state. `UNDEFINED` for buffers.
    pub layout: vk::ImageLayout,
    /// Pipeline stages at which the access occurs.
    pub stage: vk::PipelineStageFlags,
}

impl BarrierSync {
    /// Encode the synchronization parameters for a texture state.
    pub fn for_texture(state: ResourceState, queue: CommandQueueType) -> Self {
        Self {
            access: encode_access_flags(state),
            layout: encode_image_layout(state),
            stage: encode_pipeline_stages(state, queue),
        }
    }

    /// Encode the synchronization parameters for a buffer state.
    ///
    /// Buffers have no layout; the layout field stays `UNDEFINED`.
    pub fn for_buffer(state: ResourceState, queue: CommandQueueType) -> Self {
        Self {
            access: encode_access_flags(state),
            layout: vk::ImageLayout::UNDEFINED,
            stage: encode_pipeline_stages(state, queue),
        }
    }
}

/// Encode the Vulkan access mask for a resource state.
///
/// Each state bit contributes a fixed set of access bits, OR-composed;
/// no bit's contribution depends on any other bit. A depth/stencil write
/// contributes read access as well, since the depth test reads the
/// attachment before the write.
pub fn encode_access_flags(state: ResourceState) -> vk::AccessFlags {
    let mut access = vk::AccessFlags::empty();

    if state.contains(ResourceState::INDIRECT_ARGUMENT) {
        access |= vk::AccessFlags::INDIRECT_COMMAND_READ;
    }
    if state.contains(ResourceState::VERTEX_BUFFER) {
        access |= vk::AccessFlags::VERTEX_ATTRIBUTE_READ;
    }
    if state.contains(ResourceState::INDEX_BUFFER) {
        access |= vk::AccessFlags::INDEX_READ;
    }
    if state.intersects(ResourceState::CONSTANT_BUFFER_ANY) {
        access |= vk::AccessFlags::UNIFORM_READ;
    }
    if state.intersects(ResourceState::SHADER_RESOURCE_ANY | ResourceState::UNORDERED_ACCESS_READ_ANY)
    {
        access |= vk::AccessFlags::SHADER_READ;
    }
    if state.intersects(ResourceState::UNORDERED_ACCESS_WRITE_ANY) {
        access |= vk::AccessFlags::SHADER_WRITE;
    }
    if state.contains(ResourceState::COLOR_ATTACHMENT_READ) {
        access |= vk::AccessFlags::COLOR_ATTACHMENT_READ;
    }
    if state.intersects(ResourceState::COLOR_ATTACHMENT_WRITE | ResourceState::RESOLVE_ATTACHMENT) {
        access |= vk::AccessFlags::COLOR_ATTACHMENT_WRITE;
    }
    if state.contains(ResourceState::DEPTH_STENCIL_ATTACHMENT_READ) {
        access |= vk::AccessFlags::DEPTH_STENCIL_ATTACHMENT_READ;
    }
    if state.contains(ResourceState::DEPTH_STENCIL_ATTACHMENT_WRITE) {
        access |= vk::AccessFlags::DEPTH_STENCIL_ATTACHMENT_READ
            | vk::AccessFlags::DEPTH_STENCIL_ATTACHMENT_WRITE;
    }
    if state.contains(ResourceState::COPY_DEST) {
        access |= vk::AccessFlags::TRANSFER_WRITE;
    }
    if state.contains(ResourceState::COPY_SOURCE) {
        access |= vk::AccessFlags::TRANSFER_READ;
    }

    access
}

/// Layout resolution rules, evaluated top to bottom; first match wins.
///
/// A subresource has exactly one layout at a time, so unlike access and
/// stage encoding this mapping cannot be additive. The order is load
/// bearing: attachment output beats sampling, and a depth/stencil write
/// must be checked before the read rule because write implies read.
const LAYOUT_RULES: [(ResourceState, vk::ImageLayout); 6] = [
    (
        ResourceState::COLOR_ATTACHMENT_ANY,
        vk::ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
    ),
    (
        ResourceState::DEPTH_STENCIL_ATTACHMENT_WRITE,
        vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL,
    ),
    (
        ResourceState::DEPTH_STENCIL_ATTACHMENT_READ,
        vk::ImageLayout::DEPTH_STENCIL_READ_ONLY_OPTIMAL,
    ),
    (
        ResourceState::SHADER_RESOURCE_ANY,
        vk::ImageLayout::SHADER_READ_ONLY_OPTIMAL,
    ),
    (ResourceState::COPY_DEST, vk::ImageLayout::TRANSFER_DST_OPTIMAL),
    (
        ResourceState::COPY_SOURCE,
        vk::ImageLayout::TRANSFER_SRC_OPTIMAL,
    ),
];

/// Encode the Vulkan image layout for a texture state.
///
/// Returns `GENERAL` when no layout-implying bit is set; that covers
/// unordered access as well as the `AUTOMATIC` sentinel.
pub fn encode_image_layout(state: ResourceState) -> vk::ImageLayout {
    for (mask, layout) in LAYOUT_RULES {
        if state.intersects(mask) {
            return layout;
        }
    }
    vk::ImageLayout::GENERAL
}

/// Encode the Vulkan pipeline stage mask for a resource state on a queue.
///
/// A compute queue cannot name graphics-only stages, so those collapse to
/// the all-commands catch-all; a copy queue is stage-opaque and always
/// starts from the catch-all. Indirect-argument and copy bits contribute
/// their stage on every queue type. Never returns an empty mask.
pub fn encode_pipeline_stages(
    state: ResourceState,
    queue: CommandQueueType,
) -> vk::PipelineStageFlags {
    let mut stages = vk::PipelineStageFlags::empty();

    match queue {
        CommandQueueType::Graphics => {
            if state.intersects(ResourceState::VERTEX_BUFFER | ResourceState::INDEX_BUFFER) {
                stages |= vk::PipelineStageFlags::VERTEX_INPUT;
            }
            if state
                .intersects(ResourceState::CONSTANT_BUFFER_VS | ResourceState::SHADER_RESOURCE_VS)
            {
                stages |= vk::PipelineStageFlags::VERTEX_SHADER;
            }
            if state.intersects(
                ResourceState::CONSTANT_BUFFER_PS
                    | ResourceState::SHADER_RESOURCE_PS
                    | ResourceState::UNORDERED_ACCESS_READ_PS
                    | ResourceState::UNORDERED_ACCESS_WRITE_PS,
            ) {
                stages |= vk::PipelineStageFlags::FRAGMENT_SHADER;
            }
            if state.intersects(
                ResourceState::CONSTANT_BUFFER_CS
                    | ResourceState::SHADER_RESOURCE_CS
                    | ResourceState::UNORDERED_ACCESS_READ_CS
                    | ResourceState::UNORDERED_ACCESS_WRITE_CS,
            ) {
                stages |= vk::PipelineStageFlags::COMPUTE_SHADER;
            }
            if state.intersects(ResourceState::COLOR_ATTACHMENT_ANY) {
                stages |= vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT;
            }
            if state.intersects(ResourceState::DEPTH_STENCIL_ATTACHMENT_ANY) {
                stages |= vk::PipelineStageFlags::EARLY_FRAGMENT_TESTS
                    | vk::PipelineStageFlags::LATE_FRAGMENT_TESTS;
            }
        }
        CommandQueueType::Compute => {
            // Graphics-pipeline stages are not expressible on a compute
            // queue; any such bit collapses to the catch-all. In practice
            // a compute queue never receives these states, but the mapping
            // stays total.
            if state.intersects(
                ResourceState::VERTEX_BUFFER
                    | ResourceState::INDEX_BUFFER
                    | ResourceState::CONSTANT_BUFFER_VS
                    | ResourceState::SHADER_RESOURCE_VS
                    | ResourceState::CONSTANT_BUFFER_PS
                    | ResourceState::SHADER_RESOURCE_PS
                    | ResourceState::UNORDERED_ACCESS_READ_PS
                    | ResourceState::UNORDERED_ACCESS_WRITE_PS
                    | ResourceState::COLOR_ATTACHMENT_ANY
                    | ResourceState::DEPTH_STENCIL_ATTACHMENT_ANY,
            ) {
                stages |= vk::PipelineStageFlags::ALL_COMMANDS;
            }
            if state.intersects(
                ResourceState::CONSTANT_BUFFER_CS
                    | ResourceState::SHADER_RESOURCE_CS
                    | ResourceState::UNORDERED_ACCESS_READ_CS
                    | ResourceState::UNORDERED_ACCESS_WRITE_CS,
            ) {
                stages |= vk::PipelineStageFlags::COMPUTE_SHADER;
            }
        }
        CommandQueueType::Copy => {
            // Copy queues are stage-opaque.
            stages |= vk::PipelineStageFlags::ALL_COMMANDS;
        }
    }

    // These two are expressible on every queue type and combine with
    // whatever the queue-specific mapping produced.
    if state.contains(ResourceState::INDIRECT_ARGUMENT) {
        stages |= vk::PipelineStageFlags::DRAW_INDIRECT;
    }
    if state.intersects(ResourceState::COPY_SOURCE | ResourceState::COPY_DEST) {
        stages |= vk::PipelineStageFlags::TRANSFER;
    }

    if stages.is_empty() {
        stages = vk::PipelineStageFlags::TOP_OF_PIPE;
    }

    stages
}
