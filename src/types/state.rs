//! Resource state flags and command queue types.
//!
//! A [`ResourceState`] describes how a resource is about to be used.
//! Callers hand one to the synchronization encoder at every transition
//! point; the value is transient and owns nothing. Multiple bits may be
//! set at once, e.g. a texture read by both pixel and compute shaders.

use bitflags::bitflags;

bitflags! {
    /// How a resource will be accessed by upcoming commands.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResourceState: u32 {
        /// Read as indirect draw/dispatch arguments.
        const INDIRECT_ARGUMENT = 1 << 0;
        /// Read as a vertex buffer.
        const VERTEX_BUFFER = 1 << 1;
        /// Read as an index buffer.
        const INDEX_BUFFER = 1 << 2;
        /// Read as a constant buffer by the vertex shader.
        const CONSTANT_BUFFER_VS = 1 << 3;
        /// Read as a constant buffer by the pixel shader.
        const CONSTANT_BUFFER_PS = 1 << 4;
        /// Read as a constant buffer by the compute shader.
        const CONSTANT_BUFFER_CS = 1 << 5;
        /// Sampled or read by the vertex shader.
        const SHADER_RESOURCE_VS = 1 << 6;
        /// Sampled or read by the pixel shader.
        const SHADER_RESOURCE_PS = 1 << 7;
        /// Sampled or read by the compute shader.
        const SHADER_RESOURCE_CS = 1 << 8;
        /// Unordered-access read by the pixel shader.
        const UNORDERED_ACCESS_READ_PS = 1 << 9;
        /// Unordered-access read by the compute shader.
        const UNORDERED_ACCESS_READ_CS = 1 << 10;
        /// Unordered-access write by the pixel shader.
        const UNORDERED_ACCESS_WRITE_PS = 1 << 11;
        /// Unordered-access write by the compute shader.
        const UNORDERED_ACCESS_WRITE_CS = 1 << 12;
        /// Read as a color attachment (blending, logic ops).
        const COLOR_ATTACHMENT_READ = 1 << 13;
        /// Written as a color attachment.
        const COLOR_ATTACHMENT_WRITE = 1 << 14;
        /// Written as a multisample resolve target.
        const RESOLVE_ATTACHMENT = 1 << 15;
        /// Read as a depth/stencil attachment (depth test without write).
        const DEPTH_STENCIL_ATTACHMENT_READ = 1 << 16;
        /// Written as a depth/stencil attachment. Implies read.
        const DEPTH_STENCIL_ATTACHMENT_WRITE = 1 << 17;
        /// Source of a copy operation.
        const COPY_SOURCE = 1 << 18;
        /// Destination of a copy operation.
        const COPY_DEST = 1 << 19;
        /// Sentinel: keep the current state / infer from context.
        ///
        /// Contributes nothing to any encoding; the caller resolves it
        /// from tracked state before recording a barrier.
        const AUTOMATIC = 1 << 31;

        // Composites used by the encoders.

        /// Constant-buffer read from any shader stage.
        const CONSTANT_BUFFER_ANY = Self::CONSTANT_BUFFER_VS.bits()
            | Self::CONSTANT_BUFFER_PS.bits()
            | Self::CONSTANT_BUFFER_CS.bits();
        /// Shader-resource read from any shader stage.
        const SHADER_RESOURCE_ANY = Self::SHADER_RESOURCE_VS.bits()
            | Self::SHADER_RESOURCE_PS.bits()
            | Self::SHADER_RESOURCE_CS.bits();
        /// Unordered-access read from any shader stage.
        const UNORDERED_ACCESS_READ_ANY = Self::UNORDERED_ACCESS_READ_PS.bits()
            | Self::UNORDERED_ACCESS_READ_CS.bits();
        /// Unordered-access write from any shader stage.
        const UNORDERED_ACCESS_WRITE_ANY = Self::UNORDERED_ACCESS_WRITE_PS.bits()
            | Self::UNORDERED_ACCESS_WRITE_CS.bits();
        /// Any color attachment access, including resolve.
        const COLOR_ATTACHMENT_ANY = Self::COLOR_ATTACHMENT_READ.bits()
            | Self::COLOR_ATTACHMENT_WRITE.bits()
            | Self::RESOLVE_ATTACHMENT.bits();
        /// Any depth/stencil attachment access.
        const DEPTH_STENCIL_ATTACHMENT_ANY = Self::DEPTH_STENCIL_ATTACHMENT_READ.bits()
            | Self::DEPTH_STENCIL_ATTACHMENT_WRITE.bits();
    }
}

impl Default for ResourceState {
    fn default() -> Self {
        Self::AUTOMATIC
    }
}

/// Category of hardware command queue a barrier will be recorded on.
///
/// The queue type determines which pipeline stages are expressible:
/// a compute queue cannot name graphics-only stages, and a copy queue
/// cannot name any stage at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommandQueueType {
    /// Full graphics pipeline. Can also run compute and copy work.
    #[default]
    Graphics,
    /// Compute pipeline. Can also run copy work.
    Compute,
    /// Copy/transfer engine only.
    Copy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composites_cover_per_stage_bits() {
        assert!(ResourceState::SHADER_RESOURCE_ANY.contains(ResourceState::SHADER_RESOURCE_VS));
        assert!(ResourceState::SHADER_RESOURCE_ANY.contains(ResourceState::SHADER_RESOURCE_CS));
        assert!(ResourceState::COLOR_ATTACHMENT_ANY.contains(ResourceState::RESOLVE_ATTACHMENT));
        assert!(!ResourceState::COLOR_ATTACHMENT_ANY
            .intersects(ResourceState::DEPTH_STENCIL_ATTACHMENT_ANY));
    }

    #[test]
    fn test_default_is_automatic() {
        assert_eq!(ResourceState::default(), ResourceState::AUTOMATIC);
    }
}
