//! Resource descriptors and the descriptor normalizer.

use bitflags::bitflags;

use super::Format;

/// Dimensionality of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResourceType {
    /// Untyped linear buffer.
    Buffer,
    /// One-dimensional texture.
    Texture1d,
    /// Two-dimensional texture.
    #[default]
    Texture2d,
    /// Three-dimensional (volume) texture.
    Texture3d,
}

impl ResourceType {
    /// Returns true for any texture dimensionality.
    pub fn is_texture(&self) -> bool {
        !matches!(self, Self::Buffer)
    }
}

bitflags! {
    /// Declared usages of a resource, fixed at creation time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResourceUsage: u32 {
        /// Resource can be the source of a copy operation.
        const COPY_SOURCE = 1 << 0;
        /// Resource can be the destination of a copy operation.
        const COPY_DEST = 1 << 1;
        /// Resource can be read by shaders.
        const SHADER_RESOURCE = 1 << 2;
        /// Resource can be read and written by shaders without ordering.
        const UNORDERED_ACCESS = 1 << 3;
        /// Buffer can back constant (uniform) bindings.
        const CONSTANT_BUFFER = 1 << 4;
        /// Buffer can supply vertex indices.
        const INDEX_BUFFER = 1 << 5;
        /// Buffer can supply vertex attributes.
        const VERTEX_BUFFER = 1 << 6;
        /// Buffer can supply indirect draw/dispatch arguments.
        const INDIRECT_BUFFER = 1 << 7;
        /// Texture can be a color render target.
        const RENDER_TARGET = 1 << 8;
        /// Texture can be a depth/stencil target.
        const DEPTH_STENCIL = 1 << 9;
    }
}

impl Default for ResourceUsage {
    fn default() -> Self {
        Self::empty()
    }
}

/// Memory heap a resource is allocated from.
///
/// The heap kind selects the allocation strategy, not a specific memory
/// type; the allocator picks the concrete memory type at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResourceHeap {
    /// Device-local memory for GPU-only access.
    #[default]
    Local,
    /// Host-visible memory optimized for sequential CPU writes.
    Upload,
    /// Host-visible memory optimized for random CPU reads.
    Readback,
}

/// Descriptor for creating a buffer or texture resource.
///
/// A descriptor is created once, normalized once via [`normalize`], and is
/// immutable thereafter. Fields that are meaningless for the resource's
/// dimensionality are canonicalized by normalization, so two descriptors
/// describing the same resource always compare equal.
///
/// [`normalize`]: ResourceDescriptor::normalize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceDescriptor {
    /// Dimensionality of the resource.
    pub resource_type: ResourceType,
    /// Buffer size in bytes, or texture width in texels.
    pub width_or_size: u64,
    /// Texture height. Meaningful for 2D and 3D textures only.
    pub height: u32,
    /// Texture depth for 3D textures, array size for 1D/2D textures.
    pub depth_or_array_size: u32,
    /// Mip level count. Zero requests auto-derivation during normalization.
    pub mip_levels: u32,
    /// Pixel format. Meaningless for buffers.
    pub pixel_format: Format,
    /// Multisample count. Meaningful for 2D textures only.
    pub sample_count: u8,
    /// Vendor-specific multisample quality level.
    pub sample_quality: u8,
    /// Declared usage flags.
    pub usages: ResourceUsage,
    /// Heap kind selecting the allocation strategy.
    pub heap: ResourceHeap,
}

impl ResourceDescriptor {
    /// Create a buffer descriptor.
    pub fn buffer(size: u64, usages: ResourceUsage) -> Self {
        Self {
            resource_type: ResourceType::Buffer,
            width_or_size: size,
            height: 1,
            depth_or_array_size: 1,
            mip_levels: 1,
            pixel_format: Format::Unknown,
            sample_count: 1,
            sample_quality: 0,
            usages,
            heap: ResourceHeap::Local,
        }
    }

    /// Create a 1D texture descriptor with a single mip level.
    pub fn texture_1d(width: u64, format: Format, usages: ResourceUsage) -> Self {
        Self {
            resource_type: ResourceType::Texture1d,
            width_or_size: width,
            height: 1,
            depth_or_array_size: 1,
            mip_levels: 1,
            pixel_format: format,
            sample_count: 1,
            sample_quality: 0,
            usages,
            heap: ResourceHeap::Local,
        }
    }

    /// Create a 2D texture descriptor with a single mip level.
    pub fn texture_2d(width: u64, height: u32, format: Format, usages: ResourceUsage) -> Self {
        Self {
            resource_type: ResourceType::Texture2d,
            width_or_size: width,
            height,
            depth_or_array_size: 1,
            mip_levels: 1,
            pixel_format: format,
            sample_count: 1,
            sample_quality: 0,
            usages,
            heap: ResourceHeap::Local,
        }
    }

    /// Create a 3D texture descriptor with a single mip level.
    pub fn texture_3d(
        width: u64,
        height: u32,
        depth: u32,
        format: Format,
        usages: ResourceUsage,
    ) -> Self {
        Self {
            resource_type: ResourceType::Texture3d,
            width_or_size: width,
            height,
            depth_or_array_size: depth,
            mip_levels: 1,
            pixel_format: format,
            sample_count: 1,
            sample_quality: 0,
            usages,
            heap: ResourceHeap::Local,
        }
    }

    /// Set the mip level count. Zero requests auto-derivation.
    pub fn with_mip_levels(mut self, mip_levels: u32) -> Self {
        self.mip_levels = mip_levels;
        self
    }

    /// Set the array size for 1D/2D textures.
    pub fn with_array_size(mut self, array_size: u32) -> Self {
        self.depth_or_array_size = array_size;
        self
    }

    /// Set the multisample count.
    pub fn with_sample_count(mut self, sample_count: u8) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Set the heap kind.
    pub fn with_heap(mut self, heap: ResourceHeap) -> Self {
        self.heap = heap;
        self
    }

    /// Produce the canonical form of this descriptor.
    ///
    /// Fields irrelevant to the resource's dimensionality are forced to
    /// fixed values, and a zero mip level count is replaced by the full
    /// mip chain for the post-normalization dimensions. Normalization
    /// never fails and is idempotent; resource caching relies on the
    /// result being deterministic.
    pub fn normalize(mut self) -> Self {
        match self.resource_type {
            ResourceType::Buffer => {
                self.pixel_format = Format::Unknown;
                self.height = 1;
                self.depth_or_array_size = 1;
                self.mip_levels = 1;
                self.sample_count = 1;
                self.sample_quality = 0;
            }
            ResourceType::Texture1d => {
                self.height = 1;
                self.sample_count = 1;
                self.sample_quality = 0;
            }
            ResourceType::Texture2d => {}
            ResourceType::Texture3d => {
                self.sample_count = 1;
                self.sample_quality = 0;
            }
        }
        if self.mip_levels == 0 {
            // Only 3D textures mip down along their depth axis; the array
            // size of 1D/2D textures does not participate.
            let depth = match self.resource_type {
                ResourceType::Texture3d => self.depth_or_array_size,
                _ => 1,
            };
            self.mip_levels = calc_mip_levels(self.width_or_size as u32, self.height, depth);
        }
        self
    }
}

impl Default for ResourceDescriptor {
    fn default() -> Self {
        Self::texture_2d(1, 1, Format::default(), ResourceUsage::empty())
    }
}

/// Number of mip levels in a full mip chain for the given dimensions.
///
/// Equals `1 + floor(log2(max(width, height, depth)))`. Zero dimensions
/// are clamped to one so the result is always at least one level.
pub fn calc_mip_levels(width: u32, height: u32, depth: u32) -> u32 {
    let largest = width.max(height).max(depth).max(1);
    1 + largest.ilog2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(256, 256, 1, 9)]
    #[case(1, 1, 1, 1)]
    #[case(300, 150, 1, 9)]
    #[case(0, 0, 0, 1)]
    #[case(1, 1, 512, 10)]
    fn test_calc_mip_levels(
        #[case] width: u32,
        #[case] height: u32,
        #[case] depth: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(calc_mip_levels(width, height, depth), expected);
    }

    #[test]
    fn test_buffer_normalization_canonicalizes() {
        let desc = ResourceDescriptor {
            resource_type: ResourceType::Buffer,
            width_or_size: 4096,
            height: 123,
            depth_or_array_size: 7,
            mip_levels: 0,
            pixel_format: Format::Rgba8Unorm,
            sample_count: 4,
            sample_quality: 2,
            usages: ResourceUsage::CONSTANT_BUFFER,
            heap: ResourceHeap::Upload,
        }
        .normalize();

        assert_eq!(desc.pixel_format, Format::Unknown);
        assert_eq!(desc.height, 1);
        assert_eq!(desc.depth_or_array_size, 1);
        assert_eq!(desc.mip_levels, 1);
        assert_eq!(desc.sample_count, 1);
        assert_eq!(desc.sample_quality, 0);
        // Size, usages and heap survive untouched
        assert_eq!(desc.width_or_size, 4096);
        assert_eq!(desc.usages, ResourceUsage::CONSTANT_BUFFER);
        assert_eq!(desc.heap, ResourceHeap::Upload);
    }

    #[test]
    fn test_texture_1d_normalization() {
        let desc = ResourceDescriptor::texture_1d(64, Format::R8Unorm, ResourceUsage::empty())
            .with_sample_count(8)
            .normalize();
        assert_eq!(desc.height, 1);
        assert_eq!(desc.sample_count, 1);
    }

    #[test]
    fn test_texture_2d_keeps_samples() {
        let desc =
            ResourceDescriptor::texture_2d(128, 128, Format::Rgba8Unorm, ResourceUsage::empty())
                .with_sample_count(4)
                .normalize();
        assert_eq!(desc.sample_count, 4);
        assert_eq!(desc.mip_levels, 1);
    }

    #[test]
    fn test_auto_mip_levels_2d() {
        let desc =
            ResourceDescriptor::texture_2d(256, 256, Format::Rgba8Unorm, ResourceUsage::empty())
                .with_mip_levels(0)
                .normalize();
        assert_eq!(desc.mip_levels, 9);
    }

    #[test]
    fn test_auto_mip_levels_3d_uses_depth() {
        let desc = ResourceDescriptor::texture_3d(
            16,
            16,
            512,
            Format::Rgba8Unorm,
            ResourceUsage::empty(),
        )
        .with_mip_levels(0)
        .normalize();
        assert_eq!(desc.mip_levels, 10);
        assert_eq!(desc.sample_count, 1);
    }

    #[test]
    fn test_array_size_does_not_affect_mips() {
        // A deep 2D array still mips by width/height only
        let desc =
            ResourceDescriptor::texture_2d(4, 4, Format::Rgba8Unorm, ResourceUsage::empty())
                .with_array_size(1024)
                .with_mip_levels(0)
                .normalize();
        assert_eq!(desc.mip_levels, 3);
        assert_eq!(desc.depth_or_array_size, 1024);
    }

    #[test]
    fn test_explicit_mip_levels_preserved() {
        let desc =
            ResourceDescriptor::texture_2d(256, 256, Format::Rgba8Unorm, ResourceUsage::empty())
                .with_mip_levels(3)
                .normalize();
        assert_eq!(desc.mip_levels, 3);
    }

    #[rstest]
    #[case(ResourceDescriptor::buffer(1024, ResourceUsage::VERTEX_BUFFER))]
    #[case(ResourceDescriptor::texture_1d(64, Format::R8Unorm, ResourceUsage::SHADER_RESOURCE))]
    #[case(ResourceDescriptor::texture_2d(640, 480, Format::Bgra8Unorm, ResourceUsage::RENDER_TARGET).with_mip_levels(0))]
    #[case(ResourceDescriptor::texture_3d(32, 32, 32, Format::R32Float, ResourceUsage::UNORDERED_ACCESS).with_mip_levels(0))]
    fn test_normalization_idempotent(#[case] desc: ResourceDescriptor) {
        let once = desc.normalize();
        assert_eq!(once.normalize(), once);
    }
}
