//! Type conversions between engine-neutral types and Vulkan types.
//!
//! All functions here are pure lookup tables over their input: no state,
//! no side effects, no failure path. Invalid usage combinations are passed
//! through and surface as a native creation failure, which
//! [`translate_vk_result`](super::result::translate_vk_result) maps back
//! into the engine taxonomy.

use ash::vk;
use gpu_allocator::MemoryLocation;

use crate::types::{
    BlendFactor, BlendOp, ColorWriteMask, CompareFunction, Format, LoadOp, LogicOp,
    PrimitiveTopology, ResourceDescriptor, ResourceHeap, ResourceType, ResourceUsage, StencilOp,
    StoreOp,
};

/// Convert a pixel format to the Vulkan format.
pub fn convert_format(format: Format) -> vk::Format {
    match format {
        Format::Unknown => vk::Format::UNDEFINED,

        // 8-bit formats
        Format::R8Unorm => vk::Format::R8_UNORM,
        Format::R8Snorm => vk::Format::R8_SNORM,
        Format::R8Uint => vk::Format::R8_UINT,
        Format::R8Sint => vk::Format::R8_SINT,

        // 16-bit formats
        Format::R16Unorm => vk::Format::R16_UNORM,
        Format::R16Snorm => vk::Format::R16_SNORM,
        Format::R16Uint => vk::Format::R16_UINT,
        Format::R16Sint => vk::Format::R16_SINT,
        Format::R16Float => vk::Format::R16_SFLOAT,
        Format::Rg8Unorm => vk::Format::R8G8_UNORM,
        Format::Rg8Snorm => vk::Format::R8G8_SNORM,
        Format::Rg8Uint => vk::Format::R8G8_UINT,
        Format::Rg8Sint => vk::Format::R8G8_SINT,

        // 32-bit formats
        Format::R32Uint => vk::Format::R32_UINT,
        Format::R32Sint => vk::Format::R32_SINT,
        Format::R32Float => vk::Format::R32_SFLOAT,
        Format::Rg16Unorm => vk::Format::R16G16_UNORM,
        Format::Rg16Snorm => vk::Format::R16G16_SNORM,
        Format::Rg16Uint => vk::Format::R16G16_UINT,
        Format::Rg16Sint => vk::Format::R16G16_SINT,
        Format::Rg16Float => vk::Format::R16G16_SFLOAT,
        Format::Rgba8Unorm => vk::Format::R8G8B8A8_UNORM,
        Format::Rgba8UnormSrgb => vk::Format::R8G8B8A8_SRGB,
        Format::Rgba8Snorm => vk::Format::R8G8B8A8_SNORM,
        Format::Rgba8Uint => vk::Format::R8G8B8A8_UINT,
        Format::Rgba8Sint => vk::Format::R8G8B8A8_SINT,
        Format::Bgra8Unorm => vk::Format::B8G8R8A8_UNORM,
        Format::Bgra8UnormSrgb => vk::Format::B8G8R8A8_SRGB,
        Format::Rgb10a2Unorm => vk::Format::A2B10G10R10_UNORM_PACK32,
        Format::Rgb10a2Uint => vk::Format::A2B10G10R10_UINT_PACK32,
        Format::Rg11b10Float => vk::Format::B10G11R11_UFLOAT_PACK32,
        Format::Rgb9e5Float => vk::Format::E5B9G9R9_UFLOAT_PACK32,

        // 64-bit formats
        Format::Rg32Uint => vk::Format::R32G32_UINT,
        Format::Rg32Sint => vk::Format::R32G32_SINT,
        Format::Rg32Float => vk::Format::R32G32_SFLOAT,
        Format::Rgba16Unorm => vk::Format::R16G16B16A16_UNORM,
        Format::Rgba16Snorm => vk::Format::R16G16B16A16_SNORM,
        Format::Rgba16Uint => vk::Format::R16G16B16A16_UINT,
        Format::Rgba16Sint => vk::Format::R16G16B16A16_SINT,
        Format::Rgba16Float => vk::Format::R16G16B16A16_SFLOAT,

        // 128-bit formats
        Format::Rgba32Uint => vk::Format::R32G32B32A32_UINT,
        Format::Rgba32Sint => vk::Format::R32G32B32A32_SINT,
        Format::Rgba32Float => vk::Format::R32G32B32A32_SFLOAT,

        // Depth/stencil formats
        Format::Depth16Unorm => vk::Format::D16_UNORM,
        Format::Depth32Float => vk::Format::D32_SFLOAT,
        Format::Depth24UnormStencil8 => vk::Format::D24_UNORM_S8_UINT,
        Format::Depth32FloatStencil8 => vk::Format::D32_SFLOAT_S8_UINT,

        // Block-compressed formats
        Format::Bc1RgbaUnorm => vk::Format::BC1_RGBA_UNORM_BLOCK,
        Format::Bc1RgbaUnormSrgb => vk::Format::BC1_RGBA_SRGB_BLOCK,
        Format::Bc2RgbaUnorm => vk::Format::BC2_UNORM_BLOCK,
        Format::Bc2RgbaUnormSrgb => vk::Format::BC2_SRGB_BLOCK,
        Format::Bc3RgbaUnorm => vk::Format::BC3_UNORM_BLOCK,
        Format::Bc3RgbaUnormSrgb => vk::Format::BC3_SRGB_BLOCK,
        Format::Bc4RUnorm => vk::Format::BC4_UNORM_BLOCK,
        Format::Bc4RSnorm => vk::Format::BC4_SNORM_BLOCK,
        Format::Bc5RgUnorm => vk::Format::BC5_UNORM_BLOCK,
        Format::Bc5RgSnorm => vk::Format::BC5_SNORM_BLOCK,
        Format::Bc6hRgbSfloat => vk::Format::BC6H_SFLOAT_BLOCK,
        Format::Bc6hRgbUfloat => vk::Format::BC6H_UFLOAT_BLOCK,
        Format::Bc7RgbaUnorm => vk::Format::BC7_UNORM_BLOCK,
        Format::Bc7RgbaUnormSrgb => vk::Format::BC7_SRGB_BLOCK,
    }
}

/// Convert a primitive topology to the Vulkan topology.
pub fn convert_primitive_topology(topology: PrimitiveTopology) -> vk::PrimitiveTopology {
    match topology {
        PrimitiveTopology::PointList => vk::PrimitiveTopology::POINT_LIST,
        PrimitiveTopology::LineList => vk::PrimitiveTopology::LINE_LIST,
        PrimitiveTopology::LineStrip => vk::PrimitiveTopology::LINE_STRIP,
        PrimitiveTopology::TriangleList => vk::PrimitiveTopology::TRIANGLE_LIST,
        PrimitiveTopology::TriangleStrip => vk::PrimitiveTopology::TRIANGLE_STRIP,
    }
}

/// Convert a comparison function to the Vulkan compare op.
pub fn convert_compare_function(func: CompareFunction) -> vk::CompareOp {
    match func {
        CompareFunction::Never => vk::CompareOp::NEVER,
        CompareFunction::Less => vk::CompareOp::LESS,
        CompareFunction::Equal => vk::CompareOp::EQUAL,
        CompareFunction::LessEqual => vk::CompareOp::LESS_OR_EQUAL,
        CompareFunction::Greater => vk::CompareOp::GREATER,
        CompareFunction::NotEqual => vk::CompareOp::NOT_EQUAL,
        CompareFunction::GreaterEqual => vk::CompareOp::GREATER_OR_EQUAL,
        CompareFunction::Always => vk::CompareOp::ALWAYS,
    }
}

/// Convert a stencil operation to the Vulkan stencil op.
pub fn convert_stencil_op(op: StencilOp) -> vk::StencilOp {
    match op {
        StencilOp::Keep => vk::StencilOp::KEEP,
        StencilOp::Zero => vk::StencilOp::ZERO,
        StencilOp::Replace => vk::StencilOp::REPLACE,
        StencilOp::IncrementClamp => vk::StencilOp::INCREMENT_AND_CLAMP,
        StencilOp::DecrementClamp => vk::StencilOp::DECREMENT_AND_CLAMP,
        StencilOp::Invert => vk::StencilOp::INVERT,
        StencilOp::IncrementWrap => vk::StencilOp::INCREMENT_AND_WRAP,
        StencilOp::DecrementWrap => vk::StencilOp::DECREMENT_AND_WRAP,
    }
}

/// Convert a logic operation to the Vulkan logic op.
pub fn convert_logic_op(op: LogicOp) -> vk::LogicOp {
    match op {
        LogicOp::Clear => vk::LogicOp::CLEAR,
        LogicOp::Set => vk::LogicOp::SET,
        LogicOp::Copy => vk::LogicOp::COPY,
        LogicOp::CopyInverted => vk::LogicOp::COPY_INVERTED,
        LogicOp::Invert => vk::LogicOp::INVERT,
        LogicOp::And => vk::LogicOp::AND,
        LogicOp::Nand => vk::LogicOp::NAND,
        LogicOp::Or => vk::LogicOp::OR,
        LogicOp::Nor => vk::LogicOp::NOR,
        LogicOp::Xor => vk::LogicOp::XOR,
        LogicOp::Equivalent => vk::LogicOp::EQUIVALENT,
        LogicOp::AndReverse => vk::LogicOp::AND_REVERSE,
        LogicOp::AndInverted => vk::LogicOp::AND_INVERTED,
        LogicOp::OrReverse => vk::LogicOp::OR_REVERSE,
        LogicOp::OrInverted => vk::LogicOp::OR_INVERTED,
    }
}

/// Convert a blend factor to the Vulkan blend factor.
pub fn convert_blend_factor(factor: BlendFactor) -> vk::BlendFactor {
    match factor {
        BlendFactor::Zero => vk::BlendFactor::ZERO,
        BlendFactor::One => vk::BlendFactor::ONE,
        BlendFactor::SrcColor => vk::BlendFactor::SRC_COLOR,
        BlendFactor::OneMinusSrcColor => vk::BlendFactor::ONE_MINUS_SRC_COLOR,
        BlendFactor::SrcAlpha => vk::BlendFactor::SRC_ALPHA,
        BlendFactor::OneMinusSrcAlpha => vk::BlendFactor::ONE_MINUS_SRC_ALPHA,
        BlendFactor::DstColor => vk::BlendFactor::DST_COLOR,
        BlendFactor::OneMinusDstColor => vk::BlendFactor::ONE_MINUS_DST_COLOR,
        BlendFactor::DstAlpha => vk::BlendFactor::DST_ALPHA,
        BlendFactor::OneMinusDstAlpha => vk::BlendFactor::ONE_MINUS_DST_ALPHA,
        BlendFactor::SrcAlphaSaturated => vk::BlendFactor::SRC_ALPHA_SATURATE,
        BlendFactor::Constant => vk::BlendFactor::CONSTANT_COLOR,
        BlendFactor::OneMinusConstant => vk::BlendFactor::ONE_MINUS_CONSTANT_COLOR,
        BlendFactor::Src1Color => vk::BlendFactor::SRC1_COLOR,
        BlendFactor::OneMinusSrc1Color => vk::BlendFactor::ONE_MINUS_SRC1_COLOR,
        BlendFactor::Src1Alpha => vk::BlendFactor::SRC1_ALPHA,
        BlendFactor::OneMinusSrc1Alpha => vk::BlendFactor::ONE_MINUS_SRC1_ALPHA,
    }
}

/// Convert a blend operation to the Vulkan blend op.
pub fn convert_blend_op(op: BlendOp) -> vk::BlendOp {
    match op {
        BlendOp::Add => vk::BlendOp::ADD,
        BlendOp::Subtract => vk::BlendOp::SUBTRACT,
        BlendOp::ReverseSubtract => vk::BlendOp::REVERSE_SUBTRACT,
        BlendOp::Min => vk::BlendOp::MIN,
        BlendOp::Max => vk::BlendOp::MAX,
    }
}

/// Convert a color write mask to Vulkan color component flags.
pub fn convert_color_write_mask(mask: ColorWriteMask) -> vk::ColorComponentFlags {
    let mut result = vk::ColorComponentFlags::empty();
    if mask.contains(ColorWriteMask::RED) {
        result |= vk::ColorComponentFlags::R;
    }
    if mask.contains(ColorWriteMask::GREEN) {
        result |= vk::ColorComponentFlags::G;
    }
    if mask.contains(ColorWriteMask::BLUE) {
        result |= vk::ColorComponentFlags::B;
    }
    if mask.contains(ColorWriteMask::ALPHA) {
        result |= vk::ColorComponentFlags::A;
    }
    result
}

/// Convert a load operation to the Vulkan attachment load op.
pub fn convert_load_op(op: LoadOp) -> vk::AttachmentLoadOp {
    match op {
        LoadOp::Load => vk::AttachmentLoadOp::LOAD,
        LoadOp::Clear => vk::AttachmentLoadOp::CLEAR,
        LoadOp::DontCare => vk::AttachmentLoadOp::DONT_CARE,
    }
}

/// Convert a store operation to the Vulkan attachment store op.
pub fn convert_store_op(op: StoreOp) -> vk::AttachmentStoreOp {
    match op {
        StoreOp::Store => vk::AttachmentStoreOp::STORE,
        StoreOp::DontCare => vk::AttachmentStoreOp::DONT_CARE,
    }
}

/// Convert a sample count to Vulkan sample count flags.
///
/// Counts of zero and one both mean "not multisampled". Counts that are
/// not a supported power of two fall back to a single sample.
pub fn convert_sample_count(sample_count: u8) -> vk::SampleCountFlags {
    match sample_count {
        2 => vk::SampleCountFlags::TYPE_2,
        4 => vk::SampleCountFlags::TYPE_4,
        8 => vk::SampleCountFlags::TYPE_8,
        16 => vk::SampleCountFlags::TYPE_16,
        32 => vk::SampleCountFlags::TYPE_32,
        64 => vk::SampleCountFlags::TYPE_64,
        _ => vk::SampleCountFlags::TYPE_1,
    }
}

/// Convert resource usage flags to Vulkan buffer usage flags.
///
/// Both SHADER_RESOURCE and UNORDERED_ACCESS map to the storage-buffer
/// bit; the mapping is many-to-one and OR is idempotent.
pub fn convert_buffer_usage(usages: ResourceUsage) -> vk::BufferUsageFlags {
    let mut result = vk::BufferUsageFlags::empty();

    if usages.contains(ResourceUsage::COPY_SOURCE) {
        result |= vk::BufferUsageFlags::TRANSFER_SRC;
    }
    if usages.contains(ResourceUsage::COPY_DEST) {
        result |= vk::BufferUsageFlags::TRANSFER_DST;
    }
    if usages.contains(ResourceUsage::SHADER_RESOURCE) {
        result |= vk::BufferUsageFlags::STORAGE_BUFFER;
    }
    if usages.contains(ResourceUsage::UNORDERED_ACCESS) {
        result |= vk::BufferUsageFlags::STORAGE_BUFFER;
    }
    if usages.contains(ResourceUsage::CONSTANT_BUFFER) {
        result |= vk::BufferUsageFlags::UNIFORM_BUFFER;
    }
    if usages.contains(ResourceUsage::INDEX_BUFFER) {
        result |= vk::BufferUsageFlags::INDEX_BUFFER;
    }
    if usages.contains(ResourceUsage::VERTEX_BUFFER) {
        result |= vk::BufferUsageFlags::VERTEX_BUFFER;
    }
    if usages.contains(ResourceUsage::INDIRECT_BUFFER) {
        result |= vk::BufferUsageFlags::INDIRECT_BUFFER;
    }

    result
}

/// Convert resource usage flags to Vulkan image usage flags.
pub fn convert_image_usage(usages: ResourceUsage) -> vk::ImageUsageFlags {
    let mut result = vk::ImageUsageFlags::empty();

    if usages.contains(ResourceUsage::COPY_SOURCE) {
        result |= vk::ImageUsageFlags::TRANSFER_SRC;
    }
    if usages.contains(ResourceUsage::COPY_DEST) {
        result |= vk::ImageUsageFlags::TRANSFER_DST;
    }
    if usages.contains(ResourceUsage::SHADER_RESOURCE) {
        result |= vk::ImageUsageFlags::SAMPLED;
    }
    if usages.contains(ResourceUsage::UNORDERED_ACCESS) {
        result |= vk::ImageUsageFlags::STORAGE;
    }
    if usages.contains(ResourceUsage::RENDER_TARGET) {
        result |= vk::ImageUsageFlags::COLOR_ATTACHMENT;
    }
    if usages.contains(ResourceUsage::DEPTH_STENCIL) {
        result |= vk::ImageUsageFlags::DEPTH_STENCIL_ATTACHMENT;
    }

    result
}

/// Build the Vulkan buffer create info for a normalized descriptor.
///
/// The descriptor must already be normalized; this function does not
/// re-validate it. Unsupported usage combinations surface later as a
/// native creation failure.
pub fn buffer_create_info(desc: &ResourceDescriptor) -> vk::BufferCreateInfo<'static> {
    vk::BufferCreateInfo::default()
        .size(desc.width_or_size)
        .usage(convert_buffer_usage(desc.usages))
        .sharing_mode(vk::SharingMode::EXCLUSIVE)
}

/// Build the Vulkan image create info for a normalized descriptor.
///
/// The descriptor must already be normalized and describe a texture.
/// Height participates only for 2D/3D textures, depth only for 3D, and
/// array layers only for 1D/2D, matching the normalizer's canonical form.
pub fn image_create_info(desc: &ResourceDescriptor) -> vk::ImageCreateInfo<'static> {
    debug_assert!(desc.resource_type.is_texture());

    let image_type = match desc.resource_type {
        ResourceType::Texture1d => vk::ImageType::TYPE_1D,
        ResourceType::Texture3d => vk::ImageType::TYPE_3D,
        _ => vk::ImageType::TYPE_2D,
    };
    let extent = vk::Extent3D {
        width: desc.width_or_size as u32,
        height: match desc.resource_type {
            ResourceType::Texture2d | ResourceType::Texture3d => desc.height,
            _ => 1,
        },
        depth: match desc.resource_type {
            ResourceType::Texture3d => desc.depth_or_array_size,
            _ => 1,
        },
    };
    let array_layers = match desc.resource_type {
        ResourceType::Texture1d | ResourceType::Texture2d => desc.depth_or_array_size,
        _ => 1,
    };

    vk::ImageCreateInfo::default()
        .image_type(image_type)
        .extent(extent)
        .mip_levels(desc.mip_levels)
        .array_layers(array_layers)
        .format(convert_format(desc.pixel_format))
        .tiling(vk::ImageTiling::OPTIMAL)
        .initial_layout(vk::ImageLayout::UNDEFINED)
        .usage(convert_image_usage(desc.usages))
        .samples(convert_sample_count(desc.sample_count))
        .sharing_mode(vk::SharingMode::EXCLUSIVE)
}

/// Allocation strategy derived from a resource's heap kind.
///
/// Feeds the `location`/`allocation_scheme` fields of the allocator's
/// `AllocationCreateDesc`; the memory requirements and debug name are
/// supplied by the caller at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationStrategy {
    /// Which side of the bus the memory lives on.
    pub location: MemoryLocation,
    /// Whether the resource should get a dedicated high-priority block.
    pub dedicated: bool,
}

/// Select the allocation strategy for a heap kind.
pub fn allocation_strategy(heap: ResourceHeap) -> AllocationStrategy {
    match heap {
        ResourceHeap::Local => AllocationStrategy {
            location: MemoryLocation::GpuOnly,
            dedicated: true,
        },
        ResourceHeap::Upload => AllocationStrategy {
            location: MemoryLocation::CpuToGpu,
            dedicated: false,
        },
        ResourceHeap::Readback => AllocationStrategy {
            location: MemoryLocation::GpuToCpu,
            dedicated: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_format_basic() {
        assert_eq!(convert_format(Format::Unknown), vk::Format::UNDEFINED);
        assert_eq!(convert_format(Format::Rgba8Unorm), vk::Format::R8G8B8A8_UNORM);
        assert_eq!(
            convert_format(Format::Depth24UnormStencil8),
            vk::Format::D24_UNORM_S8_UINT
        );
        assert_eq!(
            convert_format(Format::Bc7RgbaUnormSrgb),
            vk::Format::BC7_SRGB_BLOCK
        );
    }

    #[test]
    fn test_convert_buffer_usage_storage_overlap() {
        // SHADER_RESOURCE and UNORDERED_ACCESS both map to STORAGE_BUFFER;
        // setting both must not produce anything beyond the single bit.
        let both = convert_buffer_usage(
            ResourceUsage::SHADER_RESOURCE | ResourceUsage::UNORDERED_ACCESS,
        );
        assert_eq!(both, vk::BufferUsageFlags::STORAGE_BUFFER);
    }

    #[test]
    fn test_convert_buffer_usage_combination() {
        let usage = convert_buffer_usage(
            ResourceUsage::VERTEX_BUFFER | ResourceUsage::COPY_DEST | ResourceUsage::INDIRECT_BUFFER,
        );
        assert_eq!(
            usage,
            vk::BufferUsageFlags::VERTEX_BUFFER
                | vk::BufferUsageFlags::TRANSFER_DST
                | vk::BufferUsageFlags::INDIRECT_BUFFER
        );
    }

    #[test]
    fn test_convert_image_usage_attachments() {
        assert_eq!(
            convert_image_usage(ResourceUsage::RENDER_TARGET),
            vk::ImageUsageFlags::COLOR_ATTACHMENT
        );
        assert_eq!(
            convert_image_usage(ResourceUsage::DEPTH_STENCIL | ResourceUsage::SHADER_RESOURCE),
            vk::ImageUsageFlags::DEPTH_STENCIL_ATTACHMENT | vk::ImageUsageFlags::SAMPLED
        );
    }

    #[test]
    fn test_convert_sample_count_fallback() {
        assert_eq!(convert_sample_count(0), vk::SampleCountFlags::TYPE_1);
        assert_eq!(convert_sample_count(1), vk::SampleCountFlags::TYPE_1);
        assert_eq!(convert_sample_count(4), vk::SampleCountFlags::TYPE_4);
        assert_eq!(convert_sample_count(3), vk::SampleCountFlags::TYPE_1);
        assert_eq!(convert_sample_count(64), vk::SampleCountFlags::TYPE_64);
    }

    #[test]
    fn test_buffer_create_info_fields() {
        let desc =
            ResourceDescriptor::buffer(4096, ResourceUsage::CONSTANT_BUFFER | ResourceUsage::COPY_DEST)
                .normalize();
        let info = buffer_create_info(&desc);
        assert_eq!(info.size, 4096);
        assert_eq!(
            info.usage,
            vk::BufferUsageFlags::UNIFORM_BUFFER | vk::BufferUsageFlags::TRANSFER_DST
        );
        assert_eq!(info.sharing_mode, vk::SharingMode::EXCLUSIVE);
    }

    #[test]
    fn test_image_create_info_2d() {
        let desc = ResourceDescriptor::texture_2d(
            640,
            480,
            Format::Bgra8Unorm,
            ResourceUsage::RENDER_TARGET | ResourceUsage::SHADER_RESOURCE,
        )
        .with_array_size(6)
        .normalize();
        let info = image_create_info(&desc);
        assert_eq!(info.image_type, vk::ImageType::TYPE_2D);
        assert_eq!(info.extent.width, 640);
        assert_eq!(info.extent.height, 480);
        assert_eq!(info.extent.depth, 1);
        assert_eq!(info.array_layers, 6);
        assert_eq!(info.initial_layout, vk::ImageLayout::UNDEFINED);
        assert_eq!(info.tiling, vk::ImageTiling::OPTIMAL);
        assert_eq!(
            info.usage,
            vk::ImageUsageFlags::COLOR_ATTACHMENT | vk::ImageUsageFlags::SAMPLED
        );
    }

    #[test]
    fn test_image_create_info_1d_flattens_height() {
        let desc = ResourceDescriptor::texture_1d(256, Format::R8Unorm, ResourceUsage::SHADER_RESOURCE)
            .with_array_size(4)
            .normalize();
        let info = image_create_info(&desc);
        assert_eq!(info.image_type, vk::ImageType::TYPE_1D);
        assert_eq!(info.extent.height, 1);
        assert_eq!(info.extent.depth, 1);
        assert_eq!(info.array_layers, 4);
    }

    #[test]
    fn test_image_create_info_3d_uses_depth() {
        let desc = ResourceDescriptor::texture_3d(
            32,
            32,
            16,
            Format::R32Float,
            ResourceUsage::UNORDERED_ACCESS,
        )
        .normalize();
        let info = image_create_info(&desc);
        assert_eq!(info.image_type, vk::ImageType::TYPE_3D);
        assert_eq!(info.extent.depth, 16);
        assert_eq!(info.array_layers, 1);
        assert_eq!(info.usage, vk::ImageUsageFlags::STORAGE);
    }

    #[test]
    fn test_allocation_strategy_per_heap() {
        let local = allocation_strategy(ResourceHeap::Local);
        assert_eq!(local.location, MemoryLocation::GpuOnly);
        assert!(local.dedicated);

        let upload = allocation_strategy(ResourceHeap::Upload);
        assert_eq!(upload.location, MemoryLocation::CpuToGpu);
        assert!(!upload.dedicated);

        let readback = allocation_strategy(ResourceHeap::Readback);
        assert_eq!(readback.location, MemoryLocation::GpuToCpu);
        assert!(!readback.dedicated);
    }
}
