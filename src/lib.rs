//! # Amaranth RHI
//!
//! Rendering hardware interface core for the Amaranth engine: the
//! stateless translation layer between engine-neutral resource
//! descriptions and the native graphics backend.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`types`] - Engine-neutral formats, descriptors, usage and state flags
//! - [`ResourceDescriptor::normalize`] - Canonicalization of resource
//!   descriptions per dimensionality, including mip chain derivation
//! - [`backend::vulkan`] - Translation to Vulkan creation parameters and
//!   barrier contents ([`BarrierSync`]), plus result code classification
//!
//! Everything is a pure function over its arguments: no shared state, no
//! locks, safe to call from any thread. The command-recording and
//! resource-creation layers consume the outputs; this crate never touches
//! a device itself.
//!
//! ## Example
//!
//! ```
//! use amaranth_rhi::types::{CommandQueueType, ResourceState};
//! use amaranth_rhi::backend::vulkan::BarrierSync;
//!
//! // What a barrier needs when a texture becomes a sampled input
//! let sync = BarrierSync::for_texture(
//!     ResourceState::SHADER_RESOURCE_PS,
//!     CommandQueueType::Graphics,
//! );
//! ```
//!
//! [`ResourceDescriptor::normalize`]: types::ResourceDescriptor::normalize
//! [`BarrierSync`]: backend::vulkan::BarrierSync

pub mod backend;
pub mod error;
pub mod types;

pub use backend::vulkan::BarrierSync;
pub use error::RhiError;
pub use types::{
    CommandQueueType, Format, ResourceDescriptor, ResourceHeap, ResourceState, ResourceType,
    ResourceUsage,
};

/// RHI library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the RHI subsystem.
///
/// This only announces itself on the log; the translation functions have
/// no setup requirements.
pub fn init() {
    log::info!("Amaranth RHI v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_descriptor_roundtrip_through_reexports() {
        let desc = ResourceDescriptor::buffer(256, ResourceUsage::CONSTANT_BUFFER).normalize();
        assert_eq!(desc.pixel_format, Format::Unknown);
    }
}
