//! GPU backend translation layers.
//!
//! Each backend module converts the engine-neutral vocabulary in
//! [`crate::types`] into its native API's terms. Only the Vulkan backend
//! is implemented; the module boundary keeps the neutral types free of
//! any `vk::` vocabulary so further backends can slot in beside it.

pub mod vulkan;
