//! Vulkan result code translation.

use ash::vk;

use crate::error::RhiError;

/// Translate a native Vulkan result into the engine error taxonomy.
///
/// Total over all result codes: every defined code maps to exactly one
/// error kind and unrecognized codes map to [`RhiError::BadPlatformCall`].
/// Host and device out-of-memory collapse into one kind, matching how the
/// rest of the engine reacts to them.
pub fn translate_vk_result(result: vk::Result) -> Result<(), RhiError> {
    match result {
        vk::Result::SUCCESS => Ok(()),
        // INCOMPLETE means a query returned partial data; callers retry
        // with a larger buffer, same as not-ready.
        vk::Result::NOT_READY | vk::Result::INCOMPLETE => Err(RhiError::NotReady),
        vk::Result::TIMEOUT => Err(RhiError::Timeout),
        vk::Result::ERROR_OUT_OF_HOST_MEMORY | vk::Result::ERROR_OUT_OF_DEVICE_MEMORY => {
            Err(RhiError::OutOfMemory)
        }
        vk::Result::ERROR_INITIALIZATION_FAILED => Err(RhiError::BadPlatformCall),
        vk::Result::ERROR_DEVICE_LOST => {
            log::warn!("Vulkan device lost; device recreation required");
            Err(RhiError::DeviceRemoved)
        }
        vk::Result::ERROR_LAYER_NOT_PRESENT
        | vk::Result::ERROR_EXTENSION_NOT_PRESENT
        | vk::Result::ERROR_FEATURE_NOT_PRESENT
        | vk::Result::ERROR_INCOMPATIBLE_DRIVER
        | vk::Result::ERROR_FORMAT_NOT_SUPPORTED => Err(RhiError::NotSupported),
        vk::Result::ERROR_TOO_MANY_OBJECTS => Err(RhiError::OutOfResource),
        _ => Err(RhiError::BadPlatformCall),
    }
}
