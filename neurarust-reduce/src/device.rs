/// Represents the physical location where a materialized array is stored.
///
/// Output arrays allocated for a reduction live on the same device as the
/// primary input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StorageDevice {
    /// Main system memory (RAM). This is the default device.
    #[default]
    CPU,
    /// Memory on a CUDA-enabled GPU.
    GPU,
}
