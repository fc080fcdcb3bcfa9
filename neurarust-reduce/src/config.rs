//! Process-wide configuration for reduced-shape encoding.

use std::sync::atomic::{AtomicBool, Ordering};

/// Encoding used when a reduction removes axes from a shape.
///
/// The two formats only differ for a rank-2 input reduced along exactly one
/// axis without `keep_dims`: `Current` yields a rank-1 vector while `Legacy`
/// keeps the row/column-vector form (`[rows, 1]` or `[1, cols]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeFormat {
    #[default]
    Current,
    Legacy,
}

impl ShapeFormat {
    pub fn is_legacy(&self) -> bool {
        *self == ShapeFormat::Legacy
    }
}

static LEGACY_DEFAULT: AtomicBool = AtomicBool::new(cfg!(feature = "legacy-shape-format"));

/// Returns the shape format new operators pick up when none is given explicitly.
pub fn default_shape_format() -> ShapeFormat {
    if LEGACY_DEFAULT.load(Ordering::Acquire) {
        ShapeFormat::Legacy
    } else {
        ShapeFormat::Current
    }
}

/// Sets the process-wide default shape format.
///
/// Operators capture the default when they are built, so this does not affect
/// operators that already exist.
pub fn set_default_shape_format(format: ShapeFormat) {
    log::debug!("Default reduced-shape format set to {:?}", format);
    LEGACY_DEFAULT.store(format.is_legacy(), Ordering::Release);
}
