use std::fmt;

/// Defines the possible data types for Tensor elements.
///
/// Operands carry one of these tags; type-preserving reductions forward the
/// input tag unchanged to their output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 16-bit IEEE half precision.
    F16,
    /// 16-bit brain floating point.
    BF16,
    /// 32-bit floating-point type.
    F32,
    /// 64-bit floating-point type.
    F64,
    /// 8-bit signed integer.
    I8,
    /// 16-bit signed integer.
    I16,
    /// 32-bit integer type.
    I32,
    /// 64-bit integer type.
    I64,
    /// 8-bit unsigned integer.
    U8,
    /// Boolean type (true/false values).
    Bool,
}

impl DType {
    /// Returns `true` for the floating-point types.
    pub fn is_float(&self) -> bool {
        matches!(self, DType::F16 | DType::BF16 | DType::F32 | DType::F64)
    }

    /// Returns `true` for signed and unsigned integer types (not `Bool`).
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            DType::I8 | DType::I16 | DType::I32 | DType::I64 | DType::U8
        )
    }

    pub fn is_bool(&self) -> bool {
        *self == DType::Bool
    }

    /// Size in bytes of one element.
    pub fn size_of(&self) -> usize {
        match self {
            DType::I8 | DType::U8 | DType::Bool => 1,
            DType::F16 | DType::BF16 | DType::I16 => 2,
            DType::F32 | DType::I32 => 4,
            DType::F64 | DType::I64 => 8,
        }
    }

    /// Short lowercase name, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            DType::F16 => "f16",
            DType::BF16 => "bf16",
            DType::F32 => "f32",
            DType::F64 => "f64",
            DType::I8 => "i8",
            DType::I16 => "i16",
            DType::I32 => "i32",
            DType::I64 => "i64",
            DType::U8 => "u8",
            DType::Bool => "bool",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::DType;

    #[test]
    fn test_dtype_classification() {
        assert!(DType::F16.is_float());
        assert!(DType::BF16.is_float());
        assert!(!DType::I32.is_float());
        assert!(DType::U8.is_integer());
        assert!(!DType::Bool.is_integer());
        assert!(DType::Bool.is_bool());
    }

    #[test]
    fn test_dtype_size_and_name() {
        assert_eq!(DType::F64.size_of(), 8);
        assert_eq!(DType::BF16.size_of(), 2);
        assert_eq!(DType::Bool.size_of(), 1);
        assert_eq!(DType::I64.to_string(), "i64");
    }
}
