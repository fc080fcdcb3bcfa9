// The default shape format is process-wide, so it gets its own test binary.

use neurarust_reduce::config::{default_shape_format, set_default_shape_format};
use neurarust_reduce::{DType, ReduceSameKind, ReduceSameOp, ReductionOp, ShapeFormat, Tensor};

#[test]
fn ops_capture_default_format_at_build_time() {
    let initial = if cfg!(feature = "legacy-shape-format") {
        ShapeFormat::Legacy
    } else {
        ShapeFormat::Current
    };
    assert_eq!(default_shape_format(), initial);

    let x = Tensor::empty(vec![3, 7], DType::F32);

    set_default_shape_format(ShapeFormat::Current);
    let current = ReduceSameOp::builder(ReduceSameKind::Sum).arg(&x).axes(&[1]).build();

    set_default_shape_format(ShapeFormat::Legacy);
    let legacy = ReduceSameOp::builder(ReduceSameKind::Sum).arg(&x).axes(&[1]).build();
    let explicit = ReduceSameOp::builder(ReduceSameKind::Sum)
        .arg(&x)
        .axes(&[1])
        .shape_format(ShapeFormat::Current)
        .build();

    assert_eq!(current.output_shapes().unwrap()[0].shape(), &[3]);
    assert_eq!(legacy.output_shapes().unwrap()[0].shape(), &[3, 1]);
    assert_eq!(explicit.output_shapes().unwrap()[0].shape(), &[3]);

    set_default_shape_format(initial);
}
