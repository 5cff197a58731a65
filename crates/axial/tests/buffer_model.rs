use axial::{ArrayError, Buffer, DType, Device, Shape};

#[test]
fn from_vec_checks_the_element_count() {
    let err = Buffer::from_vec(vec![1.0f32, 2.0, 3.0], [2, 2]).expect_err("three values for four slots");
    assert_eq!(
        err,
        ArrayError::ShapeMismatch {
            argument: "values",
            expected: vec![2, 2],
            got: vec![3],
        }
    );
}

#[test]
fn typed_views_enforce_the_dtype() {
    let mut buffer = Buffer::from_vec(vec![1.0f32, 2.0], [2]).expect("buffer");
    let err = buffer.values::<f64>().expect_err("f64 view of f32 storage");
    assert_eq!(
        err,
        ArrayError::DtypeMismatch {
            argument: "buffer",
            expected: DType::F64,
            got: DType::F32,
        }
    );
    assert!(buffer.values_mut::<i32>().is_err());
    assert_eq!(buffer.values::<f32>().expect("matching view"), &[1.0, 2.0]);
}

#[test]
fn to_scalar_requires_a_single_element() {
    assert_eq!(Buffer::from_scalar(7i64).to_scalar::<i64>().expect("scalar"), 7);
    let buffer = Buffer::from_vec(vec![1i64, 2], [2]).expect("buffer");
    let err = buffer.to_scalar::<i64>().expect_err("two elements");
    assert!(matches!(err, ArrayError::InvalidArgument { argument: "buffer", .. }));
}

#[test]
fn cast_bridges_integer_and_float_storage() {
    let ints = Buffer::from_vec(vec![3i64, -2], [2]).expect("ints");
    assert_eq!(ints.cast(DType::F64).to_vec::<f64>().expect("f64"), vec![3.0, -2.0]);

    let floats = Buffer::from_vec(vec![1.75f32, -1.75], [2]).expect("floats");
    assert_eq!(floats.cast(DType::I32).to_vec::<i32>().expect("i32"), vec![1, -1]);

    let flags = Buffer::from_vec(vec![true, false], [2]).expect("flags");
    assert_eq!(flags.cast(DType::F32).to_vec::<f32>().expect("f32"), vec![1.0, 0.0]);

    let counts = Buffer::from_vec(vec![-7i32, 0], [2]).expect("counts");
    assert_eq!(counts.cast(DType::Bool).to_vec::<bool>().expect("bool"), vec![true, false]);
}

#[test]
fn cast_to_the_same_dtype_is_a_plain_clone() {
    let buffer = Buffer::from_vec(vec![1i32, 2], [2]).expect("buffer");
    assert_eq!(buffer.cast(DType::I32), buffer);
}

#[test]
fn with_device_only_retags() {
    let buffer = Buffer::from_vec(vec![1.0f32], [1]).expect("buffer");
    assert_eq!(buffer.device().name(), "cpu");
    let moved = buffer.clone().with_device(Device::new("gpu:0"));
    assert_eq!(moved.device().name(), "gpu:0");
    assert_eq!(moved.to_vec::<f32>().expect("values"), buffer.to_vec::<f32>().expect("values"));
}

#[test]
fn zeros_and_filled_cover_every_dtype() {
    let zeros = Buffer::zeros(DType::Bool, [2]).expect("zeros");
    assert_eq!(zeros.to_vec::<bool>().expect("bool"), vec![false, false]);

    let filled = Buffer::filled(2.5f32, [3]).expect("filled");
    assert_eq!(filled.to_vec::<f32>().expect("f32"), vec![2.5, 2.5, 2.5]);
    assert_eq!(filled.dtype(), DType::F32);
}

#[test]
fn element_count_overflow_is_reported() {
    let shape = Shape::from([usize::MAX, 2]);
    let err = shape.element_count().expect_err("overflow");
    assert!(matches!(err, ArrayError::InvalidArgument { argument: "shape", .. }));
    assert!(Buffer::zeros(DType::F32, [usize::MAX, 2]).is_err());
}

#[test]
fn zero_extents_make_empty_buffers() {
    let empty = Buffer::zeros(DType::F32, [0, 3]).expect("empty");
    assert_eq!(empty.element_count(), 0);
    assert_eq!(empty.rank(), 2);
    assert_eq!(Buffer::from_vec(Vec::<f32>::new(), [0, 3]).expect("empty").dims(), [0, 3]);
}

#[test]
fn shapes_convert_from_common_containers() {
    assert_eq!(Shape::from(vec![2usize, 3]).dims(), [2, 3]);
    assert_eq!(Shape::from([4usize]).rank(), 1);
    assert_eq!(Shape::scalar().element_count().expect("count"), 1);
    assert_eq!(Shape::from([2usize, 3]).to_string(), "[2, 3]");
}
