use axial::{ArrayBackend, ArrayError, BackendContext, Buffer, DType, Device};
use axial_backend_cpu::HostBackend;

#[test]
fn encodes_rows_in_the_default_float_dtype() {
    let backend = HostBackend::default();
    let indices = Buffer::from_vec(vec![0i64, 2], [2]).expect("indices");
    let encoded = backend.one_hot(&indices, 3).expect("one_hot");
    assert_eq!(encoded.dims(), [2, 3]);
    assert_eq!(encoded.dtype(), DType::F32);
    assert_eq!(
        encoded.to_vec::<f32>().expect("values"),
        vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0]
    );
}

#[test]
fn appends_the_depth_axis_to_the_indices_shape() {
    let backend = HostBackend::default();
    let indices = Buffer::from_vec(vec![0i64, 1, 2, 3], [2, 2]).expect("indices");
    let encoded = backend.one_hot(&indices, 4).expect("one_hot");
    assert_eq!(encoded.dims(), [2, 2, 4]);
}

#[test]
fn scalar_indices_produce_one_row() {
    let backend = HostBackend::default();
    let encoded = backend
        .one_hot(&Buffer::from_scalar(1i64), 3)
        .expect("one_hot");
    assert_eq!(encoded.dims(), [3]);
    assert_eq!(encoded.to_vec::<f32>().expect("values"), vec![0.0, 1.0, 0.0]);
}

#[test]
fn a_wider_default_float_changes_the_encoding_dtype() {
    let context = BackendContext::new(DType::F64, DType::I32, Device::cpu()).expect("context");
    let backend = HostBackend::new(context);
    let indices = Buffer::from_vec(vec![1i32], [1]).expect("indices");
    let encoded = backend.one_hot(&indices, 2).expect("one_hot");
    assert_eq!(encoded.dtype(), DType::F64);
    assert_eq!(encoded.to_vec::<f64>().expect("values"), vec![0.0, 1.0]);
}

#[test]
fn positions_at_or_past_depth_are_rejected() {
    let backend = HostBackend::default();
    let indices = Buffer::from_vec(vec![0i64, 3], [2]).expect("indices");
    let err = backend.one_hot(&indices, 3).expect_err("position 3 for depth 3");
    assert_eq!(
        err,
        ArrayError::IndexOutOfBounds {
            index: 3,
            axis: 1,
            size: 3,
        }
    );
}

#[test]
fn negative_positions_are_rejected() {
    let backend = HostBackend::default();
    let indices = Buffer::from_vec(vec![-1i64], [1]).expect("indices");
    let err = backend.one_hot(&indices, 3).expect_err("negative position");
    assert!(matches!(err, ArrayError::IndexOutOfBounds { index: -1, .. }));
}

#[test]
fn indices_must_be_integers() {
    let backend = HostBackend::default();
    let indices = Buffer::from_vec(vec![0.0f32], [1]).expect("indices");
    let err = backend.one_hot(&indices, 2).expect_err("float indices");
    assert!(matches!(err, ArrayError::InvalidArgument { argument: "indices", .. }));
}

#[test]
fn empty_indices_encode_to_an_empty_buffer() {
    let backend = HostBackend::default();
    let indices = Buffer::from_vec(Vec::<i64>::new(), [0]).expect("indices");
    let encoded = backend.one_hot(&indices, 3).expect("one_hot");
    assert_eq!(encoded.dims(), [0, 3]);
    assert_eq!(encoded.element_count(), 0);
}
