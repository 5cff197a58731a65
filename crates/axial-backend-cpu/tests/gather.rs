use axial::{ArrayBackend, ArrayError, Buffer, DType};
use axial_backend_cpu::HostBackend;

fn params_2x2() -> Buffer {
    Buffer::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], [2, 2]).expect("params")
}

#[test]
fn selects_along_the_trailing_axis() {
    let backend = HostBackend::default();
    let indices = Buffer::from_vec(vec![0i64, 0, 1, 0], [2, 2]).expect("indices");
    let result = backend
        .gather(&params_2x2(), &indices, -1, None)
        .expect("gather");
    assert_eq!(result.to_vec::<f32>().expect("values"), vec![1.0, 1.0, 4.0, 3.0]);
}

#[test]
fn selects_rows_along_axis_zero() {
    let backend = HostBackend::default();
    let indices = Buffer::from_vec(vec![1i64, 1, 0, 0], [2, 2]).expect("indices");
    let result = backend
        .gather(&params_2x2(), &indices, 0, None)
        .expect("gather");
    assert_eq!(result.to_vec::<f32>().expect("values"), vec![3.0, 4.0, 1.0, 2.0]);
}

#[test]
fn axis_extent_follows_the_indices() {
    let backend = HostBackend::default();
    let indices = Buffer::from_vec(vec![0i64, 0, 1, 1, 0, 1], [3, 2]).expect("indices");
    let result = backend
        .gather(&params_2x2(), &indices, 0, None)
        .expect("gather");
    assert_eq!(result.dims(), [3, 2]);
    assert_eq!(
        result.to_vec::<f32>().expect("values"),
        vec![1.0, 2.0, 3.0, 4.0, 1.0, 4.0]
    );
}

#[test]
fn i32_indices_are_accepted() {
    let backend = HostBackend::default();
    let indices = Buffer::from_vec(vec![1i32, 0], [2]).expect("indices");
    let params = Buffer::from_vec(vec![10.0f32, 20.0], [2]).expect("params");
    let result = backend.gather(&params, &indices, 0, None).expect("gather");
    assert_eq!(result.to_vec::<f32>().expect("values"), vec![20.0, 10.0]);
}

#[test]
fn indices_rank_must_match_params() {
    let backend = HostBackend::default();
    let indices = Buffer::from_vec(vec![0i64, 1], [2]).expect("indices");
    let err = backend
        .gather(&params_2x2(), &indices, 0, None)
        .expect_err("rank-1 indices against rank-2 params");
    assert!(matches!(err, ArrayError::InvalidArgument { argument: "indices", .. }));
}

#[test]
fn off_axis_extents_must_match() {
    let backend = HostBackend::default();
    let indices = Buffer::from_vec(vec![0i64; 6], [2, 3]).expect("indices");
    let err = backend
        .gather(&params_2x2(), &indices, 0, None)
        .expect_err("extent 3 off the gather axis");
    assert_eq!(
        err,
        ArrayError::ShapeMismatch {
            argument: "indices",
            expected: vec![2, 2],
            got: vec![2, 3],
        }
    );
}

#[test]
fn out_of_bounds_positions_are_reported() {
    let backend = HostBackend::default();
    let indices = Buffer::from_vec(vec![0i64, 2, 0, 0], [2, 2]).expect("indices");
    let err = backend
        .gather(&params_2x2(), &indices, 1, None)
        .expect_err("position 2 on an axis of size 2");
    assert_eq!(
        err,
        ArrayError::IndexOutOfBounds {
            index: 2,
            axis: 1,
            size: 2,
        }
    );
}

#[test]
fn negative_positions_are_rejected() {
    let backend = HostBackend::default();
    let indices = Buffer::from_vec(vec![-1i64, 0, 0, 0], [2, 2]).expect("indices");
    let err = backend
        .gather(&params_2x2(), &indices, 1, None)
        .expect_err("negative position");
    assert!(matches!(err, ArrayError::IndexOutOfBounds { index: -1, .. }));
}

#[test]
fn commits_into_a_matching_out_buffer() {
    let backend = HostBackend::default();
    let indices = Buffer::from_vec(vec![1i64, 0, 0, 1], [2, 2]).expect("indices");
    let mut out = Buffer::zeros(DType::F32, [2, 2]).expect("out");
    let result = backend
        .gather(&params_2x2(), &indices, 1, Some(&mut out))
        .expect("gather");
    assert_eq!(out.to_vec::<f32>().expect("out"), vec![2.0, 1.0, 3.0, 4.0]);
    assert_eq!(result, out);
}

#[test]
fn out_shape_is_validated_before_any_write() {
    let backend = HostBackend::default();
    let indices = Buffer::from_vec(vec![0i64, 0, 1, 1], [2, 2]).expect("indices");
    let mut out = Buffer::filled(9.0f32, [4]).expect("out");
    let err = backend
        .gather(&params_2x2(), &indices, 0, Some(&mut out))
        .expect_err("out shape differs from the result shape");
    assert_eq!(
        err,
        ArrayError::ShapeMismatch {
            argument: "out",
            expected: vec![2, 2],
            got: vec![4],
        }
    );
    assert_eq!(out.to_vec::<f32>().expect("out"), vec![9.0; 4]);
}

#[test]
fn bad_axes_are_rejected() {
    let backend = HostBackend::default();
    let indices = Buffer::from_vec(vec![0i64; 4], [2, 2]).expect("indices");
    let err = backend
        .gather(&params_2x2(), &indices, 2, None)
        .expect_err("axis 2 against rank 2");
    assert!(matches!(err, ArrayError::InvalidArgument { argument: "axis", .. }));
}
