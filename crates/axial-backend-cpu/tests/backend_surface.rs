use axial::{ArrayBackend, ArrayResult, BackendContext, Buffer, DType, Device, Reduction};
use axial_backend_cpu::HostBackend;

fn accel_backend() -> HostBackend {
    let context = BackendContext::new(DType::F32, DType::I32, Device::new("gpu:0"))
        .expect("context");
    HostBackend::new(context)
}

// Callers work against the trait, not the concrete adapter.
fn bincount<B: ArrayBackend>(
    backend: &B,
    positions: &B::Handle,
    weights: &B::Handle,
    bins: usize,
) -> ArrayResult<B::Handle> {
    backend.scatter_flat(positions, weights, Some(bins), Reduction::Sum, None)
}

#[test]
fn reports_its_registry_name_and_capabilities() {
    let backend = HostBackend::default();
    assert_eq!(backend.backend_name(), "cpu");
    assert!(backend.supports_inplace_updates());
}

#[test]
fn exposes_the_context_it_was_built_with() {
    let backend = accel_backend();
    assert_eq!(backend.context().default_float(), DType::F32);
    assert_eq!(backend.context().default_int(), DType::I32);
    assert_eq!(backend.context().device().name(), "gpu:0");
}

#[test]
fn fresh_results_carry_the_context_device() {
    let backend = accel_backend();
    let indices = Buffer::from_vec(vec![0i64, 1], [2]).expect("indices");

    let encoded = backend.one_hot(&indices, 2).expect("one_hot");
    assert_eq!(encoded.device().name(), "gpu:0");

    let updates = Buffer::from_vec(vec![1.0f32, 2.0], [2]).expect("updates");
    let scattered = backend
        .scatter_flat(&indices, &updates, Some(2), Reduction::Sum, None)
        .expect("scatter");
    assert_eq!(scattered.device().name(), "gpu:0");
}

#[test]
fn out_commits_keep_the_out_buffers_device_tag() {
    let backend = accel_backend();
    let params = Buffer::from_vec(vec![1.0f32, 2.0], [2]).expect("params");
    let indices = Buffer::from_vec(vec![1i64, 0], [2]).expect("indices");
    let mut out = Buffer::zeros(DType::F32, [2])
        .expect("out")
        .with_device(Device::new("pinned"));

    let result = backend
        .gather(&params, &indices, 0, Some(&mut out))
        .expect("gather");
    assert_eq!(out.device().name(), "pinned");
    assert_eq!(result.device().name(), "pinned");
    assert_eq!(out.to_vec::<f32>().expect("out"), vec![2.0, 1.0]);
}

#[test]
fn unstacked_slices_carry_the_context_device() {
    let backend = accel_backend();
    let x = Buffer::from_vec(vec![1i32, 2], [2]).expect("x");
    let slices = backend.unstack(&x, 0, false).expect("unstack");
    for slice in &slices {
        assert_eq!(slice.device().name(), "gpu:0");
    }
}

#[test]
fn generic_callers_compose_operations_through_the_trait() {
    let backend = HostBackend::default();
    let positions = Buffer::from_vec(vec![0i64, 1, 1, 2], [4]).expect("positions");
    let weights = Buffer::from_vec(vec![1.0f32, 1.0, 1.0, 1.0], [4]).expect("weights");
    let counts = bincount(&backend, &positions, &weights, 4).expect("bincount");
    assert_eq!(counts.to_vec::<f32>().expect("counts"), vec![1.0, 2.0, 1.0, 0.0]);
}
