//! Portable array contract shared by backend adapters.
//!
//! This crate defines the vocabulary a multi-backend array layer speaks:
//! element kinds ([`DType`], [`Element`]), dense shapes and buffers
//! ([`Shape`], [`Buffer`]), device tags ([`Device`]), scatter collision
//! rules ([`Reduction`]), the error taxonomy ([`ArrayError`]), explicit
//! backend configuration ([`BackendContext`]), and the [`ArrayBackend`]
//! trait concrete adapters implement.

pub mod backend;
pub mod buffer;
pub mod context;
pub mod device;
pub mod dtype;
pub mod element;
pub mod error;
pub mod reduction;
pub mod shape;

pub use backend::ArrayBackend;
pub use buffer::{Buffer, BufferData};
pub use context::BackendContext;
pub use device::Device;
pub use dtype::DType;
pub use element::Element;
pub use error::{ArrayError, ArrayResult};
pub use reduction::Reduction;
pub use shape::Shape;
