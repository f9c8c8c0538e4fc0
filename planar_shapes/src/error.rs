use thiserror::Error;

/// Errors returned by shape operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The operation is declared by the [Geometry](crate::shapes::Geometry) trait but is not
    /// implemented for the shape. Callers must not treat this as a `false` answer.
    #[error("{operation} is not supported for {shape}")]
    NotSupported {
        operation: &'static str,
        shape: &'static str,
    },
}

pub type GeometryResult<T> = Result<T, GeometryError>;
