//! Re-exports the [`fearquery`] library for convenient access to the query client.
pub use fearquery;
