//! Domain logic - pure version rules independent of manifests and files

pub mod bump;
pub mod prerelease;
pub mod version;

pub use bump::IncrementTarget;
pub use version::Version;
