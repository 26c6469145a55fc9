pub mod registry;
pub mod section;

pub use registry::{Manifest, ManifestError, Registry, RegistryError};
pub use section::{SectionId, SectionRecord};
