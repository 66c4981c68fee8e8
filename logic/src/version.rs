use crate::adapter::{BuildInspector, EmbeddedMetadataLoader};
use crate::compose::compose;
use crate::platform::Platform;
use crate::types::{BuildMetadata, EmbeddedMetadata};

pub const BUILDINFO_NAME: &str = "buildinfo";

/// The composed version, computed once together with the inputs it was derived from.
#[derive(Debug, Clone)]
pub struct VersionStore {
    embedded: EmbeddedMetadata,
    build: Option<BuildMetadata>,
    platform: Platform,
    version: String,
}

impl VersionStore {
    pub fn initialize(
        loader: &dyn EmbeddedMetadataLoader,
        inspector: &dyn BuildInspector,
    ) -> Self {
        let embedded = loader.load_embedded_metadata();
        let build = inspector.inspect_build_metadata();
        let platform = inspector.platform();
        let version = compose(&embedded, build.as_ref(), &platform);
        Self {
            embedded,
            build,
            platform,
            version,
        }
    }

    /// Empty if no version information could be determined.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The version for display, never empty.
    pub fn display_version(&self) -> &str {
        if self.version.is_empty() {
            "(unknown version)"
        } else {
            &self.version
        }
    }

    pub fn embedded(&self) -> &EmbeddedMetadata {
        &self.embedded
    }

    pub fn build(&self) -> Option<&BuildMetadata> {
        self.build.as_ref()
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }
}
