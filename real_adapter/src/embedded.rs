use buildinfo_logic::types::{BuildMetadata, BuildSetting, EmbeddedMetadata};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/embedded_metadata.rs"));
}

/// Resources and toolchain metadata captured by the build script.
#[derive(Debug, Clone, Copy)]
pub struct CapturedMetadata {
    pub describe: Option<&'static str>,
    pub revision: Option<&'static str>,
    pub status: Option<&'static str>,
    pub toolchain_version: Option<&'static str>,
    pub settings: &'static [(&'static str, &'static str)],
}

impl CapturedMetadata {
    pub const COMPILED: Self = Self {
        describe: generated::DESCRIBE,
        revision: generated::REVISION,
        status: generated::STATUS,
        toolchain_version: generated::TOOLCHAIN_VERSION,
        settings: generated::SETTINGS,
    };

    pub fn embedded_metadata(&self) -> EmbeddedMetadata {
        EmbeddedMetadata::from_resources(self.describe, self.revision, self.status)
    }

    /// `None` if the compiler could not be queried at build time.
    pub fn build_metadata(&self) -> Option<BuildMetadata> {
        let toolchain_version = self.toolchain_version?;
        let settings = self
            .settings
            .iter()
            .map(|(key, value)| BuildSetting::new(*key, *value))
            .collect();
        Some(BuildMetadata::new(toolchain_version, settings))
    }
}
