pub const VCS_REVISION_KEY: &str = "vcs.revision";
pub const VCS_MODIFIED_KEY: &str = "vcs.modified";

/// Version control metadata baked into the binary by the resource generation step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddedMetadata {
    pub descriptor: String,
    pub revision: String,
    pub work_in_progress: bool,
}

impl EmbeddedMetadata {
    pub fn new(
        descriptor: impl Into<String>,
        revision: impl Into<String>,
        work_in_progress: bool,
    ) -> Self {
        Self {
            descriptor: descriptor.into(),
            revision: revision.into(),
            work_in_progress,
        }
    }

    /// Interprets the raw `describe.txt`, `revision.txt` and `status.txt` contents.
    ///
    /// Descriptor and revision are trimmed. Any status content at all, whitespace
    /// included, marks the tree as modified.
    pub fn from_resources(
        describe: Option<&str>,
        revision: Option<&str>,
        status: Option<&str>,
    ) -> Self {
        Self {
            descriptor: describe.map(str::trim).unwrap_or_default().to_string(),
            revision: revision.map(str::trim).unwrap_or_default().to_string(),
            work_in_progress: status.is_some_and(|status| !status.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSetting {
    pub key: String,
    pub value: String,
}

impl BuildSetting {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Metadata the toolchain recorded about the build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildMetadata {
    pub toolchain_version: String,
    pub settings: Vec<BuildSetting>,
}

impl BuildMetadata {
    pub fn new(toolchain_version: impl Into<String>, settings: Vec<BuildSetting>) -> Self {
        Self {
            toolchain_version: toolchain_version.into(),
            settings,
        }
    }

    /// Last value recorded for `key`, if any.
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings
            .iter()
            .rev()
            .find(|setting| setting.key == key)
            .map(|setting| setting.value.as_str())
    }

    pub fn vcs_revision(&self) -> &str {
        self.setting(VCS_REVISION_KEY).unwrap_or_default()
    }

    pub fn vcs_modified(&self) -> bool {
        self.setting(VCS_MODIFIED_KEY) == Some("true")
    }
}
