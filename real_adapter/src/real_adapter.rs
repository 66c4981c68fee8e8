use crate::embedded::CapturedMetadata;
use buildinfo_base::result::{BuildInfoResult, Context};
use buildinfo_logic::adapter::{Adapter, BuildInspector, EmbeddedMetadataLoader};
use buildinfo_logic::platform::Platform;
use buildinfo_logic::types::{BuildMetadata, EmbeddedMetadata};
use std::env;
use std::fmt::Debug;
use std::path::Path;

pub struct RealAdapter {
    captured: CapturedMetadata,
}

impl RealAdapter {
    pub fn new() -> Self {
        Self::with_captured_metadata(CapturedMetadata::COMPILED)
    }

    pub fn with_captured_metadata(captured: CapturedMetadata) -> Self {
        Self { captured }
    }
}

impl Default for RealAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddedMetadataLoader for RealAdapter {
    fn load_embedded_metadata(&self) -> EmbeddedMetadata {
        self.captured.embedded_metadata()
    }
}

impl BuildInspector for RealAdapter {
    fn inspect_build_metadata(&self) -> Option<BuildMetadata> {
        self.captured.build_metadata()
    }

    fn platform(&self) -> Platform {
        Platform::host()
    }
}

impl Adapter for RealAdapter {
    fn args(&self) -> Vec<String> {
        env::args().collect()
    }

    fn print(&self, message: &str) {
        println!("{message}");
    }

    fn write_file(&self, path: &Path, contents: &str) -> BuildInfoResult<()> {
        std::fs::write(path, contents).with_context(|| format!("Failed to write file {path:?}"))
    }

    fn exit(&self, exit_code: i32) {
        std::process::exit(exit_code);
    }
}

impl Debug for RealAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RealAdapter")
    }
}
