use crate::platform::Platform;
use crate::types::{BuildMetadata, EmbeddedMetadata};
use buildinfo_base::result::BuildInfoResult;
use std::fmt::Debug;
use std::path::Path;
use std::rc::Rc;

/// Reads the version control metadata embedded into the binary.
pub trait EmbeddedMetadataLoader {
    fn load_embedded_metadata(&self) -> EmbeddedMetadata;
}

/// Reports what the toolchain recorded about the build.
pub trait BuildInspector {
    /// `None` if the binary carries no build metadata.
    fn inspect_build_metadata(&self) -> Option<BuildMetadata>;
    fn platform(&self) -> Platform;
}

pub trait Adapter: EmbeddedMetadataLoader + BuildInspector + Debug + 'static {
    fn args(&self) -> Vec<String>;
    fn print(&self, message: &str);
    fn write_file(&self, path: &Path, contents: &str) -> BuildInfoResult<()>;
    fn exit(&self, exit_code: i32);
}

pub type AdapterBox = Rc<dyn Adapter>;
