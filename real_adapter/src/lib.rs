mod embedded;
mod real_adapter;
#[cfg(test)]
mod vcs;

pub use embedded::CapturedMetadata;
pub use real_adapter::RealAdapter;

use buildinfo_logic::version::VersionStore;
use std::sync::LazyLock;

static VERSION_STORE: LazyLock<VersionStore> = LazyLock::new(|| {
    let adapter = RealAdapter::new();
    VersionStore::initialize(&adapter, &adapter)
});

/// Version of the running binary, computed on first use.
///
/// Empty if neither the embedded resources nor the build metadata name a revision.
pub fn version() -> &'static str {
    VERSION_STORE.version()
}

/// The version together with the metadata it was composed from.
pub fn version_store() -> &'static VersionStore {
    &VERSION_STORE
}
