use crate::adapter::Adapter;
use crate::version::{BUILDINFO_NAME, VersionStore};

pub fn print_help(adapter: &dyn Adapter, store: &VersionStore) {
    adapter.print(&format!(
        "{BUILDINFO_NAME} ({}) - Reports the version this binary was built from",
        store.display_version()
    ));
    let help_text = r#"
USAGE:
    buildinfo [OPTIONS]

OPTIONS:
    --help, -h          Show this help message and exit
    --version, -V       Display version information and exit (default)
    --build-info [FILE] Print the version and all build metadata as a KDL document,
                        or write the document to FILE

VERSION FORMAT:
    <tag>[-wip] [<toolchain>] <os>/<arch>

    The tag is the embedded release descriptor while it matches the revision
    the toolchain recorded, otherwise 'g' followed by the first 12 characters
    of that revision. '-wip' marks a build from a modified working tree.

ENVIRONMENT:
    BUILDINFO_LOG       Log level (off, error, warn, info, debug, trace)"#;

    adapter.print(help_text);
}
