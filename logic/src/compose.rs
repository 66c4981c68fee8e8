use crate::platform::Platform;
use crate::types::{BuildMetadata, EmbeddedMetadata};

const SHORT_REVISION_LENGTH: usize = 12;
const WORK_IN_PROGRESS_SUFFIX: &str = "-wip";

/// Composes the human readable version label.
///
/// The embedded descriptor is only trusted while it matches the revision and
/// modification state the toolchain reports. Otherwise a short tag is derived
/// from the toolchain revision. Returns an empty string if neither source knows
/// a revision.
pub fn compose(
    embedded: &EmbeddedMetadata,
    build: Option<&BuildMetadata>,
    platform: &Platform,
) -> String {
    let Some(build) = build else {
        let mut descriptor = embedded.descriptor.clone();
        if descriptor.is_empty() {
            if embedded.revision.is_empty() {
                return String::new();
            }
            descriptor = short_tag(&embedded.revision);
        }
        if embedded.work_in_progress {
            descriptor.push_str(WORK_IN_PROGRESS_SUFFIX);
        }
        return format!("{descriptor} {platform}");
    };

    let vcs_revision = build.vcs_revision();
    let vcs_modified = build.vcs_modified();
    let stale = embedded.revision != vcs_revision
        || embedded.work_in_progress != vcs_modified
        || embedded.descriptor.is_empty();

    let descriptor = if stale {
        if vcs_revision.is_empty() {
            return String::new();
        }
        let mut descriptor = short_tag(vcs_revision);
        if vcs_modified {
            descriptor.push_str(WORK_IN_PROGRESS_SUFFIX);
        }
        descriptor
    } else {
        embedded.descriptor.clone()
    };
    format!("{descriptor} {} {platform}", build.toolchain_version)
}

/// `g` followed by at most the first twelve characters of the revision.
fn short_tag(revision: &str) -> String {
    let mut tag = String::from("g");
    tag.extend(revision.chars().take(SHORT_REVISION_LENGTH));
    tag
}
