use crate::version::VersionStore;
use kdl::{KdlDocument, KdlEntry, KdlNode};

/// Renders the composed version and every input it was derived from as a KDL document.
pub fn render_build_info(store: &VersionStore) -> String {
    let mut document = KdlDocument::new();

    let mut version_node = KdlNode::new("version");
    version_node.push(store.version());
    document.nodes_mut().push(version_node);

    let mut platform_node = KdlNode::new("platform");
    platform_node.push(KdlEntry::new_prop("os", store.platform().os.as_str()));
    platform_node.push(KdlEntry::new_prop("arch", store.platform().arch.as_str()));
    document.nodes_mut().push(platform_node);

    let embedded = store.embedded();
    let mut embedded_children = KdlDocument::new();
    embedded_children
        .nodes_mut()
        .push(value_node("descriptor", embedded.descriptor.as_str()));
    embedded_children
        .nodes_mut()
        .push(value_node("revision", embedded.revision.as_str()));
    embedded_children
        .nodes_mut()
        .push(value_node("work-in-progress", embedded.work_in_progress));
    let mut embedded_node = KdlNode::new("embedded");
    embedded_node.set_children(embedded_children);
    document.nodes_mut().push(embedded_node);

    if let Some(build) = store.build() {
        let mut settings = KdlDocument::new();
        for setting in &build.settings {
            let mut setting_node = KdlNode::new("setting");
            setting_node.push(setting.key.as_str());
            setting_node.push(setting.value.as_str());
            settings.nodes_mut().push(setting_node);
        }
        let mut build_node = KdlNode::new("build");
        build_node.push(KdlEntry::new_prop(
            "toolchain",
            build.toolchain_version.as_str(),
        ));
        if !settings.nodes().is_empty() {
            build_node.set_children(settings);
        }
        document.nodes_mut().push(build_node);
    }

    document.autoformat();
    document.to_string()
}

fn value_node(name: &str, value: impl Into<KdlEntry>) -> KdlNode {
    let mut node = KdlNode::new(name);
    node.push(value);
    node
}
