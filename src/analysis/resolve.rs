use crate::model::node_id;
use path_clean::PathClean;
use std::path::Path;

/// Resolve one raw import string to a node identity.
///
/// Only relative imports are followed: the path is joined against the
/// importing file's directory, cleaned of `.`/`..` segments, and normalized
/// through the same naming rules as file nodes. Bare package imports and
/// imports that normalize to a barrel (`index`) yield no edge.
pub fn resolve_import(
    raw: &str,
    importing_file: &Path,
    project_root: &Path,
    source_root: &str,
) -> Option<String> {
    if !raw.starts_with('.') {
        return None;
    }

    let base = importing_file.parent().unwrap_or_else(|| Path::new(""));
    let joined = base.join(raw).clean();
    let name = node_id(&joined, project_root, source_root);

    if name.eq_ignore_ascii_case("index") {
        return None;
    }

    Some(name)
}
