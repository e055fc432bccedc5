use std::path::Path;

/// Extensions recognized as analyzable source files.
pub const SOURCE_EXTENSIONS: [&str; 4] = [".ts", ".tsx", ".js", ".jsx"];

/// Whether a directory may be descended into. The path relative to the
/// project root must pass through a segment equal to the source-root name,
/// and no segment may be hidden; a hidden segment prunes the whole subtree.
pub fn should_process_directory(dir: &Path, project_root: &Path, source_root: &str) -> bool {
    let relative = dir.strip_prefix(project_root).unwrap_or(dir);
    let mut saw_source_root = false;

    for component in relative.components() {
        let segment = component.as_os_str().to_string_lossy();
        if segment.starts_with('.') {
            return false;
        }
        if segment == source_root {
            saw_source_root = true;
        }
    }

    saw_source_root
}

/// Whether a file name is eligible for analysis: not hidden, not a
/// declaration-only `.d.ts` file, and carrying a recognized extension.
pub fn should_process_file(file_name: &str) -> bool {
    if file_name.starts_with('.') || file_name.ends_with(".d.ts") {
        return false;
    }

    SOURCE_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
}
