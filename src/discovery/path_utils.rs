use std::path::Path;

/// Path as shown to the user: relative to `base` when below it, with
/// forward slashes on every platform.
pub fn display_path(path: &Path, base: Option<&Path>) -> String {
    let shown = base
        .and_then(|base| path.strip_prefix(base).ok())
        .filter(|relative| !relative.as_os_str().is_empty())
        .unwrap_or(path);
    shown.to_string_lossy().replace('\\', "/")
}

/// True when the file name ends with `.<extension>`
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| {
            let name = name.to_string_lossy();
            name.len() > extension.len()
                && name.ends_with(extension)
                && name[..name.len() - extension.len()].ends_with('.')
        })
        .unwrap_or(false)
}

/// True when the part of `path` below `root` contains `marker`.
///
/// The match is a case-sensitive substring test. An empty marker never
/// matches.
pub fn contains_marker(path: &Path, root: &Path, marker: &str) -> bool {
    if marker.is_empty() {
        return false;
    }
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.to_string_lossy().contains(marker)
}
