//! Filesystem and URL path helpers.

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to joining with the current directory for paths that do not
/// exist yet (e.g. an output directory before the first build).
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Render a relative filesystem path with `/` separators on every platform.
///
/// `posts\hello.md` -> `posts/hello.md`
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Drop exactly one trailing `/`, mirroring how redirect endpoints are
/// registered (`/a/b/` -> `/a/b`, `/` -> ``).
#[inline]
pub fn strip_one_trailing_slash(s: &str) -> &str {
    s.strip_suffix('/').unwrap_or(s)
}

/// Whether a URL path has a `.` or `..` segment.
pub fn has_dot_segment(url: &str) -> bool {
    url.split(['/', '\\']).any(|seg| seg == "." || seg == "..")
}

/// Map a URL path to the directory index file that serves it.
///
/// `/2021/03/05/hello` -> `{output_dir}/2021/03/05/hello/index.html`
///
/// Returns `None` when the path has dot segments and could leave `output_dir`.
pub fn url_to_index_file(url: &str, output_dir: &Path) -> Option<PathBuf> {
    if has_dot_segment(url) {
        return None;
    }
    let relative = url.trim_matches('/');
    if relative.is_empty() {
        Some(output_dir.join("index.html"))
    } else {
        Some(output_dir.join(relative).join("index.html"))
    }
}
