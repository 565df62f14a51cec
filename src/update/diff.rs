//! Unified diff rendering

use diffy::PatchFormatter;

/// Render a unified diff from `old` to `new` with both headers naming `name`.
///
/// Returns an empty string when the contents are identical.
pub fn unified_diff(name: &str, old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    let patch = diffy::create_patch(old, new);
    let rendered = PatchFormatter::new().fmt_patch(&patch).to_string();

    // Swap diffy's placeholder file names for the real one.
    let hunks = rendered.find("@@").map_or("", |start| &rendered[start..]);

    let mut out = format!("--- {name}\n+++ {name}\n{hunks}");
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
