use std::path::Path;

/// File categories with distinct comment syntaxes.
///
/// A closed enumeration: dispatch over these variants selects the removal
/// rules, there is no per-category trait object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    /// C-family script sources: `.js`, `.jsx`, `.ts`, `.tsx`
    Script,
    /// Python sources: `.py`
    Python,
    /// HTML documents: `.html`, `.htm`
    Markup,
    /// Stylesheets: `.css`, `.scss`
    Stylesheet,
}

impl FileCategory {
    /// Classify a path by its extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "js" | "jsx" | "ts" | "tsx" => Some(Self::Script),
            "py" => Some(Self::Python),
            "html" | "htm" => Some(Self::Markup),
            "css" | "scss" => Some(Self::Stylesheet),
            _ => None,
        }
    }
}
