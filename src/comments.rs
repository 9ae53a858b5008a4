use once_cell::sync::Lazy;
use regex::Regex;

use crate::category::FileCategory;

static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)//.*$").unwrap_or_else(|e| panic!("invalid line comment pattern: {e}"))
});

static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)/\*.*?\*/").unwrap_or_else(|e| panic!("invalid block comment pattern: {e}"))
});

static HASH_COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)#.*$").unwrap_or_else(|e| panic!("invalid hash comment pattern: {e}"))
});

static TRIPLE_DOUBLE_QUOTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)""".*?""""#).unwrap_or_else(|e| panic!("invalid docstring pattern: {e}"))
});

static TRIPLE_SINGLE_QUOTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)'''.*?'''").unwrap_or_else(|e| panic!("invalid docstring pattern: {e}"))
});

static MARKUP_COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<!--.*?-->").unwrap_or_else(|e| panic!("invalid markup comment pattern: {e}"))
});

/// Strip comments from `content` according to its category.
///
/// Line comments are cut from the marker to end of line; block comments are
/// cut non-greedily from the opening to the nearest closing delimiter, across
/// lines. This is textual matching, not lexing: a marker inside a string or
/// template literal is treated as a real comment. Callers depend on that
/// heuristic staying stable.
pub fn strip(category: FileCategory, content: &str) -> String {
    match category {
        FileCategory::Script => {
            let stripped = LINE_COMMENT.replace_all(content, "");
            BLOCK_COMMENT.replace_all(&stripped, "").into_owned()
        }
        FileCategory::Python => {
            let stripped = HASH_COMMENT.replace_all(content, "");
            let stripped = TRIPLE_DOUBLE_QUOTED.replace_all(&stripped, "");
            TRIPLE_SINGLE_QUOTED.replace_all(&stripped, "").into_owned()
        }
        FileCategory::Stylesheet => BLOCK_COMMENT.replace_all(content, "").into_owned(),
        FileCategory::Markup => MARKUP_COMMENT.replace_all(content, "").into_owned(),
    }
}
