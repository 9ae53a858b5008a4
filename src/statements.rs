use regex::Regex;

/// Callee matched by default: the standard debug-logging call.
pub const DEFAULT_CALLEE: &str = "console.log";

/// Matches whole-line call statements for a single callee.
///
/// Two anchored forms: a self-contained statement (call opens and closes on
/// one line, no nested parentheses) and an opener that begins a statement
/// which may close on a later line.
#[derive(Debug, Clone)]
pub struct StatementMatcher {
    single_line: Regex,
    opener: Regex,
}

impl StatementMatcher {
    /// Build a matcher for `callee(...)` statements. The callee is taken as a
    /// literal token, not a pattern.
    pub fn new(callee: &str) -> Self {
        let escaped = regex::escape(callee);
        let single_line = Regex::new(&format!(r"^\s*{escaped}\([^)]*\);?\s*$"))
            .unwrap_or_else(|e| panic!("invalid statement pattern for {callee}: {e}"));
        let opener = Regex::new(&format!(r"^\s*{escaped}\("))
            .unwrap_or_else(|e| panic!("invalid opener pattern for {callee}: {e}"));
        Self {
            single_line,
            opener,
        }
    }
}

impl Default for StatementMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_CALLEE)
    }
}

/// Outcome of a balanced-span lookahead starting at an opener line.
enum Lookahead {
    /// Depth returned to zero; holds the index one past the last line of the
    /// statement.
    Closed(usize),
    /// End of input reached with positive depth; the opener is not a
    /// removable statement.
    Unterminated,
}

/// Opening minus closing parentheses on one line. Blind to strings and
/// comments: a parenthesis inside a string literal shifts the balance.
fn paren_delta(line: &str) -> i64 {
    let opens = line.matches('(').count() as i64;
    let closes = line.matches(')').count() as i64;
    opens - closes
}

fn balanced_span(lines: &[&str], start: usize) -> Lookahead {
    let mut depth = paren_delta(lines[start]);
    let mut end = start;

    while depth > 0 && end < lines.len() - 1 {
        end += 1;
        depth += paren_delta(lines[end]);
    }

    if depth == 0 {
        Lookahead::Closed(end + 1)
    } else {
        Lookahead::Unterminated
    }
}

/// Remove whole statements matching `matcher` from `content`, returning the
/// filtered text and the number of statements removed.
///
/// Lines are scanned sequentially. A statement spanning several lines is
/// tracked with a parenthesis depth counter and removed as one unit (counted
/// once). An opener whose depth never returns to zero before end of input is
/// kept as ordinary text and scanning resumes on the next line.
pub fn remove_statements(content: &str, matcher: &StatementMatcher) -> (String, usize) {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    let mut removed = 0usize;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if matcher.single_line.is_match(line) {
            removed += 1;
            i += 1;
            continue;
        }

        if matcher.opener.is_match(line) {
            match balanced_span(&lines, i) {
                Lookahead::Closed(end) => {
                    removed += 1;
                    i = end;
                    continue;
                }
                Lookahead::Unterminated => {}
            }
        }

        kept.push(line);
        i += 1;
    }

    (kept.join("\n"), removed)
}
