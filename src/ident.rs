use std::collections::{HashMap, HashSet};
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "union", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];
/// Returns true if `word` is reserved in some Rust edition.
pub(crate) fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}
/// Returns true if `word` can be used verbatim as a Rust identifier.
pub(crate) fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    let valid_start = matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic());
    valid_start
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        && word != "_"
        && !is_keyword(word)
}
/// Hands out snake_case identifiers that stay distinct for the whole run.
///
/// The base form of a name is computed first; repeated bases get a numeric
/// suffix starting at `2`. The allocator is threaded through every input
/// root, so `foo/bar` and `foo_bar` end up as `foo_bar` and `foo_bar2`.
#[derive(Debug, Default)]
pub struct IdentifierAllocator {
    counters: HashMap<String, usize>,
    issued: HashSet<String>,
}
impl IdentifierAllocator {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn allocate(&mut self, name: &str) -> String {
        let base = base_identifier(name);
        let mut next = self.counters.get(&base).copied().unwrap_or(1);
        let mut candidate = if next == 1 {
            base.clone()
        } else {
            format!("{base}{next}")
        };
        // A suffixed base can equal another name's plain base ("a_b" + 2 vs "a_b2").
        while self.issued.contains(&candidate) {
            next += 1;
            candidate = format!("{base}{next}");
        }
        self.counters.insert(base, next + 1);
        self.issued.insert(candidate.clone());
        candidate
    }
    /// Number of identifiers handed out so far.
    pub fn len(&self) -> usize {
        self.issued.len()
    }
    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}
/// Maps a logical asset name to its snake_case base identifier.
///
/// Characters outside `[a-z0-9_]` become word breaks, runs of breaks collapse
/// to a single `_`, trailing breaks are dropped. Names starting with a digit
/// get a leading `_`, keywords a trailing one.
pub fn base_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_break = false;
    for c in name.chars().map(|c| c.to_ascii_lowercase()) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_break {
                out.push('_');
                pending_break = false;
            }
            out.push(c);
        } else {
            pending_break = true;
        }
    }
    if out.is_empty() {
        return "asset".to_string();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    if is_keyword(&out) {
        out.push('_');
    }
    out
}
