const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const",
    "continue", "crate", "do", "dyn", "else", "enum", "extern", "false",
    "final", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "macro",
    "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Normalize a schema field or argument name to the host member naming
/// convention: `camelCase` becomes `snake_case`, and names that collide with
/// a Rust keyword get a trailing `_` (`type` becomes `type_`).
///
/// Runs of capitals are treated as one word, so `todoURL` becomes `todo_url`
/// and `HTTPServer` becomes `http_server`.
pub fn to_member_name(name: &str) -> String {
    let chars = name.chars().collect::<Vec<_>>();
    let mut member = String::with_capacity(name.len() + 4);

    for (idx, ch) in chars.iter().enumerate() {
        if ch.is_uppercase() && idx > 0 {
            let prev = chars[idx - 1];
            let next_is_lower = chars.get(idx + 1).is_some_and(|c| c.is_lowercase());
            let starts_word = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if starts_word && !member.ends_with('_') {
                member.push('_');
            }
        }
        member.extend(ch.to_lowercase());
    }

    if RUST_KEYWORDS.contains(&member.as_str()) {
        member.push('_');
    }
    member
}
