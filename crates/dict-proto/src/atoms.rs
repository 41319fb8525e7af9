//! Atom tokenizing.
//!
//! RFC 2229 encodes structured reply lines as atoms: runs of
//! non-whitespace characters, or double-quoted strings that may contain
//! whitespace. `SHOW DB`, `SHOW STRAT`, and `MATCH` data lines are all
//! (name, quoted description) pairs, and the 151 definition marker packs
//! its headword and source database into quoted fields.

/// Split one line into atoms.
///
/// A token is either a maximal run of non-whitespace characters, or the
/// contents between a `"` and the next unescaped `"` (delimiters
/// stripped, interior whitespace preserved). Inside quotes, `\"` yields a
/// literal quote and `\\` a literal backslash. An unterminated quote is
/// tolerated: the token extends to the end of the line.
///
/// ```rust
/// use dict_proto::split_atoms;
///
/// let atoms = split_atoms("foldoc \"Free On-line Dictionary of Computing\"");
/// assert_eq!(atoms, vec!["foldoc", "Free On-line Dictionary of Computing"]);
/// ```
pub fn split_atoms(line: &str) -> Vec<String> {
    let mut atoms = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let mut atom = String::new();
        if c == '"' {
            chars.next();
            while let Some(ch) = chars.next() {
                match ch {
                    '"' => break,
                    '\\' => match chars.next() {
                        Some(escaped) => atom.push(escaped),
                        // trailing backslash in an unterminated quote
                        None => atom.push('\\'),
                    },
                    _ => atom.push(ch),
                }
            }
        } else {
            while let Some(&ch) = chars.peek() {
                if ch.is_whitespace() {
                    break;
                }
                atom.push(ch);
                chars.next();
            }
        }
        atoms.push(atom);
    }

    atoms
}

/// Quote a string for use as a command argument.
///
/// Wraps the atom in double quotes, backslash-escaping any interior `"`
/// or `\` so the server tokenizes it back to the original text.
pub fn quote_atom(atom: &str) -> String {
    let mut quoted = String::with_capacity(atom.len() + 2);
    quoted.push('"');
    for ch in atom.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}
