//! Property paths.
//!
//! A path is either an explicit key sequence or a string in accessor
//! syntax, which [`parse`] turns into keys:
//!
//! | string | keys |
//! |--------|------|
//! | `a.b` | `a`, `b` |
//! | `a[0].b` | `a`, `0`, `b` |
//! | `a["b.c"]` | `a`, `b.c` |
//! | `.a` | `""`, `a` |
//! | `a..b` | `a`, `""`, `b` |

use std::borrow::Cow;
use std::fmt;

/// Largest integer an index or length may hold (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathKey {
    Name(String),
    Index(usize),
}

impl PathKey {
    /// The key as a property name.
    pub fn as_name(&self) -> Cow<'_, str> {
        match self {
            PathKey::Name(name) => Cow::Borrowed(name),
            PathKey::Index(index) => Cow::Owned(index.to_string()),
        }
    }

    /// The key as an array index, if it is one.
    ///
    /// Names count only in canonical form: `0` or a digit string without a
    /// leading zero, below [`MAX_SAFE_INTEGER`]. `"01"` and `"-1"` are names.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathKey::Index(index) => Some(*index),
            PathKey::Name(name) => {
                let bytes = name.as_bytes();
                let canonical = match bytes {
                    [b'0'] => true,
                    [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
                    _ => false,
                };
                if !canonical {
                    return None;
                }
                name.parse::<u64>()
                    .ok()
                    .filter(|n| *n < MAX_SAFE_INTEGER)
                    .and_then(|n| usize::try_from(n).ok())
            }
        }
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKey::Name(name) => f.write_str(name),
            PathKey::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathKey {
    fn from(name: &str) -> Self {
        PathKey::Name(name.to_string())
    }
}

impl From<String> for PathKey {
    fn from(name: String) -> Self {
        PathKey::Name(name)
    }
}

impl From<usize> for PathKey {
    fn from(index: usize) -> Self {
        PathKey::Index(index)
    }
}

/// A path as given by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Path {
    /// Keys used as-is.
    Keys(Vec<PathKey>),
    /// Accessor syntax, parsed on use.
    Str(String),
}

impl Path {
    pub fn keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<PathKey>,
    {
        Path::Keys(keys.into_iter().map(Into::into).collect())
    }

    /// Resolve to a key sequence.
    ///
    /// A string without accessor syntax is a single key, and so is a string
    /// that `is_own_key` reports as a key of the root container: with
    /// `{"a.b": 1}` the path `"a.b"` names that one key.
    pub fn into_keys(self, is_own_key: impl FnOnce(&str) -> bool) -> Vec<PathKey> {
        match self {
            Path::Keys(keys) => keys,
            Path::Str(s) => {
                if !has_accessor_syntax(&s) || is_own_key(&s) {
                    vec![PathKey::Name(s)]
                } else {
                    parse(&s)
                }
            }
        }
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::Str(s.to_string())
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Path::Str(s)
    }
}

impl From<Vec<PathKey>> for Path {
    fn from(keys: Vec<PathKey>) -> Self {
        Path::Keys(keys)
    }
}

impl From<&[PathKey]> for Path {
    fn from(keys: &[PathKey]) -> Self {
        Path::Keys(keys.to_vec())
    }
}

/// Whether `s` contains a `.` or a bracket segment.
fn has_accessor_syntax(s: &str) -> bool {
    s.contains('.')
        || s.find('[')
            .is_some_and(|open| s[open + 1..].contains(']'))
}

/// Split accessor syntax into keys.
///
/// Never fails: characters that do not form a segment are skipped.
pub fn parse(s: &str) -> Vec<PathKey> {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let mut keys = Vec::new();

    if chars.first() == Some(&'.') {
        keys.push(PathKey::Name(String::new()));
    }

    let mut i = 0;
    while i < n {
        match chars[i] {
            '.' => {
                if empty_segment_follows(&chars, i + 1) {
                    keys.push(PathKey::Name(String::new()));
                }
                i += 1;
            }
            '[' => {
                if let Some((key, next)) = bracket_segment(&chars, i) {
                    keys.push(PathKey::Name(key));
                    i = next;
                } else {
                    if chars.get(i + 1) == Some(&']') && empty_segment_follows(&chars, i + 2) {
                        keys.push(PathKey::Name(String::new()));
                    }
                    i += 1;
                }
            }
            ']' => i += 1,
            _ => {
                let start = i;
                while i < n && !matches!(chars[i], '.' | '[' | ']') {
                    i += 1;
                }
                keys.push(PathKey::Name(chars[start..i].iter().collect()));
            }
        }
    }

    keys
}

/// True when position `at` is the end, another `.`, or an empty `[]`.
fn empty_segment_follows(chars: &[char], at: usize) -> bool {
    match chars.get(at) {
        None | Some('.') => true,
        Some('[') => chars.get(at + 1) == Some(&']'),
        _ => false,
    }
}

/// Parse `[...]` starting at `open`; returns the key and the index after `]`.
fn bracket_segment(chars: &[char], open: usize) -> Option<(String, usize)> {
    let first = *chars.get(open + 1)?;

    if first == '"' || first == '\'' {
        let mut key = String::new();
        let mut i = open + 2;
        while i < chars.len() {
            match chars[i] {
                '\\' if i + 1 < chars.len() => {
                    key.push(chars[i + 1]);
                    i += 2;
                }
                c if c == first => {
                    return (chars.get(i + 1) == Some(&']')).then_some((key, i + 2));
                }
                c => {
                    key.push(c);
                    i += 1;
                }
            }
        }
        return None;
    }

    // Unquoted: runs to the last `]` before the next `[`.
    let limit = chars[open + 2..]
        .iter()
        .position(|c| *c == '[')
        .map_or(chars.len(), |p| open + 2 + p);
    let close = chars[open + 2..limit]
        .iter()
        .rposition(|c| *c == ']')
        .map(|p| open + 2 + p)?;
    let key: String = chars[open + 1..close].iter().collect();
    Some((key.trim().to_string(), close + 1))
}
