//! Escape-aware delimited join/split.
//!
//! The escape form prefixes delimiter occurrences inside items with a
//! single backslash so the join is invertible; the naive form is the
//! legacy plain join/split the original host nodes used. Backslashes
//! themselves are never doubled, so the encoding is unambiguous only
//! when the delimiter does not start with a backslash.

/// Delimiter used by callers that do not specify one.
pub const DEFAULT_DELIMITER: &str = ", ";

/// Joins `items` with `delimiter`. With `escape` set, delimiter
/// occurrences inside items are prefixed with a backslash before
/// joining. An empty delimiter degenerates to plain concatenation.
pub fn join(items: &[String], delimiter: &str, escape: bool) -> String {
  if delimiter.is_empty() || !escape {
    return items.join(delimiter);
  }
  let escaped = format!("\\{delimiter}");
  items
    .iter()
    .map(|item| item.replace(delimiter, &escaped))
    .collect::<Vec<_>>()
    .join(delimiter)
}

/// Splits `text` on `delimiter`. With `unescape` set, a backslash
/// immediately before a delimiter marks it as literal content.
///
/// The unescape scan is a single left-to-right pass: an unescaped
/// delimiter match ends the current part, `\` + delimiter appends a
/// literal delimiter, anything else is copied through one `char` at a
/// time. A trailing backslash immediately before a delimiter therefore
/// always escapes that delimiter. There is always one more part than
/// unescaped delimiter occurrences, so empty input yields `[""]`.
/// An empty delimiter has no occurrences: the whole text is one part.
pub fn split(text: &str, delimiter: &str, unescape: bool) -> Vec<String> {
  if delimiter.is_empty() {
    return vec![text.to_string()];
  }
  if !unescape {
    return text.split(delimiter).map(str::to_string).collect();
  }

  let mut parts = Vec::new();
  let mut part = String::new();
  let mut rest = text;
  while !rest.is_empty() {
    if let Some(after) = rest.strip_prefix(delimiter) {
      parts.push(std::mem::take(&mut part));
      rest = after;
    } else if let Some(after) = rest.strip_prefix('\\').and_then(|r| r.strip_prefix(delimiter)) {
      part.push_str(delimiter);
      rest = after;
    } else {
      let mut chars = rest.chars();
      if let Some(c) = chars.next() {
        part.push(c);
      }
      rest = chars.as_str();
    }
  }
  parts.push(part);
  parts
}
