use crate::section::{DELIMITER, Modifier, SectionId};

/// Classification of a single fixture line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recognized<'a> {
    /// Ordinary content, returned unchanged.
    NoMatch(&'a str),
    /// Bare delimiter at line start; carries the rest of the line.
    Comment(&'a str),
    Open {
        id: SectionId,
        modifier: Modifier,
        content: &'a str,
    },
}

/// Decides whether `line` opens a section.
///
/// A modifier is tried before the plain delimiter, so `Body:::x` opens a body
/// with modifier `:` and content `x`.
pub fn recognize(line: &str) -> Recognized<'_> {
    if let Some(content) = line.strip_prefix(DELIMITER) {
        return Recognized::Comment(content);
    }

    for id in SectionId::RECOGNIZED {
        let Some(rest) = line.strip_prefix(id.token()) else {
            continue;
        };

        if let Some((modifier, content)) = split_modifier(rest) {
            return Recognized::Open {
                id,
                modifier,
                content,
            };
        }
        if let Some(content) = rest.strip_prefix(DELIMITER) {
            return Recognized::Open {
                id,
                modifier: Modifier::None,
                content,
            };
        }
    }

    Recognized::NoMatch(line)
}

fn split_modifier(rest: &str) -> Option<(Modifier, &str)> {
    let mut chars = rest.chars();
    let c = chars.next()?;
    let content = chars.as_str().strip_prefix(DELIMITER)?;
    Some((Modifier::from_char(c), content))
}
