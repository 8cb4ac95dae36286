use std::{fmt, io::Write};

use crate::recognizer::{Recognized, recognize};

/// Separates a section identifier (and modifier) from its content.
pub const DELIMITER: &str = "::";

/// Modifier character asking for lines to be concatenated without separator.
pub const MERGE: char = '+';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Comment,
    ReqMethod,
    ReqPath,
    ReqQuery,
    RspCode,
    Header,
    Body,
}

impl SectionId {
    /// Identifiers tried by the recognizer, in order. Comments are recognized
    /// by the bare delimiter and are not part of this table.
    ///
    /// No token is a prefix of another, so the order never changes a match.
    /// After the token one modifier character is tried before the bare
    /// delimiter, like the greedy `(.)?` in `^(RspCode|ReqMethod|...)(.)?::(.*)`.
    pub const RECOGNIZED: [SectionId; 6] = [
        SectionId::RspCode,
        SectionId::ReqMethod,
        SectionId::ReqPath,
        SectionId::ReqQuery,
        SectionId::Header,
        SectionId::Body,
    ];

    /// Wire token written before the modifier and delimiter.
    pub fn token(&self) -> &'static str {
        match self {
            SectionId::Comment => "",
            SectionId::ReqMethod => "ReqMethod",
            SectionId::ReqPath => "ReqPath",
            SectionId::ReqQuery => "ReqQuery",
            SectionId::RspCode => "RspCode",
            SectionId::Header => "Header",
            SectionId::Body => "Body",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionId::Comment => f.write_str("comment"),
            other => f.write_str(other.token()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modifier {
    #[default]
    None,
    Merge,
    /// Any other single character. Kept so the section re-serializes as
    /// written; joins like `None`.
    Other(char),
}

impl Modifier {
    pub fn from_char(c: char) -> Self {
        match c {
            MERGE => Modifier::Merge,
            other => Modifier::Other(other),
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Modifier::None => None,
            Modifier::Merge => Some(MERGE),
            Modifier::Other(c) => Some(*c),
        }
    }

    /// String placed between lines when the section is read as one value.
    pub fn separator(&self) -> &'static str {
        match self {
            Modifier::Merge => "",
            Modifier::None | Modifier::Other(_) => "\n",
        }
    }
}

/// A named, ordered run of fixture lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: SectionId,
    modifier: Modifier,
    lines: Vec<String>,
}

impl Section {
    pub fn new(id: SectionId, modifier: Modifier, lines: Vec<String>) -> Self {
        Self {
            id,
            modifier,
            lines,
        }
    }

    /// Builds a section from a line opening one, `None` for ordinary content.
    pub fn open(line: &str) -> Option<Self> {
        match recognize(line) {
            Recognized::Comment(content) => Some(Self::comment(content)),
            Recognized::Open {
                id,
                modifier,
                content,
            } => Some(Self::new(id, modifier, vec![content.to_string()])),
            Recognized::NoMatch(_) => None,
        }
    }

    pub fn comment(content: &str) -> Self {
        Self::new(SectionId::Comment, Modifier::None, vec![content.to_string()])
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Section content as a single value, lines joined per modifier.
    pub fn joined(&self) -> String {
        self.lines.join(self.modifier.separator())
    }

    /// Section as written in a fixture file, with a trailing new line.
    /// Comment lines each get their own delimiter.
    pub fn to_wire(&self) -> String {
        if self.id == SectionId::Comment && !self.lines.is_empty() {
            return self
                .lines
                .iter()
                .map(|line| format!("{DELIMITER}{line}\n"))
                .collect();
        }

        let mut out = String::from(self.id.token());
        if let Some(c) = self.modifier.as_char() {
            out.push(c);
        }
        out.push_str(DELIMITER);
        out.push_str(&self.lines.join("\n"));
        out.push('\n');
        out
    }

    pub fn write_to(&self, mut w: impl Write) -> std::io::Result<usize> {
        let wire = self.to_wire();
        w.write_all(wire.as_bytes())?;
        Ok(wire.len())
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}
