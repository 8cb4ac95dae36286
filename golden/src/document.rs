use std::{
    fmt,
    io::{Read, Write},
    str::FromStr,
};

use crate::{
    error::{ParseError, Result},
    recognizer::{Recognized, recognize},
    section::{Modifier, Section, SectionId},
};

/// Ordered sections parsed from one fixture file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Nothing but comments seen so far.
    AwaitingHeader,
    Reading,
    /// Every remaining line belongs to the body.
    InBody,
}

struct Scanner {
    state: ScanState,
    sections: Vec<Section>,
    current: Option<usize>,
}

impl Scanner {
    fn new() -> Self {
        Self {
            state: ScanState::AwaitingHeader,
            sections: Vec::new(),
            current: None,
        }
    }

    fn feed(&mut self, number: usize, line: &str) -> Result<()> {
        if self.state == ScanState::InBody {
            self.append(line);
            return Ok(());
        }

        if line.is_empty() {
            return Ok(());
        }

        match recognize(line) {
            Recognized::Comment(content) => {
                if self.state != ScanState::AwaitingHeader {
                    tracing::warn!(line = number, content = line, "Comment after header region");
                    return Err(ParseError::CommentAfterHeader {
                        line: number,
                        content: line.to_string(),
                    });
                }
                self.open(SectionId::Comment, Modifier::None, content);
            }
            Recognized::Open {
                id,
                modifier,
                content,
            } => {
                self.state = if id == SectionId::Body {
                    ScanState::InBody
                } else {
                    ScanState::Reading
                };
                self.open(id, modifier, content);
            }
            Recognized::NoMatch(content) => {
                if self.current.is_none() {
                    tracing::warn!(line = number, content = line, "Line outside of any section");
                    return Err(ParseError::OrphanLine {
                        line: number,
                        content: line.to_string(),
                    });
                }
                self.append(content);
            }
        }

        Ok(())
    }

    fn open(&mut self, id: SectionId, modifier: Modifier, content: &str) {
        match self.sections.iter().position(|s| s.id() == id) {
            Some(index) => {
                self.sections[index].push(content);
                self.current = Some(index);
            }
            None => {
                self.sections
                    .push(Section::new(id, modifier, vec![content.to_string()]));
                self.current = Some(self.sections.len() - 1);
            }
        }
    }

    fn append(&mut self, line: &str) {
        if let Some(index) = self.current {
            self.sections[index].push(line);
        }
    }

    fn finish(self) -> Document {
        Document {
            sections: self.sections,
        }
    }
}

impl Document {
    /// Parses a whole fixture held in memory.
    pub fn parse(input: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(input)?;
        let mut scanner = Scanner::new();

        for (index, line) in text.lines().enumerate() {
            scanner.feed(index + 1, line)?;
        }

        let document = scanner.finish();
        tracing::debug!(
            sections = document.section_count(),
            bytes = input.len(),
            "Parsed fixture document"
        );
        Ok(document)
    }

    /// Reads `reader` to the end, then parses it.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::parse(&data)
    }

    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of distinct section identifiers present.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }

    pub fn joined(&self, id: SectionId) -> Option<String> {
        self.section(id).map(Section::joined)
    }

    pub fn to_wire(&self) -> String {
        self.sections.iter().map(Section::to_wire).collect()
    }

    pub fn write_to(&self, mut w: impl Write) -> std::io::Result<usize> {
        let mut written = 0;
        for section in &self.sections {
            written += section.write_to(&mut w)?;
        }
        Ok(written)
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            f.write_str(&section.to_wire())?;
        }
        Ok(())
    }
}

/// Assembles a [`Document`] in code, e.g. when recording a live exchange.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    comments: Option<Section>,
    sections: Vec<Section>,
}

impl DocumentBuilder {
    pub fn comment(mut self, line: impl Into<String>) -> Self {
        match self.comments.as_mut() {
            Some(section) => section.push(line),
            None => {
                self.comments = Some(Section::new(
                    SectionId::Comment,
                    Modifier::None,
                    vec![line.into()],
                ))
            }
        }
        self
    }

    /// Adds lines under `id`. Lines for an identifier already present are
    /// appended to it and the first modifier is kept.
    pub fn section<I, S>(mut self, id: SectionId, modifier: Modifier, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if id == SectionId::Comment {
            for line in lines {
                self = self.comment(line);
            }
            return self;
        }

        let lines = lines.into_iter().map(Into::into);
        match self.sections.iter_mut().find(|s| s.id() == id) {
            Some(section) => lines.for_each(|line| section.push(line)),
            None => self
                .sections
                .push(Section::new(id, modifier, lines.collect())),
        }
        self
    }

    pub fn line(self, id: SectionId, content: impl Into<String>) -> Self {
        self.section(id, Modifier::None, [content])
    }

    /// Finishes the document. The body, when present, is moved last so the
    /// wire form re-parses to the same document.
    pub fn build(self) -> Document {
        let (body, mut rest): (Vec<Section>, Vec<Section>) = self
            .sections
            .into_iter()
            .partition(|s| s.id() == SectionId::Body);

        let mut sections: Vec<Section> = self.comments.into_iter().collect();
        sections.append(&mut rest);
        sections.extend(body);
        Document { sections }
    }
}
