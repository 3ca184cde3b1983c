//! The `MANIFEST.md` index.
//!
//! The manifest is a preamble followed by `## <topic>` sections, each holding
//! `- [<subtopic>](<relative path>)` entry lines. It is parsed into sections,
//! edited structurally and written back in full; lines outside the edit point
//! are reproduced verbatim.

/// Manifest file name inside the store root.
pub const MANIFEST_FILE: &str = "MANIFEST.md";

const SECTION_MARKER: &str = "## ";

/// Preamble written when the manifest is first created.
pub const PREAMBLE: &str = "# Smarty McFly Documentation Manifest\n\n\
**MANDATORY:** For any matching topic below, you MUST read every linked markdown file \
before responding. Do not rely on training knowledge when local docs exist.\n\n";

/// One `## <topic>` section and the lines below it, up to the next section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub topic: String,
    pub lines: Vec<String>,
}

impl Section {
    fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            lines: Vec::new(),
        }
    }

    /// Lines that look like entries (`- [...](...)`).
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|line| line.starts_with("- ["))
    }

    /// Index just past the last non-empty line.
    fn content_end(&self) -> usize {
        trimmed_len(&self.lines)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    preamble: Vec<String>,
    sections: Vec<Section>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self::parse(PREAMBLE)
    }
}

impl Manifest {
    /// Parse manifest text. Every line starting with `## ` opens a section
    /// named by the rest of the line, taken verbatim.
    pub fn parse(text: &str) -> Self {
        let mut preamble = Vec::new();
        let mut sections: Vec<Section> = Vec::new();

        for line in text.lines() {
            if let Some(topic) = line.strip_prefix(SECTION_MARKER) {
                sections.push(Section::new(topic));
                continue;
            }
            match sections.last_mut() {
                Some(section) => section.lines.push(line.to_string()),
                None => preamble.push(line.to_string()),
            }
        }

        Self { preamble, sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The first section headed by exactly `topic`.
    pub fn section(&self, topic: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.topic == topic)
    }

    /// Add an entry line under `topic`.
    ///
    /// An existing section gets the entry after its last non-empty line, so
    /// empty separators before the next section stay in place. Otherwise a new
    /// section is appended after a single blank line. Entries are not
    /// deduplicated.
    pub fn insert(&mut self, topic: &str, entry: &str) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.topic == topic) {
            let at = section.content_end();
            section.lines.insert(at, entry.to_string());
            return;
        }

        let blank = self.is_blank();
        let tail = self.tail_mut();
        let len = trimmed_len(tail);
        tail.truncate(len);
        if !blank {
            tail.push(String::new());
        }

        let mut section = Section::new(topic);
        section.lines.push(entry.to_string());
        self.sections.push(section);
    }

    /// Serialize back to text, one `\n`-terminated line per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.preamble {
            out.push_str(line);
            out.push('\n');
        }
        for section in &self.sections {
            out.push_str(SECTION_MARKER);
            out.push_str(&section.topic);
            out.push('\n');
            for line in &section.lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    /// Lines at the end of the document: the last section's, or the preamble.
    fn tail_mut(&mut self) -> &mut Vec<String> {
        match self.sections.last_mut() {
            Some(section) => &mut section.lines,
            None => &mut self.preamble,
        }
    }

    fn is_blank(&self) -> bool {
        self.sections.is_empty() && trimmed_len(&self.preamble) == 0
    }
}

/// Render an entry line linking `subtopic` to `relative_path`.
pub fn entry_line(subtopic: &str, relative_path: &str) -> String {
    format!("- [{}]({})", subtopic, relative_path)
}

fn trimmed_len(lines: &[String]) -> usize {
    lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(0, |i| i + 1)
}
