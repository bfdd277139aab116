//! Section isolation: finds labelled résumé sections by header pattern.
//!
//! Headers are matched anywhere in the text (not only at line starts), and only
//! the first occurrence of each section counts. A section body runs until the
//! next header of *any* section, or `DEFAULT_SECTION_CHARS` when none follows.

use std::sync::LazyLock;

use regex::Regex;

use crate::resume::text::offset_forward;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Experience,
    Education,
    Skills,
    Certifications,
    Projects,
    Summary,
}

/// Ordered header table. Order matters for the combined "any header" search.
const SECTION_HEADERS: &[(Section, &str)] = &[
    (
        Section::Experience,
        r"(work\s*experience|professional\s*experience|employment|work\s*history|experience)",
    ),
    (
        Section::Education,
        r"(education|academic|qualifications|degrees)",
    ),
    (
        Section::Skills,
        r"(skills|technical\s*skills|technologies|competencies|expertise)",
    ),
    (
        Section::Certifications,
        r"(certifications?|certificates?|licenses?|credentials)",
    ),
    (
        Section::Projects,
        r"(projects|personal\s*projects|portfolio)",
    ),
    (Section::Summary, r"(summary|profile|objective|about\s*me)"),
];

const DEFAULT_SECTION_CHARS: usize = 2000;

static HEADER_PATTERNS: LazyLock<Vec<(Section, Regex)>> = LazyLock::new(|| {
    SECTION_HEADERS
        .iter()
        .map(|(section, pattern)| {
            let re = Regex::new(&format!("(?i){pattern}")).expect("invalid section header pattern");
            (*section, re)
        })
        .collect()
});

static ANY_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    let joined = SECTION_HEADERS
        .iter()
        .map(|(_, pattern)| *pattern)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){joined}")).expect("invalid combined header pattern")
});

/// Returns the trimmed body of `section`, or `None` if the header is absent or
/// the body is empty.
pub fn extract_section(text: &str, section: Section) -> Option<&str> {
    let header = HEADER_PATTERNS
        .iter()
        .find(|(s, _)| *s == section)
        .map(|(_, re)| re)?;

    let found = header.find(text)?;
    let start = found.end();

    let end = match ANY_HEADER.find(&text[start..]) {
        Some(next) => start + next.start(),
        None => offset_forward(text, start, DEFAULT_SECTION_CHARS),
    };

    let body = text[start..end].trim();
    if body.is_empty() {
        None
    } else {
        Some(body)
    }
}
