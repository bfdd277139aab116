//! Experience extraction: date-range rules, durations and best-effort role inference.
//!
//! The date rules are tried in table order and the first rule that yields any
//! match is used for the whole section; later rules are never consulted, even
//! if they would have matched other entries.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::{Captures, Match, Regex};
use tracing::debug;

use crate::resume::models::{DateRange, DateRule, ExperienceEntry};
use crate::resume::text::{char_len, offset_back, offset_forward};

const DATE_RULES: &[(DateRule, &str)] = &[
    (
        DateRule::MonthYear,
        r"(\w+\s+\d{4})\s*[-–]\s*(\w+\s+\d{4}|present|current|now)",
    ),
    (
        DateRule::NumericMonthYear,
        r"(\d{1,2}/\d{4})\s*[-–]\s*(\d{1,2}/\d{4}|present|current|now)",
    ),
    (
        DateRule::YearOnly,
        r"(\d{4})\s*[-–]\s*(\d{4}|present|current|now)",
    ),
];

static DATE_PATTERNS: LazyLock<Vec<(DateRule, Regex)>> = LazyLock::new(|| {
    DATE_RULES
        .iter()
        .map(|(rule, pattern)| {
            let re = Regex::new(&format!("(?i){pattern}")).expect("invalid date rule pattern");
            (*rule, re)
        })
        .collect()
});

const CONTEXT_BEFORE_CHARS: usize = 200;
const CONTEXT_AFTER_CHARS: usize = 500;
const MAX_ENTRIES: usize = 10;
const MAX_ROLE_LINE_CHARS: usize = 80;
const ONGOING_MARKERS: &[&str] = &["present", "current", "now"];
const ROLE_SEPARATORS: &[&str] = &[" at ", " @ ", " | ", "|", " - ", " – ", ", "];

const MONTHS: &[(&str, u32)] = &[
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

/// Extracts up to ten positions from the experience section body.
pub fn extract_experience(section: &str, today: NaiveDate) -> Vec<ExperienceEntry> {
    for (rule, re) in DATE_PATTERNS.iter() {
        let matches: Vec<_> = re.captures_iter(section).collect();
        if matches.is_empty() {
            continue;
        }

        return matches
            .iter()
            .enumerate()
            .take(MAX_ENTRIES)
            .filter_map(|(i, caps)| {
                let whole = caps.get(0)?;
                let (start, end) = excerpt_window(section, &matches, i)?;

                let start_raw = &caps[1];
                let end_raw = &caps[2];
                let (duration_months, used_fallback) = compute_duration(start_raw, end_raw, today);
                let (title, company) = infer_role(section, &whole);

                Some(ExperienceEntry {
                    raw_text: section[start..end].to_string(),
                    dates: DateRange {
                        start: start_raw.to_string(),
                        end: end_raw.to_string(),
                    },
                    date_rule: *rule,
                    duration_months,
                    used_fallback,
                    title,
                    company,
                })
            })
            .collect();
    }

    Vec::new()
}

/// Byte range of the excerpt for match `i`: up to 200 chars before and 500
/// after, never reaching into the previous or next entry's excerpt.
fn excerpt_window(section: &str, matches: &[Captures<'_>], i: usize) -> Option<(usize, usize)> {
    let whole = matches.get(i)?.get(0)?;
    let prev_end = match i.checked_sub(1).and_then(|p| matches[p].get(0)) {
        Some(prev) => offset_forward(section, prev.end(), CONTEXT_AFTER_CHARS).min(whole.start()),
        None => 0,
    };
    let start = offset_back(section, whole.start(), CONTEXT_BEFORE_CHARS).max(prev_end);
    let after = offset_forward(section, whole.end(), CONTEXT_AFTER_CHARS);
    let end = match matches.get(i + 1).and_then(|next| next.get(0)) {
        Some(next) => after.min(next.start()),
        None => after,
    };
    Some((start, end))
}

/// Months between two raw date strings, floored at 0. Unparseable dates fall
/// back to `today`; the second value reports whether that happened.
pub fn compute_duration(start: &str, end: &str, today: NaiveDate) -> (u32, bool) {
    let mut used_fallback = false;

    let start_date = parse_date(start).unwrap_or_else(|| {
        debug!("Unparseable start date '{start}', falling back to today");
        used_fallback = true;
        today
    });

    let end_date = if is_ongoing(end) {
        today
    } else {
        parse_date(end).unwrap_or_else(|| {
            debug!("Unparseable end date '{end}', falling back to today");
            used_fallback = true;
            today
        })
    };

    let months = (end_date.year() - start_date.year()) * 12
        + (end_date.month() as i32 - start_date.month() as i32);

    (months.max(0) as u32, used_fallback)
}

fn is_ongoing(raw: &str) -> bool {
    let lower = raw.trim().to_lowercase();
    ONGOING_MARKERS.contains(&lower.as_str())
}

/// Parses "January 2024", "Jan 2024", "01/2024" or "2024" to the first of the month.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    let parts: Vec<&str> = raw.split_whitespace().collect();
    if let [month, year] = parts.as_slice() {
        if let (Some(m), Some(y)) = (month_number(month), parse_year(year)) {
            return NaiveDate::from_ymd_opt(y, m, 1);
        }
    }

    if let Some((month, year)) = raw.split_once('/') {
        let m = month
            .parse::<u32>()
            .ok()
            .filter(|m| (1..=12).contains(m) && month.len() <= 2)?;
        return NaiveDate::from_ymd_opt(parse_year(year)?, m, 1);
    }

    NaiveDate::from_ymd_opt(parse_year(raw)?, 1, 1)
}

fn parse_year(raw: &str) -> Option<i32> {
    if raw.len() == 4 && raw.chars().all(|c| c.is_ascii_digit()) {
        raw.parse().ok()
    } else {
        None
    }
}

/// Full month name or its three-letter abbreviation, any case.
fn month_number(raw: &str) -> Option<u32> {
    let lower = raw.to_lowercase();
    MONTHS
        .iter()
        .find(|(name, _)| lower == *name || (lower.len() == 3 && name.starts_with(lower.as_str())))
        .map(|(_, n)| *n)
}

/// Guesses title/company from the line holding the date range, or the line above
/// it when the date sits on its own line.
fn infer_role(section: &str, date: &Match<'_>) -> (Option<String>, Option<String>) {
    let line_start = section[..date.start()].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = section[date.end()..]
        .find('\n')
        .map(|i| date.end() + i)
        .unwrap_or(section.len());

    let same_line = format!(
        "{} {}",
        &section[line_start..date.start()],
        &section[date.end()..line_end]
    );
    let same_line = trim_decorations(&same_line);

    let candidate = if !same_line.is_empty() {
        Some(same_line.to_string())
    } else {
        section[..line_start]
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .filter(|line| !line.starts_with(['•', '-', '*', '·']))
            .map(str::to_string)
    };

    match candidate {
        Some(line) if char_len(&line) <= MAX_ROLE_LINE_CHARS => split_role(&line),
        _ => (None, None),
    }
}

fn trim_decorations(s: &str) -> &str {
    s.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '|' | ',' | '-' | '–' | '—' | '(' | ')' | ':' | '•')
    })
}

fn split_role(line: &str) -> (Option<String>, Option<String>) {
    let non_empty = |s: &str| {
        let s = trim_decorations(s);
        (!s.is_empty()).then(|| s.to_string())
    };

    for sep in ROLE_SEPARATORS {
        if let Some((title, company)) = line.split_once(sep) {
            return (non_empty(title), non_empty(company));
        }
    }
    (non_empty(line), None)
}
