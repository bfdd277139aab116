use std::sync::LazyLock;

use regex::Regex;

use crate::resume::models::ContactInfo;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("invalid email pattern")
});

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[+]?[(]?[0-9]{1,3}[)]?[-\s.]?[(]?[0-9]{1,4}[)]?[-\s.]?[0-9]{1,4}[-\s.]?[0-9]{1,9}",
    )
    .expect("invalid phone pattern")
});

static LINKEDIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)linkedin\.com/in/([a-zA-Z0-9-]+)").expect("invalid linkedin pattern")
});

static GITHUB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)github\.com/([a-zA-Z0-9-]+)").expect("invalid github pattern")
});

// "San Francisco, CA" / "Berlin, Germany"
static LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Za-z.\- ]{1,40},\s*([A-Z][A-Za-z ]+)$")
        .expect("invalid location pattern")
});

const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

const COUNTRIES: &[&str] = &[
    "usa", "united states", "canada", "mexico", "brazil", "argentina", "uk", "united kingdom",
    "ireland", "germany", "france", "spain", "portugal", "italy", "netherlands", "belgium",
    "switzerland", "austria", "poland", "sweden", "norway", "denmark", "finland", "india",
    "china", "japan", "singapore", "australia", "new zealand", "israel", "nigeria", "kenya",
    "south africa", "egypt", "uae",
];

const MIN_PHONE_DIGITS: usize = 10;
const HEADER_LINES: usize = 5;
const MAX_NAME_TOKENS: usize = 4;
const NON_NAME_MARKERS: &[&str] = &["@", "www.", "http", ".com"];

/// Scans the whole document (not a section) for contact details.
pub fn extract_contact(text: &str) -> ContactInfo {
    let email = EMAIL.find(text).map(|m| m.as_str().to_string());

    let phone = PHONE
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|candidate| candidate.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS)
        .map(str::to_string);

    let linkedin = LINKEDIN
        .captures(text)
        .map(|c| format!("https://linkedin.com/in/{}", &c[1]));

    let github = GITHUB
        .captures(text)
        .map(|c| format!("https://github.com/{}", &c[1]));

    let header_lines: Vec<&str> = text
        .trim()
        .split('\n')
        .take(HEADER_LINES)
        .map(str::trim)
        .collect();

    ContactInfo {
        name: find_name(&header_lines),
        email,
        phone,
        linkedin,
        github,
        location: find_location(&header_lines),
    }
}

/// First header line that doesn't look like contact info and has at most four words.
fn find_name(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .find(|line| {
            !line.is_empty()
                && !NON_NAME_MARKERS.iter().any(|m| line.contains(m))
                && line.split_whitespace().count() <= MAX_NAME_TOKENS
        })
        .map(|line| line.to_string())
}

fn find_location(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .flat_map(|line| line.split(['|', '•', '·']))
        .map(str::trim)
        .find(|part| is_location(part))
        .map(str::to_string)
}

/// A "City, Region" segment whose region is a US state code or a known country.
fn is_location(part: &str) -> bool {
    let Some(caps) = LOCATION.captures(part) else {
        return false;
    };
    let region = caps[1].trim();
    US_STATES.contains(&region) || COUNTRIES.contains(&region.to_lowercase().as_str())
}
