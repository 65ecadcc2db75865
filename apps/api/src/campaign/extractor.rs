//! Text Extractor: pulls locations, timings and day-range route segments out of a
//! free-form campaign plan.
//!
//! Each section is scanned line by line with a two-state machine:
//!
//! ```text
//!   Outside ──heading──▶ InSection ──exit marker, not own heading──▶ Outside
//!                        InSection ──heading──▶ InSection   (line not parsed)
//!                        InSection ──other line──▶ parse, then test exit marker
//! ```
//!
//! Heading and exit detection are plain substring containment. A data line whose text
//! happens to contain an exit marker (e.g. a description mentioning "Route Plan") is
//! collected and then closes the section.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::campaign::{Location, RouteStep, Timing};

static CLOCK_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,2}:\d{2}\s*(?:AM|PM)").expect("valid clock-time pattern"));

/// Heading variants and the markers that end a section.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub headings: [&'static str; 2],
    pub exits: &'static [&'static str],
}

pub const LOCATIONS: Section = Section {
    headings: ["Recommended Locations", "recommended locations"],
    exits: &["Optimal Timing", "Route Plan"],
};

pub const TIMINGS: Section = Section {
    headings: ["Optimal Timing", "optimal timing"],
    exits: &["Route Plan", "Estimated"],
};

const ROUTE_EXITS: &[&str] = &["Days", "Estimated", "Special"];

/// The three day-range route segments of a weekly plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSegment {
    Days1To3,
    Days4To5,
    Days6To7,
}

impl RouteSegment {
    pub const ALL: [RouteSegment; 3] = [
        RouteSegment::Days1To3,
        RouteSegment::Days4To5,
        RouteSegment::Days6To7,
    ];

    pub fn section(self) -> Section {
        let headings = match self {
            RouteSegment::Days1To3 => ["Days 1-3", "days 1-3"],
            RouteSegment::Days4To5 => ["Days 4-5", "days 4-5"],
            RouteSegment::Days6To7 => ["Days 6-7", "days 6-7"],
        };
        Section {
            headings,
            exits: ROUTE_EXITS,
        }
    }
}

impl Section {
    fn is_heading(&self, line: &str) -> bool {
        self.headings.iter().any(|h| line.contains(h))
    }

    /// A line leaves the section when it carries another section's marker, unless it
    /// also names this section.
    fn is_exit(&self, line: &str) -> bool {
        self.exits.iter().any(|m| line.contains(m)) && !self.is_heading(line)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scanner state machine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    InSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    /// Heading line: enter (or stay in) the section; the line is not data.
    Enter,
    /// Candidate data line; scanning continues in `next`.
    Collect { next: ScanState },
    Ignore,
}

impl ScanState {
    fn on_line(self, line: &str, section: &Section) -> Transition {
        if section.is_heading(line) {
            return Transition::Enter;
        }
        match self {
            ScanState::Outside => Transition::Ignore,
            ScanState::InSection if section.is_exit(line) => Transition::Collect {
                next: ScanState::Outside,
            },
            ScanState::InSection => Transition::Collect {
                next: ScanState::InSection,
            },
        }
    }
}

/// Runs the scanner over `text`, parsing every line collected inside `section`.
/// Returns `None` when nothing was extracted.
fn scan_section<T>(
    text: &str,
    section: &Section,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<Vec<T>> {
    let mut state = ScanState::Outside;
    let mut records = Vec::new();

    for line in text.lines() {
        match state.on_line(line, section) {
            Transition::Enter => state = ScanState::InSection,
            Transition::Collect { next } => {
                if let Some(record) = parse(line) {
                    records.push(record);
                }
                state = next;
            }
            Transition::Ignore => {}
        }
    }

    (!records.is_empty()).then_some(records)
}

// ────────────────────────────────────────────────────────────────────────────
// Line parsers
// ────────────────────────────────────────────────────────────────────────────

/// Everything after the first `-` of a dash-bulleted line.
fn bullet_body(line: &str) -> Option<&str> {
    if !line.trim().starts_with('-') {
        return None;
    }
    line.find('-').map(|i| &line[i + 1..])
}

/// `true` when the colon at byte `i` sits inside a clock time such as `8:00`.
fn is_clock_colon(bytes: &[u8], i: usize) -> bool {
    i > 0
        && bytes[i - 1].is_ascii_digit()
        && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
        && bytes.get(i + 2).is_some_and(u8::is_ascii_digit)
}

/// Splits `- key: value` into trimmed, non-empty parts at the first colon that is
/// not part of a clock time.
fn split_labeled_bullet(line: &str) -> Option<(String, String)> {
    if !line.contains(':') {
        return None;
    }
    let body = bullet_body(line)?;
    let bytes = body.as_bytes();
    let sep = body
        .match_indices(':')
        .map(|(i, _)| i)
        .find(|&i| !is_clock_colon(bytes, i))?;

    let key = body[..sep].trim();
    let value = body[sep + 1..].trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key.to_string(), value.to_string()))
}

/// The clock time is copied out of the line; the location keeps the full bullet text,
/// time included.
fn parse_route_step(line: &str) -> Option<RouteStep> {
    let body = bullet_body(line)?;
    let time = CLOCK_TIME.find(line)?.as_str();
    Some(RouteStep::new(time, body.trim()))
}

// ────────────────────────────────────────────────────────────────────────────
// Public API
// ────────────────────────────────────────────────────────────────────────────

pub fn extract_locations(text: &str) -> Option<Vec<Location>> {
    scan_section(text, &LOCATIONS, |line| {
        split_labeled_bullet(line).map(|(name, description)| Location { name, description })
    })
}

pub fn extract_timings(text: &str) -> Option<Vec<Timing>> {
    scan_section(text, &TIMINGS, |line| {
        split_labeled_bullet(line).map(|(time, description)| Timing { time, description })
    })
}

pub fn extract_route_segment(text: &str, segment: RouteSegment) -> Option<Vec<RouteStep>> {
    scan_section(text, &segment.section(), parse_route_step)
}
