//! Recovers a structured summary from free-form completion text.
//!
//! The upstream model is asked for a `SUMMARY:` block followed by a
//! `KEY POINTS:` list, but nothing enforces that layout. Extraction runs
//! through three tiers of decreasing structure and then substitutes
//! placeholders, so every input yields a populated [`SummaryResult`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::models::SummaryResult;

pub const PLACEHOLDER_SUMMARY: &str = "Summary generated successfully.";
pub const PLACEHOLDER_KEY_POINT: &str = "Key insights extracted from your content.";

// Length thresholds count UTF-16 code units, the unit browser clients measure in.
/// Labeled key points must be longer than this many characters.
const MIN_LABELED_POINT_CHARS: usize = 10;
/// Unlabeled fallback lines must be longer than this many characters.
const MIN_FALLBACK_LINE_CHARS: usize = 20;
const FALLBACK_SUMMARY_LINES: usize = 3;
const MAX_FALLBACK_POINTS: usize = 5;

static SUMMARY_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)SUMMARY:?\s*\n").expect("static regex compile"));
static KEY_POINTS_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)KEY POINTS:?\s*\n").expect("static regex compile"));
static KEY_POINTS_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)KEY POINTS:").expect("static regex compile"));
static PARAGRAPH_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\n+").expect("static regex compile"));
static LIST_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]+\.|[-•*])").expect("static regex compile"));
static LIST_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]+\.?\s*|[-•*]\s*)").expect("static regex compile"));
static LEADING_MARKERS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-•*0-9.)\s]+").expect("static regex compile"));

/// Converts a completion into a [`SummaryResult`]. Never fails.
///
/// When no key points survive the first two tiers, the line-based fallback
/// runs and replaces the summary as well, even one found under a
/// `SUMMARY:` label.
#[must_use]
pub fn parse_completion(completion: &str) -> SummaryResult {
    let mut summary = match labeled_summary(completion) {
        Some(found) => found,
        None => first_paragraph(completion),
    };

    let mut key_points = labeled_key_points(completion).unwrap_or_default();

    if summary.is_empty() || key_points.is_empty() {
        let (fallback_summary, fallback_points) = line_fallback(completion);
        summary = fallback_summary;
        key_points = fallback_points;
    }

    if summary.is_empty() {
        summary = PLACEHOLDER_SUMMARY.to_string();
    }
    if key_points.is_empty() {
        key_points = vec![PLACEHOLDER_KEY_POINT.to_string()];
    }

    SummaryResult {
        summary,
        key_points,
    }
}

/// Text between the `SUMMARY:` header and the next `KEY POINTS:` label (or end).
fn labeled_summary(completion: &str) -> Option<String> {
    let header = SUMMARY_HEADER_RE.find(completion)?;
    let rest = &completion[header.end()..];
    let body = match KEY_POINTS_LABEL_RE.find(rest) {
        Some(label) => &rest[..label.start()],
        None => rest,
    };
    Some(body.trim().to_string())
}

fn first_paragraph(completion: &str) -> String {
    PARAGRAPH_BREAK_RE
        .split(completion)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// List items following the `KEY POINTS:` header, markers stripped.
fn labeled_key_points(completion: &str) -> Option<Vec<String>> {
    let header = KEY_POINTS_HEADER_RE.find(completion)?;
    let block = &completion[header.end()..];

    let points = block
        .split('\n')
        .filter(|line| LIST_ITEM_RE.is_match(line.trim()))
        // Markers are stripped from the raw line, so an indented item keeps its marker.
        .map(|line| LIST_MARKER_RE.replace(line, "").trim().to_string())
        .filter(|point| utf16_len(point) > MIN_LABELED_POINT_CHARS)
        .collect();

    Some(points)
}

/// Leading non-blank lines become the summary, long trailing lines the key points.
fn line_fallback(completion: &str) -> (String, Vec<String>) {
    let lines: Vec<&str> = completion
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return (completion.to_string(), Vec::new());
    }

    let head = lines.len().min(FALLBACK_SUMMARY_LINES);
    let summary = lines[..head].join(" ").trim().to_string();

    let key_points = lines[head..]
        .iter()
        .filter(|line| utf16_len(line) > MIN_FALLBACK_LINE_CHARS)
        .map(|line| LEADING_MARKERS_RE.replace(line, "").trim().to_string())
        .filter(|point| !point.is_empty())
        .take(MAX_FALLBACK_POINTS)
        .collect();

    (summary, key_points)
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}
