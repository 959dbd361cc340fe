//! Suggestion parsing for chat replies
//!
//! Extracts the strategy and outcome sections from a reply in the format:
//! ```text
//! AI 建議方針：
//! 1. 推出 VIP 專屬優惠或會員升級制度
//! 2. 搭配推薦產品組合
//!
//! 預期成果：
//! - 回購率提升 10%
//! - 平均客單價提升 8%
//! ```

/// Heading that opens the strategy section, matched with optional
/// whitespace between its parts
const STRATEGY_HEADING: &[&str] = &["AI", "建議方針"];

/// Heading that opens the outcome section
const OUTCOME_HEADING: &[&str] = &["預期成果"];

/// Parse strategy and outcome points from a chat reply
///
/// Returns `None` if either heading is missing or the outcome heading does
/// not follow the strategy heading. Sections that exist but hold no points
/// yield empty lists.
pub fn parse_suggestion_text(text: &str) -> Option<(Vec<String>, Vec<String>)> {
    let (_, strategy_start) = find_heading(text, 0, STRATEGY_HEADING)?;
    let (outcome_heading, outcome_start) = find_heading(text, strategy_start, OUTCOME_HEADING)?;

    let strategy = split_points(&text[strategy_start..outcome_heading]);
    let outcome = split_points(&text[outcome_start..]);

    Some((strategy, outcome))
}

/// Find the first heading at or after `from`
///
/// Returns (heading start, byte offset just past the colon).
fn find_heading(text: &str, from: usize, parts: &[&str]) -> Option<(usize, usize)> {
    text[from..]
        .char_indices()
        .find_map(|(offset, _)| {
            let start = from + offset;
            match_heading(&text[start..], parts).map(|len| (start, start + len))
        })
}

/// Match `parts` (whitespace allowed between them) followed directly by an
/// ASCII or full-width colon. Returns the matched byte length.
fn match_heading(input: &str, parts: &[&str]) -> Option<usize> {
    let mut rest = input;

    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            rest = rest.trim_start();
        }
        rest = rest.strip_prefix(*part)?;
    }

    rest = rest.strip_prefix([':', '：'])?;
    Some(input.len() - rest.len())
}

/// Split a section into points, one per line or `•` bullet
fn split_points(section: &str) -> Vec<String> {
    section
        .split(['\n', '•'])
        .map(strip_list_marker)
        .filter(|point| point.chars().any(char::is_alphanumeric))
        .map(str::to_string)
        .collect()
}

/// Strip leading bullets ("-", "*") and numbering ("1.", "2)", "3、")
///
/// ASCII markers must be followed by whitespace or the end of the line, so
/// decimals such as "1.5 倍" are kept. Full-width markers may run straight
/// into the text ("3、舉辦") but never into another digit.
fn strip_list_marker(line: &str) -> &str {
    let line = line.trim_start_matches(|c: char| matches!(c, '-' | '*') || c.is_whitespace());

    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 {
        let rest = &line[digits..];
        let mut chars = rest.chars();
        let marker = chars.next();
        let next = chars.next();

        let is_marker = match marker {
            Some('.' | ')') => next.is_none_or(char::is_whitespace),
            Some('、' | '．') => !next.is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        };

        if let Some(marker) = marker.filter(|_| is_marker) {
            return rest[marker.len_utf8()..].trim();
        }
    }

    line.trim()
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
