//! Shared primary-match / contextual-suppression algorithm.
//!
//! Every rule is driven by a primary pattern table (signatures of a risky
//! construct) and a mitigation table (signatures that the risk is already
//! addressed), plus a scope controlling how far to look for mitigating
//! evidence. Matching is line-oriented: constructs split across lines are
//! an accepted miss, not something to reflow around.

use regex::Regex;
use tracing::trace;

/// How far a mitigation pattern may sit from a primary match and still
/// suppress it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressionScope {
    /// Lines `[i - w, i + w]`, clamped to file bounds.
    Window(usize),
    /// Only the matching line itself.
    SameLine,
    /// No suppression; every primary match is emitted.
    None,
}

/// A confirmed primary match that survived suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch<'a> {
    /// 1-based line number.
    pub line: usize,
    /// The matching line, untrimmed.
    pub text: &'a str,
}

/// Runs the two-pass match/suppress heuristic over `content`.
///
/// The emission loop is patterns x lines: when several primary patterns hit
/// the same line, each hit is reported separately. Suppression is decided
/// per match, before emission.
pub fn match_lines<'a>(
    content: &'a str,
    primary: &[Regex],
    mitigation: &[Regex],
    scope: SuppressionScope,
) -> Vec<LineMatch<'a>> {
    let lines: Vec<&str> = content.lines().collect();
    let mut matches = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        for pattern in primary {
            if !pattern.is_match(line) {
                continue;
            }

            if is_suppressed(&lines, i, line, mitigation, scope) {
                trace!(line = i + 1, "primary match suppressed by mitigation");
                continue;
            }

            matches.push(LineMatch {
                line: i + 1,
                text: line,
            });
        }
    }

    matches
}

/// Tests any mitigation pattern anywhere in the content. Used by rules with
/// a whole-file veto tier.
pub fn has_file_wide_match(content: &str, mitigation: &[Regex]) -> bool {
    mitigation.iter().any(|p| p.is_match(content))
}

fn is_suppressed(
    lines: &[&str],
    index: usize,
    line: &str,
    mitigation: &[Regex],
    scope: SuppressionScope,
) -> bool {
    match scope {
        SuppressionScope::None => false,
        SuppressionScope::SameLine => mitigation.iter().any(|p| p.is_match(line)),
        SuppressionScope::Window(w) => {
            let start = index.saturating_sub(w);
            let end = (index + w).min(lines.len().saturating_sub(1));
            lines[start..=end]
                .iter()
                .any(|l| mitigation.iter().any(|p| p.is_match(l)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn test_match_without_mitigation() {
        let content = "safe line\ndanger here\nanother safe line";
        let matches = match_lines(
            content,
            &[re("danger")],
            &[re("guard")],
            SuppressionScope::Window(5),
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].line, 2);
        assert_eq!(matches[0].text, "danger here");
    }

    #[test]
    fn test_window_suppression() {
        let content = "danger here\nline\nline\nguard applied";
        let matches = match_lines(
            content,
            &[re("danger")],
            &[re("guard")],
            SuppressionScope::Window(5),
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn test_window_does_not_reach_past_width() {
        let mut lines = vec!["danger here".to_string()];
        lines.extend((0..6).map(|i| format!("filler {i}")));
        lines.push("guard applied".to_string());
        let content = lines.join("\n");

        let matches = match_lines(
            &content,
            &[re("danger")],
            &[re("guard")],
            SuppressionScope::Window(5),
        );
        assert_eq!(matches.len(), 1, "guard is 7 lines away, outside window 5");
    }

    #[test]
    fn test_window_inclusive_at_exact_width() {
        let mut lines = vec!["danger here".to_string()];
        lines.extend((0..4).map(|i| format!("filler {i}")));
        lines.push("guard applied".to_string());
        let content = lines.join("\n");

        let matches = match_lines(
            &content,
            &[re("danger")],
            &[re("guard")],
            SuppressionScope::Window(5),
        );
        assert!(matches.is_empty(), "guard exactly 5 lines below suppresses");
    }

    #[test]
    fn test_window_clamps_at_file_bounds() {
        let matches = match_lines(
            "danger here",
            &[re("danger")],
            &[re("guard")],
            SuppressionScope::Window(10),
        );
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_same_line_scope_ignores_neighbors() {
        let content = "guard applied\ndanger here";
        let matches = match_lines(
            content,
            &[re("danger")],
            &[re("guard")],
            SuppressionScope::SameLine,
        );
        assert_eq!(matches.len(), 1, "guard on another line must not suppress");

        let matches = match_lines(
            "danger here, guard applied",
            &[re("danger")],
            &[re("guard")],
            SuppressionScope::SameLine,
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn test_none_scope_never_suppresses() {
        let matches = match_lines(
            "danger here, guard applied",
            &[re("danger")],
            &[re("guard")],
            SuppressionScope::None,
        );
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_multiple_patterns_same_line_emit_separately() {
        let matches = match_lines(
            "danger and hazard together",
            &[re("danger"), re("hazard")],
            &[],
            SuppressionScope::Window(5),
        );
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].line, 1);
        assert_eq!(matches[1].line, 1);
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let content = "a\nb\ndanger";
        let matches = match_lines(content, &[re("danger")], &[], SuppressionScope::None);
        assert_eq!(matches[0].line, 3);
    }

    #[test]
    fn test_patterns_do_not_match_across_lines() {
        let content = "dan\nger";
        let matches = match_lines(content, &[re("danger")], &[], SuppressionScope::None);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_has_file_wide_match() {
        assert!(has_file_wide_match("x\ny\nguard\nz", &[re("guard")]));
        assert!(!has_file_wide_match("x\ny\nz", &[re("guard")]));
    }

    #[test]
    fn test_empty_content() {
        let matches = match_lines("", &[re("danger")], &[], SuppressionScope::Window(5));
        assert!(matches.is_empty());
    }
}
