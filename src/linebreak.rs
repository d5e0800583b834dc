//! Hyphenation-aware greedy line wrapping with a line-count cap.

use crate::hyphenate::{Fragment, Hyphenator};

/// Final line emitted when the natural wrap exceeds the line cap.
pub const TRUNCATION_MARKER: &str = "[...]";

/// Wrap `text` into display lines of at most `max_width` characters and
/// at most `max_lines` lines.
///
/// Words are placed greedily, separated by single spaces. When a word
/// does not fit the remaining space, the longest prefix ending at a
/// hyphenation point is placed with a visible hyphen; the hyphen counts
/// toward the width. A fragment run wider than the whole line is cut
/// hard at the width as a last resort, so no line ever overflows.
///
/// Empty input produces no lines at all. When the wrap is truncated the
/// output has exactly `max_lines` lines and the last one is
/// [`TRUNCATION_MARKER`].
pub fn wrap(
    hyphenator: &Hyphenator,
    text: &str,
    max_width: usize,
    max_lines: usize,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let fragments = hyphenator.fragments(word);
        if fragments.is_empty() {
            continue;
        }
        let mut idx = 0;
        while idx < fragments.len() {
            let sep = usize::from(line_len > 0 && idx == 0);
            let budget = max_width.saturating_sub(line_len + sep);
            let rest: usize = fragments[idx..].iter().map(char_len).sum();

            // Remainder of the word fits on this line.
            if rest <= budget {
                if sep == 1 {
                    line.push(' ');
                }
                for fragment in &fragments[idx..] {
                    line.push_str(&fragment.text);
                }
                line_len += sep + rest;
                break;
            }

            // Longest prefix ending at a hyphenation point, plus the
            // visible hyphen the break renders.
            let mut take = None;
            let mut prefix_len = 0usize;
            for (offset, fragment) in fragments[idx..].iter().enumerate() {
                prefix_len += char_len(fragment);
                if prefix_len + 1 > budget {
                    break;
                }
                if fragment.break_after {
                    take = Some(offset + 1);
                }
            }
            if let Some(count) = take {
                if sep == 1 {
                    line.push(' ');
                }
                for fragment in &fragments[idx..idx + count] {
                    line.push_str(&fragment.text);
                }
                line.push('-');
                lines.push(std::mem::take(&mut line));
                line_len = 0;
                idx += count;
                continue;
            }

            // Nothing fits here; retry on a fresh line.
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
                continue;
            }

            // An unbreakable run wider than the whole line: cut hard.
            let mut run_end = idx;
            while run_end < fragments.len() && !fragments[run_end].break_after {
                run_end += 1;
            }
            if run_end < fragments.len() {
                run_end += 1;
            }
            let run: String = fragments[idx..run_end]
                .iter()
                .map(|f| f.text.as_str())
                .collect();
            let mut chars = run.chars();
            loop {
                let slice: String = chars.by_ref().take(max_width.max(1)).collect();
                if slice.chars().count() < max_width.max(1) || chars.as_str().is_empty() {
                    line_len = slice.chars().count();
                    line = slice;
                    break;
                }
                lines.push(slice);
            }
            idx = run_end;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines.saturating_sub(1));
        lines.push(TRUNCATION_MARKER.to_string());
    }
    lines
}

fn char_len(fragment: &Fragment) -> usize {
    fragment.text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;
    use pretty_assertions::assert_eq;

    fn german() -> Hyphenator {
        Hyphenator::new(Locale::German).unwrap()
    }

    #[test]
    fn short_text_comes_back_as_a_single_line() {
        let hyphenator = german();
        assert_eq!(
            wrap(&hyphenator, "Antrag der SPD", 35, 7),
            vec!["Antrag der SPD"]
        );
    }

    #[test]
    fn empty_text_produces_no_lines() {
        let hyphenator = german();
        assert_eq!(wrap(&hyphenator, "", 35, 7), Vec::<String>::new());
        assert_eq!(wrap(&hyphenator, "   ", 35, 7), Vec::<String>::new());
    }

    #[test]
    fn words_fill_lines_greedily() {
        let hyphenator = german();
        assert_eq!(
            wrap(&hyphenator, "am am am am am", 8, 7),
            vec!["am am am", "am am"]
        );
    }

    #[test]
    fn no_line_exceeds_the_width() {
        let hyphenator = german();
        let text = "Aktivitäten der Bundesregierung zur Förderung jüdischen Lebens \
                    und zur Bekämpfung des Antisemitismus im Kulturbereich";
        for width in [10, 20, 34, 45] {
            for line in wrap(&hyphenator, text, width, 50) {
                assert!(
                    line.chars().count() <= width,
                    "line '{line}' exceeds width {width}"
                );
            }
        }
    }

    #[test]
    fn truncation_caps_the_line_count_with_a_marker() {
        let hyphenator = german();
        let text = "Wort ".repeat(40);
        let lines = wrap(&hyphenator, &text, 10, 7);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines.last().unwrap(), TRUNCATION_MARKER);
    }

    #[test]
    fn long_word_breaks_at_hyphenation_points() {
        let hyphenator = german();
        let lines = wrap(&hyphenator, "Kulturstaatsministerin", 8, 7);
        assert!(lines.len() > 1);
        // All but the last line end in the hyphen the break rendered.
        for line in &lines[..lines.len() - 1] {
            assert!(line.ends_with('-'), "line '{line}' should end with '-'");
        }
        let rejoined: String = lines
            .iter()
            .map(|line| line.strip_suffix('-').unwrap_or(line))
            .collect();
        assert_eq!(rejoined, "Kulturstaatsministerin");
    }

    #[test]
    fn literal_hyphen_is_preserved_and_not_a_break_point() {
        let hyphenator = german();
        assert_eq!(wrap(&hyphenator, "E-Mail", 10, 7), vec!["E-Mail"]);

        // Too narrow for the word, no hyphenation point available: the
        // cut must not land at the literal hyphen boundary.
        let lines = wrap(&hyphenator, "E-Mail", 4, 7);
        assert_eq!(lines.iter().map(String::as_str).collect::<Vec<_>>().join(""), "E-Mail");
        assert!(lines.iter().all(|line| line.chars().count() <= 4));
    }

    #[test]
    fn partial_word_placement_ends_the_line_with_a_hyphen() {
        let hyphenator = german();
        let lines = wrap(&hyphenator, "Antrag der Bundesregierung", 14, 7);
        assert!(lines.len() >= 2);
        assert!(lines[0].chars().count() <= 14);
        let rejoined: String = lines
            .iter()
            .map(|line| line.strip_suffix('-').unwrap_or(line).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        // Removing break hyphens and re-joining restores the input words
        // in order (spaces at break points collapse into the join).
        assert_eq!(rejoined.replace(' ', ""), "AntragderBundesregierung");
    }
}
