use regex::Regex;
use std::sync::OnceLock;

const ELLIPSIS: &str = "...";

/// Length in Unicode scalar values, the unit platform limits are counted in.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

pub fn fits_within(text: &str, limit: usize) -> bool {
    char_count(text) <= limit
}

/// Cuts `text` to `limit - 3` characters and appends `...` when it is longer
/// than `limit`; shorter text is returned as is.
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    if fits_within(text, limit) {
        return text.to_string();
    }

    let keep = limit.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

fn blank_run() -> &'static Regex {
    static BLANK_RUN: OnceLock<Regex> = OnceLock::new();
    BLANK_RUN.get_or_init(|| Regex::new(r"\n{3,}").expect("static pattern compiles"))
}

/// Replaces every run of three or more newlines with exactly two.
pub fn collapse_blank_lines(text: &str) -> String {
    blank_run().replace_all(text, "\n\n").into_owned()
}

/// Post-processing applied to free-form model replies.
pub fn tidy_reply(text: &str) -> String {
    collapse_blank_lines(text).trim().to_string()
}
