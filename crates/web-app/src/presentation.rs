use chrono::{DateTime, Datelike, TimeZone};
use muscle_atlas_domain::TagColor;

const EXERCISE_EMOJIS: [(&[&str], &str); 6] = [
    (&["벤치", "프레스"], "💪"),
    (&["데드"], "🏋️"),
    (&["스쿼트"], "🦵"),
    (&["풀업", "턱걸이"], "💪"),
    (&["플랭크", "코어"], "⏱️"),
    (&["런지"], "🦿"),
];

const DEFAULT_EXERCISE_EMOJI: &str = "🏃";

/// Emoji for an exercise, picked by the first matching keyword in its name.
#[must_use]
pub fn exercise_emoji(name: &str) -> &'static str {
    EXERCISE_EMOJIS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map_or(DEFAULT_EXERCISE_EMOJI, |(_, emoji)| *emoji)
}

/// Short Korean date, e.g. `2025. 1. 5.`.
#[must_use]
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format!("{}. {}. {}.", date.year(), date.month(), date.day())
}

#[must_use]
pub fn tag_class(color: &TagColor) -> &'static str {
    match color {
        TagColor::Primary => "is-info",
        TagColor::Warning => "is-danger",
        TagColor::Other(_) => "is-success",
    }
}
