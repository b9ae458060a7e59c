//! Mood log model - one emoji check-in per calendar day.

use serde::{Deserialize, Serialize};

use crate::day::Day;

/// A mood recorded for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodLog {
    /// The day the mood is for; at most one log per day.
    pub date: Day,

    /// Emoji representing the mood
    pub mood: String,

    /// Optional personal note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MoodLog {
    /// Create a mood log. A blank note is stored as absent.
    pub fn new(date: Day, mood: impl Into<String>, note: Option<String>) -> Self {
        Self {
            date,
            mood: mood.into(),
            note: note.filter(|n| !n.trim().is_empty()),
        }
    }
}

/// One entry of the mood palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodOption {
    /// Stable key, e.g. `calm`
    pub key: &'static str,
    /// Emoji character
    pub emoji: &'static str,
    /// Display label
    pub label: &'static str,
}

/// The moods a user can pick from.
pub const MOOD_OPTIONS: [MoodOption; 10] = [
    MoodOption { key: "happy", emoji: "😊", label: "Happy" },
    MoodOption { key: "calm", emoji: "😌", label: "Calm" },
    MoodOption { key: "energetic", emoji: "⚡️", label: "Energetic" },
    MoodOption { key: "grateful", emoji: "🙏", label: "Grateful" },
    MoodOption { key: "motivated", emoji: "🚀", label: "Motivated" },
    MoodOption { key: "sad", emoji: "😢", label: "Sad" },
    MoodOption { key: "tired", emoji: "😴", label: "Tired" },
    MoodOption { key: "anxious", emoji: "😟", label: "Anxious" },
    MoodOption { key: "irritable", emoji: "😠", label: "Irritable" },
    MoodOption { key: "neutral", emoji: "😐", label: "Neutral" },
];

impl MoodOption {
    /// Find a palette entry by key (case-insensitive) or by emoji.
    pub fn lookup(text: &str) -> Option<&'static MoodOption> {
        let text = text.trim();
        MOOD_OPTIONS
            .iter()
            .find(|o| o.key.eq_ignore_ascii_case(text) || o.emoji == text)
    }
}
