//! Colour tones for statuses, priorities, workflow steps and avatars.
//!
//! Every lookup here is total; anything unrecognised is [`Tone::Muted`] (or
//! [`Tone::Slate`] for the detail badge).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum Tone {
    Blue,
    Green,
    Purple,
    Red,
    Orange,
    Amber,
    Teal,
    Pink,
    Slate,
    #[default]
    Muted,
}

impl Tone {
    pub fn all() -> &'static [Tone] {
        &[
            Tone::Blue,
            Tone::Green,
            Tone::Purple,
            Tone::Red,
            Tone::Orange,
            Tone::Amber,
            Tone::Teal,
            Tone::Pink,
            Tone::Slate,
            Tone::Muted,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Blue => "blue",
            Tone::Green => "green",
            Tone::Purple => "purple",
            Tone::Red => "red",
            Tone::Orange => "orange",
            Tone::Amber => "amber",
            Tone::Teal => "teal",
            Tone::Pink => "pink",
            Tone::Slate => "slate",
            Tone::Muted => "muted",
        }
    }

    /// Foreground colour.
    pub fn hex(self) -> &'static str {
        match self {
            Tone::Blue => "#3B82F6",
            Tone::Green => "#22C55E",
            Tone::Purple => "#8B5CF6",
            Tone::Red => "#EF4444",
            Tone::Orange => "#F97316",
            Tone::Amber => "#F59E0B",
            Tone::Teal => "#14B8A6",
            Tone::Pink => "#EC4899",
            Tone::Slate => "#64748B",
            Tone::Muted => "#94A3B8",
        }
    }

    /// Pale background for pills and badges.
    pub fn soft_hex(self) -> &'static str {
        match self {
            Tone::Blue => "#DBEAFE",
            Tone::Green => "#DCFCE7",
            Tone::Purple => "#EDE9FE",
            Tone::Red => "#FEE2E2",
            Tone::Orange => "#FFEDD5",
            Tone::Amber => "#FEF3C7",
            Tone::Teal => "#CCFBF1",
            Tone::Pink => "#FCE7F3",
            Tone::Slate => "#F1F5F9",
            Tone::Muted => "#F1F5F9",
        }
    }

    /// CSS class used by the web stylesheet, e.g. `tone-blue`.
    pub fn css_class(self) -> String {
        format!("tone-{}", self.label())
    }
}

const LIST_STATUS_TONES: &[(&str, Tone)] = &[
    ("KICK OFF", Tone::Blue),
    ("UNDER CONSTRUCTION", Tone::Orange),
    ("UNDER CONS...", Tone::Orange),
    ("COMPLETED", Tone::Green),
    ("In Transit", Tone::Blue),
    ("Delivered", Tone::Green),
    ("Ordered", Tone::Purple),
    ("Delayed", Tone::Red),
    ("Pending", Tone::Muted),
    ("In Progress", Tone::Blue),
    ("Planning", Tone::Orange),
    ("Review", Tone::Purple),
    ("Scheduled", Tone::Blue),
    ("Draft", Tone::Muted),
    ("Filming", Tone::Orange),
    ("ACTIVE", Tone::Green),
    ("OFF", Tone::Red),
];

const KANBAN_STATUS_TONES: &[(&str, Tone)] = &[
    ("In Transit", Tone::Blue),
    ("Delivered", Tone::Green),
    ("Ordered", Tone::Purple),
    ("Delayed", Tone::Red),
    ("Pending", Tone::Muted),
    ("In Progress", Tone::Blue),
    ("Planning", Tone::Orange),
    ("Completed", Tone::Green),
    ("Review", Tone::Purple),
    ("Scheduled", Tone::Blue),
    ("Draft", Tone::Muted),
    ("Filming", Tone::Orange),
];

/// List-view status colour: exact match, then containment in either direction
/// ignoring case.
pub fn status_tone(status: &str) -> Tone {
    if status.is_empty() {
        return Tone::Muted;
    }
    if let Some((_, tone)) = LIST_STATUS_TONES.iter().find(|(key, _)| *key == status) {
        return *tone;
    }
    let upper = status.to_uppercase();
    LIST_STATUS_TONES
        .iter()
        .find(|(key, _)| {
            let key = key.to_uppercase();
            upper.contains(&key) || key.contains(&upper)
        })
        .map_or(Tone::Muted, |(_, tone)| *tone)
}

/// Kanban column colour; exact matches only.
pub fn kanban_status_tone(status: &str) -> Tone {
    KANBAN_STATUS_TONES
        .iter()
        .find(|(key, _)| *key == status)
        .map_or(Tone::Muted, |(_, tone)| *tone)
}

/// Detail-panel badge colour, picked by keyword.
pub fn badge_tone(status: &str) -> Tone {
    let s = status.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| s.contains(w));
    if has(&["draft", "pending"]) {
        Tone::Amber
    } else if has(&["progress", "transit"]) {
        Tone::Blue
    } else if has(&["complete", "deliver"]) {
        Tone::Green
    } else if has(&["delay", "critical"]) {
        Tone::Red
    } else if has(&["review"]) {
        Tone::Purple
    } else {
        Tone::Slate
    }
}

pub fn priority_tone(priority: Priority) -> Tone {
    match priority {
        Priority::Critical => Tone::Red,
        Priority::High => Tone::Orange,
        Priority::Medium => Tone::Blue,
        Priority::Low => Tone::Muted,
    }
}

const AVATAR_TONES: [Tone; 4] = [Tone::Teal, Tone::Blue, Tone::Orange, Tone::Purple];

/// Slot into the four chat avatar colours: sum of UTF-16 code units mod 4.
pub fn avatar_slot(user: &str) -> usize {
    let sum: u64 = user.encode_utf16().map(u64::from).sum();
    (sum % AVATAR_TONES.len() as u64) as usize
}

pub fn chat_avatar_tone(user: &str) -> Tone {
    AVATAR_TONES[avatar_slot(user)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_status_match() {
        assert_eq!(status_tone("Delayed"), Tone::Red);
        assert_eq!(status_tone("KICK OFF"), Tone::Blue);
        assert_eq!(status_tone("ACTIVE"), Tone::Green);
    }

    #[test]
    fn partial_status_match_ignores_case() {
        assert_eq!(status_tone("delivered today"), Tone::Green);
        assert_eq!(status_tone("under construction"), Tone::Orange);
        // "review" is contained in the key-side comparison as well.
        assert_eq!(status_tone("REVIEW"), Tone::Purple);
    }

    #[test]
    fn unknown_and_empty_statuses_are_muted() {
        assert_eq!(status_tone("Quarantined"), Tone::Muted);
        assert_eq!(status_tone(""), Tone::Muted);
        assert_eq!(kanban_status_tone(""), Tone::Muted);
    }

    #[test]
    fn kanban_requires_exact_match() {
        assert_eq!(kanban_status_tone("In Transit"), Tone::Blue);
        assert_eq!(kanban_status_tone("in transit"), Tone::Muted);
        assert_eq!(kanban_status_tone("COMPLETED"), Tone::Muted);
        assert_eq!(kanban_status_tone("Completed"), Tone::Green);
    }

    #[test]
    fn badge_keywords_follow_priority_order() {
        assert_eq!(badge_tone("Pending review"), Tone::Amber);
        assert_eq!(badge_tone("In Progress"), Tone::Blue);
        assert_eq!(badge_tone("Delivered"), Tone::Green);
        assert_eq!(badge_tone("Delayed"), Tone::Red);
        assert_eq!(badge_tone("Review"), Tone::Purple);
        assert_eq!(badge_tone("KICK OFF"), Tone::Slate);
    }

    #[test]
    fn priorities_have_distinct_tones() {
        let tones: Vec<Tone> = Priority::all().iter().map(|p| priority_tone(*p)).collect();
        assert_eq!(tones, [Tone::Red, Tone::Orange, Tone::Blue, Tone::Muted]);
    }

    #[test]
    fn avatar_slot_sums_code_units() {
        // 'A' = 65 -> 1, "AB" = 131 -> 3
        assert_eq!(avatar_slot("A"), 1);
        assert_eq!(avatar_slot("AB"), 3);
        assert_eq!(chat_avatar_tone(""), Tone::Teal);
    }

    #[test]
    fn tone_labels_are_unique() {
        let mut labels: Vec<&str> = Tone::all().iter().map(|t| t.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Tone::all().len());
    }
}
