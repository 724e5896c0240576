//! Detail panel for the selected object.

use crate::config::UiConfig;
use crate::icons::Icon;
use crate::model::{ChatMessage, ChatThread, CustomField, FieldKind, ScenarioFunction, ScenarioObject};
use crate::tone::{badge_tone, Tone};

pub const WORKFLOW_STAGES: [&str; 4] = ["DRAFTING", "REVIEW", "APPROVED", "COMPLETED"];
/// Segments in the workflow bar after the first-stage badge.
pub const WORKFLOW_SEGMENTS: usize = 3;

const AVATAR_TONES: [Tone; 5] = [Tone::Blue, Tone::Teal, Tone::Amber, Tone::Pink, Tone::Orange];

pub fn avatar_tone(index: u8) -> Tone {
    AVATAR_TONES[usize::from(index) % AVATAR_TONES.len()]
}

/// Explicit index if present, else the first UTF-16 unit of `name` mod 5.
pub fn avatar_index_for(explicit: Option<u8>, name: &str) -> u8 {
    explicit.unwrap_or_else(|| {
        name.encode_utf16()
            .next()
            .map_or(0, |unit| (unit % AVATAR_TONES.len() as u16) as u8)
    })
}

/// Icon and tone of the object-type chip.
pub fn type_icon(object_type: &str) -> (Icon, Tone) {
    match object_type {
        "Contract" => (Icon::FileText, Tone::Purple),
        "Delivery" => (Icon::Truck, Tone::Blue),
        "Material" => (Icon::Package, Tone::Teal),
        "Inspection" => (Icon::ClipboardCheck, Tone::Orange),
        "Campaign" => (Icon::Target, Tone::Pink),
        "Maintenance" => (Icon::Wrench, Tone::Slate),
        "Task" => (Icon::FileCheck, Tone::Blue),
        _ => (Icon::FileText, Tone::Purple),
    }
}

/// Filled workflow segments: index of the first stage named in `status`, or 0.
pub fn workflow_progress(status: &str) -> usize {
    let upper = status.to_uppercase();
    WORKFLOW_STAGES
        .iter()
        .position(|stage| upper.contains(stage))
        .unwrap_or(0)
        .min(WORKFLOW_SEGMENTS)
}

/// Stable pseudo id shown next to customer fields, in `100..=999`.
pub fn customer_ref(value: &str) -> String {
    let sum: u32 = value.encode_utf16().map(u32::from).sum();
    format!("ID-{}", 100 + sum % 900)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSpan<'a> {
    Text(&'a str),
    Mention(&'a str),
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Splits `@word` mentions out of `text`. A bare `@` stays plain text.
pub fn split_mentions(text: &str) -> Vec<TextSpan<'_>> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'@' {
            let end = bytes[i + 1..]
                .iter()
                .position(|b| !is_word_byte(*b))
                .map_or(bytes.len(), |n| i + 1 + n);
            if end > i + 1 {
                if plain_start < i {
                    spans.push(TextSpan::Text(&text[plain_start..i]));
                }
                spans.push(TextSpan::Mention(&text[i..end]));
                plain_start = end;
                i = end;
                continue;
            }
        }
        i += 1;
    }
    if plain_start < text.len() {
        spans.push(TextSpan::Text(&text[plain_start..]));
    }
    spans
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailField<'a> {
    pub field: &'a CustomField,
    pub highlighted: bool,
    pub progress: bool,
    pub customer_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailMessage<'a> {
    pub message: &'a ChatMessage,
    pub own: bool,
    pub avatar_index: u8,
    pub spans: Vec<TextSpan<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionPreview {
    pub group: &'static str,
    pub code: &'static str,
    pub title: String,
    pub icon: Icon,
    pub status: &'static str,
    pub avatar_index: u8,
}

fn first_words(title: &str, n: usize) -> String {
    title.split(' ').take(n).collect::<Vec<_>>().join(" ")
}

/// Illustrative linked items derived only from the title.
pub fn connection_previews(title: &str) -> [ConnectionPreview; 2] {
    [
        ConnectionPreview {
            group: "Design",
            code: "DE-162",
            title: format!("Design - {}...", first_words(title, 3)),
            icon: Icon::FileCheck,
            status: "TO DO",
            avatar_index: 1,
        },
        ConnectionPreview {
            group: "Production",
            code: "CO-117",
            title: format!("Construction - {}...", first_words(title, 2)),
            icon: Icon::Building,
            status: "TO D...",
            avatar_index: 2,
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel<'a> {
    pub object: &'a ScenarioObject,
    pub object_type: String,
    pub type_icon: (Icon, Tone),
    pub assignee_first_name: &'a str,
    pub avatar_index: u8,
    pub status_tone: Tone,
    pub date: &'a str,
    pub fields: Vec<DetailField<'a>>,
    pub person_fields: Vec<&'a CustomField>,
    pub messages: Vec<DetailMessage<'a>>,
    pub workflow_filled: usize,
    pub connections: [ConnectionPreview; 2],
}

impl<'a> DetailPanel<'a> {
    pub fn build(
        object: &'a ScenarioObject,
        function: Option<&ScenarioFunction>,
        chat: Option<&'a ChatThread>,
        cfg: &UiConfig,
    ) -> Self {
        let object_type = object
            .object_type
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| {
                function
                    .and_then(|f| f.name.split(' ').next())
                    .filter(|w| !w.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "Task".to_string());

        let fields = object
            .custom_fields
            .iter()
            .take(cfg.detail_field_limit)
            .map(|field| DetailField {
                field,
                highlighted: field.kind == FieldKind::Money,
                progress: field.kind == FieldKind::Progress,
                customer_ref: (field.kind == FieldKind::Customer).then(|| customer_ref(&field.value)),
            })
            .collect();

        let person_fields = object
            .custom_fields
            .iter()
            .filter(|f| f.kind == FieldKind::Person)
            .collect();

        let messages = chat
            .map(|t| t.messages.as_slice())
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(idx, message)| DetailMessage {
                message,
                own: idx % 3 == 1,
                avatar_index: avatar_index_for(message.avatar_index, &message.user),
                spans: split_mentions(&message.text),
            })
            .collect();

        Self {
            object,
            type_icon: type_icon(&object_type),
            object_type,
            assignee_first_name: object.assignee.split(' ').next().unwrap_or_default(),
            avatar_index: avatar_index_for(object.assignee_avatar, &object.assignee),
            status_tone: badge_tone(&object.status),
            date: object.date.as_deref().unwrap_or("Today"),
            fields,
            person_fields,
            messages,
            workflow_filled: workflow_progress(&object.status),
            connections: connection_previews(&object.title),
        }
    }

    /// Drives the "No messages for this item yet" state.
    pub fn has_messages(&self) -> bool {
        !self.messages.is_empty()
    }
}
