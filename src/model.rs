//! Scenario data model.
//!
//! A [`Scenario`] is a complete mock business dataset: metadata, one active space
//! of functions holding work objects, and the chat threads attached to those
//! objects. Scenarios are built wholesale by the fixture repository and are
//! read-only for the rest of the session.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::icons::Icon;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Identifier of a [`ScenarioObject`], unique within a scenario.
    ObjectId
);
string_id!(
    /// Identifier of a [`ScenarioFunction`], unique within a scenario.
    FunctionId
);

/// Work item priority. Unrecognised labels parse as `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(from = "String", into = "String"))]
pub enum Priority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "critical" => Priority::Critical,
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn all() -> &'static [Priority] {
        &[
            Priority::Critical,
            Priority::High,
            Priority::Medium,
            Priority::Low,
        ]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Priority {
    fn from(label: String) -> Self {
        Priority::parse(&label)
    }
}

impl From<Priority> for String {
    fn from(p: Priority) -> Self {
        p.label().to_string()
    }
}

/// Presentation a function suggests for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum ViewTypeHint {
    Kanban,
    #[default]
    Table,
    Dashboard,
}

impl ViewTypeHint {
    pub fn label(self) -> &'static str {
        match self {
            ViewTypeHint::Kanban => "kanban",
            ViewTypeHint::Table => "table",
            ViewTypeHint::Dashboard => "dashboard",
        }
    }
}

/// Semantic kind of a custom field value, declared by the data instead of being
/// guessed from the field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum FieldKind {
    Money,
    Person,
    Percentage,
    Customer,
    Progress,
    #[default]
    PlainText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CustomField {
    pub name: String,
    pub value: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: FieldKind,
}

impl CustomField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind,
        }
    }

    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, FieldKind::PlainText)
    }

    pub fn money(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, FieldKind::Money)
    }

    pub fn percent(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, FieldKind::Percentage)
    }

    pub fn customer(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, FieldKind::Customer)
    }

    pub fn person(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, FieldKind::Person)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScenarioObject {
    pub id: ObjectId,
    pub title: String,
    /// Free-text status label; not a closed set.
    pub status: String,
    pub priority: Priority,
    pub assignee: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub assignee_avatar: Option<u8>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub object_type: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: Option<Icon>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub date: Option<String>,
    /// Ordered name/value pairs; the order is the display order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub custom_fields: Vec<CustomField>,
}

impl ScenarioObject {
    pub fn field(&self, name: &str) -> Option<&CustomField> {
        self.custom_fields.iter().find(|f| f.name == name)
    }

    pub fn assignee_initial(&self) -> Option<char> {
        self.assignee.chars().next()
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScenarioFunction {
    pub id: FunctionId,
    pub name: String,
    pub icon: Icon,
    pub view_type: ViewTypeHint,
    pub objects: Vec<ScenarioObject>,
}

impl ScenarioFunction {
    pub fn contains(&self, object_id: &str) -> bool {
        self.objects.iter().any(|o| o.id == object_id)
    }

    pub fn find_object(&self, object_id: &str) -> Option<&ScenarioObject> {
        self.objects.iter().find(|o| o.id == object_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActiveSpace {
    pub name: String,
    pub functions: Vec<ScenarioFunction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScenarioMeta {
    pub industry: String,
    pub company_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChatMessage {
    pub user: String,
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub timestamp: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub avatar_index: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChatThread {
    /// Object this thread is about. A dangling id is tolerated.
    pub related_object_id: ObjectId,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scenario {
    pub meta: ScenarioMeta,
    pub active_space: ActiveSpace,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unified_chat: Vec<ChatThread>,
}

impl Scenario {
    pub fn functions(&self) -> &[ScenarioFunction] {
        &self.active_space.functions
    }

    pub fn first_function(&self) -> Option<&ScenarioFunction> {
        self.active_space.functions.first()
    }

    pub fn find_function(&self, function_id: &str) -> Option<&ScenarioFunction> {
        self.active_space
            .functions
            .iter()
            .find(|f| f.id == function_id)
    }

    /// Every object in the active space, function by function.
    pub fn all_objects(&self) -> impl Iterator<Item = &ScenarioObject> {
        self.active_space
            .functions
            .iter()
            .flat_map(|f| f.objects.iter())
    }

    pub fn find_object(&self, object_id: &str) -> Option<&ScenarioObject> {
        self.all_objects().find(|o| o.id == object_id)
    }

    /// The function that owns `object_id`.
    pub fn owner_of(&self, object_id: &str) -> Option<&ScenarioFunction> {
        self.active_space
            .functions
            .iter()
            .find(|f| f.contains(object_id))
    }

    /// Linear scan for the thread attached to `object_id`.
    pub fn chat_for_object(&self, object_id: &str) -> Option<&ChatThread> {
        self.unified_chat
            .iter()
            .find(|t| t.related_object_id == object_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parse_defaults_to_medium() {
        assert_eq!(Priority::parse("Critical"), Priority::Critical);
        assert_eq!(Priority::parse("  high "), Priority::High);
        assert_eq!(Priority::parse("LOW"), Priority::Low);
        assert_eq!(Priority::parse("urgent"), Priority::Medium);
        assert_eq!(Priority::parse(""), Priority::Medium);
    }

    #[test]
    fn ids_compare_against_plain_strings() {
        let id = ObjectId::new("obj_1");
        assert_eq!(id, "obj_1");
        assert_eq!(id.as_str(), "obj_1");
        assert_eq!(id.to_string(), "obj_1");
        assert_ne!(id, ObjectId::from("obj_2"));
    }

    #[test]
    fn view_hint_labels_are_lowercase() {
        assert_eq!(ViewTypeHint::Kanban.label(), "kanban");
        assert_eq!(ViewTypeHint::Table.label(), "table");
        assert_eq!(ViewTypeHint::Dashboard.label(), "dashboard");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn priority_deserializes_unknown_labels_as_medium() {
        let p: Priority = serde_json::from_str("\"Someday\"").unwrap();
        assert_eq!(p, Priority::Medium);
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"High\"");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn object_deserializes_with_optional_hints_missing() {
        let json = r#"{
            "id": "obj_9",
            "title": "Pallet count",
            "status": "Open",
            "priority": "Low",
            "assignee": "Ana",
            "custom_fields": [{ "name": "Pallets", "value": "45" }]
        }"#;
        let obj: ScenarioObject = serde_json::from_str(json).unwrap();
        assert_eq!(obj.id, "obj_9");
        assert_eq!(obj.date, None);
        assert_eq!(obj.custom_fields[0].kind, FieldKind::PlainText);
    }
}
