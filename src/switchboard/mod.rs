//! View switchboard: read-only projections of a function's objects for each view
//! mode.
//!
//! Nothing here takes `&mut` scenario data. Switching modes is a display-state
//! change on the caller's side; every projection below can be recomputed from the
//! same borrowed function at any time.

use std::fmt;
use std::str::FromStr;

use hashbrown::HashMap;

use crate::config::UiConfig;
use crate::error::Error;
use crate::icons::Icon;
use crate::model::{
    ChatMessage, CustomField, ObjectId, Scenario, ScenarioFunction, ScenarioObject, ViewTypeHint,
};
use crate::structure::name_color;
use crate::tone::{chat_avatar_tone, kanban_status_tone, priority_tone, status_tone, Tone};

pub mod dashboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    List,
    Table,
    Kanban,
    Dashboard,
    Structure,
    Overview,
    Chat,
}

impl ViewMode {
    pub fn all() -> &'static [ViewMode] {
        &[
            ViewMode::List,
            ViewMode::Table,
            ViewMode::Kanban,
            ViewMode::Dashboard,
            ViewMode::Structure,
            ViewMode::Overview,
            ViewMode::Chat,
        ]
    }

    /// Modes offered by the view switcher under the "WORK VIEWS" tab.
    pub fn work_views() -> &'static [ViewMode] {
        &Self::all()[..6]
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::List => "List",
            ViewMode::Table => "Table",
            ViewMode::Kanban => "Kanban",
            ViewMode::Dashboard => "Dashboard",
            ViewMode::Structure => "Structure",
            ViewMode::Overview => "Overview",
            ViewMode::Chat => "Chat",
        }
    }

    /// Mode a function opens in: Kanban for a kanban hint, List otherwise.
    pub fn initial_for(hint: ViewTypeHint) -> ViewMode {
        match hint {
            ViewTypeHint::Kanban => ViewMode::Kanban,
            ViewTypeHint::Table | ViewTypeHint::Dashboard => ViewMode::List,
        }
    }

    pub fn shows_detail_panel(self) -> bool {
        self != ViewMode::Chat
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ViewMode::all()
            .iter()
            .copied()
            .find(|m| m.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownViewMode(s.to_string()))
    }
}

// ---- list -------------------------------------------------------------------

/// Upper-cases `status` and cuts it to `keep` chars plus "..." when it is longer
/// than `max` chars.
pub fn truncate_status(status: &str, max: usize, keep: usize) -> String {
    let upper = status.to_uppercase();
    if upper.chars().count() > max {
        let mut cut: String = upper.chars().take(keep).collect();
        cut.push_str("...");
        cut
    } else {
        upper
    }
}

/// Empty rows needed to pad `n` rows up to `min_rows`.
pub fn placeholder_rows(n: usize, min_rows: usize) -> usize {
    min_rows.saturating_sub(n)
}

/// Row icon: by declared object type, then by keywords in the function name.
pub fn list_row_icon(object_type: Option<&str>, function_name: &str) -> (Icon, Tone) {
    let by_type = match object_type {
        Some("Contract") => Some((Icon::FileText, Tone::Purple)),
        Some("Delivery") => Some((Icon::Truck, Tone::Blue)),
        Some("Material") => Some((Icon::Package, Tone::Amber)),
        Some("Inspection") => Some((Icon::ClipboardCheck, Tone::Orange)),
        Some("Campaign") => Some((Icon::Target, Tone::Amber)),
        Some("Maintenance") => Some((Icon::Wrench, Tone::Slate)),
        Some("Task") => Some((Icon::FileText, Tone::Blue)),
        Some("Project") => Some((Icon::ClipboardCheck, Tone::Amber)),
        Some("Content") => Some((Icon::Calendar, Tone::Teal)),
        _ => None,
    };
    if let Some(hit) = by_type {
        return hit;
    }
    let name = function_name.to_lowercase();
    if name.contains("project") {
        (Icon::ClipboardCheck, Tone::Amber)
    } else if name.contains("campaign") {
        (Icon::Target, Tone::Amber)
    } else if name.contains("material") {
        (Icon::Package, Tone::Amber)
    } else if name.contains("content") {
        (Icon::Calendar, Tone::Teal)
    } else {
        (Icon::ClipboardCheck, Tone::Amber)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListRow<'a> {
    pub object: &'a ScenarioObject,
    pub status_label: String,
    pub status_tone: Tone,
    pub icon: Icon,
    pub icon_tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a> {
    /// Native object order.
    pub rows: Vec<ListRow<'a>>,
    /// Skeleton rows after the real ones. Not selectable.
    pub placeholders: usize,
}

impl ListView<'_> {
    /// Drives the "No data yet" state.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn list_view<'a>(function: &'a ScenarioFunction, cfg: &UiConfig) -> ListView<'a> {
    let rows: Vec<ListRow<'a>> = function
        .objects
        .iter()
        .map(|object| {
            let (icon, icon_tone) = list_row_icon(object.object_type.as_deref(), &function.name);
            ListRow {
                object,
                status_label: truncate_status(
                    &object.status,
                    cfg.status_max_chars,
                    cfg.status_keep_chars,
                ),
                status_tone: status_tone(&object.status),
                icon,
                icon_tone,
            }
        })
        .collect();
    let placeholders = placeholder_rows(rows.len(), cfg.list_min_rows);
    ListView { rows, placeholders }
}

// ---- table ------------------------------------------------------------------

pub const TABLE_BASE_COLUMNS: [&str; 4] = ["Title", "Status", "Priority", "Assignee"];
pub const TABLE_FIELD_COLUMNS: usize = 3;
pub const MISSING_CELL: &str = "—";

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow<'a> {
    pub object: &'a ScenarioObject,
    pub cells: Vec<String>,
    pub status_tone: Tone,
    pub priority_tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a> {
    pub columns: Vec<String>,
    pub rows: Vec<TableRow<'a>>,
}

pub fn table_view(function: &ScenarioFunction) -> TableView<'_> {
    let mut field_columns: Vec<&str> = Vec::new();
    for object in &function.objects {
        for field in &object.custom_fields {
            if field_columns.len() == TABLE_FIELD_COLUMNS {
                break;
            }
            if !field_columns.contains(&field.name.as_str()) {
                field_columns.push(&field.name);
            }
        }
    }

    let columns = TABLE_BASE_COLUMNS
        .iter()
        .copied()
        .chain(field_columns.iter().copied())
        .map(str::to_string)
        .collect();

    let rows = function
        .objects
        .iter()
        .map(|object| {
            let mut cells = vec![
                object.title.clone(),
                object.status.clone(),
                object.priority.label().to_string(),
                object.assignee.clone(),
            ];
            cells.extend(field_columns.iter().map(|name| {
                object
                    .field(name)
                    .map_or_else(|| MISSING_CELL.to_string(), |f| f.value.clone())
            }));
            TableRow {
                object,
                cells,
                status_tone: kanban_status_tone(&object.status),
                priority_tone: priority_tone(object.priority),
            }
        })
        .collect();

    TableView { columns, rows }
}

// ---- kanban -----------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct KanbanColumn<'a> {
    pub status: &'a str,
    pub tone: Tone,
    pub cards: Vec<&'a ScenarioObject>,
}

/// One column per distinct literal status, in first-seen order. Every object
/// lands in exactly one column.
pub fn kanban_columns(objects: &[ScenarioObject]) -> Vec<KanbanColumn<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut columns: Vec<KanbanColumn<'_>> = Vec::new();
    for object in objects {
        let status = object.status.as_str();
        let slot = *index.entry(status).or_insert_with(|| {
            columns.push(KanbanColumn {
                status,
                tone: kanban_status_tone(status),
                cards: Vec::new(),
            });
            columns.len() - 1
        });
        columns[slot].cards.push(object);
    }
    columns
}

/// Custom fields shown on a kanban card.
pub fn card_fields(object: &ScenarioObject, limit: usize) -> &[CustomField] {
    &object.custom_fields[..object.custom_fields.len().min(limit)]
}

// ---- chat -------------------------------------------------------------------

/// Messages from this user are drawn on the right.
pub const CURRENT_USER: &str = "Demo User";

#[derive(Debug, Clone, PartialEq)]
pub struct FeedMessage<'a> {
    /// `"{related_object_id}-{index}"`
    pub id: String,
    pub object_id: &'a ObjectId,
    pub message: &'a ChatMessage,
    pub avatar_tone: Tone,
    pub is_current_user: bool,
}

impl FeedMessage<'_> {
    pub fn initial(&self) -> Option<char> {
        self.message.user.chars().next()
    }
}

/// Every thread concatenated: thread order, then message order.
pub fn chat_feed(scenario: &Scenario) -> Vec<FeedMessage<'_>> {
    scenario
        .unified_chat
        .iter()
        .flat_map(|thread| {
            thread
                .messages
                .iter()
                .enumerate()
                .map(move |(idx, message)| FeedMessage {
                    id: format!("{}-{}", thread.related_object_id, idx),
                    object_id: &thread.related_object_id,
                    message,
                    avatar_tone: chat_avatar_tone(&message.user),
                    is_current_user: message.user == CURRENT_USER,
                })
        })
        .collect()
}

// ---- navigation sidebar -----------------------------------------------------

/// Accent colour of a function in the navigation sidebar.
pub fn function_color(icon: Icon) -> &'static str {
    match icon {
        Icon::Package => "#3B82F6",
        Icon::Target => "#EC4899",
        Icon::Truck => "#3B82F6",
        Icon::Calendar => "#8B5CF6",
        Icon::ClipboardCheck => "#10B981",
        Icon::Wrench => "#F97316",
        _ => "#3B82F6",
    }
}

/// "4 items • kanban"
pub fn nav_subtitle(function: &ScenarioFunction) -> String {
    format!("{} items • {}", function.objects.len(), function.view_type.label())
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavObject<'a> {
    pub object: &'a ScenarioObject,
    pub is_primary: bool,
    pub color: String,
}

/// Sidebar rows under an expanded function. The first object is drawn as the
/// primary in the function colour; the rest take their colour from the title.
pub fn nav_objects(function: &ScenarioFunction) -> Vec<NavObject<'_>> {
    function
        .objects
        .iter()
        .enumerate()
        .map(|(i, object)| {
            let is_primary = i == 0;
            let color = if is_primary {
                function_color(function.icon).to_string()
            } else {
                name_color(&object.title).to_hex()
            };
            NavObject {
                object,
                is_primary,
                color,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::model::Priority;

    fn obj(id: &str, status: &str) -> ScenarioObject {
        ScenarioObject {
            id: ObjectId::new(id),
            title: format!("Item {id}"),
            status: status.to_string(),
            priority: Priority::Medium,
            assignee: "Ana".to_string(),
            assignee_avatar: None,
            object_type: None,
            icon: None,
            date: None,
            custom_fields: Vec::new(),
        }
    }

    #[test]
    fn initial_mode_follows_hint() {
        assert_eq!(ViewMode::initial_for(ViewTypeHint::Kanban), ViewMode::Kanban);
        assert_eq!(ViewMode::initial_for(ViewTypeHint::Table), ViewMode::List);
        assert_eq!(ViewMode::initial_for(ViewTypeHint::Dashboard), ViewMode::List);
    }

    #[test]
    fn view_mode_parses_labels() {
        for mode in ViewMode::all() {
            assert_eq!(mode.label().to_lowercase().parse::<ViewMode>().unwrap(), *mode);
        }
        assert!(matches!("timeline".parse::<ViewMode>(), Err(Error::UnknownViewMode(_))));
        assert!(!ViewMode::work_views().contains(&ViewMode::Chat));
        assert!(!ViewMode::Chat.shows_detail_panel());
    }

    #[test]
    fn status_truncation() {
        assert_eq!(truncate_status("Delayed", 15, 12), "DELAYED");
        assert_eq!(truncate_status("Under Construction", 15, 12), "UNDER CONSTR...");
        // exactly at the budget is kept
        assert_eq!(truncate_status("abcdefghijklmno", 15, 12), "ABCDEFGHIJKLMNO");
    }

    #[test]
    fn placeholders_pad_to_minimum() {
        assert_eq!(placeholder_rows(4, 8), 4);
        assert_eq!(placeholder_rows(8, 8), 0);
        assert_eq!(placeholder_rows(11, 8), 0);
        assert_eq!(placeholder_rows(0, 8), 8);
    }

    #[test]
    fn list_view_keeps_native_order() {
        let scenario = fixtures::construction();
        let f = &scenario.functions()[0];
        let view = list_view(f, &UiConfig::default());
        let ids: Vec<&str> = view.rows.iter().map(|r| r.object.id.as_str()).collect();
        assert_eq!(ids, ["obj_1", "obj_2", "obj_3", "obj_4"]);
        assert_eq!(view.placeholders, 4);
        assert_eq!(view.rows[3].status_label, "DELAYED");
        assert_eq!(view.rows[3].status_tone, Tone::Red);
        // "Material Tracking" infers the material icon
        assert_eq!(view.rows[0].icon, Icon::Package);
        assert!(!view.is_empty());
    }

    #[test]
    fn row_icon_prefers_object_type() {
        assert_eq!(list_row_icon(Some("Delivery"), "Material Tracking").0, Icon::Truck);
        assert_eq!(list_row_icon(Some("Unknown"), "Content Calendar").0, Icon::Calendar);
        assert_eq!(list_row_icon(None, "Fleet"), (Icon::ClipboardCheck, Tone::Amber));
    }

    #[test]
    fn kanban_is_a_partition_in_first_seen_order() {
        let objects = vec![
            obj("a", "Draft"),
            obj("b", "Review"),
            obj("c", "Draft"),
            obj("d", "Filming"),
            obj("e", "Review"),
        ];
        let columns = kanban_columns(&objects);
        let statuses: Vec<&str> = columns.iter().map(|c| c.status).collect();
        assert_eq!(statuses, ["Draft", "Review", "Filming"]);

        let mut seen: Vec<&str> = columns
            .iter()
            .flat_map(|c| c.cards.iter().map(|o| o.id.as_str()))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, ["a", "b", "c", "d", "e"]);
        assert_eq!(columns[0].cards.len(), 2);
        assert_eq!(columns[2].tone, Tone::Orange);
    }

    #[test]
    fn kanban_of_nothing_is_empty() {
        assert!(kanban_columns(&[]).is_empty());
    }

    #[test]
    fn kanban_statuses_are_literal() {
        let objects = vec![obj("a", "Done"), obj("b", "done")];
        assert_eq!(kanban_columns(&objects).len(), 2);
    }

    #[test]
    fn table_uses_first_seen_field_union() {
        let scenario = fixtures::construction();
        let table = table_view(&scenario.functions()[0]);
        assert_eq!(
            table.columns,
            ["Title", "Status", "Priority", "Assignee", "Quantity", "ETA", "Supplier"]
        );
        // obj_2 has no ETA
        assert_eq!(table.rows[1].cells[5], MISSING_CELL);
        assert_eq!(table.rows[0].cells[2], "High");
    }

    #[test]
    fn chat_feed_concatenates_threads() {
        let scenario = fixtures::construction();
        let feed = chat_feed(&scenario);
        let expected: usize = scenario.unified_chat.iter().map(|t| t.messages.len()).sum();
        assert_eq!(feed.len(), expected);
        assert_eq!(feed[0].id, "obj_1-0");
        assert_eq!(feed[3].id, "obj_4-0");
        assert!(feed.iter().all(|m| !m.is_current_user));
    }

    #[test]
    fn card_fields_are_capped() {
        let scenario = fixtures::construction();
        let object = &scenario.functions()[0].objects[0];
        assert_eq!(card_fields(object, 2).len(), 2);
        assert_eq!(card_fields(object, 10).len(), 3);
    }

    #[test]
    fn nav_rows_colour_primary_by_function() {
        let scenario = fixtures::construction();
        let f = &scenario.functions()[0];
        let rows = nav_objects(f);
        assert!(rows[0].is_primary);
        assert_eq!(rows[0].color, "#3B82F6");
        assert!(rows[1..].iter().all(|r| !r.is_primary && r.color.starts_with('#')));
        assert_eq!(nav_subtitle(f), "4 items • kanban");
    }
}
