//! Plain-text renderings of the switchboard projections.

use luklak::catalog::{visible_fields, CatalogSummary, ObjectDefinition};
use luklak::detail::{DetailPanel, TextSpan, WORKFLOW_SEGMENTS, WORKFLOW_STAGES};
use luklak::fixtures::{sample_business_structure, structure_for_industry};
use luklak::structure::{layout_function, BusinessStructure, FunctionBlock, LayoutMetrics, ObjectItem, Space};
use luklak::switchboard::dashboard::{
    bar_heights, DashboardMock, METRICS_TITLE, PIE_TITLE, PIPELINE_TITLE, ROI_COLUMNS, ROI_TITLE,
};
use luklak::switchboard::{
    card_fields, chat_feed, kanban_columns, list_view, nav_subtitle, table_view, CURRENT_USER,
};
use luklak::{Scenario, ScenarioFunction, SessionStore, UiConfig, ViewMode};

const TITLE_WIDTH: usize = 36;
const BAR_WIDTH: f64 = 24.0;

/// Renders `mode` for the store's current selection.
pub fn view(mode: ViewMode, store: &SessionStore, cfg: &UiConfig) -> String {
    let Some(scenario) = store.scenario() else {
        return "No scenario loaded\n".to_string();
    };
    let function = store.selected_function();
    match (mode, function) {
        (ViewMode::Chat, _) => chat(scenario),
        (ViewMode::Dashboard, _) => dashboard(),
        (ViewMode::Structure, _) => spaces(&structure_for_industry(&scenario.meta.industry)),
        (ViewMode::Overview, _) => overview(&sample_business_structure()),
        (_, None) => "Select a function from the sidebar\n".to_string(),
        (ViewMode::List, Some(f)) => list(f, cfg),
        (ViewMode::Table, Some(f)) => table(f),
        (ViewMode::Kanban, Some(f)) => kanban(f, cfg),
    }
}

pub fn header(scenario: &Scenario, function: Option<&ScenarioFunction>) -> String {
    let mut lines = vec![format!(
        "{} · {} · {}",
        scenario.meta.company_name.to_uppercase(),
        scenario.active_space.name,
        scenario.meta.industry
    )];
    for f in scenario.functions() {
        let marker = if function.is_some_and(|sel| sel.id == f.id) { ">" } else { " " };
        lines.push(format!("{marker} {} {} [{}] ({})", f.icon.glyph(), f.name, f.id, nav_subtitle(f)));
    }
    lines.join("\n") + "\n"
}

pub fn list(function: &ScenarioFunction, cfg: &UiConfig) -> String {
    let view = list_view(function, cfg);
    if view.is_empty() {
        return "No data yet\nThis function is ready for your data\n".to_string();
    }
    let mut lines = vec![format!("   {:<TITLE_WIDTH$} STATUS", "TITLE")];
    for row in &view.rows {
        lines.push(format!(
            "{} {:<TITLE_WIDTH$} {}",
            row.icon.glyph(),
            row.object.title,
            row.status_label
        ));
    }
    for _ in 0..view.placeholders {
        lines.push("  ·".to_string());
    }
    lines.join("\n") + "\n"
}

pub fn table(function: &ScenarioFunction) -> String {
    let view = table_view(function);
    if view.rows.is_empty() {
        return "No data yet\n".to_string();
    }
    let widths: Vec<usize> = (0..view.columns.len())
        .map(|i| {
            view.rows
                .iter()
                .map(|r| r.cells[i].chars().count())
                .chain(std::iter::once(view.columns[i].chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();
    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };
    let mut lines = vec![line(&view.columns)];
    lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-"));
    for row in &view.rows {
        lines.push(line(&row.cells));
    }
    lines.join("\n") + "\n"
}

pub fn kanban(function: &ScenarioFunction, cfg: &UiConfig) -> String {
    let mut lines = Vec::new();
    for column in kanban_columns(&function.objects) {
        lines.push(format!("== {} ({}) ==", column.status.to_uppercase(), column.cards.len()));
        if column.cards.is_empty() {
            lines.push("  No items in this column".to_string());
        }
        for card in &column.cards {
            lines.push(format!("  - {} [{}]", card.title, card.priority.label()));
            for field in card_fields(card, cfg.kanban_card_fields) {
                lines.push(format!("      {}: {}", field.name, field.value));
            }
            let initial = card.assignee_initial().unwrap_or(' ');
            lines.push(format!("      ({initial}) {}", card.assignee));
        }
    }
    lines.join("\n") + "\n"
}

pub fn chat(scenario: &Scenario) -> String {
    let feed = chat_feed(scenario);
    if feed.is_empty() {
        return "💬 Space Chat\nTeam messages will appear here\n".to_string();
    }
    let mut lines: Vec<String> = feed
        .iter()
        .map(|m| {
            let time = m.message.timestamp.as_deref().unwrap_or_default();
            if m.is_current_user {
                format!("{:>60}  <{CURRENT_USER}>", m.message.text)
            } else {
                format!("[{}] {} {time}: {}", m.object_id, m.message.user, m.message.text)
            }
        })
        .collect();
    lines.push("… several people are typing".to_string());
    lines.join("\n") + "\n"
}

fn item_lines(lines: &mut Vec<String>, item: &ObjectItem, lead: &str, rail: &str) {
    lines.push(format!("  {lead} {} {}", item.icon.glyph(), item.name));
    for sub in &item.sub_objects {
        lines.push(format!("  {rail}    · {}", sub.name));
    }
}

fn function_tree(lines: &mut Vec<String>, block: &FunctionBlock) {
    lines.push(format!("  {} (Function: {})", block.name, block.label));
    let layout = layout_function(block, &LayoutMetrics::default());
    if let Some(primary) = &layout.primary {
        let rail = if layout.children.is_empty() { " " } else { "│" };
        item_lines(lines, primary.item, "●", rail);
    }
    for child in &layout.children {
        let (lead, rail) = if child.connector.is_last { ("└─", " ") } else { ("├─", "│") };
        item_lines(lines, child.node.item, lead, rail);
    }
}

fn space_tree(lines: &mut Vec<String>, space: &Space) {
    lines.push(format!("▲ {} {}", space.name, space.icon.glyph()));
    for block in &space.functions {
        function_tree(lines, block);
    }
}

pub fn spaces(spaces: &[Space]) -> String {
    let mut lines = Vec::new();
    for (i, space) in spaces.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        space_tree(&mut lines, space);
    }
    lines.join("\n") + "\n"
}

pub fn overview(structure: &BusinessStructure) -> String {
    let mut lines = vec![
        format!("{} ({})", structure.company_name, structure.industry),
        String::new(),
    ];
    for area in &structure.areas {
        lines.push(format!("# {}", area.name));
        for space in &area.spaces {
            space_tree(&mut lines, space);
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

pub fn dashboard() -> String {
    let mock = DashboardMock::fixed();
    let mut lines = vec![PIE_TITLE.to_string()];
    let total: f64 = mock.pie.iter().map(|d| d.value).sum();
    for d in &mock.pie {
        let share = if total > 0.0 { d.value / total * 100.0 } else { 0.0 };
        lines.push(format!("  {:>5.1}%  {}", share, d.label));
    }

    lines.push(String::new());
    lines.push(METRICS_TITLE.to_string());
    for m in &mock.metrics {
        lines.push(format!("  {}{:<4} {}", m.value, m.suffix.unwrap_or_default(), m.label));
    }

    lines.push(String::new());
    lines.push(ROI_TITLE.to_string());
    lines.push(format!("  {}", ROI_COLUMNS.join(" | ")));
    for r in &mock.roi {
        let count = |n: Option<u32>| n.map(|n| n.to_string()).unwrap_or_default();
        lines.push(format!(
            "  {} | {} | {} | {} | {} | {} | {}",
            r.name,
            r.status,
            r.spend,
            count(r.leads),
            count(r.won_leads),
            r.revenue,
            r.roas
        ));
    }

    lines.push(String::new());
    lines.push(PIPELINE_TITLE.to_string());
    for (group, heights) in mock.bars.iter().zip(bar_heights(&mock.bars, BAR_WIDTH)) {
        for (series, h) in mock.series.iter().zip(heights) {
            lines.push(format!(
                "  {} {:<16} {}",
                group.label,
                series.name,
                "#".repeat(h.round() as usize)
            ));
        }
    }
    lines.join("\n") + "\n"
}

pub fn detail(panel: &DetailPanel<'_>) -> String {
    let object = panel.object;
    let filled = panel.workflow_filled;
    let bar: String = (0..WORKFLOW_SEGMENTS)
        .map(|i| if i < filled { '█' } else { '░' })
        .collect();
    let mut lines = vec![
        format!("{} {} · {}", panel.type_icon.0.glyph(), panel.object_type, panel.assignee_first_name),
        object.title.clone(),
        format!("{} · {}", object.status, panel.date),
        format!("{} {bar}", WORKFLOW_STAGES[0]),
        String::new(),
    ];
    for f in &panel.fields {
        let suffix = f
            .customer_ref
            .as_ref()
            .map(|id| format!(" ({id})"))
            .unwrap_or_default();
        let mark = if f.highlighted { " $" } else { "" };
        lines.push(format!("  {}: {}{suffix}{mark}", f.field.name, f.field.value));
    }
    for p in &panel.person_fields {
        lines.push(format!("  @ {}: {}", p.name, p.value));
    }
    lines.push(String::new());
    lines.push("Object Connection".to_string());
    for c in &panel.connections {
        lines.push(format!("  {} · {} {} [{}]", c.group, c.code, c.title, c.status));
    }
    lines.push(String::new());
    lines.push("Live chat".to_string());
    if !panel.has_messages() {
        lines.push("  No messages for this item yet".to_string());
    }
    for m in &panel.messages {
        let text: String = m
            .spans
            .iter()
            .map(|span| match span {
                TextSpan::Text(t) => (*t).to_string(),
                TextSpan::Mention(name) => format!("**{name}**"),
            })
            .collect();
        let side = if m.own { "→" } else { " " };
        lines.push(format!("  {side} {}: {text}", m.message.user));
    }
    lines.join("\n") + "\n"
}

pub fn catalog(hits: &[&ObjectDefinition], summary: &CatalogSummary, cfg: &UiConfig) -> String {
    let mut lines = vec![format!("Object Manager · {}", summary.headline()), String::new()];
    if hits.is_empty() {
        lines.push("No objects found".to_string());
        lines.push("Try adjusting your search or filters".to_string());
    }
    for def in hits {
        lines.push(format!("{} {} [{}]", def.icon.glyph(), def.name, def.category.label()));
        lines.push(format!("    {}", def.description));
        let (shown, more) = visible_fields(def, cfg.catalog_visible_fields);
        for f in shown {
            lines.push(format!("    {} {}", f.field_type.icon().glyph(), f.name));
        }
        if more > 0 {
            lines.push(format!("    + {more} more fields"));
        }
    }
    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use luklak::catalog::{filter_definitions, CategoryFilter};
    use luklak::fixtures::{self, object_definitions};
    use luklak::Industry;

    fn construction_store() -> SessionStore {
        let mut store = SessionStore::new();
        store.install_scenario(fixtures::construction());
        store
    }

    #[test]
    fn list_pads_with_placeholders() {
        let store = construction_store();
        let out = view(ViewMode::List, &store, &UiConfig::default());
        assert!(out.contains("Electrical Wiring - Floor 3"));
        assert_eq!(out.lines().filter(|l| l.trim() == "·").count(), 4);
    }

    #[test]
    fn kanban_groups_by_status() {
        let store = construction_store();
        let out = view(ViewMode::Kanban, &store, &UiConfig::default());
        assert!(out.contains("== DELAYED (1) =="));
        assert!(out.contains("(L) Lisa Park"));
    }

    #[test]
    fn table_has_base_columns() {
        let store = construction_store();
        let out = view(ViewMode::Table, &store, &UiConfig::default());
        let first = out.lines().next().unwrap();
        assert!(first.starts_with("Title"));
        assert!(first.contains("Assignee"));
    }

    #[test]
    fn structure_tree_closes_each_function() {
        let out = spaces(&Industry::Construction.structure());
        let elbows = out.matches("└─").count();
        assert!(elbows > 0);
        assert!(out.starts_with('▲'));
    }

    #[test]
    fn chat_lists_every_message() {
        let scenario = fixtures::construction();
        let expected: usize = scenario.unified_chat.iter().map(|t| t.messages.len()).sum();
        let out = chat(&scenario);
        assert_eq!(out.lines().count(), expected + 1);
    }

    #[test]
    fn dashboard_has_all_sections() {
        let out = dashboard();
        for title in [PIE_TITLE, METRICS_TITLE, ROI_TITLE, PIPELINE_TITLE] {
            assert!(out.contains(title), "{title}");
        }
    }

    #[test]
    fn detail_shows_chat_and_connections() {
        let mut store = construction_store();
        store.select_object_by_id("obj_4").unwrap();
        let object = store.selected_object().unwrap();
        let panel = DetailPanel::build(
            object,
            store.selected_function(),
            store.chat_for_object("obj_4"),
            &UiConfig::default(),
        );
        let out = detail(&panel);
        assert!(out.contains("Object Connection"));
        assert!(!out.contains("No messages for this item yet"));
    }

    #[test]
    fn catalog_empty_state() {
        let defs = object_definitions();
        let summary = CatalogSummary::of(&defs);
        let hits = filter_definitions(&defs, "zzz-nothing", CategoryFilter::All);
        let out = catalog(&hits, &summary, &UiConfig::default());
        assert!(out.contains("No objects found"));
        assert!(out.contains("10 objects · 42 total fields"));
    }

    #[test]
    fn view_without_scenario() {
        let out = view(ViewMode::List, &SessionStore::new(), &UiConfig::default());
        assert_eq!(out, "No scenario loaded\n");
    }
}
