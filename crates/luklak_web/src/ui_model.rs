//! UI models and metadata that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! route table and screen inventory on the host.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Briefing or simulation, depending on the session's app view.
    #[default]
    Root,
    ObjectManager,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "" => Route::Root,
            "/object-manager" => Route::ObjectManager,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Root | Route::NotFound => "/",
            Route::ObjectManager => "/object-manager",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkTab {
    #[default]
    WorkViews,
    Activities,
    SpaceChat,
}

impl WorkTab {
    pub fn label(self) -> &'static str {
        match self {
            WorkTab::WorkViews => "WORK VIEWS",
            WorkTab::Activities => "ACTIVITIES",
            WorkTab::SpaceChat => "SPACE CHAT",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WorkTab::WorkViews => "▦",
            WorkTab::Activities => "🕒",
            WorkTab::SpaceChat => "💬",
        }
    }

    pub fn all() -> &'static [WorkTab] {
        &[WorkTab::WorkViews, WorkTab::Activities, WorkTab::SpaceChat]
    }
}

/// The detail panel is hidden while the space chat tab is open.
pub fn detail_panel_visible(object_selected: bool, tab: WorkTab) -> bool {
    object_selected && tab != WorkTab::SpaceChat
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Chat,
    Activities,
}

impl DetailTab {
    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Chat => "Live chat",
            DetailTab::Activities => "Activities",
        }
    }

    pub fn all() -> &'static [DetailTab] {
        &[DetailTab::Chat, DetailTab::Activities]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BriefingExample {
    pub label: &'static str,
    pub prompt: &'static str,
}

impl BriefingExample {
    pub fn all() -> &'static [BriefingExample] {
        &[
            BriefingExample {
                label: "Construction",
                prompt: "Material tracking for a construction company",
            },
            BriefingExample {
                label: "Marketing",
                prompt: "Campaign management for a creative agency",
            },
            BriefingExample {
                label: "Logistics",
                prompt: "Fleet operations for a shipping company",
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BriefingKey {
    Submit,
    Newline,
}

/// Enter submits, Shift+Enter inserts a newline, anything else is ignored.
pub fn briefing_key(key: &str, shift: bool) -> Option<BriefingKey> {
    match (key, shift) {
        ("Enter", false) => Some(BriefingKey::Submit),
        ("Enter", true) => Some(BriefingKey::Newline),
        _ => None,
    }
}

/// Short company label on the left rail: the first word of the company name.
pub fn company_badge(company_name: Option<&str>) -> &str {
    company_name
        .and_then(|name| name.split(' ').next())
        .filter(|word| !word.is_empty())
        .unwrap_or("Business")
}

/// Adds `item` to the expanded set, or removes it when already present.
pub fn toggle_expanded<T: PartialEq + Clone>(expanded: &mut Vec<T>, item: &T) {
    match expanded.iter().position(|x| x == item) {
        Some(i) => {
            expanded.remove(i);
        }
        None => expanded.push(item.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luklak::{classify_industry, Industry};

    #[test]
    fn routes_resolve() {
        assert_eq!(Route::from_path("/"), Route::Root);
        assert_eq!(Route::from_path(""), Route::Root);
        assert_eq!(Route::from_path("/object-manager"), Route::ObjectManager);
        assert_eq!(Route::from_path("/object-manager/"), Route::ObjectManager);
        assert_eq!(Route::from_path("/settings"), Route::NotFound);
        assert_eq!(Route::from_path("/object-manager/x"), Route::NotFound);
    }

    #[test]
    fn route_paths_round_trip() {
        for r in [Route::Root, Route::ObjectManager] {
            assert_eq!(Route::from_path(r.path()), r);
        }
    }

    #[test]
    fn work_tab_labels_are_unique_and_non_empty() {
        let mut labels: Vec<&str> = WorkTab::all().iter().map(|t| t.label()).collect();
        assert!(labels.iter().all(|l| !l.trim().is_empty()));
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), WorkTab::all().len());
    }

    #[test]
    fn detail_panel_hidden_on_space_chat() {
        assert!(detail_panel_visible(true, WorkTab::WorkViews));
        assert!(detail_panel_visible(true, WorkTab::Activities));
        assert!(!detail_panel_visible(true, WorkTab::SpaceChat));
        assert!(!detail_panel_visible(false, WorkTab::WorkViews));
    }

    #[test]
    fn examples_classify_to_their_label() {
        let got: Vec<Industry> = BriefingExample::all()
            .iter()
            .map(|e| classify_industry(e.prompt))
            .collect();
        assert_eq!(got, [Industry::Construction, Industry::Marketing, Industry::Logistics]);
        for e in BriefingExample::all() {
            assert_eq!(e.label.parse::<Industry>().unwrap(), classify_industry(e.prompt));
        }
    }

    #[test]
    fn enter_submits_unless_shifted() {
        assert_eq!(briefing_key("Enter", false), Some(BriefingKey::Submit));
        assert_eq!(briefing_key("Enter", true), Some(BriefingKey::Newline));
        assert_eq!(briefing_key("a", false), None);
    }

    #[test]
    fn detail_tabs() {
        assert_eq!(DetailTab::default().label(), "Live chat");
        assert_eq!(DetailTab::all().len(), 2);
    }

    #[test]
    fn company_badge_uses_first_word() {
        assert_eq!(company_badge(Some("BuildRight Co.")), "BuildRight");
        assert_eq!(company_badge(Some("")), "Business");
        assert_eq!(company_badge(None), "Business");
    }

    #[test]
    fn expanded_set_toggles() {
        let mut open = vec!["func_1".to_string()];
        toggle_expanded(&mut open, &"func_2".to_string());
        assert_eq!(open, ["func_1", "func_2"]);
        toggle_expanded(&mut open, &"func_1".to_string());
        assert_eq!(open, ["func_2"]);
    }
}
