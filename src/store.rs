//! Session state: the active scenario, the top-level view and the two selection
//! pointers.
//!
//! The store is an explicit value. Front-ends own one and hand it (or a signal
//! wrapping it) to each component; nothing reaches it ambiently.
//!
//! The single-field setters never cascade. In particular changing the selected
//! function leaves the selected object alone, so an object can stay selected after
//! its function is navigated away from. [`SessionStore::focus_function`] is the
//! reconciling variant used by sidebar navigation.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::{ChatMessage, ChatThread, FunctionId, ObjectId, Scenario, ScenarioFunction, ScenarioObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppView {
    #[default]
    Briefing,
    Simulation,
}

impl AppView {
    pub fn label(self) -> &'static str {
        match self {
            AppView::Briefing => "briefing",
            AppView::Simulation => "simulation",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore {
    scenario: Option<Scenario>,
    app_view: AppView,
    selected_function: Option<FunctionId>,
    selected_object: Option<ObjectId>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- raw setters -------------------------------------------------------

    /// Replaces the scenario. Selections are not touched.
    pub fn set_scenario(&mut self, scenario: Option<Scenario>) {
        match &scenario {
            Some(s) => info!(company = %s.meta.company_name, industry = %s.meta.industry, "scenario set"),
            None => info!("scenario cleared"),
        }
        self.scenario = scenario;
    }

    pub fn set_app_view(&mut self, view: AppView) {
        debug!(view = view.label(), "app view");
        self.app_view = view;
    }

    pub fn set_selected_function(&mut self, id: Option<FunctionId>) {
        debug!(function = ?id, "select function");
        self.selected_function = id;
    }

    pub fn set_selected_object(&mut self, id: Option<ObjectId>) {
        debug!(object = ?id, "select object");
        self.selected_object = id;
    }

    // ---- getters -----------------------------------------------------------

    pub fn scenario(&self) -> Option<&Scenario> {
        self.scenario.as_ref()
    }

    pub fn app_view(&self) -> AppView {
        self.app_view
    }

    pub fn selected_function_id(&self) -> Option<&FunctionId> {
        self.selected_function.as_ref()
    }

    pub fn selected_object_id(&self) -> Option<&ObjectId> {
        self.selected_object.as_ref()
    }

    pub fn selected_function(&self) -> Option<&ScenarioFunction> {
        let id = self.selected_function.as_ref()?;
        self.scenario()?.find_function(id.as_str())
    }

    /// Resolved against the whole active space, so a stale selection from
    /// another function still resolves.
    pub fn selected_object(&self) -> Option<&ScenarioObject> {
        let id = self.selected_object.as_ref()?;
        self.scenario()?.find_object(id.as_str())
    }

    pub fn is_object_selected(&self, id: &ObjectId) -> bool {
        self.selected_object.as_ref() == Some(id)
    }

    // ---- chat --------------------------------------------------------------

    pub fn chat_for_object(&self, object_id: &str) -> Option<&ChatThread> {
        self.scenario()?.chat_for_object(object_id)
    }

    /// Messages of the thread attached to `object_id`; empty on a miss.
    pub fn chat_messages_for(&self, object_id: &str) -> &[ChatMessage] {
        self.chat_for_object(object_id)
            .map_or(&[], |t| t.messages.as_slice())
    }

    // ---- id-checked selection ----------------------------------------------

    pub fn select_function_by_id(&mut self, id: &str) -> Result<()> {
        let scenario = self.scenario().ok_or(Error::NoScenario)?;
        let function = scenario
            .find_function(id)
            .ok_or_else(|| Error::UnknownFunction(id.to_string()))?;
        let id = function.id.clone();
        self.set_selected_function(Some(id));
        Ok(())
    }

    pub fn select_object_by_id(&mut self, id: &str) -> Result<()> {
        let scenario = self.scenario().ok_or(Error::NoScenario)?;
        let object = scenario
            .find_object(id)
            .ok_or_else(|| Error::UnknownObject(id.to_string()))?;
        let id = object.id.clone();
        self.set_selected_object(Some(id));
        Ok(())
    }

    // ---- flows -------------------------------------------------------------

    /// Briefing flow: install, select the first function, clear the object and
    /// switch to the simulation.
    pub fn install_scenario(&mut self, scenario: Scenario) {
        let first = scenario.first_function().map(|f| f.id.clone());
        self.set_scenario(Some(scenario));
        self.set_selected_function(first);
        self.set_selected_object(None);
        self.set_app_view(AppView::Simulation);
    }

    /// The only reset path: clears everything and shows the briefing screen.
    pub fn return_to_briefing(&mut self) {
        self.set_scenario(None);
        self.set_selected_function(None);
        self.set_selected_object(None);
        self.set_app_view(AppView::Briefing);
    }

    /// Sidebar navigation: select `id` and drop the object selection if that
    /// object does not belong to the new function.
    pub fn focus_function(&mut self, id: &str) -> Result<()> {
        self.select_function_by_id(id)?;
        let keep = match (self.selected_function(), self.selected_object.as_ref()) {
            (Some(f), Some(obj)) => f.contains(obj.as_str()),
            _ => true,
        };
        if !keep {
            self.set_selected_object(None);
        }
        Ok(())
    }

    pub fn close_detail(&mut self) {
        self.set_selected_object(None);
    }

    /// True when no object is selected, or the selected object belongs to the
    /// selected function.
    pub fn selection_is_consistent(&self) -> bool {
        let Some(obj) = self.selected_object.as_ref() else {
            return true;
        };
        self.selected_function()
            .is_some_and(|f| f.contains(obj.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn construction_store() -> SessionStore {
        let mut store = SessionStore::new();
        store.install_scenario(fixtures::construction());
        store
    }

    #[test]
    fn starts_on_briefing_with_nothing_selected() {
        let store = SessionStore::default();
        assert_eq!(store.app_view(), AppView::Briefing);
        assert!(store.scenario().is_none());
        assert!(store.selected_function().is_none());
        assert!(store.selection_is_consistent());
    }

    #[test]
    fn raw_scenario_setter_does_not_select() {
        let mut store = SessionStore::new();
        store.set_scenario(Some(fixtures::logistics()));
        assert!(store.selected_function_id().is_none());
        assert_eq!(store.app_view(), AppView::Briefing);
    }

    #[test]
    fn install_selects_first_function() {
        let store = construction_store();
        assert_eq!(store.app_view(), AppView::Simulation);
        assert_eq!(store.selected_function().unwrap().name, "Material Tracking");
        assert!(store.selected_object_id().is_none());
    }

    #[test]
    fn function_switch_keeps_stale_object() {
        let mut store = construction_store();
        store.select_object_by_id("obj_4").unwrap();
        assert_eq!(store.selected_object().unwrap().status, "Delayed");

        let inspections = store
            .scenario()
            .unwrap()
            .functions()
            .iter()
            .find(|f| f.name == "Site Inspections")
            .unwrap()
            .id
            .clone();
        store.set_selected_function(Some(inspections));

        assert_eq!(store.selected_object_id().unwrap(), "obj_4");
        assert!(store.selected_object().is_some());
        assert!(!store.selection_is_consistent());
    }

    #[test]
    fn focus_function_clears_foreign_object() {
        let mut store = construction_store();
        store.select_object_by_id("obj_4").unwrap();
        let second = store.scenario().unwrap().functions()[1].id.clone();
        store.focus_function(second.as_str()).unwrap();
        assert!(store.selected_object_id().is_none());
        assert!(store.selection_is_consistent());
    }

    #[test]
    fn focus_function_keeps_own_object() {
        let mut store = construction_store();
        store.select_object_by_id("obj_1").unwrap();
        let first = store.scenario().unwrap().functions()[0].id.clone();
        store.focus_function(first.as_str()).unwrap();
        assert_eq!(store.selected_object_id().unwrap(), "obj_1");
    }

    #[test]
    fn id_selection_errors() {
        let mut empty = SessionStore::new();
        assert!(matches!(empty.select_function_by_id("f1"), Err(Error::NoScenario)));

        let mut store = construction_store();
        assert!(matches!(
            store.select_function_by_id("nope"),
            Err(Error::UnknownFunction(_))
        ));
        assert!(matches!(
            store.select_object_by_id("obj_999"),
            Err(Error::UnknownObject(_))
        ));
        // Failed selections leave state untouched.
        assert_eq!(store.selected_function().unwrap().name, "Material Tracking");
    }

    #[test]
    fn chat_lookup_misses_are_empty() {
        let store = construction_store();
        assert!(store.chat_for_object("obj_999").is_none());
        assert!(store.chat_messages_for("obj_999").is_empty());
        assert!(SessionStore::new().chat_messages_for("obj_1").is_empty());
    }

    #[test]
    fn chat_lookup_finds_the_thread() {
        let store = construction_store();
        let scenario = store.scenario().unwrap();
        let related = scenario.unified_chat[0].related_object_id.clone();
        let thread = store.chat_for_object(related.as_str()).unwrap();
        assert_eq!(thread.related_object_id, related);
        assert!(!store.chat_messages_for(related.as_str()).is_empty());
    }

    #[test]
    fn return_to_briefing_resets_everything() {
        let mut store = construction_store();
        store.select_object_by_id("obj_2").unwrap();
        store.return_to_briefing();
        assert_eq!(store, SessionStore::default());
    }

    #[test]
    fn close_detail_only_clears_object() {
        let mut store = construction_store();
        store.select_object_by_id("obj_2").unwrap();
        store.close_detail();
        assert!(store.selected_object().is_none());
        assert!(store.selected_function().is_some());
    }
}
