//! The "AI generation" step: one named, swappable suspension point followed by
//! keyword classification.
//!
//! Callers only see [`ScenarioGenerator`]. The shipped [`SimulatedGenerator`]
//! waits a fixed latency through an injected [`Sleep`] and then runs
//! [`classify`](crate::classify::classify). A real backend would implement the
//! same trait.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::classify::classify;
use crate::model::Scenario;
use crate::store::SessionStore;

/// Pause applied by [`SimulatedGenerator::new`].
pub const GENERATION_LATENCY: Duration = Duration::from_millis(1500);

/// Timer abstraction so the delay works on tokio, in the browser and in tests.
pub trait Sleep {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Completes immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Sleep for NoDelay {
    async fn sleep(&self, _duration: Duration) {}
}

pub trait ScenarioGenerator {
    /// Never fails; every brief yields a scenario.
    fn generate(&self, brief: &str) -> impl Future<Output = Scenario>;
}

#[derive(Debug, Clone)]
pub struct SimulatedGenerator<S> {
    sleeper: S,
    latency: Duration,
}

impl<S: Sleep> SimulatedGenerator<S> {
    pub fn new(sleeper: S) -> Self {
        Self::with_latency(sleeper, GENERATION_LATENCY)
    }

    pub fn with_latency(sleeper: S, latency: Duration) -> Self {
        Self { sleeper, latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl<S: Sleep> ScenarioGenerator for SimulatedGenerator<S> {
    async fn generate(&self, brief: &str) -> Scenario {
        debug!(latency_ms = self.latency.as_millis() as u64, "simulating generation");
        self.sleeper.sleep(self.latency).await;
        classify(brief)
    }
}

/// Briefing form state: the text being typed and whether a generation is running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BriefingState {
    input: String,
    generating: bool,
}

impl BriefingState {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Fills the form from one of the example prompts. Ignored mid-generation.
    pub fn apply_example(&mut self, prompt: &str) {
        if !self.generating {
            self.input = prompt.to_string();
        }
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn can_submit(&self) -> bool {
        !self.generating && !self.input.trim().is_empty()
    }

    /// Marks a generation as started and hands back the brief, or `None` when
    /// the form cannot be submitted.
    pub fn begin(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.generating = true;
        Some(self.input.clone())
    }

    pub fn finish(&mut self) {
        self.generating = false;
    }
}

/// Full briefing submit: generate, install into the store, reset the flag.
/// Returns `false` when the form was not submittable.
pub async fn submit<G: ScenarioGenerator>(
    generator: &G,
    briefing: &mut BriefingState,
    store: &mut SessionStore,
) -> bool {
    let Some(brief) = briefing.begin() else {
        return false;
    };
    let scenario = generator.generate(&brief).await;
    store.install_scenario(scenario);
    briefing.finish();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AppView;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSleep {
        calls: RefCell<Vec<Duration>>,
    }

    impl Sleep for RecordingSleep {
        async fn sleep(&self, duration: Duration) {
            self.calls.borrow_mut().push(duration);
        }
    }

    #[test]
    fn sleeps_exactly_once_with_configured_latency() {
        let generator = SimulatedGenerator::new(RecordingSleep::default());
        let scenario = pollster::block_on(generator.generate("marketing team"));
        assert_eq!(scenario.meta.industry, "Marketing Agency");
        assert_eq!(*generator.sleeper.calls.borrow(), [GENERATION_LATENCY]);
    }

    #[test]
    fn custom_latency_is_used() {
        let generator =
            SimulatedGenerator::with_latency(RecordingSleep::default(), Duration::from_millis(5));
        pollster::block_on(generator.generate(""));
        assert_eq!(*generator.sleeper.calls.borrow(), [Duration::from_millis(5)]);
        assert_eq!(generator.latency(), Duration::from_millis(5));
    }

    #[test]
    fn blank_brief_cannot_be_submitted() {
        let mut form = BriefingState::default();
        assert!(!form.can_submit());
        form.set_input("   \n");
        assert!(!form.can_submit());
        assert_eq!(form.begin(), None);
        assert!(!form.is_generating());
    }

    #[test]
    fn begin_blocks_a_second_submit_until_finish() {
        let mut form = BriefingState::default();
        form.set_input("fleet tracking");
        assert_eq!(form.begin().as_deref(), Some("fleet tracking"));
        assert!(form.is_generating());
        assert!(!form.can_submit());
        assert_eq!(form.begin(), None);
        form.apply_example("ignored while generating");
        assert_eq!(form.input(), "fleet tracking");
        form.finish();
        assert!(form.can_submit());
    }

    #[test]
    fn submit_installs_scenario_and_selects_first_function() {
        let generator = SimulatedGenerator::new(NoDelay);
        let mut form = BriefingState::default();
        let mut store = SessionStore::default();
        form.apply_example("A construction company tracking materials");

        assert!(pollster::block_on(submit(&generator, &mut form, &mut store)));
        assert!(!form.is_generating());
        assert_eq!(store.app_view(), AppView::Simulation);
        let scenario = store.scenario().unwrap();
        assert_eq!(scenario.meta.industry, "Construction");
        assert_eq!(
            store.selected_function().map(|f| f.id.as_str()),
            scenario.first_function().map(|f| f.id.as_str())
        );
        assert!(store.selected_object().is_none());
    }

    #[test]
    fn submit_with_empty_form_is_a_no_op() {
        let generator = SimulatedGenerator::new(NoDelay);
        let mut form = BriefingState::default();
        let mut store = SessionStore::default();
        assert!(!pollster::block_on(submit(&generator, &mut form, &mut store)));
        assert!(store.scenario().is_none());
        assert_eq!(store.app_view(), AppView::Briefing);
    }
}
