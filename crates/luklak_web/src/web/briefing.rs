use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use luklak::generation::{BriefingState, ScenarioGenerator, SimulatedGenerator};
use luklak::SessionStore;
use wasm_bindgen_futures::spawn_local;

use super::timing::TimeoutSleep;
use super::{log, ui_config};
use crate::ui_model::{briefing_key, BriefingExample, BriefingKey};

#[component]
pub(super) fn BriefingRoom(store: RwSignal<SessionStore>) -> impl IntoView {
    let form = RwSignal::new(BriefingState::default());
    let latency = ui_config().generation_latency();

    let generate = move || {
        let mut brief = None;
        form.update(|f| brief = f.begin());
        let Some(brief) = brief else {
            return;
        };
        log(&format!("generating scenario ({} ms)", latency.as_millis()));
        spawn_local(async move {
            let generator = SimulatedGenerator::with_latency(TimeoutSleep, latency);
            let scenario = generator.generate(&brief).await;
            log(&format!("scenario ready: {}", scenario.meta.company_name));
            form.update(|f| f.finish());
            store.update(|s| s.install_scenario(scenario));
        });
    };

    let generating = Memo::new(move |_| form.with(|f| f.is_generating()));
    let can_submit = Memo::new(move |_| form.with(|f| f.can_submit()));

    view! {
        <div class="briefing terminal-container">
            <div class="briefing-inner">
                <div class="briefing-header">
                    <div class="briefing-logo">">_"</div>
                    <h1>"Luklak Scenario Builder"</h1>
                    <p class="subtle">
                        "Describe your prospect"<span class="blink">"_"</span>
                    </p>
                </div>

                <div class="terminal-surface">
                    <div class="prompt-row">
                        <span class="prompt-caret">">"</span>
                        <textarea
                            class="brief-input"
                            rows="4"
                            placeholder="A construction company tracking materials across multiple sites..."
                            prop:value=move || form.with(|f| f.input().to_string())
                            prop:disabled=move || generating.get()
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.update(|f| f.set_input(v));
                            }
                            on:keydown=move |ev: KeyboardEvent| {
                                if briefing_key(&ev.key(), ev.shift_key()) == Some(BriefingKey::Submit) {
                                    ev.prevent_default();
                                    generate();
                                }
                            }
                        ></textarea>
                    </div>
                    <div class="prompt-footer">
                        <span class="hint">"Press Enter to generate • Shift+Enter for new line"</span>
                        <button
                            class="btn primary"
                            prop:disabled=move || !can_submit.get()
                            on:click=move |_| generate()
                        >
                            <Show
                                when=move || generating.get()
                                fallback=|| view! { "⚡ Generate Simulation →" }
                            >
                                <span class="spinner"></span>
                                "Generating..."
                            </Show>
                        </button>
                    </div>
                </div>

                <div class="examples">
                    <p class="examples-title">"Try these examples"</p>
                    <div class="examples-grid">
                        {BriefingExample::all()
                            .iter()
                            .map(|ex| {
                                let prompt = ex.prompt;
                                view! {
                                    <button
                                        class="example-card"
                                        prop:disabled=move || generating.get()
                                        on:click=move |_| form.update(|f| f.apply_example(prompt))
                                    >
                                        <div class="example-label">{ex.label}</div>
                                        <div class="example-prompt">{ex.prompt}</div>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <p class="briefing-footer">"LUKLAK DEMO ENVIRONMENT • v1.0"</p>
            </div>
        </div>
    }
}
