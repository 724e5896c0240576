use leptos::prelude::*;
use luklak::{AppView, SessionStore, UiConfig};
use wasm_bindgen::prelude::*;

use crate::ui_model::Route;

mod briefing;
mod detail;
mod object_manager;
mod simulation;
mod structure;
mod timing;
mod views;

use briefing::BriefingRoom;
use object_manager::ObjectManagerPage;
use simulation::SimulationDashboard;

pub fn start() {
    log("luklak: mounting app");
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    // One session per page load; nothing is persisted.
    let store = RwSignal::new(SessionStore::new());
    let route = RwSignal::new(current_route());
    provide_context(UiConfig::default());

    listen_for_popstate(route);

    let navigate = Callback::new(move |to: Route| {
        push_route(to);
        route.set(to);
    });

    let app_view = Memo::new(move |_| store.with(|s| s.app_view()));

    view! {
        {move || match route.get() {
            Route::Root => match app_view.get() {
                AppView::Briefing => view! { <BriefingRoom store=store /> }.into_any(),
                AppView::Simulation => {
                    view! { <SimulationDashboard store=store navigate=navigate /> }.into_any()
                }
            },
            Route::ObjectManager => view! { <ObjectManagerPage navigate=navigate /> }.into_any(),
            Route::NotFound => view! { <NotFound navigate=navigate /> }.into_any(),
        }}
    }
}

#[component]
fn NotFound(navigate: Callback<Route>) -> impl IntoView {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    log(&format!("404: no route for {path}"));

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Oops! Page not found"</p>
            <button class="link-btn" on:click=move |_| navigate.run(Route::Root)>
                "Return to Home"
            </button>
        </div>
    }
}

pub(super) fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Config provided by [`App`]; falls back to defaults outside the tree.
pub(super) fn ui_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}

fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|p| Route::from_path(&p))
        .unwrap_or_default()
}

fn push_route(to: Route) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if history
        .push_state_with_url(&JsValue::NULL, "", Some(to.path()))
        .is_err()
    {
        log("failed to push history state");
    }
}

fn listen_for_popstate(route: RwSignal<Route>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::wrap(Box::new(move || {
        route.set(current_route());
    }) as Box<dyn FnMut()>);
    match window.add_event_listener_with_callback("popstate", cb.as_ref().unchecked_ref()) {
        Ok(()) => cb.forget(),
        Err(_) => log("failed to register popstate listener"),
    }
}
