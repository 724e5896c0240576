use leptos::prelude::*;
use luklak::switchboard::{function_color, nav_objects, nav_subtitle};
use luklak::{FunctionId, Icon, ObjectId, SessionStore, ViewMode};

use super::detail::DetailPanel;
use super::log;
use super::structure::{OverviewPane, StructurePane};
use super::views::{DashboardPane, KanbanPane, ListPane, SpaceChat, TablePane};
use crate::ui_model::{company_badge, detail_panel_visible, toggle_expanded, Route, WorkTab};

#[component]
pub(super) fn SimulationDashboard(
    store: RwSignal<SessionStore>,
    navigate: Callback<Route>,
) -> impl IntoView {
    let tab = RwSignal::new(WorkTab::default());
    let has_scenario = Memo::new(move |_| store.with(|s| s.scenario().is_some()));
    let object_selected = Memo::new(move |_| store.with(|s| s.selected_object_id().is_some()));

    view! {
        <Show
            when=move || has_scenario.get()
            fallback=|| view! {
                <div class="empty-screen">
                    <p class="subtle">"No scenario loaded"</p>
                </div>
            }
        >
            <div class="simulation">
                <LeftSidebar store=store />
                <NavigationSidebar store=store navigate=navigate />
                <MainContent store=store tab=tab />
                <Show when=move || detail_panel_visible(object_selected.get(), tab.get())>
                    <DetailPanel store=store />
                </Show>
            </div>
        </Show>
    }
}

fn back_to_briefing(store: RwSignal<SessionStore>) {
    log("back to briefing");
    store.update(|s| s.return_to_briefing());
}

#[component]
fn LeftSidebar(store: RwSignal<SessionStore>) -> impl IntoView {
    let company = Memo::new(move |_| {
        store.with(|s| company_badge(s.scenario().map(|sc| sc.meta.company_name.as_str())).to_string())
    });

    view! {
        <nav class="rail">
            <button class="rail-logo" title="Back to Briefing Room" on:click=move |_| back_to_briefing(store)>
                <div>"Luk"</div>
                <div>"lak"</div>
            </button>

            <div class="rail-item">
                <div class="rail-icon">"📥"<span class="rail-badge">"12"</span></div>
                <div class="rail-label">"Inbox"</div>
            </div>
            <div class="rail-item">
                <div class="rail-icon">"🏠"</div>
                <div class="rail-label">"Personal"<br />"Home"</div>
            </div>
            <div class="rail-item">
                <div class="rail-icon">"▦"</div>
                <div class="rail-label">"Workspace"</div>
            </div>

            <div class="rail-spacer"></div>

            <div class="rail-item">
                <div class="rail-icon">"🏢"</div>
                <div class="rail-label">"Org"</div>
            </div>
            <div class="rail-item">
                <div class="rail-icon">"⋯"</div>
                <div class="rail-label">"More"</div>
            </div>
            <div class="rail-item">
                <div class="rail-avatar">"D"</div>
                <div class="rail-label">"Demo"</div>
            </div>
            <div class="rail-item">
                <div class="rail-icon">"💼"</div>
                <div class="rail-label truncate">{move || company.get()}</div>
            </div>

            <button class="rail-back" title="Back to Briefing Room" on:click=move |_| back_to_briefing(store)>
                "←"
            </button>
        </nav>
    }
}

#[component]
fn NavigationSidebar(store: RwSignal<SessionStore>, navigate: Callback<Route>) -> impl IntoView {
    let expanded = RwSignal::new(Vec::<FunctionId>::new());

    let on_function = move |id: FunctionId| {
        store.update(|s| {
            if let Err(e) = s.focus_function(id.as_str()) {
                log(&format!("select function: {e}"));
            }
        });
        expanded.update(|open| toggle_expanded(open, &id));
    };

    let on_object = move |id: ObjectId| {
        store.update(|s| {
            if let Err(e) = s.select_object_by_id(id.as_str()) {
                log(&format!("select object: {e}"));
            }
        });
    };

    let header = Memo::new(move |_| {
        store.with(|s| {
            s.scenario()
                .map(|sc| {
                    (
                        sc.meta.company_name.to_uppercase(),
                        sc.active_space.name.clone(),
                        sc.meta.industry.clone(),
                    )
                })
                .unwrap_or_default()
        })
    });

    view! {
        <aside class="nav-sidebar">
            <div class="nav-workspace">
                <span>{move || header.get().0}</span>
                <span class="chevron">{Icon::ChevronDown.glyph()}</span>
            </div>
            <div class="nav-tools">
                <span class="subtle">"🔍"</span>
                <button class="icon-btn">"︿"</button>
                <button class="icon-btn">"⋮"</button>
            </div>

            <div class="nav-scroll">
                <button
                    class="nav-all-objects"
                    title="Open Object Manager"
                    on:click=move |_| navigate.run(Route::ObjectManager)
                >
                    <span class="accent">"▦"</span>
                    <span>"ALL OBJECTS"</span>
                </button>

                <div class="nav-space">{move || header.get().1}</div>

                <div class="nav-functions">
                    {move || {
                        let open = expanded.get();
                        store.with(|s| {
                            let Some(scenario) = s.scenario() else {
                                return ().into_any();
                            };
                            let selected = s.selected_function_id();
                            scenario
                                .functions()
                                .iter()
                                .map(|f| {
                                    let id = f.id.clone();
                                    let is_selected = selected == Some(&f.id);
                                    let is_open = open.contains(&f.id);
                                    let color = function_color(f.icon);
                                    let objects = if is_open {
                                        nav_objects(f)
                                            .into_iter()
                                            .map(|row| {
                                                let object_id = row.object.id.clone();
                                                let (bg, fg) = if row.is_primary {
                                                    (row.color.clone(), "#FFFFFF".to_string())
                                                } else {
                                                    (format!("{}20", row.color), row.color.clone())
                                                };
                                                let class = if s.is_object_selected(&row.object.id) {
                                                    "nav-object selected"
                                                } else if row.is_primary {
                                                    "nav-object"
                                                } else {
                                                    "nav-object child"
                                                };
                                                view! {
                                                    <div class=class on:click=move |_| on_object(object_id.clone())>
                                                        <span
                                                            class="nav-object-icon"
                                                            style=format!("background-color: {bg}; color: {fg};")
                                                        >
                                                            {f.icon.glyph()}
                                                        </span>
                                                        <span class="nav-object-title">{row.object.title.clone()}</span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                            .into_any()
                                    } else {
                                        ().into_any()
                                    };
                                    view! {
                                        <div class="nav-function-group">
                                            <div
                                                class={if is_selected { "nav-function selected" } else { "nav-function" }}
                                                on:click=move |_| on_function(id.clone())
                                            >
                                                <div class="nav-function-row">
                                                    <span class="chevron">
                                                        {if is_open { "▾" } else { "▸" }}
                                                    </span>
                                                    <span
                                                        class="nav-function-icon"
                                                        style=format!("background-color: {color};")
                                                    >
                                                        {f.icon.glyph()}
                                                    </span>
                                                    <span class="nav-function-name">{f.name.clone()}</span>
                                                </div>
                                                <div class="nav-function-meta">{nav_subtitle(f)}</div>
                                            </div>
                                            <div class="nav-objects">{objects}</div>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        })
                    }}
                </div>
            </div>

            <div class="nav-footer">
                <button class="btn ghost full">"+ Add Space"</button>
                <div class="subtle small">{move || format!("Industry: {}", header.get().2)}</div>
            </div>
        </aside>
    }
}

#[component]
fn MainContent(store: RwSignal<SessionStore>, tab: RwSignal<WorkTab>) -> impl IntoView {
    // Picked once when the workspace opens; switching functions keeps the mode.
    let mode = RwSignal::new(store.with_untracked(|s| {
        s.selected_function()
            .map(|f| ViewMode::initial_for(f.view_type))
            .unwrap_or_default()
    }));
    let function_name = Memo::new(move |_| store.with(|s| s.selected_function().map(|f| f.name.clone())));

    view! {
        <Show
            when=move || function_name.get().is_some()
            fallback=|| view! {
                <div class="main-empty">
                    <p class="subtle">"Select a function from the sidebar"</p>
                </div>
            }
        >
            <section class="main">
                <header class="main-header">
                    <h1>{move || function_name.get().unwrap_or_default()}</h1>
                    <div class="main-header-tools">
                        <input class="search" type="text" placeholder="Search" />
                        <button class="btn soft">"? Tour"</button>
                        <button class="icon-btn">"✕"</button>
                    </div>
                </header>

                <div class="work-tabs">
                    {WorkTab::all()
                        .iter()
                        .map(|&t| {
                            view! {
                                <button
                                    class=move || if tab.get() == t { "work-tab active" } else { "work-tab" }
                                    on:click=move |_| tab.set(t)
                                >
                                    <span>{t.icon()}</span>
                                    <span>{t.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <Show when=move || tab.get() == WorkTab::WorkViews>
                    <div class="view-controls">
                        <select class="select">
                            <option>"Function"</option>
                        </select>
                        <div class="view-switcher">
                            {ViewMode::work_views()
                                .iter()
                                .map(|&m| {
                                    view! {
                                        <button
                                            class=move || if mode.get() == m { "view-btn active" } else { "view-btn" }
                                            on:click=move |_| mode.set(m)
                                        >
                                            {m.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                            <button class="view-btn">"+"</button>
                        </div>
                    </div>
                </Show>

                <div class="main-body">
                    {move || match tab.get() {
                        WorkTab::SpaceChat => view! { <SpaceChat store=store /> }.into_any(),
                        WorkTab::Activities => view! {
                            <div class="empty-state">
                                <div class="empty-icon">"🕒"</div>
                                <p class="empty-title">"Activity Feed"</p>
                                <p class="subtle">"All workspace activities will appear here"</p>
                            </div>
                        }
                        .into_any(),
                        WorkTab::WorkViews => match mode.get() {
                            ViewMode::List => view! { <ListPane store=store /> }.into_any(),
                            ViewMode::Table => view! { <TablePane store=store /> }.into_any(),
                            ViewMode::Kanban => view! { <KanbanPane store=store /> }.into_any(),
                            ViewMode::Dashboard => view! { <DashboardPane /> }.into_any(),
                            ViewMode::Structure => view! { <StructurePane store=store /> }.into_any(),
                            ViewMode::Overview => view! { <OverviewPane /> }.into_any(),
                            ViewMode::Chat => view! { <SpaceChat store=store /> }.into_any(),
                        },
                    }}
                </div>
            </section>
        </Show>
    }
}
