//! Work-view panes: list, table, kanban, dashboard and the space chat feed.
//!
//! Each pane reads the selected function out of the session store and renders
//! the projection the switchboard builds for it.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use luklak::switchboard::dashboard::{
    bar_heights, pie_slices, roi_status_tone, DashboardMock, METRICS_TITLE, PIE_TITLE,
    PIPELINE_TITLE, ROI_COLUMNS, ROI_TITLE,
};
use luklak::switchboard::{card_fields, chat_feed, kanban_columns, list_view, table_view};
use luklak::tone::priority_tone;
use luklak::{ObjectId, SessionStore};

use super::{log, ui_config};

const BAR_MAX_PX: f64 = 160.0;

pub(super) fn select_object(store: RwSignal<SessionStore>, id: &ObjectId) {
    store.update(|s| {
        if let Err(e) = s.select_object_by_id(id.as_str()) {
            log(&format!("select object: {e}"));
        }
    });
}

fn no_data() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-icon">"📦"</div>
            <p class="empty-title">"No data yet"</p>
            <p class="subtle">"This function is ready for your data"</p>
        </div>
    }
}

#[component]
pub(super) fn ListPane(store: RwSignal<SessionStore>) -> impl IntoView {
    let cfg = ui_config();

    move || {
        store.with(|s| {
            let Some(function) = s.selected_function() else {
                return ().into_any();
            };
            let list = list_view(function, &cfg);
            if list.is_empty() {
                return no_data().into_any();
            }

            let rows = list
                .rows
                .iter()
                .map(|row| {
                    let id = row.object.id.clone();
                    let class = if s.is_object_selected(&row.object.id) {
                        "list-row selected"
                    } else {
                        "list-row"
                    };
                    view! {
                        <tr class=class on:click=move |_| select_object(store, &id)>
                            <td>
                                <span class=format!("row-icon {}", row.icon_tone.css_class())>
                                    {row.icon.glyph()}
                                </span>
                                <span class="row-title">{row.object.title.clone()}</span>
                            </td>
                            <td>
                                <span class=format!("status-text {}", row.status_tone.css_class())>
                                    {row.status_label.clone()}
                                </span>
                            </td>
                        </tr>
                    }
                })
                .collect_view();
            let placeholders = (0..list.placeholders)
                .map(|_| {
                    view! {
                        <tr class="placeholder-row">
                            <td>"\u{a0}"</td>
                            <td></td>
                        </tr>
                    }
                })
                .collect_view();

            view! {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}{placeholders}</tbody>
                </table>
            }
            .into_any()
        })
    }
}

#[component]
pub(super) fn TablePane(store: RwSignal<SessionStore>) -> impl IntoView {
    move || {
        store.with(|s| {
            let Some(function) = s.selected_function() else {
                return ().into_any();
            };
            if function.objects.is_empty() {
                return no_data().into_any();
            }
            let table = table_view(function);

            let header = table
                .columns
                .iter()
                .map(|c| view! { <th>{c.clone()}</th> })
                .collect_view();
            let rows = table
                .rows
                .iter()
                .map(|row| {
                    let id = row.object.id.clone();
                    let class = if s.is_object_selected(&row.object.id) {
                        "table-row selected"
                    } else {
                        "table-row"
                    };
                    let cells = row
                        .cells
                        .iter()
                        .enumerate()
                        .map(|(i, cell)| {
                            let class = match i {
                                0 => "cell-title".to_string(),
                                1 => format!("status-text {}", row.status_tone.css_class()),
                                2 => format!("cell-priority {}", row.priority_tone.css_class()),
                                _ => "cell-muted".to_string(),
                            };
                            view! {
                                <td>
                                    <span class=class>{cell.clone()}</span>
                                </td>
                            }
                        })
                        .collect_view();
                    view! {
                        <tr class=class on:click=move |_| select_object(store, &id)>
                            {cells}
                        </tr>
                    }
                })
                .collect_view();

            view! {
                <table class="data-table">
                    <thead>
                        <tr>{header}</tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            }
            .into_any()
        })
    }
}

#[component]
pub(super) fn KanbanPane(store: RwSignal<SessionStore>) -> impl IntoView {
    let card_limit = ui_config().kanban_card_fields;

    move || {
        store.with(|s| {
            let Some(function) = s.selected_function() else {
                return ().into_any();
            };
            let columns = kanban_columns(&function.objects)
                .into_iter()
                .map(|column| {
                    let cards = if column.cards.is_empty() {
                        view! { <div class="kanban-empty">"No items in this column"</div> }.into_any()
                    } else {
                        column
                            .cards
                            .iter()
                            .map(|obj| {
                                let id = obj.id.clone();
                                let class = if s.is_object_selected(&obj.id) {
                                    "kanban-card selected"
                                } else {
                                    "kanban-card"
                                };
                                let fields = card_fields(obj, card_limit)
                                    .iter()
                                    .map(|f| {
                                        view! {
                                            <div class="card-field">
                                                <span class="subtle">{format!("{}:", f.name)}</span>
                                                " "
                                                <span class="card-value">{f.value.clone()}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view();
                                let initial = obj.assignee_initial().map(String::from).unwrap_or_default();
                                view! {
                                    <div class=class on:click=move |_| select_object(store, &id)>
                                        <div class="card-head">
                                            <h4>{obj.title.clone()}</h4>
                                            <span class=format!("badge {}", priority_tone(obj.priority).css_class())>
                                                {obj.priority.label()}
                                            </span>
                                        </div>
                                        <div class="card-fields">{fields}</div>
                                        <div class="card-foot">
                                            <span class="avatar sm">{initial}</span>
                                            <span class="subtle small">{obj.assignee.clone()}</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    };
                    view! {
                        <div class="kanban-column">
                            <div class="kanban-head">
                                <span class=format!("dot {}", column.tone.css_class())></span>
                                <h3>{column.status.to_uppercase()}</h3>
                                <span class="count">{column.cards.len()}</span>
                            </div>
                            <div class="kanban-cards">{cards}</div>
                        </div>
                    }
                })
                .collect_view();

            view! { <div class="kanban">{columns}</div> }.into_any()
        })
    }
}

#[component]
pub(super) fn DashboardPane() -> impl IntoView {
    let mock = DashboardMock::fixed();
    let slices = pie_slices(&mock.pie);
    let heights = bar_heights(&mock.bars, BAR_MAX_PX);
    let series = mock.series;

    let legend = mock
        .pie
        .iter()
        .map(|d| {
            view! {
                <div class="legend-row">
                    <span class="swatch" style=format!("background-color: {};", d.color)></span>
                    <span>{d.label}</span>
                    <span class="subtle">{format!("{}%", d.value)}</span>
                </div>
            }
        })
        .collect_view();

    let wedges = slices
        .into_iter()
        .map(|slice| view! { <path d=slice.path fill=slice.color stroke="#fff" stroke-width="1" /> })
        .collect_view();

    let bars = mock
        .bars
        .iter()
        .zip(heights)
        .map(|(group, h)| {
            let columns = h
                .iter()
                .zip(series.iter())
                .map(|(px, s)| {
                    view! {
                        <div
                            class="bar"
                            title=s.name
                            style=format!("height: {px:.0}px; background-color: {};", s.color)
                        ></div>
                    }
                })
                .collect_view();
            view! {
                <div class="bar-group">
                    <div class="bars">{columns}</div>
                    <div class="bar-label">{group.label}</div>
                </div>
            }
        })
        .collect_view();

    let series_legend = series
        .iter()
        .map(|s| {
            view! {
                <span class="legend-row">
                    <span class="swatch" style=format!("background-color: {};", s.color)></span>
                    {s.name}
                </span>
            }
        })
        .collect_view();

    let metrics = mock
        .metrics
        .iter()
        .map(|m| {
            view! {
                <div class="metric-card">
                    <div class=format!("metric-value {}", m.tone.css_class())>
                        {m.value}
                        <span class="metric-suffix">{m.suffix.unwrap_or_default()}</span>
                    </div>
                    <div class="subtle small">{m.label}</div>
                </div>
            }
        })
        .collect_view();

    let roi_head = ROI_COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view();
    let roi_rows = mock
        .roi
        .iter()
        .map(|r| {
            let count = |n: Option<u32>| n.map(|n| n.to_string()).unwrap_or_default();
            view! {
                <tr>
                    <td>{r.name}</td>
                    <td>
                        <span class=format!("badge {}", roi_status_tone(r.status).css_class())>{r.status}</span>
                    </td>
                    <td>{r.spend}</td>
                    <td>{count(r.leads)}</td>
                    <td>{count(r.won_leads)}</td>
                    <td>{r.revenue}</td>
                    <td>{r.roas}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard">
            <div class="dash-grid">
                <div class="panel">
                    <h3>{PIE_TITLE}</h3>
                    <div class="pie-wrap">
                        <svg viewBox="0 0 100 100" class="pie">{wedges}</svg>
                        <div class="legend">{legend}</div>
                    </div>
                </div>
                <div class="panel">
                    <h3>{METRICS_TITLE}</h3>
                    <div class="metric-grid">{metrics}</div>
                </div>
            </div>
            <div class="panel">
                <h3>{ROI_TITLE}</h3>
                <table class="data-table compact">
                    <thead>
                        <tr>{roi_head}</tr>
                    </thead>
                    <tbody>{roi_rows}</tbody>
                </table>
            </div>
            <div class="panel">
                <h3>{PIPELINE_TITLE}</h3>
                <div class="bar-chart">{bars}</div>
                <div class="legend inline">{series_legend}</div>
            </div>
        </div>
    }
}

#[component]
pub(super) fn SpaceChat(store: RwSignal<SessionStore>) -> impl IntoView {
    let draft = RwSignal::new(String::new());

    let feed = move || {
        store.with(|s| {
            let Some(scenario) = s.scenario() else {
                return ().into_any();
            };
            let messages = chat_feed(scenario);
            if messages.is_empty() {
                return view! {
                    <div class="empty-state">
                        <div class="empty-icon">"💬"</div>
                        <p class="empty-title">"Space Chat"</p>
                        <p class="subtle">"Team messages will appear here"</p>
                    </div>
                }
                .into_any();
            }
            messages
                .into_iter()
                .map(|m| {
                    let initial = m.initial().map(String::from).unwrap_or_default();
                    let avatar = format!("avatar {}", m.avatar_tone.css_class());
                    let row = if m.is_current_user { "chat-row own" } else { "chat-row" };
                    view! {
                        <div class=row data-id=m.id.clone()>
                            <span class=avatar>{initial}</span>
                            <div class="chat-body">
                                <div class="chat-meta">
                                    <span class="chat-user">{m.message.user.clone()}</span>
                                    <span class="subtle small">
                                        {m.message.timestamp.clone().unwrap_or_default()}
                                    </span>
                                </div>
                                <div class="chat-bubble">
                                    <p>{m.message.text.clone()}</p>
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="space-chat">
            <div class="chat-feed">{feed}</div>
            <div class="typing subtle small">
                <span class="typing-dots">"• • •"</span>
                <span>"several people are typing"</span>
            </div>
            <div class="chat-input">
                <input
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| {
                        // Sending is not wired; Enter just clears the draft.
                        if ev.key() == "Enter" {
                            draft.set(String::new());
                        }
                    }
                />
                <button class="btn primary" on:click=move |_| draft.set(String::new())>"Send"</button>
            </div>
        </div>
    }
}
