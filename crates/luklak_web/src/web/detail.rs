use leptos::prelude::*;
use luklak::detail::{avatar_tone, DetailPanel as PanelModel, TextSpan, WORKFLOW_SEGMENTS, WORKFLOW_STAGES};
use luklak::SessionStore;

use super::ui_config;
use crate::ui_model::DetailTab;

fn spans_view(spans: &[TextSpan<'_>]) -> impl IntoView {
    spans
        .iter()
        .map(|span| match *span {
            TextSpan::Text(t) => view! { <span>{t.to_string()}</span> }.into_any(),
            TextSpan::Mention(m) => view! { <span class="mention">{m.to_string()}</span> }.into_any(),
        })
        .collect_view()
}

#[component]
pub(super) fn DetailPanel(store: RwSignal<SessionStore>) -> impl IntoView {
    let cfg = ui_config();
    let tab = RwSignal::new(DetailTab::default());
    let draft = RwSignal::new(String::new());

    let body = move || {
        store.with(|s| {
            let Some(object) = s.selected_object() else {
                return ().into_any();
            };
            let panel = PanelModel::build(
                object,
                s.selected_function(),
                s.chat_for_object(object.id.as_str()),
                &cfg,
            );
            let (type_glyph, type_tone) = (panel.type_icon.0.glyph(), panel.type_icon.1);

            let fields = panel
                .fields
                .iter()
                .map(|f| {
                    let value_class = if f.highlighted { "field-value money" } else { "field-value" };
                    let value = match &f.customer_ref {
                        Some(id) => format!("{} ({id})", f.field.value),
                        None => f.field.value.clone(),
                    };
                    let progress = f.progress.then(|| {
                        view! {
                            <div class="progress">
                                <div class="progress-fill" style=format!("width: {};", f.field.value)></div>
                            </div>
                        }
                    });
                    view! {
                        <div class="field-row">
                            <span class="field-name">{f.field.name.clone()}</span>
                            <span class=value_class>{value}</span>
                            {progress}
                        </div>
                    }
                })
                .collect_view();

            let people = panel
                .person_fields
                .iter()
                .map(|f| {
                    view! {
                        <div class="person-chip">
                            <span class="avatar sm tone-slate">
                                {f.value.chars().next().map(String::from).unwrap_or_default()}
                            </span>
                            <span class="subtle small">{f.name.clone()}</span>
                            <span>{f.value.clone()}</span>
                        </div>
                    }
                })
                .collect_view();

            let segments = (0..WORKFLOW_SEGMENTS)
                .map(|i| {
                    let class = if i < panel.workflow_filled { "segment filled" } else { "segment" };
                    view! { <div class=class></div> }
                })
                .collect_view();

            let connections = panel
                .connections
                .iter()
                .map(|c| {
                    view! {
                        <div class="connection">
                            <div class="subtle small">{c.group}</div>
                            <div class="connection-card">
                                <span class="row-icon">{c.icon.glyph()}</span>
                                <span class="code">{c.code}</span>
                                <span class="connection-title">{c.title.clone()}</span>
                                <span class="badge tone-muted">{c.status}</span>
                                <span class=format!("avatar sm {}", avatar_tone(c.avatar_index).css_class())></span>
                            </div>
                        </div>
                    }
                })
                .collect_view();

            let chat = if panel.has_messages() {
                panel
                    .messages
                    .iter()
                    .map(|m| {
                        let row = if m.own { "chat-row own" } else { "chat-row" };
                        let avatar = format!("avatar sm {}", avatar_tone(m.avatar_index).css_class());
                        view! {
                            <div class=row>
                                <span class=avatar>
                                    {m.message.user.chars().next().map(String::from).unwrap_or_default()}
                                </span>
                                <div class="chat-body">
                                    <div class="chat-meta">
                                        <span class="chat-user">{m.message.user.clone()}</span>
                                        <span class="subtle small">
                                            {m.message.timestamp.clone().unwrap_or_default()}
                                        </span>
                                    </div>
                                    <div class="chat-bubble">{spans_view(&m.spans)}</div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            } else {
                view! { <p class="subtle center">"No messages for this item yet"</p> }.into_any()
            };

            view! {
                <div class="detail-head">
                    <span class=format!("type-chip {}", type_tone.css_class())>
                        {type_glyph}" "{panel.object_type.clone()}
                    </span>
                    <span class=format!("avatar sm {}", avatar_tone(panel.avatar_index).css_class())>
                        {object.assignee_initial().map(String::from).unwrap_or_default()}
                    </span>
                    <span class="small">{panel.assignee_first_name.to_string()}</span>
                    <button class="icon-btn close" title="Close" on:click=move |_| store.update(|s| s.close_detail())>
                        "✕"
                    </button>
                </div>

                <h2 class="detail-title">{object.title.clone()}</h2>
                <div class="detail-meta">
                    <span class=format!("badge {}", panel.status_tone.css_class())>{object.status.clone()}</span>
                    <span class="subtle small">{panel.date.to_string()}</span>
                </div>

                <div class="workflow">
                    <span class="badge tone-blue">{WORKFLOW_STAGES[0]}</span>
                    <div class="segments">{segments}</div>
                </div>

                <div class="detail-fields">{fields}</div>
                <div class="detail-people">{people}</div>

                <div class="detail-connections">
                    <h4>"Object Connection"</h4>
                    {connections}
                </div>

                <div class="detail-tabs">
                    {DetailTab::all()
                        .iter()
                        .map(|&t| {
                            view! {
                                <button
                                    class=move || if tab.get() == t { "detail-tab active" } else { "detail-tab" }
                                    on:click=move |_| tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="detail-tab-body">
                    <Show
                        when=move || tab.get() == DetailTab::Chat
                        fallback=|| view! { <p class="subtle center">"Activity log will appear here"</p> }
                    >
                        <div class="typing subtle small">"someone's typing"</div>
                    </Show>
                </div>
                <div class="detail-chat" class:hidden=move || tab.get() != DetailTab::Chat>
                    {chat}
                </div>
            }
            .into_any()
        })
    };

    view! {
        <aside class="detail-panel">
            {body}
            <div class="chat-input">
                <input
                    type="text"
                    placeholder="Type message..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn primary" on:click=move |_| draft.set(String::new())>"➤"</button>
            </div>
        </aside>
    }
}
