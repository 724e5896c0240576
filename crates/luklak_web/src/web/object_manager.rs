use leptos::prelude::*;
use luklak::catalog::{
    filter_definitions, visible_fields, CatalogSummary, Category, CategoryFilter, ObjectDefinition,
};
use luklak::fixtures::object_definitions;

use super::{log, ui_config};
use crate::ui_model::Route;

#[component]
pub(super) fn ObjectManagerPage(navigate: Callback<Route>) -> impl IntoView {
    view! {
        <div class="om-page">
            <div class="om-topbar">
                <button class="link-btn" on:click=move |_| navigate.run(Route::Root)>
                    "← Back"
                </button>
                <span class="divider"></span>
                <span class="small strong">"Object Manager"</span>
            </div>
            <ObjectManager />
        </div>
    }
}

fn object_card(def: &ObjectDefinition, max_fields: usize) -> impl IntoView {
    let (shown, more) = visible_fields(def, max_fields);
    let fields = shown
        .iter()
        .map(|f| {
            view! {
                <div class="om-field">
                    <span class="subtle">{f.field_type.icon().glyph()}</span>
                    <span class="subtle small">{f.name.clone()}</span>
                </div>
            }
        })
        .collect_view();
    let more = (more > 0).then(|| view! { <p class="om-more">{format!("+ {more} more fields")}</p> });

    let all_fields = def
        .fields
        .iter()
        .map(|f| {
            view! {
                <div class="om-field">
                    <span>{f.field_type.icon().glyph()}</span>
                    <span class="small">{f.name.clone()}</span>
                    <span class="subtle small">{f.field_type.label()}</span>
                    {f.required.then(|| view! { <span class="required">"*"</span> })}
                </div>
            }
        })
        .collect_view();
    let workflow = def
        .workflow
        .iter()
        .map(|step| {
            view! { <span class=format!("badge {}", step.color.css_class())>{step.name.clone()}</span> }
        })
        .collect_view();
    let category_class = match def.category {
        Category::Object => "badge tone-muted",
        Category::SubObject => "badge tone-blue",
    };

    view! {
        <div class="om-card">
            <div class="om-card-head">
                <span class="om-icon" style=format!("background-color: {}; color: {};", def.icon_bg, def.icon_color)>
                    {def.icon.glyph()}
                </span>
                <h3>{def.name.clone()}</h3>
                <span class=category_class>{def.category.label()}</span>
            </div>
            <div class="om-fields">{fields}</div>
            {more}
            <div class="om-hover">
                <p class="subtle small">{def.description.clone()}</p>
                <h4>{format!("Fields ({})", def.fields.len())}</h4>
                <div class="om-fields">{all_fields}</div>
                <h4>"Workflow"</h4>
                <div class="om-workflow">{workflow}</div>
            </div>
        </div>
    }
}

#[component]
fn ObjectManager() -> impl IntoView {
    let defs = StoredValue::new(object_definitions());
    let summary = defs.with_value(|d| CatalogSummary::of(d));
    let max_fields = ui_config().catalog_visible_fields;

    let search = RwSignal::new(String::new());
    let filter = RwSignal::new(CategoryFilter::All);

    let cards = move || {
        let query = search.get();
        let category = filter.get();
        defs.with_value(|d| {
            let hits = filter_definitions(d, &query, category);
            if hits.is_empty() {
                return view! {
                    <div class="empty-state">
                        <div class="empty-icon">"🔍"</div>
                        <p class="empty-title">"No objects found"</p>
                        <p class="subtle">"Try adjusting your search or filters"</p>
                    </div>
                }
                .into_any();
            }
            let grid = hits
                .into_iter()
                .map(|def| object_card(def, max_fields))
                .collect_view();
            view! { <div class="om-grid">{grid}</div> }.into_any()
        })
    };

    view! {
        <div class="om">
            <div class="om-head">
                <div>
                    <h1>"Object Manager"</h1>
                    <p class="subtle small">{summary.headline()}</p>
                </div>
                <button class="btn primary" on:click=move |_| log("new object: not available in the demo")>
                    "+ New Object"
                </button>
            </div>

            <div class="om-controls">
                <input
                    class="search"
                    type="text"
                    placeholder="Search objects..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <div class="pills">
                    {CategoryFilter::all()
                        .iter()
                        .map(|&f| {
                            let label = format!("{} ({})", f.label(), summary.count_for(f));
                            view! {
                                <button
                                    class=move || if filter.get() == f { "pill active" } else { "pill" }
                                    on:click=move |_| filter.set(f)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {cards}
        </div>
    }
}
