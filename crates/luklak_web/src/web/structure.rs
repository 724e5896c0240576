use leptos::prelude::*;
use luklak::fixtures::{sample_business_structure, structure_for_industry};
use luklak::structure::{
    layout_function, overview_stagger, structure_stagger, Connector, FunctionBlock, LayoutMetrics,
    NodeLayout, Segment, Space,
};
use luklak::SessionStore;

const LINE_COLOR: &str = "#E5E7EB";

fn line(seg: Segment) -> impl IntoView {
    view! {
        <line
            x1=seg.x1
            y1=seg.y1
            x2=seg.x2
            y2=seg.y2
            stroke=LINE_COLOR
            stroke-width="2"
            stroke-linecap="round"
        />
    }
}

fn connector(c: Connector) -> impl IntoView {
    view! {
        {line(c.vertical)}
        {line(c.stub)}
    }
}

fn node_row(node: &NodeLayout<'_>) -> impl IntoView {
    let style = format!(
        "top: {}px; left: {}px; height: {}px;{}",
        node.y,
        node.indent,
        node.height,
        node.background
            .as_ref()
            .map(|bg| format!(" background-color: {bg};"))
            .unwrap_or_default(),
    );
    let icon_style = format!(
        "background-color: {}; color: {};",
        node.icon_background, node.icon_color
    );
    let sub_objects = node
        .item
        .sub_objects
        .iter()
        .map(|sub| sub.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    view! {
        <div
            class={if node.emphasized { "tree-row primary" } else { "tree-row" }}
            style=style
            title=sub_objects
        >
            <span class="tree-icon" style=icon_style>{node.item.icon.glyph()}</span>
            <span class="tree-name">{node.item.name.clone()}</span>
        </div>
    }
}

fn function_block(block: &FunctionBlock) -> impl IntoView {
    let layout = layout_function(block, &LayoutMetrics::default());

    let primary = layout.primary.as_ref().map(node_row);
    let children = layout
        .children
        .iter()
        .map(|child| node_row(&child.node))
        .collect_view();
    let connectors = layout
        .children
        .iter()
        .map(|child| connector(child.connector))
        .collect_view();
    let trunk = layout.trunk.map(line);
    let placeholder_style = format!("top: {}px; left: 20px;", layout.placeholder_y);

    view! {
        <div class="function-block">
            <h4 style=format!("color: {};", block.primary_color)>{block.name.clone()}</h4>
            <p class="subtle small">{format!("Function: {}", block.label)}</p>
            <div class="tree" style=format!("height: {}px;", layout.height)>
                <svg class="tree-lines" width="100%" height=layout.height>
                    {trunk}
                    {connectors}
                    {connector(layout.placeholder_connector)}
                </svg>
                {primary}
                {children}
                <div class="tree-row skeleton" style=placeholder_style>
                    <span class="tree-icon"></span>
                    <span class="skeleton-bar"></span>
                </div>
            </div>
        </div>
    }
}

fn space_card(space: &Space, offset: u32) -> impl IntoView {
    let functions = space.functions.iter().map(function_block).collect_view();
    view! {
        <div class="space-card-wrap" style=format!("margin-top: {offset}px;")>
            <div class="space-badge" style=format!("background-color: {};", space.color)>
                {space.icon.glyph()}
            </div>
            <div class="space-card">
                <div class="space-head">
                    <span class="triangle" style=format!("border-bottom-color: {};", space.color)></span>
                    <span class="space-name">{space.name.clone()}</span>
                </div>
                <div class="space-functions">{functions}</div>
            </div>
        </div>
    }
}

/// Space cards for the active scenario's industry.
#[component]
pub(super) fn StructurePane(store: RwSignal<SessionStore>) -> impl IntoView {
    let industry = Memo::new(move |_| {
        store.with(|s| s.scenario().map(|sc| sc.meta.industry.clone()).unwrap_or_default())
    });

    move || {
        let spaces = structure_for_industry(&industry.get());
        let cards = spaces
            .iter()
            .enumerate()
            .map(|(i, space)| space_card(space, structure_stagger(i)))
            .collect_view();
        view! { <div class="structure-grid">{cards}</div> }
    }
}

/// The whole sample business laid out as a staggered wall of spaces.
#[component]
pub(super) fn OverviewPane() -> impl IntoView {
    let structure = sample_business_structure();
    let cards = structure
        .all_spaces()
        .enumerate()
        .map(|(i, space)| space_card(space, overview_stagger(i)))
        .collect_view();

    view! {
        <div class="overview">
            <div class="overview-head">
                <div class="pill">
                    <span class="live-dot"></span>
                    <span>{structure.industry.clone()}</span>
                </div>
                <h1>{structure.company_name.clone()}</h1>
                <p class="subtle">
                    "Your operational landscape at a glance: Areas, Spaces, Functions and Objects working together"
                </p>
            </div>
            <div class="overview-grid">{cards}</div>
            <div class="overview-legend">
                <span class="legend-row"><span class="triangle"></span>"Space"</span>
                <span class="legend-row"><span class="swatch primary"></span>"Primary Object"</span>
                <span class="legend-row"><span class="swatch child"></span>"Child Object"</span>
            </div>
        </div>
    }
}
