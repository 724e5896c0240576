//! Area → Space → Function → Object tree and its card layout.
//!
//! The layout is pure geometry: given a [`FunctionBlock`] and a set of
//! [`LayoutMetrics`] it produces row positions, colours and connector segments.
//! Front-ends only place what they are given.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::icons::Icon;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubObject {
    pub name: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectItem {
    pub name: String,
    pub icon: Icon,
    pub is_primary: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sub_objects: Vec<SubObject>,
}

impl ObjectItem {
    pub fn new(name: impl Into<String>, icon: Icon, is_primary: bool) -> Self {
        Self {
            name: name.into(),
            icon,
            is_primary,
            sub_objects: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionBlock {
    pub name: String,
    pub label: String,
    /// Hex colour, e.g. `#3B82F6`.
    pub primary_color: String,
    pub objects: Vec<ObjectItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Space {
    pub name: String,
    pub color: String,
    pub icon: Icon,
    pub functions: Vec<FunctionBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Area {
    pub name: String,
    pub spaces: Vec<Space>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BusinessStructure {
    pub company_name: String,
    pub industry: String,
    pub areas: Vec<Area>,
}

impl BusinessStructure {
    /// Spaces of every area, flattened in order.
    pub fn all_spaces(&self) -> impl Iterator<Item = &Space> {
        self.areas.iter().flat_map(|a| a.spaces.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (the leading `#` is optional).
    pub fn parse(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn parse_or_default(hex: &str) -> Self {
        Self::parse(hex).unwrap_or(DEFAULT_COLOR)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// `#RRGGBBAA`, the form used for tinted backgrounds.
    pub fn with_alpha(self, alpha: u8) -> String {
        format!("{}{:02X}", self.to_hex(), alpha)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

pub const DEFAULT_COLOR: Rgb = Rgb::new(0x3B, 0x82, 0xF6);

pub const SUB_OBJECT_PALETTE: [Rgb; 8] = [
    Rgb::new(0x3B, 0x82, 0xF6), // blue
    Rgb::new(0x8B, 0x5C, 0xF6), // purple
    Rgb::new(0x10, 0xB9, 0x81), // green
    Rgb::new(0xF9, 0x73, 0x16), // orange
    Rgb::new(0xEC, 0x48, 0x99), // pink
    Rgb::new(0x06, 0xB6, 0xD4), // cyan
    Rgb::new(0xF4, 0x3F, 0x5E), // rose
    Rgb::new(0x63, 0x66, 0xF1), // indigo
];

/// Alpha of the primary row background.
pub const PRIMARY_TINT_ALPHA: u8 = 0x08;
/// Alpha of a child icon background.
pub const CHILD_TINT_ALPHA: u8 = 0x20;

/// Palette slot for a name.
///
/// Iterates UTF-16 code units with `hash = unit + ((hash << 5) - hash)`, where the
/// shift operates on the low 32 bits of `hash` and the subtraction does not, then
/// reduces `|hash|` modulo the palette size. Equal names always map to equal slots.
pub fn name_color_index(name: &str) -> usize {
    let mut hash: i64 = 0;
    for unit in name.encode_utf16() {
        let shifted = i64::from((hash as i32).wrapping_shl(5));
        hash = i64::from(unit).wrapping_add(shifted).wrapping_sub(hash);
    }
    (hash.unsigned_abs() % SUB_OBJECT_PALETTE.len() as u64) as usize
}

pub fn name_color(name: &str) -> Rgb {
    SUB_OBJECT_PALETTE[name_color_index(name)]
}

/// Splits a function's objects into the primary (first item flagged primary) and
/// the remaining items, both in their original order.
pub fn partition(block: &FunctionBlock) -> (Option<&ObjectItem>, Vec<&ObjectItem>) {
    let primary_idx = block.objects.iter().position(|o| o.is_primary);
    let primary = primary_idx.map(|i| &block.objects[i]);
    let children = block
        .objects
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != primary_idx)
        .map(|(_, o)| o)
        .collect();
    (primary, children)
}

/// Pixel constants for one function block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub row_height: f32,
    pub row_gap: f32,
    /// Padding above and below the primary row inside its tinted box.
    pub primary_padding: f32,
    /// Connectors start this far above each child row.
    pub connector_overlap: f32,
    /// x of the vertical connector line.
    pub trunk_x: f32,
    pub stub_length: f32,
    pub child_indent: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            row_height: 28.0,
            row_gap: 12.0,
            primary_padding: 8.0,
            connector_overlap: 8.0,
            trunk_x: 10.0,
            stub_length: 10.0,
            child_indent: 20.0,
        }
    }
}

/// Axis-aligned line from `(x1, y1)` to `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Segment {
    fn vertical(x: f32, y1: f32, y2: f32) -> Self {
        Self { x1: x, y1, x2: x, y2 }
    }

    fn horizontal(y: f32, x1: f32, x2: f32) -> Self {
        Self { x1, y1: y, x2, y2: y }
    }

    pub fn length(&self) -> f32 {
        (self.x2 - self.x1).abs() + (self.y2 - self.y1).abs()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeLayout<'a> {
    pub item: &'a ObjectItem,
    pub y: f32,
    pub height: f32,
    pub indent: f32,
    /// Tinted row background; only the primary row has one.
    pub background: Option<String>,
    pub icon_background: String,
    pub icon_color: String,
    pub emphasized: bool,
}

impl NodeLayout<'_> {
    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Vertical segment plus horizontal stub joining a child row to the trunk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub vertical: Segment,
    /// For the last child this is the elbow that terminates the line.
    pub stub: Segment,
    pub is_last: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChildLayout<'a> {
    pub node: NodeLayout<'a>,
    pub connector: Connector,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLayout<'a> {
    pub primary: Option<NodeLayout<'a>>,
    pub children: Vec<ChildLayout<'a>>,
    /// Single line from under the primary row down to the last child's midpoint.
    pub trunk: Option<Segment>,
    /// y of the trailing skeleton row.
    pub placeholder_y: f32,
    pub placeholder_connector: Connector,
    pub height: f32,
}

/// Lays out one function block. Pure and total; a block with no primary simply
/// has no primary row.
pub fn layout_function<'a>(block: &'a FunctionBlock, m: &LayoutMetrics) -> FunctionLayout<'a> {
    let primary_color = Rgb::parse_or_default(&block.primary_color);
    let (primary_item, child_items) = partition(block);

    let mut cursor = 0.0;
    let primary = primary_item.map(|item| {
        let node = NodeLayout {
            item,
            y: 0.0,
            height: m.row_height + 2.0 * m.primary_padding,
            indent: 0.0,
            background: Some(primary_color.with_alpha(PRIMARY_TINT_ALPHA)),
            icon_background: primary_color.to_hex(),
            icon_color: "#FFFFFF".to_string(),
            emphasized: true,
        };
        cursor = node.height + m.row_gap;
        node
    });
    let children_top = cursor;

    let stride = m.row_height + m.row_gap;
    let count = child_items.len();
    let children: Vec<ChildLayout<'a>> = child_items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let y = children_top + i as f32 * stride;
            let mid = y + m.row_height / 2.0;
            let is_last = i + 1 == count;
            let top = y - m.connector_overlap;
            let bottom = if is_last { mid } else { top + stride };
            let color = name_color(&item.name);
            ChildLayout {
                node: NodeLayout {
                    item,
                    y,
                    height: m.row_height,
                    indent: m.child_indent,
                    background: None,
                    icon_background: color.with_alpha(CHILD_TINT_ALPHA),
                    icon_color: color.to_hex(),
                    emphasized: false,
                },
                connector: Connector {
                    vertical: Segment::vertical(m.trunk_x, top, bottom),
                    stub: Segment::horizontal(mid, m.trunk_x, m.trunk_x + m.stub_length),
                    is_last,
                },
            }
        })
        .collect();

    let trunk = children.last().map(|last| {
        let top = if primary.is_some() {
            children_top - m.row_gap
        } else {
            children_top - m.connector_overlap
        };
        Segment::vertical(m.trunk_x, top, last.node.mid_y())
    });

    let placeholder_y = children_top + count as f32 * stride;
    let placeholder_mid = placeholder_y + m.row_height / 2.0;
    let placeholder_connector = Connector {
        vertical: Segment::vertical(m.trunk_x, placeholder_y - m.connector_overlap, placeholder_mid),
        stub: Segment::horizontal(placeholder_mid, m.trunk_x, m.trunk_x + m.stub_length),
        is_last: true,
    };

    FunctionLayout {
        primary,
        children,
        trunk,
        placeholder_y,
        placeholder_connector,
        height: placeholder_y + m.row_height,
    }
}

/// Vertical offset of the n-th space card on the Overview screen.
pub fn overview_stagger(index: usize) -> u32 {
    const PATTERN: [u32; 8] = [0, 40, 80, 20, 60, 100, 30, 70];
    PATTERN[index % PATTERN.len()]
}

/// Vertical offset of the n-th space card on the Structure view.
pub fn structure_stagger(index: usize) -> u32 {
    if index % 2 == 1 {
        60
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(items: &[(&str, bool)]) -> FunctionBlock {
        FunctionBlock {
            name: "Sales & CRM".to_string(),
            label: "CRM".to_string(),
            primary_color: "#10B981".to_string(),
            objects: items
                .iter()
                .map(|(n, p)| ObjectItem::new(*n, Icon::Users, *p))
                .collect(),
        }
    }

    #[test]
    fn name_hash_matches_known_values() {
        assert_eq!(name_color_index("Ad"), 3);
        assert_eq!(name_color_index("Event"), 2);
        assert_eq!(name_color_index(""), 0);
    }

    #[test]
    fn name_hash_is_deterministic_for_long_names() {
        let name = "Allocation History for the Northern Regional Warehouse Network";
        let a = name_color_index(name);
        let b = name_color_index(name);
        assert_eq!(a, b);
        assert!(a < SUB_OBJECT_PALETTE.len());
        assert_eq!(name_color(name), SUB_OBJECT_PALETTE[a]);
    }

    #[test]
    fn partition_keeps_order_and_covers_all_items() {
        let b = block(&[("Meeting", false), ("Customer", true), ("Deal", false)]);
        let (primary, children) = partition(&b);
        assert_eq!(primary.map(|p| p.name.as_str()), Some("Customer"));
        let names: Vec<&str> = children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Meeting", "Deal"]);
    }

    #[test]
    fn only_first_primary_is_promoted() {
        let b = block(&[("A", true), ("B", true), ("C", false)]);
        let (primary, children) = partition(&b);
        assert_eq!(primary.unwrap().name, "A");
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn missing_primary_renders_zero_primary_rows() {
        let b = block(&[("Meeting", false), ("Deal", false)]);
        let layout = layout_function(&b, &LayoutMetrics::default());
        assert!(layout.primary.is_none());
        assert_eq!(layout.children.len(), 2);
        assert_eq!(layout.children[0].node.y, 0.0);
    }

    #[test]
    fn last_child_connector_stops_at_its_midpoint() {
        let m = LayoutMetrics::default();
        let b = block(&[("Customer", true), ("Meeting", false), ("Deal", false), ("Quotes", false)]);
        let layout = layout_function(&b, &m);

        let stride = m.row_height + m.row_gap;
        for child in &layout.children[..2] {
            assert!(!child.connector.is_last);
            assert_eq!(child.connector.vertical.length(), stride);
        }
        let last = layout.children.last().unwrap();
        assert!(last.connector.is_last);
        assert_eq!(last.connector.vertical.y2, last.node.mid_y());
        assert_eq!(
            last.connector.vertical.length(),
            m.row_height / 2.0 + m.connector_overlap
        );

        let trunk = layout.trunk.unwrap();
        let primary = layout.primary.as_ref().unwrap();
        assert_eq!(trunk.y1, primary.y + primary.height);
        assert_eq!(trunk.y2, last.node.mid_y());
    }

    #[test]
    fn non_last_connectors_chain_into_the_next_row() {
        let m = LayoutMetrics::default();
        let b = block(&[("Customer", true), ("Meeting", false), ("Deal", false)]);
        let layout = layout_function(&b, &m);
        let first = &layout.children[0].connector.vertical;
        let second = &layout.children[1].connector.vertical;
        assert_eq!(first.y2, second.y1);
    }

    #[test]
    fn no_children_means_no_trunk() {
        let b = block(&[("Customer", true)]);
        let layout = layout_function(&b, &LayoutMetrics::default());
        assert!(layout.trunk.is_none());
        assert!(layout.children.is_empty());
        assert!(layout.placeholder_y > 0.0);
    }

    #[test]
    fn colours_follow_primary_and_name_hash() {
        let b = block(&[("Customer", true), ("Ad", false)]);
        let layout = layout_function(&b, &LayoutMetrics::default());
        let primary = layout.primary.unwrap();
        assert_eq!(primary.background.as_deref(), Some("#10B98108"));
        assert_eq!(primary.icon_background, "#10B981");
        assert_eq!(primary.icon_color, "#FFFFFF");

        let child = &layout.children[0].node;
        assert_eq!(child.icon_color, "#F97316");
        assert_eq!(child.icon_background, "#F9731620");
        assert!(child.background.is_none());
    }

    #[test]
    fn layout_is_repeatable() {
        let b = block(&[("Customer", true), ("Meeting", false), ("Deal", false)]);
        let m = LayoutMetrics::default();
        assert_eq!(layout_function(&b, &m), layout_function(&b, &m));
    }

    #[test]
    fn bad_primary_colour_uses_default_blue() {
        let mut b = block(&[("Customer", true)]);
        b.primary_color = "teal".to_string();
        let layout = layout_function(&b, &LayoutMetrics::default());
        assert_eq!(layout.primary.unwrap().icon_background, "#3B82F6");
    }

    #[test]
    fn rgb_parse_accepts_optional_hash() {
        assert_eq!(Rgb::parse("#EC4899"), Some(Rgb::new(0xEC, 0x48, 0x99)));
        assert_eq!(Rgb::parse("ec4899"), Some(Rgb::new(0xEC, 0x48, 0x99)));
        assert_eq!(Rgb::parse("#EC48"), None);
        assert_eq!(Rgb::parse("#GG4899"), None);
    }

    #[test]
    fn stagger_patterns() {
        let overview: Vec<u32> = (0..10).map(overview_stagger).collect();
        assert_eq!(overview, [0, 40, 80, 20, 60, 100, 30, 70, 0, 40]);
        assert_eq!(structure_stagger(0), 0);
        assert_eq!(structure_stagger(1), 60);
        assert_eq!(structure_stagger(4), 0);
    }
}
