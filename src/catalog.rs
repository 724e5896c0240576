//! Object Manager catalog: object type definitions, search and category filter.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::icons::Icon;
use crate::tone::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum Category {
    Object,
    SubObject,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Object => "Object",
            Category::SubObject => "Sub-object",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum FieldType {
    Text,
    Number,
    Date,
    Select,
    Relation,
    Currency,
    Email,
    Url,
    Phone,
}

impl FieldType {
    pub fn label(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Select => "select",
            FieldType::Relation => "relation",
            FieldType::Currency => "currency",
            FieldType::Email => "email",
            FieldType::Url => "url",
            FieldType::Phone => "phone",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            FieldType::Text => Icon::Type,
            FieldType::Number => Icon::Hash,
            FieldType::Date => Icon::Calendar,
            FieldType::Select => Icon::ChevronDown,
            FieldType::Relation => Icon::Link,
            FieldType::Currency => Icon::DollarSign,
            FieldType::Email => Icon::AtSign,
            FieldType::Url => Icon::Globe,
            FieldType::Phone => Icon::Phone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldDefinition {
    pub name: String,
    pub field_type: FieldType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkflowStep {
    pub name: String,
    pub color: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectDefinition {
    pub id: String,
    pub name: String,
    pub icon: Icon,
    pub icon_bg: String,
    pub icon_color: String,
    pub category: Category,
    pub description: String,
    pub fields: Vec<FieldDefinition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub workflow: Vec<WorkflowStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Object,
    SubObject,
}

impl CategoryFilter {
    pub fn all() -> &'static [CategoryFilter] {
        &[
            CategoryFilter::All,
            CategoryFilter::Object,
            CategoryFilter::SubObject,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Object => "Object",
            CategoryFilter::SubObject => "Sub-object",
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Object => category == Category::Object,
            CategoryFilter::SubObject => category == Category::SubObject,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "object" => Ok(CategoryFilter::Object),
            "sub-object" | "subobject" | "sub_object" => Ok(CategoryFilter::SubObject),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

/// Definitions whose name or description contains `search` (ignoring case) and
/// whose category passes `filter`. An empty search matches everything.
pub fn filter_definitions<'a>(
    defs: &'a [ObjectDefinition],
    search: &str,
    filter: CategoryFilter,
) -> Vec<&'a ObjectDefinition> {
    let needle = search.trim().to_lowercase();
    defs.iter()
        .filter(|d| filter.matches(d.category))
        .filter(|d| {
            needle.is_empty()
                || d.name.to_lowercase().contains(&needle)
                || d.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogSummary {
    pub total: usize,
    pub objects: usize,
    pub sub_objects: usize,
    pub fields: usize,
}

impl CatalogSummary {
    pub fn of(defs: &[ObjectDefinition]) -> Self {
        defs.iter().fold(Self::default(), |mut acc, d| {
            acc.total += 1;
            match d.category {
                Category::Object => acc.objects += 1,
                Category::SubObject => acc.sub_objects += 1,
            }
            acc.fields += d.fields.len();
            acc
        })
    }

    pub fn count_for(&self, filter: CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.total,
            CategoryFilter::Object => self.objects,
            CategoryFilter::SubObject => self.sub_objects,
        }
    }

    /// "10 objects · 42 total fields"
    pub fn headline(&self) -> String {
        format!("{} objects · {} total fields", self.total, self.fields)
    }
}

/// First `max` fields of a card plus how many were left out.
pub fn visible_fields(def: &ObjectDefinition, max: usize) -> (&[FieldDefinition], usize) {
    let shown = def.fields.len().min(max);
    (&def.fields[..shown], def.fields.len() - shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::object_definitions;

    #[test]
    fn summary_counts_categories_and_fields() {
        let defs = object_definitions();
        let summary = CatalogSummary::of(&defs);
        assert_eq!(summary.total, 10);
        assert_eq!(summary.objects, 6);
        assert_eq!(summary.sub_objects, 4);
        assert_eq!(summary.fields, 42);
        assert_eq!(summary.headline(), "10 objects · 42 total fields");
        assert_eq!(summary.count_for(CategoryFilter::SubObject), 4);
    }

    #[test]
    fn search_matches_name_or_description() {
        let defs = object_definitions();
        let hits = filter_definitions(&defs, "INVOICE", CategoryFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "invoice");

        let by_description = filter_definitions(&defs, "suppliers", CategoryFilter::All);
        let ids: Vec<&str> = by_description.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["purchase-order"]);
    }

    #[test]
    fn search_and_category_combine() {
        let defs = object_definitions();
        let hits = filter_definitions(&defs, "project", CategoryFilter::SubObject);
        assert!(hits.iter().all(|d| d.category == Category::SubObject));
        assert!(hits.iter().any(|d| d.id == "task"));
        assert!(filter_definitions(&defs, "zzz", CategoryFilter::All).is_empty());
    }

    #[test]
    fn empty_search_keeps_catalog_order() {
        let defs = object_definitions();
        let all = filter_definitions(&defs, "  ", CategoryFilter::All);
        assert_eq!(all.len(), defs.len());
        assert_eq!(all[0].id, "project");
    }

    #[test]
    fn visible_fields_reports_overflow() {
        let defs = object_definitions();
        let project = &defs[0];
        let (shown, more) = visible_fields(project, 3);
        assert_eq!(shown.len(), 3);
        assert_eq!(more, 3);
        let milestone = defs.iter().find(|d| d.id == "milestone").unwrap();
        assert_eq!(visible_fields(milestone, 3).1, 0);
    }

    #[test]
    fn category_filter_parses() {
        assert_eq!("Sub-object".parse::<CategoryFilter>().unwrap(), CategoryFilter::SubObject);
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert!(matches!(
            "widgets".parse::<CategoryFilter>(),
            Err(Error::UnknownCategory(_))
        ));
    }

    #[test]
    fn field_type_icons_are_known() {
        for def in object_definitions() {
            for f in &def.fields {
                assert!(f.field_type.icon().is_known(), "{}", f.field_type.label());
            }
        }
    }
}
