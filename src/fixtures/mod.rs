//! Compiled-in data: the three sample scenarios, the structure trees and the
//! object catalog.

mod catalog;
mod scenarios;
mod structures;

pub use catalog::object_definitions;
pub use scenarios::{construction, logistics, marketing};
pub use structures::{
    industry_spaces, sample_business_structure, structure_for_industry, tech_saas_structure,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Scenario;
    use crate::structure::partition;

    fn all_scenarios() -> Vec<Scenario> {
        vec![construction(), marketing(), logistics()]
    }

    #[test]
    fn object_ids_are_unique_within_each_scenario() {
        for s in all_scenarios() {
            let mut ids: Vec<&str> = s.all_objects().map(|o| o.id.as_str()).collect();
            let n = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), n, "{}", s.meta.company_name);
        }
    }

    #[test]
    fn chat_threads_reference_existing_objects_once() {
        for s in all_scenarios() {
            let mut related: Vec<&str> = s
                .unified_chat
                .iter()
                .map(|t| t.related_object_id.as_str())
                .collect();
            for id in &related {
                assert!(s.find_object(id).is_some(), "dangling thread {id}");
            }
            let n = related.len();
            related.sort_unstable();
            related.dedup();
            assert_eq!(related.len(), n);
        }
    }

    #[test]
    fn construction_fixture_shape() {
        let s = construction();
        assert_eq!(s.meta.industry, "Construction");
        assert_eq!(s.meta.company_name, "BuildRight Co.");
        assert_eq!(s.active_space.name, "PROJECT OPS");
        assert_eq!(s.functions()[0].objects.len(), 4);
        assert_eq!(s.functions()[1].name, "Site Inspections");
        assert_eq!(s.unified_chat.len(), 2);
    }

    #[test]
    fn every_structure_function_has_exactly_one_primary() {
        let mut trees = vec![sample_business_structure(), tech_saas_structure()];
        for spaces in [
            industry_spaces(crate::Industry::Construction),
            industry_spaces(crate::Industry::Marketing),
            industry_spaces(crate::Industry::Logistics),
        ] {
            trees.push(crate::structure::BusinessStructure {
                company_name: String::new(),
                industry: String::new(),
                areas: vec![crate::structure::Area {
                    name: String::new(),
                    spaces,
                }],
            });
        }
        for tree in &trees {
            for space in tree.all_spaces() {
                for func in &space.functions {
                    let primaries = func.objects.iter().filter(|o| o.is_primary).count();
                    assert_eq!(primaries, 1, "{} / {}", space.name, func.name);
                    assert!(partition(func).0.is_some());
                }
            }
        }
    }

    #[test]
    fn structure_icons_are_all_known() {
        let tree = sample_business_structure();
        for space in tree.all_spaces() {
            assert!(space.icon.is_known());
            for func in &space.functions {
                assert!(func.objects.iter().all(|o| o.icon.is_known()));
            }
        }
    }

    #[test]
    fn unknown_industry_falls_back_to_logistics_structure() {
        let spaces = structure_for_industry("Aerospace");
        assert_eq!(spaces[0].name, "FLEET OPERATIONS");
        assert_eq!(structure_for_industry("Construction")[0].name, "PROJECT MANAGEMENT");
        assert_eq!(structure_for_industry("Marketing Agency")[0].name, "MARKETING");
    }

    #[test]
    fn catalog_ids_are_unique() {
        let defs = object_definitions();
        let mut ids: Vec<&str> = defs.iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), defs.len());
    }
}
