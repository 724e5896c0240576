//! Keyword classifier that maps a free-text brief onto one of the sample scenarios.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::Error;
use crate::fixtures;
use crate::model::Scenario;
use crate::structure::Space;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Industry {
    Construction,
    Marketing,
    Logistics,
}

impl Industry {
    /// Used when no keyword matches.
    pub const DEFAULT: Industry = Industry::Logistics;

    /// Every industry, in the order the classifier checks them.
    pub fn all() -> &'static [Industry] {
        &[
            Industry::Construction,
            Industry::Marketing,
            Industry::Logistics,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Industry::Construction => "Construction",
            Industry::Marketing => "Marketing",
            Industry::Logistics => "Logistics",
        }
    }

    /// Lowercase substrings that select this industry.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Industry::Construction => &["construction", "build", "material"],
            Industry::Marketing => &["marketing", "campaign", "creative"],
            Industry::Logistics => &["logistics", "shipping", "fleet", "delivery"],
        }
    }

    pub fn scenario(self) -> Scenario {
        match self {
            Industry::Construction => fixtures::construction(),
            Industry::Marketing => fixtures::marketing(),
            Industry::Logistics => fixtures::logistics(),
        }
    }

    pub fn structure(self) -> Vec<Space> {
        fixtures::industry_spaces(self)
    }

    /// Recognises both the short label ("Marketing") and the label a scenario
    /// carries in its metadata ("Marketing Agency").
    pub fn from_meta(label: &str) -> Option<Industry> {
        let label = label.trim();
        Industry::all().iter().copied().find(|ind| {
            label.eq_ignore_ascii_case(ind.label())
                || label.eq_ignore_ascii_case(ind.meta_label())
        })
    }

    fn meta_label(self) -> &'static str {
        match self {
            Industry::Marketing => "Marketing Agency",
            other => other.label(),
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Industry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Industry::from_meta(s).ok_or_else(|| Error::UnknownIndustry(s.to_string()))
    }
}

/// Picks the industry for `brief`: case-insensitive substring match against each
/// keyword set in priority order; first match wins.
pub fn classify_industry(brief: &str) -> Industry {
    let lower = brief.to_lowercase();
    for &industry in Industry::all() {
        if let Some(keyword) = industry.keywords().iter().find(|k| lower.contains(*k)) {
            debug!(%industry, keyword, "brief matched keyword");
            return industry;
        }
    }
    debug!(industry = %Industry::DEFAULT, "no keyword matched; using default");
    Industry::DEFAULT
}

/// Total: every input yields a scenario.
pub fn classify(brief: &str) -> Scenario {
    classify_industry(brief).scenario()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_brief_selects_construction() {
        let s = classify("a construction company tracking materials");
        assert_eq!(s.meta.industry, "Construction");
        assert_eq!(s.active_space.functions[0].objects.len(), 4);
    }

    #[test]
    fn empty_input_falls_back_to_logistics() {
        assert_eq!(classify_industry(""), Industry::Logistics);
        assert_eq!(classify("").meta.industry, "Logistics");
        assert_eq!(classify("   ").meta.company_name, "FastTrack Inc.");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify_industry("CREATIVE studio"), Industry::Marketing);
        assert_eq!(classify_industry("Fleet Ops"), Industry::Logistics);
        assert_eq!(classify_industry("We BUILD bridges"), Industry::Construction);
    }

    #[test]
    fn construction_wins_over_later_sets() {
        // "delivery" is a logistics keyword and "campaign" a marketing one, but
        // "material" is checked first.
        assert_eq!(
            classify_industry("material delivery campaign"),
            Industry::Construction
        );
        assert_eq!(
            classify_industry("campaign for a delivery startup"),
            Industry::Marketing
        );
    }

    #[test]
    fn every_keyword_selects_its_industry() {
        for &industry in Industry::all() {
            for kw in industry.keywords() {
                let brief = format!("Our {kw} team");
                // Earlier sets may shadow, so only assert that the chosen one
                // is not later in priority than the owner.
                let got = classify_industry(&brief);
                let pos = |i: Industry| Industry::all().iter().position(|x| *x == i);
                assert!(pos(got) <= pos(industry), "{kw}");
            }
        }
    }

    #[test]
    fn unrelated_text_uses_default() {
        assert_eq!(classify_industry("a bakery in Lisbon"), Industry::DEFAULT);
    }

    #[test]
    fn parses_short_and_meta_labels() {
        assert_eq!("marketing".parse::<Industry>().unwrap(), Industry::Marketing);
        assert_eq!(
            "Marketing Agency".parse::<Industry>().unwrap(),
            Industry::Marketing
        );
        assert!(matches!(
            "aerospace".parse::<Industry>(),
            Err(Error::UnknownIndustry(_))
        ));
        for &ind in Industry::all() {
            assert_eq!(Industry::from_meta(&ind.scenario().meta.industry), Some(ind));
        }
    }
}
