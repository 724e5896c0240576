//! Dashboard mode.
//!
//! The numbers here are fixed illustrations. They are not aggregated from the
//! selected function's objects and never change with the scenario.

use crate::tone::Tone;

#[derive(Debug, Clone, PartialEq)]
pub struct PieDatum {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub color: &'static str,
    /// SVG path in a 100×100 viewBox.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub label: &'static str,
    pub values: [f64; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarSeries {
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub value: &'static str,
    pub suffix: Option<&'static str>,
    pub label: &'static str,
    pub tone: Tone,
}

/// One row of the campaign ROI table. Empty rows render as skeleton bars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoiRow {
    pub name: &'static str,
    pub status: &'static str,
    pub spend: &'static str,
    pub leads: Option<u32>,
    pub won_leads: Option<u32>,
    pub revenue: &'static str,
    pub roas: &'static str,
}

impl RoiRow {
    const fn filled(
        name: &'static str,
        status: &'static str,
        spend: &'static str,
        leads: u32,
        won_leads: u32,
        revenue: &'static str,
        roas: &'static str,
    ) -> Self {
        Self {
            name,
            status,
            spend,
            leads: Some(leads),
            won_leads: Some(won_leads),
            revenue,
            roas,
        }
    }

    const fn blank(status: &'static str) -> Self {
        Self {
            name: "",
            status,
            spend: "",
            leads: None,
            won_leads: None,
            revenue: "",
            roas: "",
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
    }
}

pub const PIE_TITLE: &str = "Top Performing Ads";
pub const METRICS_TITLE: &str = "Q2 Marketing Performance At-a-Glance";
pub const ROI_TITLE: &str = "Campaign ROI Deep Dive";
pub const PIPELINE_TITLE: &str = "Content Pipeline by Marketer";
pub const ROI_COLUMNS: [&str; 7] = [
    "Campaign", "Status", "Spend", "Leads", "WON Leads", "Revenue", "ROAS",
];

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMock {
    pub pie: Vec<PieDatum>,
    pub bars: Vec<BarGroup>,
    pub series: [BarSeries; 4],
    pub metrics: Vec<MetricCard>,
    pub roi: Vec<RoiRow>,
}

impl DashboardMock {
    pub fn fixed() -> Self {
        let pie = vec![
            PieDatum { label: "Scandinavian inspired...", value: 40.0, color: "#1E56A0" },
            PieDatum { label: "Sustainable interior design...", value: 30.0, color: "#59C9D5" },
            PieDatum { label: "Modern living space...", value: 30.0, color: "#CBD5E1" },
        ];
        let bars = vec![
            BarGroup { label: "A", values: [3.0, 5.0, 8.0, 2.0] },
            BarGroup { label: "B", values: [4.0, 6.0, 3.0, 5.0] },
            BarGroup { label: "C", values: [6.0, 4.0, 7.0, 3.0] },
            BarGroup { label: "D", values: [5.0, 8.0, 4.0, 6.0] },
            BarGroup { label: "E", values: [7.0, 3.0, 5.0, 4.0] },
        ];
        let series = [
            BarSeries { name: "IDEA", color: "#94A3B8" },
            BarSeries { name: "DRAFTING", color: "#3B82F6" },
            BarSeries { name: "PENDING APPROVAL", color: "#F97316" },
            BarSeries { name: "PUBLISHED", color: "#22C55E" },
        ];
        let metric = |value: &'static str, suffix: Option<&'static str>, label: &'static str, tone: Tone| {
            MetricCard { value, suffix, label, tone }
        };
        let metrics = vec![
            metric("182", None, "Total New Leads", Tone::Blue),
            metric("$15,000", None, "Total Marketing Spend", Tone::Red),
            metric("$82.41", None, "Average Cost Per Lead (CPL)", Tone::Green),
            metric("29", Some("%"), "Lead-to-UNQUALIFIED", Tone::Slate),
            metric("21", Some("%"), "Lead-to-WON", Tone::Green),
            metric("3.75", Some("x"), "ROAS", Tone::Red),
        ];
        let roi = vec![
            RoiRow::filled("Scandinavian...", "ACTIVE", "$10,000", 60, 15, "$125,000", "12.5x"),
            RoiRow::filled("Modern Living...", "ACTIVE", "$5,000", 22, 4, "$35,000", "7x"),
            RoiRow::filled("Sustainable ...", "OFF", "$2,000", 12, 1, "$5,000", "0.71x"),
            RoiRow::blank("PREPARE"),
            RoiRow::blank("PREPARE"),
            RoiRow::blank("IDEA"),
        ];
        Self {
            pie,
            bars,
            series,
            metrics,
            roi,
        }
    }
}

pub fn roi_status_tone(status: &str) -> Tone {
    match status {
        "ACTIVE" => Tone::Green,
        "OFF" => Tone::Red,
        "PREPARE" => Tone::Blue,
        _ => Tone::Muted,
    }
}

const PIE_CENTER: f64 = 50.0;
const PIE_RADIUS: f64 = 40.0;

/// Arc wedges starting at 12 o'clock and running clockwise. A zero or negative
/// total yields no slices.
pub fn pie_slices(data: &[PieDatum]) -> Vec<PieSlice> {
    let total: f64 = data.iter().map(|d| d.value).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let point = |deg: f64| {
        let rad = (deg - 90.0).to_radians();
        (
            PIE_CENTER + PIE_RADIUS * rad.cos(),
            PIE_CENTER + PIE_RADIUS * rad.sin(),
        )
    };
    let mut current = 0.0;
    data.iter()
        .map(|d| {
            let angle = d.value / total * 360.0;
            let (x1, y1) = point(current);
            let (x2, y2) = point(current + angle);
            current += angle;
            let large_arc = u8::from(angle > 180.0);
            PieSlice {
                label: d.label,
                color: d.color,
                path: format!(
                    "M 50 50 L {x1:.2} {y1:.2} A 40 40 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
                ),
            }
        })
        .collect()
}

/// Bar heights in pixels, scaled so the largest value across all groups is
/// `max_px`.
pub fn bar_heights(groups: &[BarGroup], max_px: f64) -> Vec<[f64; 4]> {
    let max = groups
        .iter()
        .flat_map(|g| g.values.iter().copied())
        .fold(0.0_f64, f64::max);
    groups
        .iter()
        .map(|g| {
            if max <= 0.0 {
                [0.0; 4]
            } else {
                g.values.map(|v| v / max * max_px)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_mock_shape() {
        let mock = DashboardMock::fixed();
        assert_eq!(mock.pie.len(), 3);
        assert_eq!(mock.bars.len(), 5);
        assert_eq!(mock.metrics.len(), 6);
        assert_eq!(mock.roi.len(), 6);
        assert_eq!(mock.roi.iter().filter(|r| r.is_blank()).count(), 3);
    }

    #[test]
    fn first_slice_starts_at_twelve_o_clock() {
        let slices = pie_slices(&DashboardMock::fixed().pie);
        assert_eq!(slices.len(), 3);
        assert!(slices[0].path.starts_with("M 50 50 L 50.00 10.00 A 40 40 0 0 1 "));
        assert!(slices[0].path.ends_with(" Z"));
    }

    #[test]
    fn dominant_slice_uses_large_arc() {
        let data = [
            PieDatum { label: "a", value: 3.0, color: "#000000" },
            PieDatum { label: "b", value: 1.0, color: "#FFFFFF" },
        ];
        let slices = pie_slices(&data);
        assert!(slices[0].path.contains(" 1 1 "));
        assert!(slices[1].path.contains(" 0 1 "));
    }

    #[test]
    fn empty_pie_has_no_slices() {
        assert!(pie_slices(&[]).is_empty());
        let zero = [PieDatum { label: "z", value: 0.0, color: "#000000" }];
        assert!(pie_slices(&zero).is_empty());
    }

    #[test]
    fn bars_scale_to_the_global_max() {
        let heights = bar_heights(&DashboardMock::fixed().bars, 100.0);
        assert_eq!(heights[0], [37.5, 62.5, 100.0, 25.0]);
        assert_eq!(heights[3][1], 100.0);
        let flat = bar_heights(&[BarGroup { label: "x", values: [0.0; 4] }], 100.0);
        assert_eq!(flat[0], [0.0; 4]);
    }

    #[test]
    fn roi_status_tones() {
        assert_eq!(roi_status_tone("ACTIVE"), Tone::Green);
        assert_eq!(roi_status_tone("OFF"), Tone::Red);
        assert_eq!(roi_status_tone("PREPARE"), Tone::Blue);
        assert_eq!(roi_status_tone("IDEA"), Tone::Muted);
    }
}
