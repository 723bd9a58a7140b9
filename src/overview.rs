//! Catalogue of the overview dashboard panels.

use crate::features::{Feature, FeatureGate};
use crate::i18n::Translator;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    Overview,
    TopBar,
    TopBarTotal,
    TopAvgDonut,
    TopLatestDonut,
    TopSankey,
    TotalLine,
    TopLines,
    PacketsDropped,
    InboundRegion,
}

impl PanelId {
    pub const ALL: [PanelId; 10] = [
        PanelId::Overview,
        PanelId::TopBar,
        PanelId::TopBarTotal,
        PanelId::TopAvgDonut,
        PanelId::TopLatestDonut,
        PanelId::TopSankey,
        PanelId::TotalLine,
        PanelId::TopLines,
        PanelId::PacketsDropped,
        PanelId::InboundRegion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PanelId::Overview => "overview",
            PanelId::TopBar => "top_bar",
            PanelId::TopBarTotal => "top_bar_total",
            PanelId::TopAvgDonut => "top_avg_donut",
            PanelId::TopLatestDonut => "top_latest_donut",
            PanelId::TopSankey => "top_sankey",
            PanelId::TotalLine => "total_line",
            PanelId::TopLines => "top_lines",
            PanelId::PacketsDropped => "packets_dropped",
            PanelId::InboundRegion => "inbound_region",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown overview panel id '{0}'")]
pub struct UnknownPanelId(pub String);

impl FromStr for PanelId {
    type Err = UnknownPanelId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownPanelId(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub id: PanelId,
    pub is_selected: bool,
}

impl Panel {
    const fn new(id: PanelId, is_selected: bool) -> Self {
        Self { id, is_selected }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelInfo {
    pub title: String,
    pub chart_type: Option<String>,
    pub tooltip: Option<String>,
}

const BASE_PANELS: [Panel; 6] = [
    Panel::new(PanelId::TopAvgDonut, true),
    Panel::new(PanelId::TopLatestDonut, true),
    Panel::new(PanelId::TopBar, false),
    Panel::new(PanelId::TotalLine, false),
    Panel::new(PanelId::TopBarTotal, true),
    Panel::new(PanelId::TopLines, true),
];

const OVERVIEW_TAIL: [Panel; 3] = [
    Panel::new(PanelId::TopSankey, true),
    Panel::new(PanelId::PacketsDropped, true),
    Panel::new(PanelId::InboundRegion, true),
];

/// Default panel list in display order. The overview capability adds the
/// network overview up front and three extra panels at the end.
pub fn default_overview_panels(overview_enabled: bool) -> Vec<Panel> {
    let mut panels = Vec::with_capacity(BASE_PANELS.len() + 1 + OVERVIEW_TAIL.len());
    if overview_enabled {
        panels.push(Panel::new(PanelId::Overview, true));
    }
    panels.extend(BASE_PANELS);
    if overview_enabled {
        panels.extend(OVERVIEW_TAIL);
    }
    panels
}

/// Same as [`default_overview_panels`], asking `gate` once for the overview capability.
pub fn default_overview_panels_for(gate: &impl FeatureGate) -> Vec<Panel> {
    let overview_enabled = gate.is_allowed(Feature::Overview);
    debug!(overview_enabled, "Building default overview panels");
    default_overview_panels(overview_enabled)
}

/// Placeholder shown in titles when no limit is given.
pub const DEFAULT_LIMIT: &str = "X";

/// Title, chart type and tooltip for a panel. `limit` is any preformatted
/// label (`5`, `10+`, `all`) and shows as [`DEFAULT_LIMIT`] when `None`.
pub fn overview_panel_info(
    t: &impl Translator,
    id: PanelId,
    limit: Option<&str>,
    metric_type: &str,
) -> PanelInfo {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    let both = [("limit", limit), ("type", metric_type)];

    let info = |title: String, chart_type: Option<&str>, tooltip: Option<&str>| PanelInfo {
        title,
        chart_type: chart_type.map(|key| t.t(key, &[])),
        tooltip: tooltip.map(|key| t.t(key, &[])),
    };

    match id {
        PanelId::Overview => info(t.t("Network overview", &[]), None, None),
        PanelId::TopBar => info(
            t.t("Top {{limit}} {{type}} rates stacked", &both),
            Some("bars"),
            None,
        ),
        PanelId::TopBarTotal => info(
            t.t("Top {{limit}} {{type}} rates stacked with total", &both),
            Some("bars"),
            Some("The top rates as bar compared to total as line over the selected interval"),
        ),
        PanelId::TopLines => info(
            t.t("Top {{limit}} {{type}} rates", &both),
            Some("lines"),
            None,
        ),
        PanelId::TopAvgDonut => info(
            t.t("Top {{limit}} average rates", &[("limit", limit)]),
            Some("donut"),
            Some("The average rate over the selected interval"),
        ),
        PanelId::TopLatestDonut => info(
            t.t("Top {{limit}} latest rates", &[("limit", limit)]),
            Some("donut"),
            Some("The last measured rate from the selected interval"),
        ),
        PanelId::TopSankey => info(
            t.t("Top {{limit}} {{type}} distribution", &both),
            Some("sankey"),
            None,
        ),
        PanelId::TotalLine => info(t.t("Total rate", &[]), Some("line"), None),
        PanelId::PacketsDropped => info(t.t("Packets dropped", &[]), None, None),
        PanelId::InboundRegion => info(
            t.t("Inbound {{type}} by region", &[("type", metric_type)]),
            None,
            None,
        ),
    }
}
