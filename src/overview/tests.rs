use super::*;
use crate::features::EnabledFeatures;
use crate::i18n::Passthrough;
use std::cell::Cell;

fn ids(panels: &[Panel]) -> Vec<PanelId> {
    panels.iter().map(|p| p.id).collect()
}

#[test]
fn base_catalogue_without_overview() {
    let panels = default_overview_panels(false);

    assert_eq!(
        ids(&panels),
        vec![
            PanelId::TopAvgDonut,
            PanelId::TopLatestDonut,
            PanelId::TopBar,
            PanelId::TotalLine,
            PanelId::TopBarTotal,
            PanelId::TopLines,
        ]
    );
    let selected: Vec<bool> = panels.iter().map(|p| p.is_selected).collect();
    assert_eq!(selected, vec![true, true, false, false, true, true]);
}

#[test]
fn overview_capability_adds_four_selected_panels() {
    let panels = default_overview_panels(true);

    assert_eq!(panels.len(), 10);
    assert_eq!(panels[0], Panel::new(PanelId::Overview, true));
    assert_eq!(
        ids(&panels[7..]),
        vec![PanelId::TopSankey, PanelId::PacketsDropped, PanelId::InboundRegion]
    );
    assert!(panels[7..].iter().all(|p| p.is_selected));
    assert_eq!(&panels[1..7], &default_overview_panels(false)[..]);
}

#[test]
fn catalogue_is_the_same_on_every_call() {
    assert_eq!(default_overview_panels(true), default_overview_panels(true));
    assert_eq!(default_overview_panels(false), default_overview_panels(false));
}

#[test]
fn gate_is_queried_once() {
    let calls = Cell::new(0);
    let gate = |feature: Feature| {
        calls.set(calls.get() + 1);
        feature == Feature::Overview
    };

    assert_eq!(default_overview_panels_for(&gate).len(), 10);
    assert_eq!(calls.get(), 1);
    assert_eq!(default_overview_panels_for(&EnabledFeatures::none()).len(), 6);
}

#[test]
fn top_bar_info_interpolates_limit_and_type() {
    let info = overview_panel_info(&Passthrough, PanelId::TopBar, Some("5"), "bytes");

    assert!(info.title.contains('5'));
    assert!(info.title.contains("bytes"));
    assert_eq!(info.title, "Top 5 bytes rates stacked");
    assert_eq!(info.chart_type.as_deref(), Some("bars"));
    assert_eq!(info.tooltip, None);
}

#[test]
fn overview_info_has_title_only() {
    let info = overview_panel_info(&Passthrough, PanelId::Overview, Some("5"), "bytes");
    assert_eq!(
        info,
        PanelInfo {
            title: "Network overview".to_string(),
            chart_type: None,
            tooltip: None,
        }
    );
}

#[test]
fn missing_limit_uses_placeholder() {
    let info = overview_panel_info(&Passthrough, PanelId::TopAvgDonut, None, "packets");
    assert_eq!(info.title, "Top X average rates");
    assert_eq!(info.chart_type.as_deref(), Some("donut"));
    assert_eq!(
        info.tooltip.as_deref(),
        Some("The average rate over the selected interval")
    );
}

#[test]
fn limit_accepts_preformatted_labels() {
    let info = overview_panel_info(&Passthrough, PanelId::TopLines, Some("10+"), "bytes");
    assert_eq!(info.title, "Top 10+ bytes rates");

    let info = overview_panel_info(&Passthrough, PanelId::TopBar, Some("all"), "packets");
    assert_eq!(info.title, "Top all packets rates stacked");
}

#[test]
fn every_panel_has_a_title() {
    for id in PanelId::ALL {
        let info = overview_panel_info(&Passthrough, id, Some("10"), "bytes");
        assert!(!info.title.is_empty(), "{id} has no title");
        assert!(!info.title.contains("{{"), "{id} title left a placeholder");
    }
}

#[test]
fn remaining_panels_match_catalogue_text() {
    let info = |id| overview_panel_info(&Passthrough, id, Some("3"), "packets");

    assert_eq!(info(PanelId::TopBarTotal).title, "Top 3 packets rates stacked with total");
    assert!(info(PanelId::TopBarTotal).tooltip.is_some());
    assert_eq!(info(PanelId::TopLines).chart_type.as_deref(), Some("lines"));
    assert_eq!(info(PanelId::TopLatestDonut).title, "Top 3 latest rates");
    assert_eq!(info(PanelId::TopSankey).chart_type.as_deref(), Some("sankey"));
    assert_eq!(info(PanelId::TotalLine).title, "Total rate");
    assert_eq!(info(PanelId::TotalLine).chart_type.as_deref(), Some("line"));
    assert_eq!(info(PanelId::PacketsDropped).chart_type, None);
    assert_eq!(info(PanelId::InboundRegion).title, "Inbound packets by region");
}

#[test]
fn info_goes_through_the_translator() {
    struct Upper;
    impl Translator for Upper {
        fn t(&self, key: &str, params: &[(&str, &str)]) -> String {
            crate::i18n::interpolate(key, params).to_uppercase()
        }
    }

    let info = overview_panel_info(&Upper, PanelId::TopSankey, Some("7"), "bytes");
    assert_eq!(info.title, "TOP 7 BYTES DISTRIBUTION");
    assert_eq!(info.chart_type.as_deref(), Some("SANKEY"));
}

#[test]
fn panel_ids_parse_from_their_names() {
    for id in PanelId::ALL {
        assert_eq!(id.as_str().parse::<PanelId>(), Ok(id));
    }
    assert_eq!(
        "top_pie".parse::<PanelId>(),
        Err(UnknownPanelId("top_pie".to_string()))
    );
}

#[test]
fn panels_serialize_with_snake_case_ids() {
    let json = serde_json::to_string(&Panel::new(PanelId::TopBarTotal, false)).unwrap();
    assert_eq!(json, r#"{"id":"top_bar_total","isSelected":false}"#);
}
