use super::{Endpoint, FlowRecord, Protocol};
use std::net::IpAddr;

/// Case-insensitive substring filter over the rendered fields of a flow.
#[derive(Debug, Clone, Default)]
pub struct FlowFilter {
    needle: String,
}

impl FlowFilter {
    pub fn new(query: impl AsRef<str>) -> Self {
        let needle = query.as_ref().trim().to_lowercase();
        Self { needle }
    }

    pub fn matches_flow(&self, flow: &FlowRecord) -> bool {
        if self.is_match_all() {
            return true;
        }

        let fields = [
            FlowFormatter::timestamp(flow.timestamp_ms),
            FlowFormatter::ip_address(&flow.source.addr),
            FlowFormatter::endpoint(&flow.source),
            FlowFormatter::port(flow.source.port),
            FlowFormatter::ip_address(&flow.destination.addr),
            FlowFormatter::endpoint(&flow.destination),
            FlowFormatter::port(flow.destination.port),
            FlowFormatter::protocol(&flow.protocol),
        ];
        fields.iter().any(|value| self.matches(value))
    }

    /// Returns the flows this filter keeps, in input order.
    pub fn apply(&self, flows: &[FlowRecord]) -> Vec<FlowRecord> {
        flows
            .iter()
            .filter(|flow| self.matches_flow(flow))
            .cloned()
            .collect()
    }

    pub fn is_match_all(&self) -> bool {
        self.needle.is_empty()
    }

    fn matches(&self, value: &str) -> bool {
        value.to_lowercase().contains(&self.needle)
    }
}

pub struct FlowFormatter;

impl FlowFormatter {
    pub fn timestamp(timestamp_ms: u64) -> String {
        format!("{}.{:03}", timestamp_ms / 1000, timestamp_ms % 1000)
    }

    pub fn ip_address(ip: &IpAddr) -> String {
        ip.to_string()
    }

    pub fn endpoint(endpoint: &Endpoint) -> String {
        endpoint.to_string()
    }

    pub fn protocol(protocol: &Protocol) -> String {
        protocol.to_string()
    }

    pub fn port(port: u16) -> String {
        port.to_string()
    }

    pub fn count(value: u64) -> String {
        value.to_string()
    }
}
