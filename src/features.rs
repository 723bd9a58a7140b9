use clap::ValueEnum;
use std::collections::HashSet;
use std::fmt;

/// Capabilities that can be switched on per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Feature {
    Overview,
}

impl Feature {
    pub fn as_str(self) -> &'static str {
        match self {
            Feature::Overview => "overview",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait FeatureGate {
    fn is_allowed(&self, feature: Feature) -> bool;
}

impl<F: Fn(Feature) -> bool> FeatureGate for F {
    fn is_allowed(&self, feature: Feature) -> bool {
        self(feature)
    }
}

/// Gate backed by an explicit set of enabled features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnabledFeatures {
    enabled: HashSet<Feature>,
}

impl EnabledFeatures {
    pub fn none() -> Self {
        Self::default()
    }
}

impl FromIterator<Feature> for EnabledFeatures {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self {
            enabled: iter.into_iter().collect(),
        }
    }
}

impl FeatureGate for EnabledFeatures {
    fn is_allowed(&self, feature: Feature) -> bool {
        self.enabled.contains(&feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_allows_only_listed_features() {
        let gate: EnabledFeatures = [Feature::Overview].into_iter().collect();
        assert!(gate.is_allowed(Feature::Overview));
        assert_eq!(Feature::Overview.to_string(), "overview");
    }

    #[test]
    fn closures_act_as_gates() {
        let gate = |_: Feature| true;
        assert!(gate.is_allowed(Feature::Overview));
        assert!(!EnabledFeatures::none().is_allowed(Feature::Overview));
    }
}
