//! Cloud provider choices.

/// Cloud providers offered when creating a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloudProvider {
    Aws,
    Gcp,
    Azure,
}

impl CloudProvider {
    pub fn all() -> Vec<Self> {
        vec![CloudProvider::Aws, CloudProvider::Gcp, CloudProvider::Azure]
    }

    /// Label shown in the provider selection.
    pub fn label(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "Amazon AWS",
            CloudProvider::Gcp => "Google GCP",
            CloudProvider::Azure => "Microsoft Azure",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.label() == label)
    }

    pub fn default_region(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "us-east-1",
            CloudProvider::Gcp => "us-central1",
            CloudProvider::Azure => "eastus",
        }
    }

    /// Whether projects can be created on this provider.
    pub fn is_supported(&self) -> bool {
        matches!(self, CloudProvider::Aws)
    }

    pub fn labels() -> Vec<String> {
        Self::all().iter().map(|p| p.label().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for provider in CloudProvider::all() {
            assert_eq!(CloudProvider::from_label(provider.label()), Some(provider));
        }
        assert_eq!(CloudProvider::from_label("Oracle Cloud"), None);
    }

    #[test]
    fn test_only_aws_supported() {
        assert!(CloudProvider::Aws.is_supported());
        assert!(!CloudProvider::Gcp.is_supported());
        assert!(!CloudProvider::Azure.is_supported());
    }
}
