//! Read-only view of a Structurizr workspace (JSON export).
//!
//! Only the parts needed to enumerate and validate named entities are
//! modeled; unknown fields are ignored on deserialization.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Tag Structurizr puts on every deployment node.
pub const DEPLOYMENT_NODE_TAG: &str = "Deployment Node";
/// Tag marking software systems owned by someone else.
pub const EXTERNAL_TAG: &str = "External";
/// Non-array entry of `views` that holds styles and themes.
pub const VIEWS_CONFIGURATION_KEY: &str = "configuration";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Workspace {
    pub name: String,
    pub model: Model,
    pub views: Views,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Model {
    pub people: Vec<Person>,
    pub software_systems: Vec<SoftwareSystem>,
    pub deployment_nodes: Vec<DeploymentNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: String,
    pub description: Option<String>,
    pub tags: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SoftwareSystem {
    pub name: String,
    pub description: Option<String>,
    pub tags: String,
    pub containers: Vec<Container>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Container {
    pub name: String,
    pub description: Option<String>,
    pub technology: Option<String>,
    pub tags: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeploymentNode {
    pub name: String,
    pub environment: Option<String>,
    pub tags: String,
}

/// `views` section: category name (`systemContextViews`, `containerViews`,
/// ...) to its entries, plus the `configuration` record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Views {
    #[serde(flatten)]
    pub categories: BTreeMap<String, ViewCategory>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ViewCategory {
    Views(Vec<View>),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct View {
    pub key: String,
    pub description: Option<String>,
}

impl Views {
    /// Every view across all array-valued categories, `configuration` excluded.
    pub fn all(&self) -> impl Iterator<Item = &View> {
        self.categories
            .iter()
            .filter(|(name, _)| name.as_str() != VIEWS_CONFIGURATION_KEY)
            .filter_map(|(_, category)| match category {
                ViewCategory::Views(views) => Some(views.iter()),
                ViewCategory::Other(_) => None,
            })
            .flatten()
    }
}

/// Capability shared by every model node.
pub trait ModelElement {
    fn name(&self) -> &str;

    /// Raw comma-separated tag string.
    fn tags(&self) -> &str;

    fn has_tag(&self, tag: &str) -> bool {
        self.tags().split(',').any(|t| t.trim() == tag)
    }
}

macro_rules! impl_model_element {
    ($($ty:ty),*) => {
        $(impl ModelElement for $ty {
            fn name(&self) -> &str {
                &self.name
            }

            fn tags(&self) -> &str {
                &self.tags
            }
        })*
    };
}

impl_model_element!(Person, SoftwareSystem, Container, DeploymentNode);

/// Borrowed, flattened view over any model node.
#[derive(Debug, Clone, Copy)]
pub enum SystemElement<'a> {
    Person(&'a Person),
    SoftwareSystem(&'a SoftwareSystem),
    /// A container emitted after its parent system.
    Container {
        container: &'a Container,
        system_name: &'a str,
    },
    DeploymentNode(&'a DeploymentNode),
}

impl SystemElement<'_> {
    /// Name of the owning system, for containers only.
    pub fn system_name(&self) -> Option<&str> {
        match self {
            Self::Container { system_name, .. } => Some(system_name),
            _ => None,
        }
    }
}

impl ModelElement for SystemElement<'_> {
    fn name(&self) -> &str {
        match self {
            Self::Person(e) => e.name(),
            Self::SoftwareSystem(e) => e.name(),
            Self::Container { container, .. } => container.name(),
            Self::DeploymentNode(e) => e.name(),
        }
    }

    fn tags(&self) -> &str {
        match self {
            Self::Person(e) => e.tags(),
            Self::SoftwareSystem(e) => e.tags(),
            Self::Container { container, .. } => container.tags(),
            Self::DeploymentNode(e) => e.tags(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"{
        "name": "Shop",
        "model": {
            "people": [{ "name": "Customer", "tags": "Element,Person" }],
            "softwareSystems": [
                {
                    "name": "Billing",
                    "tags": "Element,Software System",
                    "containers": [{ "name": "Billing API", "tags": "Element,Container" }]
                }
            ],
            "deploymentNodes": [{ "name": "AWS", "tags": "Element,Deployment Node" }]
        },
        "views": {
            "systemContextViews": [{ "key": "Context" }],
            "containerViews": [{ "key": "Containers", "description": "All" }],
            "configuration": { "branding": {}, "styles": {} }
        }
    }"#;

    #[test]
    fn parses_structurizr_export() {
        let ws: Workspace = serde_json::from_str(EXPORT).unwrap();
        assert_eq!(ws.name, "Shop");
        assert_eq!(ws.model.people.len(), 1);
        assert_eq!(ws.model.software_systems[0].containers[0].name, "Billing API");
        assert!(ws.model.deployment_nodes[0].has_tag(DEPLOYMENT_NODE_TAG));
    }

    #[test]
    fn views_skip_configuration() {
        let ws: Workspace = serde_json::from_str(EXPORT).unwrap();
        let mut keys: Vec<_> = ws.views.all().map(|v| v.key.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["Containers", "Context"]);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let ws: Workspace = serde_json::from_str("{}").unwrap();
        assert!(ws.model.software_systems.is_empty());
        assert_eq!(ws.views.all().count(), 0);
    }

    #[test]
    fn has_tag_matches_whole_tags_only() {
        let system = SoftwareSystem {
            name: "Billing".into(),
            tags: "Element,Software System,External".into(),
            ..Default::default()
        };
        assert!(system.has_tag(EXTERNAL_TAG));
        assert!(!system.has_tag("Extern"));
    }
}
