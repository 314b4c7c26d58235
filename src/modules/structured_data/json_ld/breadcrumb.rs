use serde::Serialize;

use super::site::SiteIdentity;
use super::types::SCHEMA_ORG_CONTEXT;

/// One step of a breadcrumb trail. `path` is site-relative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub name: String,
    pub path: String,
}

impl Crumb {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbListJsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub item_list_element: Vec<ListItem>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

pub fn breadcrumb_json_ld(items: &[Crumb], site: &SiteIdentity) -> BreadcrumbListJsonLd {
    BreadcrumbListJsonLd {
        context: SCHEMA_ORG_CONTEXT,
        node_type: "BreadcrumbList",
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(index, crumb)| ListItem {
                node_type: "ListItem",
                position: index + 1,
                name: crumb.name.clone(),
                item: site.absolute(&crumb.path),
            })
            .collect(),
    }
}
