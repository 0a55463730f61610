use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Section;

/// How a matched section is composed on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    #[default]
    Default,
    Hero,
    CardGrid,
    CtaSection,
    CtaBanner,
}

/// Layout directive for one section heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRule {
    #[serde(default)]
    pub layout: Layout,
    /// Card grid column count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Icon per child heading text, for card grids.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub icons: BTreeMap<String, String>,
}

impl SectionRule {
    pub const DEFAULT_COLUMNS: u8 = 3;

    pub fn columns(&self) -> u8 {
        self.columns.filter(|c| *c > 0).unwrap_or(Self::DEFAULT_COLUMNS)
    }
}

/// Heading text to layout mapping, e.g.
///
/// ```toml
/// [sections."## Services"]
/// layout = "card-grid"
/// columns = 2
///
/// [sections."## Services".icons]
/// Design = "pencil"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancementConfig {
    #[serde(default)]
    pub sections: BTreeMap<String, SectionRule>,
}

impl EnhancementConfig {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Rule for a section, matched on `## Heading` first and bare heading
    /// text second.
    pub fn rule_for(&self, section: &Section) -> Option<&SectionRule> {
        self.sections
            .get(&section.key())
            .or_else(|| self.sections.get(&section.heading))
    }
}
