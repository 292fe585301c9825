use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind, EntityList};
use crate::platform::SocialLinks;
use crate::ConfigError;

/// Whether the submission should go through AI processing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UseAi {
    #[default]
    Yes,
    No,
}

impl UseAi {
    #[must_use]
    pub fn is_yes(self) -> bool {
        matches!(self, UseAi::Yes)
    }
}

impl std::fmt::Display for UseAi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UseAi::Yes => write!(f, "yes"),
            UseAi::No => write!(f, "no"),
        }
    }
}

/// Editable form state: the brand plus its influencer and competitor lists.
#[derive(Debug, Clone, Default)]
pub struct BrandForm {
    pub brand_name: String,
    pub influencers: EntityList,
    pub competitors: EntityList,
    pub use_ai: UseAi,
}

impl BrandForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to the list holding entities of `kind`.
    pub fn list_mut(&mut self, kind: EntityKind) -> &mut EntityList {
        match kind {
            EntityKind::Influencer => &mut self.influencers,
            EntityKind::Competitor => &mut self.competitors,
        }
    }

    #[must_use]
    pub fn list(&self, kind: EntityKind) -> &EntityList {
        match kind {
            EntityKind::Influencer => &self.influencers,
            EntityKind::Competitor => &self.competitors,
        }
    }

    /// Builds the submission payload: trimmed brand name, entities with a
    /// blank name dropped. Entity names themselves are kept verbatim.
    #[must_use]
    pub fn curator_list(&self) -> CuratorList {
        CuratorList {
            brand_name: self.brand_name.trim().to_string(),
            influencers: self.influencers.named().map(CuratorEntry::from).collect(),
            competitors: self.competitors.named().map(CuratorEntry::from).collect(),
            use_ai: self.use_ai,
        }
    }
}

/// One named influencer or competitor as it leaves the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratorEntry {
    pub name: String,
    #[serde(default)]
    pub links: SocialLinks,
}

impl From<&Entity> for CuratorEntry {
    fn from(entity: &Entity) -> Self {
        Self {
            name: entity.name.clone(),
            links: entity.social_links.clone(),
        }
    }
}

/// The validated, filtered payload handed to the submission backend and the
/// CSV serializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CuratorList {
    pub brand_name: String,
    pub influencers: Vec<CuratorEntry>,
    pub competitors: Vec<CuratorEntry>,
    pub use_ai: UseAi,
}

impl CuratorList {
    /// All entries tagged with their kind, influencers first.
    pub fn entries(&self) -> impl Iterator<Item = (EntityKind, &CuratorEntry)> {
        self.influencers
            .iter()
            .map(|e| (EntityKind::Influencer, e))
            .chain(self.competitors.iter().map(|e| (EntityKind::Competitor, e)))
    }
}

/// On-disk representation of a [`BrandForm`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormFile {
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub use_ai: UseAi,
    #[serde(default)]
    pub influencers: Vec<CuratorEntry>,
    #[serde(default)]
    pub competitors: Vec<CuratorEntry>,
}

impl From<FormFile> for BrandForm {
    fn from(file: FormFile) -> Self {
        let mut form = BrandForm {
            brand_name: file.brand_name,
            use_ai: file.use_ai,
            ..BrandForm::default()
        };
        for entry in file.influencers {
            form.influencers.push(entry.name, entry.links);
        }
        for entry in file.competitors {
            form.competitors.push(entry.name, entry.links);
        }
        form
    }
}

/// Parse a form from YAML text.
///
/// Does not validate the brand name; that happens on submit.
///
/// # Errors
///
/// Returns [`ConfigError::FormFileParse`] if the YAML does not match the form
/// shape (including unknown platforms).
pub fn parse_form(content: &str) -> Result<BrandForm, ConfigError> {
    let file: FormFile = serde_yaml::from_str(content).map_err(ConfigError::FormFileParse)?;
    Ok(file.into())
}

/// Load a form from a YAML file.
///
/// # Errors
///
/// Returns [`ConfigError::FormFileIo`] if the file cannot be read, or
/// [`ConfigError::FormFileParse`] if it cannot be parsed.
pub fn load_form(path: &Path) -> Result<BrandForm, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FormFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_form(&content)
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
