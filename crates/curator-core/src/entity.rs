use serde::{Deserialize, Serialize};

use crate::platform::{Platform, SocialLinks};

/// Identifier of an [`Entity`] within its [`EntityList`].
///
/// Ids come from a per-list sequence, so they are never reused even after the
/// entity they named has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which list an entity belongs to. Drives the `type` column of the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Influencer,
    Competitor,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Influencer => write!(f, "Influencer"),
            EntityKind::Competitor => write!(f, "Competitor"),
        }
    }
}

/// An influencer or competitor: a name plus per-platform profile links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub social_links: SocialLinks,
}

impl Entity {
    /// `true` when the trimmed name is empty. Such entities are kept while
    /// editing but dropped from submissions and exports.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// Ordered, growable list of entities.
///
/// Mutations addressed to an id that is not in the list are no-ops. Every
/// mutation that changes the contents bumps [`EntityList::revision`], so
/// observers can detect change without diffing.
#[derive(Debug, Clone, Default)]
pub struct EntityList {
    entities: Vec<Entity>,
    next_id: u64,
    revision: u64,
}

impl EntityList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entity with an empty name and no links and returns its id.
    pub fn add(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(Entity {
            id,
            name: String::new(),
            social_links: SocialLinks::default(),
        });
        self.revision += 1;
        id
    }

    /// Appends an entity that already has a name and links (form files).
    pub fn push(&mut self, name: impl Into<String>, social_links: SocialLinks) -> EntityId {
        let id = self.add();
        self.set_name(id, name);
        if let Some(entity) = self.find_mut(id) {
            entity.social_links = social_links;
        }
        id
    }

    pub fn remove(&mut self, id: EntityId) {
        let before = self.entities.len();
        self.entities.retain(|e| e.id != id);
        if self.entities.len() != before {
            self.revision += 1;
        }
    }

    pub fn set_name(&mut self, id: EntityId, name: impl Into<String>) {
        let name = name.into();
        if let Some(entity) = self.find_mut(id) {
            if entity.name != name {
                entity.name = name;
                self.revision += 1;
            }
        }
    }

    pub fn set_link(&mut self, id: EntityId, platform: Platform, url: impl Into<String>) {
        let url = url.into();
        if let Some(entity) = self.find_mut(id) {
            if entity.social_links.get(platform) != url {
                entity.social_links.set(platform, url);
                self.revision += 1;
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    /// Entities whose trimmed name is non-empty, in list order.
    pub fn named(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| !e.is_blank())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn find_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }
}

impl<'a> IntoIterator for &'a EntityList {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "entity_test.rs"]
mod tests;
