use hashbrown::HashMap;

use crate::{
    battle::{
        Combatant,
        CombatantId,
    },
    tags::TagType,
};

/// Index from a tag's source to the source-linked tags it placed.
///
/// Maintained by the tag lifecycle. Every entry points at a stored tag of that type whose
/// `source_id` is the key, so removing a source never scans the whole field.
#[derive(Debug, Default, Clone)]
pub struct SourceLinkIndex {
    links: HashMap<CombatantId, Vec<(CombatantId, TagType)>>,
}

impl SourceLinkIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from stored tags, such as after restoring a snapshot.
    pub fn rebuild(combatants: &[Combatant]) -> Self {
        let mut index = Self::new();
        for combatant in combatants {
            for tag in combatant.tags() {
                if !tag.tag_type.behavior().is_source_linked() {
                    continue;
                }
                if let Some(source) = tag.source_id {
                    index.add(source, combatant.id, tag.tag_type);
                }
            }
        }
        index
    }

    pub fn add(&mut self, source: CombatantId, owner: CombatantId, tag_type: TagType) {
        let links = self.links.entry(source).or_default();
        debug_assert!(
            !links.contains(&(owner, tag_type)),
            "{tag_type:?} on {owner} is already linked to {source}"
        );
        links.push((owner, tag_type));
    }

    /// Drops one link. Returns whether it existed.
    pub fn remove(&mut self, source: CombatantId, owner: CombatantId, tag_type: TagType) -> bool {
        let Some(links) = self.links.get_mut(&source) else {
            return false;
        };
        let before = links.len();
        links.retain(|link| *link != (owner, tag_type));
        let removed = links.len() != before;
        if links.is_empty() {
            self.links.remove(&source);
        }
        removed
    }

    /// Takes every link from a source.
    pub fn take(&mut self, source: CombatantId) -> Vec<(CombatantId, TagType)> {
        self.links.remove(&source).unwrap_or_default()
    }

    pub fn links(&self, source: CombatantId) -> &[(CombatantId, TagType)] {
        self.links
            .get(&source)
            .map(|links| links.as_slice())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
