use std::rc::Rc;

use anyhow::Result;
use battler_data::MoveData;

use crate::{
    battle::{
        BattleContext,
        Combatant,
        CombatantId,
    },
    common::BooleanHolder,
    tags::{
        BattlerTag,
        LapseCategory,
        TagDuration,
    },
};

/// The context a tag behavior runs in.
pub struct TagContext<'c> {
    battle: BattleContext<'c>,
    owner: CombatantId,
    /// The move being used, for lapses around the owner's own move.
    pub current_move: Option<Rc<MoveData>>,
    /// Set by a lapse to stop the owner's move.
    pub move_cancelled: BooleanHolder,
}

impl<'c> TagContext<'c> {
    pub fn new(battle: BattleContext<'c>, owner: CombatantId) -> Self {
        Self {
            battle,
            owner,
            current_move: None,
            move_cancelled: BooleanHolder::new(false),
        }
    }

    pub fn with_move(mut self, current_move: Option<Rc<MoveData>>) -> Self {
        self.current_move = current_move;
        self
    }

    pub fn battle_context(&mut self) -> &mut BattleContext<'c> {
        &mut self.battle
    }

    pub fn owner(&self) -> CombatantId {
        self.owner
    }

    pub fn owner_combatant(&self) -> Result<&Combatant> {
        self.battle.combatant(self.owner)
    }

    /// Name of the owner, for messages.
    pub fn name(&self) -> Result<String> {
        self.battle.name_of(self.owner)
    }

    /// Queues a message about the owner.
    pub fn message<S>(&mut self, text: S)
    where
        S: Into<String>,
    {
        let owner = self.owner;
        self.battle.notify_message(Some(owner), text);
    }
}

/// The behavior shared by every tag of one [`TagType`][`crate::tags::TagType`].
///
/// Behaviors are stateless. Per-instance state lives on the [`BattlerTag`] handed to each call.
pub trait TagBehavior: Sync {
    /// Categories the tag lapses on.
    fn lapse_categories(&self) -> &'static [LapseCategory];

    /// Duration used when the caller does not provide one.
    fn initial_duration(&self, context: &mut BattleContext) -> TagDuration;

    /// Is the tag removed when its source leaves the field?
    fn is_source_linked(&self) -> bool {
        false
    }

    /// Silent tags queue no start or end notifications.
    fn is_silent(&self) -> bool {
        false
    }

    /// Decides whether the tag can be added. Must not mutate battle state.
    fn can_add(&self, context: &TagContext, tag: &BattlerTag) -> Result<bool> {
        let _ = (context, tag);
        Ok(true)
    }

    fn on_add(&self, context: &mut TagContext, tag: &mut BattlerTag) -> Result<()> {
        let _ = (context, tag);
        Ok(())
    }

    /// Runs when the tag is added again while already present.
    fn on_overlap(&self, context: &mut TagContext, tag: &mut BattlerTag) -> Result<()> {
        let _ = (context, tag);
        Ok(())
    }

    /// Runs the tag's characteristic action. Returns whether the tag survives.
    ///
    /// By default, counts down one turn.
    fn lapse(
        &self,
        context: &mut TagContext,
        tag: &mut BattlerTag,
        category: LapseCategory,
    ) -> Result<bool> {
        let _ = (context, category);
        Ok(tag.tick())
    }

    /// Runs exactly once, just before the tag is discarded.
    fn on_remove(&self, context: &mut TagContext, tag: &BattlerTag) -> Result<()> {
        let _ = (context, tag);
        Ok(())
    }
}
