use std::cell::{
    Cell,
    RefCell,
};

use anyhow::Result;
use battler_data::{
    Fraction,
    Id,
    MoveFlag,
    Status,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::{
        CombatantId,
        core_battle_actions,
    },
    effect::{
        EffectContext,
        EffectUnit,
    },
    hooks::{
        FaintParams,
        PostDamageParams,
    },
    tags::{
        self,
        TagType,
    },
};

/// A contact hit from a live attacker that is not the holder.
fn is_contact_from_other(context: &EffectContext, params: &PostDamageParams) -> bool {
    params.damage > 0
        && params.attacker != context.owner()
        && params.move_data.has_flag(MoveFlag::Contact)
        && context
            .combatant(params.attacker)
            .is_ok_and(|attacker| !attacker.is_fainted())
}

/// Hurts the attacker, announcing the holder's ability first. Returns whether the attacker was
/// hurt.
fn hurt_attacker(
    context: &mut EffectContext,
    attacker: CombatantId,
    ratio: Fraction,
) -> Result<bool> {
    let owner = context.owner();
    if core_battle_actions::indirect_damage_blocked(
        context.battle_context(),
        attacker,
        Some(owner),
    )? {
        return Ok(false);
    }
    let amount = ratio.of_at_least_one(context.combatant(attacker)?.max_hp());
    context.announce();
    let dealt =
        core_battle_actions::damage(context.battle_context(), attacker, amount, Some(owner))?;
    Ok(dealt > 0)
}

/// Damages attackers that make contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDamageEffect {
    pub ratio: Fraction,
    #[serde(skip)]
    hurt: Cell<bool>,
}

impl EffectUnit<PostDamageParams> for ContactDamageEffect {
    fn can_apply(&self, context: &EffectContext, params: &PostDamageParams) -> bool {
        is_contact_from_other(context, params)
    }

    fn apply(&self, context: &mut EffectContext, params: &mut PostDamageParams) -> Result<()> {
        self.hurt
            .set(hurt_attacker(context, params.attacker, self.ratio)?);
        Ok(())
    }

    fn trigger_message(
        &self,
        context: &EffectContext,
        params: &PostDamageParams,
        _: &str,
    ) -> Option<String> {
        self.hurt
            .get()
            .then(|| format!("{} was hurt!", context.name_of(params.attacker)))
    }

    fn reset(&self) {
        self.hurt.set(false);
    }
}

/// May inflict a status on attackers that make contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactStatusEffect {
    pub chance: Fraction,
    pub statuses: Vec<Status>,
}

impl EffectUnit<PostDamageParams> for ContactStatusEffect {
    fn can_apply(&self, context: &EffectContext, params: &PostDamageParams) -> bool {
        !self.statuses.is_empty()
            && is_contact_from_other(context, params)
            && context
                .combatant(params.attacker)
                .is_ok_and(|attacker| attacker.status.is_none())
    }

    fn apply(&self, context: &mut EffectContext, params: &mut PostDamageParams) -> Result<()> {
        let owner = context.owner();
        let battle = context.battle_context();
        if !battle.chance(
            self.chance.numerator() as u64,
            self.chance.denominator() as u64,
        ) {
            return Ok(());
        }
        let Some(status) = battle
            .sample_index(self.statuses.len())
            .and_then(|i| self.statuses.get(i).copied())
        else {
            return Ok(());
        };
        let attacker = params.attacker;
        let settable = battle.simulate(|battle| {
            core_battle_actions::set_status(battle, attacker, status, Some(owner))
        })?;
        if !settable {
            return Ok(());
        }
        context.announce();
        core_battle_actions::set_status(context.battle_context(), attacker, status, Some(owner))?;
        Ok(())
    }
}

/// May attach a tag to attackers that make contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactTagEffect {
    pub tag: TagType,
    pub chance: Fraction,
}

impl EffectUnit<PostDamageParams> for ContactTagEffect {
    fn can_apply(&self, context: &EffectContext, params: &PostDamageParams) -> bool {
        is_contact_from_other(context, params)
            && context
                .combatant(params.attacker)
                .is_ok_and(|attacker| !attacker.has_tag(self.tag))
    }

    fn apply(&self, context: &mut EffectContext, params: &mut PostDamageParams) -> Result<()> {
        let owner = context.owner();
        let battle = context.battle_context();
        if !battle.chance(
            self.chance.numerator() as u64,
            self.chance.denominator() as u64,
        ) {
            return Ok(());
        }
        let options = tags::AddTagOptions {
            source_id: Some(owner),
            ..Default::default()
        };
        let attacker = params.attacker;
        let addable = battle.simulate(|battle| {
            tags::add_tag(battle, attacker, self.tag, options.clone())
        })?;
        if !addable {
            return Ok(());
        }
        context.announce();
        tags::add_tag(context.battle_context(), attacker, self.tag, options)?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
struct StealScratch {
    /// Indices into the defender's items that can be taken.
    candidates: Vec<usize>,
    stolen: Option<Id>,
}

/// Steals an item from the target after a damaging hit, if the holder has none.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct StealHeldItemEffect {
    #[serde(skip)]
    scratch: RefCell<StealScratch>,
}

impl EffectUnit<PostDamageParams> for StealHeldItemEffect {
    fn can_apply(&self, context: &EffectContext, params: &PostDamageParams) -> bool {
        if params.damage == 0 || params.defender == context.owner() {
            return false;
        }
        if !context
            .owner_combatant()
            .is_ok_and(|owner| owner.items.is_empty())
        {
            return false;
        }
        let candidates = match context.combatant(params.defender) {
            Ok(defender) => defender
                .items
                .iter()
                .enumerate()
                .filter(|(_, item)| item.transferable)
                .map(|(i, _)| i)
                .collect::<Vec<_>>(),
            Err(_) => return false,
        };
        if candidates.is_empty() {
            return false;
        }
        self.scratch.borrow_mut().candidates = candidates;
        true
    }

    fn apply(&self, context: &mut EffectContext, params: &mut PostDamageParams) -> Result<()> {
        let candidates = self.scratch.borrow().candidates.clone();
        let Some(index) = context
            .battle_context()
            .sample_index(candidates.len())
            .and_then(|i| candidates.get(i).copied())
        else {
            return Ok(());
        };
        let owner = context.owner();
        let stolen = core_battle_actions::transfer_item(
            context.battle_context(),
            params.defender,
            owner,
            index,
        )?;
        self.scratch.borrow_mut().stolen = stolen;
        Ok(())
    }

    fn trigger_message(
        &self,
        context: &EffectContext,
        params: &PostDamageParams,
        _: &str,
    ) -> Option<String> {
        let scratch = self.scratch.borrow();
        let item = scratch.stolen.as_ref()?;
        Some(format!(
            "{} stole {}'s {item}!",
            context.name_of(context.owner()),
            context.name_of(params.defender)
        ))
    }

    fn reset(&self) {
        *self.scratch.borrow_mut() = StealScratch::default();
    }
}

/// Damages the attacker that knocked out the holder with a contact move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostFaintContactDamageEffect {
    pub ratio: Fraction,
    #[serde(skip)]
    hurt: Cell<bool>,
}

impl EffectUnit<FaintParams> for PostFaintContactDamageEffect {
    fn can_apply(&self, context: &EffectContext, params: &FaintParams) -> bool {
        let (Some(attacker), Some(move_data)) = (params.attacker, &params.move_data) else {
            return false;
        };
        attacker != context.owner()
            && move_data.has_flag(MoveFlag::Contact)
            && context
                .combatant(attacker)
                .is_ok_and(|attacker| !attacker.is_fainted())
    }

    fn apply(&self, context: &mut EffectContext, params: &mut FaintParams) -> Result<()> {
        if let Some(attacker) = params.attacker {
            self.hurt.set(hurt_attacker(context, attacker, self.ratio)?);
        }
        Ok(())
    }

    fn trigger_message(
        &self,
        context: &EffectContext,
        params: &FaintParams,
        _: &str,
    ) -> Option<String> {
        if !self.hurt.get() {
            return None;
        }
        params
            .attacker
            .map(|attacker| format!("{} was hurt!", context.name_of(attacker)))
    }

    fn reset(&self) {
        self.hurt.set(false);
    }
}
