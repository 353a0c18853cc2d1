use std::rc::Rc;

use anyhow::Result;
use battler_data::{
    AbilityFlag,
    Identifiable,
};

use crate::{
    abilities::Ability,
    battle::{
        BattleContext,
        CombatantId,
        FieldScope,
        speed_sort,
    },
    config::SpeedSortTieResolution,
    effect::{
        EffectContext,
        EffectSource,
        EffectUnit,
    },
    hooks::{
        Hook,
        HookParams,
    },
    log::{
        Notification,
        NotificationKind,
    },
};

/// Decides whether an ability's effects may run right now.
///
/// An ability is inert while a move ignores abilities and it is ignorable, while its holder's
/// ability is suppressed, or while another combatant suppresses field abilities. The last two do
/// not apply to unsuppressable abilities, and field suppression does not apply to suppressors.
/// Fainted combatants only keep abilities that bypass fainting.
pub fn ability_is_active(
    context: &BattleContext,
    owner: CombatantId,
    ability: &Ability,
    passive: bool,
) -> Result<bool> {
    let battle = context.battle();
    let combatant = context.combatant(owner)?;
    if passive && combatant.passive_ability.is_none() {
        return Ok(false);
    }
    let suppression = &battle.field.suppression;
    if ability.has_flag(AbilityFlag::Ignorable) && suppression.ignoring_abilities() {
        return Ok(false);
    }
    let unsuppressable = ability.has_flag(AbilityFlag::Unsuppressable);
    if combatant.ability_suppressed && !unsuppressable {
        return Ok(false);
    }
    if suppression.suppressed_by_other(owner)
        && !ability.is_field_suppressor()
        && !unsuppressable
    {
        return Ok(false);
    }
    if combatant.is_fainted() && !ability.has_flag(AbilityFlag::BypassFaint) {
        return Ok(false);
    }
    for condition in ability.conditions() {
        if !condition.evaluate(battle, owner)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// The owner's abilities that can run right now, active first.
fn active_abilities(
    context: &BattleContext,
    owner: CombatantId,
) -> Result<Vec<(Rc<Ability>, bool)>> {
    let combatant = context.combatant(owner)?;
    let registry = context.battle().abilities();
    let active = registry.get(combatant.effective_ability())?;
    let passive = match &combatant.passive_ability {
        Some(passive) if passive != active.id() => Some(registry.get(passive)?),
        _ => None,
    };

    let mut abilities = Vec::with_capacity(2);
    if ability_is_active(context, owner, &active, false)? {
        abilities.push((active, false));
    }
    if let Some(passive) = passive {
        if ability_is_active(context, owner, &passive, true)? {
            abilities.push((passive, true));
        }
    }
    Ok(abilities)
}

/// Runs one unit against the shared params.
fn invoke<P>(
    context: &mut BattleContext,
    owner: CombatantId,
    source: EffectSource,
    unit: &dyn EffectUnit<P>,
    shows_notification: bool,
    params: &mut P,
) -> Result<bool> {
    let simulated = context.simulated();
    let display_name = match &source {
        EffectSource::Ability { name, .. } => Some(name.clone()),
        EffectSource::Tag(_) => None,
    };
    let mut effect_context = EffectContext::new(context.reborrow(), owner, source);
    if !unit.can_apply(&effect_context, params) {
        unit.reset();
        return Ok(false);
    }

    if let Some(name) = &display_name {
        if shows_notification && !simulated {
            effect_context.battle_context().notify_ability(owner, name);
        }
    }

    let applied = unit.apply(&mut effect_context, params);
    let message = if applied.is_ok() && !simulated {
        unit.trigger_message(
            &effect_context,
            params,
            display_name.as_deref().unwrap_or_default(),
        )
    } else {
        None
    };
    unit.reset();
    applied?;

    if let Some(message) = message {
        effect_context.battle_context().notify(Notification::new(
            NotificationKind::Message,
            Some(owner),
            message,
        ));
    }
    Ok(true)
}

/// Runs a hook for a single combatant.
///
/// Candidates are the owner's active ability, then its passive ability, then its tags. Every
/// candidate runs; cancellation is communicated through holders in `params`.
pub fn run_hook<P>(
    context: &mut BattleContext,
    hook: Hook,
    owner: CombatantId,
    params: &mut P,
) -> Result<()>
where
    P: HookParams,
{
    let mut applied = 0usize;
    for (ability, passive) in active_abilities(context, owner)? {
        for entry in ability.effects() {
            let Some(unit) = P::narrow_ability(hook, &entry.effect) else {
                continue;
            };
            if let Some(condition) = &entry.extra_condition {
                if !condition.evaluate(context.battle(), owner)? {
                    continue;
                }
            }
            let source = EffectSource::Ability {
                id: ability.id().clone(),
                name: ability.name().to_owned(),
                passive,
            };
            if invoke(
                context,
                owner,
                source,
                unit,
                entry.shows_notification,
                params,
            )? {
                log::trace!("{hook:?}: {} applied for {owner}", ability.name());
                applied += 1;
            }
        }
    }

    let tag_types = context
        .combatant(owner)?
        .tags()
        .iter()
        .map(|tag| tag.tag_type)
        .collect::<Vec<_>>();
    for tag_type in tag_types {
        // An earlier unit may have removed the tag.
        if !context.combatant(owner)?.has_tag(tag_type) {
            continue;
        }
        let Some(unit) = P::narrow_tag(hook, tag_type) else {
            continue;
        };
        if invoke(
            context,
            owner,
            EffectSource::Tag(tag_type),
            unit,
            false,
            params,
        )? {
            log::trace!("{hook:?}: tag {tag_type:?} applied for {owner}");
            applied += 1;
        }
    }

    if applied > 0 {
        log::debug!("{hook:?} for {owner}: {applied} unit(s) applied");
    }
    Ok(())
}

/// Active combatants in scope, fastest first.
///
/// Ties are broken by the seeded random source, except in simulations, which keep id order.
pub fn speed_ordered(context: &mut BattleContext, scope: FieldScope) -> Vec<CombatantId> {
    let mut order = context
        .battle()
        .active_combatants()
        .filter(|combatant| match scope {
            FieldScope::All => true,
            FieldScope::Side(side) => combatant.side == side,
        })
        .map(|combatant| (combatant.id, combatant.speed()))
        .collect::<Vec<_>>();
    let tie_resolution = if context.simulated() {
        SpeedSortTieResolution::Keep
    } else {
        context.battle().options().speed_sort_tie_resolution
    };
    speed_sort(
        order.as_mut_slice(),
        context.battle_mut().prng_mut(),
        tie_resolution,
    );
    order.into_iter().map(|(id, _)| id).collect()
}

/// Runs a hook for every active combatant in scope, in speed order.
pub fn run_field_hook<P>(
    context: &mut BattleContext,
    hook: Hook,
    scope: FieldScope,
    params: &mut P,
) -> Result<()>
where
    P: HookParams,
{
    for owner in speed_ordered(context, scope) {
        // Fainting mid-dispatch takes a combatant off the field.
        if !context.combatant(owner)?.active {
            continue;
        }
        run_hook(context, hook, owner, params)?;
    }
    Ok(())
}

/// Runs a hook for a combatant and then for each of its active allies.
pub fn run_hook_on_side_of<P>(
    context: &mut BattleContext,
    hook: Hook,
    target: CombatantId,
    params: &mut P,
) -> Result<()>
where
    P: HookParams,
{
    run_hook(context, hook, target, params)?;
    let side = context.combatant(target)?.side;
    let allies = context
        .battle()
        .active_combatants()
        .filter(|combatant| combatant.side == side && combatant.id != target)
        .map(|combatant| combatant.id)
        .collect::<Vec<_>>();
    for ally in allies {
        run_hook(context, hook, ally, params)?;
    }
    Ok(())
}
