use std::rc::Rc;

use anyhow::Result;
use battler_data::{
    Boost,
    BoostTable,
    Id,
    Identifiable,
    MoveData,
    Status,
    Terrain,
    Type,
    Weather,
};

use crate::{
    battle::{
        BattleContext,
        Combatant,
        CombatantId,
        FieldScope,
    },
    common::BooleanHolder,
    hooks::{
        CancelParams,
        FaintParams,
        Hook,
        StatStageChangeParams,
        StatusParams,
        TurnParams,
        WeatherParams,
        run_field_hook,
        run_hook,
        speed_ordered,
    },
    log::{
        Notification,
        NotificationKind,
    },
    tags::{
        self,
        LapseCategory,
        LapseOutcome,
        TagType,
    },
};

fn notify_hp(
    context: &mut BattleContext,
    kind: NotificationKind,
    target: CombatantId,
) -> Result<()> {
    let combatant = context.combatant(target)?;
    let text = format!("hp:{}/{}", combatant.hp, combatant.max_hp());
    context.notify(Notification::new(kind, Some(target), text));
    Ok(())
}

/// Subtracts HP. Returns the damage dealt.
///
/// Does not faint the target. When simulated, reports the damage that would be dealt.
pub fn apply_damage(context: &mut BattleContext, target: CombatantId, amount: u16) -> Result<u16> {
    let hp = context.combatant(target)?.hp;
    if hp == 0 || amount == 0 {
        return Ok(0);
    }
    let dealt = amount.min(hp);
    if context.simulated() {
        return Ok(dealt);
    }
    context.combatant_mut(target)?.hp = hp - dealt;
    notify_hp(context, NotificationKind::Damage, target)?;
    Ok(dealt)
}

/// Deals damage, fainting the target if it runs out of HP.
pub fn damage(
    context: &mut BattleContext,
    target: CombatantId,
    amount: u16,
    source: Option<CombatantId>,
) -> Result<u16> {
    let dealt = apply_damage(context, target, amount)?;
    if dealt > 0 && !context.simulated() && context.combatant(target)?.is_fainted() {
        faint(context, target, source, None)?;
    }
    Ok(dealt)
}

/// Does the target refuse damage that does not come from a move hitting directly?
pub fn indirect_damage_blocked(
    context: &mut BattleContext,
    target: CombatantId,
    source: Option<CombatantId>,
) -> Result<bool> {
    let mut params = CancelParams::new(target, source);
    run_hook(context, Hook::BlockNonDirectDamage, target, &mut params)?;
    Ok(params.cancelled.get())
}

/// Deals damage that does not come from a move hitting directly, which can be blocked.
pub fn apply_indirect_damage(
    context: &mut BattleContext,
    target: CombatantId,
    amount: u16,
    source: Option<CombatantId>,
) -> Result<u16> {
    if indirect_damage_blocked(context, target, source)? {
        return Ok(0);
    }
    damage(context, target, amount, source)
}

/// Restores HP. Returns the amount healed.
pub fn heal(context: &mut BattleContext, target: CombatantId, amount: u16) -> Result<u16> {
    let combatant = context.combatant(target)?;
    if amount == 0 || combatant.is_fainted() || combatant.is_full_hp() {
        return Ok(0);
    }
    let healed = amount.min(combatant.max_hp() - combatant.hp);
    if context.simulated() {
        return Ok(healed);
    }
    context.combatant_mut(target)?.hp += healed;
    notify_hp(context, NotificationKind::Heal, target)?;
    Ok(healed)
}

fn immune_to_status_by_type(combatant: &Combatant, status: Status) -> bool {
    match status {
        Status::Burn => combatant.has_type(Type::Fire),
        Status::Freeze => combatant.has_type(Type::Ice),
        Status::Paralysis => combatant.has_type(Type::Electric),
        Status::Poison | Status::BadPoison => {
            combatant.has_type(Type::Poison) || combatant.has_type(Type::Steel)
        }
        Status::Sleep => false,
    }
}

/// Gives a combatant a status. Returns whether it was (or, when simulated, would be) set.
///
/// Fails if the combatant already has a status or its types are immune. Otherwise the target's
/// PreSetStatus hooks may refuse it, and StatusApplied hooks run once it is set.
pub fn set_status(
    context: &mut BattleContext,
    target: CombatantId,
    status: Status,
    source: Option<CombatantId>,
) -> Result<bool> {
    let combatant = context.combatant(target)?;
    if combatant.is_fainted()
        || combatant.status.is_some()
        || immune_to_status_by_type(combatant, status)
    {
        return Ok(false);
    }

    let mut params = StatusParams {
        target,
        source,
        status,
        cancelled: BooleanHolder::new(false),
    };
    run_hook(context, Hook::PreSetStatus, target, &mut params)?;
    if params.cancelled.get() {
        return Ok(false);
    }
    if context.simulated() {
        return Ok(true);
    }

    context.combatant_mut(target)?.status = Some(status);
    context.notify(Notification::new(
        NotificationKind::Status,
        Some(target),
        format!("{status:?}"),
    ));
    log::debug!("{target} is now {status:?}");
    run_hook(context, Hook::StatusApplied, target, &mut params)?;
    Ok(true)
}

/// Clears a combatant's status. Returns the status that was cured.
pub fn cure_status(context: &mut BattleContext, target: CombatantId) -> Result<Option<Status>> {
    let status = context.combatant(target)?.status;
    if context.simulated() || status.is_none() {
        return Ok(status);
    }
    context.combatant_mut(target)?.status = None;
    context.notify(Notification::new(
        NotificationKind::Status,
        Some(target),
        "cured",
    ));
    Ok(status)
}

/// Changes a stat stage. Returns the change actually made after clamping.
///
/// The target's PreStatStageChange hooks may cancel the change before anything is applied.
pub fn boost(
    context: &mut BattleContext,
    target: CombatantId,
    boost: Boost,
    stages: i8,
    source: Option<CombatantId>,
) -> Result<i8> {
    let combatant = context.combatant(target)?;
    if combatant.is_fainted() || stages == 0 {
        return Ok(0);
    }

    let mut params = StatStageChangeParams {
        target,
        source,
        boost,
        stages,
        cancelled: BooleanHolder::new(false),
    };
    run_hook(context, Hook::PreStatStageChange, target, &mut params)?;
    if params.cancelled.get() {
        log::debug!("{boost:?} change on {target} prevented");
        return Ok(0);
    }

    let combatant = context.combatant(target)?;
    if context.simulated() {
        let current = combatant.boost(boost);
        let limit = BoostTable::MAX_STAGE;
        return Ok(current.saturating_add(stages).clamp(-limit, limit) - current);
    }

    let name = combatant.name.clone();
    let delta = context.combatant_mut(target)?.boosts.add(boost, stages);
    let message = match (delta, stages > 0) {
        (0, true) => format!("{name}'s {boost:?} won't go any higher!"),
        (0, false) => format!("{name}'s {boost:?} won't go any lower!"),
        (_, true) => format!("{name}'s {boost:?} rose!"),
        (_, false) => format!("{name}'s {boost:?} fell!"),
    };
    if delta != 0 {
        context.notify(Notification::new(
            NotificationKind::Boost,
            Some(target),
            format!("{boost:?}:{delta:+}"),
        ));
    }
    context.notify_message(Some(target), message);
    Ok(delta)
}

/// Changes the weather. Returns whether it changed.
///
/// Every active combatant's WeatherChange hooks run afterwards, in speed order.
pub fn set_weather(context: &mut BattleContext, weather: Option<Weather>) -> Result<bool> {
    let previous = context.battle().field.weather;
    if previous == weather {
        return Ok(false);
    }
    if context.simulated() {
        return Ok(true);
    }
    context.battle_mut().field.weather = weather;
    let text = match weather {
        Some(weather) => format!("{weather:?}"),
        None => "none".to_owned(),
    };
    context.notify(Notification::new(NotificationKind::Weather, None, text));
    log::debug!("weather changed from {previous:?} to {weather:?}");

    let mut params = WeatherParams { previous, weather };
    run_field_hook(context, Hook::WeatherChange, FieldScope::All, &mut params)?;
    Ok(true)
}

/// Changes the terrain. Returns whether it changed.
pub fn set_terrain(context: &mut BattleContext, terrain: Option<Terrain>) -> Result<bool> {
    if context.battle().field.terrain == terrain {
        return Ok(false);
    }
    if context.simulated() {
        return Ok(true);
    }
    context.battle_mut().field.terrain = terrain;
    let text = match terrain {
        Some(terrain) => format!("{terrain:?}"),
        None => "none".to_owned(),
    };
    context.notify(Notification::new(NotificationKind::Terrain, None, text));
    Ok(true)
}

/// Moves a held item from one combatant to another. Returns the item moved.
pub fn transfer_item(
    context: &mut BattleContext,
    from: CombatantId,
    to: CombatantId,
    index: usize,
) -> Result<Option<Id>> {
    context.combatant(to)?;
    let item = match context.combatant(from)?.items.get(index) {
        Some(item) if item.transferable => item.id.clone(),
        _ => return Ok(None),
    };
    if context.simulated() {
        return Ok(Some(item));
    }
    let item = context.combatant_mut(from)?.items.remove(index);
    let id = item.id.clone();
    context.combatant_mut(to)?.items.push(item);
    context.notify(Notification::new(
        NotificationKind::Item,
        Some(to),
        format!("{id}|from:mon:{from}"),
    ));
    Ok(Some(id))
}

/// Registers a combatant as suppressing every other combatant's ability.
pub fn add_field_suppressor(context: &mut BattleContext, id: CombatantId) {
    if context.simulated() {
        return;
    }
    if context.battle_mut().field.suppression.add_suppressor(id) {
        log::debug!("{id} suppresses field abilities");
    }
}

pub fn remove_field_suppressor(context: &mut BattleContext, id: CombatantId) -> bool {
    if context.simulated() {
        return false;
    }
    context.battle_mut().field.suppression.remove_suppressor(id)
}

/// Puts a combatant on the field and runs its Summon hooks.
pub fn summon(context: &mut BattleContext, target: CombatantId) -> Result<()> {
    if context.combatant(target)?.is_fainted() {
        return Ok(());
    }
    if !context.simulated() {
        context.combatant_mut(target)?.active = true;
    }
    let mut params = TurnParams {
        turn: context.battle().turn(),
    };
    run_hook(context, Hook::Summon, target, &mut params)
}

/// Takes a combatant off the field.
///
/// Its tags go away, as do the source-linked tags it placed on others and its field suppression.
pub fn leave_field(context: &mut BattleContext, target: CombatantId) -> Result<()> {
    if context.simulated() {
        return Ok(());
    }
    tags::remove_all_tags(context, target)?;
    tags::remove_tags_by_source_id(context, target)?;
    remove_field_suppressor(context, target);
    let combatant = context.combatant_mut(target)?;
    combatant.boosts.clear();
    combatant.ability_override = None;
    combatant.active = false;
    Ok(())
}

/// Faints a combatant that has run out of HP.
///
/// Faint hooks run while the combatant is still on the field, then every tag is removed and it
/// leaves the field. Fainting twice is a no-op.
pub fn faint(
    context: &mut BattleContext,
    target: CombatantId,
    attacker: Option<CombatantId>,
    move_data: Option<Rc<MoveData>>,
) -> Result<()> {
    if context.simulated() || !context.combatant(target)?.active {
        return Ok(());
    }
    context.notify(Notification::new(
        NotificationKind::Faint,
        Some(target),
        "",
    ));
    log::debug!("{target} fainted");

    let mut params = FaintParams {
        fainted: target,
        attacker,
        move_data,
    };
    run_hook(context, Hook::Faint, target, &mut params)?;
    tags::lapse_tags(context, target, LapseCategory::FaintOnly)?;
    leave_field(context, target)
}

/// Runs end-of-turn effects: TurnEnd hooks for the whole field, then every combatant's turn-end
/// tag lapses, both in speed order.
pub fn end_turn(context: &mut BattleContext) -> Result<()> {
    let mut params = TurnParams {
        turn: context.battle().turn(),
    };
    run_field_hook(context, Hook::TurnEnd, FieldScope::All, &mut params)?;
    for id in speed_ordered(context, FieldScope::All) {
        if !context.combatant(id)?.active {
            continue;
        }
        tags::lapse_tags(context, id, LapseCategory::OnTurnEnd)?;
    }
    if !context.simulated() {
        context.battle_mut().next_turn();
    }
    Ok(())
}

/// Runs the user's tag lapses before a move. Returns whether the move can go ahead.
pub fn before_move(
    context: &mut BattleContext,
    user: CombatantId,
    move_data: Rc<MoveData>,
) -> Result<bool> {
    let outcome =
        tags::lapse_tags_with_move(context, user, LapseCategory::OnOwnMove, move_data.clone())?;
    if outcome.move_cancelled || context.combatant(user)?.is_fainted() {
        return Ok(false);
    }
    if !context.simulated() {
        context.combatant_mut(user)?.last_move = Some(move_data.id().clone());
    }
    Ok(true)
}

/// Runs the user's tag lapses when its move's effect executes.
pub fn move_effect(
    context: &mut BattleContext,
    user: CombatantId,
    move_data: Rc<MoveData>,
) -> Result<LapseOutcome> {
    tags::lapse_tags_with_move(context, user, LapseCategory::OnMoveEffect, move_data)
}

/// Runs the user's tag lapses after a move.
pub fn after_move(
    context: &mut BattleContext,
    user: CombatantId,
    move_data: Rc<MoveData>,
) -> Result<LapseOutcome> {
    tags::lapse_tags_with_move(context, user, LapseCategory::AfterOwnMove, move_data)
}

/// Can the combatant switch out?
pub fn can_switch(context: &BattleContext, id: CombatantId) -> Result<bool> {
    let combatant = context.combatant(id)?;
    Ok(!combatant.has_tag(TagType::Trapped) && !combatant.has_tag(TagType::Bound))
}
