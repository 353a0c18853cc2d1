use std::rc::Rc;

use anyhow::Result;
use battler_data::{
    Id,
    MoveData,
};

use crate::{
    battle::{
        BattleContext,
        CombatantId,
    },
    common::BooleanHolder,
    hooks::{
        Hook,
        TagParams,
        run_hook_on_side_of,
    },
    log::{
        Notification,
        NotificationKind,
    },
    tags::{
        BattlerTag,
        LapseCategory,
        TagContext,
        TagDuration,
        TagType,
    },
};

/// Options for [`add_tag`].
#[derive(Debug, Default, Clone)]
pub struct AddTagOptions {
    /// Overrides the tag's default duration.
    pub duration: Option<TagDuration>,
    pub source_move: Option<Id>,
    pub source_id: Option<CombatantId>,
}

/// What happened during [`lapse_tags`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LapseOutcome {
    /// Tags removed, in the order they lapsed.
    pub removed: Vec<TagType>,
    /// Some lapse stopped the owner's move.
    pub move_cancelled: bool,
}

fn notify_tag(
    context: &mut BattleContext,
    kind: NotificationKind,
    target: CombatantId,
    tag_type: TagType,
) {
    if tag_type.behavior().is_silent() {
        return;
    }
    context.notify(Notification::new(kind, Some(target), tag_type.name()));
}

/// Takes a tag out of storage, along with its position.
fn take_tag(
    context: &mut BattleContext,
    target: CombatantId,
    tag_type: TagType,
) -> Result<Option<(usize, BattlerTag)>> {
    let tags = &mut context.combatant_mut(target)?.tags;
    Ok(tags
        .iter()
        .position(|tag| tag.tag_type == tag_type)
        .map(|index| (index, tags.remove(index))))
}

/// Puts a taken tag back where it was.
fn restore_tag(
    context: &mut BattleContext,
    target: CombatantId,
    index: usize,
    tag: BattlerTag,
) -> Result<()> {
    let tags = &mut context.combatant_mut(target)?.tags;
    debug_assert!(
        tags.iter().all(|stored| stored.tag_type != tag.tag_type),
        "{:?} was stored twice on {target}",
        tag.tag_type
    );
    let index = index.min(tags.len());
    tags.insert(index, tag);
    Ok(())
}

/// Discards a tag that has already been taken out of storage.
fn finish_removal(context: &mut BattleContext, target: CombatantId, tag: BattlerTag) -> Result<()> {
    let tag_type = tag.tag_type;
    let behavior = tag_type.behavior();
    if behavior.is_source_linked() {
        if let Some(source) = tag.source_id {
            context
                .battle_mut()
                .tag_sources_mut()
                .remove(source, target, tag_type);
        }
    }
    notify_tag(context, NotificationKind::TagEnd, target, tag_type);
    let mut tag_context = TagContext::new(context.reborrow(), target);
    behavior.on_remove(&mut tag_context, &tag)?;
    log::debug!("{tag_type:?} removed from {target}");
    Ok(())
}

/// Adds a tag to a combatant.
///
/// Returns whether the tag was added. A tag already present runs its overlap behavior instead, and
/// is never stored twice. A simulated add reports whether it would succeed without storing.
pub fn add_tag(
    context: &mut BattleContext,
    target: CombatantId,
    tag_type: TagType,
    options: AddTagOptions,
) -> Result<bool> {
    let behavior = tag_type.behavior();
    let combatant = context.combatant(target)?;
    if combatant.is_fainted() {
        return Ok(false);
    }

    if combatant.has_tag(tag_type) {
        if context.simulated() {
            return Ok(false);
        }
        if let Some((index, mut tag)) = take_tag(context, target, tag_type)? {
            let overlapped = {
                let mut tag_context = TagContext::new(context.reborrow(), target);
                behavior.on_overlap(&mut tag_context, &mut tag)
            };
            restore_tag(context, target, index, tag)?;
            overlapped?;
        }
        return Ok(false);
    }

    // Rolled durations are drawn only once the tag is known to land.
    let mut tag = BattlerTag::new(
        tag_type,
        behavior.lapse_categories().to_vec(),
        options.duration.unwrap_or(TagDuration::Indefinite),
    );
    tag.source_move = options.source_move;
    tag.source_id = options.source_id;

    if !behavior.can_add(&TagContext::new(context.reborrow(), target), &tag)? {
        return Ok(false);
    }

    let mut params = TagParams {
        target,
        source: options.source_id,
        tag_type,
        cancelled: BooleanHolder::new(false),
    };
    run_hook_on_side_of(context, Hook::TagImmunity, target, &mut params)?;
    if params.cancelled.get() {
        log::debug!("{tag_type:?} on {target} blocked by tag immunity");
        return Ok(false);
    }

    if context.simulated() {
        return Ok(true);
    }

    if options.duration.is_none() {
        tag.remaining_turns = behavior.initial_duration(context);
    }
    notify_tag(context, NotificationKind::TagStart, target, tag_type);
    {
        let mut tag_context = TagContext::new(context.reborrow(), target);
        behavior.on_add(&mut tag_context, &mut tag)?;
    }

    if behavior.is_source_linked() {
        if let Some(source) = tag.source_id {
            context
                .battle_mut()
                .tag_sources_mut()
                .add(source, target, tag_type);
        }
    }
    log::debug!("{tag_type:?} added to {target} for {:?}", tag.remaining_turns);
    let tags = &mut context.combatant_mut(target)?.tags;
    tags.push(tag);
    debug_assert!(
        tags.iter().filter(|tag| tag.tag_type == tag_type).count() == 1,
        "{tag_type:?} was stored twice on {target}"
    );
    Ok(true)
}

pub fn get_tag<'c>(
    context: &'c BattleContext,
    target: CombatantId,
    tag_type: TagType,
) -> Result<Option<&'c BattlerTag>> {
    Ok(context.combatant(target)?.tag(tag_type))
}

pub fn has_tag(context: &BattleContext, target: CombatantId, tag_type: TagType) -> Result<bool> {
    Ok(context.combatant(target)?.has_tag(tag_type))
}

/// Tags on a combatant that match a predicate.
pub fn find_tags<'c, F>(
    context: &'c BattleContext,
    target: CombatantId,
    predicate: F,
) -> Result<Vec<&'c BattlerTag>>
where
    F: Fn(&BattlerTag) -> bool,
{
    Ok(context
        .combatant(target)?
        .tags()
        .iter()
        .filter(|tag| predicate(tag))
        .collect())
}

/// Removes a tag. Returns whether it was present.
pub fn remove_tag(
    context: &mut BattleContext,
    target: CombatantId,
    tag_type: TagType,
) -> Result<bool> {
    if context.simulated() {
        return has_tag(context, target, tag_type);
    }
    match take_tag(context, target, tag_type)? {
        Some((_, tag)) => {
            finish_removal(context, target, tag)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Removes every tag matching a predicate. Returns the removed types.
pub fn find_and_remove_tags<F>(
    context: &mut BattleContext,
    target: CombatantId,
    predicate: F,
) -> Result<Vec<TagType>>
where
    F: Fn(&BattlerTag) -> bool,
{
    let tag_types = find_tags(context, target, predicate)?
        .into_iter()
        .map(|tag| tag.tag_type)
        .collect::<Vec<_>>();
    if context.simulated() {
        return Ok(tag_types);
    }
    let mut removed = Vec::with_capacity(tag_types.len());
    for tag_type in tag_types {
        if remove_tag(context, target, tag_type)? {
            removed.push(tag_type);
        }
    }
    Ok(removed)
}

/// Removes every tag on a combatant.
pub fn remove_all_tags(context: &mut BattleContext, target: CombatantId) -> Result<Vec<TagType>> {
    find_and_remove_tags(context, target, |_| true)
}

/// Removes every source-linked tag placed by `source`, wherever it is.
pub fn remove_tags_by_source_id(
    context: &mut BattleContext,
    source: CombatantId,
) -> Result<Vec<(CombatantId, TagType)>> {
    if context.simulated() {
        return Ok(context.battle().tag_sources().links(source).to_vec());
    }
    let links = context.battle_mut().tag_sources_mut().take(source);
    let mut removed = Vec::with_capacity(links.len());
    for (owner, tag_type) in links {
        match take_tag(context, owner, tag_type)? {
            Some((_, tag)) => {
                debug_assert_eq!(tag.source_id, Some(source));
                finish_removal(context, owner, tag)?;
                removed.push((owner, tag_type));
            }
            None => debug_assert!(false, "{tag_type:?} on {owner} was linked but not stored"),
        }
    }
    Ok(removed)
}

/// Moves every source-linked tag placed by `from` to be sourced from `to`.
///
/// Used when a source is replaced but its effects persist.
pub fn transfer_tags_by_source_id(
    context: &mut BattleContext,
    from: CombatantId,
    to: CombatantId,
) -> Result<usize> {
    if context.simulated() {
        return Ok(context.battle().tag_sources().links(from).len());
    }
    context.combatant(to)?;
    let links = context.battle_mut().tag_sources_mut().take(from);
    for (owner, tag_type) in &links {
        let tags = &mut context.combatant_mut(*owner)?.tags;
        if let Some(tag) = tags.iter_mut().find(|tag| tag.tag_type == *tag_type) {
            tag.source_id = Some(to);
        }
        context
            .battle_mut()
            .tag_sources_mut()
            .add(to, *owner, *tag_type);
    }
    Ok(links.len())
}

fn lapse_matching(
    context: &mut BattleContext,
    target: CombatantId,
    category: LapseCategory,
    current_move: Option<Rc<MoveData>>,
) -> Result<LapseOutcome> {
    let mut outcome = LapseOutcome::default();
    if context.simulated() {
        return Ok(outcome);
    }
    if category == LapseCategory::FaintOnly {
        outcome.removed = remove_all_tags(context, target)?;
        return Ok(outcome);
    }

    let tag_types = context
        .combatant(target)?
        .tags()
        .iter()
        .filter(|tag| tag.lapses_on(category))
        .map(|tag| tag.tag_type)
        .collect::<Vec<_>>();
    for tag_type in tag_types {
        // An earlier lapse may have removed the tag.
        let Some((index, mut tag)) = take_tag(context, target, tag_type)? else {
            continue;
        };
        let before = tag.remaining_turns;
        let (survives, move_cancelled) = {
            let mut tag_context =
                TagContext::new(context.reborrow(), target).with_move(current_move.clone());
            let survives = tag_type
                .behavior()
                .lapse(&mut tag_context, &mut tag, category);
            (survives, tag_context.move_cancelled.get())
        };
        debug_assert!(
            match (before.turns(), tag.remaining_turns.turns()) {
                (Some(before), Some(after)) => after <= before,
                (None, None) => true,
                _ => false,
            },
            "{tag_type:?} duration went from {before:?} to {:?}",
            tag.remaining_turns
        );
        outcome.move_cancelled |= move_cancelled;
        let survives = match survives {
            Ok(survives) => survives,
            Err(error) => {
                restore_tag(context, target, index, tag)?;
                return Err(error);
            }
        };

        // Fainting during the lapse clears the combatant's tags, so this one goes too.
        if survives && !context.combatant(target)?.is_fainted() {
            restore_tag(context, target, index, tag)?;
        } else {
            finish_removal(context, target, tag)?;
            outcome.removed.push(tag_type);
        }
    }
    Ok(outcome)
}

/// Lapses every tag on a combatant that lapses on `category`.
///
/// Tags whose lapse returns false are removed. No-op when simulated.
pub fn lapse_tags(
    context: &mut BattleContext,
    target: CombatantId,
    category: LapseCategory,
) -> Result<LapseOutcome> {
    lapse_matching(context, target, category, None)
}

/// Lapses tags around the owner's use of a move.
pub fn lapse_tags_with_move(
    context: &mut BattleContext,
    target: CombatantId,
    category: LapseCategory,
    move_data: Rc<MoveData>,
) -> Result<LapseOutcome> {
    lapse_matching(context, target, category, Some(move_data))
}

/// Lapses a single tag as [`LapseCategory::Custom`]. Returns whether it is still present.
pub fn lapse_tag(
    context: &mut BattleContext,
    target: CombatantId,
    tag_type: TagType,
) -> Result<bool> {
    if context.simulated() {
        return has_tag(context, target, tag_type);
    }
    let Some((index, mut tag)) = take_tag(context, target, tag_type)? else {
        return Ok(false);
    };
    let survives = {
        let mut tag_context = TagContext::new(context.reborrow(), target);
        tag_type
            .behavior()
            .lapse(&mut tag_context, &mut tag, LapseCategory::Custom)
    };
    let survives = match survives {
        Ok(survives) => survives,
        Err(error) => {
            restore_tag(context, target, index, tag)?;
            return Err(error);
        }
    };
    if survives && !context.combatant(target)?.is_fainted() {
        restore_tag(context, target, index, tag)?;
        Ok(true)
    } else {
        finish_removal(context, target, tag)?;
        Ok(false)
    }
}
