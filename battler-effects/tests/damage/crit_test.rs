use std::rc::Rc;

use anyhow::Result;
use battler_data::{
    Boost,
    MoveCategory,
    MoveData,
    Status,
    Type,
};
use battler_effects::{
    battle::{
        CombatantId,
        CoreBattle,
    },
    config::{
        BaseDamageRandomization,
        SpeedSortTieResolution,
    },
    damage::{
        HitInfo,
        HitOutcome,
        calculate_and_apply_hit,
    },
    tags::{
        AddTagOptions,
        TagType,
        add_tag,
    },
};
use battler_test_utils::{
    TestBattleBuilder,
    assert_new_logs_eq,
    get_controlled_rng_for_battle,
    test_move,
    uniform_stats,
};

fn make_battle(attacker_ability: &str, defender_ability: &str) -> Result<CoreBattle> {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_base_damage_randomization(BaseDamageRandomization::Max)
        .with_speed_sort_tie_resolution(SpeedSortTieResolution::Keep)
        .add_combatant(0, "Absol", &[Type::Dark], uniform_stats(100))
        .with_ability(attacker_ability)
        .add_combatant(1, "Eevee", &[Type::Normal], uniform_stats(100))
        .with_ability(defender_ability)
        .build()
}

fn slash() -> MoveData {
    test_move("Slash", MoveCategory::Physical, Type::Normal, 80)
}

fn hit(battle: &mut CoreBattle, move_data: MoveData, rolls: &[u64]) -> Result<HitOutcome> {
    get_controlled_rng_for_battle(battle)
        .unwrap()
        .fake_next_values(rolls.iter().copied());
    let mut context = battle.context();
    calculate_and_apply_hit(
        &mut context,
        CombatantId(0),
        CombatantId(1),
        Rc::new(move_data),
        HitInfo::single(),
    )
}

fn draws(battle: &mut CoreBattle) -> usize {
    get_controlled_rng_for_battle(battle)
        .unwrap()
        .sequence_count()
}

#[test]
fn critical_hit_multiplies_damage() {
    let mut battle = make_battle("No Ability", "No Ability").unwrap();
    let outcome = hit(&mut battle, slash(), &[0]).unwrap();
    assert!(outcome.critical);
    assert_eq!(outcome.damage, 55);
    assert_new_logs_eq(
        &mut battle,
        &["damage|mon:1|hp:45/100", "message|mon:1|A critical hit!"],
    );
}

#[test]
fn base_chance_fails_for_nonzero_roll() {
    let mut battle = make_battle("No Ability", "No Ability").unwrap();
    let outcome = hit(&mut battle, slash(), &[8]).unwrap();
    assert!(!outcome.critical);
    assert_eq!(outcome.damage, 37);
}

#[test]
fn critical_hit_ignores_positive_defensive_stages() {
    let mut battle = make_battle("No Ability", "No Ability").unwrap();
    battle
        .combatant_mut(CombatantId(1))
        .unwrap()
        .boosts
        .add(Boost::Def, 2);

    let outcome = hit(&mut battle, slash(), &[1]).unwrap();
    assert!(!outcome.critical);
    assert_eq!(outcome.damage, 19);

    let outcome = hit(&mut battle, slash(), &[0]).unwrap();
    assert!(outcome.critical);
    assert_eq!(outcome.damage, 55);
}

#[test]
fn super_luck_raises_crit_stage() {
    // Stage 1 rolls against 1/8.
    let mut battle = make_battle("Super Luck", "No Ability").unwrap();
    let outcome = hit(&mut battle, slash(), &[8]).unwrap();
    assert!(outcome.critical);
}

#[test]
fn focus_energy_raises_crit_stage_by_two() {
    let mut battle = make_battle("No Ability", "No Ability").unwrap();
    {
        let mut context = battle.context();
        assert!(
            add_tag(
                &mut context,
                CombatantId(0),
                TagType::FocusEnergy,
                AddTagOptions::default(),
            )
            .unwrap()
        );
    }
    assert_new_logs_eq(
        &mut battle,
        &[
            "tagstart|mon:0|Focus Energy",
            "message|mon:0|Absol is getting pumped!",
        ],
    );

    // Stage 2 rolls against 1/2.
    let outcome = hit(&mut battle, slash(), &[2]).unwrap();
    assert!(outcome.critical);
}

#[test]
fn sniper_boosts_critical_hit_multiplier() {
    let mut battle = make_battle("Sniper", "No Ability").unwrap();
    let outcome = hit(&mut battle, slash(), &[0]).unwrap();
    assert!(outcome.critical);
    // 37.2 * 2.25
    assert_eq!(outcome.damage, 83);
}

#[test]
fn merciless_forces_critical_hit_without_rolling() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_base_damage_randomization(BaseDamageRandomization::Max)
        .add_combatant(0, "Toxapex", &[Type::Water], uniform_stats(100))
        .with_ability("Merciless")
        .add_combatant(1, "Eevee", &[Type::Normal], uniform_stats(100))
        .with_status(Status::Poison)
        .build()
        .unwrap();
    let outcome = hit(&mut battle, slash(), &[]).unwrap();
    assert!(outcome.critical);
    assert_eq!(draws(&mut battle), 0);
}

#[test]
fn battle_armor_blocks_guaranteed_critical_hits() {
    let mut battle = make_battle("No Ability", "Battle Armor").unwrap();
    let mut frost_breath = slash();
    frost_breath.will_crit = true;
    let outcome = hit(&mut battle, frost_breath, &[]).unwrap();
    assert!(!outcome.critical);
    assert_eq!(outcome.damage, 37);
    assert_eq!(draws(&mut battle), 0);
    assert_new_logs_eq(&mut battle, &["damage|mon:1|hp:63/100"]);
}
