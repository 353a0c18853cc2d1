use std::rc::Rc;

use anyhow::Result;
use battler_data::{
    Boost,
    MoveCategory,
    MoveData,
    Type,
};
use battler_effects::{
    battle::{
        CombatantId,
        CoreBattle,
        core_battle_actions,
    },
    config::{
        BaseDamageRandomization,
        SpeedSortTieResolution,
    },
    damage::{
        HitInfo,
        calculate_and_apply_hit,
    },
};
use battler_test_utils::{
    TestBattleBuilder,
    assert_new_logs_eq,
    get_controlled_rng_for_battle,
    test_move,
    uniform_stats,
};

fn builder(attacker_ability: &str, defender_ability: &str) -> TestBattleBuilder {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_base_damage_randomization(BaseDamageRandomization::Max)
        .with_speed_sort_tie_resolution(SpeedSortTieResolution::Keep)
        .add_combatant(0, "Charmander", &[Type::Fire], uniform_stats(100))
        .with_ability(attacker_ability)
        .add_combatant(1, "Eevee", &[Type::Normal], uniform_stats(100))
        .with_ability(defender_ability)
}

fn make_battle(attacker_ability: &str, defender_ability: &str) -> Result<CoreBattle> {
    builder(attacker_ability, defender_ability).build()
}

fn damage_dealt(
    battle: &mut CoreBattle,
    attacker: CombatantId,
    defender: CombatantId,
    move_data: MoveData,
) -> Result<u16> {
    // Restore the defender so earlier hits never cap the damage.
    let target = battle.combatant_mut(defender)?;
    target.hp = target.max_hp();
    get_controlled_rng_for_battle(battle)
        .unwrap()
        .fake_next_values([1]);
    let mut context = battle.context();
    let outcome = calculate_and_apply_hit(
        &mut context,
        attacker,
        defender,
        Rc::new(move_data),
        HitInfo::single(),
    )?;
    Ok(outcome.damage)
}

fn tackle() -> MoveData {
    test_move("Tackle", MoveCategory::Physical, Type::Normal, 80)
}

/// Neutral against every type used here, and never a same-type move.
fn karate_chop() -> MoveData {
    test_move("Karate Chop", MoveCategory::Physical, Type::Fighting, 80)
}

fn ember() -> MoveData {
    test_move("Ember", MoveCategory::Physical, Type::Fire, 80)
}

#[test]
fn intimidate_lowers_attack_of_each_opponent_on_entry() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_base_damage_randomization(BaseDamageRandomization::Max)
        .with_speed_sort_tie_resolution(SpeedSortTieResolution::Keep)
        .add_combatant(0, "Gyarados", &[Type::Water], uniform_stats(100))
        .with_ability("Intimidate")
        .benched()
        .add_combatant(1, "Eevee", &[Type::Normal], uniform_stats(100))
        .add_combatant(1, "Vulpix", &[Type::Fire], uniform_stats(100))
        .add_combatant(1, "Pidgey", &[Type::Normal], uniform_stats(100))
        .benched()
        .build()
        .unwrap();
    {
        let mut context = battle.context();
        core_battle_actions::summon(&mut context, CombatantId(0)).unwrap();
    }
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:0|Intimidate",
            "boost|mon:1|Atk:-1",
            "message|mon:1|Eevee's Atk fell!",
            "boost|mon:2|Atk:-1",
            "message|mon:2|Vulpix's Atk fell!",
        ],
    );
    assert!(battle.combatant(CombatantId(0)).unwrap().active);
    assert_eq!(battle.combatant(CombatantId(1)).unwrap().boost(Boost::Atk), -1);
    assert_eq!(battle.combatant(CombatantId(3)).unwrap().boost(Boost::Atk), 0);

    // 100 * 2/3 attack.
    assert_eq!(
        damage_dealt(&mut battle, CombatantId(1), CombatantId(0), karate_chop()).unwrap(),
        25
    );
}

#[test]
fn intimidate_is_silent_without_opponents() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_combatant(0, "Gyarados", &[Type::Water], uniform_stats(100))
        .with_ability("Intimidate")
        .add_combatant(1, "Eevee", &[Type::Normal], uniform_stats(100))
        .benched()
        .build()
        .unwrap();
    {
        let mut context = battle.context();
        core_battle_actions::summon(&mut context, CombatantId(0)).unwrap();
    }
    assert_new_logs_eq(&mut battle, &[]);
}

#[test]
fn defeatist_halves_attack_at_half_hp() {
    let mut battle = builder("Defeatist", "No Ability").with_hp(51).build().unwrap();
    assert_eq!(
        damage_dealt(&mut battle, CombatantId(0), CombatantId(1), tackle()).unwrap(),
        37
    );

    battle.combatant_mut(CombatantId(0)).unwrap().hp = 50;
    assert_eq!(
        damage_dealt(&mut battle, CombatantId(0), CombatantId(1), tackle()).unwrap(),
        19
    );
}

#[test]
fn blaze_boosts_fire_moves_at_low_hp() {
    let mut battle = make_battle("Blaze", "No Ability").unwrap();
    assert_eq!(
        damage_dealt(&mut battle, CombatantId(0), CombatantId(1), ember()).unwrap(),
        55
    );

    battle.combatant_mut(CombatantId(0)).unwrap().hp = 33;
    assert_eq!(
        damage_dealt(&mut battle, CombatantId(0), CombatantId(1), ember()).unwrap(),
        82
    );
    assert_eq!(
        damage_dealt(&mut battle, CombatantId(0), CombatantId(1), tackle()).unwrap(),
        37
    );
}

#[test]
fn huge_power_doubles_attack() {
    let mut battle = make_battle("Huge Power", "No Ability").unwrap();
    assert_eq!(
        damage_dealt(&mut battle, CombatantId(0), CombatantId(1), tackle()).unwrap(),
        72
    );
    let swift = test_move("Swift", MoveCategory::Special, Type::Normal, 80);
    assert_eq!(
        damage_dealt(&mut battle, CombatantId(0), CombatantId(1), swift).unwrap(),
        37
    );
}

#[test]
fn unaware_ignores_opponent_stat_stages() {
    let mut battle = make_battle("No Ability", "Unaware").unwrap();
    battle
        .combatant_mut(CombatantId(0))
        .unwrap()
        .boosts
        .add(Boost::Atk, 2);
    assert_eq!(
        damage_dealt(&mut battle, CombatantId(0), CombatantId(1), tackle()).unwrap(),
        37
    );

    let mut battle = make_battle("No Ability", "No Ability").unwrap();
    battle
        .combatant_mut(CombatantId(0))
        .unwrap()
        .boosts
        .add(Boost::Atk, 2);
    assert_eq!(
        damage_dealt(&mut battle, CombatantId(0), CombatantId(1), tackle()).unwrap(),
        72
    );
}

#[test]
fn unaware_attacker_ignores_defensive_stages() {
    let mut battle = make_battle("Unaware", "No Ability").unwrap();
    battle
        .combatant_mut(CombatantId(1))
        .unwrap()
        .boosts
        .add(Boost::Def, 2);
    assert_eq!(
        damage_dealt(&mut battle, CombatantId(0), CombatantId(1), tackle()).unwrap(),
        37
    );
}

#[test]
fn sword_of_ruin_lowers_defense_of_others() {
    let mut battle = make_battle("Sword of Ruin", "No Ability").unwrap();
    // 75 defense.
    assert_eq!(
        damage_dealt(&mut battle, CombatantId(0), CombatantId(1), tackle()).unwrap(),
        48
    );
    // The holder's own defense is untouched.
    assert_eq!(
        damage_dealt(&mut battle, CombatantId(1), CombatantId(0), karate_chop()).unwrap(),
        37
    );
}

#[test]
fn ruin_effects_do_not_stack() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_base_damage_randomization(BaseDamageRandomization::Max)
        .with_speed_sort_tie_resolution(SpeedSortTieResolution::Keep)
        .add_combatant(0, "Chien-Pao", &[Type::Dark], uniform_stats(100))
        .with_ability("Sword of Ruin")
        .add_combatant(0, "Chien-Pao", &[Type::Dark], uniform_stats(100))
        .with_ability("Sword of Ruin")
        .add_combatant(1, "Eevee", &[Type::Normal], uniform_stats(100))
        .build()
        .unwrap();
    assert_eq!(
        damage_dealt(&mut battle, CombatantId(0), CombatantId(2), tackle()).unwrap(),
        48
    );
}

fn intimidate_into(defender_ability: &str) -> CoreBattle {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_speed_sort_tie_resolution(SpeedSortTieResolution::Keep)
        .add_combatant(0, "Gyarados", &[Type::Water], uniform_stats(100))
        .with_ability("Intimidate")
        .benched()
        .add_combatant(1, "Eevee", &[Type::Normal], uniform_stats(100))
        .with_ability(defender_ability)
        .build()
        .unwrap();
    {
        let mut context = battle.context();
        core_battle_actions::summon(&mut context, CombatantId(0)).unwrap();
    }
    battle
}

#[test]
fn clear_body_prevents_stat_drops_from_opponents() {
    let mut battle = intimidate_into("Clear Body");
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:0|Intimidate",
            "ability|mon:1|Clear Body",
            "message|mon:1|Eevee's Clear Body prevents lowering its stats!",
        ],
    );
    assert_eq!(battle.combatant(CombatantId(1)).unwrap().boost(Boost::Atk), 0);

    let mut context = battle.context();
    assert_eq!(
        core_battle_actions::boost(
            &mut context,
            CombatantId(1),
            Boost::Spe,
            -2,
            Some(CombatantId(0)),
        )
        .unwrap(),
        0
    );
}

#[test]
fn clear_body_allows_raises_and_self_inflicted_drops() {
    let mut battle = intimidate_into("Clear Body");
    assert_eq!(battle.new_logs().count(), 3);
    {
        let mut context = battle.context();
        assert_eq!(
            core_battle_actions::boost(
                &mut context,
                CombatantId(1),
                Boost::Atk,
                2,
                Some(CombatantId(0)),
            )
            .unwrap(),
            2
        );
        assert_eq!(
            core_battle_actions::boost(
                &mut context,
                CombatantId(1),
                Boost::Def,
                -1,
                Some(CombatantId(1)),
            )
            .unwrap(),
            -1
        );
    }
    assert_new_logs_eq(
        &mut battle,
        &[
            "boost|mon:1|Atk:+2",
            "message|mon:1|Eevee's Atk rose!",
            "boost|mon:1|Def:-1",
            "message|mon:1|Eevee's Def fell!",
        ],
    );
}

#[test]
fn hyper_cutter_only_protects_attack() {
    let mut battle = intimidate_into("Hyper Cutter");
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:0|Intimidate",
            "ability|mon:1|Hyper Cutter",
            "message|mon:1|Eevee's Hyper Cutter prevents lowering its Atk!",
        ],
    );
    {
        let mut context = battle.context();
        assert_eq!(
            core_battle_actions::boost(
                &mut context,
                CombatantId(1),
                Boost::Def,
                -1,
                Some(CombatantId(0)),
            )
            .unwrap(),
            -1
        );
    }
    assert_new_logs_eq(
        &mut battle,
        &["boost|mon:1|Def:-1", "message|mon:1|Eevee's Def fell!"],
    );
}

#[test]
fn ignored_clear_body_does_not_prevent_drops() {
    let mut battle = intimidate_into("Clear Body");
    assert_eq!(battle.new_logs().count(), 3);
    battle.field.suppression.set_ignoring_abilities(true);
    {
        let mut context = battle.context();
        assert_eq!(
            core_battle_actions::boost(
                &mut context,
                CombatantId(1),
                Boost::Atk,
                -1,
                Some(CombatantId(0)),
            )
            .unwrap(),
            -1
        );
    }
    assert_eq!(battle.combatant(CombatantId(1)).unwrap().boost(Boost::Atk), -1);
}
