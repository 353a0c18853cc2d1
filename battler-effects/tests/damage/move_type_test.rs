use std::rc::Rc;

use anyhow::Result;
use battler_data::{
    MoveCategory,
    MoveData,
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
        HitResult,
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

fn make_battle(
    attacker_types: &[Type],
    attacker_ability: &str,
    defender: &str,
    defender_types: &[Type],
) -> Result<CoreBattle> {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_base_damage_randomization(BaseDamageRandomization::Max)
        .with_speed_sort_tie_resolution(SpeedSortTieResolution::Keep)
        .add_combatant(0, "Sylveon", attacker_types, uniform_stats(100))
        .with_ability(attacker_ability)
        .add_combatant(1, defender, defender_types, uniform_stats(100))
        .build()
}

fn hit(battle: &mut CoreBattle, move_data: MoveData) -> Result<HitOutcome> {
    get_controlled_rng_for_battle(battle)
        .unwrap()
        .fake_next_values([1]);
    let mut context = battle.context();
    calculate_and_apply_hit(
        &mut context,
        CombatantId(0),
        CombatantId(1),
        Rc::new(move_data),
        HitInfo::single(),
    )
}

fn tackle() -> MoveData {
    test_move("Tackle", MoveCategory::Physical, Type::Normal, 80)
}

fn ember() -> MoveData {
    test_move("Ember", MoveCategory::Physical, Type::Fire, 80)
}

#[test]
fn pixilate_turns_normal_moves_into_boosted_fairy_moves() {
    let mut battle =
        make_battle(&[Type::Fire], "Pixilate", "Misdreavus", &[Type::Ghost]).unwrap();
    let outcome = hit(&mut battle, tackle()).unwrap();
    assert_eq!(outcome.result, HitResult::Effective);
    assert_eq!(outcome.damage, 44);
    assert_new_logs_eq(&mut battle, &["damage|mon:1|hp:56/100"]);
}

#[test]
fn pixilate_leaves_other_types_alone() {
    let mut battle = make_battle(&[Type::Fire], "Pixilate", "Eevee", &[Type::Normal]).unwrap();
    assert_eq!(hit(&mut battle, ember()).unwrap().damage, 55);
}

#[test]
fn changed_type_decides_same_type_bonus() {
    let mut battle = make_battle(&[Type::Normal], "Pixilate", "Eevee", &[Type::Normal]).unwrap();
    assert_eq!(hit(&mut battle, tackle()).unwrap().damage, 44);

    let mut battle = make_battle(&[Type::Fairy], "Pixilate", "Eevee", &[Type::Normal]).unwrap();
    assert_eq!(hit(&mut battle, tackle()).unwrap().damage, 66);
}

#[test]
fn refrigerate_uses_ice_effectiveness() {
    let mut battle =
        make_battle(&[Type::Fire], "Refrigerate", "Dratini", &[Type::Dragon]).unwrap();
    let outcome = hit(&mut battle, tackle()).unwrap();
    assert_eq!(outcome.result, HitResult::SuperEffective);
    assert_eq!(outcome.damage, 88);
}

#[test]
fn normalize_makes_every_move_normal() {
    let mut battle =
        make_battle(&[Type::Fire], "Normalize", "Misdreavus", &[Type::Ghost]).unwrap();
    let outcome = hit(&mut battle, ember()).unwrap();
    assert_eq!(outcome.result, HitResult::NoEffect);
    assert_eq!(outcome.damage, 0);
    assert_new_logs_eq(
        &mut battle,
        &["message|mon:1|It doesn't affect Misdreavus..."],
    );

    // No longer a same-type move for a Fire attacker.
    let mut battle = make_battle(&[Type::Fire], "Normalize", "Eevee", &[Type::Normal]).unwrap();
    assert_eq!(hit(&mut battle, ember()).unwrap().damage, 44);
}

#[test]
fn typeless_moves_keep_their_power() {
    let mut battle = make_battle(&[Type::Fire], "Pixilate", "Eevee", &[Type::Normal]).unwrap();
    let mut struggle = tackle();
    struggle.typeless = true;
    assert_eq!(hit(&mut battle, struggle).unwrap().damage, 37);
}
