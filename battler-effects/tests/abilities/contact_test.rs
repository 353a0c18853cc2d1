use std::rc::Rc;

use anyhow::Result;
use battler_data::{
    Id,
    MoveCategory,
    MoveData,
    MoveFlag,
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
    tags::TagType,
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

fn tackle() -> MoveData {
    let mut move_data = test_move("Tackle", MoveCategory::Physical, Type::Normal, 80);
    move_data.flags.insert(MoveFlag::Contact);
    move_data
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

#[test]
fn rough_skin_damages_contact_attackers() {
    let mut battle = make_battle("No Ability", "Rough Skin").unwrap();
    hit(&mut battle, tackle(), &[1]).unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "damage|mon:1|hp:63/100",
            "ability|mon:1|Rough Skin",
            "damage|mon:0|hp:88/100",
            "message|mon:1|Charmander was hurt!",
        ],
    );
}

#[test]
fn rough_skin_ignores_non_contact_moves() {
    let mut battle = make_battle("No Ability", "Rough Skin").unwrap();
    let swift = test_move("Swift", MoveCategory::Special, Type::Normal, 80);
    hit(&mut battle, swift, &[1]).unwrap();
    assert_new_logs_eq(&mut battle, &["damage|mon:1|hp:63/100"]);
}

#[test]
fn magic_guard_attacker_is_not_hurt_by_rough_skin() {
    let mut battle = make_battle("Magic Guard", "Rough Skin").unwrap();
    hit(&mut battle, tackle(), &[1]).unwrap();
    assert_new_logs_eq(&mut battle, &["damage|mon:1|hp:63/100"]);
    assert_eq!(battle.combatant(CombatantId(0)).unwrap().hp, 100);
}

#[test]
fn rough_skin_activates_on_the_hit_that_knocks_out_holder() {
    let mut battle = builder("No Ability", "Rough Skin")
        .with_hp(10)
        .build()
        .unwrap();
    let outcome = hit(&mut battle, tackle(), &[1]).unwrap();
    assert!(outcome.fainted);
    assert_new_logs_eq(
        &mut battle,
        &[
            "damage|mon:1|hp:0/100",
            "ability|mon:1|Rough Skin",
            "damage|mon:0|hp:88/100",
            "message|mon:1|Charmander was hurt!",
            "faint|mon:1",
        ],
    );
}

#[test]
fn iron_barbs_activates_on_the_hit_that_knocks_out_holder() {
    let mut battle = builder("No Ability", "Iron Barbs")
        .with_hp(10)
        .build()
        .unwrap();
    hit(&mut battle, tackle(), &[1]).unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "damage|mon:1|hp:0/100",
            "ability|mon:1|Iron Barbs",
            "damage|mon:0|hp:88/100",
            "message|mon:1|Charmander was hurt!",
            "faint|mon:1",
        ],
    );
}

#[test]
fn static_activates_on_the_hit_that_knocks_out_holder() {
    let mut battle = builder("No Ability", "Static")
        .with_hp(10)
        .build()
        .unwrap();
    hit(&mut battle, tackle(), &[1, 0, 0]).unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "damage|mon:1|hp:0/100",
            "ability|mon:1|Static",
            "status|mon:0|Paralysis",
            "faint|mon:1",
        ],
    );
}

#[test]
fn aftermath_damages_attacker_that_knocked_out_holder() {
    let mut battle = builder("No Ability", "Aftermath")
        .with_hp(10)
        .build()
        .unwrap();
    let outcome = hit(&mut battle, tackle(), &[1]).unwrap();
    assert!(outcome.fainted);
    assert_new_logs_eq(
        &mut battle,
        &[
            "damage|mon:1|hp:0/100",
            "faint|mon:1",
            "ability|mon:1|Aftermath",
            "damage|mon:0|hp:75/100",
            "message|mon:1|Charmander was hurt!",
        ],
    );
}

#[test]
fn aftermath_ignores_non_contact_knockouts() {
    let mut battle = builder("No Ability", "Aftermath")
        .with_hp(10)
        .build()
        .unwrap();
    let swift = test_move("Swift", MoveCategory::Special, Type::Normal, 80);
    hit(&mut battle, swift, &[1]).unwrap();
    assert_new_logs_eq(&mut battle, &["damage|mon:1|hp:0/100", "faint|mon:1"]);
}

#[test]
fn static_paralyzes_contact_attacker_on_successful_roll() {
    let mut battle = make_battle("No Ability", "Static").unwrap();
    // No critical hit, the 30% roll succeeds, then the only status is picked.
    hit(&mut battle, tackle(), &[1, 0, 0]).unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "damage|mon:1|hp:63/100",
            "ability|mon:1|Static",
            "status|mon:0|Paralysis",
        ],
    );
    assert_eq!(
        battle.combatant(CombatantId(0)).unwrap().status,
        Some(Status::Paralysis)
    );
}

#[test]
fn static_stays_quiet_on_failed_roll() {
    let mut battle = make_battle("No Ability", "Static").unwrap();
    hit(&mut battle, tackle(), &[1, 99]).unwrap();
    assert_new_logs_eq(&mut battle, &["damage|mon:1|hp:63/100"]);
    assert_eq!(battle.combatant(CombatantId(0)).unwrap().status, None);
}

#[test]
fn static_is_not_announced_against_electric_attackers() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_base_damage_randomization(BaseDamageRandomization::Max)
        .add_combatant(0, "Pikachu", &[Type::Electric], uniform_stats(100))
        .add_combatant(1, "Eevee", &[Type::Normal], uniform_stats(100))
        .with_ability("Static")
        .build()
        .unwrap();
    hit(&mut battle, tackle(), &[1, 0, 0]).unwrap();
    assert_new_logs_eq(&mut battle, &["damage|mon:1|hp:63/100"]);
    assert_eq!(battle.combatant(CombatantId(0)).unwrap().status, None);
}

#[test]
fn cursed_body_disables_attackers_last_move() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_base_damage_randomization(BaseDamageRandomization::Max)
        .add_combatant(0, "Charmander", &[Type::Fire], uniform_stats(100))
        .with_last_move("Tackle")
        .add_combatant(1, "Eevee", &[Type::Normal], uniform_stats(100))
        .with_ability("Cursed Body")
        .build()
        .unwrap();
    hit(&mut battle, tackle(), &[1, 0]).unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "damage|mon:1|hp:63/100",
            "ability|mon:1|Cursed Body",
            "tagstart|mon:0|Disabled",
            "message|mon:0|Charmander's tackle was disabled!",
        ],
    );
    let attacker = battle.combatant(CombatantId(0)).unwrap();
    assert_matches::assert_matches!(attacker.tag(TagType::Disabled), Some(tag) => {
        assert_eq!(tag.source_id, Some(CombatantId(1)));
    });
}

#[test]
fn cursed_body_needs_a_last_move() {
    let mut battle = make_battle("No Ability", "Cursed Body").unwrap();
    hit(&mut battle, tackle(), &[1, 0]).unwrap();
    assert_new_logs_eq(&mut battle, &["damage|mon:1|hp:63/100"]);
    assert!(!battle.combatant(CombatantId(0)).unwrap().has_tag(TagType::Disabled));
}

#[test]
fn magician_steals_defenders_item() {
    let mut battle = builder("Magician", "No Ability")
        .with_item("Sitrus Berry")
        .build()
        .unwrap();
    hit(&mut battle, tackle(), &[1, 0]).unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "damage|mon:1|hp:63/100",
            "ability|mon:0|Magician",
            "item|mon:0|sitrusberry|from:mon:1",
            "message|mon:0|Charmander stole Eevee's sitrusberry!",
        ],
    );
    assert!(battle.combatant(CombatantId(1)).unwrap().items.is_empty());
    assert_eq!(
        battle
            .combatant(CombatantId(0))
            .unwrap()
            .first_item()
            .map(|item| item.id.clone()),
        Some(Id::from("sitrusberry"))
    );
}

#[test]
fn magician_does_not_steal_when_holding_an_item() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_base_damage_randomization(BaseDamageRandomization::Max)
        .add_combatant(0, "Charmander", &[Type::Fire], uniform_stats(100))
        .with_ability("Magician")
        .with_item("Leftovers")
        .add_combatant(1, "Eevee", &[Type::Normal], uniform_stats(100))
        .with_item("Sitrus Berry")
        .build()
        .unwrap();
    hit(&mut battle, tackle(), &[1]).unwrap();
    assert_new_logs_eq(&mut battle, &["damage|mon:1|hp:63/100"]);
    assert_eq!(battle.combatant(CombatantId(1)).unwrap().items.len(), 1);
}

#[test]
fn magician_cannot_steal_untransferable_items() {
    let mut battle = builder("Magician", "No Ability")
        .with_item("Griseous Orb")
        .build()
        .unwrap();
    battle.combatant_mut(CombatantId(1)).unwrap().items[0].transferable = false;
    hit(&mut battle, tackle(), &[1]).unwrap();
    assert_new_logs_eq(&mut battle, &["damage|mon:1|hp:63/100"]);
}
