use std::rc::Rc;

use battler_data::{
    Accuracy,
    Boost,
    MoveCategory,
    MoveData,
    Type,
};
use battler_effects::{
    battle::{
        CombatantId,
        CoreBattle,
    },
    damage::{
        accuracy_check,
        move_accuracy,
    },
};
use battler_test_utils::{
    TestBattleBuilder,
    assert_new_logs_eq,
    get_controlled_rng_for_battle,
    test_move,
    uniform_stats,
};

fn builder(attacker_ability: &str) -> TestBattleBuilder {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .add_combatant(0, "Butterfree", &[Type::Bug], uniform_stats(100))
        .with_ability(attacker_ability)
        .add_combatant(1, "Eevee", &[Type::Normal], uniform_stats(100))
}

fn make_battle(attacker_ability: &str) -> CoreBattle {
    builder(attacker_ability).build().unwrap()
}

fn hypnosis(accuracy: Accuracy) -> Rc<MoveData> {
    let mut move_data = test_move("Hypnosis", MoveCategory::Status, Type::Psychic, 0);
    move_data.accuracy = accuracy;
    Rc::new(move_data)
}

fn accuracy(battle: &mut CoreBattle, move_data: Rc<MoveData>) -> Option<u8> {
    let mut context = battle.context();
    move_accuracy(&mut context, CombatantId(0), CombatantId(1), &move_data).unwrap()
}

fn check(battle: &mut CoreBattle, move_data: Rc<MoveData>) -> bool {
    let mut context = battle.context();
    accuracy_check(&mut context, CombatantId(0), CombatantId(1), &move_data).unwrap()
}

fn draws(battle: &mut CoreBattle) -> usize {
    get_controlled_rng_for_battle(battle)
        .unwrap()
        .sequence_count()
}

#[test]
fn compound_eyes_raises_accuracy() {
    let mut battle = make_battle("No Ability");
    assert_eq!(accuracy(&mut battle, hypnosis(Accuracy::Chance(70))), Some(70));

    let mut battle = make_battle("Compound Eyes");
    assert_eq!(accuracy(&mut battle, hypnosis(Accuracy::Chance(70))), Some(91));
    // The holder's own stages still apply first.
    battle
        .combatant_mut(CombatantId(0))
        .unwrap()
        .boosts
        .add(Boost::Accuracy, -3);
    assert_eq!(accuracy(&mut battle, hypnosis(Accuracy::Chance(70))), Some(45));
}

#[test]
fn accuracy_and_evasion_stages_cancel_out() {
    let mut battle = make_battle("No Ability");
    battle
        .combatant_mut(CombatantId(0))
        .unwrap()
        .boosts
        .add(Boost::Accuracy, 1);
    assert_eq!(accuracy(&mut battle, hypnosis(Accuracy::Chance(100))), Some(133));

    battle
        .combatant_mut(CombatantId(1))
        .unwrap()
        .boosts
        .add(Boost::Evasion, 2);
    assert_eq!(accuracy(&mut battle, hypnosis(Accuracy::Chance(100))), Some(75));

    battle
        .combatant_mut(CombatantId(0))
        .unwrap()
        .boosts
        .add(Boost::Accuracy, 1);
    assert_eq!(accuracy(&mut battle, hypnosis(Accuracy::Chance(100))), Some(100));
}

#[test]
fn miss_is_announced_on_target() {
    let mut battle = make_battle("No Ability");
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .fake_next_values([70, 69]);
    assert!(!check(&mut battle, hypnosis(Accuracy::Chance(70))));
    assert_new_logs_eq(&mut battle, &["message|mon:1|Eevee avoided the attack!"]);

    assert!(check(&mut battle, hypnosis(Accuracy::Chance(70))));
    assert_new_logs_eq(&mut battle, &[]);
    assert_eq!(draws(&mut battle), 2);
}

#[test]
fn exempt_moves_never_roll() {
    let mut battle = make_battle("No Ability");
    battle
        .combatant_mut(CombatantId(1))
        .unwrap()
        .boosts
        .add(Boost::Evasion, 6);
    assert_eq!(accuracy(&mut battle, hypnosis(Accuracy::Exempt)), None);
    assert!(check(&mut battle, hypnosis(Accuracy::Exempt)));
    assert_eq!(draws(&mut battle), 0);
}

#[test]
fn one_hit_knockout_accuracy_follows_level_difference() {
    let mut fissure = test_move("Fissure", MoveCategory::Physical, Type::Ground, 0);
    fissure.ohko = true;
    fissure.accuracy = Accuracy::Chance(30);
    let fissure = Rc::new(fissure);

    let mut battle = make_battle("Compound Eyes");
    battle.combatant_mut(CombatantId(0)).unwrap().level = 60;
    battle
        .combatant_mut(CombatantId(1))
        .unwrap()
        .boosts
        .add(Boost::Evasion, 6);
    assert_eq!(accuracy(&mut battle, fissure.clone()), Some(40));

    let mut battle = builder("No Ability")
        .add_combatant(1, "Snorlax", &[Type::Normal], uniform_stats(100))
        .with_level(60)
        .build()
        .unwrap();
    let mut context = battle.context();
    assert_eq!(
        move_accuracy(&mut context, CombatantId(0), CombatantId(2), &fissure).unwrap(),
        Some(0)
    );
}

#[test]
fn simulated_checks_never_draw() {
    let mut battle = make_battle("No Ability");
    {
        let mut context = battle.context();
        let sure = hypnosis(Accuracy::Chance(100));
        let unsure = hypnosis(Accuracy::Chance(70));
        context.simulate(|context| {
            assert!(accuracy_check(context, CombatantId(0), CombatantId(1), &sure).unwrap());
            assert!(!accuracy_check(context, CombatantId(0), CombatantId(1), &unsure).unwrap());
        });
    }
    assert_eq!(draws(&mut battle), 0);
    assert_new_logs_eq(&mut battle, &[]);
}
