use std::rc::Rc;

use anyhow::Result;
use assert_matches::assert_matches;
use battler_data::{
    Id,
    MoveCategory,
    MoveData,
    Status,
    Type,
};
use battler_effects::{
    battle::{
        CombatantId,
        CoreBattle,
        core_battle_actions,
    },
    config::SpeedSortTieResolution,
    tags::{
        AddTagOptions,
        TagData,
        TagDuration,
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

fn builder() -> TestBattleBuilder {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_speed_sort_tie_resolution(SpeedSortTieResolution::Keep)
        .add_combatant(0, "Charmander", &[Type::Fire], uniform_stats(100))
        .with_last_move("Tackle")
        .add_combatant(1, "Eevee", &[Type::Normal], uniform_stats(100))
}

fn make_battle() -> Result<CoreBattle> {
    builder().build()
}

fn tackle() -> Rc<MoveData> {
    Rc::new(test_move("Tackle", MoveCategory::Physical, Type::Normal, 40))
}

fn ember() -> Rc<MoveData> {
    Rc::new(test_move("Ember", MoveCategory::Special, Type::Fire, 40))
}

fn add(battle: &mut CoreBattle, target: CombatantId, tag_type: TagType, options: AddTagOptions) {
    let mut context = battle.context();
    assert!(add_tag(&mut context, target, tag_type, options).unwrap());
}

fn before_move(battle: &mut CoreBattle, user: CombatantId, move_data: Rc<MoveData>) -> bool {
    let mut context = battle.context();
    core_battle_actions::before_move(&mut context, user, move_data).unwrap()
}

fn end_turn(battle: &mut CoreBattle) {
    let mut context = battle.context();
    core_battle_actions::end_turn(&mut context).unwrap();
}

#[test]
fn disable_blocks_only_the_disabled_move() {
    let mut battle = make_battle().unwrap();
    add(
        &mut battle,
        CombatantId(0),
        TagType::Disabled,
        AddTagOptions {
            source_id: Some(CombatantId(1)),
            ..Default::default()
        },
    );
    assert_new_logs_eq(
        &mut battle,
        &[
            "tagstart|mon:0|Disabled",
            "message|mon:0|Charmander's tackle was disabled!",
        ],
    );
    assert_eq!(
        battle
            .combatant(CombatantId(0))
            .unwrap()
            .tag(TagType::Disabled)
            .map(|tag| tag.data.clone()),
        Some(TagData::Move(Id::from("tackle")))
    );

    assert!(!before_move(&mut battle, CombatantId(0), tackle()));
    assert_new_logs_eq(
        &mut battle,
        &["message|mon:0|Charmander's Tackle is disabled!"],
    );

    assert!(before_move(&mut battle, CombatantId(0), ember()));
    assert_new_logs_eq(&mut battle, &[]);
    assert_eq!(
        battle.combatant(CombatantId(0)).unwrap().last_move,
        Some(Id::from("ember"))
    );
    assert!(battle.combatant(CombatantId(0)).unwrap().has_tag(TagType::Disabled));
}

#[test]
fn disable_wears_off_after_four_turns() {
    let mut battle = make_battle().unwrap();
    add(
        &mut battle,
        CombatantId(0),
        TagType::Disabled,
        AddTagOptions::default(),
    );
    battle.new_logs().for_each(drop);

    for _ in 0..3 {
        end_turn(&mut battle);
    }
    assert_new_logs_eq(&mut battle, &[]);
    assert_eq!(
        battle
            .combatant(CombatantId(0))
            .unwrap()
            .tag(TagType::Disabled)
            .map(|tag| tag.remaining_turns),
        Some(TagDuration::Turns(1))
    );

    end_turn(&mut battle);
    assert_new_logs_eq(
        &mut battle,
        &[
            "tagend|mon:0|Disabled",
            "message|mon:0|Charmander's move is no longer disabled.",
        ],
    );
    assert!(before_move(&mut battle, CombatantId(0), tackle()));
}

#[test]
fn disable_needs_a_last_move() {
    let mut battle = make_battle().unwrap();
    {
        let mut context = battle.context();
        assert!(
            !add_tag(
                &mut context,
                CombatantId(1),
                TagType::Disabled,
                AddTagOptions::default(),
            )
            .unwrap()
        );
    }
    assert_new_logs_eq(&mut battle, &[]);
}

#[test]
fn flinch_cancels_the_next_move_silently() {
    let mut battle = make_battle().unwrap();
    add(
        &mut battle,
        CombatantId(0),
        TagType::Flinched,
        AddTagOptions::default(),
    );
    assert_new_logs_eq(&mut battle, &[]);

    assert!(!before_move(&mut battle, CombatantId(0), tackle()));
    assert_new_logs_eq(&mut battle, &["message|mon:0|Charmander flinched!"]);
    assert!(!battle.combatant(CombatantId(0)).unwrap().has_tag(TagType::Flinched));

    assert!(before_move(&mut battle, CombatantId(0), tackle()));
}

#[test]
fn flinch_expires_at_end_of_turn() {
    let mut battle = make_battle().unwrap();
    add(
        &mut battle,
        CombatantId(0),
        TagType::Flinched,
        AddTagOptions::default(),
    );
    end_turn(&mut battle);
    assert_new_logs_eq(&mut battle, &[]);
    assert!(!battle.combatant(CombatantId(0)).unwrap().has_tag(TagType::Flinched));
    assert!(before_move(&mut battle, CombatantId(0), tackle()));
}

#[test]
fn confusion_can_cause_self_hit_before_moving() {
    let mut battle = make_battle().unwrap();
    add(
        &mut battle,
        CombatantId(0),
        TagType::Confused,
        AddTagOptions {
            duration: Some(TagDuration::Turns(3)),
            ..Default::default()
        },
    );
    assert_new_logs_eq(
        &mut battle,
        &[
            "tagstart|mon:0|Confused",
            "message|mon:0|Charmander became confused!",
        ],
    );

    // The 1/3 roll succeeds, then the highest damage roll.
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .fake_next_values([0, 15]);
    assert!(!before_move(&mut battle, CombatantId(0), tackle()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "message|mon:0|Charmander is confused!",
            "message|mon:0|It hurt itself in its confusion!",
            "damage|mon:0|hp:81/100",
        ],
    );

    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .fake_next_values([1]);
    assert!(before_move(&mut battle, CombatantId(0), tackle()));
    assert_new_logs_eq(&mut battle, &["message|mon:0|Charmander is confused!"]);

    assert!(before_move(&mut battle, CombatantId(0), tackle()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "tagend|mon:0|Confused",
            "message|mon:0|Charmander snapped out of confusion!",
        ],
    );
    assert!(!battle.combatant(CombatantId(0)).unwrap().has_tag(TagType::Confused));
}

#[test]
fn confusion_overlap_keeps_existing_tag() {
    let mut battle = make_battle().unwrap();
    add(
        &mut battle,
        CombatantId(0),
        TagType::Confused,
        AddTagOptions {
            duration: Some(TagDuration::Turns(3)),
            ..Default::default()
        },
    );
    battle.new_logs().for_each(drop);

    {
        let mut context = battle.context();
        assert!(
            !add_tag(
                &mut context,
                CombatantId(0),
                TagType::Confused,
                AddTagOptions {
                    duration: Some(TagDuration::Turns(5)),
                    ..Default::default()
                },
            )
            .unwrap()
        );
    }
    assert_new_logs_eq(
        &mut battle,
        &["message|mon:0|Charmander is already confused!"],
    );
    let combatant = battle.combatant(CombatantId(0)).unwrap();
    assert_eq!(combatant.tags().len(), 1);
    assert_eq!(
        combatant.tag(TagType::Confused).map(|tag| tag.remaining_turns),
        Some(TagDuration::Turns(3))
    );
}

#[test]
fn nightmare_hurts_sleeping_owner_after_each_move() {
    let mut battle = builder().with_status(Status::Sleep).build().unwrap();
    add(
        &mut battle,
        CombatantId(1),
        TagType::Nightmare,
        AddTagOptions {
            source_id: Some(CombatantId(0)),
            ..Default::default()
        },
    );
    assert_new_logs_eq(
        &mut battle,
        &[
            "tagstart|mon:1|Nightmare",
            "message|mon:1|Eevee began having a nightmare!",
        ],
    );

    {
        let mut context = battle.context();
        let outcome =
            core_battle_actions::after_move(&mut context, CombatantId(1), tackle()).unwrap();
        assert!(outcome.removed.is_empty());
    }
    assert_new_logs_eq(
        &mut battle,
        &[
            "message|mon:1|Eevee is locked in a nightmare!",
            "damage|mon:1|hp:75/100",
        ],
    );

    // Waking up ends the nightmare.
    {
        let mut context = battle.context();
        core_battle_actions::cure_status(&mut context, CombatantId(1)).unwrap();
        let outcome =
            core_battle_actions::after_move(&mut context, CombatantId(1), tackle()).unwrap();
        assert_eq!(outcome.removed, vec![TagType::Nightmare]);
    }
    assert_new_logs_eq(
        &mut battle,
        &["status|mon:1|cured", "tagend|mon:1|Nightmare"],
    );
}

#[test]
fn nightmare_requires_sleep() {
    let mut battle = make_battle().unwrap();
    {
        let mut context = battle.context();
        assert!(
            !add_tag(
                &mut context,
                CombatantId(1),
                TagType::Nightmare,
                AddTagOptions::default(),
            )
            .unwrap()
        );
    }
    assert_new_logs_eq(&mut battle, &[]);
}

#[test]
fn semi_invulnerability_ends_when_move_executes() {
    let mut battle = make_battle().unwrap();
    add(
        &mut battle,
        CombatantId(0),
        TagType::SemiInvulnerable,
        AddTagOptions::default(),
    );
    let outcome = {
        let mut context = battle.context();
        core_battle_actions::move_effect(&mut context, CombatantId(0), tackle()).unwrap()
    };
    assert_eq!(outcome.removed, vec![TagType::SemiInvulnerable]);
    assert!(!outcome.move_cancelled);
    assert_new_logs_eq(&mut battle, &[]);
}

#[test]
fn blocked_confusion_does_not_roll_its_duration() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .add_combatant(0, "Slowpoke", &[Type::Water], uniform_stats(100))
        .with_ability("Own Tempo")
        .build()
        .unwrap();
    {
        let mut context = battle.context();
        assert!(
            !add_tag(
                &mut context,
                CombatantId(0),
                TagType::Confused,
                AddTagOptions::default(),
            )
            .unwrap()
        );
    }
    assert!(!battle.combatant(CombatantId(0)).unwrap().has_tag(TagType::Confused));
    assert_eq!(
        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .sequence_count(),
        0
    );
}

#[test]
fn confusion_rolls_its_duration_when_added() {
    let mut battle = make_battle().unwrap();
    add(
        &mut battle,
        CombatantId(1),
        TagType::Confused,
        AddTagOptions::default(),
    );
    assert_eq!(
        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .sequence_count(),
        1
    );
    assert_matches!(
        battle
            .combatant(CombatantId(1))
            .unwrap()
            .tag(TagType::Confused)
            .map(|tag| tag.remaining_turns),
        Some(TagDuration::Turns(2..=5))
    );
}
