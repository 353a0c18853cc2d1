use anyhow::Result;
use battler_data::{
    Boost,
    StatTable,
    Type,
    Weather,
};
use battler_effects::{
    battle::{
        CombatantId,
        CoreBattle,
        core_battle_actions,
    },
    config::SpeedSortTieResolution,
};
use battler_test_utils::{
    TestBattleBuilder,
    assert_new_logs_eq,
    uniform_stats,
};

fn end_turn(battle: &mut CoreBattle) -> Result<()> {
    let mut context = battle.context();
    core_battle_actions::end_turn(&mut context)
}

fn make_battle(ability: &str, weather: Option<Weather>) -> Result<CoreBattle> {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_weather(weather)
        .add_combatant(0, "Tentacool", &[Type::Water], uniform_stats(100))
        .with_ability(ability)
        .with_hp(50)
        .add_combatant(1, "Eevee", &[Type::Normal], uniform_stats(100))
        .build()
}

#[test]
fn rain_dish_heals_in_rain() {
    let mut battle = make_battle("Rain Dish", Some(Weather::Rain)).unwrap();
    end_turn(&mut battle).unwrap();
    assert_new_logs_eq(
        &mut battle,
        &["ability|mon:0|Rain Dish", "heal|mon:0|hp:56/100"],
    );
    assert_eq!(battle.turn(), 1);
}

#[test]
fn rain_dish_does_nothing_without_rain() {
    let mut battle = make_battle("Rain Dish", Some(Weather::Sun)).unwrap();
    end_turn(&mut battle).unwrap();
    assert_new_logs_eq(&mut battle, &[]);
    assert_eq!(battle.combatant(CombatantId(0)).unwrap().hp, 50);
}

#[test]
fn rain_dish_does_nothing_at_full_hp() {
    let mut battle = make_battle("Rain Dish", Some(Weather::Rain)).unwrap();
    battle.combatant_mut(CombatantId(0)).unwrap().hp = 100;
    end_turn(&mut battle).unwrap();
    assert_new_logs_eq(&mut battle, &[]);
}

#[test]
fn speed_boost_raises_speed_until_maximum() {
    let mut battle = make_battle("Speed Boost", None).unwrap();
    end_turn(&mut battle).unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:0|Speed Boost",
            "boost|mon:0|Spe:+1",
            "message|mon:0|Tentacool's Spe rose!",
        ],
    );

    for _ in 0..5 {
        end_turn(&mut battle).unwrap();
    }
    assert_eq!(battle.combatant(CombatantId(0)).unwrap().boost(Boost::Spe), 6);
    battle.new_logs().for_each(drop);

    end_turn(&mut battle).unwrap();
    assert_new_logs_eq(&mut battle, &[]);
    assert_eq!(battle.turn(), 7);
}

#[test]
fn turn_end_effects_run_fastest_first() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_combatant(0, "Ninjask", &[Type::Bug], uniform_stats(100))
        .with_ability("Speed Boost")
        .add_combatant(
            1,
            "Yanmega",
            &[Type::Bug],
            StatTable {
                spe: 120,
                ..uniform_stats(100)
            },
        )
        .with_ability("Speed Boost")
        .build()
        .unwrap();
    end_turn(&mut battle).unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:1|Speed Boost",
            "boost|mon:1|Spe:+1",
            "message|mon:1|Yanmega's Spe rose!",
            "ability|mon:0|Speed Boost",
            "boost|mon:0|Spe:+1",
            "message|mon:0|Ninjask's Spe rose!",
        ],
    );
}

#[test]
fn speed_ties_resolve_the_same_way_for_the_same_seed() {
    fn tie_order(seed: u64) -> Vec<String> {
        let mut builder = TestBattleBuilder::new()
            .with_seed(seed)
            .with_speed_sort_tie_resolution(SpeedSortTieResolution::Random);
        for (i, name) in ["Ninjask", "Yanmega", "Volcarona", "Blaziken"]
            .into_iter()
            .enumerate()
        {
            builder = builder
                .add_combatant(i % 2, name, &[Type::Bug], uniform_stats(100))
                .with_ability("Speed Boost");
        }
        let mut battle = builder.build().unwrap();
        end_turn(&mut battle).unwrap();
        battle
            .new_logs()
            .filter(|log| log.starts_with("ability|"))
            .collect()
    }

    let first = tie_order(12345);
    assert_eq!(first.len(), 4);
    assert_eq!(first, tie_order(12345));
}

#[test]
fn summoned_weather_triggers_weather_change_effects() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_combatant(0, "Pelipper", &[Type::Water], uniform_stats(100))
        .with_ability("Drizzle")
        .benched()
        .add_combatant(1, "Bramblin", &[Type::Grass], uniform_stats(100))
        .with_ability("Weathervane")
        .build()
        .unwrap();
    {
        let mut context = battle.context();
        core_battle_actions::summon(&mut context, CombatantId(0)).unwrap();
    }
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:0|Drizzle",
            "weather|Rain",
            "ability|mon:1|Weathervane",
            "boost|mon:1|Spe:+1",
            "message|mon:1|Bramblin's Spe rose!",
        ],
    );
    assert_eq!(battle.field.weather, Some(Weather::Rain));

    // Setting the same weather again changes nothing.
    {
        let mut context = battle.context();
        assert!(!core_battle_actions::set_weather(&mut context, Some(Weather::Rain)).unwrap());
    }
    assert_new_logs_eq(&mut battle, &[]);
}
