use battler_effects::battle::CoreBattle;

/// Asserts that new notifications in the battle are equal to the given lines.
#[track_caller]
pub fn assert_new_logs_eq(battle: &mut CoreBattle, want: &[&str]) {
    let got = battle.new_logs().collect::<Vec<_>>();
    let want = want.iter().map(|log| log.to_string()).collect::<Vec<_>>();
    pretty_assertions::assert_eq!(got, want)
}
