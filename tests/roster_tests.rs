use raidforge::roster::{Bucket, Role, Tier};
use rstest::rstest;

#[rstest]
#[case("tank", Role::Tank)]
#[case("healer", Role::Healer)]
#[case("rdps", Role::RangedDps)]
#[case("ranged_dps", Role::RangedDps)]
#[case("mdps", Role::MeleeDps)]
#[case("melee_dps", Role::MeleeDps)]
#[case("dps", Role::RangedDps)]
#[case("Tank", Role::Tank)]
fn test_role_parsing(#[case] raw: &str, #[case] expected: Role) {
    assert_eq!(raw.parse::<Role>().unwrap(), expected);
}

#[rstest]
#[case(Role::Tank, Bucket::Tank)]
#[case(Role::Healer, Bucket::Healer)]
#[case(Role::RangedDps, Bucket::Dps)]
#[case(Role::MeleeDps, Bucket::Dps)]
fn test_role_buckets(#[case] role: Role, #[case] bucket: Bucket) {
    assert_eq!(role.bucket(), bucket);
}

#[rstest]
#[case("main", Tier::Main)]
#[case("alt", Tier::Alt)]
#[case("helper", Tier::Helper)]
#[case("inactive", Tier::Inactive)]
fn test_tier_parsing(#[case] raw: &str, #[case] expected: Tier) {
    assert_eq!(raw.parse::<Tier>().unwrap(), expected);
}

#[test]
fn test_unknown_role_coerces_to_dps() {
    assert_eq!(Role::parse_lenient("necromancer", "Odd"), Role::RangedDps);
}

#[test]
fn test_unknown_tier_coerces_to_inactive() {
    assert_eq!(Tier::parse_lenient("benched", "Odd"), Tier::Inactive);
}

#[test]
fn test_tier_precedence_order() {
    assert!(Tier::Main.precedence() < Tier::Alt.precedence());
    assert!(Tier::Alt.precedence() < Tier::Helper.precedence());
    assert!(Tier::Helper.precedence() < Tier::Inactive.precedence());
}

#[test]
fn test_role_display_round_trip() {
    for role in [Role::Tank, Role::Healer, Role::RangedDps, Role::MeleeDps] {
        let s = role.to_string();
        assert_eq!(s.parse::<Role>().unwrap(), role);
    }
}
