use dash_args::Args;
use rstest::rstest;

fn parse(cmdline: &str) -> Args {
    Args::parse_from(std::iter::once("noded").chain(cmdline.split_whitespace()))
}

#[rstest]
#[case::bare_flag("-RCK", true)]
#[case::zero("-RCK=0", false)]
#[case::one("-RCK=1", true)]
#[case::double_dash("--RCK=1", true)]
#[case::double_dash_bare("--RCK", true)]
#[case::negated("-noRCK", false)]
#[case::negated_one("-noRCK=1", false)]
#[case::negated_zero("-noRCK=0", true)]
#[case::negated_double_dash("--noRCK=1", false)]
#[case::flag_then_negation("-RCK -noRCK", true)]
#[case::both_one("-RCK=1 -noRCK=1", true)]
#[case::both_zero("-RCK=0 -noRCK=0", false)]
#[case::flag_then_double_dash_negation("-RCK --noRCK", true)]
#[case::negation_then_flag("-noRCK -RCK", true)]
#[case::last_zero_wins("-RCK -RCK=0", false)]
#[case::last_bare_wins("-RCK=0 -RCK", true)]
#[case::last_one_wins("-RCK=0 -noRCK -RCK=1", true)]
fn bool_ignores_default_when_given(#[case] cmdline: &str, #[case] expected: bool) {
    let args = parse(cmdline);
    assert_eq!(args.bool("-RCK", false), expected);
    assert_eq!(args.bool("-RCK", true), expected);
}

#[rstest]
#[case::nothing("")]
#[case::other_option("-RCK")]
#[case::prefix_only("-RC")]
fn bool_falls_back_to_default(#[case] cmdline: &str) {
    let args = parse(cmdline);
    for name in ["-fo", "-RCKo"] {
        assert!(!args.bool(name, false));
        assert!(args.bool(name, true));
    }
}

#[rstest]
#[case::nothing("", "", "eleven")]
#[case::repeated_bare("-RCK -RCK", "", "")]
#[case::empty_value("-RCK=", "", "")]
#[case::number("-RCK=11", "11", "11")]
#[case::word("-RCK=eleven", "eleven", "eleven")]
#[case::last_wins("-RCK=a -RCK=b", "b", "b")]
#[case::double_dash("--RCK=verbose", "verbose", "verbose")]
fn string_arg(#[case] cmdline: &str, #[case] with_empty: &str, #[case] with_eleven: &str) {
    let args = parse(cmdline);
    assert_eq!(args.string("-RCK", ""), with_empty);
    assert_eq!(args.string("-RCK", "eleven"), with_eleven);
}

#[rstest]
#[case::nothing("", 11, 0)]
#[case::repeated_bare("-RCK -RCK", 0, 0)]
#[case::last_wins("-RCK=11 -RCK=12", 12, 12)]
#[case::not_numbers("-RCK=NaN -RCK=NotANumber", 0, 0)]
#[case::double_dash("--RCK=verbose --RCK=1", 1, 1)]
fn int_arg(#[case] cmdline: &str, #[case] with_eleven: i64, #[case] with_zero: i64) {
    let args = parse(cmdline);
    assert_eq!(args.int("-RCK", 11), with_eleven);
    assert_eq!(args.int("-RCK", 0), with_zero);
}

#[test]
fn single_and_double_dash_are_interchangeable() {
    let single = parse("-RCK=verbose -x=3");
    let double = parse("--RCK=verbose --x=3");

    for args in [&single, &double] {
        assert_eq!(args.string("-RCK", ""), "verbose");
        assert_eq!(args.string("--RCK", ""), "verbose");
        assert_eq!(args.int("-x", 0), 3);
        assert!(args.bool("-x", false));
    }
    assert_eq!(single.values("-RCK"), double.values("-RCK"));
}

#[test]
fn tables_are_shareable_across_threads() {
    let args = parse("-threads=4 -nodebug");

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert_eq!(args.int("-threads", 1), 4);
                assert!(!args.bool("-debug", true));
            });
        }
    });
}
