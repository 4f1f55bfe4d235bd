use osugr_core::{
    DifficultyCalibration, HitPolicy, HitResult, HitWindows, JudgementMode, LegacyMods, Mod,
    ModFlags, Mods, classify, map_difficulty_range, map_difficulty_range_inv,
};
use proptest::prelude::*;
use rstest::rstest;
use strum::IntoEnumIterator;

// --- STRATEGIES ---

prop_compose! {
    /// Decreasing calibration, like approach time and hit windows.
    fn arb_decreasing_calibration()(
        max in 10.0..500.0f32,
        upper in 20.0..500.0f32,
        lower in 20.0..500.0f32
    ) -> DifficultyCalibration {
        DifficultyCalibration::new(max + upper + lower, max + upper, max)
    }
}

prop_compose! {
    /// Increasing calibration, like spinner spins per second.
    fn arb_increasing_calibration()(
        min in 0.0..10.0f32,
        lower in 0.5..10.0f32,
        upper in 0.5..10.0f32
    ) -> DifficultyCalibration {
        DifficultyCalibration::new(min, min + lower, min + lower + upper)
    }
}

prop_compose! {
    fn arb_windows()(
        w300 in 5.0..80.0f32,
        w100_gap in 0.0..60.0f32,
        w50_gap in 0.0..60.0f32,
        miss_gap in 0.0..300.0f32
    ) -> HitWindows {
        let w100 = w300 + w100_gap;
        let w50 = w100 + w50_gap;
        HitWindows::new(w300, w100, w50, w50 + miss_gap)
    }
}

fn arb_mode() -> impl Strategy<Value = JudgementMode> {
    prop::sample::select(JudgementMode::iter().collect::<Vec<_>>())
}

fn arb_flags() -> impl Strategy<Value = ModFlags> {
    prop::sample::subsequence(Mod::iter().collect::<Vec<_>>(), 0..12)
        .prop_map(|mods| mods.into_iter().collect::<ModFlags>())
}

fn arb_speed() -> impl Strategy<Value = f32> {
    prop_oneof![Just(0.75f32), Just(1.0f32), Just(1.5f32), 0.5..2.0f32]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_inverse_round_trip_decreasing(cal in arb_decreasing_calibration(), rating in 0.0..10.0f32) {
        let back = cal.inverse(cal.map(rating));
        prop_assert!((back - rating).abs() < 1e-3, "{rating} -> {back} for {cal:?}");
    }

    #[test]
    fn prop_inverse_round_trip_increasing(cal in arb_increasing_calibration(), rating in 0.0..10.0f32) {
        let back = cal.inverse(cal.map(rating));
        prop_assert!((back - rating).abs() < 1e-3, "{rating} -> {back} for {cal:?}");
    }

    #[test]
    fn prop_midpoint_is_exact(min in -1000.0..1000.0f32, mid in -1000.0..1000.0f32, max in -1000.0..1000.0f32) {
        prop_assert_eq!(map_difficulty_range(5.0, min, mid, max), mid);
    }

    #[test]
    fn prop_map_is_monotonic(cal in arb_decreasing_calibration(), a in -2.0..12.0f32, b in -2.0..12.0f32) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(cal.map(lo) >= cal.map(hi));
    }

    #[test]
    fn prop_larger_delta_never_judges_better(
        windows in arb_windows(),
        mode in arb_mode(),
        a in -500.0..500.0f32,
        b in -500.0..500.0f32
    ) {
        let policy = HitPolicy { mode, ..Default::default() };
        let (near, far) = if a.abs() <= b.abs() { (a, b) } else { (b, a) };
        prop_assert!(classify(near, &windows, &policy) >= classify(far, &windows, &policy));
    }

    #[test]
    fn prop_half_window_only_punishes_late_hits(windows in arb_windows(), delta in -500.0..0.0f32) {
        let half = HitPolicy { half_window: true, ..Default::default() };
        prop_assert_eq!(
            classify(delta, &windows, &half),
            classify(delta, &windows, &HitPolicy::default())
        );
    }

    #[test]
    fn prop_legacy_encoding_is_stable(flags in arb_flags(), speed in arb_speed()) {
        let legacy = Mods::new(flags, speed).to_legacy();
        prop_assert_eq!(Mods::from_legacy(legacy).to_legacy(), legacy);
    }

    #[test]
    fn prop_autoplay_excludes_relax_and_autopilot(flags in arb_flags(), speed in arb_speed()) {
        let legacy = Mods::new(flags | ModFlags::AUTOPLAY, speed).to_legacy();
        prop_assert!(legacy.contains(LegacyMods::AUTOPLAY));
        prop_assert!(!legacy.intersects(LegacyMods::RELAX | LegacyMods::AUTOPILOT));
    }

    #[test]
    fn prop_flags_display_parse(flags in arb_flags()) {
        let parsed: ModFlags = flags.to_string().parse().unwrap();
        prop_assert_eq!(parsed, flags);
    }
}

#[rstest]
#[case(15.0, HitResult::Hit300)]
#[case(20.0, HitResult::Hit300)]
#[case(45.0, HitResult::Hit100)]
#[case(-45.0, HitResult::Hit100)]
#[case(90.0, HitResult::Hit50)]
#[case(350.0, HitResult::Miss)]
#[case(450.0, HitResult::Null)]
fn test_classify_od10(#[case] delta: f32, #[case] expected: HitResult) {
    let windows = HitWindows::new(20.0, 60.0, 100.0, 400.0);
    assert_eq!(classify(delta, &windows, &HitPolicy::default()), expected);
}

#[rstest]
#[case(JudgementMode::Default, 45.0, HitResult::Hit100)]
#[case(JudgementMode::Ming3012, 45.0, HitResult::Hit50)]
#[case(JudgementMode::No100s, 45.0, HitResult::Miss)]
#[case(JudgementMode::No50s, 90.0, HitResult::Miss)]
#[case(JudgementMode::Ming3012, 15.0, HitResult::Hit300)]
fn test_classify_modes(#[case] mode: JudgementMode, #[case] delta: f32, #[case] expected: HitResult) {
    let windows = HitWindows::new(20.0, 60.0, 100.0, 400.0);
    let policy = HitPolicy {
        mode,
        ..Default::default()
    };
    assert_eq!(classify(delta, &windows, &policy), expected);
}

#[rstest]
#[case(0.0, 1800.0)]
#[case(5.0, 1200.0)]
#[case(10.0, 450.0)]
#[case(11.0, 300.0)]
#[case(-1.0, 1920.0)]
fn test_approach_time(#[case] ar: f32, #[case] expected: f32) {
    let value = map_difficulty_range(ar, 1800.0, 1200.0, 450.0);
    assert!((value - expected).abs() < 1e-3, "{value}");
    assert!((map_difficulty_range_inv(value, 1800.0, 1200.0, 450.0) - ar).abs() < 1e-4);
}
