use tcset_core::error::{BuildError, CalcError};
use tcset_core::{
    Apparatus, CalculatorSession, Defaults, InputPolicy, Spool, Unit, parse_lenient,
};

#[test]
fn startup_matches_bench() {
    let s = CalculatorSession::default();
    assert_eq!(s.apparatus(), Apparatus::Rosie);
    assert_eq!(s.spool(), Spool::Second);
    assert_eq!(s.unit(), Unit::Inches);
    let r = s.calculate().unwrap();
    assert_eq!(r.rounded_setpoint(), 758);
    assert_eq!(r.display().shield, "\u{2212}35.1 \u{00B0}C");
}

#[test]
fn apparatus_switch_resets_spool() {
    let mut s = CalculatorSession::default();
    s.set_apparatus(Apparatus::Taylor);
    assert_eq!(s.spool(), Spool::First);
    assert_eq!(s.position_table().name(), "taylor");

    s.set_spool(Spool::Second);
    assert_eq!(s.spool(), Spool::Second);
    s.set_apparatus(Apparatus::Rosie);
    assert_eq!(s.spool(), Spool::Second);
    assert_eq!(s.deviation_table().name(), "second");
}

#[test]
fn unit_switch_converts_fields_in_place() {
    let mut s = CalculatorSession::default();
    s.set_unit(Unit::Millimeters);
    assert_eq!(s.shield_text(), "0.51");
    assert_eq!(s.capsule_text(), "7.62");

    s.set_unit(Unit::Inches);
    assert_eq!(s.shield_text(), "0.020");
    assert_eq!(s.capsule_text(), "0.300");

    // Same unit again changes nothing
    s.set_unit(Unit::Inches);
    assert_eq!(s.capsule_text(), "0.300");
}

#[test]
fn unit_switch_refills_defaults_when_a_field_is_empty() {
    let mut s = CalculatorSession::default();
    s.set_shield("");
    s.set_capsule("0.5");
    s.set_unit(Unit::Millimeters);
    assert_eq!(s.shield_text(), "0.51");
    assert_eq!(s.capsule_text(), "7.62");

    s.set_capsule("");
    s.set_unit(Unit::Inches);
    assert_eq!(s.shield_text(), "0.02");
    assert_eq!(s.capsule_text(), "0.3");
}

#[test]
fn setpoint_is_unit_independent_after_switch() {
    let mut s = CalculatorSession::default();
    let before = s.calculate().unwrap();
    s.set_unit(Unit::Millimeters);
    let after = s.calculate().unwrap();
    // 0.508 mm displays as 0.51 mm, a 0.002 mm change
    assert!((before.setpoint_c - after.setpoint_c).abs() < 0.02);
    assert_eq!(before.rounded_setpoint(), after.rounded_setpoint());
}

#[test]
fn lenient_reads_garbage_as_zero() {
    let mut s = CalculatorSession::default();
    s.set_desired("abc");
    s.set_shield("");
    s.set_capsule("0.30 in");
    let inputs = s.inputs().unwrap();
    assert_eq!(inputs.desired_c, 0.0);
    assert_eq!(inputs.shield.value, 0.0);
    assert!((inputs.capsule.value - 0.30).abs() < 1e-12);
    assert_eq!(parse_lenient("  12.5kg"), 12.5);
}

#[test]
fn strict_surfaces_bad_fields() {
    let mut s = CalculatorSession::builder()
        .with_policy(InputPolicy::Strict)
        .build()
        .unwrap();
    s.set_desired("8OO");
    let err = s.calculate().unwrap_err();
    assert_eq!(
        err.downcast_ref::<CalcError>(),
        Some(&CalcError::InvalidNumber {
            field: "desired",
            input: "8OO".to_string()
        })
    );

    s.set_desired("800");
    s.set_shield("-0.02");
    let err = s.calculate().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CalcError>(),
        Some(CalcError::NegativeMeasurement { field: "shield", .. })
    ));
}

#[test]
fn strict_unit_switch_leaves_unreadable_fields() {
    let mut s = CalculatorSession::builder()
        .with_policy(InputPolicy::Strict)
        .build()
        .unwrap();
    s.set_shield("x");
    s.set_unit(Unit::Millimeters);
    assert_eq!(s.shield_text(), "x");
    assert_eq!(s.capsule_text(), "7.62");
}

#[test]
fn builder_applies_selection_and_unit() {
    let s = CalculatorSession::builder()
        .with_apparatus(Apparatus::Taylor)
        .with_unit(Unit::Millimeters)
        .with_defaults(Defaults {
            shield_in: 0.01,
            capsule_in: 0.25,
            desired_c: 1200.0,
        })
        .build()
        .unwrap();
    assert_eq!(s.spool(), Spool::First);
    assert_eq!(s.shield_text(), "0.25");
    assert_eq!(s.capsule_text(), "6.35");
    assert_eq!(s.desired_text(), "1200");
}

#[test]
fn builder_rejects_bad_defaults() {
    let err = CalculatorSession::builder()
        .with_defaults(Defaults {
            shield_in: -1.0,
            ..Defaults::default()
        })
        .build()
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BuildError>(),
        Some(BuildError::InvalidDefaults(_))
    ));
}

#[test]
fn session_from_config_file_values() {
    let cfg = tcset_config::load_toml(
        "[selection]\napparatus = \"taylor\"\nunit = \"mm\"\n[input]\npolicy = \"strict\"\n",
    )
    .unwrap();
    let calc: tcset_core::CalcCfg = (&cfg).into();
    let s = tcset_core::SessionBuilder::from_cfg(calc).build().unwrap();
    assert_eq!(s.apparatus(), Apparatus::Taylor);
    assert_eq!(s.spool(), Spool::First);
    assert_eq!(s.unit(), Unit::Millimeters);
    assert_eq!(s.policy(), InputPolicy::Strict);
}
