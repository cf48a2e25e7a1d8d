use rstest::rstest;
use tcset_core::error::CalcError;
use tcset_core::{
    InputPolicy, Measurement, SHIELD_GRADIENT_C_PER_MM, SetpointInputs, Spool, calculate,
    calculate_checked, deviation, shield_correction,
};

fn bench_inputs(desired_c: f64, spool: Spool) -> SetpointInputs {
    SetpointInputs {
        desired_c,
        shield: Measurement::inches(0.02),
        capsule: Measurement::inches(0.30),
        spool,
    }
}

#[test]
fn second_spool_at_800() {
    let r = calculate(&bench_inputs(800.0, Spool::Second));
    // (0.508 + 7.62 / 2) * 8.1392
    assert!((r.shield_correction_c - 35.145_065_6).abs() < 1e-6);
    assert!((r.shield_correction_c - 35.14).abs() < 0.01);
    assert_eq!(r.deviation_c, 6.7);
    assert!((r.setpoint_c - 758.154_934_4).abs() < 1e-6);
    assert_eq!(r.rounded_setpoint(), 758);
    assert_eq!(r.desired_c, 800.0);
}

#[test]
fn millimeter_inputs_match_inch_inputs() {
    let a = calculate(&bench_inputs(800.0, Spool::Second));
    let b = calculate(&SetpointInputs {
        desired_c: 800.0,
        shield: Measurement::millimeters(0.508),
        capsule: Measurement::millimeters(7.62),
        spool: Spool::Second,
    });
    assert!((a.setpoint_c - b.setpoint_c).abs() < 1e-9);
}

#[rstest]
#[case(Spool::First)]
#[case(Spool::Second)]
fn first_sample_needs_no_interpolation(#[case] spool: Spool) {
    assert_eq!(deviation(spool, 93.3), 3.2);
}

#[rstest]
#[case(Spool::First, 5.3)]
#[case(Spool::Second, 18.5)]
fn above_table_clamps_to_last_entry(#[case] spool: Spool, #[case] last: f64) {
    let r = calculate(&bench_inputs(2400.0, spool));
    assert_eq!(r.deviation_c, last);
}

#[test]
fn setpoint_is_desired_minus_both_corrections() {
    for desired in [0.0, 150.0, 1234.5, 2000.0, 3000.0] {
        for spool in Spool::ALL {
            let r = calculate(&bench_inputs(desired, spool));
            let expected = desired - r.shield_correction_c - r.deviation_c;
            assert_eq!(r.setpoint_c, expected);
        }
    }
}

#[test]
fn zero_lengths_leave_only_deviation() {
    let r = calculate(&SetpointInputs {
        desired_c: 800.0,
        shield: Measurement::inches(0.0),
        capsule: Measurement::inches(0.0),
        spool: Spool::First,
    });
    assert_eq!(r.shield_correction_c, 0.0);
    assert_eq!(r.setpoint_c, 795.0);
}

#[test]
fn shield_gradient_constant() {
    assert_eq!(SHIELD_GRADIENT_C_PER_MM, 8.1392);
    assert!((shield_correction(1.0, 2.0) - 2.0 * 8.1392).abs() < 1e-12);
}

#[test]
fn strict_rejects_negative_lengths() {
    let mut inputs = bench_inputs(800.0, Spool::Second);
    inputs.capsule = Measurement::inches(-0.1);
    let err = calculate_checked(&inputs, InputPolicy::Strict).unwrap_err();
    assert_eq!(
        err.downcast_ref::<CalcError>(),
        Some(&CalcError::NegativeMeasurement {
            field: "capsule",
            value: -0.1
        })
    );

    // Lenient keeps the permissive arithmetic
    let r = calculate_checked(&inputs, InputPolicy::Lenient).unwrap();
    assert!(r.shield_correction_c < 0.0);
}

#[test]
fn strict_rejects_non_finite_desired() {
    let inputs = bench_inputs(f64::INFINITY, Spool::Second);
    let err = calculate_checked(&inputs, InputPolicy::Strict).unwrap_err();
    assert_eq!(
        err.downcast_ref::<CalcError>(),
        Some(&CalcError::NonFinite { field: "desired" })
    );
}

#[rstest]
#[case(730.0, "\u{2212}6.3 \u{00B0}C")]
#[case(125.0, "\u{2212}3.3 \u{00B0}C")]
fn deviation_halfway_between_tenths_rounds_up(#[case] desired: f64, #[case] expected: &str) {
    let r = calculate(&bench_inputs(desired, Spool::Second));
    assert_eq!(r.display().deviation, expected);
}

#[test]
fn overflowing_shield_prints_negative_infinity() {
    let r = calculate(&SetpointInputs {
        desired_c: 800.0,
        shield: Measurement::millimeters(1e308),
        capsule: Measurement::millimeters(1e308),
        spool: Spool::Second,
    });
    assert_eq!(r.setpoint_c, f64::NEG_INFINITY);
    assert_eq!(r.display().setpoint, "-Infinity");
}
