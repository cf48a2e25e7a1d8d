//! Setpoint, conversion and lookup commands.

use eyre::Result;
use serde_json::json;
use tcset_core::{
    Apparatus, CalcCfg, Dataset, InputPolicy, Measurement, SessionBuilder, Spool, Unit,
    calculate_checked, parse_number,
};

/// CLI overrides applied on top of the config, in this order: apparatus,
/// spool, unit, then field values.
#[derive(Debug, Default)]
pub struct CalcArgs {
    pub apparatus: Option<Apparatus>,
    pub spool: Option<Spool>,
    pub unit: Option<Unit>,
    pub shield: Option<String>,
    pub capsule: Option<String>,
    pub temp: Option<String>,
    pub strict: bool,
}

pub fn run_calc(cfg: &tcset_config::Config, args: CalcArgs, json_out: bool) -> Result<()> {
    let mut calc_cfg = CalcCfg::from(cfg);
    if args.strict {
        calc_cfg.policy = InputPolicy::Strict;
    }
    let mut session = SessionBuilder::from_cfg(calc_cfg).build()?;

    if let Some(a) = args.apparatus {
        session.set_apparatus(a);
    }
    if let Some(s) = args.spool {
        session.set_spool(s);
    }
    if let Some(u) = args.unit {
        session.set_unit(u);
    }
    if let Some(v) = args.shield {
        session.set_shield(v);
    }
    if let Some(v) = args.capsule {
        session.set_capsule(v);
    }
    if let Some(v) = args.temp {
        session.set_desired(v);
    }

    let inputs = session.inputs()?;
    let result = calculate_checked(&inputs, session.policy())?;
    let shown = result.display();
    tracing::info!(
        apparatus = %session.apparatus(),
        spool = %session.spool(),
        desired_c = result.desired_c,
        setpoint_c = result.setpoint_c,
        "setpoint calculated"
    );

    if json_out {
        let obj = json!({
            "apparatus": session.apparatus().name(),
            "spool": session.spool().name(),
            "unit": session.unit().code(),
            "inputs": {
                "desired_c": inputs.desired_c,
                "shield": inputs.shield.value,
                "capsule": inputs.capsule.value,
                "shield_mm": inputs.shield.to_millimeters(),
                "capsule_mm": inputs.capsule.to_millimeters(),
            },
            "shield_correction_c": result.shield_correction_c,
            "deviation_c": result.deviation_c,
            "setpoint_c": result.setpoint_c,
            "display": {
                "setpoint": shown.setpoint,
                "desired": shown.desired,
                "shield": shown.shield,
                "deviation": shown.deviation,
            },
        });
        println!("{obj}");
    } else {
        println!(
            "Apparatus: {}  Spool: {}  Unit: {}",
            session.apparatus(),
            session.spool(),
            session.unit().label()
        );
        println!("Shield: {}  Capsule: {}", inputs.shield, inputs.capsule);
        println!("{shown}");
    }
    Ok(())
}

pub fn run_convert(value: &str, from: Unit, policy: InputPolicy, json_out: bool) -> Result<()> {
    let v = parse_number("value", value, policy)?;
    let to = match from {
        Unit::Inches => Unit::Millimeters,
        Unit::Millimeters => Unit::Inches,
    };
    let converted = Measurement::new(v, from).convert(to);
    if json_out {
        let obj = json!({
            "from": { "value": v, "unit": from.code() },
            "to": { "value": converted.value, "unit": to.code() },
            "display": converted.display_value(),
        });
        println!("{obj}");
    } else {
        println!("{converted}");
    }
    Ok(())
}

pub fn run_lookup(dataset: Dataset, x: &str, policy: InputPolicy, json_out: bool) -> Result<()> {
    let x = parse_number("x", x, policy)?;
    let table = dataset.table();
    let y = table.interpolate(x);
    let clamped = table
        .x_range()
        .is_some_and(|(lo, hi)| x <= lo || x >= hi);
    tracing::debug!(table = table.name(), x, y, clamped, "lookup");
    if json_out {
        println!(
            "{}",
            json!({ "table": table.name(), "x": x, "y": y, "clamped": clamped })
        );
    } else {
        println!("{y}");
    }
    Ok(())
}
