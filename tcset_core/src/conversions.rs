//! `From` implementations bridging `tcset_config` types to `tcset_core` types.

use crate::config::{CalcCfg, Defaults};
use crate::input::InputPolicy;
use crate::types::{Apparatus, Selection, Spool};
use crate::units::Unit;

// ── Selection ────────────────────────────────────────────────────────────────

impl From<tcset_config::Apparatus> for Apparatus {
    fn from(a: tcset_config::Apparatus) -> Self {
        match a {
            tcset_config::Apparatus::Rosie => Self::Rosie,
            tcset_config::Apparatus::Taylor => Self::Taylor,
        }
    }
}

impl From<tcset_config::Spool> for Spool {
    fn from(s: tcset_config::Spool) -> Self {
        match s {
            tcset_config::Spool::First => Self::First,
            tcset_config::Spool::Second => Self::Second,
        }
    }
}

impl From<&tcset_config::Selection> for Selection {
    fn from(c: &tcset_config::Selection) -> Self {
        let apparatus = Apparatus::from(c.apparatus);
        Self {
            apparatus,
            spool: c.spool.map_or(apparatus.default_spool(), Spool::from),
        }
    }
}

// ── Unit / policy ────────────────────────────────────────────────────────────

impl From<tcset_config::Unit> for Unit {
    fn from(u: tcset_config::Unit) -> Self {
        match u {
            tcset_config::Unit::Inches => Self::Inches,
            tcset_config::Unit::Millimeters => Self::Millimeters,
        }
    }
}

impl From<tcset_config::InputPolicy> for InputPolicy {
    fn from(p: tcset_config::InputPolicy) -> Self {
        match p {
            tcset_config::InputPolicy::Lenient => Self::Lenient,
            tcset_config::InputPolicy::Strict => Self::Strict,
        }
    }
}

// ── Defaults ─────────────────────────────────────────────────────────────────

impl From<&tcset_config::Defaults> for Defaults {
    fn from(c: &tcset_config::Defaults) -> Self {
        Self {
            shield_in: c.shield_in,
            capsule_in: c.capsule_in,
            desired_c: c.desired_c,
        }
    }
}

// ── Whole config ─────────────────────────────────────────────────────────────

impl From<&tcset_config::Config> for CalcCfg {
    fn from(c: &tcset_config::Config) -> Self {
        Self {
            selection: (&c.selection).into(),
            unit: c.selection.unit.into(),
            defaults: (&c.defaults).into(),
            policy: c.input.policy.into(),
        }
    }
}
