#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Parse errors and validation errors are both fine; panics are not.
    if let Ok(cfg) = tcset_config::load_toml(data) {
        if cfg.validate().is_ok() {
            // A valid config must always yield a session
            let calc = tcset_core::CalcCfg::from(&cfg);
            assert!(tcset_core::SessionBuilder::from_cfg(calc).build().is_ok());
        }
    }
});
