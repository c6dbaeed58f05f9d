//! Integration tests for layered configuration and the tri-state boolean.

use endiscope::{
    config::CompressConfig,
    utils::{BoundedSetting, TriBool, TriState, Tribool},
    Error, Result,
};

/// Simulates parsing `key=value` pairs from a configuration layer.
fn parse_layer(pairs: &[(&str, u32)]) -> Result<CompressConfig> {
    let mut layer = CompressConfig::default();
    for &(key, value) in pairs {
        match key {
            "lzma.pb" => layer.lzma.pos_bits.try_set(value)?,
            "lzma.lc" => layer.lzma.lit_context_bits.try_set(value)?,
            "lzma.dict" => layer.lzma.dict_size.try_set(value)?,
            "zlib.window" => layer.zlib.window_bits.try_set(value)?,
            "zlib.strategy" => layer.zlib.strategy.try_set(value)?,
            _ => {
                return Err(Error::Malformed {
                    message: format!("unknown key {key}"),
                    file: file!(),
                    line: line!(),
                })
            }
        }
    }
    Ok(layer)
}

#[test]
fn file_then_command_line() -> Result<()> {
    let file = parse_layer(&[("lzma.dict", 1 << 20), ("zlib.window", 11)])?;
    let cli = parse_layer(&[("zlib.window", 14), ("lzma.pb", 0)])?;

    let config = CompressConfig::layered([&file, &cli]);
    assert_eq!(config.lzma.dict_size.get(), 1 << 20);
    assert_eq!(config.zlib.window_bits.get(), 14);
    assert_eq!(config.lzma.pos_bits.get(), 0);
    assert!(config.lzma.pos_bits.is_set());
    assert_eq!(config.lzma.lit_context_bits.get(), 3);
    assert!(!config.lzma.lit_context_bits.is_set());
    Ok(())
}

#[test]
fn out_of_range_layer_value_is_rejected() {
    let err = parse_layer(&[("zlib.window", 8)]).unwrap_err();
    assert!(matches!(
        err,
        Error::SettingOutOfRange {
            value: 8,
            min: 9,
            max: 15
        }
    ));
    assert_eq!(err.to_string(), "Setting value 8 is outside of [9, 15]");
}

#[test]
fn unknown_key_is_malformed() {
    assert!(matches!(
        parse_layer(&[("lzma.lp", 1)]),
        Err(Error::Malformed { .. })
    ));
}

#[test]
fn preset_overridden_by_layer() -> Result<()> {
    let mut config = CompressConfig::fast();
    let cli = parse_layer(&[("lzma.lc", 8)])?;
    assert_eq!(config.merge_from(&cli), 1);
    assert_eq!(config.lzma.lit_context_bits.get(), 8);
    assert_eq!(config.lzma.dict_size.get(), 1 << 16);
    Ok(())
}

#[test]
fn setting_exports_only_when_set() {
    let mut level: BoundedSetting<6, 1, 9> = BoundedSetting::new();
    let mut target = 3u32;
    assert!(!level.assign_into(&mut target));
    assert_eq!(target, 3);

    level.set(9);
    assert!(level.assign_into(&mut target));
    assert_eq!(target, 9);
    assert_eq!(u32::from(level), 9);
}

#[test]
fn tribool_flag_layers() {
    // A "--force" style flag: unspecified, explicitly off, explicitly on.
    let unspecified = Tribool::from_raw(-1);
    let off = Tribool::from(false);
    let on = Tribool::from(TriState::True);

    assert!(unspecified.is_third());
    assert!(!unspecified.to_bool());
    assert!(off.is_strict_false());
    assert!(on.is_strict_true());
    assert_eq!(on, TriState::True);

    let lenient = TriBool::<true>::from_raw(2);
    assert!(lenient.to_bool());
    assert!(bool::from(lenient));
    assert!(!bool::from(unspecified));
}
