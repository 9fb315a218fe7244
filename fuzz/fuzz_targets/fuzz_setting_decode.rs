//! Fuzz testing for setting decoding.
//!
//! This fuzz target feeds arbitrary byte sequences to every setting kind's
//! `read_binary` and to `read_changed`, checking that malformed input is
//! rejected without panicking and that a failed read leaves the box unchanged.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use setbox::settings::{read_changed, SettingsSink};
use setbox::{
    LoadBalancing, Setting, SettingFloat, SettingGroupByOverflowMode, SettingLoadBalancing,
    SettingMilliseconds, SettingOverflowMode, SettingSeconds, SettingTotalsMode, SettingUInt64,
    TotalsMode,
};

#[derive(Debug, Arbitrary)]
enum Target {
    UInt64,
    Float,
    Seconds,
    Milliseconds,
    LoadBalancing,
    TotalsMode,
    OverflowMode,
    GroupByOverflowMode,
    ChangedList,
}

#[derive(Debug, Arbitrary)]
struct DecodeInput {
    target: Target,
    text: String,
    data: Vec<u8>,
}

struct Sink {
    max_threads: SettingUInt64,
    overflow_mode: SettingOverflowMode,
    group_by_overflow_mode: SettingGroupByOverflowMode,
}

impl SettingsSink for Sink {
    fn setting_mut(&mut self, name: &str) -> Option<&mut dyn Setting> {
        match name {
            "max_threads" => Some(&mut self.max_threads),
            "overflow_mode" => Some(&mut self.overflow_mode),
            "group_by_overflow_mode" => Some(&mut self.group_by_overflow_mode),
            _ => None,
        }
    }
}

fn check(setting: &mut dyn Setting, text: &str, data: &[u8]) {
    let mut input = data;
    if setting.read_binary(&mut input).is_err() {
        assert!(!setting.is_changed());
    }
    let before = setting.to_text().ok();
    let changed = setting.is_changed();
    if setting.set_string(text).is_err() {
        assert_eq!(setting.to_text().ok(), before);
        assert_eq!(setting.is_changed(), changed);
    }
}

fuzz_target!(|input: DecodeInput| {
    let text = input.text.as_str();
    let data = input.data.as_slice();
    match input.target {
        Target::UInt64 => check(&mut SettingUInt64::default(), text, data),
        Target::Float => check(&mut SettingFloat::default(), text, data),
        Target::Seconds => check(&mut SettingSeconds::default(), text, data),
        Target::Milliseconds => check(&mut SettingMilliseconds::default(), text, data),
        Target::LoadBalancing => {
            check(&mut SettingLoadBalancing::new(LoadBalancing::Random), text, data)
        }
        Target::TotalsMode => check(
            &mut SettingTotalsMode::new(TotalsMode::AfterHavingInclusive),
            text,
            data,
        ),
        Target::OverflowMode => check(&mut SettingOverflowMode::default(), text, data),
        Target::GroupByOverflowMode => {
            check(&mut SettingGroupByOverflowMode::default(), text, data)
        }
        Target::ChangedList => {
            let mut sink = Sink {
                max_threads: SettingUInt64::default(),
                overflow_mode: SettingOverflowMode::default(),
                group_by_overflow_mode: SettingGroupByOverflowMode::default(),
            };
            let mut input = data;
            let _ = read_changed(&mut input, &mut sink);
        }
    }
});
