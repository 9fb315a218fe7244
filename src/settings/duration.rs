//! # Duration Setting Boxes
//!
//! Both boxes hold a `Duration` internally, so callers see sub-second
//! precision regardless of which box a timeout lives in. They differ only in
//! the unit spoken on the outside:
//!
//! | Box | `new` / `set` / text / `Field` / wire |
//! |-----|---------------------------------------|
//! | `SettingSeconds` | whole seconds |
//! | `SettingMilliseconds` | whole milliseconds |
//!
//! `write_binary` emits the duration truncated to the box's unit, not an
//! internal tick count. A `SettingSeconds` holding 1.5 s goes on the wire as
//! `1`; the half second is dropped silently. Round trips are exact only for
//! unit-aligned values.

use crate::config::MILLIS_PER_SECOND;
use std::time::Duration;

fn whole_seconds(value: Duration) -> u64 {
    value.as_secs()
}

fn whole_millis(value: Duration) -> u64 {
    value
        .as_secs()
        .saturating_mul(MILLIS_PER_SECOND)
        .saturating_add(value.subsec_millis() as u64)
}

duration_setting! {
    /// Timeout configured in whole seconds, e.g. `receive_timeout`.
    SettingSeconds {
        unit: "seconds",
        from_count: Duration::from_secs,
        to_count: whole_seconds,
        total: total_seconds,
    }
}

duration_setting! {
    /// Interval configured in whole milliseconds, e.g. `poll_interval`.
    SettingMilliseconds {
        unit: "milliseconds",
        from_count: Duration::from_millis,
        to_count: whole_millis,
        total: total_milliseconds,
    }
}
