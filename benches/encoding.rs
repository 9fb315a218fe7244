//! Wire encoding benchmarks for setbox
//!
//! These benchmarks measure the varint and string codecs and the cost of
//! writing and reading a changed-settings packet, which happens once per
//! remote query.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use setbox::encoding::{decode_string, decode_varint, encode_varint, write_string};
use setbox::settings::{read_changed, write_changed, SettingsSink};
use setbox::{
    Setting, SettingGroupByOverflowMode, SettingMilliseconds, SettingSeconds, SettingTotalsMode,
    SettingUInt64, TotalsMode,
};
use std::hint::black_box as hint_black_box;

fn bench_varint_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("varint_encode");

    let test_values: Vec<(u64, &str)> = vec![
        (0, "zero"),
        (127, "1_byte_max"),
        (16383, "2_byte_max"),
        (2097151, "3_byte_max"),
        (268435455, "4_byte_max"),
        (u64::MAX, "max_u64"),
    ];

    for (value, name) in test_values {
        group.bench_with_input(BenchmarkId::new("encode", name), &value, |b, &value| {
            let mut buf = [0u8; 10];
            b.iter(|| {
                let len = encode_varint(black_box(value), &mut buf);
                hint_black_box(len)
            });
        });
    }

    group.finish();
}

fn bench_varint_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("varint_decode");

    let test_values: Vec<(u64, &str)> = vec![
        (0, "zero"),
        (127, "1_byte_max"),
        (16383, "2_byte_max"),
        (268435455, "4_byte_max"),
        (u64::MAX, "max_u64"),
    ];

    for (value, name) in test_values {
        let mut buf = [0u8; 10];
        let len = encode_varint(value, &mut buf);

        group.bench_with_input(BenchmarkId::new("decode", name), &buf[..len], |b, data| {
            b.iter(|| {
                let result = decode_varint(black_box(data));
                hint_black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_string");

    for name in ["any", "nearest_hostname", "after_having_inclusive"] {
        group.bench_with_input(BenchmarkId::new("write", name), name, |b, name| {
            let mut out: Vec<u8> = Vec::with_capacity(32);
            b.iter(|| {
                out.clear();
                write_string(black_box(name), &mut out).unwrap();
                hint_black_box(out.len())
            });
        });

        let mut encoded: Vec<u8> = Vec::new();
        write_string(name, &mut encoded).unwrap();
        group.bench_with_input(BenchmarkId::new("decode", name), &encoded, |b, data| {
            b.iter(|| {
                let result = decode_string(black_box(data));
                hint_black_box(result.map(|(s, n)| s.len() + n).ok())
            });
        });
    }

    group.finish();
}

struct Session {
    max_threads: SettingUInt64,
    max_rows_to_group_by: SettingUInt64,
    receive_timeout: SettingSeconds,
    poll_interval: SettingMilliseconds,
    totals_mode: SettingTotalsMode,
    group_by_overflow_mode: SettingGroupByOverflowMode,
}

impl Session {
    fn new() -> Self {
        Self {
            max_threads: SettingUInt64::new(8),
            max_rows_to_group_by: SettingUInt64::new(0),
            receive_timeout: SettingSeconds::new(300),
            poll_interval: SettingMilliseconds::new(10),
            totals_mode: SettingTotalsMode::new(TotalsMode::AfterHavingInclusive),
            group_by_overflow_mode: SettingGroupByOverflowMode::default(),
        }
    }

    fn entries(&self) -> [(&'static str, &dyn Setting); 6] {
        [
            ("max_threads", &self.max_threads as &dyn Setting),
            ("max_rows_to_group_by", &self.max_rows_to_group_by as &dyn Setting),
            ("receive_timeout", &self.receive_timeout as &dyn Setting),
            ("poll_interval", &self.poll_interval as &dyn Setting),
            ("totals_mode", &self.totals_mode as &dyn Setting),
            ("group_by_overflow_mode", &self.group_by_overflow_mode as &dyn Setting),
        ]
    }
}

impl SettingsSink for Session {
    fn setting_mut(&mut self, name: &str) -> Option<&mut dyn Setting> {
        match name {
            "max_threads" => Some(&mut self.max_threads),
            "max_rows_to_group_by" => Some(&mut self.max_rows_to_group_by),
            "receive_timeout" => Some(&mut self.receive_timeout),
            "poll_interval" => Some(&mut self.poll_interval),
            "totals_mode" => Some(&mut self.totals_mode),
            "group_by_overflow_mode" => Some(&mut self.group_by_overflow_mode),
            _ => None,
        }
    }
}

fn bench_changed_settings(c: &mut Criterion) {
    let mut group = c.benchmark_group("changed_settings");

    let mut session = Session::new();
    session.max_threads.set(16);
    session.max_rows_to_group_by.set(1_000_000);
    session.poll_interval.set(250);
    session.totals_mode.set(TotalsMode::AfterHavingAuto);
    session.group_by_overflow_mode.set_string("any").unwrap();

    group.bench_function("write", |b| {
        let mut out: Vec<u8> = Vec::with_capacity(128);
        b.iter(|| {
            out.clear();
            let written = write_changed(black_box(&session.entries()), &mut out).unwrap();
            hint_black_box(written)
        });
    });

    let mut packet: Vec<u8> = Vec::new();
    write_changed(&session.entries(), &mut packet).unwrap();

    group.bench_function("read", |b| {
        b.iter(|| {
            let mut remote = Session::new();
            let applied = read_changed(&mut black_box(packet.as_slice()), &mut remote).unwrap();
            hint_black_box(applied.len())
        });
    });

    group.bench_function("set_string_uint64", |b| {
        let mut limit = SettingUInt64::new(0);
        b.iter(|| {
            limit.set_string(black_box("1000000")).unwrap();
            hint_black_box(limit.get())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_varint_encode,
    bench_varint_decode,
    bench_string,
    bench_changed_settings,
);
criterion_main!(benches);
