//! # Query Mode Enumerations
//!
//! The closed enumerations behind the enumerated settings, their name tables,
//! and the setting kinds built on them.
//!
//! | Setting box | Values |
//! |-------------|--------|
//! | `SettingLoadBalancing` | `random`, `nearest_hostname` |
//! | `SettingTotalsMode` | `before_having`, `after_having_inclusive`, `after_having_exclusive`, `after_having_auto` |
//! | `SettingOverflowMode` | `throw`, `break` |
//! | `SettingGroupByOverflowMode` | `throw`, `break`, `any` |
//!
//! The two overflow-mode boxes share one value type and one table. `any` is
//! meaningful only while building a GROUP BY set, so the general kind rejects
//! it after lookup with `IllegalValue`.

use super::enums::{EnumKind, NameTable, SettingEnum};
use crate::config::{DEFAULT_OVERFLOW_MODE, GROUP_BY_OVERFLOW_MODE_NAME};
use crate::error::{Result, SettingError};
use phf::phf_map;

/// Replica selection strategy for distributed reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LoadBalancing {
    /// Random replica among those with the fewest errors.
    Random = 0,
    /// Among replicas with the fewest errors, the one whose hostname differs
    /// from the local hostname in the fewest characters.
    NearestHostname = 1,
}

pub static LOAD_BALANCING_NAMES: NameTable<LoadBalancing> = NameTable::new(
    "load balancing mode",
    phf_map! {
        "random" => LoadBalancing::Random,
        "nearest_hostname" => LoadBalancing::NearestHostname,
    },
    &["random", "nearest_hostname"],
);

enum_value!(LoadBalancing, LOAD_BALANCING_NAMES);

/// Which rows feed the TOTALS row of a GROUP BY WITH TOTALS query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TotalsMode {
    /// Totals over every row read, including rows cut by `max_rows_to_group_by`
    /// and rows that failed HAVING.
    BeforeHaving = 0,
    /// Every row except those that failed HAVING; rows cut by
    /// `max_rows_to_group_by` are included.
    AfterHavingInclusive = 1,
    /// Only rows that passed both `max_rows_to_group_by` and HAVING.
    AfterHavingExclusive = 2,
    /// Chooses between inclusive and exclusive automatically.
    AfterHavingAuto = 3,
}

pub static TOTALS_MODE_NAMES: NameTable<TotalsMode> = NameTable::new(
    "totals mode",
    phf_map! {
        "before_having" => TotalsMode::BeforeHaving,
        "after_having_inclusive" => TotalsMode::AfterHavingInclusive,
        "after_having_exclusive" => TotalsMode::AfterHavingExclusive,
        "after_having_auto" => TotalsMode::AfterHavingAuto,
    },
    &[
        "before_having",
        "after_having_inclusive",
        "after_having_exclusive",
        "after_having_auto",
    ],
);

enum_value!(TotalsMode, TOTALS_MODE_NAMES);

/// What to do when a query limit is exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OverflowMode {
    /// Fail the query.
    Throw = 0,
    /// Stop executing and return what has been computed so far.
    Break = 1,
    /// GROUP BY only: stop adding new keys to the set but keep aggregating
    /// keys already in it.
    Any = 2,
}

pub static OVERFLOW_MODE_NAMES: NameTable<OverflowMode> = NameTable::new(
    "overflow mode",
    phf_map! {
        "throw" => OverflowMode::Throw,
        "break" => OverflowMode::Break,
        "any" => OverflowMode::Any,
    },
    &["throw", "break", "any"],
);

enum_value!(OverflowMode, OVERFLOW_MODE_NAMES);

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadBalancingKind;

impl EnumKind for LoadBalancingKind {
    type Value = LoadBalancing;

    fn table() -> &'static NameTable<LoadBalancing> {
        &LOAD_BALANCING_NAMES
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TotalsModeKind;

impl EnumKind for TotalsModeKind {
    type Value = TotalsMode;

    fn table() -> &'static NameTable<TotalsMode> {
        &TOTALS_MODE_NAMES
    }
}

/// Overflow-mode kind; `ALLOW_ANY` decides whether `any` is legal.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverflowModeKind<const ALLOW_ANY: bool>;

impl<const ALLOW_ANY: bool> EnumKind for OverflowModeKind<ALLOW_ANY> {
    type Value = OverflowMode;

    fn table() -> &'static NameTable<OverflowMode> {
        &OVERFLOW_MODE_NAMES
    }

    fn check(value: OverflowMode) -> Result<OverflowMode> {
        if value == OverflowMode::Any && !ALLOW_ANY {
            tracing::debug!("rejected overflow mode 'any' outside group by");
            return Err(SettingError::IllegalValue {
                setting: OVERFLOW_MODE_NAMES.setting(),
                value: "any".to_string(),
                reason: format!("is only for '{}'", GROUP_BY_OVERFLOW_MODE_NAME),
            });
        }
        Ok(value)
    }
}

pub type SettingLoadBalancing = SettingEnum<LoadBalancingKind>;
pub type SettingTotalsMode = SettingEnum<TotalsModeKind>;
/// Overflow behavior for general limits; `any` is illegal.
pub type SettingOverflowMode = SettingEnum<OverflowModeKind<false>>;
/// Overflow behavior for `max_rows_to_group_by`; `any` is legal.
pub type SettingGroupByOverflowMode = SettingEnum<OverflowModeKind<true>>;

impl<const ALLOW_ANY: bool> SettingEnum<OverflowModeKind<ALLOW_ANY>> {
    /// Whether this kind accepts `any`.
    pub const fn allows_any() -> bool {
        ALLOW_ANY
    }
}

impl<const ALLOW_ANY: bool> Default for SettingEnum<OverflowModeKind<ALLOW_ANY>> {
    fn default() -> Self {
        Self::new(DEFAULT_OVERFLOW_MODE)
    }
}
