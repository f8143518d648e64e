//! Volume-delta classification for daily and weekly cadence.

use crate::indicators::resolver::{self, latest, Resolved};
use crate::models::signal::{Side, SignalValue};

/// Latest volume must reach this multiple of the prior one to count as higher.
pub const HIGHER_VOLUME_RATIO: f64 = 1.2;
pub const PRICE_UP_RATIO: f64 = 1.02;
pub const PRICE_DOWN_RATIO: f64 = 0.98;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeTrend {
    Higher,
    Lower,
    /// No volume series was supplied.
    Indeterminate,
}

/// Compare the last volume with the second-to-last one.
///
/// Missing history resolves to NaN, which compares false and therefore
/// reads as `Lower`.
pub fn volume_trend(volume: Option<&[f64]>) -> VolumeTrend {
    let last = resolver::last(volume);
    let prior = resolver::second_last(volume);
    match last.ge(prior.scale(HIGHER_VOLUME_RATIO)) {
        Some(true) => VolumeTrend::Higher,
        Some(false) => VolumeTrend::Lower,
        None => VolumeTrend::Indeterminate,
    }
}

fn delta_signal(
    up_move: Option<bool>,
    down_move: Option<bool>,
    trend: VolumeTrend,
) -> SignalValue {
    if up_move == Some(true) && trend == VolumeTrend::Higher {
        SignalValue::VolumeDelta(Side::Buy)
    } else if down_move == Some(true) && trend == VolumeTrend::Lower {
        SignalValue::VolumeDelta(Side::Sell)
    } else {
        SignalValue::NoSignal
    }
}

/// Daily volume-delta signal.
///
/// Buy: latest close >= 1.02 x prior close on higher volume.
/// Sell: latest close <= 0.98 x prior close on lower volume.
pub fn daily_delta(close: &[f64], volume: Option<&[f64]>) -> SignalValue {
    let current = Resolved::Number(latest(close));
    let prior = resolver::second_last(Some(close));
    delta_signal(
        current.ge(prior.scale(PRICE_UP_RATIO)),
        current.le(prior.scale(PRICE_DOWN_RATIO)),
        volume_trend(volume),
    )
}

/// Weekly volume-delta signal.
///
/// Buy: latest weekly high >= 1.02 x prior weekly close on higher volume.
/// Sell: latest weekly low <= 0.98 x prior weekly close on lower volume.
pub fn weekly_delta(
    high: Option<&[f64]>,
    low: Option<&[f64]>,
    close: Option<&[f64]>,
    volume: Option<&[f64]>,
) -> SignalValue {
    let prior_close = resolver::second_last(close);
    delta_signal(
        resolver::last(high).ge(prior_close.scale(PRICE_UP_RATIO)),
        resolver::last(low).le(prior_close.scale(PRICE_DOWN_RATIO)),
        volume_trend(volume),
    )
}
