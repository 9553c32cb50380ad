//! Fixed-formula return-on-investment estimate.
//!
//! Formula, with `rate` and `cost` taken from `RoiConfig`:
//!
//! - `events_prevented = round(total_adverse_events * rate)`
//! - `cost_savings     = round(total_cost * rate)`
//! - `net_savings      = cost_savings - cost`
//! - `roi              = round(net_savings / cost * 100)`
//!
//! With no adverse events nothing is prevented, so the estimate is a net
//! loss of the whole implementation cost (`roi = -100`).

use rxguard_contracts::{interaction::InteractionStatistics, report::RoiEstimate};

use crate::config::RoiConfig;

/// Round half toward positive infinity, so `-2.5` becomes `-2`.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Estimate the return on deploying interaction checking for `stats`.
pub fn estimate_roi(stats: &InteractionStatistics, config: &RoiConfig) -> RoiEstimate {
    let cost = config.implementation_cost;
    let rate = config.prevention_rate;

    if stats.total_adverse_events == 0 {
        return RoiEstimate {
            prevention_rate: rate,
            implementation_cost: cost,
            total_adverse_events: 0,
            events_prevented: 0,
            cost_savings: 0.0,
            net_savings: -cost,
            roi: -100.0,
        };
    }

    let events_prevented = round_half_up(stats.total_adverse_events as f64 * rate) as u64;
    let cost_savings = round_half_up(stats.total_cost as f64 * rate);
    let net_savings = cost_savings - cost;
    let roi = round_half_up(net_savings / cost * 100.0);

    RoiEstimate {
        prevention_rate: rate,
        implementation_cost: cost,
        total_adverse_events: stats.total_adverse_events,
        events_prevented,
        cost_savings,
        net_savings,
        roi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(events: u64, cost: u64) -> InteractionStatistics {
        InteractionStatistics {
            total_interactions: 1,
            max_severity: 8,
            total_adverse_events: events,
            total_cost: cost,
            ..Default::default()
        }
    }

    #[test]
    fn zero_events_is_a_full_loss() {
        let config = RoiConfig::default();
        let roi = estimate_roi(&InteractionStatistics::default(), &config);

        assert_eq!(roi.events_prevented, 0);
        assert_eq!(roi.cost_savings, 0.0);
        assert_eq!(roi.net_savings, -config.implementation_cost);
        assert_eq!(roi.roi, -100.0);
    }

    #[test]
    fn formula_with_default_rate() {
        let config = RoiConfig {
            prevention_rate: 0.85,
            implementation_cost: 50_000.0,
        };
        // 120 events, 120 * 2_500 = 300_000 total cost.
        let roi = estimate_roi(&stats(120, 300_000), &config);

        assert_eq!(roi.events_prevented, 102);
        assert_eq!(roi.cost_savings, 255_000.0);
        assert_eq!(roi.net_savings, 205_000.0);
        assert_eq!(roi.roi, 410.0);
    }

    #[test]
    fn events_prevented_rounds_half_up() {
        let config = RoiConfig {
            prevention_rate: 0.5,
            implementation_cost: 100.0,
        };
        // 3 * 0.5 = 1.5 → 2
        let roi = estimate_roi(&stats(3, 10), &config);
        assert_eq!(roi.events_prevented, 2);
        // savings 5, net -95, roi -95
        assert_eq!(roi.cost_savings, 5.0);
        assert_eq!(roi.roi, -95.0);
    }

    #[test]
    fn negative_half_rounds_toward_positive() {
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }
}
