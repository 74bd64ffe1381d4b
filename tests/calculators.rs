//! 충전 빈도, 비용, CO₂ 계산 테스트.
use approx::assert_relative_eq;
use ev_charge_calculator::calc::{
    calculate_annual_charging_cost, calculate_charging_cost, calculate_co2_savings,
    calculate_cost_summary, calculate_effective_range, calculate_weekly_charges,
    default_co2_savings, tips, weekly_ev_charge_estimator, ChargingCostInput, CostError,
    CostSummaryInput, FrequencyInput, Tariff,
};
use ev_charge_calculator::i18n::keys;

fn default_frequency() -> FrequencyInput {
    FrequencyInput {
        weekly_distance_km: 250.0,
        battery_kwh: 60.0,
        consumption_kwh_per_100km: 16.0,
        usable_fraction: 0.9,
    }
}

#[test]
fn weekly_frequency_example() {
    let res = weekly_ev_charge_estimator(default_frequency());
    assert_relative_eq!(res.effective_range_km, 337.5);
    assert_eq!(res.weekly_charges, 1);
    assert!(!res.safety_charge_added);
}

#[test]
fn safety_charge_when_ratio_fraction_above_threshold() {
    // 330 / 337.5 ≈ 0.978
    let res = weekly_ev_charge_estimator(FrequencyInput {
        weekly_distance_km: 330.0,
        ..default_frequency()
    });
    assert_eq!(res.weekly_charges, 2);
    assert!(res.safety_charge_added);
}

#[test]
fn no_range_means_no_charges() {
    assert_relative_eq!(calculate_effective_range(60.0, 0.0, 0.9), 0.0);
    assert_eq!(calculate_weekly_charges(250.0, 0.0), 0);
    assert_eq!(calculate_weekly_charges(700.0, 337.5), 3);
}

#[test]
fn effective_range_is_rounded() {
    // 75 * 0.85 / 17 * 100 = 375
    assert_relative_eq!(calculate_effective_range(75.0, 17.0, 0.85), 375.0);
    // 40 * 0.9 / 22 * 100 = 163.636...
    assert_relative_eq!(calculate_effective_range(40.0, 22.0, 0.9), 163.64);
}

#[test]
fn time_of_use_blends_rates() {
    let tariff = Tariff::TimeOfUse {
        peak_rate: 0.25,
        off_peak_rate: 0.10,
        off_peak_share_percent: 70.0,
    };
    assert_relative_eq!(tariff.effective_rate(), 0.145, epsilon = 1e-12);

    let clamped = Tariff::TimeOfUse {
        peak_rate: 0.25,
        off_peak_rate: 0.10,
        off_peak_share_percent: 150.0,
    };
    assert_relative_eq!(clamped.effective_rate(), 0.10);
}

#[test]
fn fees_and_tax_are_added() {
    let res = calculate_charging_cost(&ChargingCostInput {
        energy_needed_kwh: 40.0,
        tariff: Tariff::Flat { rate: 0.15 },
        include_fees: true,
        fixed_fee: 2.0,
        tax_rate_percent: 10.0,
    })
    .expect("cost");
    assert_relative_eq!(res.energy_cost, 6.0, epsilon = 1e-9);
    assert_relative_eq!(res.fees, 2.0);
    assert_relative_eq!(res.tax, 0.8, epsilon = 1e-9);
    assert_relative_eq!(res.total_cost, 8.8, epsilon = 1e-9);
}

#[test]
fn fees_ignored_unless_included() {
    let res = calculate_charging_cost(&ChargingCostInput {
        energy_needed_kwh: 40.0,
        tariff: Tariff::Flat { rate: 0.15 },
        include_fees: false,
        fixed_fee: 2.0,
        tax_rate_percent: 10.0,
    })
    .expect("cost");
    assert_relative_eq!(res.fees, 0.0);
    assert_relative_eq!(res.tax, 0.0);
    assert_relative_eq!(res.total_cost, 6.0, epsilon = 1e-9);
}

#[test]
fn negative_energy_is_rejected() {
    let res = calculate_charging_cost(&ChargingCostInput {
        energy_needed_kwh: -1.0,
        tariff: Tariff::Flat { rate: 0.15 },
        include_fees: false,
        fixed_fee: 0.0,
        tax_rate_percent: 0.0,
    });
    assert!(matches!(res, Err(CostError::InvalidInput(_))));
}

#[test]
fn cost_summary_with_defaults() {
    let summary = calculate_cost_summary(&CostSummaryInput {
        weekly_distance_km: 250.0,
        battery_kwh: 60.0,
        initial_charge_percent: 20.0,
        target_charge_percent: 80.0,
        charging_efficiency_percent: 90.0,
        consumption_kwh_per_100km: 16.0,
        tariff: Tariff::Flat { rate: 0.15 },
    })
    .expect("summary");
    // 1회 225 km → 주 2회
    assert_eq!(summary.weekly_charges, 2);
    assert_relative_eq!(summary.energy_per_charge_kwh, 40.0, epsilon = 1e-9);
    assert_relative_eq!(summary.cost_per_charge, 6.0, epsilon = 1e-9);
    assert_relative_eq!(summary.weekly_cost, 12.0, epsilon = 1e-9);
    assert_relative_eq!(summary.monthly_cost, 51.96, epsilon = 1e-9);
    assert_relative_eq!(summary.annual_cost, 624.0, epsilon = 1e-9);
}

#[test]
fn cost_summary_rejects_inverted_charge_levels() {
    let res = calculate_cost_summary(&CostSummaryInput {
        weekly_distance_km: 250.0,
        battery_kwh: 60.0,
        initial_charge_percent: 80.0,
        target_charge_percent: 20.0,
        charging_efficiency_percent: 90.0,
        consumption_kwh_per_100km: 16.0,
        tariff: Tariff::Flat { rate: 0.15 },
    });
    assert!(res.is_err());
}

#[test]
fn annual_cost_from_weekly_charges() {
    // 2 * 54 kWh * 0.15 * 52
    assert_relative_eq!(
        calculate_annual_charging_cost(2, 60.0, 0.15, 0.9),
        842.4,
        epsilon = 1e-9
    );
}

#[test]
fn co2_savings() {
    // 250 km * 52 = 13000 km, (120 - 30) g/km
    assert_relative_eq!(default_co2_savings(250.0), 1170.0, epsilon = 1e-9);
    assert_relative_eq!(calculate_co2_savings(100.0, 200.0, 0.0), 1040.0, epsilon = 1e-9);
}

#[test]
fn charging_time_tips_follow_rules() {
    let fast = tips::charging_time_tips(&tips::ChargingTimeTipInput {
        battery_kwh: 120.0,
        target_charge_percent: 95.0,
        charging_power_kw: 150.0,
        charging_efficiency_percent: 80.0,
        hours: 0,
        minutes: 20,
    });
    assert_eq!(fast[0], keys::TIP_OFF_PEAK);
    for key in [
        keys::TIP_DC_DEGRADATION,
        keys::TIP_FULL_CHARGE_DEGRADATION,
        keys::TIP_LOW_EFFICIENCY,
        keys::TIP_SMART_CHARGING_LARGE,
        keys::TIP_QUICK_TOP_UP,
    ] {
        assert!(fast.contains(&key), "missing {key}");
    }
    assert!(!fast.contains(&keys::TIP_OVERNIGHT));

    let slow = tips::charging_time_tips(&tips::ChargingTimeTipInput {
        battery_kwh: 60.0,
        target_charge_percent: 40.0,
        charging_power_kw: 3.7,
        charging_efficiency_percent: 90.0,
        hours: 9,
        minutes: 0,
    });
    assert!(slow.contains(&keys::TIP_OVERNIGHT));
    assert!(slow.contains(&keys::TIP_SHALLOW_CYCLES));
    assert!(slow.contains(&keys::TIP_HIGHER_POWER));
}

#[test]
fn frequency_tips_follow_rules() {
    let list = tips::frequency_tips(&tips::FrequencyTipInput {
        weekly_distance_km: 250.0,
        battery_kwh: 60.0,
        consumption_kwh_per_100km: 16.0,
        usable_fraction: 0.9,
        effective_range_km: 337.5,
        weekly_charges: 1,
    });
    assert_eq!(list, vec![keys::TIP_PLAN_SCHEDULE, keys::TIP_OPTIMAL_FREQUENCY]);

    let heavy = tips::frequency_tips(&tips::FrequencyTipInput {
        weekly_distance_km: 1500.0,
        battery_kwh: 40.0,
        consumption_kwh_per_100km: 22.0,
        usable_fraction: 0.9,
        effective_range_km: 163.64,
        weekly_charges: 10,
    });
    for key in [
        keys::TIP_LONGER_RANGE_VEHICLE,
        keys::TIP_HIGH_CONSUMPTION,
        keys::TIP_SMALL_BATTERY,
        keys::TIP_RANGE_CLOSE_TO_DISTANCE,
    ] {
        assert!(heavy.contains(&key), "missing {key}");
    }
}

#[test]
fn fixed_tip_lists() {
    assert_eq!(tips::cost_tips().len(), 5);
    assert_eq!(tips::error_tips().len(), 2);
}
