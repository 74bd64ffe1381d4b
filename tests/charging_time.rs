//! 충전 시간 추정 회귀 테스트.
use approx::assert_relative_eq;
use ev_charge_calculator::calc::{
    charge_segments, derate_power, estimate, temperature_multiplier, ChargeError, ChargeRequest,
    ChargingType, LimitingFactor,
};

fn home_request() -> ChargeRequest {
    ChargeRequest {
        battery_capacity_kwh: 60.0,
        initial_charge_percent: 20.0,
        target_charge_percent: 80.0,
        requested_power_kw: 11.0,
        charging_efficiency_percent: 90.0,
        ambient_temperature_c: 20.0,
        phase_count: 3,
        charging_type: ChargingType::Ac,
    }
}

#[test]
fn home_charger_example() {
    let res = estimate(&home_request()).expect("estimate");
    assert_relative_eq!(res.actual_power_kw, 11.0);
    assert_eq!(res.limiting_factor, None);
    assert_relative_eq!(res.energy_needed_kwh, 40.0, epsilon = 1e-9);
    // 20/11 + 13.33/9.9 + 6.67/7.7 ≈ 4.0308 h
    assert_eq!(res.hours, 4);
    assert_eq!(res.minutes, 2);
}

#[test]
fn example_segments_follow_curve() {
    let segs = charge_segments(20.0, 80.0);
    let bounds: Vec<(f64, f64, f64)> = segs
        .iter()
        .map(|s| (s.start_percent, s.end_percent, s.speed_multiplier))
        .collect();
    assert_eq!(bounds, vec![(20.0, 50.0, 1.0), (50.0, 70.0, 0.9), (70.0, 80.0, 0.7)]);
}

#[test]
fn segments_cover_full_range() {
    let segs = charge_segments(0.0, 100.0);
    assert_eq!(segs.len(), 5);
    assert_relative_eq!(segs[0].start_percent, 0.0);
    assert_relative_eq!(segs[4].end_percent, 100.0);
    assert_relative_eq!(segs[4].speed_multiplier, 0.2);
    for pair in segs.windows(2) {
        assert_relative_eq!(pair[0].end_percent, pair[1].start_percent);
    }
}

#[test]
fn segment_inside_single_band() {
    let segs = charge_segments(72.0, 78.0);
    assert_eq!(segs.len(), 1);
    assert_relative_eq!(segs[0].speed_multiplier, 0.7);
}

#[test]
fn same_input_same_output() {
    let req = home_request();
    assert_eq!(estimate(&req), estimate(&req));
}

#[test]
fn single_phase_limits_ac_power() {
    let req = ChargeRequest {
        phase_count: 1,
        ..home_request()
    };
    let d = derate_power(&req);
    assert_relative_eq!(d.power_kw, 7.4);
    assert_eq!(d.limiting_factor, Some(LimitingFactor::Phases));
}

#[test]
fn dc_connector_limit() {
    let req = ChargeRequest {
        battery_capacity_kwh: 150.0,
        requested_power_kw: 400.0,
        charging_type: ChargingType::Dc,
        ..home_request()
    };
    let d = derate_power(&req);
    assert_relative_eq!(d.power_kw, 350.0);
    assert_eq!(d.limiting_factor, Some(LimitingFactor::Connector));
}

#[test]
fn c_rate_overrides_connector() {
    let req = ChargeRequest {
        battery_capacity_kwh: 40.0,
        requested_power_kw: 400.0,
        charging_type: ChargingType::Dc,
        ..home_request()
    };
    let d = derate_power(&req);
    assert_relative_eq!(d.power_kw, 120.0);
    assert_eq!(d.limiting_factor, Some(LimitingFactor::CRate));
}

#[test]
fn cold_battery_overrides_earlier_factor() {
    let req = ChargeRequest {
        phase_count: 1,
        ambient_temperature_c: -5.0,
        ..home_request()
    };
    let d = derate_power(&req);
    assert_relative_eq!(d.power_kw, 3.7, epsilon = 1e-9);
    assert_eq!(d.limiting_factor, Some(LimitingFactor::Temperature));
}

#[test]
fn temperature_breakpoints() {
    assert_relative_eq!(temperature_multiplier(-20.0), 0.3);
    assert_relative_eq!(temperature_multiplier(-10.0), 0.5);
    assert_relative_eq!(temperature_multiplier(-0.5), 0.5);
    assert_relative_eq!(temperature_multiplier(0.0), 0.8);
    assert_relative_eq!(temperature_multiplier(10.0), 1.0);
    assert_relative_eq!(temperature_multiplier(40.0), 1.0);
    assert_relative_eq!(temperature_multiplier(41.0), 0.9);
}

#[test]
fn power_is_floored() {
    let req = ChargeRequest {
        requested_power_kw: 0.15,
        ambient_temperature_c: -20.0,
        ..home_request()
    };
    let d = derate_power(&req);
    assert_relative_eq!(d.power_kw, 0.1);
    assert_eq!(d.limiting_factor, Some(LimitingFactor::Temperature));
}

#[test]
fn power_never_exceeds_request_or_c_rate() {
    for capacity in [20.0, 40.0, 60.0, 100.0, 150.0] {
        for requested in [1.4, 7.0, 11.0, 22.0, 50.0, 150.0, 350.0] {
            for kind in [ChargingType::Ac, ChargingType::Dc] {
                let req = ChargeRequest {
                    battery_capacity_kwh: capacity,
                    requested_power_kw: requested,
                    charging_type: kind,
                    ..home_request()
                };
                let d = derate_power(&req);
                assert!(d.power_kw <= requested + 1e-9);
                assert!(d.power_kw <= capacity * 3.0 + 1e-9);
            }
        }
    }
}

#[test]
fn sixty_minutes_are_not_carried() {
    // 19.9 kWh * 50% / 10 kW = 0.995 h
    let req = ChargeRequest {
        battery_capacity_kwh: 19.9,
        initial_charge_percent: 0.0,
        target_charge_percent: 50.0,
        requested_power_kw: 10.0,
        charging_efficiency_percent: 100.0,
        ..home_request()
    };
    let res = estimate(&req).expect("estimate");
    assert_eq!(res.hours, 0);
    assert_eq!(res.minutes, 60);
}

#[test]
fn target_must_exceed_initial() {
    let req = ChargeRequest {
        initial_charge_percent: 80.0,
        target_charge_percent: 80.0,
        ..home_request()
    };
    assert!(matches!(estimate(&req), Err(ChargeError::InvalidInput(_))));
}

#[test]
fn rejects_invalid_numbers() {
    let cases = [
        ChargeRequest {
            requested_power_kw: 0.0,
            ..home_request()
        },
        ChargeRequest {
            battery_capacity_kwh: 0.0,
            ..home_request()
        },
        ChargeRequest {
            charging_efficiency_percent: 0.0,
            ..home_request()
        },
        ChargeRequest {
            target_charge_percent: 120.0,
            ..home_request()
        },
        ChargeRequest {
            phase_count: 4,
            ..home_request()
        },
        ChargeRequest {
            ambient_temperature_c: f64::NAN,
            ..home_request()
        },
    ];
    for req in cases {
        assert!(estimate(&req).is_err(), "{req:?}");
    }
}

#[test]
fn charging_type_parses() {
    assert_eq!("dc".parse::<ChargingType>(), Ok(ChargingType::Dc));
    assert_eq!(" AC ".parse::<ChargingType>(), Ok(ChargingType::Ac));
    assert!("wireless".parse::<ChargingType>().is_err());
}
