use std::collections::HashMap;

use almanac_calendar::{CalendarError, Date};

#[test]
fn january_has_31_days() {
    assert_eq!((Date::new(1, 1, 2024) + 31).unwrap(), Date::new(1, 2, 2024));
}

#[test]
fn leap_day_plus_leap_year_lands_on_march_first() {
    // 2024 has 366 days, 2025 has no Feb 29.
    assert_eq!((Date::new(29, 2, 2024) + 366).unwrap(), Date::new(1, 3, 2025));
}

#[test]
fn mid_june_minus_45() {
    assert_eq!((Date::new(15, 6, 2023) - 45).unwrap(), Date::new(1, 5, 2023));
}

#[test]
fn round_trip_returns_start() {
    let starts = [
        Date::new(1, 1, 2024),
        Date::new(29, 2, 2024),
        Date::new(31, 12, 1999),
        Date::new(15, 6, 2023),
        Date::new(1, 3, 1900),
        Date::new(5, 3, 7),
        Date::new(1, 1, -100),
    ];
    let offsets = [0, 1, -1, 28, 29, 365, 366, -366, 10_000, -10_000];
    for start in starts {
        for n in offsets {
            let back = ((start + n).unwrap() - n).unwrap();
            assert_eq!(back, start, "({start} + {n}) - {n} = {back}");
        }
    }
}

#[test]
fn add_zero_is_identity() {
    for date in [Date::new(1, 1, 2024), Date::new(31, 12, 9999), Date::new(28, 2, 1)] {
        assert_eq!((date + 0).unwrap(), date);
    }
}

#[test]
fn century_leap_rules() {
    // 1900 is not a leap year, 2000 is.
    assert_eq!((Date::new(28, 2, 1900) + 1).unwrap(), Date::new(1, 3, 1900));
    assert_eq!((Date::new(28, 2, 2000) + 1).unwrap(), Date::new(29, 2, 2000));
}

#[test]
fn chained_operators_like_demo() {
    let date1 = Date::new(15, 10, 2026);
    let date2 = (date1 + 10).unwrap();
    let date3 = (date2 - 25).unwrap();
    assert_eq!(date2, Date::new(25, 10, 2026));
    assert_eq!(date3, Date::new(30, 9, 2026));
    assert!(date1 != date2);
    assert!(!(date1 == date2));
}

#[test]
fn invalid_dates_fail_lazily() {
    let date = Date::new(30, 2, 2024);
    assert_eq!(date.to_short_date_string(), "30.02.2024");
    assert_eq!(
        (date + 1).unwrap_err(),
        CalendarError::InvalidDate {
            day: 30,
            month: 2,
            year: 2024,
        }
    );
    assert!((date - 1).is_err());
}

#[test]
fn equality_is_reflexive_and_symmetric() {
    let dates = [
        Date::new(1, 2, 2024),
        Date::new(2, 1, 2024),
        Date::new(1, 2, 2025),
        Date::new(1, 2, 2024),
    ];
    for a in dates {
        assert!(a == a);
        for b in dates {
            assert_eq!(a == b, b == a);
            assert_eq!(a != b, !(a == b));
        }
    }
}

#[test]
fn usable_as_hash_map_key() {
    let mut holidays = HashMap::new();
    holidays.insert(Date::new(25, 12, 2024), "Christmas");
    holidays.insert(Date::new(1, 1, 2025), "New Year");

    let christmas = (Date::new(24, 12, 2024) + 1).unwrap();
    assert_eq!(holidays.get(&christmas), Some(&"Christmas"));

    let new_year = (Date::new(25, 12, 2024) + 7).unwrap();
    assert_eq!(holidays.get(&new_year), Some(&"New Year"));
}
