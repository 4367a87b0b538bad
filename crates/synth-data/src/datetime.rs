//! Date and timestamp helpers relative to a caller-supplied reference.
//!
//! Callers pass the run's reference instant rather than reading the wall
//! clock here, so a seeded run generates the same temporal values every
//! time it is replayed with the same reference.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;

/// Random date between `reference + min_days` and `reference + max_days`
/// (inclusive). Negative offsets reach into the past.
pub fn date_between<R: Rng>(
    rng: &mut R,
    reference: NaiveDate,
    min_days: i64,
    max_days: i64,
) -> NaiveDate {
    let offset = rng.gen_range(min_days..=max_days);
    reference + Duration::days(offset)
}

/// Random timestamp between `reference + min_days` and `reference + max_days`,
/// with second precision.
pub fn datetime_between<R: Rng>(
    rng: &mut R,
    reference: NaiveDateTime,
    min_days: i64,
    max_days: i64,
) -> NaiveDateTime {
    let offset_secs = rng.gen_range(min_days * 86_400..=max_days * 86_400);
    reference + Duration::seconds(offset_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_date_between_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let today = reference().date();
        for _ in 0..100 {
            let d = date_between(&mut rng, today, -730, 0);
            assert!(d <= today);
            assert!(d >= today - Duration::days(730));
        }
    }

    #[test]
    fn test_datetime_between_past_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = reference();
        for _ in 0..100 {
            let ts = datetime_between(&mut rng, now, -365, 0);
            assert!(ts <= now);
            assert!(ts >= now - Duration::days(365));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let now = reference();
        assert_eq!(
            datetime_between(&mut rng1, now, -30, 30),
            datetime_between(&mut rng2, now, -30, 30)
        );
    }
}
