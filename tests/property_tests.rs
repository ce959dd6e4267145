//! Property-based tests for console_log_writer using proptest

use chrono::{DateTime, Local};
use console_log_writer::{
    format_timestamp, AsyncConsoleWriter, LogLevel, LogRecord, SharedBuffer, TimestampCache,
};
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL.to_vec())
}

fn local_time(secs: i64, nanos: u32) -> DateTime<Local> {
    DateTime::from_timestamp(secs, nanos)
        .expect("timestamp in range")
        .with_timezone(&Local)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that parsing ignores case
    #[test]
    fn test_log_level_case_insensitive(level in any_level(), use_lower in any::<bool>()) {
        let input = if use_lower {
            level.to_str().to_lowercase()
        } else {
            level.to_str().to_string()
        };
        prop_assert_eq!(input.parse::<LogLevel>().unwrap(), level);
    }
}

// ============================================================================
// Timestamp Cache Tests
// ============================================================================

proptest! {
    /// Two instants in the same second render identically, and the cached
    /// text always equals direct formatting
    #[test]
    fn test_cache_matches_direct_formatting(
        secs in 0i64..4_102_444_800,
        nanos_a in 0u32..1_000_000_000,
        nanos_b in 0u32..1_000_000_000,
    ) {
        let a = local_time(secs, nanos_a);
        let b = local_time(secs, nanos_b);
        let mut cache = TimestampCache::new();

        let first = cache.get(&a).to_string();
        let second = cache.get(&b).to_string();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &format_timestamp(&a));
        prop_assert_eq!(&second, &format_timestamp(&b));
    }

    /// Any sequence of instants renders the same through the cache as without it
    #[test]
    fn test_cache_never_diverges(
        times in prop::collection::vec((0i64..4_102_444_800, 0u32..1_000_000_000), 1..50)
    ) {
        let mut cache = TimestampCache::new();
        for (secs, nanos) in times {
            let created = local_time(secs, nanos);
            prop_assert_eq!(cache.get(&created).to_string(), format_timestamp(&created));
        }
    }
}

// ============================================================================
// Writer Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// A single producer's records come out in submission order, on the
    /// stream their level selects, rendered exactly like format_line
    #[test]
    fn test_writer_order_and_routing(
        entries in prop::collection::vec(
            (any_level(), 0i64..4_102_444_800, "[a-zA-Z0-9 %]{0,20}"),
            0..60,
        ),
        capacity in 1usize..8,
    ) {
        let normal = SharedBuffer::new();
        let errors = SharedBuffer::new();
        let mut writer = AsyncConsoleWriter::with_error_stream(
            capacity,
            Box::new(normal.clone()),
            Box::new(errors.clone()),
        );

        let mut expected_normal = String::new();
        let mut expected_errors = String::new();
        for (level, secs, message) in entries {
            let record = LogRecord::new(level, message).at(local_time(secs, 0));
            let line = AsyncConsoleWriter::format_line(&record);
            if level.is_error() {
                expected_errors.push_str(&line);
            } else {
                expected_normal.push_str(&line);
            }
            writer.log_write(record);
        }
        writer.close();

        prop_assert_eq!(normal.contents(), expected_normal);
        prop_assert_eq!(errors.contents(), expected_errors);
    }
}
