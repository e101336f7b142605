use super::*;

fn limiter(per_case_limit: usize, global_limit: usize) -> RateLimiter {
    RateLimiter::with_config(RateLimitConfig {
        per_case_limit,
        per_case_window: Duration::from_secs(60),
        global_limit,
        global_window: Duration::from_secs(60),
    })
}

#[test]
fn per_case_allows_up_to_limit() {
    let rl = limiter(3, 100);
    let now = Instant::now();
    for i in 0..3 {
        assert!(rl.check_and_record_at("case_a", now).is_ok(), "request {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at("case_a", now),
        Err(RateLimitError::PerCaseExceeded { limit: 3, window_secs: 60 })
    ));
}

#[test]
fn global_allows_up_to_limit() {
    let rl = limiter(100, 2);
    let now = Instant::now();
    rl.check_and_record_at("case_a", now).unwrap();
    rl.check_and_record_at("case_b", now).unwrap();
    assert!(matches!(
        rl.check_and_record_at("case_c", now),
        Err(RateLimitError::GlobalExceeded { limit: 2, .. })
    ));
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = limiter(1, 100);
    let start = Instant::now();
    rl.check_and_record_at("case_a", start).unwrap();
    assert!(rl.check_and_record_at("case_a", start).is_err());

    let after_window = start + Duration::from_secs(60) + Duration::from_millis(1);
    assert!(rl.check_and_record_at("case_a", after_window).is_ok());
}

#[test]
fn distinct_cases_do_not_interfere() {
    let rl = limiter(1, 100);
    let now = Instant::now();
    rl.check_and_record_at("case_a", now).unwrap();
    assert!(rl.check_and_record_at("case_a", now).is_err());
    assert!(rl.check_and_record_at("case_b", now).is_ok());
}

#[test]
fn rejected_request_is_not_recorded_globally() {
    let rl = limiter(1, 2);
    let now = Instant::now();
    rl.check_and_record_at("case_a", now).unwrap();
    assert!(rl.check_and_record_at("case_a", now).is_err());
    assert!(rl.check_and_record_at("case_b", now).is_ok());
}

#[test]
fn env_parse_falls_back_on_garbage() {
    let key = "__TEST_RL_GARBAGE_4411__";
    unsafe { std::env::set_var(key, "lots") };
    assert_eq!(env_parse(key, 7usize), 7);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn forget_case_drops_window() {
    let rl = limiter(1, 100);
    let now = Instant::now();
    rl.check_and_record_at("case_a", now).unwrap();
    assert!(rl.tracks_case("case_a"));

    rl.forget_case("case_a");

    assert!(!rl.tracks_case("case_a"));
    assert!(rl.check_and_record_at("case_a", now).is_ok());
}

#[test]
fn idle_case_windows_are_swept() {
    let rl = limiter(5, 100);
    let start = Instant::now();
    rl.check_and_record_at("case_idle", start).unwrap();

    let later = start + Duration::from_secs(61);
    rl.check_and_record_at("case_busy", later).unwrap();

    assert!(!rl.tracks_case("case_idle"));
    assert!(rl.tracks_case("case_busy"));
}
