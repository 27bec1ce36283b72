use formkit_core::code::{make_code, make_rolling_code, ClockSource, RollingCodeGenerator};
use formkit_core::error::CoreError;
use formkit_core::sanitize::clean_form_values;
use serde_json::json;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

struct Check {
    id: &'static str,
    passed: bool,
    message: String,
}

fn main() {
    // Runs fixed-input checks of the sanitizer and the rolling code generator
    // against a mocked clock. Prints one CHECK line per check and exits
    // non-zero if any fails.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let checks = vec![
        sanitizer_scenario(),
        sanitizer_idempotent(),
        sanitizer_rejects_non_object(),
        code_deterministic(),
        rolling_window_stable(),
        rolling_window_rotates(),
        lifetime_guard(),
    ];

    let mut any_fail = false;
    for c in &checks {
        let result = if c.passed { "PASS" } else { "FAIL" };
        println!("CHECK {} {} {}", c.id, result, c.message);
        any_fail |= !c.passed;
    }
    tracing::info!(total = checks.len(), failed = any_fail, "selfcheck finished");

    if any_fail {
        std::process::exit(1);
    }
}

fn check(id: &'static str, passed: bool, message: impl Into<String>) -> Check {
    Check {
        id,
        passed,
        message: message.into(),
    }
}

fn scenario_input() -> serde_json::Value {
    json!({
        "name": "  ",
        "_internal": "x",
        "tags": ["", "ok", {"_hidden": 1, "visible": "y"}]
    })
}

fn sanitizer_scenario() -> Check {
    let expected = json!({"name": null, "tags": [null, "ok", {"visible": "y"}]});
    match clean_form_values(&scenario_input()) {
        Ok(out) => check("SANITIZE_SCENARIO", out == expected, out.to_string()),
        Err(e) => check("SANITIZE_SCENARIO", false, e.to_string()),
    }
}

fn sanitizer_idempotent() -> Check {
    let once = clean_form_values(&scenario_input());
    let twice = once.as_ref().ok().map(clean_form_values);
    match (once, twice) {
        (Ok(a), Some(Ok(b))) => check(
            "SANITIZE_IDEMPOTENT",
            a == b,
            "sanitize(sanitize(m)) == sanitize(m)",
        ),
        _ => check("SANITIZE_IDEMPOTENT", false, "sanitize failed"),
    }
}

fn sanitizer_rejects_non_object() -> Check {
    let r = clean_form_values(&json!(["not", "an", "object"]));
    check(
        "SANITIZE_TOP_LEVEL_GUARD",
        matches!(r, Err(CoreError::InvalidArgument(_))),
        "array input must be InvalidArgument",
    )
}

fn code_deterministic() -> Check {
    let a = make_code("abc");
    let b = make_code("abc");
    let c = make_code("abd");
    check(
        "CODE_DETERMINISTIC",
        a == b && a != c && a.len() == 8,
        format!("abc={} abd={}", a, c),
    )
}

fn rolling_window_stable() -> Check {
    let clock = ClockSource::new_mock(1_699_999_800);
    let first = make_rolling_code("selfcheck", 300, &clock);
    clock.advance(Duration::from_secs(299));
    let last = make_rolling_code("selfcheck", 300, &clock);
    match (first, last) {
        (Ok(a), Ok(b)) => check("ROLLING_SAME_WINDOW", a == b, format!("{} {}", a, b)),
        _ => check("ROLLING_SAME_WINDOW", false, "rolling code failed"),
    }
}

fn rolling_window_rotates() -> Check {
    let clock = ClockSource::new_mock(1_699_999_800);
    let generator = match RollingCodeGenerator::new(300, clock.clone()) {
        Ok(g) => g,
        Err(e) => return check("ROLLING_NEXT_WINDOW", false, e.to_string()),
    };
    let before = generator.code("selfcheck");
    clock.advance(Duration::from_secs(300));
    let after = generator.code("selfcheck");
    check(
        "ROLLING_NEXT_WINDOW",
        before != after && generator.verify("selfcheck", &after) && !generator.verify("selfcheck", &before),
        format!("{} -> {}", before, after),
    )
}

fn lifetime_guard() -> Check {
    let clock = ClockSource::new_mock(0);
    let zero = make_rolling_code("s", 0, &clock);
    let negative = make_rolling_code("s", -5, &clock);
    check(
        "ROLLING_LIFETIME_GUARD",
        matches!(zero, Err(CoreError::InvalidArgument(_)))
            && matches!(negative, Err(CoreError::InvalidArgument(_))),
        "lifetime 0 and -5 must be InvalidArgument",
    )
}
