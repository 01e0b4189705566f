use super::*;

#[test]
fn defaults_match_documented_values() -> Result<(), String> {
    let args = parse_test_args(["kronos"])?;
    if args.workers.get() != DEFAULT_WORKERS {
        return Err(format!("Unexpected workers: {}", args.workers));
    }
    if args.request_timeout != DEFAULT_TIMEOUT {
        return Err(format!("Unexpected timeout: {:?}", args.request_timeout));
    }
    if args.method != HttpMethod::Get {
        return Err(format!("Unexpected method: {}", args.method));
    }
    if args.fail_fast || args.interactive || args.quiet {
        return Err("Flags should default to false".to_owned());
    }
    if args.csv.is_some() || args.url.is_some() || args.export_json.is_some() {
        return Err("Optional inputs should default to None".to_owned());
    }
    Ok(())
}

#[test]
fn parses_original_style_flags() -> Result<(), String> {
    let args = parse_test_args([
        "kronos",
        "--csv",
        "calls.csv",
        "--threshold",
        "abc",
        "-w",
        "3",
        "--timeout",
        "1500ms",
        "--fail-fast",
    ])?;
    if args.csv.as_deref() != Some("calls.csv") {
        return Err("csv path not parsed".to_owned());
    }
    if args.threshold.as_deref() != Some("abc") {
        return Err("threshold must be kept raw for lenient parsing".to_owned());
    }
    if args.workers.get() != 3 {
        return Err(format!("Unexpected workers: {}", args.workers));
    }
    if args.request_timeout != Duration::from_millis(1500) {
        return Err(format!("Unexpected timeout: {:?}", args.request_timeout));
    }
    if !args.fail_fast {
        return Err("fail-fast not parsed".to_owned());
    }
    Ok(())
}

#[test]
fn parses_single_call_flags() -> Result<(), String> {
    let args = parse_test_args([
        "kronos",
        "-u",
        "http://x/down",
        "-X",
        "POST",
        "-H",
        "Content-Type: application/json",
        "-H",
        "X-Trace: 1",
        "-d",
        "{}",
    ])?;
    if args.method != HttpMethod::Post {
        return Err(format!("Unexpected method: {}", args.method));
    }
    if args.headers.len() != 2 {
        return Err(format!("Unexpected headers: {:?}", args.headers));
    }
    if args.data != "{}" {
        return Err(format!("Unexpected data: {}", args.data));
    }
    Ok(())
}

#[test]
fn rejects_zero_workers() -> Result<(), String> {
    if parse_test_args(["kronos", "--workers", "0"]).is_ok() {
        return Err("Expected zero workers to be rejected".to_owned());
    }
    Ok(())
}
