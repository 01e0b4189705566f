
use std::fs;

use tempfile::tempdir;

use support_server::{describe, refused_url, run_kronos, spawn_http_server_or_skip};

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn e2e_fast_call_passes() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip()? else {
        return Ok(());
    };
    let target = format!("{}/fast", url);
    let output = run_kronos(["-u", target.as_str(), "-t", "2"], None)?;
    if output.status.code() != Some(0) {
        return Err(describe(&output));
    }
    let stdout = stdout_of(&output);
    if !stdout.contains(&format!("Request to {} completed in", target)) {
        return Err(format!("Missing completion line.\n{}", describe(&output)));
    }
    if !stdout.contains("Test passed.") {
        return Err(format!("Missing verdict line.\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_slow_call_fails() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip()? else {
        return Ok(());
    };
    let target = format!("{}/slow", url);
    let output = run_kronos(["-u", target.as_str(), "-t", "300ms"], None)?;
    if output.status.code() != Some(1) {
        return Err(describe(&output));
    }
    let stdout = stdout_of(&output);
    if !stdout.contains(&format!("Request to {} took too long", target)) {
        return Err(format!("Missing slow line.\n{}", describe(&output)));
    }
    if !stdout.contains("Test failed") {
        return Err(format!("Missing verdict line.\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_invalid_threshold_falls_back() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip()? else {
        return Ok(());
    };
    let target = format!("{}/fast", url);
    let output = run_kronos(["-u", target.as_str(), "--threshold", "abc"], None)?;
    if output.status.code() != Some(0) {
        return Err(describe(&output));
    }
    if !stderr_of(&output).contains("Invalid threshold value 'abc'") {
        return Err(format!("Missing fallback warning.\n{}", describe(&output)));
    }
    if !stdout_of(&output).contains("Threshold: 3s") {
        return Err(format!("Default threshold not used.\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_csv_batch_reports_every_call() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip()? else {
        return Ok(());
    };
    let down = refused_url()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let csv_path = dir.path().join("jobs.csv");
    let content = format!(
        "method,url,headers,body\n\
         GET,{url}/fast,Accept=text/plain,\n\
         POST,{down},Content-Type=application/json,{{}}\n\
         GET,{url}/fast?second=1,,\n",
    );
    fs::write(&csv_path, content).map_err(|err| format!("write csv failed: {}", err))?;
    let csv_arg = csv_path.to_string_lossy().into_owned();

    let output = run_kronos(["--csv", csv_arg.as_str(), "-t", "2", "-w", "2"], None)?;
    if output.status.code() != Some(1) {
        return Err(describe(&output));
    }
    let stdout = stdout_of(&output);
    let completed = stdout.matches("completed in").count();
    if completed != 2 {
        return Err(format!("Expected 2 passing lines.\n{}", describe(&output)));
    }
    if !stdout.contains(&format!("Error: request to {} failed", down)) {
        return Err(format!("Missing error line.\n{}", describe(&output)));
    }
    if !stdout.contains("Errors: 1") {
        return Err(format!("Missing error count.\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_fail_fast_skips_remaining_calls() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip()? else {
        return Ok(());
    };
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let csv_path = dir.path().join("jobs.csv");
    let mut content = format!("method,url\nGET,{}/slow\n", url);
    for _ in 0..8 {
        content.push_str(&format!("GET,{}/fast\n", url));
    }
    fs::write(&csv_path, content).map_err(|err| format!("write csv failed: {}", err))?;
    let csv_arg = csv_path.to_string_lossy().into_owned();

    let output = run_kronos(
        ["--csv", csv_arg.as_str(), "-t", "300ms", "-w", "1", "--fail-fast"],
        None,
    )?;
    if output.status.code() != Some(1) {
        return Err(describe(&output));
    }
    if !stdout_of(&output).contains("Skipped:") {
        return Err(format!("Expected skipped calls.\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_missing_csv_is_fatal() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let missing = dir.path().join("missing.csv");
    let missing_arg = missing.to_string_lossy().into_owned();
    let output = run_kronos(["--csv", missing_arg.as_str()], None)?;
    if output.status.code() != Some(2) {
        return Err(describe(&output));
    }
    if !stderr_of(&output).contains("Error: Failed to read job file") {
        return Err(format!("Missing read error.\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_bad_csv_method_is_fatal() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let csv_path = dir.path().join("jobs.csv");
    fs::write(&csv_path, "method,url\nINVALID,http://127.0.0.1:9/\n")
        .map_err(|err| format!("write csv failed: {}", err))?;
    let csv_arg = csv_path.to_string_lossy().into_owned();
    let output = run_kronos(["--csv", csv_arg.as_str()], None)?;
    if output.status.code() != Some(2) {
        return Err(describe(&output));
    }
    if !stderr_of(&output).contains("Error parsing CSV data") {
        return Err(format!("Missing CSV error.\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_empty_csv_is_fatal() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let csv_path = dir.path().join("empty.csv");
    fs::write(&csv_path, "").map_err(|err| format!("write csv failed: {}", err))?;
    let csv_arg = csv_path.to_string_lossy().into_owned();
    let output = run_kronos(["--csv", csv_arg.as_str()], None)?;
    if output.status.code() != Some(2) {
        return Err(describe(&output));
    }
    Ok(())
}

#[test]
fn e2e_interactive_prompt_runs_one_call() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip()? else {
        return Ok(());
    };
    let answers = format!("get\nAccept=text/plain\n\n{}/fast\n2\n", url);
    let output = run_kronos(["--interactive"], Some(answers.as_str()))?;
    if output.status.code() != Some(0) {
        return Err(describe(&output));
    }
    let stdout = stdout_of(&output);
    if !stdout.contains("Enter API method") || !stdout.contains("Test passed.") {
        return Err(format!("Unexpected prompt run.\n{}", describe(&output)));
    }
    if !stdout.contains("Threshold: 2s") {
        return Err(format!("Prompted threshold not used.\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_config_jobs_and_json_export() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip()? else {
        return Ok(());
    };
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let config_path = dir.path().join("kronos.toml");
    let report_path = dir.path().join("report.json");
    let config = format!(
        "threshold = 2\n\
         workers = 2\n\
         \n\
         [[jobs]]\n\
         method = \"GET\"\n\
         url = \"{url}/fast\"\n\
         \n\
         [[jobs]]\n\
         method = \"PUT\"\n\
         url = \"{url}/fast\"\n\
         body = \"{{}}\"\n",
    );
    fs::write(&config_path, config).map_err(|err| format!("write config failed: {}", err))?;
    let config_arg = config_path.to_string_lossy().into_owned();
    let report_arg = report_path.to_string_lossy().into_owned();

    let output = run_kronos(
        ["-c", config_arg.as_str(), "--export-json", report_arg.as_str(), "-q"],
        None,
    )?;
    if output.status.code() != Some(0) {
        return Err(describe(&output));
    }
    if stdout_of(&output).contains("Test passed.") {
        return Err(format!(
            "Quiet run should not print a summary.\n{}",
            describe(&output)
        ));
    }
    let raw =
        fs::read_to_string(&report_path).map_err(|err| format!("read report failed: {}", err))?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|err| format!("parse report failed: {}", err))?;
    if value["summary"]["passed"] != 2 {
        return Err(format!("Unexpected report: {}", raw));
    }
    Ok(())
}

#[test]
fn e2e_failed_export_keeps_run_status() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip()? else {
        return Ok(());
    };
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let report_path = dir.path().join("missing").join("nested").join("report.json");
    let report_arg = report_path.to_string_lossy().into_owned();
    let fast = format!("{}/fast", url);
    let slow = format!("{}/slow", url);

    let passing = run_kronos(
        ["-u", fast.as_str(), "-t", "2", "--export-json", report_arg.as_str()],
        None,
    )?;
    if passing.status.code() != Some(0) {
        return Err(describe(&passing));
    }
    if !stderr_of(&passing).contains("Failed to write JSON report") {
        return Err(format!("Missing export error.\n{}", describe(&passing)));
    }

    let failing = run_kronos(
        ["-u", slow.as_str(), "-t", "300ms", "--export-json", report_arg.as_str()],
        None,
    )?;
    if failing.status.code() != Some(1) {
        return Err(describe(&failing));
    }
    if report_path.exists() {
        return Err("Report should not exist in a missing directory".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_no_calls_exits_cleanly() -> Result<(), String> {
    let output = run_kronos(std::iter::empty::<&str>(), None)?;
    if output.status.code() != Some(0) {
        return Err(describe(&output));
    }
    if !stdout_of(&output).contains("Calls: 0") {
        return Err(format!("Expected an empty summary.\n{}", describe(&output)));
    }
    Ok(())
}
