use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

fn run_cmd(state: &Path, args: &[&str]) -> String {
    let output = cargo_bin_cmd!("insureflow")
        .args(["--state", state.to_str().expect("state path")])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(state: &Path, args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("insureflow")
        .args(["--state", state.to_str().expect("state path"), "--json"])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn exit_code(state: &Path, args: &[&str]) -> i32 {
    let output = cargo_bin_cmd!("insureflow")
        .args(["--state", state.to_str().expect("state path")])
        .args(args)
        .output()
        .expect("run command");
    output.status.code().expect("exit code")
}

#[test]
fn cli_seed_log_send_dashboard_flow() {
    let temp = TempDir::new().expect("temp dir");
    let state = temp.path().join("pipeline.json");

    run_cmd(&state, &["seed"]);

    let list = run_cmd_json(&state, &["list"]);
    let items = list.as_array().expect("array");
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["name"], "Robert Martinez");
    let id = items[0]["id"].as_str().expect("id").to_string();

    // outcome suggestion moves the lead to appointment
    run_cmd(&state, &["log-call", &id, "--outcome", "Appointment Set", "--duration", "04:30"]);
    let detail = run_cmd_json(&state, &["show", &id]);
    assert_eq!(detail["status"], "appointment");
    assert_eq!(detail["history"].as_array().expect("history").len(), 1);

    let dashboard = run_cmd_json(&state, &["dashboard", "--months", "3"]);
    assert_eq!(dashboard["lead_count"], 4);
    assert_eq!(dashboard["total_closed_revenue"], 4200.0);
    // Sarah (12000, negotiation) + Michael (1500, appointment) + Robert (3500, now appointment)
    assert_eq!(dashboard["pipeline_value"], 17_000.0);
    assert_eq!(dashboard["conversion_rate"], 25.0);
    assert_eq!(
        dashboard["status_distribution"].as_array().expect("distribution").len(),
        6
    );
    assert_eq!(dashboard["revenue_by_month"].as_array().expect("series").len(), 3);

    // templated outreach logs history without changing a non-new status
    run_cmd(&state, &["send", &id, "--channel", "sms", "--template", "sms-intro"]);
    let detail = run_cmd_json(&state, &["show", &id]);
    assert_eq!(detail["status"], "appointment");
    assert_eq!(detail["history"].as_array().expect("history").len(), 2);
    assert_eq!(detail["history"][1]["outcome"], "Sent");
}

#[test]
fn cli_filters_by_status() {
    let temp = TempDir::new().expect("temp dir");
    let state = temp.path().join("pipeline.json");
    run_cmd(&state, &["seed"]);

    let filtered = run_cmd_json(&state, &["list", "--status", "closed_won"]);
    let items = filtered.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Emma Wilson");
}

#[test]
fn cli_unknown_lead_exits_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let state = temp.path().join("pipeline.json");
    run_cmd(&state, &["seed"]);

    let code = exit_code(
        &state,
        &["show", "00000000-0000-0000-0000-000000000000"],
    );
    assert_eq!(code, 2);
}

#[test]
fn cli_send_without_address_exits_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let state = temp.path().join("pipeline.json");
    run_cmd(
        &state,
        &["add-lead", "--name", "No Phone", "--policy", "term_life", "--commission", "800"],
    );
    let list = run_cmd_json(&state, &["list"]);
    let id = list[0]["id"].as_str().expect("id").to_string();

    let code = exit_code(&state, &["send", &id, "--channel", "sms", "--message", "Hi {name}"]);
    assert_eq!(code, 3);

    // failed delivery committed nothing
    let detail = run_cmd_json(&state, &["show", &id]);
    assert_eq!(detail["status"], "new");
    assert!(detail["history"].as_array().expect("history").is_empty());
}
