#![cfg(feature = "std")]

use std::process::Command;

fn run_sim(args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_broadside"))
        .arg("sim")
        .args(args)
        .env("BROADSIDE_LOG", "off")
        .output()
        .expect("failed to run broadside binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn sim_binary_smoke() {
    let v = run_sim(&["--seed", "1", "--games", "3"]);
    assert_eq!(v["seed"], 1);
    assert_eq!(v["games"].as_array().map(Vec::len), Some(3));
    assert!(v["games"][0]["winner"].is_string());
    let wins: u64 = v["wins"].as_array().unwrap().iter().filter_map(|w| w.as_u64()).sum();
    assert_eq!(wins, 3);

    // the final status is the serialized `GameStatus`
    let status: broadside::GameStatus =
        serde_json::from_value(v["games"][0]["status"].clone()).unwrap();
    assert!(matches!(status, broadside::GameStatus::Won { winner } if winner < 2));
}

#[test]
fn sim_binary_is_reproducible() {
    let a = run_sim(&["--seed", "42"]);
    let b = run_sim(&["--seed", "42"]);
    assert_eq!(a, b);
}
