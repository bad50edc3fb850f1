//! Integration tests for Relief
//!
//! These tests drive the engine through its public API and the built
//! binary end to end.

use relief_core::*;
use std::io::Write;
use std::process::{Command, Stdio};

fn relief() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_relief"));
    cmd.env_remove("RELIEF_ADMIN_SECRET")
        .env_remove("RELIEF_USER_SECRET")
        .env_remove("RELIEF_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Admin builds a network, a camp head costs it, a user routes across it.
#[test]
fn test_full_relief_workflow() {
    let mut graph = ReliefGraph::new();
    for (id, name) in [(1, "North"), (2, "South"), (3, "East"), (4, "West")] {
        graph.register_camp(CampId(id), name, format!("{name} Rd"), "100");
    }
    graph.link(CampId(1), CampId(2)).unwrap();
    graph.link(CampId(2), CampId(3)).unwrap();
    graph.link(CampId(3), CampId(4)).unwrap();
    graph.link(CampId(4), CampId(1)).unwrap();

    // Nothing is reachable until costs are known.
    assert_eq!(graph.nearest_camp(CampId(1)).unwrap(), None);

    graph.set_need(CampId(3), 50).unwrap();
    let model = CostModel {
        base: 1_000_000,
        ..CostModel::default()
    };
    let inputs = CostInputs { distance: 10, water_level: 1 };
    for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 1)] {
        graph.assign_cost(CampId(a), CampId(b), inputs, &model).unwrap();
    }

    // Connections touching camp 3 are cheaper, so the backbone uses both.
    let mst = graph.compute_mst();
    assert_eq!(mst.len(), 3);
    assert_eq!(mst.iter().filter(|c| c.other(CampId(3)).is_some()).count(), 2);

    let route = graph.shortest_route(CampId(1), CampId(3)).unwrap().unwrap();
    assert_eq!(route.camps.first(), Some(&CampId(1)));
    assert_eq!(route.camps.last(), Some(&CampId(3)));
    assert_eq!(route.camps.len(), 3);
}

#[test]
fn test_camp_count_minus_components() {
    let mut graph = ReliefGraph::new();
    for id in 1..=7 {
        graph.register_camp(CampId(id), "", "", "");
    }
    for (a, b, w) in [(1, 2, 1), (2, 3, 1), (3, 1, 1), (4, 5, 2), (6, 7, 3), (7, 6, 1)] {
        graph.connect(CampId(a), CampId(b), w, false).unwrap();
    }
    let forest = graph.spanning_forest();
    assert_eq!(forest.components, 3);
    assert_eq!(forest.edges.len(), 7 - 3);
    assert_eq!(forest.total_weight, 1 + 1 + 2 + 1);
}

#[test]
fn test_demo_command_reports_nearest_camp() {
    let output = relief().arg("demo").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("The nearest camp is:"));
    assert!(stdout.contains("Camp name: Node A"));
    assert!(stdout.contains("Camp 2: 60"));
    assert!(stdout.contains("Minimum spanning tree:"));
}

#[test]
fn test_demo_command_json() {
    let output = relief().args(["demo", "--json"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"distance\": 10"));
    assert!(stdout.contains("\"total_weight\": 100"));
}

#[test]
fn test_shell_session_over_stdin() {
    let mut child = relief()
        .arg("shell")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let script = "\
login admin 0000
camp 1 North Hill 111
camp 2 South Vale 222
camp 3 East Ford 333
connect 1 2 --weight 4
connect 2 3 --weight 6
connect 1 3 --weight 20
mst
logout
login user user_password
distances 1
quit
";
    child.stdin.take().unwrap().write_all(script.as_bytes()).unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Camp 1 - Camp 2 Cost: 4"));
    assert!(stdout.contains("Camp 2 - Camp 3 Cost: 6"));
    assert!(!stdout.contains("Camp 1 - Camp 3 Cost: 20"));
    assert!(stdout.contains("Camp 3: 10"));
    assert!(stdout.contains("Exiting ..."));
}

#[test]
fn test_cli_help() {
    let output = relief().arg("--help").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Relief camp network"));
}
