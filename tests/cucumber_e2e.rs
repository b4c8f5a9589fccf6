use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use cucumber::{World as _, given, then, when};
use tempfile::TempDir;

#[derive(Debug, Default, cucumber::World)]
struct TestWorld {
    dir: Option<TempDir>,
    input_path: Option<PathBuf>,
    last_cmd: Option<Output>,
    previous_cmd: Option<Output>,
}

fn exe() -> &'static str {
    env!("CARGO_BIN_EXE_digraph-reach")
}

fn run_cmd(args: Vec<String>, stdin: &str) -> Output {
    let mut child = Command::new(exe())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run digraph-reach binary");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");

    child.wait_with_output().expect("wait for digraph-reach")
}

fn analyze_args(world: &TestWorld, extra: &[String]) -> Vec<String> {
    let input = world.input_path.as_ref().expect("input");
    let mut args = vec![
        "analyze".to_string(),
        "--in".to_string(),
        input.to_string_lossy().into_owned(),
    ];
    args.extend_from_slice(extra);
    args
}

fn stdout_string(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

fn stderr_string(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

#[given("a temp edge workspace")]
fn a_temp_edge_workspace(world: &mut TestWorld) {
    world.dir = Some(tempfile::tempdir().expect("tempdir"));
}

#[given(expr = "an edge file containing {string}")]
fn an_edge_file_containing(world: &mut TestWorld, body: String) {
    let dir = world.dir.as_ref().expect("temp dir");
    let path = dir.path().join("edges.txt");
    fs::write(&path, body).expect("write edge file");
    world.input_path = Some(path);
}

#[when(expr = "I run analyze from {int} to {int}")]
fn i_run_analyze_from_to(world: &mut TestWorld, src: i64, dest: i64) {
    let args = analyze_args(
        world,
        &["--src".into(), src.to_string(), "--dest".into(), dest.to_string()],
    );
    world.last_cmd = Some(run_cmd(args, ""));
}

#[when(expr = "I run analyze from {int} to {int} with cycle strategy {string}")]
fn i_run_analyze_with_strategy(world: &mut TestWorld, src: i64, dest: i64, strategy: String) {
    let args = analyze_args(
        world,
        &[
            "--src".into(),
            src.to_string(),
            "--dest".into(),
            dest.to_string(),
            "--cycle-strategy".into(),
            strategy,
        ],
    );
    world.last_cmd = Some(run_cmd(args, ""));
}

#[when(expr = "I run analyze answering the prompt with {string}")]
fn i_run_analyze_answering_the_prompt(world: &mut TestWorld, answer: String) {
    let args = analyze_args(world, &[]);
    let stdin = answer.replace("\\n", "\n");
    world.last_cmd = Some(run_cmd(args, &stdin));
}

#[when(expr = "I run analyze from {int} to {int} twice")]
fn i_run_analyze_twice(world: &mut TestWorld, src: i64, dest: i64) {
    let extra = ["--src".into(), src.to_string(), "--dest".into(), dest.to_string()];
    let first = run_cmd(analyze_args(world, &extra), "");
    assert!(first.status.success(), "first analyze failed: {}", stderr_string(&first));
    world.previous_cmd = Some(first);
    world.last_cmd = Some(run_cmd(analyze_args(world, &extra), ""));
}

#[then("the command succeeds")]
fn the_command_succeeds(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert!(
        out.status.success(),
        "command failed (status={:?})\nstderr:\n{}\nstdout:\n{}",
        out.status.code(),
        stderr_string(out),
        stdout_string(out)
    );
}

#[then("the command fails")]
fn the_command_fails(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert!(
        !out.status.success(),
        "expected failure but succeeded; stdout: {}",
        stdout_string(out)
    );
}

#[then(expr = "stdout mentions {string}")]
fn stdout_mentions(world: &mut TestWorld, needle: String) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stdout = stdout_string(out);
    assert!(
        stdout.contains(&needle),
        "stdout did not contain {needle:?}. stdout was:\n{stdout}"
    );
}

#[then(expr = "stderr mentions {string}")]
fn stderr_mentions(world: &mut TestWorld, needle: String) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stderr = stderr_string(out);
    assert!(
        stderr.contains(&needle),
        "stderr did not contain {needle:?}. stderr was:\n{stderr}"
    );
}

#[then("the two outputs are identical")]
fn the_two_outputs_are_identical(world: &mut TestWorld) {
    let a = world.previous_cmd.as_ref().expect("first run");
    let b = world.last_cmd.as_ref().expect("second run");
    assert!(b.status.success(), "second analyze failed: {}", stderr_string(b));
    assert_eq!(a.stdout, b.stdout, "analyze outputs differed");
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    TestWorld::cucumber()
        .max_concurrent_scenarios(Some(1))
        .fail_on_skipped()
        .run_and_exit("tests/features")
        .await;
}
