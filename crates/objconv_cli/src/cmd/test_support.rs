use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::OnceLock;

use objconv_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static OBJCONV_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> String {
	shared_fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn run_objconv(args: &[&str]) -> Output {
	Command::new(objconv_bin()).args(args).output().expect("objconv command executes")
}

pub(crate) fn run_objconv_with_stdin(args: &[&str], input: &str) -> Output {
	let mut child = Command::new(objconv_bin())
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("objconv command spawns");
	child
		.stdin
		.take()
		.expect("stdin is piped")
		.write_all(input.as_bytes())
		.expect("stdin accepts input");
	child.wait_with_output().expect("objconv command completes")
}

pub(crate) fn run_objconv_json(args: &[&str]) -> serde_json::Value {
	parse_json_output(run_objconv(args))
}

pub(crate) fn parse_json_output(output: Output) -> serde_json::Value {
	assert!(
		output.status.success(),
		"objconv command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn objconv_bin() -> &'static PathBuf {
	OBJCONV_BIN.get_or_init(resolve_objconv_bin)
}

fn resolve_objconv_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_objconv") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "objconv.exe" } else { "objconv" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "objconv"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build objconv binary at {}", bin.display());

	bin
}
