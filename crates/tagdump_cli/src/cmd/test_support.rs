use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use tagdump_testkit::target_dir;

static TAGDUMP_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_tagdump(args: &[&str]) -> Output {
	Command::new(tagdump_bin()).args(args).output().expect("tagdump command executes")
}

pub(crate) fn run_tagdump_ok(args: &[&str]) -> String {
	let output = run_tagdump(args);
	assert!(
		output.status.success(),
		"tagdump command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8(output.stdout).expect("stdout should be utf-8")
}

pub(crate) fn run_tagdump_json(args: &[&str]) -> serde_json::Value {
	serde_json::from_str(&run_tagdump_ok(args)).expect("stdout should be valid json")
}

fn tagdump_bin() -> &'static PathBuf {
	TAGDUMP_BIN.get_or_init(resolve_tagdump_bin)
}

fn resolve_tagdump_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_tagdump") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let mut bin = target_dir().join("debug");
	bin.push(if cfg!(windows) { "tagdump.exe" } else { "tagdump" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "tagdump"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build tagdump binary at {}", bin.display());

	bin
}
