use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the fluent-gen binary command
fn gen_cmd() -> Command {
    Command::cargo_bin("fluent-gen").unwrap()
}

mod writing {
    use super::*;

    #[test]
    fn writes_destination_and_reports_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("GeneratedExtensions.cs");

        gen_cmd()
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("File writing succeeded."));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("// This file was auto-generated by fluent-gen."));
        assert!(content.contains("public static class GeneratedExtensions"));
    }

    #[test]
    fn overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("GeneratedExtensions.cs");
        fs::write(&path, "old").unwrap();

        gen_cmd().arg(&path).assert().success();

        assert_ne!(fs::read_to_string(&path).unwrap(), "old");
        assert!(!temp_dir.path().join("GeneratedExtensions.cs.tmp").exists());
    }

    #[test]
    fn repeated_runs_produce_identical_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("GeneratedExtensions.cs");

        gen_cmd().arg(&path).assert().success();
        let first = fs::read(&path).unwrap();
        gen_cmd().arg(&path).assert().success();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }
}

mod failures {
    use super::*;

    #[test]
    fn missing_directory_exits_with_code_2() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("GeneratedExtensions.cs");

        gen_cmd()
            .arg(&path)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("not found"));

        assert!(!path.exists());
    }

    #[test]
    fn unwritable_destination_exits_with_code_2() {
        let temp_dir = TempDir::new().unwrap();
        // The destination is a directory, so the rename cannot replace it.
        let path = temp_dir.path().join("taken");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "keep").unwrap();

        gen_cmd()
            .arg(&path)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Failed to generate"));

        assert!(path.join("keep.txt").exists());
        assert!(!temp_dir.path().join("taken.tmp").exists());
    }

    #[test]
    fn list_and_dry_run_conflict() {
        gen_cmd().args(["--list", "--dry-run"]).assert().failure();
    }
}

mod inspection {
    use super::*;

    #[test]
    fn dry_run_prints_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("GeneratedExtensions.cs");

        gen_cmd()
            .arg(&path)
            .arg("--dry-run")
            .assert()
            .success()
            .stdout(predicate::str::contains("namespace Flurl.Http"))
            .stdout(predicate::str::contains("File writing succeeded.").not());

        assert!(!path.exists());
    }

    #[test]
    fn list_prints_descriptors_as_json() {
        let output = gen_cmd().arg("--list").output().expect("Failed to execute");
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let methods = json.as_array().expect("array of descriptors");
        assert_eq!(methods[0]["name"], "SendAsync");
        assert_eq!(methods[0]["receiver"], "Request");
        assert!(methods.iter().any(|m| m["name"] == "PatchJsonAsync"));
    }
}
