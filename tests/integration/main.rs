//! Integration tests for Depot

mod cli_tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn depot() -> Command {
        Command::cargo_bin("depot").unwrap()
    }

    #[test]
    fn help_displays() {
        depot()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("dependency installation cache"));
    }

    #[test]
    fn version_displays() {
        depot()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("depot"));
    }

    #[test]
    fn hash_is_order_independent() {
        let a = depot().args(["hash", "b", "a"]).output().unwrap();
        let b = depot().args(["hash", "a", "b"]).output().unwrap();

        assert!(a.status.success());
        assert_eq!(a.stdout, b.stdout);
    }

    #[test]
    fn hash_known_digest() {
        // SHA-256 of "numpy==1.26.0\nrequests"
        depot()
            .args(["hash", "requests", "numpy==1.26.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "0e70f0228f0b5506df325840074891fadd0201cc7442b654692e1295dc5595f1",
            ));
    }

    #[test]
    fn hash_reads_requirements_file() {
        let dir = TempDir::new().unwrap();
        let req = dir.path().join("requirements.txt");
        std::fs::write(&req, "# comment\nnumpy==1.26.0\n\nrequests\n").unwrap();

        let from_file = depot()
            .args(["hash", "-r"])
            .arg(&req)
            .output()
            .unwrap();
        let from_args = depot()
            .args(["hash", "numpy==1.26.0", "requests"])
            .output()
            .unwrap();

        assert!(from_file.status.success());
        assert_eq!(from_file.stdout, from_args.stdout);
    }

    #[test]
    fn path_resolves_under_base_dir() {
        let dir = TempDir::new().unwrap();

        depot()
            .args(["path", "requests", "--base-dir"])
            .arg(dir.path())
            .assert()
            .success()
            .stdout(
                predicate::str::contains(dir.path().to_string_lossy().into_owned())
                    .and(predicate::str::contains("deps"))
                    .and(predicate::str::contains("absent")),
            );
    }

    #[test]
    fn list_empty_base_dir() {
        let dir = TempDir::new().unwrap();

        depot()
            .args(["list", "--base-dir"])
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("No cache entries found"));
    }

    #[test]
    fn list_shows_populated_entry() {
        let dir = TempDir::new().unwrap();
        let entry = dir.path().join("deps").join("c".repeat(64));
        std::fs::create_dir_all(&entry).unwrap();
        std::fs::write(entry.join("pkg.py"), "x = 1").unwrap();

        depot()
            .args(["list", "--format", "plain", "--base-dir"])
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("c".repeat(64)));
    }

    #[test]
    fn install_without_specs_is_a_no_op() {
        let dir = TempDir::new().unwrap();

        depot()
            .args(["install", "--base-dir"])
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("No dependencies to install"));

        assert!(!dir.path().join("deps").exists());
    }

    #[test]
    fn config_path() {
        depot()
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        depot()
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[installer]"));
    }
}
