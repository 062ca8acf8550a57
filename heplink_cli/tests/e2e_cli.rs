//! End-to-end tests for the `heplink` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn heplink() -> Command {
    let mut cmd = cargo_bin_cmd!("heplink");
    // Keep stderr quiet and independent of the caller's environment.
    cmd.env("RUST_LOG", "error");
    cmd
}

/// Static root holding a subset of the site's images.
fn static_root(files: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for file in files {
        std::fs::write(dir.path().join(file), b"img").unwrap();
    }
    dir
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        heplink()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("assets"))
            .stdout(predicate::str::contains("routes"));
    }

    #[test]
    fn shows_version() {
        heplink()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn missing_explicit_config_fails() {
        heplink()
            .args(["--config", "/nonexistent/heplink.toml", "routes"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("reading config"));
    }
}

mod routing {
    use super::*;

    #[test]
    fn query_suffix_is_ignored() {
        heplink()
            .args(["route", "#/services?x=1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("#/services?x=1 -> services"))
            .stdout(predicate::str::contains("services, work"));
    }

    #[test]
    fn unknown_fragment_is_home() {
        heplink()
            .args(["route", "#/unknown"])
            .assert()
            .success()
            .stdout(predicate::str::contains("-> home"))
            .stdout(predicate::str::contains(
                "hero, services, approach, work, community, insights",
            ));
    }

    #[test]
    fn empty_fragment_reads_as_home() {
        heplink()
            .args(["route", ""])
            .assert()
            .success()
            .stdout(predicate::str::contains("#/home -> home"));
    }

    #[test]
    fn route_json_lists_sections() {
        let output = heplink()
            .args(["route", "#/work", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["view"], "work");
        assert_eq!(value["sections"], serde_json::json!(["work", "community"]));
    }

    #[test]
    fn routes_table_has_every_fragment() {
        let output = heplink().arg("routes").output().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        for fragment in [
            "#/home",
            "#/work",
            "#/services",
            "#/insights",
            "#/careers",
            "#/contact",
        ] {
            assert!(stdout.contains(fragment), "missing {fragment} in:\n{stdout}");
        }
    }
}

mod assets {
    use super::*;

    #[test]
    fn reports_first_match_and_placeholders() {
        let root = static_root(&["durham-image.webp", "heroImage.png", "gst.jpg", "gst.png"]);

        heplink()
            .args(["assets", "--dir"])
            .arg(root.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("/heroImage.png"))
            .stdout(predicate::str::contains("/durham-image.webp"))
            .stdout(predicate::str::contains("/gst.png"))
            .stdout(predicate::str::contains("placeholder"))
            .stdout(predicate::str::contains("4 of 7 slots resolved"));
    }

    #[test]
    fn json_marks_unresolved_slots_null() {
        let root = static_root(&[]);

        let output = heplink()
            .args(["assets", "--json", "--dir"])
            .arg(root.path())
            .output()
            .unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let slots = value.as_array().unwrap();
        assert_eq!(slots.len(), 7);
        assert!(slots.iter().all(|s| s["resolved"].is_null()));
        assert_eq!(
            slots[0]["candidates"],
            serde_json::json!(["hero-image", "heroImage"])
        );
    }
}

mod placeholder {
    use super::*;

    #[test]
    fn writes_svg_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("ph.svg");

        heplink()
            .args(["placeholder", "--label", "Coming soon", "--out"])
            .arg(&out)
            .assert()
            .success();

        let svg = std::fs::read_to_string(&out).unwrap();
        assert!(svg.contains("width='1600'"));
        assert!(svg.contains(">Coming soon</text>"));
    }

    #[test]
    fn data_uri_to_stdout() {
        heplink()
            .args(["placeholder", "--data-uri"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("data:image/svg+xml;utf8,"));
    }
}
