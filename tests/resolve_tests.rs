//! Resolver behavior through the real binary
//!
//! Every test pins the distribution enumeration to a missing command, so the
//! validator degrades to declared-name-unchanged on any host and the output
//! is deterministic.

mod common;

use common::TestHome;
use predicates::prelude::*;

fn home() -> TestHome {
    let home = TestHome::new();
    home.write_config_without_wsl("");
    home
}

#[test]
fn test_resolve_unc_folder() {
    home()
        .cmd()
        .args(["resolve", r"\\wsl$\Ubuntu\home\user\proj"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kind: wsl"))
        .stdout(predicate::str::contains(
            "Target: vscode-remote://wsl+Ubuntu/home/user/proj",
        ))
        .stdout(predicate::str::contains("Workspace file: no"));
}

#[test]
fn test_resolve_encoded_workspace_file() {
    home()
        .cmd()
        .args([
            "resolve",
            r"\\wsl$\wsl%2Bubuntu\root\next-chat\workspace.code-workspace",
        ])
        .assert()
        .success()
        // Workspace files get a local-style file reference, not a remote URI
        .stdout(predicate::str::contains(
            "Target: /root/next-chat/workspace.code-workspace",
        ))
        .stdout(predicate::str::contains("Workspace file: yes"))
        .stdout(predicate::str::contains("Distribution: ubuntu"));
}

#[test]
fn test_resolve_mounted_drive_sentinel() {
    home()
        .cmd()
        .args(["resolve", "/mnt/c/Users/x/project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kind: wsl"))
        .stdout(predicate::str::contains("Location: WSL (WSL)"))
        .stdout(predicate::str::contains(
            "Target: vscode-remote://wsl+WSL/mnt/c/Users/x/project",
        ));
}

#[test]
fn test_resolve_unvalidated_is_reported() {
    home()
        .cmd()
        .args(["resolve", r"\\wsl$\Ubuntu\srv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unvalidated"));
}

#[test]
fn test_resolve_priority_wsl_over_remote() {
    // Contains both a WSL marker and '@'; classification must say WSL
    home()
        .cmd()
        .args(["resolve", "vscode-remote://wsl+Ubuntu/home/user@mail-archive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kind: wsl"));
}

#[test]
fn test_resolve_ssh_remote_rewrite() {
    home()
        .cmd()
        .args(["resolve", "vscode-remote://ssh-remote+devbox/srv/app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kind: remote"))
        .stdout(predicate::str::contains("Target: ssh://devbox/srv/app"));
}

#[test]
fn test_resolve_codespaces_rewrite() {
    home()
        .cmd()
        .args([
            "resolve",
            "vscode-remote://codespaces+fuzzy-spork/workspaces/app",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Target: codespaces://codespaces+fuzzy-spork/workspaces/app",
        ));
}

#[test]
fn test_resolve_local_passthrough() {
    home()
        .cmd()
        .args(["resolve", "/home/dev/project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kind: local"))
        .stdout(predicate::str::contains("Target: /home/dev/project"));
}

#[test]
fn test_resolve_forced_workspace_file_flag() {
    home()
        .cmd()
        .args(["resolve", r"\\wsl$\Ubuntu\home\dev\x", "--workspace-file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target: /home/dev/x"))
        .stdout(predicate::str::contains("Workspace file: yes"));
}
