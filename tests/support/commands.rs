//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a sluice command with the test's environment.
    ///
    /// Returns a Command configured with:
    /// - a cleared environment plus `PATH` and the test's variables
    /// - `NO_COLOR` so output assertions see plain text
    /// - current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("sluice").expect("failed to find sluice binary");
        cmd.env_clear();
        if let Some(path) = std::env::var_os("PATH") {
            cmd.env("PATH", path);
        }
        cmd.env("NO_COLOR", "1");
        cmd.envs(self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `sluice` with no subcommand.
    pub fn launch(&self) -> Output {
        self.cmd().output().expect("failed to run sluice")
    }

    /// Shortcut for `sluice run`.
    pub fn run(&self) -> Output {
        self.cmd()
            .arg("run")
            .output()
            .expect("failed to run sluice run")
    }

    /// Shortcut for `sluice check`.
    pub fn check(&self) -> Output {
        self.cmd()
            .arg("check")
            .output()
            .expect("failed to run sluice check")
    }
}
