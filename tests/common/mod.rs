use assert_cmd::Command;

pub fn tagstack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagstack").unwrap();
    cmd.env_remove("TAGSTACK_CONFIG");
    cmd.env_remove("TAGSTACK_MODE");
    cmd.env_remove("RUST_LOG");
    cmd
}
