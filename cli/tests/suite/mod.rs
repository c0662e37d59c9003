mod config;
mod spark;

fn uniplot() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_uniplot"));
    cmd.env_remove("UNIPLOT_CONFIG").env_remove("RUST_LOG");
    cmd
}
