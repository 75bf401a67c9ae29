use std::fs;
use std::io;
use std::path::Path;

use clap::{Command, ValueEnum};
use clap_complete::Shell;

pub mod cli {
    include!("src/cli.rs");
}

/// Writes `man/<name>.1`.
fn write_man_page(cmd: &Command, out_dir: &Path) -> io::Result<()> {
    let dir = out_dir.join("man");
    fs::create_dir_all(&dir)?;
    let mut page = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut page)?;
    fs::write(dir.join(format!("{}.1", cmd.get_name())), page)
}

/// Writes one completion script per supported shell into `completions/`.
fn write_completions(cmd: &mut Command, out_dir: &Path) -> io::Result<()> {
    let dir = out_dir.join("completions");
    fs::create_dir_all(&dir)?;
    let bin_name = cmd.get_name().to_string();
    for shell in Shell::value_variants() {
        clap_complete::generate_to(*shell, cmd, &bin_name, &dir)?;
    }
    Ok(())
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-env-changed=ASSET_OUT_DIR");

    // assets are only built for release packaging
    let Some(out_dir) = std::env::var_os("ASSET_OUT_DIR") else {
        return Ok(());
    };
    let out_dir = Path::new(&out_dir);

    let mut cmd = cli::make_command();
    write_man_page(&cmd, out_dir)?;
    write_completions(&mut cmd, out_dir)
}
