use std::path::PathBuf;

use anyhow::Context;
use edakit::{init_logging, ReplayScript, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("edakit {} ({})", VERSION, BUILD_DATE);
        eprintln!("usage: edakit <script.json>");
        std::process::exit(2);
    };

    let script = ReplayScript::load(&path)?;
    let shape = script.run()?;
    let json = serde_json::to_string_pretty(&shape).context("Failed to serialize shape")?;
    println!("{}", json);

    Ok(())
}
