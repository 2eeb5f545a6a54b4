use anyhow::Context;
use clap::Parser;
use zoo::domain::config::ZooConfig;
use zoo::kernel::config::load_config;
use zoo::kernel::terminal::StdTerminal;
use zoo_console::{App, Args, logging};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut cfg: ZooConfig =
        load_config(args.config.as_deref()).context("Failed to load configuration")?;
    args.apply(&mut cfg);

    let _log = logging::init(&cfg.logging)?;

    let policy = zoo::policy_for(cfg.admission.mode);
    let registry = zoo::init(&cfg, policy)?;

    App::new(registry, StdTerminal).run()?;

    Ok(())
}
