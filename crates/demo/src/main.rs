use anyhow::Context;

fn main() -> anyhow::Result<()> {
    prototype_observability::init();

    let config =
        prototype_demo::DemoConfig::from_env().context("failed to load demo configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    prototype_demo::run(&config, &mut out).context("prototype walkthrough failed")?;

    Ok(())
}
