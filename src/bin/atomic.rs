use std::{
    io::{self, Write},
    time::Instant,
};

use anyhow::{Context, Result};

fn report(out: &mut impl Write, value: i32) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() -> Result<()> {
    let dotenv = atomic_cost::env::load_dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Some(e) = dotenv {
        log::warn!("ignoring .env: {}", e);
    }

    let ins = Instant::now();

    let value = atomic_cost::run();

    log::info!("value = {}, time = {:?}", value, ins.elapsed());

    report(&mut io::stdout().lock(), value).context("failed to write result to stdout")?;

    Ok(())
}
