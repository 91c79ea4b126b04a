use anyhow::Context;
use log::debug;
use speckle::{Invocation, USAGE, render};
use std::env;
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let invocation = Invocation::from_args(env::args().skip(1));
    debug!("resolved {:?}", invocation);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // --help does not stop generation
    if invocation.help {
        writeln!(out, "{}", USAGE).context("failed to write usage")?;
    }

    let mut rng = rand::rng();
    let mut grid = render(&invocation.params, &mut rng);
    debug!("rendered {} bytes", grid.len());

    grid.push('\n');
    out.write_all(grid.as_bytes()).context("failed to write grid")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
