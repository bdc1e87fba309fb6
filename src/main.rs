use anyhow::{Context, Result};
use std::io::Write;
use std::process;

use frontstrip::{
    args::{Cli, USAGE},
    PostTransformer,
};

fn main() -> Result<()> {
    env_logger::init();

    let Some(cli) = Cli::parse_exact(std::env::args_os()) else {
        println!("{}", USAGE);
        process::exit(1);
    };

    let transformer = PostTransformer::new(cli.post_slug, &cli.base_url);
    let output = transformer
        .transform_file(&cli.post_file)
        .with_context(|| format!("failed to process post {}", cli.post_file.display()))?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    stdout.flush()?;
    Ok(())
}
