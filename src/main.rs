#[cfg(not(target_arch = "wasm32"))]
const USAGE: &str = "usage: spinning-cube [--snapshot <file.png> [--size <pixels>] [--time <seconds>]]";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use std::path::PathBuf;

    use anyhow::{Context, bail};
    use spinning_cube::Settings;

    let mut args = std::env::args().skip(1);
    let mut snapshot: Option<PathBuf> = None;
    let mut size = 512u32;
    let mut secs = 0.0f32;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--snapshot" => snapshot = Some(args.next().context(USAGE)?.into()),
            "--size" => size = args.next().context(USAGE)?.parse().context("--size")?,
            "--time" => secs = args.next().context(USAGE)?.parse().context("--time")?,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            other => bail!("unexpected argument {other:?}\n{USAGE}"),
        }
    }

    let settings = Settings::default();
    match snapshot {
        Some(path) => {
            if let Err(e) = env_logger::try_init() {
                eprintln!("Warning: Could not initialize logger: {}", e);
            }
            spinning_cube::snapshot::save_frame(&settings, size, size, secs, &path)
        }
        None => spinning_cube::run(settings),
    }
}

// The browser build starts through `flow::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
