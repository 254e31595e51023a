use anyhow::Context;
use solid_png::Rgb;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    let args: Vec<_> = std::env::args().skip(1).collect();
    if args.len() != 4 {
        anyhow::bail!("usage: generate-png <width> <height> <rrggbb> <output-path>");
    }
    let width: u32 = args[0].parse().context("width must be a whole number")?;
    let height: u32 = args[1].parse().context("height must be a whole number")?;
    let fill = Rgb::from_hex(&args[2])
        .with_context(|| format!("`{}` is not an RRGGBB hex color", args[2]))?;
    solid_png::write_file(&args[3], width, height, fill)?;
    log::info!("generated clean PNG: {}", args[3]);
    Ok(())
}
