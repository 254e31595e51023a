fn main() -> anyhow::Result<()> {
    let args: Vec<_> = std::env::args().skip(1).collect();
    let verbosity = if args.first().map(String::as_str) == Some("-v") {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    pretty_env_logger::formatted_builder()
        .filter_level(verbosity)
        .init();
    let Some(file_name) = args.last() else {
        anyhow::bail!("usage: inspect-png [-v] <path>");
    };
    let report = solid_png::inspect_file(file_name)?;
    println!(
        "{file_name}: {}x{}, bit depth {}, color type {} ({}), interlace {}",
        report.width,
        report.height,
        report.bit_depth,
        report.color_type,
        report.classification(),
        report.interlace,
    );
    for warning in report.warnings() {
        log::warn!("{warning}");
    }
    if !report.compliant {
        anyhow::bail!("interlacing is enabled; Android AAPT may reject this file");
    }
    println!("structure looks compliant");
    Ok(())
}
