use anyhow::Context;
use std::{ffi::OsStr, fs, path::Path};

fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    let args: Vec<_> = std::env::args().skip(1).collect();
    let dir = Path::new(args.first().map(String::as_str).unwrap_or("assets"));
    let assets = fs::read_dir(dir)
        .with_context(|| format!("failed to read asset folder {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            let path = entry.path();
            path.is_file() && path.extension() == Some(OsStr::new("png"))
        });

    let mut results = Vec::new();
    for asset in assets {
        let path = asset.path();
        let name = path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or_default()
            .to_owned();
        match solid_png::inspect_file(&path) {
            Ok(report) => {
                for warning in report.warnings() {
                    log::warn!("{name}: {warning}");
                }
                log::info!(
                    "{name}: {}x{}, {} ({})",
                    report.width,
                    report.height,
                    report.classification(),
                    if report.compliant { "compliant" } else { "NOT compliant" },
                );
                results.push(serde_json::json!({
                    "file": name,
                    "width": report.width,
                    "height": report.height,
                    "bit_depth": report.bit_depth,
                    "color_type": report.color_type,
                    "classification": report.classification(),
                    "interlace": report.interlace,
                    "compliant": report.compliant,
                    "square": report.square,
                }));
            }
            Err(e) => {
                log::error!("{name}: {e}");
                results.push(serde_json::json!({
                    "file": name,
                    "error": e.to_string(),
                }));
            }
        }
    }

    let now = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)?;
    let audit = serde_json::json!({
        "date": now,
        "assets": results,
    });
    fs::write(dir.join("audit_results.json"), audit.to_string())?;
    Ok(())
}
