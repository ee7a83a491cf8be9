use std::path::PathBuf;

pub(crate) fn run(manifest: PathBuf, repo_root: Option<PathBuf>, format: super::Format) {
    let report = match &repo_root {
        Some(root) => marketplace_check::validate_marketplace_with_root(&manifest, root),
        None => marketplace_check::validate_marketplace(&manifest),
    };

    match format {
        super::Format::Text => print!("{}", report.render_text()),
        super::Format::Json => match serde_json::to_string_pretty(&report.to_json()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("marketplace-check: {e}");
                std::process::exit(1);
            }
        },
    }

    if !report.success() {
        std::process::exit(1);
    }
}
