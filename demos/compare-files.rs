use std::{env, fs, path::Path, process};

use ocr_accuracy::{ComparisonConfig, Role, Segment, compare_bytes};

/// Compares a verified text file with the OCR output of the same document and
/// prints both highlighted views followed by the accuracy.
///
/// Run it with:
/// `RUST_LOG=debug cargo run --example compare-files original.txt ocr.txt [config.yml]`
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: compare-files <original> <ocr> [config.yml]");
        process::exit(1);
    }

    let original = read(&args[1]);
    let ocr = read(&args[2]);

    let config = args.get(3).map_or_else(ComparisonConfig::default, |path| {
        ComparisonConfig::load_from_file(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Error loading {path}: {e}");
            process::exit(1);
        })
    });

    let comparison = compare_bytes(&original, &ocr, &config).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    println!("--- original");
    println!("{}", render(comparison.original_view()));
    println!("+++ ocr");
    println!("{}", render(comparison.modified_view()));
    println!();

    let stats = comparison.stats();
    println!(
        "accuracy: {} ({} equal, {} deleted, {} inserted tokens)",
        comparison.accuracy(),
        stats.equal,
        stats.deleted,
        stats.inserted
    );
}

fn read(path: &str) -> Vec<u8> {
    fs::read(path).unwrap_or_else(|e| {
        eprintln!("Error reading {path}: {e}");
        process::exit(1);
    })
}

fn render(view: &[Segment]) -> String {
    view.iter()
        .map(|segment| match segment.role() {
            Role::Unchanged => segment.text().to_owned(),
            Role::Removed => format!("[-{}-]", segment.text()),
            Role::Added => format!("{{+{}+}}", segment.text()),
        })
        .collect()
}
