//! Entry point for a bundle generation run.

use std::path::Path;
use std::process::ExitCode;

use label_bundle_generator::bundle::{
    Bundle,
    BundleGenerator,
};
use label_bundle_generator::config;
use label_bundle_generator::label::{
    self,
    Label,
};
use label_bundle_generator::types::Locale;

fn main() -> ExitCode {
    tracing_subscriber::fmt().init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Bundle generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the label set and generates the labels bundle for the current
/// deployment layout.
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = config::load_settings(Path::new("."))?;
    let labels = label::load_labels(Path::new(&settings.labels_file))?;
    tracing::info!("Loaded {} labels from '{}'", labels.len(), settings.labels_file);

    let files = BundleGenerator::builder(Bundle::Labels, labels)
        .add_default(|label: &Label| label.label_id.clone(), |label| label.label_eng_nm.clone())
        .add_locale(
            Locale::named("ko"),
            |label: &Label| label.label_id.clone(),
            |label| label.label_kr_nm.clone(),
        )
        .build()
        .make()?;

    tracing::info!("Generated {} bundle files", files.len());

    Ok(())
}
