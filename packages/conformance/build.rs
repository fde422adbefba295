//! Generates the `MainWindow` component from the generator's test fixture.

use std::env;
use std::fs;
use std::path::PathBuf;

use xamlnames_generator::emit::{generate_rust, RustOptions};
use xamlnames_generator::{
    analyze_file, build_generation_spec, create_default_catalog, load_catalog_files,
    GenerationOptions,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fixtures = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?)
        .join("..")
        .join("generator")
        .join("tests")
        .join("fixtures");
    let markup = fixtures.join("MainWindow.xaml");
    let catalog_file = fixtures.join("controls.yaml");
    println!("cargo:rerun-if-changed={}", markup.display());
    println!("cargo:rerun-if-changed={}", catalog_file.display());

    let mut catalog = create_default_catalog();
    if let Some((_, err)) = load_catalog_files(&mut catalog, &[catalog_file])
        .into_iter()
        .next()
    {
        return Err(err.into());
    }

    let analysis = analyze_file(&markup, &catalog)?;
    let options = GenerationOptions::default()
        .with_component("MyApp")
        .with_resource_path("MainWindow.xaml");
    let spec = build_generation_spec(&analysis, &options)?;
    let code = generate_rust(&spec, &RustOptions::default())?;

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    fs::write(out_dir.join("main_window.rs"), code)?;
    Ok(())
}
