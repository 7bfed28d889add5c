use anyhow::*;
use fs_extra::copy_items;
use fs_extra::dir::CopyOptions;
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Rerun when the shader or the texture changes.
    println!("cargo:rerun-if-changed=assets");

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let assets_src = manifest_dir.join("assets");

    let mut copy_options = CopyOptions::new();
    copy_options.overwrite = true;
    if assets_src.exists() {
        copy_items(&[&assets_src], &out_dir, &copy_options)?;
    }

    // Native builds fall back to this directory when ./assets is missing at runtime.
    println!(
        "cargo:rustc-env=SPINNING_CUBE_ASSET_DIR={}",
        out_dir.join("assets").display()
    );

    Ok(())
}
