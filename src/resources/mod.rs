//! Loading shaders and textures from external files.
//!
//! In the browser assets are fetched from `<origin>/assets/`. Natively they are read from
//! `./assets/` and, if that directory has no such file, from the copy `build.rs` placed in
//! the build output.

use anyhow::Context as _;

use crate::data_structures::texture;

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str) -> anyhow::Result<reqwest::Url> {
    let window = web_sys::window().context("no global window")?;
    let origin = window
        .location()
        .origin()
        .map_err(|e| anyhow::anyhow!("could not read the page origin: {e:?}"))?;
    let base = reqwest::Url::parse(&format!("{origin}/assets/"))?;
    Ok(base.join(file_name)?)
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn asset_path(file_name: &str) -> std::path::PathBuf {
    let local = std::path::Path::new("./").join("assets").join(file_name);
    if local.exists() {
        return local;
    }
    std::path::Path::new(env!("SPINNING_CUBE_ASSET_DIR")).join(file_name)
}

pub async fn load_string(file_name: &str) -> anyhow::Result<String> {
    #[cfg(target_arch = "wasm32")]
    let txt = {
        let url = format_url(file_name)?;
        reqwest::get(url)
            .await?
            .error_for_status()?
            .text()
            .await?
    };
    #[cfg(not(target_arch = "wasm32"))]
    let txt = {
        let path = asset_path(file_name);
        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("could not read {}", path.display()))?
    };

    Ok(txt)
}

pub async fn load_binary(file_name: &str) -> anyhow::Result<Vec<u8>> {
    #[cfg(target_arch = "wasm32")]
    let data = {
        let url = format_url(file_name)?;
        reqwest::get(url)
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec()
    };
    #[cfg(not(target_arch = "wasm32"))]
    let data = {
        let path = asset_path(file_name);
        tokio::fs::read(&path)
            .await
            .with_context(|| format!("could not read {}", path.display()))?
    };

    Ok(data)
}

pub async fn load_texture(
    file_name: &str,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> anyhow::Result<texture::Texture> {
    let data = load_binary(file_name).await?;
    texture::Texture::from_bytes(device, queue, &data, file_name)
}
