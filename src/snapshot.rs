//! Offscreen rendering of single frames.
//!
//! Renders the same scene the window shows into an `Rgba8Unorm` texture,
//! copies it into a mappable buffer and hands it back as an
//! [`image::RgbaImage`]. Used for golden-image style tests and for the
//! `--snapshot` mode of the binary.

use std::{iter, path::Path};

use anyhow::Context as _;

use crate::{
    config::Settings, context::request_headless_device, data_structures::texture::Texture,
    render::encode_frame, scene::CubeScene,
};

pub const SNAPSHOT_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Bytes per row of the readback buffer; wgpu requires multiples of 256.
///
/// `None` if the row does not fit into a `u32`.
pub fn padded_bytes_per_row(width: u32) -> Option<u32> {
    width
        .checked_mul(4)?
        .checked_next_multiple_of(wgpu::COPY_BYTES_PER_ROW_ALIGNMENT)
}

/// Render the frame shown `secs` seconds after start at `width` x `height`.
pub async fn render_frame(
    settings: &Settings,
    width: u32,
    height: u32,
    secs: f32,
) -> anyhow::Result<image::RgbaImage> {
    settings.validate()?;
    anyhow::ensure!(width > 0 && height > 0, "snapshot size must not be zero");

    let (device, queue) = request_headless_device().await?;
    let max_dimension = device.limits().max_texture_dimension_2d;
    anyhow::ensure!(
        width <= max_dimension && height <= max_dimension,
        "snapshot size {width}x{height} exceeds the device limit of {max_dimension}"
    );

    let mut scene = CubeScene::new(&device, &queue, SNAPSHOT_FORMAT, settings, [width, height]).await?;
    scene.update(&queue, secs);

    let extent = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let target = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Snapshot Output Texture"),
        size: extent,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: SNAPSHOT_FORMAT,
        usage: wgpu::TextureUsages::COPY_SRC | wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let depth = Texture::create_depth_texture(&device, [width, height], "snapshot_depth");

    let bytes_per_row =
        padded_bytes_per_row(width).context("snapshot rows are too wide to read back")?;
    let output_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Snapshot Readback Buffer"),
        size: u64::from(bytes_per_row) * u64::from(height),
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        mapped_at_creation: false,
    });

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("Snapshot Encoder"),
    });
    encode_frame(
        &mut encoder,
        &scene,
        &target.create_view(&wgpu::TextureViewDescriptor::default()),
        &depth.view,
        settings.clear_colour,
    );
    encoder.copy_texture_to_buffer(
        wgpu::TexelCopyTextureInfo {
            aspect: wgpu::TextureAspect::All,
            texture: &target,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
        },
        wgpu::TexelCopyBufferInfo {
            buffer: &output_buffer,
            layout: wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(bytes_per_row),
                rows_per_image: Some(height),
            },
        },
        extent,
    );
    queue.submit(iter::once(encoder.finish()));

    let (tx, rx) = futures_intrusive::channel::shared::oneshot_channel();
    let buffer_slice = output_buffer.slice(..);
    buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
        // the receiver only goes away if the caller gave up waiting
        let _ = tx.send(result);
    });
    device
        .poll(wgpu::PollType::wait_indefinitely())
        .context("waiting for the GPU failed")?;
    rx.receive()
        .await
        .context("readback channel closed")?
        .context("could not map the readback buffer")?;

    let pixels = {
        let data = buffer_slice.get_mapped_range();
        unpad_rows(&data, width, height, bytes_per_row)?
    };
    output_buffer.unmap();

    image::RgbaImage::from_raw(width, height, pixels)
        .context("readback buffer does not match the image size")
}

/// Drop the per-row alignment padding of a readback buffer.
pub fn unpad_rows(
    data: &[u8],
    width: u32,
    height: u32,
    bytes_per_row: u32,
) -> anyhow::Result<Vec<u8>> {
    let row = width as usize * 4;
    let stride = bytes_per_row as usize;
    let rows = height as usize;
    anyhow::ensure!(
        stride > 0 && stride >= row,
        "row stride of {bytes_per_row} bytes cannot hold {width} pixels"
    );
    anyhow::ensure!(
        rows == 0 || data.len() >= (rows - 1) * stride + row,
        "readback of {} bytes is too short for {width}x{height} pixels",
        data.len()
    );

    Ok(data
        .chunks(stride)
        .take(rows)
        .flat_map(|chunk| &chunk[..row])
        .copied()
        .collect())
}

/// Render one frame and write it to `path` as PNG.
pub fn save_frame(
    settings: &Settings,
    width: u32,
    height: u32,
    secs: f32,
    path: &Path,
) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let img = runtime.block_on(render_frame(settings, width, height, secs))?;
    img.save(path)
        .with_context(|| format!("could not write {}", path.display()))?;
    log::info!("wrote {}x{} snapshot to {}", width, height, path.display());
    Ok(())
}
