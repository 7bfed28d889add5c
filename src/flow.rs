//! Application event loop.
//!
//! [`run`] opens a window (or attaches to a canvas in the browser), builds the
//! [`Context`] and the [`CubeScene`] and then redraws continuously. Every
//! redraw follows the same steps:
//! 1. Measure the seconds since start
//! 2. Upload the model-view-projection matrix for that time
//! 3. Acquire the surface texture, recovering from lost or outdated surfaces
//! 4. Encode and submit the clear + draw pass
//! 5. Present and request the next redraw
//!
//! The loop pauses while the surface has no usable size or is hidden, and a
//! resize or `Occluded(false)` starts it again.

use std::{fmt::Debug, iter, sync::Arc};

use instant::Instant;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::Window,
};

use crate::{config::Settings, context::Context, render::encode_frame, scene::CubeScene};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// What a redraw did with the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Presented,
    /// Presented, but the surface asked to be reconfigured.
    Reconfigure,
    /// Nothing was drawn, but the surface is usable again on the next redraw.
    Retry,
    /// Nothing was drawn and nothing will be until the window is resized or shown again.
    Idle,
}

impl FrameStatus {
    /// Whether another redraw should be requested right away.
    pub fn keeps_animating(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// GPU context, scene and surface status.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) ctx: Context,
    scene: CubeScene,
    started: Instant,
    is_surface_configured: bool,
}

impl AppState {
    async fn new(window: Arc<Window>, settings: Settings) -> anyhow::Result<Self> {
        let ctx = Context::new(window, &settings).await?;
        let scene = CubeScene::new(
            &ctx.device,
            &ctx.queue,
            ctx.config.format,
            &settings,
            [ctx.config.width, ctx.config.height],
        )
        .await?;
        Ok(Self {
            ctx,
            scene,
            started: Instant::now(),
            is_surface_configured: false,
        })
    }

    /// Returns whether the surface is configured for the new size.
    fn resize(&mut self, width: u32, height: u32) -> bool {
        if self.ctx.resize(width, height) {
            self.is_surface_configured = true;
            self.scene.resize(width, height);
            true
        } else {
            false
        }
    }

    fn render(&mut self) -> FrameStatus {
        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return FrameStatus::Idle;
        }

        let secs = self.started.elapsed().as_secs_f32();
        self.scene.update(&self.ctx.queue, secs);

        let (output, status) = match self.ctx.surface.get_current_texture() {
            wgpu::CurrentSurfaceTexture::Success(output) => (output, FrameStatus::Presented),
            wgpu::CurrentSurfaceTexture::Suboptimal(output) => (output, FrameStatus::Reconfigure),
            wgpu::CurrentSurfaceTexture::Outdated | wgpu::CurrentSurfaceTexture::Lost => {
                let size = self.ctx.window.inner_size();
                return if self.resize(size.width, size.height) {
                    FrameStatus::Retry
                } else {
                    FrameStatus::Idle
                };
            }
            wgpu::CurrentSurfaceTexture::Timeout => return FrameStatus::Retry,
            wgpu::CurrentSurfaceTexture::Occluded => return FrameStatus::Idle,
            wgpu::CurrentSurfaceTexture::Validation => {
                log::error!("Unable to acquire the surface texture: validation error");
                return FrameStatus::Idle;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        encode_frame(
            &mut encoder,
            &self.scene,
            &view,
            &self.ctx.depth_texture.view,
            self.ctx.clear_colour,
        );
        self.ctx.queue.submit(iter::once(encoder.finish()));
        output.present();

        if status == FrameStatus::Reconfigure {
            self.ctx.configure_surface();
        }
        status
    }
}

pub(crate) enum FlowEvent {
    #[allow(dead_code)]
    Initialized(anyhow::Result<AppState>),
}

impl Debug for FlowEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initialized(Ok(_)) => f.write_str("Initialized(Ok)"),
            Self::Initialized(Err(e)) => f.debug_tuple("Initialized").field(e).finish(),
        }
    }
}

pub(crate) struct App {
    #[cfg(not(target_arch = "wasm32"))]
    async_runtime: tokio::runtime::Runtime,
    #[allow(dead_code)]
    proxy: winit::event_loop::EventLoopProxy<FlowEvent>,
    settings: Settings,
    state: Option<AppState>,
    initializing: bool,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(event_loop: &EventLoop<FlowEvent>, settings: Settings) -> anyhow::Result<Self> {
        let proxy = event_loop.create_proxy();
        Ok(Self {
            #[cfg(not(target_arch = "wasm32"))]
            async_runtime: tokio::runtime::Runtime::new()?,
            proxy,
            settings,
            state: None,
            initializing: false,
            error: None,
        })
    }

    fn on_initialized(&mut self, event_loop: &ActiveEventLoop, state: anyhow::Result<AppState>) {
        self.initializing = false;
        match state {
            Ok(mut state) => {
                // Trigger a resize and redraw now that we are initialized
                let size = state.ctx.window.inner_size();
                if state.resize(size.width, size.height) {
                    state.ctx.window.request_redraw();
                }
                self.state = Some(state);
            }
            Err(e) => {
                log::error!("Initialization failed: {e:#}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler<FlowEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // the browser may resume again while the async setup is still running
        if self.state.is_some() || self.initializing {
            return;
        }

        #[allow(unused_mut)]
        let mut window_attributes = Window::default_attributes().with_title(&self.settings.title);

        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            let window = web_sys::window().unwrap_throw();
            let document = window.document().unwrap_throw();
            let canvas = document
                .get_element_by_id(&self.settings.canvas_id)
                .unwrap_throw();
            let html_canvas_element = canvas.unchecked_into();
            window_attributes = window_attributes.with_canvas(Some(html_canvas_element));
        }

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Could not create a window: {e}");
                self.error = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        self.initializing = true;
        let init_future = AppState::new(window, self.settings.clone());

        #[cfg(not(target_arch = "wasm32"))]
        {
            let state = self.async_runtime.block_on(init_future);
            self.on_initialized(event_loop, state);
        }

        #[cfg(target_arch = "wasm32")]
        {
            let proxy = self.proxy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let state = init_future.await;
                if proxy.send_event(FlowEvent::Initialized(state)).is_err() {
                    log::error!("Event loop closed before initialization finished");
                }
            });
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: FlowEvent) {
        match event {
            // This is the message from our wasm `spawn_local`
            FlowEvent::Initialized(state) => self.on_initialized(event_loop, state),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if state.resize(size.width, size.height) {
                    state.ctx.window.request_redraw();
                }
            }
            WindowEvent::Occluded(false) => state.ctx.window.request_redraw(),
            WindowEvent::RedrawRequested => {
                let status = state.render();
                // keep the animation running like requestAnimationFrame does
                if status.keeps_animating() {
                    state.ctx.window.request_redraw();
                } else {
                    log::debug!("redraw loop paused: {status:?}");
                }
            }
            _ => {}
        }
    }
}

fn init_logger() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            eprintln!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap_throw();
    }
}

/// Open a window and spin the cube until it is closed.
pub fn run(settings: Settings) -> anyhow::Result<()> {
    init_logger();
    settings.validate()?;

    let event_loop: EventLoop<FlowEvent> = EventLoop::with_user_event().build()?;
    let mut app = App::new(&event_loop, settings)?;

    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    run(Settings::default()).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}
