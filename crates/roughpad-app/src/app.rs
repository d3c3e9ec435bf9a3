//! Core application state and lifecycle.

use kurbo::Point;
use peniko::Color;
use roughpad_core::canvas::CanvasDocument;
use roughpad_core::controller::{CursorHint, InteractionController, Response};
use roughpad_core::tools::ToolKind;
use roughpad_render::{RenderResult, Renderer, RendererError, VelloRenderer};
use std::sync::Arc;
use vello::util::{RenderContext, RenderSurface};
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
#[cfg(not(target_arch = "wasm32"))]
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::Key;
use winit::window::{Window, WindowId};

use crate::config::AppConfig;
use crate::event_handler::{EventHandler, cursor_icon};
use crate::shortcuts::ShortcutRegistry;
use crate::ui::{UiAction, UiState, render_ui};

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    scene_renderer: VelloRenderer,
    /// Texture blitter for RGBA->surface format conversion (needed for WebGPU/WASM)
    texture_blitter: vello::wgpu::util::TextureBlitter,
    background: Color,
    /// The document changed since the scene was last built.
    scene_dirty: bool,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    ui_state: UiState,

    // Interaction
    controller: InteractionController,
    event_handler: EventHandler,
}

impl AppState {
    /// Act on what the controller asked for after a pointer event.
    fn apply_response(&mut self, response: Response) {
        if response.redraw {
            self.scene_dirty = true;
            self.window.request_redraw();
        }
        if let Some(hint) = response.cursor {
            self.window.set_cursor(cursor_icon(hint));
        }
    }

    fn set_tool(&mut self, tool: ToolKind) {
        if self.controller.tool() == tool {
            return;
        }
        log::info!("Tool: {}", tool.label());
        self.controller.set_tool(tool);
        self.ui_state.current_tool = tool;
        self.window.set_cursor(cursor_icon(CursorHint::Default));
        self.window.request_redraw();
    }

    /// Draw one frame: the document through vello, then egui on top.
    fn render(&mut self, render_cx: &RenderContext) -> RenderResult<()> {
        if self.scene_dirty {
            self.scene_renderer.build_scene(self.controller.document());
            self.scene_dirty = false;
        }

        // Run egui and get any actions
        let egui_input = self.egui_state.take_egui_input(&self.window);
        let ui_state = &mut self.ui_state;
        let mut ui_action = None;
        let egui_output = self.egui_ctx.run(egui_input, |ctx| {
            ui_action = render_ui(ctx, ui_state);
        });
        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output);
        let egui_primitives = self
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        if let Some(UiAction::SetTool(tool)) = ui_action {
            self.set_tool(tool);
        }

        let device_handle = &render_cx.devices[self.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = self
            .surface
            .surface
            .get_current_texture()
            .map_err(|e| RendererError::Surface(e.to_string()))?;

        let width = self.surface.config.width;
        let height = self.surface.config.height;

        let params = RenderParams {
            base_color: self.background,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello needs a StorageBinding target, which WebGPU only allows for Rgba8Unorm.
        // The result is blitted onto the surface, which may be Bgra8Unorm.
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        self.vello_renderer
            .render_to_texture(
                device,
                queue,
                self.scene_renderer.scene(),
                &render_texture_view,
                &params,
            )
            .map_err(|e| RendererError::RenderFailed(format!("{e:?}")))?;

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        {
            let mut blit_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("blit encoder"),
                });
            self.texture_blitter
                .copy(device, &mut blit_encoder, &render_texture_view, &surface_view);
            queue.submit(std::iter::once(blit_encoder.finish()));
        }

        for (id, image_delta) in &egui_output.textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        {
            let mut egui_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("egui encoder"),
                });
            self.egui_renderer.update_buffers(
                device,
                queue,
                &mut egui_encoder,
                &egui_primitives,
                &screen_descriptor,
            );

            let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        // Keep Vello content
                        load: vello::wgpu::LoadOp::Load,
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // egui-wgpu wants a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(std::iter::once(egui_encoder.finish()));
        }

        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        surface_texture.present();

        let egui_wants_repaint = egui_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|viewport| viewport.repaint_delay.is_zero());
        if egui_wants_repaint {
            self.window.request_redraw();
        }

        Ok(())
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<RenderContext>,
    /// Window waiting for async surface creation (WASM only)
    pending_window: Option<Arc<Window>>,
    /// Flag to indicate async init is in progress
    #[cfg(target_arch = "wasm32")]
    init_in_progress: std::cell::Cell<bool>,
}

impl App {
    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
            pending_window: None,
            #[cfg(target_arch = "wasm32")]
            init_in_progress: std::cell::Cell::new(false),
        }
    }

    /// Run the application.
    pub async fn run(config: AppConfig) {
        let event_loop = match EventLoop::new() {
            Ok(event_loop) => event_loop,
            Err(e) => {
                log::error!("Failed to create event loop: {e}");
                return;
            }
        };
        let app = App::with_config(config);

        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::EventLoopExtWebSys;
            event_loop.spawn_app(app);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut app = app;
            if let Err(e) = event_loop.run_app(&mut app) {
                log::error!("Event loop error: {e}");
            }
        }
    }

    /// Finish initialization after surface is created.
    fn finish_init(&mut self, window: Arc<Window>, surface: RenderSurface<'static>) -> RenderResult<()> {
        let render_cx = self
            .render_cx
            .as_ref()
            .ok_or_else(|| RendererError::InitFailed("render context not initialized".into()))?;
        let device = &render_cx.devices[surface.dev_id].device;

        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(format!("{e:?}")))?;

        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        // Initialize egui
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let background = self
            .config
            .background()
            .map_err(|e| RendererError::InitFailed(e.to_string()))?;
        let stroke = self
            .config
            .stroke()
            .map_err(|e| RendererError::InitFailed(e.to_string()))?;

        let document = CanvasDocument::with_options(self.config.rough);
        let tool = self.config.default_tool;

        log::info!(
            "Roughpad initialized - {}x{}, tool: {}",
            surface.config.width,
            surface.config.height,
            tool.label()
        );

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            vello_renderer,
            scene_renderer: VelloRenderer::with_style(stroke),
            texture_blitter,
            background,
            scene_dirty: true,
            egui_ctx,
            egui_state,
            egui_renderer,
            ui_state: UiState::new(tool),
            controller: InteractionController::new(document, tool),
            event_handler: EventHandler::new(),
        });

        self.pending_window = None;

        // Request initial redraw
        window.request_redraw();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn window_attributes(&self) -> RenderResult<winit::window::WindowAttributes> {
        Ok(Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height)))
    }

    /// Attach a canvas covering the whole browser viewport.
    #[cfg(target_arch = "wasm32")]
    fn window_attributes(&self) -> RenderResult<winit::window::WindowAttributes> {
        use wasm_bindgen::JsCast;
        use winit::platform::web::WindowAttributesExtWebSys;

        let web_window =
            web_sys::window().ok_or_else(|| RendererError::InitFailed("no window".into()))?;
        let document = web_window
            .document()
            .ok_or_else(|| RendererError::InitFailed("no document".into()))?;
        let (viewport_width, viewport_height) = viewport_size(&web_window, &self.config);

        if let Some(loading) = document.get_element_by_id("loading") {
            loading.remove();
        }

        let canvas = document
            .get_element_by_id("roughpad-canvas")
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
            .or_else(|| {
                let body = document.body()?;
                let canvas = document.create_element("canvas").ok()?;
                canvas.set_id("roughpad-canvas");
                body.append_child(&canvas).ok()?;
                canvas.dyn_into::<web_sys::HtmlCanvasElement>().ok()
            })
            .ok_or_else(|| RendererError::InitFailed("failed to create canvas".into()))?;

        // Physical pixels for sharp rendering on high-dpi screens
        let dpr = web_window.device_pixel_ratio();
        canvas.set_width((viewport_width * dpr) as u32);
        canvas.set_height((viewport_height * dpr) as u32);
        let style = canvas.style();
        let _ = style.set_property("width", "100%");
        let _ = style.set_property("height", "100%");
        let _ = style.set_property("display", "block");
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("top", "0");
        let _ = style.set_property("left", "0");

        log::info!("Canvas created: {}x{} (dpr: {})", viewport_width, viewport_height, dpr);

        Ok(Window::default_attributes()
            .with_title(&self.config.title)
            .with_canvas(Some(canvas)))
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> RenderResult<()> {
        log::info!("Creating window...");
        let window = Arc::new(
            event_loop
                .create_window(self.window_attributes()?)
                .map_err(|e| RendererError::InitFailed(e.to_string()))?,
        );

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };
        log::info!("Surface size: {}x{}", width, height);

        // On native, block on async surface creation
        #[cfg(not(target_arch = "wasm32"))]
        {
            let render_cx = self.render_cx.get_or_insert_with(RenderContext::new);
            let surface = pollster::block_on(render_cx.create_surface(
                window.clone(),
                width,
                height,
                PresentMode::AutoVsync,
            ))
            .map_err(|e| RendererError::Surface(format!("{e:?}")))?;
            self.finish_init(window, surface)?;
        }

        // On WASM, store window for later async initialization
        #[cfg(target_arch = "wasm32")]
        {
            self.pending_window = Some(window);
        }

        Ok(())
    }

    /// Start async surface creation for the pending window (WASM only).
    #[cfg(target_arch = "wasm32")]
    fn start_async_init(&mut self) {
        let Some(window) = self.pending_window.clone() else {
            return;
        };
        if !self.init_in_progress.get() {
            self.init_in_progress.set(true);

            let Some(web_window) = web_sys::window() else {
                return;
            };
            let dpr = web_window.device_pixel_ratio();
            let (viewport_width, viewport_height) = viewport_size(&web_window, &self.config);
            let width = (viewport_width * dpr) as u32;
            let height = (viewport_height * dpr) as u32;

            let self_ptr = self as *mut Self;
            let window_clone = window.clone();

            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Creating surface asynchronously...");
                let mut render_cx = RenderContext::new();
                let result = render_cx
                    .create_surface(window_clone.clone(), width, height, PresentMode::AutoVsync)
                    .await;

                // SAFETY: WASM is single-threaded and the event loop keeps the App alive.
                let app = unsafe { &mut *self_ptr };
                match result {
                    Ok(surface) => {
                        app.render_cx = Some(render_cx);
                        if let Err(e) = app.finish_init(window_clone, surface) {
                            log::error!("{e}");
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to create surface: {:?}", e);
                        app.init_in_progress.set(false);
                    }
                }
            });
        }

        // Keep the event loop running until the surface exists
        window.request_redraw();
    }
}

#[cfg(target_arch = "wasm32")]
fn viewport_size(web_window: &web_sys::Window, config: &AppConfig) -> (f64, f64) {
    let width = web_window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(config.width as f64);
    let height = web_window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(config.height as f64);
    (width, height)
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || self.pending_window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("{e}");
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        #[cfg(target_arch = "wasm32")]
        if self.state.is_none() {
            self.start_async_init();
            return;
        }

        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first
        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }
        let egui_wants_pointer =
            state.egui_ctx.is_pointer_over_area() || state.egui_ctx.wants_pointer_input();
        let egui_wants_keyboard = state.egui_ctx.wants_keyboard_input();

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };
                if let Err(e) = state.render(render_cx) {
                    log::warn!("Frame skipped: {e}");
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                // Moves always reach the canvas so drags continue under the toolbar.
                let point = Point::new(position.x, position.y);
                let response = state
                    .event_handler
                    .handle_cursor_moved(&mut state.controller, point);
                state.apply_response(response);
            }

            WindowEvent::MouseInput {
                state: btn_state,
                button,
                ..
            } => {
                if btn_state == ElementState::Pressed && egui_wants_pointer {
                    return;
                }
                let response =
                    state
                        .event_handler
                        .handle_mouse_input(&mut state.controller, btn_state, button);
                state.apply_response(response);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if egui_wants_keyboard || event.state != ElementState::Pressed {
                    return;
                }
                if let Key::Character(c) = &event.logical_key {
                    if let Some(tool) = ShortcutRegistry::tool_for_key(c.as_str()) {
                        state.set_tool(tool);
                    }
                }
            }

            _ => {}
        }
    }
}
