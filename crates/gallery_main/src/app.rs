//! Application main loop

use anyhow::Result;
use gallery_core::{GalleryCommand, GalleryConfig, GalleryWidget, ImageLoader, KeyMap};
use gallery_ui::{
    components::{SlideshowOverlay, ThumbnailGrid},
    InputHandler, Renderer, TextureSet, Theme, WindowHost,
};
use egui_wgpu::ScreenDescriptor;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Main application state for the event loop
struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    egui_ctx: egui::Context,
    egui_state: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,

    // Gallery
    widget: GalleryWidget<WindowHost>,
    grid: ThumbnailGrid,
    textures: TextureSet,
    input_handler: InputHandler,
    theme: Theme,

    window_size: (u32, u32),
}

impl App {
    fn new(config: GalleryConfig) -> Result<Self> {
        let items = config.media_list()?;
        tracing::info!("Gallery has {} items", items.len());

        let images = ImageLoader::new(config.grid.max_image_edge).load_all(items.as_slice());

        let egui_ctx = egui::Context::default();
        let textures = TextureSet::upload(&egui_ctx, images);

        let widget = GalleryWidget::new(config.general.title.clone(), items, WindowHost::new())
            .with_keymap(KeyMap::new(&config.keybindings));

        Ok(Self {
            window: None,
            renderer: None,
            egui_ctx,
            egui_state: None,
            egui_renderer: None,

            widget,
            grid: ThumbnailGrid::new(config.grid.columns),
            textures,
            input_handler: InputHandler::new(),
            theme: Theme::by_name(&config.general.theme),

            window_size: (config.general.window_width, config.general.window_height),
        })
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attrs = Window::default_attributes()
            .with_title(self.widget.title())
            .with_inner_size(winit::dpi::LogicalSize::new(self.window_size.0, self.window_size.1));

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let renderer = pollster::block_on(Renderer::new(window.clone()))?;

        let egui_state = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &renderer.device,
            renderer.config.format,
            None,
            1,
            false,
        );

        self.theme.apply(&self.egui_ctx);

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.egui_state = Some(egui_state);
        self.egui_renderer = Some(egui_renderer);

        Ok(())
    }

    /// Apply a command coming from a click or a key press
    fn apply(&mut self, cmd: GalleryCommand) {
        tracing::debug!("Gallery command: {:?}", cmd);
        self.widget.dispatch(cmd);

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn render(&mut self) {
        let window = match &self.window {
            Some(w) => w.clone(),
            None => return,
        };

        let output = {
            let renderer = match &mut self.renderer {
                Some(r) => r,
                None => return,
            };

            match renderer.get_current_texture() {
                Ok(output) => output,
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.reconfigure();
                    window.request_redraw();
                    return;
                }
                Err(e) => {
                    tracing::error!("Surface error: {:?}", e);
                    return;
                }
            }
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = match &mut self.egui_state {
            Some(s) => s.take_egui_input(&window),
            None => return,
        };

        // The view tree is a snapshot; commands apply after the frame is built
        let tree = self.widget.render();
        let scroll_locked = self.widget.host().scroll_locked();
        let grid = &self.grid;
        let textures = &self.textures;
        let theme = &self.theme;
        let mut action: Option<GalleryCommand> = None;

        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(&tree.title);
                });
                ui.add_space(12.0);

                if let Some(cmd) = grid.ui(ui, &tree.thumbnails, textures, theme, scroll_locked) {
                    action = Some(cmd);
                }
            });

            if let Some(overlay) = &tree.overlay {
                if let Some(cmd) = SlideshowOverlay::show(ctx, overlay, textures, theme) {
                    action = Some(cmd);
                }
            }
        });

        if let Some(cmd) = action {
            self.apply(cmd);
        }

        if let Some(egui_state) = &mut self.egui_state {
            egui_state.handle_platform_output(&window, full_output.platform_output);
        }

        let wants_repaint = full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|v| v.repaint_delay.is_zero());
        if wants_repaint {
            window.request_redraw();
        }

        let clipped_primitives = self.egui_ctx.tessellate(
            full_output.shapes,
            full_output.pixels_per_point,
        );

        let renderer = match &self.renderer {
            Some(r) => r,
            None => return,
        };

        let egui_renderer = match &mut self.egui_renderer {
            Some(r) => r,
            None => return,
        };

        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [renderer.size.0, renderer.size.1],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = renderer.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor { label: Some("egui encoder") }
        );

        for (id, delta) in &full_output.textures_delta.set {
            egui_renderer.update_texture(&renderer.device, &renderer.queue, *id, delta);
        }

        egui_renderer.update_buffers(
            &renderer.device,
            &renderer.queue,
            &mut encoder,
            &clipped_primitives,
            &screen_descriptor,
        );

        let bg = self.theme.background;
        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui render pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color {
                                r: bg.r() as f64 / 255.0,
                                g: bg.g() as f64 / 255.0,
                                b: bg.b() as f64 / 255.0,
                                a: 1.0,
                            }),
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();

            egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            egui_renderer.free_texture(id);
        }

        renderer.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to initialize window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(egui_state), Some(window)) = (&mut self.egui_state, &self.window) {
            let response = egui_state.on_window_event(window, &event);
            if response.consumed {
                window.request_redraw();
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize((size.width, size.height));
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                // The widget drops keys unless it holds a subscription
                if let Some(key) = self.input_handler.handle_key(&event) {
                    self.widget.handle_key_input(&key);
                }
            }

            WindowEvent::RedrawRequested => {
                self.render();
                return;
            }

            _ => {}
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Run the application
pub fn run(config: GalleryConfig) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config)?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
