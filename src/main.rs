//! Meshview - 2D FEM mesh viewer
//!
//! Loads a finite-element mesh from plain-text files and displays it:
//! colored quadrilateral elements, mesh nodes, and Dirichlet/Neumann
//! boundary overlays. The window stays open until dismissed.

mod config;

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

use meshview_input::ViewController;
use meshview_mesh::Mesh;
use meshview_render::{
    context::RenderContext,
    pipeline::FigurePipeline,
    Camera2D, Figure, FigureStyle, Legend,
};

use config::AppConfig;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    pipeline: Option<FigurePipeline>,
    /// The loaded mesh (read-only after startup)
    mesh: Mesh,
    /// Tessellation style derived from config
    style: FigureStyle,
    /// Legend from the last tessellation, kept for overlay rebuilds
    legend: Legend,
    camera: Camera2D,
    controller: ViewController,
    // Layer visibility toggles
    show_fills: bool,
    show_nodes: bool,
    show_dirichlet: bool,
    show_neumann: bool,
    show_legend: bool,
    /// Figure must be re-tessellated before the next frame
    figure_dirty: bool,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        // Load the mesh from the configured paths
        let paths = config.mesh.to_mesh_paths();
        let mesh = Mesh::load(&paths).unwrap_or_else(|e| {
            panic!("Failed to load mesh from {:?}: {}", paths, e);
        });

        let style = config.figure.to_figure_style();
        let show_legend = config.figure.show_legend;

        let mut controller = ViewController::new();
        controller.zoom_step = config.input.zoom_step;

        Self {
            config,
            window: None,
            render_context: None,
            pipeline: None,
            mesh,
            style,
            legend: Legend::new(),
            camera: Camera2D::new(),
            controller,
            show_fills: true,
            show_nodes: true,
            show_dirichlet: true,
            show_neumann: true,
            show_legend,
            figure_dirty: false,
        }
    }

    /// Tessellate the figure for the current toggles and upload it
    fn rebuild_figure(&mut self) {
        let Some(ctx) = &self.render_context else { return };
        let Some(pipeline) = self.pipeline.as_mut() else { return };

        let mut figure = Figure::new(&self.mesh.points, &self.mesh.elements)
            .with_fills(self.show_fills)
            .with_nodes(self.show_nodes);
        if self.show_dirichlet {
            figure = figure.with_dirichlet(&self.mesh.dirichlet);
        }
        if self.show_neumann {
            figure = figure.with_neumann(&self.mesh.neumann);
        }

        let geometry = figure.tessellate(&self.style).unwrap_or_else(|e| {
            panic!("Failed to tessellate figure: {}", e);
        });

        log::debug!(
            "tessellated {} quads ({} skipped), {} markers, {} boundary segments",
            geometry.quad_count(),
            geometry.skipped_elements(),
            geometry.marker_count(),
            geometry.boundary_segment_count()
        );

        pipeline.upload_figure(&ctx.device, &geometry.vertices);
        let overlay = if self.show_legend {
            geometry.legend.overlay_vertices(ctx.aspect_ratio())
        } else {
            Vec::new()
        };
        pipeline.upload_overlay(&ctx.device, &overlay);

        self.legend = geometry.legend;
        self.figure_dirty = false;
    }

    /// Re-upload the legend overlay for the current aspect and visibility
    fn refresh_overlay(&mut self) {
        let Some(ctx) = &self.render_context else { return };
        let Some(pipeline) = self.pipeline.as_mut() else { return };

        let overlay = if self.show_legend {
            self.legend.overlay_vertices(ctx.aspect_ratio())
        } else {
            Vec::new()
        };
        pipeline.upload_overlay(&ctx.device, &overlay);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let mut window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));
            if self.config.window.fullscreen {
                window_attributes =
                    window_attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
            }

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            // Create render context and pipeline
            let render_context = pollster::block_on(RenderContext::new(
                window.clone(),
                self.config.window.vsync,
            ));
            let pipeline = FigurePipeline::new(&render_context.device, render_context.config.format);

            // Fit the camera to the mesh
            self.camera.set_viewport(
                render_context.size.width as f32,
                render_context.size.height as f32,
            );
            if let Some(bounds) = self.mesh.bounds() {
                self.camera.fit_bounds(&bounds, self.config.figure.fit_margin);
            }

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.pipeline = Some(pipeline);

            self.rebuild_figure();

            let labels: Vec<&str> = self.legend.entries().iter().map(|e| e.label.as_str()).collect();
            log::info!("showing figure with legend: {}", labels.join(", "));

            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
                self.camera
                    .set_viewport(physical_size.width as f32, physical_size.height as f32);
                // The legend panel is aspect-corrected
                self.refresh_overlay();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if !event.state.is_pressed() {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    match key {
                        KeyCode::Escape => {
                            event_loop.exit();
                        }
                        KeyCode::KeyR => {
                            self.camera.reset();
                            log::info!("View reset");
                        }
                        KeyCode::KeyF => {
                            if let Some(window) = &self.window {
                                let new_fullscreen = if window.fullscreen().is_some() {
                                    None
                                } else {
                                    Some(Fullscreen::Borderless(None))
                                };
                                window.set_fullscreen(new_fullscreen);
                            }
                        }
                        KeyCode::KeyC => {
                            self.show_fills = !self.show_fills;
                            self.figure_dirty = true;
                        }
                        KeyCode::KeyP => {
                            self.show_nodes = !self.show_nodes;
                            self.figure_dirty = true;
                        }
                        KeyCode::KeyD => {
                            self.show_dirichlet = !self.show_dirichlet;
                            self.figure_dirty = true;
                        }
                        KeyCode::KeyN => {
                            self.show_neumann = !self.show_neumann;
                            self.figure_dirty = true;
                        }
                        KeyCode::KeyL => {
                            self.show_legend = !self.show_legend;
                            self.refresh_overlay();
                        }
                        _ => {}
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.controller.process_mouse_button(button, state);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.controller.process_cursor_moved(position.x, position.y);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
                self.controller.process_scroll(lines);
            }

            WindowEvent::RedrawRequested => {
                // Apply accumulated pan/zoom
                self.controller.update(&mut self.camera);

                if self.figure_dirty {
                    self.rebuild_figure();
                }

                if let (Some(ctx), Some(pipeline)) = (&self.render_context, &self.pipeline) {
                    pipeline.update_view(&ctx.queue, &self.camera.view_uniforms());

                    // Get surface texture
                    let output = match ctx.surface.get_current_texture() {
                        Ok(output) => output,
                        Err(wgpu::SurfaceError::Lost) => {
                            if let Some(ctx) = &mut self.render_context {
                                ctx.resize(ctx.size);
                            }
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                            return;
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            log::warn!("Surface error: {:?}", e);
                            return;
                        }
                    };

                    let view = output
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());

                    let mut encoder =
                        ctx.device
                            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                                label: Some("Figure Encoder"),
                            });

                    let bg = &self.config.figure.background_color;
                    pipeline.render(
                        &mut encoder,
                        &view,
                        wgpu::Color {
                            r: bg[0] as f64,
                            g: bg[1] as f64,
                            b: bg[2] as f64,
                            a: bg[3] as f64,
                        },
                    );

                    ctx.queue.submit(std::iter::once(encoder.finish()));
                    output.present();
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting meshview");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application; blocks until the window is closed
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
