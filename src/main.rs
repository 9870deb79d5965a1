//! Picnic - decorative rainbow-cookie scene
//!
//! A small wgpu scene: a gingham picnic table with three plates of layered
//! rainbow cookies under instanced sprinkles, viewed through a gliding
//! camera with an FOV/waypoint control panel.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use egui::Context as EguiContext;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

use picnic::config::AppConfig;
use picnic::scene::SceneBuilder;
use picnic_core::{Scene, Waypoint, World};
use picnic_input::CameraRig;
use picnic_math::Vec3;
use picnic_render::{
    Camera, GpuBatch, GpuTexture, MeshPipeline, RenderContext, RenderableScene, SceneUniforms,
    TextureImage,
};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    pipeline: Option<MeshPipeline>,
    /// CPU-side draw batches collected from the world
    renderable: RenderableScene,
    /// GPU buffers, uploaded once on resume
    gpu_batches: Vec<GpuBatch>,
    /// Scene textures by key
    textures: HashMap<String, GpuTexture>,
    /// Camera waypoints (panel buttons)
    waypoints: Vec<Waypoint>,
    camera: Camera,
    rig: CameraRig,
    /// FOV slider state in degrees
    fov_value: f32,
    show_panel: bool,
    egui_ctx: EguiContext,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
    last_frame: Instant,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        // Load the scene file if configured, otherwise build the default
        // picnic world
        let (world, waypoints) = Self::load_scene(&config);

        let renderable = RenderableScene::from_world(&world);
        log::info!(
            "Scene ready: {} entities, {} batches, {} instances",
            world.entity_count(),
            renderable.batch_count(),
            renderable.instance_count()
        );

        let eye = Vec3::from_array(config.camera.eye);
        let look_at = Vec3::from_array(config.camera.look_at);
        let mut camera = Camera::new(eye, look_at);
        camera.near = config.camera.near;
        camera.far = config.camera.far;

        let rig = CameraRig::new(eye, look_at)
            .with_waypoints(
                waypoints
                    .iter()
                    .map(|w| (Vec3::from_array(w.eye), Vec3::from_array(w.look_at))),
            )
            .with_fov_bounds(config.camera.fov_min, config.camera.fov_max)
            .with_lerp_factor(config.input.lerp_factor)
            .with_orbit_sensitivity(config.input.orbit_sensitivity)
            .with_dolly_speed(config.input.dolly_speed);

        let fov_value = rig.clamp_fov(config.camera.fov);
        camera.fov = fov_value;
        let show_panel = config.debug.show_panel;

        Self {
            config,
            window: None,
            render_context: None,
            pipeline: None,
            renderable,
            gpu_batches: Vec::new(),
            textures: HashMap::new(),
            waypoints,
            camera,
            rig,
            fov_value,
            show_panel,
            egui_ctx: EguiContext::default(),
            egui_winit: None,
            egui_renderer: None,
            last_frame: Instant::now(),
        }
    }

    /// Load the configured scene file, falling back to the built-in world
    fn load_scene(config: &AppConfig) -> (World, Vec<Waypoint>) {
        if let Some(path) = &config.scene.path {
            match Scene::load(path) {
                Ok(scene) => {
                    let world = scene.instantiate();
                    return (world, scene.waypoints);
                }
                Err(e) => {
                    log::warn!("Failed to load scene '{}': {}. Using built-in scene.", path, e);
                }
            }
        }

        (
            SceneBuilder::picnic(config.scene.sprinkle_seed),
            SceneBuilder::default_waypoints(),
        )
    }

    /// Load every texture the batches reference, with a procedural fallback
    fn load_textures(&mut self) {
        let (Some(ctx), Some(pipeline)) = (&self.render_context, &self.pipeline) else {
            return;
        };

        for key in self.renderable.texture_keys() {
            let path = format!("{}/{}.png", self.config.scene.assets_dir, key);
            let image = match TextureImage::open(&path) {
                Ok(image) => image,
                Err(e) => {
                    log::warn!(
                        "Failed to load texture '{}': {}. Using procedural gingham.",
                        path,
                        e
                    );
                    TextureImage::gingham(256, 8, [200, 40, 40, 255])
                }
            };
            let texture = GpuTexture::upload(
                &ctx.device,
                &ctx.queue,
                pipeline.texture_layout(),
                pipeline.sampler(),
                &image,
            );
            self.textures.insert(key.to_string(), texture);
        }
    }

    /// Draw the camera control panel
    fn draw_panel(&mut self, ctx: &EguiContext) {
        if !self.show_panel {
            return;
        }

        let fov_min = self.rig.fov_min;
        let fov_max = self.rig.fov_max;

        egui::SidePanel::left("camera_panel")
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Camera");
                ui.separator();

                let slider = ui.add(
                    egui::Slider::new(&mut self.fov_value, fov_min..=fov_max)
                        .text("Field of view")
                        .suffix("\u{b0}"),
                );
                if slider.changed() {
                    self.rig.set_fov(&mut self.camera, self.fov_value);
                }

                if !self.waypoints.is_empty() {
                    ui.separator();
                    ui.heading("Plates");
                    for i in 0..self.waypoints.len() {
                        let label = format!("View {} plate", self.waypoints[i].name);
                        if ui.button(label).clicked() {
                            self.rig.select_waypoint(i);
                        }
                    }
                }

                ui.separator();
                let eye = self.camera.eye;
                ui.label(format!("Eye: ({:.1}, {:.1}, {:.1})", eye.x, eye.y, eye.z));
                ui.small("Drag: orbit | Scroll: dolly | 1-3: plates");
            });
    }

    /// Render one frame: glide the camera, draw the scene, then the panel
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        // Calculate delta time, capped to avoid a huge first step after focus
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(1.0 / 30.0);
        self.last_frame = now;

        // One interpolation step toward the goal waypoint
        self.rig.update(&mut self.camera, dt);

        let (Some(ctx), Some(pipeline)) = (&self.render_context, &self.pipeline) else {
            return;
        };

        let rendering = &self.config.rendering;
        let light_dir = Vec3::from_array(rendering.light_dir).normalized();
        pipeline.update_uniforms(
            &ctx.queue,
            &SceneUniforms {
                view_proj: self.camera.view_projection(),
                light_dir: light_dir.to_array(),
                ambient_strength: rendering.ambient_strength,
                camera_pos: self.camera.eye.to_array(),
                diffuse_strength: rendering.diffuse_strength,
            },
        );

        // Get surface texture
        let output = match ctx.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
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

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame_encoder"),
            });

        let bg = &rendering.background_color;
        pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
            &self.gpu_batches,
            &self.textures,
        );

        // Panel pass on top of the scene
        let window = self.window.as_ref().unwrap().clone();
        let raw_input = self
            .egui_winit
            .as_mut()
            .unwrap()
            .take_egui_input(&window);
        let egui_ctx = self.egui_ctx.clone();
        let full_output = egui_ctx.run(raw_input, |ctx| {
            self.draw_panel(ctx);
        });

        self.egui_winit
            .as_mut()
            .unwrap()
            .handle_platform_output(&window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let ctx = self.render_context.as_ref().unwrap();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [ctx.config.width, ctx.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        {
            let egui_renderer = self.egui_renderer.as_mut().unwrap();
            for (id, image_delta) in &full_output.textures_delta.set {
                egui_renderer.update_texture(&ctx.device, &ctx.queue, *id, image_delta);
            }
            egui_renderer.update_buffers(
                &ctx.device,
                &ctx.queue,
                &mut encoder,
                &paint_jobs,
                &screen_descriptor,
            );
            {
                let mut pass = encoder
                    .begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("panel_pass"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Load,
                                store: wgpu::StoreOp::Store,
                            },
                        })],
                        depth_stencil_attachment: None,
                        ..Default::default()
                    })
                    .forget_lifetime();
                egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
            }
            for id in &full_output.textures_delta.free {
                egui_renderer.free_texture(id);
            }
        }

        ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        // Request next frame
        if let Some(window) = &self.window {
            window.request_redraw();
        }
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
            let render_context = pollster::block_on(RenderContext::new(window.clone()));
            let mut pipeline = MeshPipeline::new(
                &render_context.device,
                &render_context.queue,
                render_context.config.format,
            );
            pipeline.ensure_depth_texture(
                &render_context.device,
                render_context.size.width,
                render_context.size.height,
            );

            self.camera.aspect = render_context.aspect_ratio();

            // Upload geometry once; the scene itself never changes
            self.gpu_batches = self
                .renderable
                .batches
                .iter()
                .map(|b| pipeline.upload_batch(&render_context.device, b))
                .collect();
            log::info!("Uploaded {} batches", self.gpu_batches.len());

            let egui_winit = egui_winit::State::new(
                self.egui_ctx.clone(),
                egui::ViewportId::ROOT,
                &window,
                Some(window.scale_factor() as f32),
                None,
                None,
            );
            let egui_renderer = egui_wgpu::Renderer::new(
                &render_context.device,
                render_context.config.format,
                None,
                1,
                false,
            );

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.pipeline = Some(pipeline);
            self.egui_winit = Some(egui_winit);
            self.egui_renderer = Some(egui_renderer);

            self.load_textures();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let (Some(egui_winit), Some(window)) = (&mut self.egui_winit, &self.window) {
            let response = egui_winit.on_window_event(window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                    self.camera.aspect = ctx.aspect_ratio();
                }
                if let (Some(ctx), Some(pipeline)) =
                    (&self.render_context, &mut self.pipeline)
                {
                    pipeline.ensure_depth_texture(
                        &ctx.device,
                        physical_size.width,
                        physical_size.height,
                    );
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if event.state == ElementState::Pressed {
                        match key {
                            KeyCode::Escape => {
                                event_loop.exit();
                                return;
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
                                return;
                            }
                            KeyCode::KeyP => {
                                self.show_panel = !self.show_panel;
                                return;
                            }
                            _ => {}
                        }
                    }
                    // Waypoint digit keys
                    self.rig.process_keyboard(key, event.state);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.rig.process_mouse_button(button, state);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    winit::event::MouseScrollDelta::LineDelta(_, y) => y,
                    winit::event::MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
                self.rig.process_scroll(scroll);
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.rig.process_mouse_motion(delta.0, delta.1);
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting Picnic");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
