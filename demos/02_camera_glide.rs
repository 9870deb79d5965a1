//! 02 - Camera Glide
//!
//! The full picnic table with the waypoint camera rig, driven by the
//! keyboard instead of the panel.
//!
//! This example demonstrates:
//! - The default three-plate scene with the gingham table
//! - Selecting waypoints with the 1/2/3 keys (R returns to the first)
//! - The per-frame lerp glide between plates
//! - Mouse orbit and scroll dolly layered over the glide
//!
//! Run with: `cargo run --example 02_camera_glide`

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use picnic::scene::SceneBuilder;
use picnic_input::CameraRig;
use picnic_math::Vec3;
use picnic_render::{
    Camera, GpuBatch, GpuTexture, MeshPipeline, RenderContext, RenderableScene, SceneUniforms,
    TextureImage,
};

/// Application state
struct App {
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    pipeline: Option<MeshPipeline>,
    renderable: RenderableScene,
    gpu_batches: Vec<GpuBatch>,
    textures: HashMap<String, GpuTexture>,
    camera: Camera,
    rig: CameraRig,
    last_frame: Instant,
}

impl App {
    fn new() -> Self {
        let world = SceneBuilder::picnic(7);
        let renderable = RenderableScene::from_world(&world);

        let eye = Vec3::new(0.0, 3.0, 6.0);
        let camera = Camera::new(eye, Vec3::ZERO);
        let rig = CameraRig::new(Vec3::new(0.0, 2.0, 6.0), Vec3::ZERO).with_waypoints(
            SceneBuilder::default_waypoints()
                .iter()
                .map(|w| (Vec3::from_array(w.eye), Vec3::from_array(w.look_at))),
        );

        Self {
            window: None,
            render_context: None,
            pipeline: None,
            renderable,
            gpu_batches: Vec::new(),
            textures: HashMap::new(),
            camera,
            rig,
            last_frame: Instant::now(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = Arc::new(
                event_loop
                    .create_window(
                        Window::default_attributes()
                            .with_title("Picnic - Camera Glide (1/2/3 to pick a plate)")
                            .with_inner_size(winit::dpi::LogicalSize::new(1024, 640)),
                    )
                    .expect("Failed to create window"),
            );

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
            self.gpu_batches = self
                .renderable
                .batches
                .iter()
                .map(|b| pipeline.upload_batch(&render_context.device, b))
                .collect();

            // The table cloth, procedural so the demo has no asset dependency
            for key in self.renderable.texture_keys() {
                let texture = GpuTexture::upload(
                    &render_context.device,
                    &render_context.queue,
                    pipeline.texture_layout(),
                    pipeline.sampler(),
                    &TextureImage::gingham(256, 8, [200, 40, 40, 255]),
                );
                self.textures.insert(key.to_string(), texture);
            }

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.pipeline = Some(pipeline);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(size);
                    self.camera.aspect = ctx.aspect_ratio();
                }
                if let (Some(ctx), Some(pipeline)) = (&self.render_context, &mut self.pipeline) {
                    pipeline.ensure_depth_texture(&ctx.device, size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
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
                let now = Instant::now();
                let dt = (now - self.last_frame).as_secs_f32().min(1.0 / 30.0);
                self.last_frame = now;

                self.rig.update(&mut self.camera, dt);

                if let (Some(ctx), Some(pipeline)) = (&self.render_context, &self.pipeline) {
                    pipeline.update_uniforms(
                        &ctx.queue,
                        &SceneUniforms {
                            view_proj: self.camera.view_projection(),
                            camera_pos: self.camera.eye.to_array(),
                            ..Default::default()
                        },
                    );

                    let output = match ctx.surface.get_current_texture() {
                        Ok(o) => o,
                        Err(_) => return,
                    };
                    let view = output
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());
                    let mut encoder = ctx
                        .device
                        .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

                    pipeline.render(
                        &mut encoder,
                        &view,
                        wgpu::Color {
                            r: 0.08,
                            g: 0.09,
                            b: 0.12,
                            a: 1.0,
                        },
                        &self.gpu_batches,
                        &self.textures,
                    );

                    ctx.queue.submit(std::iter::once(encoder.finish()));
                    output.present();
                }

                if let Some(w) = &self.window {
                    w.request_redraw();
                }
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
    env_logger::init();
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
