//! 01 - Single Cookie
//!
//! The simplest Picnic example: one plate with one rainbow cookie and its
//! sprinkles, viewed from a static camera.
//!
//! This example demonstrates:
//! - Creating a window with winit
//! - Setting up the instanced mesh pipeline
//! - Building a world with the scene builder
//! - A static camera (no rig, no panel)
//!
//! Run with: `cargo run --example 01_single_cookie`

use std::collections::HashMap;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use picnic::scene::SceneBuilder;
use picnic_math::Vec3;
use picnic_render::{
    Camera, GpuBatch, MeshPipeline, RenderContext, RenderableScene, SceneUniforms,
};

/// Application state
struct App {
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    pipeline: Option<MeshPipeline>,
    renderable: RenderableScene,
    gpu_batches: Vec<GpuBatch>,
    camera: Camera,
}

impl App {
    fn new() -> Self {
        // One place setting at the origin
        let world = SceneBuilder::new()
            .add_place_setting(Vec3::new(0.0, -0.4, 0.0), 7)
            .build();
        let renderable = RenderableScene::from_world(&world);

        let camera = Camera::new(Vec3::new(0.0, 2.0, 4.0), Vec3::ZERO);

        Self {
            window: None,
            render_context: None,
            pipeline: None,
            renderable,
            gpu_batches: Vec::new(),
            camera,
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
                            .with_title("Picnic - Single Cookie")
                            .with_inner_size(winit::dpi::LogicalSize::new(800, 600)),
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
            WindowEvent::RedrawRequested => {
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
                        &HashMap::new(),
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
}

fn main() {
    env_logger::init();
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
