use std::time::Instant;

use cubes_math::Vec3;
use cubes_renderer::{CubeRenderer, DemoConfig, FrameData, Scene};
use eframe::egui_wgpu::{self, wgpu};
use egui::{Color32, RichText};

/// Depth bits requested from eframe; the cube pipeline must match its format.
const DEPTH_BITS: u8 = 32;

type SetupError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DemoConfig::default();
    log::info!("starting {}", config.title);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size),
        renderer: eframe::Renderer::Wgpu,
        depth_buffer: DEPTH_BITS,
        ..Default::default()
    };
    let title = config.title.clone();
    eframe::run_native(&title, options, Box::new(|cc| Ok(Box::new(App::new(cc, config)?))))
}

fn to_color32(c: Vec3) -> Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgb(channel(c[0]), channel(c[1]), channel(c[2]))
}

fn mono_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).monospace().color(Color32::from_rgb(140, 140, 140)));
        ui.label(RichText::new(value).monospace().color(Color32::from_rgb(210, 210, 170)));
    });
}

fn matrix_rows(ui: &mut egui::Ui, name: &str, cols: &[[f32; 4]; 4]) {
    ui.label(RichText::new(name).strong());
    for row in 0..4 {
        let cells: Vec<String> = (0..4).map(|col| format!("{:>8.3}", cols[col][row])).collect();
        mono_row(ui, "  ", &cells.join(" "));
    }
}

// ─── Paint callback ───────────────────────────────────────────────────────────

/// Hands one frame's data to the `CubeRenderer` stored in egui's callback
/// resources.
struct CubesCallback {
    frame: FrameData,
}

/// Last upload failure, kept next to the renderer so it is logged once.
#[derive(Default)]
struct UploadStatus {
    last_error: Option<String>,
}

impl UploadStatus {
    fn report(&mut self, error: Option<String>) {
        if error != self.last_error {
            if let Some(msg) = &error {
                log::error!("upload failed: {msg}");
            }
            self.last_error = error;
        }
    }
}

impl egui_wgpu::CallbackTrait for CubesCallback {
    fn prepare(
        &self,
        _device: &wgpu::Device,
        queue: &wgpu::Queue,
        _screen_descriptor: &egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut wgpu::CommandEncoder,
        resources: &mut egui_wgpu::CallbackResources,
    ) -> Vec<wgpu::CommandBuffer> {
        let Some(renderer) = resources.get_mut::<CubeRenderer>() else {
            return Vec::new();
        };
        let error = renderer.prepare(queue, &self.frame).err().map(|e| e.to_string());
        if let Some(status) = resources.get_mut::<UploadStatus>() {
            status.report(error);
        }
        Vec::new()
    }

    fn paint(
        &self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'static>,
        resources: &egui_wgpu::CallbackResources,
    ) {
        if let Some(renderer) = resources.get::<CubeRenderer>() {
            renderer.paint(render_pass);
        }
    }
}

// ─── App state ────────────────────────────────────────────────────────────────

struct App {
    config: DemoConfig,
    scene: Scene,
    start: Instant,
    last_frame: Option<FrameData>,
    last_error: Option<String>,
}

impl App {
    fn new(cc: &eframe::CreationContext<'_>, config: DemoConfig) -> Result<Self, SetupError> {
        let render_state = cc.wgpu_render_state.as_ref().ok_or("wgpu render state unavailable")?;

        let depth_format = egui_wgpu::depth_format_from_bits(DEPTH_BITS, 0);
        let renderer = CubeRenderer::new(
            &render_state.device,
            render_state.target_format,
            depth_format,
            config.cube_positions.len(),
        )?;
        let mut egui_renderer = render_state.renderer.write();
        egui_renderer.callback_resources.insert(renderer);
        egui_renderer.callback_resources.insert(UploadStatus::default());
        drop(egui_renderer);

        let scene = Scene::new(&config);
        Ok(Self { config, scene, start: Instant::now(), last_frame: None, last_error: None })
    }

    fn report(&mut self, error: Option<String>) {
        if error != self.last_error {
            if let Some(msg) = &error {
                log::error!("skipping frame: {msg}");
            }
            self.last_error = error;
        }
    }

    fn show_viewport(&mut self, ui: &mut egui::Ui, time: f32) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let aspect = rect.width() / rect.height();

        let params = self.scene.params(time, aspect);
        match self.scene.build_frame(&params) {
            Ok(frame) => {
                ui.painter().add(egui_wgpu::Callback::new_paint_callback(
                    rect,
                    CubesCallback { frame: frame.clone() },
                ));
                self.last_frame = Some(frame);
                self.report(None);
            }
            // Collapsed viewports and degenerate cameras land here.
            Err(e) => self.report(Some(e.to_string())),
        }
    }

    fn show_info(&self, ui: &mut egui::Ui, time: f32) {
        ui.heading(&self.config.title);
        ui.separator();

        mono_row(ui, "time: ", &format!("{time:.2}s"));
        mono_row(ui, "cubes:", &self.scene.cubes.len().to_string());

        if let Some(frame) = &self.last_frame {
            let [x, y, z, _] = frame.uniforms.light_pos;
            mono_row(ui, "light:", &format!("({x:.2}, {y:.2}, {z:.2})"));
            ui.add_space(8.0);
            matrix_rows(ui, "view", &frame.uniforms.view);
            ui.add_space(4.0);
            matrix_rows(ui, "projection", &frame.uniforms.projection);
        }

        if let Ok(model) = self.scene.model_matrix(0, time) {
            ui.add_space(4.0);
            matrix_rows(ui, "model[0]", &model.to_cols_array_2d());
        }

        if let Some(msg) = &self.last_error {
            ui.add_space(8.0);
            ui.label(RichText::new(msg).monospace().color(Color32::from_rgb(220, 80, 80)));
        }
    }
}

// ─── UI ───────────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let time = self.start.elapsed().as_secs_f32();

        egui::SidePanel::right("frame_info")
            .resizable(false)
            .show(ctx, |ui| self.show_info(ui, time));

        let background = egui::Frame::default().fill(to_color32(self.config.clear_color));
        egui::CentralPanel::default()
            .frame(background)
            .show(ctx, |ui| self.show_viewport(ui, time));

        ctx.request_repaint();
    }
}
