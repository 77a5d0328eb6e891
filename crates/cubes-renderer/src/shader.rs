//! Shader compile-and-link helper.
//!
//! Vertex and fragment sources are compiled as separate WGSL modules, each
//! inside its own validation error scope, then linked into one render
//! pipeline. Any diagnostic the device reports is returned as a
//! [`ShaderError`] instead of reaching wgpu's uncaptured-error handler.

use std::fmt;

use crate::error::ShaderError;

// ─── Stage ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn as_str(self) -> &'static str {
        match self {
            ShaderStage::Vertex   => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }

    /// Entry point each stage's source must export.
    pub fn entry_point(self) -> &'static str {
        match self {
            ShaderStage::Vertex   => "vs_main",
            ShaderStage::Fragment => "fs_main",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Program description ──────────────────────────────────────────────────────

/// Everything needed to turn two shader sources into a linked pipeline.
pub struct ProgramDesc<'a> {
    pub label: &'a str,
    pub vertex_source: &'a str,
    pub fragment_source: &'a str,
    pub vertex_buffers: &'a [wgpu::VertexBufferLayout<'a>],
    pub bind_group_layouts: &'a [&'a wgpu::BindGroupLayout],
    pub color_format: wgpu::TextureFormat,
    /// Depth attachment format of the pass this program draws into.
    /// `None` disables depth testing.
    pub depth_format: Option<wgpu::TextureFormat>,
}

/// A linked program: both stages compiled and validated against one layout.
pub struct ShaderProgram {
    pub pipeline: wgpu::RenderPipeline,
}

// ─── Compile ──────────────────────────────────────────────────────────────────

/// Compile one stage. Errors carry the full compiler log; warnings are logged.
pub fn compile_stage(
    device: &wgpu::Device,
    stage: ShaderStage,
    label: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, ShaderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    let scope_error = pollster::block_on(device.pop_error_scope());

    let info = pollster::block_on(module.get_compilation_info());
    let mut errors = Vec::new();
    for message in &info.messages {
        let text = format_message(message);
        match message.message_type {
            wgpu::CompilationMessageType::Error   => errors.push(text),
            wgpu::CompilationMessageType::Warning => log::warn!("{label} ({stage}): {text}"),
            wgpu::CompilationMessageType::Info    => log::debug!("{label} ({stage}): {text}"),
        }
    }

    // A parse failure shows up in both places; keep one copy.
    if let Some(err) = scope_error.filter(|_| errors.is_empty()) {
        errors.push(err.to_string());
    }
    if !errors.is_empty() {
        return Err(ShaderError::Compile { stage, log: errors.join("\n") });
    }
    Ok(module)
}

fn format_message(message: &wgpu::CompilationMessage) -> String {
    match &message.location {
        Some(loc) => format!("{}:{}: {}", loc.line_number, loc.line_position, message.message),
        None      => message.message.clone(),
    }
}

// ─── Link ─────────────────────────────────────────────────────────────────────

/// Link two compiled stages into a render pipeline.
pub fn link_program(
    device: &wgpu::Device,
    desc: &ProgramDesc<'_>,
    vertex: &wgpu::ShaderModule,
    fragment: &wgpu::ShaderModule,
) -> Result<ShaderProgram, ShaderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(desc.label),
        bind_group_layouts: desc.bind_group_layouts,
        push_constant_ranges: &[],
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(desc.label),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: vertex,
            entry_point: Some(ShaderStage::Vertex.entry_point()),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            buffers: desc.vertex_buffers,
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            // The cube faces are not wound consistently; depth testing
            // resolves visibility.
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: desc.depth_format.map(|format| wgpu::DepthStencilState {
            format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: fragment,
            entry_point: Some(ShaderStage::Fragment.entry_point()),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: desc.color_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        multiview: None,
        cache: None,
    });

    if let Some(err) = pollster::block_on(device.pop_error_scope()) {
        return Err(ShaderError::Link { log: err.to_string() });
    }
    Ok(ShaderProgram { pipeline })
}

/// Compile both stages of `desc` and link them.
pub fn create_shader_program(
    device: &wgpu::Device,
    desc: &ProgramDesc<'_>,
) -> Result<ShaderProgram, ShaderError> {
    let vertex = compile_stage(device, ShaderStage::Vertex, desc.label, desc.vertex_source)?;
    let fragment = compile_stage(device, ShaderStage::Fragment, desc.label, desc.fragment_source)?;
    let program = link_program(device, desc, &vertex, &fragment)?;
    log::debug!(
        "linked shader program '{}' (color {:?}, depth {:?})",
        desc.label, desc.color_format, desc.depth_format,
    );
    Ok(program)
}
