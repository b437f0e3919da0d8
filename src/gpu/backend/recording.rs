// Test double for `GlBackend`: records every call, keeps uploaded buffer
// contents and fakes just enough of the compiler to tell good GLSL from bad.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use super::GlBackend;
use crate::gpu::buffers::BufferTarget;
use crate::gpu::shaders::ShaderStage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateShader(ShaderStage),
    DeleteShader(Handle),
    CreateProgram,
    LinkProgram(Handle),
    DeleteProgram(Handle),
    UseProgram(Handle),
    CreateBuffer,
    BindBuffer(BufferTarget, Handle),
    BufferData(BufferTarget, usize),
    VertexAttribPointer { location: u32, components: i32 },
    EnableAttrib(u32),
    UniformMatrix(Handle, [f32; 16]),
    ClearColor([f32; 4]),
    ClearDepth(f32),
    EnableDepthTestLequal,
    Clear,
    DrawTriangles(i32),
}

#[derive(Debug, Clone)]
enum BufferData {
    F32(Vec<f32>),
    U16(Vec<u16>),
}

#[derive(Default)]
struct State {
    next_id: u32,
    calls: Vec<GlCall>,
    shader_sources: HashMap<Handle, String>,
    compiled: HashSet<Handle>,
    live_shaders: HashSet<Handle>,
    attached: HashMap<Handle, Vec<Handle>>,
    linked: HashSet<Handle>,
    live_programs: HashSet<Handle>,
    uniforms: HashMap<(Handle, String), Handle>,
    bound: HashMap<BufferTarget, Handle>,
    buffers: HashMap<Handle, BufferData>,
    fail_link: bool,
    fail_allocation: bool,
    silent_compile_errors: bool,
}

impl State {
    fn next(&mut self) -> Handle {
        self.next_id += 1;
        Handle(self.next_id)
    }

    fn program_sources(&self, program: Handle) -> Vec<&str> {
        self.attached
            .get(&program)
            .into_iter()
            .flatten()
            .filter_map(|s| self.shader_sources.get(s).map(String::as_str))
            .collect()
    }
}

/// Names declared as `<qualifier> <type> <name>;` in `sources`, in order.
fn declared(sources: &[&str], qualifier: &str) -> Vec<String> {
    sources
        .iter()
        .flat_map(|src| src.lines())
        .filter_map(|line| line.trim().strip_prefix(qualifier))
        .filter_map(|rest| rest.trim().trim_end_matches(';').split_whitespace().last())
        .map(str::to_string)
        .collect()
}

fn looks_valid(source: &str) -> bool {
    let balanced = |open: char, close: char| {
        source.chars().filter(|&c| c == open).count() == source.chars().filter(|&c| c == close).count()
    };
    source.contains("void main") && balanced('{', '}') && balanced('(', ')')
}

#[derive(Default)]
pub struct RecordingGl {
    state: RefCell<State>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn set_fail_link(&self, fail: bool) {
        self.state.borrow_mut().fail_link = fail;
    }

    pub fn set_fail_allocation(&self, fail: bool) {
        self.state.borrow_mut().fail_allocation = fail;
    }

    /// Compile failures report an empty info log, like some drivers do.
    pub fn set_silent_compile_errors(&self, silent: bool) {
        self.state.borrow_mut().silent_compile_errors = silent;
    }

    pub fn live_shaders(&self) -> usize {
        self.state.borrow().live_shaders.len()
    }

    pub fn live_programs(&self) -> usize {
        self.state.borrow().live_programs.len()
    }

    pub fn buffer_f32(&self, buffer: Handle) -> Option<Vec<f32>> {
        match self.state.borrow().buffers.get(&buffer) {
            Some(BufferData::F32(data)) => Some(data.clone()),
            _ => None,
        }
    }

    pub fn buffer_u16(&self, buffer: Handle) -> Option<Vec<u16>> {
        match self.state.borrow().buffers.get(&buffer) {
            Some(BufferData::U16(data)) => Some(data.clone()),
            _ => None,
        }
    }

    fn record(&self, call: GlCall) {
        self.state.borrow_mut().calls.push(call);
    }

    fn store(&self, target: BufferTarget, data: BufferData, len: usize) {
        let mut state = self.state.borrow_mut();
        state.calls.push(GlCall::BufferData(target, len));
        if let Some(&buffer) = state.bound.get(&target) {
            state.buffers.insert(buffer, data);
        }
    }
}

impl GlBackend for RecordingGl {
    type Shader = Handle;
    type Program = Handle;
    type Buffer = Handle;
    type UniformLocation = Handle;

    fn create_shader(&self, stage: ShaderStage) -> Option<Handle> {
        let mut state = self.state.borrow_mut();
        state.calls.push(GlCall::CreateShader(stage));
        if state.fail_allocation {
            return None;
        }
        let shader = state.next();
        state.live_shaders.insert(shader);
        Some(shader)
    }

    fn shader_source(&self, shader: &Handle, source: &str) {
        self.state.borrow_mut().shader_sources.insert(*shader, source.to_string());
    }

    fn compile_shader(&self, shader: &Handle) {
        let mut state = self.state.borrow_mut();
        let ok = state.shader_sources.get(shader).is_some_and(|s| looks_valid(s));
        if ok {
            state.compiled.insert(*shader);
        }
    }

    fn shader_compiled(&self, shader: &Handle) -> bool {
        self.state.borrow().compiled.contains(shader)
    }

    fn shader_info_log(&self, shader: &Handle) -> Option<String> {
        let state = self.state.borrow();
        if state.compiled.contains(shader) || state.silent_compile_errors {
            Some(String::new())
        } else {
            Some("ERROR: 0:1: syntax error\n".to_string())
        }
    }

    fn delete_shader(&self, shader: &Handle) {
        let mut state = self.state.borrow_mut();
        state.calls.push(GlCall::DeleteShader(*shader));
        state.live_shaders.remove(shader);
    }

    fn create_program(&self) -> Option<Handle> {
        let mut state = self.state.borrow_mut();
        state.calls.push(GlCall::CreateProgram);
        if state.fail_allocation {
            return None;
        }
        let program = state.next();
        state.live_programs.insert(program);
        Some(program)
    }

    fn attach_shader(&self, program: &Handle, shader: &Handle) {
        self.state.borrow_mut().attached.entry(*program).or_default().push(*shader);
    }

    fn link_program(&self, program: &Handle) {
        let mut state = self.state.borrow_mut();
        state.calls.push(GlCall::LinkProgram(*program));
        let stages_ok = state
            .attached
            .get(program)
            .is_some_and(|shaders| shaders.len() == 2 && shaders.iter().all(|s| state.compiled.contains(s)));
        if stages_ok && !state.fail_link {
            state.linked.insert(*program);
        }
    }

    fn program_linked(&self, program: &Handle) -> bool {
        self.state.borrow().linked.contains(program)
    }

    fn program_info_log(&self, program: &Handle) -> Option<String> {
        if self.program_linked(program) {
            Some(String::new())
        } else {
            Some("error: varying v_color not written by vertex shader".to_string())
        }
    }

    fn delete_program(&self, program: &Handle) {
        let mut state = self.state.borrow_mut();
        state.calls.push(GlCall::DeleteProgram(*program));
        state.live_programs.remove(program);
    }

    fn use_program(&self, program: &Handle) {
        self.record(GlCall::UseProgram(*program));
    }

    fn attrib_location(&self, program: &Handle, name: &str) -> i32 {
        let state = self.state.borrow();
        if !state.linked.contains(program) {
            return -1;
        }
        declared(&state.program_sources(*program), "attribute")
            .iter()
            .position(|n| n == name)
            .map_or(-1, |i| i as i32)
    }

    fn uniform_location(&self, program: &Handle, name: &str) -> Option<Handle> {
        let mut state = self.state.borrow_mut();
        if !state.linked.contains(program) {
            return None;
        }
        if !declared(&state.program_sources(*program), "uniform").iter().any(|n| n == name) {
            return None;
        }
        let key = (*program, name.to_string());
        if let Some(&location) = state.uniforms.get(&key) {
            return Some(location);
        }
        let location = state.next();
        state.uniforms.insert(key, location);
        Some(location)
    }

    fn create_buffer(&self) -> Option<Handle> {
        let mut state = self.state.borrow_mut();
        state.calls.push(GlCall::CreateBuffer);
        if state.fail_allocation {
            return None;
        }
        Some(state.next())
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: &Handle) {
        let mut state = self.state.borrow_mut();
        state.calls.push(GlCall::BindBuffer(target, *buffer));
        state.bound.insert(target, *buffer);
    }

    fn buffer_data_f32(&self, target: BufferTarget, data: &[f32]) {
        self.store(target, BufferData::F32(data.to_vec()), data.len());
    }

    fn buffer_data_u16(&self, target: BufferTarget, data: &[u16]) {
        self.store(target, BufferData::U16(data.to_vec()), data.len());
    }

    fn vertex_attrib_pointer_f32(&self, location: u32, components: i32) {
        self.record(GlCall::VertexAttribPointer { location, components });
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.record(GlCall::EnableAttrib(location));
    }

    fn uniform_matrix4(&self, location: &Handle, columns: &[f32; 16]) {
        self.record(GlCall::UniformMatrix(*location, *columns));
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        self.record(GlCall::ClearColor(rgba));
    }

    fn clear_depth(&self, depth: f32) {
        self.record(GlCall::ClearDepth(depth));
    }

    fn enable_depth_test_lequal(&self) {
        self.record(GlCall::EnableDepthTestLequal);
    }

    fn clear_color_and_depth(&self) {
        self.record(GlCall::Clear);
    }

    fn draw_triangles_u16(&self, index_count: i32) {
        self.record(GlCall::DrawTriangles(index_count));
    }
}
