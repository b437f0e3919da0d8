// GL Backend
// The slice of WebGL the cube pipeline talks to, expressed as a trait so the
// pipeline, buffer and frame code run unchanged against the browser context
// and against the recording fake used by the unit tests.

use web_sys::{WebGlBuffer, WebGlProgram, WebGlRenderingContext as Gl, WebGlShader, WebGlUniformLocation};

use crate::gpu::buffers::BufferTarget;
use crate::gpu::shaders::ShaderStage;

#[cfg(test)]
pub mod recording;

pub trait GlBackend {
    type Shader;
    type Program;
    type Buffer;
    type UniformLocation;

    // Shaders and programs
    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn shader_compiled(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;
    fn delete_shader(&self, shader: &Self::Shader);

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn program_linked(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;
    fn delete_program(&self, program: &Self::Program);
    fn use_program(&self, program: &Self::Program);

    /// Negative when the attribute is not active in the program.
    fn attrib_location(&self, program: &Self::Program, name: &str) -> i32;
    fn uniform_location(&self, program: &Self::Program, name: &str) -> Option<Self::UniformLocation>;

    // Buffers and attributes
    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn bind_buffer(&self, target: BufferTarget, buffer: &Self::Buffer);
    /// Copies `data` into the buffer bound to `target` with `STATIC_DRAW`.
    fn buffer_data_f32(&self, target: BufferTarget, data: &[f32]);
    fn buffer_data_u16(&self, target: BufferTarget, data: &[u16]);
    /// Tightly packed floats, no normalization, offset 0.
    fn vertex_attrib_pointer_f32(&self, location: u32, components: i32);
    fn enable_vertex_attrib_array(&self, location: u32);
    fn uniform_matrix4(&self, location: &Self::UniformLocation, columns: &[f32; 16]);

    // Frame state
    fn clear_color(&self, rgba: [f32; 4]);
    fn clear_depth(&self, depth: f32);
    /// Enables depth testing with `LEQUAL`.
    fn enable_depth_test_lequal(&self);
    fn clear_color_and_depth(&self);
    fn draw_triangles_u16(&self, index_count: i32);
}

impl ShaderStage {
    fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => Gl::VERTEX_SHADER,
            ShaderStage::Fragment => Gl::FRAGMENT_SHADER,
        }
    }
}

impl BufferTarget {
    fn gl_enum(self) -> u32 {
        match self {
            BufferTarget::Vertex => Gl::ARRAY_BUFFER,
            BufferTarget::Index => Gl::ELEMENT_ARRAY_BUFFER,
        }
    }
}

impl GlBackend for Gl {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Option<WebGlShader> {
        Gl::create_shader(self, stage.gl_enum())
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        Gl::shader_source(self, shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        Gl::compile_shader(self, shader);
    }

    fn shader_compiled(&self, shader: &WebGlShader) -> bool {
        self.get_shader_parameter(shader, Gl::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        self.get_shader_info_log(shader)
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        Gl::delete_shader(self, Some(shader));
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        Gl::create_program(self)
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        Gl::attach_shader(self, program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        Gl::link_program(self, program);
    }

    fn program_linked(&self, program: &WebGlProgram) -> bool {
        self.get_program_parameter(program, Gl::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        self.get_program_info_log(program)
    }

    fn delete_program(&self, program: &WebGlProgram) {
        Gl::delete_program(self, Some(program));
    }

    fn use_program(&self, program: &WebGlProgram) {
        Gl::use_program(self, Some(program));
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> i32 {
        self.get_attrib_location(program, name)
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.get_uniform_location(program, name)
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        Gl::create_buffer(self)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: &WebGlBuffer) {
        Gl::bind_buffer(self, target.gl_enum(), Some(buffer));
    }

    fn buffer_data_f32(&self, target: BufferTarget, data: &[f32]) {
        let array = js_sys::Float32Array::from(data);
        self.buffer_data_with_array_buffer_view(target.gl_enum(), &array, Gl::STATIC_DRAW);
    }

    fn buffer_data_u16(&self, target: BufferTarget, data: &[u16]) {
        let array = js_sys::Uint16Array::from(data);
        self.buffer_data_with_array_buffer_view(target.gl_enum(), &array, Gl::STATIC_DRAW);
    }

    fn vertex_attrib_pointer_f32(&self, location: u32, components: i32) {
        self.vertex_attrib_pointer_with_i32(location, components, Gl::FLOAT, false, 0, 0);
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        Gl::enable_vertex_attrib_array(self, location);
    }

    fn uniform_matrix4(&self, location: &WebGlUniformLocation, columns: &[f32; 16]) {
        self.uniform_matrix4fv_with_f32_array(Some(location), false, columns);
    }

    fn clear_color(&self, [r, g, b, a]: [f32; 4]) {
        Gl::clear_color(self, r, g, b, a);
    }

    fn clear_depth(&self, depth: f32) {
        Gl::clear_depth(self, depth);
    }

    fn enable_depth_test_lequal(&self) {
        self.enable(Gl::DEPTH_TEST);
        self.depth_func(Gl::LEQUAL);
    }

    fn clear_color_and_depth(&self) {
        self.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);
    }

    fn draw_triangles_u16(&self, index_count: i32) {
        self.draw_elements_with_i32(Gl::TRIANGLES, index_count, Gl::UNSIGNED_SHORT, 0);
    }
}
