// @generated by kernelgen from kernels/dispatch.cl
// Do not edit by hand.

#[allow(unused_imports)]
use ::kernelgen::runtime::types::*;
/// Wrapper for kernel `saxpy` declared at kernels/dispatch.cl:1.
#[allow(non_camel_case_types)]
pub struct saxpy {
    base: ::kernelgen::runtime::KernelBase,
}
impl ::kernelgen::runtime::KernelWrapper for saxpy {
    const KERNEL_NAME: &'static str = "saxpy";
    const KERNEL_PATH: &'static str = "/src/kernels/dispatch.cl";
    const ORIGINAL_PATH: &'static str = "kernels/dispatch.cl";
    fn kernel_source() -> ::kernelgen::runtime::KernelSource {
        ::kernelgen::runtime::KernelSource::Embedded(
            "kernel void saxpy(float alpha, global float* x, local float* tile, int n, global float* y)\n{\n    y[get_global_id(0)] += alpha * x[get_global_id(0)];\n}\n\nkernel void shade(uint4 match, global uchar* queue)\n{\n}\n",
        )
    }
}
#[allow(clippy::too_many_arguments)]
impl saxpy {
    pub fn new(
        context: &::kernelgen::runtime::Context,
    ) -> ::core::result::Result<Self, ::kernelgen::runtime::KernelError> {
        ::core::result::Result::Ok(Self {
            base: ::kernelgen::runtime::KernelBase::new::<Self>(context)?,
        })
    }
    pub fn base(&self) -> &::kernelgen::runtime::KernelBase {
        &self.base
    }
    /// Builds the program for `device` and creates the kernel object.
    pub fn build(
        &mut self,
        device: ::kernelgen::runtime::Device,
    ) -> ::core::result::Result<(), ::kernelgen::runtime::KernelError> {
        self.base.build(device).map(|_| ())
    }
    fn dispatch(
        &mut self,
        queue: &::kernelgen::runtime::CommandQueue,
        alpha: f32,
        x: &::kernelgen::runtime::Buffer<f32>,
        tile_length: usize,
        n: i32,
        y: &::kernelgen::runtime::Buffer<f32>,
        global: [usize; 3],
        local: [usize; 3],
        wait_list: &[::kernelgen::runtime::Event],
    ) -> ::core::result::Result<
        ::kernelgen::runtime::Event,
        ::kernelgen::runtime::KernelError,
    > {
        let mut bound_kernel = self.base.bind(queue)?;
        bound_kernel
            .set_arg(
                0,
                ::kernelgen::runtime::KernelArg::Bytes {
                    size: ::core::mem::size_of::<f32>(),
                    value: ::core::ptr::addr_of!(alpha).cast(),
                },
            )?;
        bound_kernel.set_arg(1, ::kernelgen::runtime::KernelArg::Mem(x.mem()))?;
        bound_kernel
            .set_arg(
                2,
                ::kernelgen::runtime::KernelArg::Local {
                    size: tile_length * ::core::mem::size_of::<f32>(),
                },
            )?;
        bound_kernel
            .set_arg(
                3,
                ::kernelgen::runtime::KernelArg::Bytes {
                    size: ::core::mem::size_of::<i32>(),
                    value: ::core::ptr::addr_of!(n).cast(),
                },
            )?;
        bound_kernel.set_arg(4, ::kernelgen::runtime::KernelArg::Mem(y.mem()))?;
        bound_kernel.enqueue(queue, global, local, wait_list)
    }
    /// Launches over a 1-dimensional grid and waits for completion. A zero local size lets the runtime choose.
    pub fn run_1d(
        &mut self,
        queue: &::kernelgen::runtime::CommandQueue,
        alpha: f32,
        x: &::kernelgen::runtime::Buffer<f32>,
        tile_length: usize,
        n: i32,
        y: &::kernelgen::runtime::Buffer<f32>,
        global: [usize; 1],
        local: [usize; 1],
        wait_list: &[::kernelgen::runtime::Event],
    ) -> ::core::result::Result<(), ::kernelgen::runtime::KernelError> {
        let event = self
            .dispatch(
                queue,
                alpha,
                x,
                tile_length,
                n,
                y,
                [global[0], 0, 0],
                [local[0], 0, 0],
                wait_list,
            )?;
        event.wait()
    }
    /// Launches over a 1-dimensional grid and returns the completion event without waiting.
    pub fn run_1d_async(
        &mut self,
        queue: &::kernelgen::runtime::CommandQueue,
        alpha: f32,
        x: &::kernelgen::runtime::Buffer<f32>,
        tile_length: usize,
        n: i32,
        y: &::kernelgen::runtime::Buffer<f32>,
        global: [usize; 1],
        local: [usize; 1],
        wait_list: &[::kernelgen::runtime::Event],
    ) -> ::core::result::Result<
        ::kernelgen::runtime::Event,
        ::kernelgen::runtime::KernelError,
    > {
        self.dispatch(
            queue,
            alpha,
            x,
            tile_length,
            n,
            y,
            [global[0], 0, 0],
            [local[0], 0, 0],
            wait_list,
        )
    }
    /// Launches over a 2-dimensional grid and waits for completion. A zero local size lets the runtime choose.
    pub fn run_2d(
        &mut self,
        queue: &::kernelgen::runtime::CommandQueue,
        alpha: f32,
        x: &::kernelgen::runtime::Buffer<f32>,
        tile_length: usize,
        n: i32,
        y: &::kernelgen::runtime::Buffer<f32>,
        global: [usize; 2],
        local: [usize; 2],
        wait_list: &[::kernelgen::runtime::Event],
    ) -> ::core::result::Result<(), ::kernelgen::runtime::KernelError> {
        let event = self
            .dispatch(
                queue,
                alpha,
                x,
                tile_length,
                n,
                y,
                [global[0], global[1], 0],
                [local[0], local[1], 0],
                wait_list,
            )?;
        event.wait()
    }
    /// Launches over a 2-dimensional grid and returns the completion event without waiting.
    pub fn run_2d_async(
        &mut self,
        queue: &::kernelgen::runtime::CommandQueue,
        alpha: f32,
        x: &::kernelgen::runtime::Buffer<f32>,
        tile_length: usize,
        n: i32,
        y: &::kernelgen::runtime::Buffer<f32>,
        global: [usize; 2],
        local: [usize; 2],
        wait_list: &[::kernelgen::runtime::Event],
    ) -> ::core::result::Result<
        ::kernelgen::runtime::Event,
        ::kernelgen::runtime::KernelError,
    > {
        self.dispatch(
            queue,
            alpha,
            x,
            tile_length,
            n,
            y,
            [global[0], global[1], 0],
            [local[0], local[1], 0],
            wait_list,
        )
    }
    /// Launches over a 3-dimensional grid and waits for completion. A zero local size lets the runtime choose.
    pub fn run_3d(
        &mut self,
        queue: &::kernelgen::runtime::CommandQueue,
        alpha: f32,
        x: &::kernelgen::runtime::Buffer<f32>,
        tile_length: usize,
        n: i32,
        y: &::kernelgen::runtime::Buffer<f32>,
        global: [usize; 3],
        local: [usize; 3],
        wait_list: &[::kernelgen::runtime::Event],
    ) -> ::core::result::Result<(), ::kernelgen::runtime::KernelError> {
        let event = self
            .dispatch(
                queue,
                alpha,
                x,
                tile_length,
                n,
                y,
                [global[0], global[1], global[2]],
                [local[0], local[1], local[2]],
                wait_list,
            )?;
        event.wait()
    }
    /// Launches over a 3-dimensional grid and returns the completion event without waiting.
    pub fn run_3d_async(
        &mut self,
        queue: &::kernelgen::runtime::CommandQueue,
        alpha: f32,
        x: &::kernelgen::runtime::Buffer<f32>,
        tile_length: usize,
        n: i32,
        y: &::kernelgen::runtime::Buffer<f32>,
        global: [usize; 3],
        local: [usize; 3],
        wait_list: &[::kernelgen::runtime::Event],
    ) -> ::core::result::Result<
        ::kernelgen::runtime::Event,
        ::kernelgen::runtime::KernelError,
    > {
        self.dispatch(
            queue,
            alpha,
            x,
            tile_length,
            n,
            y,
            [global[0], global[1], global[2]],
            [local[0], local[1], local[2]],
            wait_list,
        )
    }
}
/// Wrapper for kernel `shade` declared at kernels/dispatch.cl:6.
#[allow(non_camel_case_types)]
pub struct shade {
    base: ::kernelgen::runtime::KernelBase,
}
impl ::kernelgen::runtime::KernelWrapper for shade {
    const KERNEL_NAME: &'static str = "shade";
    const KERNEL_PATH: &'static str = "/src/kernels/dispatch.cl";
    const ORIGINAL_PATH: &'static str = "kernels/dispatch.cl";
    fn kernel_source() -> ::kernelgen::runtime::KernelSource {
        ::kernelgen::runtime::KernelSource::Embedded(
            "kernel void saxpy(float alpha, global float* x, local float* tile, int n, global float* y)\n{\n    y[get_global_id(0)] += alpha * x[get_global_id(0)];\n}\n\nkernel void shade(uint4 match, global uchar* queue)\n{\n}\n",
        )
    }
}
#[allow(clippy::too_many_arguments)]
impl shade {
    pub fn new(
        context: &::kernelgen::runtime::Context,
    ) -> ::core::result::Result<Self, ::kernelgen::runtime::KernelError> {
        ::core::result::Result::Ok(Self {
            base: ::kernelgen::runtime::KernelBase::new::<Self>(context)?,
        })
    }
    pub fn base(&self) -> &::kernelgen::runtime::KernelBase {
        &self.base
    }
    /// Builds the program for `device` and creates the kernel object.
    pub fn build(
        &mut self,
        device: ::kernelgen::runtime::Device,
    ) -> ::core::result::Result<(), ::kernelgen::runtime::KernelError> {
        self.base.build(device).map(|_| ())
    }
    fn dispatch(
        &mut self,
        queue: &::kernelgen::runtime::CommandQueue,
        r#match: uint4,
        queue_arg: &::kernelgen::runtime::Buffer<u8>,
        global: [usize; 3],
        local: [usize; 3],
        wait_list: &[::kernelgen::runtime::Event],
    ) -> ::core::result::Result<
        ::kernelgen::runtime::Event,
        ::kernelgen::runtime::KernelError,
    > {
        let mut bound_kernel = self.base.bind(queue)?;
        bound_kernel
            .set_arg(
                0,
                ::kernelgen::runtime::KernelArg::Bytes {
                    size: ::core::mem::size_of::<uint4>(),
                    value: ::core::ptr::addr_of!(r#match).cast(),
                },
            )?;
        bound_kernel
            .set_arg(1, ::kernelgen::runtime::KernelArg::Mem(queue_arg.mem()))?;
        bound_kernel.enqueue(queue, global, local, wait_list)
    }
    /// Launches over a 1-dimensional grid and waits for completion. A zero local size lets the runtime choose.
    pub fn run_1d(
        &mut self,
        queue: &::kernelgen::runtime::CommandQueue,
        r#match: uint4,
        queue_arg: &::kernelgen::runtime::Buffer<u8>,
        global: [usize; 1],
        local: [usize; 1],
        wait_list: &[::kernelgen::runtime::Event],
    ) -> ::core::result::Result<(), ::kernelgen::runtime::KernelError> {
        let event = self
            .dispatch(
                queue,
                r#match,
                queue_arg,
                [global[0], 0, 0],
                [local[0], 0, 0],
                wait_list,
            )?;
        event.wait()
    }
    /// Launches over a 1-dimensional grid and returns the completion event without waiting.
    pub fn run_1d_async(
        &mut self,
        queue: &::kernelgen::runtime::CommandQueue,
        r#match: uint4,
        queue_arg: &::kernelgen::runtime::Buffer<u8>,
        global: [usize; 1],
        local: [usize; 1],
        wait_list: &[::kernelgen::runtime::Event],
    ) -> ::core::result::Result<
        ::kernelgen::runtime::Event,
        ::kernelgen::runtime::KernelError,
    > {
        self.dispatch(
            queue,
            r#match,
            queue_arg,
            [global[0], 0, 0],
            [local[0], 0, 0],
            wait_list,
        )
    }
    /// Launches over a 2-dimensional grid and waits for completion. A zero local size lets the runtime choose.
    pub fn run_2d(
        &mut self,
        queue: &::kernelgen::runtime::CommandQueue,
        r#match: uint4,
        queue_arg: &::kernelgen::runtime::Buffer<u8>,
        global: [usize; 2],
        local: [usize; 2],
        wait_list: &[::kernelgen::runtime::Event],
    ) -> ::core::result::Result<(), ::kernelgen::runtime::KernelError> {
        let event = self
            .dispatch(
                queue,
                r#match,
                queue_arg,
                [global[0], global[1], 0],
                [local[0], local[1], 0],
                wait_list,
            )?;
        event.wait()
    }
    /// Launches over a 2-dimensional grid and returns the completion event without waiting.
    pub fn run_2d_async(
        &mut self,
        queue: &::kernelgen::runtime::CommandQueue,
        r#match: uint4,
        queue_arg: &::kernelgen::runtime::Buffer<u8>,
        global: [usize; 2],
        local: [usize; 2],
        wait_list: &[::kernelgen::runtime::Event],
    ) -> ::core::result::Result<
        ::kernelgen::runtime::Event,
        ::kernelgen::runtime::KernelError,
    > {
        self.dispatch(
            queue,
            r#match,
            queue_arg,
            [global[0], global[1], 0],
            [local[0], local[1], 0],
            wait_list,
        )
    }
    /// Launches over a 3-dimensional grid and waits for completion. A zero local size lets the runtime choose.
    pub fn run_3d(
        &mut self,
        queue: &::kernelgen::runtime::CommandQueue,
        r#match: uint4,
        queue_arg: &::kernelgen::runtime::Buffer<u8>,
        global: [usize; 3],
        local: [usize; 3],
        wait_list: &[::kernelgen::runtime::Event],
    ) -> ::core::result::Result<(), ::kernelgen::runtime::KernelError> {
        let event = self
            .dispatch(
                queue,
                r#match,
                queue_arg,
                [global[0], global[1], global[2]],
                [local[0], local[1], local[2]],
                wait_list,
            )?;
        event.wait()
    }
    /// Launches over a 3-dimensional grid and returns the completion event without waiting.
    pub fn run_3d_async(
        &mut self,
        queue: &::kernelgen::runtime::CommandQueue,
        r#match: uint4,
        queue_arg: &::kernelgen::runtime::Buffer<u8>,
        global: [usize; 3],
        local: [usize; 3],
        wait_list: &[::kernelgen::runtime::Event],
    ) -> ::core::result::Result<
        ::kernelgen::runtime::Event,
        ::kernelgen::runtime::KernelError,
    > {
        self.dispatch(
            queue,
            r#match,
            queue_arg,
            [global[0], global[1], global[2]],
            [local[0], local[1], local[2]],
            wait_list,
        )
    }
}
