//! Host counterparts of the kernel dialect's vector types.
//!
//! Layouts follow the OpenCL host ABI: a vector is aligned to its size and
//! three-component vectors occupy the storage of four.

pub use std::ffi::c_void;

pub use super::Mem;

macro_rules! vector_types {
    ($($name:ident => [$elem:ty; $storage:literal], align($align:tt);)*) => {
        $(
            #[allow(non_camel_case_types)]
            #[derive(Debug, Clone, Copy, Default, PartialEq)]
            #[repr(C, align($align))]
            pub struct $name(pub [$elem; $storage]);

            impl From<[$elem; $storage]> for $name {
                fn from(lanes: [$elem; $storage]) -> Self {
                    Self(lanes)
                }
            }
        )*
    };
}

vector_types! {
    char2 => [i8; 2], align(2);
    char3 => [i8; 4], align(4);
    char4 => [i8; 4], align(4);
    char8 => [i8; 8], align(8);
    char16 => [i8; 16], align(16);
    uchar2 => [u8; 2], align(2);
    uchar3 => [u8; 4], align(4);
    uchar4 => [u8; 4], align(4);
    uchar8 => [u8; 8], align(8);
    uchar16 => [u8; 16], align(16);
    short2 => [i16; 2], align(4);
    short3 => [i16; 4], align(8);
    short4 => [i16; 4], align(8);
    short8 => [i16; 8], align(16);
    short16 => [i16; 16], align(32);
    ushort2 => [u16; 2], align(4);
    ushort3 => [u16; 4], align(8);
    ushort4 => [u16; 4], align(8);
    ushort8 => [u16; 8], align(16);
    ushort16 => [u16; 16], align(32);
    int2 => [i32; 2], align(8);
    int3 => [i32; 4], align(16);
    int4 => [i32; 4], align(16);
    int8 => [i32; 8], align(32);
    int16 => [i32; 16], align(64);
    uint2 => [u32; 2], align(8);
    uint3 => [u32; 4], align(16);
    uint4 => [u32; 4], align(16);
    uint8 => [u32; 8], align(32);
    uint16 => [u32; 16], align(64);
    long2 => [i64; 2], align(16);
    long3 => [i64; 4], align(32);
    long4 => [i64; 4], align(32);
    long8 => [i64; 8], align(64);
    long16 => [i64; 16], align(128);
    ulong2 => [u64; 2], align(16);
    ulong3 => [u64; 4], align(32);
    ulong4 => [u64; 4], align(32);
    ulong8 => [u64; 8], align(64);
    ulong16 => [u64; 16], align(128);
    float2 => [f32; 2], align(8);
    float3 => [f32; 4], align(16);
    float4 => [f32; 4], align(16);
    float8 => [f32; 8], align(32);
    float16 => [f32; 16], align(64);
    double2 => [f64; 2], align(16);
    double3 => [f64; 4], align(32);
    double4 => [f64; 4], align(32);
    double8 => [f64; 8], align(64);
    double16 => [f64; 16], align(128);
}
