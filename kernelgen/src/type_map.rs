use std::borrow::Cow;

/// Host name of the opaque device-memory handle used for images and samplers.
pub const MEMORY_HANDLE_TYPE: &str = "Mem";

/// Base types whose vector forms have host counterparts (`float4`, ...).
const VECTOR_HOST_BASE_TYPES: &[&str] = &[
    "char", "uchar", "short", "ushort", "int", "uint", "long", "ulong", "float",
    "double",
];

fn scalar_host_type(dialect_type: &str) -> Option<&'static str> {
    Some(match dialect_type {
        "bool" => "bool",
        "char" => "i8",
        "uchar" => "u8",
        "short" => "i16",
        "ushort" => "u16",
        "int" => "i32",
        "uint" => "u32",
        "long" => "i64",
        "ulong" => "u64",
        "float" => "f32",
        "double" => "f64",
        "size_t" => "usize",
        "void" => "c_void",
        "image1d_t" | "image1d_array_t" | "image1d_buffer_t" | "image2d_t"
        | "image2d_array_t" | "image2d_depth_t" | "image3d_t" | "sampler_t" => {
            MEMORY_HANDLE_TYPE
        },
        _ => return None,
    })
}

/// Maps a kernel dialect type and vector width to the host type name.
///
/// Total and pure: types absent from the table come back unchanged and are
/// left for the host compiler to resolve.
pub fn map_type(
    dialect_type: &str,
    vector_width: u8,
) -> Cow<'_, str> {
    if vector_width == 0 {
        return match scalar_host_type(dialect_type) {
            Some(host_type) => Cow::Borrowed(host_type),
            None => Cow::Borrowed(dialect_type),
        };
    }

    if VECTOR_HOST_BASE_TYPES.contains(&dialect_type) {
        Cow::Owned(format!("{dialect_type}{vector_width}"))
    } else {
        Cow::Borrowed(dialect_type)
    }
}
