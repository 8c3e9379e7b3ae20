//! Texture samplers

use crate::json_enum;
use crate::schema::{Extensions, Value};
use crate::schema_object;

json_enum! {
    /// Magnification filter.
    pub enum MagFilter: numeric {
        Nearest = 9728,
        Linear = 9729,
    }
}

json_enum! {
    /// Minification filter.
    pub enum MinFilter: numeric {
        Nearest = 9728,
        Linear = 9729,
        NearestMipmapNearest = 9984,
        LinearMipmapNearest = 9985,
        NearestMipmapLinear = 9986,
        LinearMipmapLinear = 9987,
    }
}

json_enum! {
    /// Texture coordinate wrapping mode.
    pub enum WrapMode: numeric {
        ClampToEdge = 33071,
        MirroredRepeat = 33648,
        Repeat = 10497,
    }
}

schema_object! {
    /// Texture filtering and wrapping.
    ///
    /// Filters are optional on the wire; wrap modes default to `Repeat` and are
    /// only written when they differ from it.
    pub struct Sampler {
        pub name: Option<String> = None => "name" (ignorable),
        pub mag_filter: Option<MagFilter> = None => "magFilter" (ignorable),
        pub min_filter: Option<MinFilter> = None => "minFilter" (ignorable),
        pub wrap_s: WrapMode = WrapMode::Repeat => "wrapS" (ignorable when WrapMode::Repeat),
        pub wrap_t: WrapMode = WrapMode::Repeat => "wrapT" (ignorable when WrapMode::Repeat),
        pub extensions: Extensions = Extensions::new() => "extensions" (ignorable),
        pub extras: Value = Value::Null => "extras" (ignorable),
    }
}
