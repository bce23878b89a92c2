pub(crate) mod cpu;
pub(crate) mod frame;
pub(crate) mod recording;
pub(crate) mod surface;
