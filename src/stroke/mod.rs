pub(crate) mod component;
pub(crate) mod shapes;
pub(crate) mod weight;
