pub(crate) mod category;
pub(crate) mod group;
pub(crate) mod key;
