pub(crate) mod bindings;
pub(crate) mod reconcile;
