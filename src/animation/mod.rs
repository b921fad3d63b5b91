pub(crate) mod attr;
pub(crate) mod ease;
pub(crate) mod scheduler;
pub(crate) mod transition;
