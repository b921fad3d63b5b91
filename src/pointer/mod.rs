pub(crate) mod coordinator;
pub(crate) mod throttle;
