pub(crate) mod api;
#[cfg(test)]
pub(crate) mod fake;
pub(crate) mod reconcile;
pub(crate) mod route53;
