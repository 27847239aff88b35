//! Application services — the lifecycle use-cases.

pub mod configure;
pub mod lifecycle;
pub mod snap_query;
pub mod systemctl;

#[cfg(test)]
pub mod test_support;
