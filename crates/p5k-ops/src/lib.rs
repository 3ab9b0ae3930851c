pub mod ops_boot;
pub mod ops_build;
pub mod ops_launch;
