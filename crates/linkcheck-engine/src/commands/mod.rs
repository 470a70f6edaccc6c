//! Write-side operations. All of them require an `AdminSession`.

pub mod engine_command;
pub mod replace;
