//! Screen descriptors and the pure sequence assembler.

mod composer;
mod screen;

pub use composer::{compose, compose_returning, TOTAL_STEPS};
pub use screen::{
    ChecklistRow, PermissionKind, ScreenContent, ScreenDescriptor, ScreenStage, ScreenView,
};
