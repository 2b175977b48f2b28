pub mod invariants;
pub mod planner;
pub mod value_objects;

pub use invariants::validate_group_plan;
pub use planner::plan_group;
pub use value_objects::{
    RenameOutcome, RenamePlanEntry, RenameRecord, RenameRole, DEFAULT_LABEL_SUFFIX,
};
