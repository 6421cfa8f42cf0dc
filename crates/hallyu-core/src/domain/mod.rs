pub mod group;
pub mod status;

pub use group::Group;
pub use status::GroupStatus;
