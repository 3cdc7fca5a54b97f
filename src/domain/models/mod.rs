//! 领域实体

pub mod binding;
pub mod package_name;

pub use binding::{Binding, BindingList, MergeStrategy};
pub use package_name::PackageName;
