pub mod site;
pub mod page;

pub use site::build_site;
