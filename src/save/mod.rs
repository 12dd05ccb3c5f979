pub mod disk;
pub mod literal;

pub use disk::Disk;
pub use literal::Literal;
