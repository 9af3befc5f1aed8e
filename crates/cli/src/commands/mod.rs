pub mod generate;
pub mod init;
pub mod inspect;

pub use generate::generate_command;
pub use init::init_command;
pub use inspect::inspect_command;
