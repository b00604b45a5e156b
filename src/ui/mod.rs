pub mod drivers;
pub mod wizard;

pub use wizard::prompt_config;
