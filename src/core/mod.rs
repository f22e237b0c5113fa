// Core domain layer
pub mod layout;
pub mod mode;
pub mod models;
pub mod naming;
pub mod plugin;
pub mod rules;
pub mod services;
pub mod settings;

pub use layout::*;
pub use mode::*;
pub use models::*;
pub use naming::*;
pub use plugin::*;
pub use rules::*;
pub use services::*;
pub use settings::*;
