pub mod config;
pub mod constants;
pub mod gateway;
pub mod session;

pub use config::{AppConfig, ConfigError};
pub use gateway::{GatewayReply, GeminiGateway, ResponseGateway};
pub use session::{Message, MessageRole, Phase, Session};
