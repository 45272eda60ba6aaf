//! Reusable UI components

pub mod chat_input;
pub mod chat_message;
pub mod loading;
pub mod logo;
pub mod sidebar;
pub mod toast;

pub use chat_input::ChatInput;
pub use chat_message::ChatMessage;
pub use loading::{LoadingDots, TypingIndicator};
pub use logo::{BrandLogo, NexLogo};
pub use sidebar::Sidebar;
pub use toast::ToastHost;
