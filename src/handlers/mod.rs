// Handlers module

pub mod callback;
pub mod chat;

pub use callback::callback_handler;
pub use chat::chat_handler;
