mod adapters;
mod chat;
mod domain;
mod error;
mod fixtures;
mod transcript;

pub use adapters::{ChatModelProvider, ChatTurnRequest, ContactDraft, ContactRelay};
pub use chat::{
    system_instruction_for, ChatBridge, EMPTY_REPLY_FALLBACK, ERROR_REPLY, OFFLINE_REPLY,
};
pub use domain::{
    normalize_live_url, resolve_gallery_slides, Achievement, AssetCatalog, AssistantPersona,
    ChatMessage, ChatRole, Education, Experience, Portfolio, Profile, Project, ProjectLinks,
    SkillGroup, SkillKey, SocialLinks,
};
pub use error::CoreError;
pub use transcript::Transcript;
