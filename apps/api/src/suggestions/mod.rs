// Content suggestions: one prompt per section kind, one model call, split by kind.

pub mod generator;
pub mod handlers;
pub mod kind;
pub mod prompts;
