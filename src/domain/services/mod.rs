//! Domain Services
//!
//! Pure business logic. The template engine reads through the
//! `FileSystem` port and is otherwise I/O free.

mod environment;
mod template;

pub use environment::resolve_environment;
pub use template::{
    find_placeholders, placeholder_token, render_template, Substitutions, TemplateEngine,
    COMMIT_PLACEHOLDER, TIMESTAMP_PLACEHOLDER,
};
