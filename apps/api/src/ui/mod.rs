// Server-rendered page: input form, inline validation, result display,
// download, and the configuration-error page shown when no API key exists.

pub mod handlers;
pub mod pages;
