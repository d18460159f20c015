use std::sync::Arc;

use folio_content::ContentSnapshot;
use folio_core::messages::MessageCatalog;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Everything here is immutable after startup and behind `Arc`, so the state
/// is cheaply cloneable and the handlers are pure derivations over it.
/// Configuration stays outside: the router consumes it at build time and
/// nothing needs it per request.
#[derive(Clone)]
pub struct AppState {
    /// The startup content snapshot (all locales).
    pub content: Arc<ContentSnapshot>,
    /// Localized interface strings.
    pub messages: Arc<MessageCatalog>,
}
