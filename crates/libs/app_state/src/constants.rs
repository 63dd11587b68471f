/// Prefix for event-scoped photo collections in the document store.
///
/// Load-bearing: `/listar-eventos` strips exactly this prefix, and every
/// collection without it is treated as foreign and never listed.
pub const COLLECTION_PREFIX: &str = "fotos_";

/// Listen port used when the configuration leaves `api.port` unset.
pub const DEFAULT_PORT: u32 = 8000;
