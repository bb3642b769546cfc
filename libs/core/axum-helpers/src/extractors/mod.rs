//! Custom Axum extractors.

mod object_id_path;
mod validated_json;

pub use object_id_path::ObjectIdPath;
pub use validated_json::ValidatedJson;
