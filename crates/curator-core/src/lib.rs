//! Core domain for the brand curator: the editable form, its validation, and
//! the flat CSV export consumed by the analysis service.

pub mod app_config;
pub mod config;
pub mod entity;
pub mod error;
pub mod export;
pub mod form;
pub mod platform;
pub mod validate;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use entity::{Entity, EntityId, EntityKind, EntityList};
pub use error::ConfigError;
pub use export::{brand_file_stem, export_file_name, serialize, serialize_form, CsvExport, CSV_HEADER};
pub use form::{load_form, parse_form, BrandForm, CuratorEntry, CuratorList, UseAi};
pub use platform::{Platform, SocialLinks};
pub use validate::{validate, FieldErrors};
