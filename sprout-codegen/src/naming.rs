//! Package and class naming conventions for the generated stack.
//!
//! Every generator derives its target package from the entity's base
//! namespace plus one of these conventional sub-package segments, and its
//! class name from the entity name plus a conventional suffix.

use sprout_meta::TypeDescriptor;

pub const DTO_SEGMENT: &str = "dto";
pub const MAPPER_SEGMENT: &str = "mapper";
pub const REPOSITORY_SEGMENT: &str = "repository";
pub const SERVICE_SEGMENT: &str = "service";
pub const CONTROLLER_SEGMENT: &str = "controller";
pub const EXCEPTION_SEGMENT: &str = "exception";
pub const ENTITY_SEGMENT: &str = "entity";
pub const SECURITY_SEGMENT: &str = "security";
pub const CONFIG_SEGMENT: &str = "config";

/// `<base>.<segment>`, e.g. `com.example.shop` + `dto` →
/// `com.example.shop.dto`.
pub fn sub_package(descriptor: &TypeDescriptor, segment: &str) -> String {
    format!("{}.{segment}", descriptor.base_namespace())
}

pub fn dto_class(descriptor: &TypeDescriptor) -> String {
    format!("{}Dto", descriptor.name())
}

pub fn mapper_class(descriptor: &TypeDescriptor) -> String {
    format!("{}Mapper", descriptor.name())
}

pub fn repository_class(descriptor: &TypeDescriptor) -> String {
    format!("{}Repository", descriptor.name())
}

pub fn service_class(descriptor: &TypeDescriptor) -> String {
    format!("{}Service", descriptor.name())
}

pub fn controller_class(descriptor: &TypeDescriptor) -> String {
    format!("{}Controller", descriptor.name())
}

/// REST base path, e.g. `/api/product`.
pub fn api_path(descriptor: &TypeDescriptor) -> String {
    format!("/api/{}", descriptor.path_segment())
}
