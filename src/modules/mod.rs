pub mod breeds;
pub mod dogs;

use shelter_kernel::ModuleRegistry;

/// Register all project-specific modules with the registry
pub fn register_all(registry: &mut ModuleRegistry) {
    registry.register(breeds::create_module());
    registry.register(dogs::create_module());
}
