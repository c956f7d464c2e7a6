//! Kernel pieces shared by the host and the domain packages.
//!
//! * [`registry`] merges domain descriptors into one [`Manifest`](gamma_domain::manifest::Manifest).
//! * [`store`] holds remote data with a compiled-in fallback.
//! * [`config`] loads layered configuration.
//!
//! ```rust
//! use gamma_domain::config::MergePolicy;
//! use gamma_domain::descriptor::{DomainDescriptor, RouteSpec};
//! use gamma_kernel::registry::ModuleRegistry;
//!
//! let faqs = DomainDescriptor::new("faqs").route(RouteSpec::new("faqs", "/faqs", "faqs/index"));
//!
//! let mut registry = ModuleRegistry::new();
//! registry.register(&faqs);
//! let manifest = registry.finish(MergePolicy::Strict).unwrap();
//! assert_eq!(manifest.routes.len(), 1);
//! ```

pub mod config;
pub mod registry;
pub mod store;

pub use gamma_domain as domain;
