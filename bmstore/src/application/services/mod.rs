// src/application/services/mod.rs
pub mod bookmark_manager;
pub mod bookmark_service;
pub mod bookmark_service_impl;
pub mod export_service;
pub mod export_service_impl;
pub mod folder_service;
pub mod folder_service_impl;
pub mod lookup_service;
pub mod lookup_service_impl;
pub mod reparent_service;
pub mod reparent_service_impl;
