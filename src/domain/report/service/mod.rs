pub mod reporter_service;
