pub mod fetch_service;
